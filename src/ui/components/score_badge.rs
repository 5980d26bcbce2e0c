use dioxus::prelude::*;

/// Colored pill for a 0-100 sustainability score.
#[component]
pub fn ScoreBadge(value: f64) -> Element {
    let (label, color) = match value {
        v if v >= 75.0 => (
            "Strong",
            "bg-emerald-500/10 text-emerald-300 border-emerald-500/40",
        ),
        v if v >= 50.0 => (
            "Moderate",
            "bg-amber-500/10 text-amber-300 border-amber-500/40",
        ),
        v if v > 0.0 => ("Weak", "bg-rose-500/10 text-rose-300 border-rose-500/40"),
        _ => ("N/A", "bg-slate-700/40 text-slate-300 border-slate-600/60"),
    };

    rsx! {
        span {
            class: "inline-flex items-center gap-1 rounded-full border px-2 py-0.5 text-xs font-medium {color}",
            "{label}"
            span { class: "opacity-70", {format!("{value:.1}")} }
        }
    }
}
