use std::time::Duration;

use dioxus::{document, prelude::*};
use tokio::time::sleep;

use crate::{
    app::reload_dataset,
    domain::{
        classify_item, rank_materials, AppState, Recommendation, RecommendationRecord,
        ShipmentRequest,
    },
    infra::history::{HistoryStore, JsonHistoryStore},
    ui::components::{
        ranked_table::{RankedRow, RankedTable},
        toast::{push_toast, ToastKind, ToastMessage},
    },
    util::unix_now,
};

#[component]
pub fn RecommendPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut item_input = use_signal(String::new);
    let mut weight_input = use_signal(String::new);
    let mut units_input = use_signal(String::new);
    let mut fragility_input = use_signal(|| "L".to_string());
    let result = use_signal(|| None::<(ShipmentRequest, Recommendation)>);

    let dataset_loaded = state.with(|st| st.dataset.is_loaded());
    let material_count = state.with(|st| st.materials.len());

    let on_submit = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        let mut result = result.clone();
        move |evt: FormEvent| {
            evt.prevent_default();

            let request = match ShipmentRequest::parse(
                &item_input(),
                &weight_input(),
                &units_input(),
                &fragility_input(),
            ) {
                Ok(request) => request,
                Err(err) => {
                    push_toast(toasts.clone(), ToastKind::Error, err.to_string());
                    return;
                }
            };

            let recommendation = state.with(|st| rank_materials(&st.materials, &request, &st.policy));

            if let Some(best) = recommendation.best.as_ref() {
                let record = RecommendationRecord::new(&request, best, unix_now());
                let store = JsonHistoryStore::at_default_location();
                match store.append(&record) {
                    Ok(()) => {
                        state.with_mut(|st| st.history.push(record));
                        push_toast(
                            toasts.clone(),
                            ToastKind::Success,
                            format!("Recommended {} for {}.", best.material_name, request.item_name),
                        );
                    }
                    Err(err) => {
                        push_toast(
                            toasts.clone(),
                            ToastKind::Warning,
                            format!("Recommendation computed but not saved: {err}"),
                        );
                    }
                }
            } else {
                push_toast(
                    toasts.clone(),
                    ToastKind::Info,
                    "No eligible materials for this shipment; nothing was recorded.",
                );
            }

            result.set(Some((request, recommendation)));
        }
    };

    let on_reload = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            reload_dataset(state.clone(), toasts.clone());
        }
    };

    let outcome = result();
    let quick_copy = outcome
        .as_ref()
        .map(|(request, recommendation)| build_summary_text(request, recommendation))
        .unwrap_or_default();
    let summary_copied = use_signal(|| false);
    let on_copy_summary = {
        let quick_copy = quick_copy.clone();
        let mut summary_copied = summary_copied.clone();
        move |_| {
            if quick_copy.trim().is_empty() {
                return;
            }
            if copy_text_to_clipboard(&quick_copy) {
                summary_copied.set(true);
                let mut summary_copied = summary_copied.clone();
                spawn(async move {
                    sleep(Duration::from_secs(2)).await;
                    summary_copied.set(false);
                });
            }
        }
    };

    rsx! {
        div { class: "space-y-6",
            header {
                class: "flex flex-wrap items-start justify-between gap-4",
                div {
                    h1 { class: "text-2xl font-semibold text-slate-100", "Shipment Scoring" }
                    p {
                        class: "text-sm text-slate-400",
                        "Ranks packaging materials by cost, carbon footprint, biodegradability and strength."
                    }
                }
                span { class: "text-xs text-slate-500", "{material_count} materials loaded" }
            }

            if !dataset_loaded {
                div {
                    class: "flex items-center justify-between gap-3 rounded-lg border border-amber-500/30 bg-amber-500/10 px-3 py-2 text-xs text-amber-200",
                    span { "Materials dataset missing or unreadable. Recommendations are unavailable." }
                    button {
                        class: "rounded-md border border-amber-500/40 px-2 py-1 font-semibold uppercase tracking-wide hover:bg-amber-500/10",
                        onclick: on_reload,
                        "Retry"
                    }
                }
            }

            form {
                class: "flex flex-wrap items-end gap-4 rounded-xl border border-slate-800 bg-slate-900/40 px-4 py-4",
                onsubmit: on_submit,
                div { class: "flex-1 min-w-[200px]",
                    label { class: "block text-xs font-semibold uppercase text-slate-500", "Item" }
                    input {
                        class: "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-emerald-500 focus:outline-none",
                        value: item_input(),
                        oninput: move |evt| item_input.set(evt.value().to_string()),
                        placeholder: "e.g. Mango Crate",
                    }
                }
                div { class: "w-32",
                    label { class: "block text-xs font-semibold uppercase text-slate-500", "Unit Weight (kg)" }
                    input {
                        class: "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-emerald-500 focus:outline-none",
                        inputmode: "decimal",
                        value: weight_input(),
                        oninput: move |evt| weight_input.set(evt.value().to_string()),
                        placeholder: "1.5",
                    }
                }
                div { class: "w-28",
                    label { class: "block text-xs font-semibold uppercase text-slate-500", "Units" }
                    input {
                        class: "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-emerald-500 focus:outline-none",
                        inputmode: "numeric",
                        value: units_input(),
                        oninput: move |evt| units_input.set(evt.value().to_string()),
                        placeholder: "10",
                    }
                }
                div { class: "w-36",
                    label { class: "block text-xs font-semibold uppercase text-slate-500", "Fragility" }
                    select {
                        class: "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-emerald-500 focus:outline-none",
                        value: fragility_input(),
                        onchange: move |evt| fragility_input.set(evt.value().to_string()),
                        option { value: "L", "Low" }
                        option { value: "M", "Medium" }
                        option { value: "H", "High" }
                    }
                }
                button {
                    class: "rounded-lg bg-emerald-500 px-4 py-2 text-sm font-semibold text-white hover:bg-emerald-400",
                    r#type: "submit",
                    "Recommend"
                }
            }

            if let Some((request, recommendation)) = outcome {
                ResultsView {
                    request: request.clone(),
                    recommendation: recommendation.clone(),
                    quick_copy: quick_copy.clone(),
                    copied: summary_copied(),
                    on_copy: on_copy_summary,
                }
            }
        }
    }
}

#[component]
fn ResultsView(
    request: ShipmentRequest,
    recommendation: Recommendation,
    quick_copy: String,
    copied: bool,
    on_copy: EventHandler<MouseEvent>,
) -> Element {
    let category = classify_item(&request.item_name);
    let rows: Vec<RankedRow> = recommendation
        .ranked
        .iter()
        .enumerate()
        .map(|(index, candidate)| RankedRow {
            rank: index + 1,
            material_name: candidate.material_name.clone(),
            total_cost: candidate.total_cost,
            total_co2: candidate.total_co2,
            strength_mpa: candidate.tensile_strength_mpa,
            score: candidate.score,
            reasons: candidate.reasons.join(", "),
        })
        .collect();

    rsx! {
        div { class: "space-y-4",
            if let Some(best) = recommendation.best.as_ref() {
                div {
                    class: "rounded-xl border border-emerald-500/40 bg-emerald-500/10 p-4 text-emerald-100",
                    div { class: "flex items-center justify-between gap-3",
                        h2 { class: "text-sm font-semibold uppercase tracking-wide", "Best Match" }
                        span {
                            class: "rounded-full border border-emerald-500/40 px-2 py-0.5 text-xs",
                            "{category.label()}"
                        }
                    }
                    p { class: "mt-1 text-lg font-semibold", "{best.material_name}" }
                    p {
                        class: "text-sm opacity-90",
                        {format!(
                            "Score {:.2} · Total cost {:.2} · Total CO2 {:.2} kg · {} x {:.2} kg ({})",
                            best.score,
                            best.total_cost,
                            best.total_co2,
                            request.unit_count,
                            request.unit_weight_kg,
                            request.fragility.label(),
                        )}
                    }
                    ul { class: "mt-2 space-y-1 text-xs opacity-80",
                        for reason in best.reasons.iter() {
                            li { "• {reason}" }
                        }
                    }
                }
            } else {
                div {
                    class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6 text-sm text-slate-400",
                    "No recommendation available: no material in the dataset satisfies this shipment."
                }
            }

            RankedTable { rows }

            if !quick_copy.is_empty() {
                section {
                    class: "rounded-xl border border-slate-800 bg-slate-900/40 p-4",
                    div { class: "flex items-center justify-between gap-3",
                        h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Quick Summary" }
                        button {
                            class: "rounded-md border border-slate-700 px-3 py-1 text-xs font-semibold uppercase tracking-wide text-slate-200 hover:border-emerald-500 hover:text-emerald-200",
                            onclick: move |evt| on_copy.call(evt),
                            if copied {
                                "Copied!"
                            } else {
                                "Copy"
                            }
                        }
                    }
                    textarea {
                        class: "mt-3 h-28 w-full rounded-lg border border-slate-800 bg-slate-950 p-3 text-sm text-slate-200",
                        value: quick_copy.clone(),
                        readonly: true,
                    }
                    p { class: "mt-2 text-xs text-slate-500", "Copy and share this recommendation with your packing team." }
                }
            }
        }
    }
}

fn build_summary_text(request: &ShipmentRequest, recommendation: &Recommendation) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "{} ({} x {:.2} kg, fragility {})",
        request.item_name,
        request.unit_count,
        request.unit_weight_kg,
        request.fragility.label()
    ));
    match recommendation.best.as_ref() {
        Some(best) => {
            lines.push(format!(
                "Best: {} — score {:.2}, cost {:.2}, CO2 {:.2} kg",
                best.material_name, best.score, best.total_cost, best.total_co2
            ));
            if !best.reasons.is_empty() {
                lines.push(format!("Why: {}", best.reasons.join(", ")));
            }
            for (index, candidate) in recommendation.ranked.iter().enumerate().skip(1) {
                lines.push(format!(
                    "{}. {} — score {:.2}",
                    index + 1,
                    candidate.material_name,
                    candidate.score
                ));
            }
        }
        None => lines.push("No recommendation available.".to_string()),
    }
    lines.join("\n")
}

fn copy_text_to_clipboard(text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }
    let payload = serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string());
    let script = format!(
        r#"(async () => {{
            const data = {payload};
            try {{
                if (navigator.clipboard && navigator.clipboard.writeText) {{
                    await navigator.clipboard.writeText(data);
                    return true;
                }}
            }} catch (_err) {{
                // fallback
            }}
            try {{
                const textarea = document.createElement('textarea');
                textarea.value = data;
                textarea.style.position = 'fixed';
                textarea.style.opacity = '0';
                document.body.appendChild(textarea);
                textarea.focus();
                textarea.select();
                const ok = document.execCommand('copy');
                document.body.removeChild(textarea);
                return ok;
            }} catch (_err) {{
                return false;
            }}
        }})()"#
    );
    let eval = document::eval(&script);
    spawn(async move {
        let _ = eval.await;
    });
    true
}
