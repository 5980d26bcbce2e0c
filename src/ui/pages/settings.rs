use std::time::SystemTime;

use dioxus::prelude::*;

use crate::{
    app::{persist_user_state, reload_dataset},
    domain::{AppState, DatasetStatus, ScoringPolicy},
    infra::dataset::DATASET_PATH_ENV,
    ui::components::toast::{push_toast, ToastKind, ToastMessage},
    util::version::{check_for_update, version_label, APP_NAME, APP_REPO_URL},
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let initial_policy = state.with(|st| st.policy.clone());

    let mut eco_input = use_signal(|| format!("{:.2}", initial_policy.eco_weight));
    let mut cost_input = use_signal(|| format!("{:.2}", initial_policy.cost_weight));
    let mut biodeg_input = use_signal(|| format!("{:.2}", initial_policy.biodeg_weight));
    let mut strength_input = use_signal(|| format!("{:.2}", initial_policy.strength_weight));
    let mut frag_low_input = use_signal(|| format!("{:.1}", initial_policy.fragility_low));
    let mut frag_medium_input = use_signal(|| format!("{:.1}", initial_policy.fragility_medium));
    let mut frag_high_input = use_signal(|| format!("{:.1}", initial_policy.fragility_high));
    let mut strength_per_kg_input = use_signal(|| format!("{:.1}", initial_policy.strength_per_kg));

    let mut update_status = use_signal(|| None::<String>);

    let dataset_lines = state.with(|st| dataset_description(&st.dataset));

    let on_apply = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let top_n = state.with(|st| st.policy.top_n);
            let parsed = parse_policy(
                eco_input(),
                cost_input(),
                biodeg_input(),
                strength_input(),
                frag_low_input(),
                frag_medium_input(),
                frag_high_input(),
                strength_per_kg_input(),
                top_n,
            );

            match parsed {
                Ok(policy) => {
                    state.with_mut(|st| st.policy = policy);
                    persist_user_state(&state);
                    push_toast(toasts.clone(), ToastKind::Success, "Updated scoring policy.");
                }
                Err(message) => {
                    push_toast(toasts.clone(), ToastKind::Error, message);
                }
            }
        }
    };

    let on_reset = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let defaults = ScoringPolicy::default();
            eco_input.set(format!("{:.2}", defaults.eco_weight));
            cost_input.set(format!("{:.2}", defaults.cost_weight));
            biodeg_input.set(format!("{:.2}", defaults.biodeg_weight));
            strength_input.set(format!("{:.2}", defaults.strength_weight));
            frag_low_input.set(format!("{:.1}", defaults.fragility_low));
            frag_medium_input.set(format!("{:.1}", defaults.fragility_medium));
            frag_high_input.set(format!("{:.1}", defaults.fragility_high));
            strength_per_kg_input.set(format!("{:.1}", defaults.strength_per_kg));
            state.with_mut(|st| st.policy = defaults);
            persist_user_state(&state);
            push_toast(
                toasts.clone(),
                ToastKind::Info,
                "Restored the default scoring policy.",
            );
        }
    };

    let on_reload_dataset = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            reload_dataset(state.clone(), toasts.clone());
        }
    };

    let on_check_update = move |_| {
        update_status.set(Some("Checking...".to_string()));
        let mut update_status = update_status.clone();
        spawn(async move {
            match check_for_update().await {
                Ok(info) => update_status.set(Some(info.to_string())),
                Err(err) => update_status.set(Some(format!("Update check failed: {err}"))),
            }
        });
    };

    rsx! {
        div { class: "space-y-8",
            section {
                class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Scoring Policy" }
                p {
                    class: "mt-2 text-xs text-slate-500",
                    "Sub-score weights must sum to 1.0. The strength requirement is weight x factor x fragility multiplier."
                }
                div { class: "mt-4 grid gap-4 sm:grid-cols-2",
                    PolicyField { label: "Eco weight", value: eco_input(), oninput: move |v| eco_input.set(v) }
                    PolicyField { label: "Cost weight", value: cost_input(), oninput: move |v| cost_input.set(v) }
                    PolicyField { label: "Biodegradability weight", value: biodeg_input(), oninput: move |v| biodeg_input.set(v) }
                    PolicyField { label: "Strength weight", value: strength_input(), oninput: move |v| strength_input.set(v) }
                    PolicyField { label: "Fragility multiplier (Low)", value: frag_low_input(), oninput: move |v| frag_low_input.set(v) }
                    PolicyField { label: "Fragility multiplier (Medium)", value: frag_medium_input(), oninput: move |v| frag_medium_input.set(v) }
                    PolicyField { label: "Fragility multiplier (High)", value: frag_high_input(), oninput: move |v| frag_high_input.set(v) }
                    PolicyField { label: "Required strength (MPa per kg)", value: strength_per_kg_input(), oninput: move |v| strength_per_kg_input.set(v) }
                }
                div { class: "mt-4 flex gap-3",
                    button { class: "rounded-lg bg-emerald-500 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-white hover:bg-emerald-400", onclick: on_apply, "Apply" }
                    button { class: "rounded-lg border border-slate-600 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-slate-200 hover:bg-slate-800", onclick: on_reset, "Reset Defaults" }
                }
            }

            section {
                class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Materials Dataset" }
                ul {
                    class: "mt-3 space-y-2 text-sm text-slate-300",
                    for line in dataset_lines {
                        li { class: "rounded-lg border border-slate-800 bg-slate-900/60 px-3 py-2", "{line}" }
                    }
                }
                p {
                    class: "mt-3 text-xs text-slate-500",
                    "Set {DATASET_PATH_ENV} to point the app at a different materials CSV."
                }
                button {
                    class: "mt-4 rounded-lg border border-emerald-500/40 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-emerald-200 hover:bg-emerald-500/10",
                    onclick: on_reload_dataset,
                    "Reload Dataset"
                }
            }

            section {
                class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "About" }
                p { class: "mt-2 text-sm text-slate-300", "{APP_NAME} {version_label()}" }
                a {
                    href: APP_REPO_URL,
                    target: "_blank",
                    rel: "noreferrer",
                    class: "mt-1 inline-block text-xs text-emerald-300 hover:text-emerald-100",
                    "{APP_REPO_URL}"
                }
                div { class: "mt-3 flex items-center gap-3",
                    button {
                        class: "rounded-lg border border-slate-600 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-slate-200 hover:bg-slate-800",
                        onclick: on_check_update,
                        "Check for Updates"
                    }
                    if let Some(status) = update_status() {
                        span { class: "text-xs text-slate-400", "{status}" }
                    }
                }
            }
        }
    }
}

#[component]
fn PolicyField(label: &'static str, value: String, oninput: EventHandler<String>) -> Element {
    rsx! {
        div {
            label { class: "block text-xs font-semibold uppercase text-slate-500", "{label}" }
            input {
                class: "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-emerald-500 focus:outline-none",
                inputmode: "decimal",
                value: value,
                oninput: move |evt| oninput.call(evt.value().to_string()),
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn parse_policy(
    eco: String,
    cost: String,
    biodeg: String,
    strength: String,
    frag_low: String,
    frag_medium: String,
    frag_high: String,
    strength_per_kg: String,
    top_n: usize,
) -> Result<ScoringPolicy, String> {
    let field = |value: String, label: &str| -> Result<f64, String> {
        value
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("{label} must be numeric"))
    };

    let policy = ScoringPolicy {
        eco_weight: field(eco, "Eco weight")?,
        cost_weight: field(cost, "Cost weight")?,
        biodeg_weight: field(biodeg, "Biodegradability weight")?,
        strength_weight: field(strength, "Strength weight")?,
        fragility_low: field(frag_low, "Low multiplier")?,
        fragility_medium: field(frag_medium, "Medium multiplier")?,
        fragility_high: field(frag_high, "High multiplier")?,
        strength_per_kg: field(strength_per_kg, "Strength per kg")?,
        top_n,
    };
    policy.validate()?;
    Ok(policy)
}

fn dataset_description(status: &DatasetStatus) -> Vec<String> {
    match status {
        DatasetStatus::NotLoaded => vec!["Dataset not loaded yet.".to_string()],
        DatasetStatus::Loaded {
            path,
            rows,
            skipped,
            loaded_at,
        } => {
            let mut lines = vec![
                format!("Source: {path}"),
                format!("{rows} materials ({skipped} rows skipped)"),
                format!("Loaded {} ago", humanize_age(*loaded_at)),
            ];
            if *rows == 0 {
                lines.push("Dataset is empty; no recommendations can be made.".to_string());
            }
            lines
        }
        DatasetStatus::Failed(message) => vec![format!("Load failed: {message}")],
    }
}

fn humanize_age(since: SystemTime) -> String {
    let secs = since.elapsed().unwrap_or_default().as_secs();
    if secs < 60 {
        format!("{secs}s")
    } else if secs < 3_600 {
        format!("{}m", secs / 60)
    } else if secs < 86_400 {
        format!("{}h", secs / 3_600)
    } else {
        format!("{}d", secs / 86_400)
    }
}
