use dioxus::prelude::*;

use crate::{
    domain::{average_score, co2_reduction_pct, cost_savings_pct, material_usage, AppState},
    ui::components::kpi_card::KpiCard,
};

const USAGE_LIMIT: usize = 10;

#[component]
pub fn InsightsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let records = state.with(|st| st.history.clone());

    if records.is_empty() {
        return rsx! {
            div {
                class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6 text-sm text-slate-400",
                "No recommendations recorded yet. Insights appear after the first scored shipment."
            }
        };
    }

    let co2_reduction = co2_reduction_pct(&records);
    let cost_savings = cost_savings_pct(&records);
    let avg_score = average_score(&records);
    let usage = material_usage(&records, USAGE_LIMIT);

    rsx! {
        div { class: "space-y-6",
            header {
                h1 { class: "text-2xl font-semibold text-slate-100", "Sustainability Insights" }
                p {
                    class: "text-sm text-slate-400",
                    "Aggregates over the recorded recommendation history."
                }
            }

            section {
                class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-4",
                KpiCard {
                    title: "CO2 Reduction".to_string(),
                    value: format!("{co2_reduction:.2}%"),
                    description: Some("Mean shipment CO2 vs the worst recorded one".to_string()),
                }
                KpiCard {
                    title: "Cost Savings".to_string(),
                    value: format!("{cost_savings:.2}%"),
                    description: Some("Mean shipment cost vs the most expensive one".to_string()),
                }
                KpiCard {
                    title: "Recommendations".to_string(),
                    value: records.len().to_string(),
                    description: Some("Rows in the history store".to_string()),
                }
                KpiCard {
                    title: "Average Score".to_string(),
                    value: format!("{avg_score:.2}"),
                    description: Some("Composite sustainability score (0-100)".to_string()),
                }
            }

            section {
                class: "rounded-xl border border-slate-800 bg-slate-900/40 p-4",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Material Usage" }
                table {
                    class: "mt-3 w-full divide-y divide-slate-800 text-sm",
                    thead {
                        class: "text-left text-xs uppercase tracking-wide text-slate-500",
                        tr {
                            th { class: "py-2", "Material" }
                            th { class: "py-2 text-right", "Times Recommended" }
                        }
                    }
                    tbody {
                        class: "divide-y divide-slate-900/60",
                        for (material, count) in usage {
                            tr {
                                td { class: "py-2 text-slate-200", "{material}" }
                                td { class: "py-2 text-right text-slate-300", "{count}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
