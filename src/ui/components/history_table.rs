use dioxus::prelude::*;

use super::score_badge::ScoreBadge;

/// One display row of the recommendation history, newest first.
#[derive(Clone, PartialEq)]
pub struct HistoryRow {
    pub id: String,
    pub recorded_display: String,
    pub item: String,
    pub material: String,
    pub weight_display: String,
    pub units: u32,
    pub fragility: &'static str,
    pub total_cost: f64,
    pub total_co2: f64,
    pub score: f64,
}

#[component]
pub fn HistoryTable(rows: Vec<HistoryRow>) -> Element {
    let is_empty = rows.is_empty();
    rsx! {
        div {
            class: "overflow-hidden rounded-xl border border-slate-800 bg-slate-900/40",
            table {
                class: "min-w-full divide-y divide-slate-800 text-sm",
                thead {
                    class: "text-left text-xs uppercase tracking-wide text-slate-500",
                    tr {
                        th { class: "px-4 py-3 font-medium", "Recorded" }
                        th { class: "px-4 py-3 font-medium", "Item" }
                        th { class: "px-4 py-3 font-medium", "Best Material" }
                        th { class: "px-4 py-3 font-medium text-right", "Weight" }
                        th { class: "px-4 py-3 font-medium text-right", "Units" }
                        th { class: "px-4 py-3 font-medium", "Fragility" }
                        th { class: "px-4 py-3 font-medium text-right", "Cost" }
                        th { class: "px-4 py-3 font-medium text-right", "CO2 (kg)" }
                        th { class: "px-4 py-3 font-medium", "Score" }
                    }
                }
                tbody {
                    class: "divide-y divide-slate-800",
                    for row in rows {
                        tr {
                            class: "hover:bg-slate-800/40 transition-colors",
                            td { class: "px-4 py-3 text-xs text-slate-500", "{row.recorded_display}" }
                            td { class: "px-4 py-3 font-medium text-slate-100", "{row.item}" }
                            td { class: "px-4 py-3 text-slate-200", "{row.material}" }
                            td { class: "px-4 py-3 text-right text-slate-200", "{row.weight_display}" }
                            td { class: "px-4 py-3 text-right text-slate-200", "{row.units}" }
                            td { class: "px-4 py-3 text-slate-300", "{row.fragility}" }
                            td { class: "px-4 py-3 text-right text-slate-200", {format!("{:.2}", row.total_cost)} }
                            td { class: "px-4 py-3 text-right text-slate-200", {format!("{:.2}", row.total_co2)} }
                            td {
                                class: "px-4 py-3",
                                ScoreBadge { value: row.score }
                            }
                        }
                    }
                    if is_empty {
                        tr {
                            td {
                                class: "px-4 py-6 text-center text-sm text-slate-500",
                                colspan: "9",
                                "No recommendations recorded yet. Score a shipment first."
                            }
                        }
                    }
                }
            }
        }
    }
}
