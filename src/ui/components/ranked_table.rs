use dioxus::prelude::*;

use super::score_badge::ScoreBadge;

/// One display row of the top-N ranking.
#[derive(Clone, PartialEq)]
pub struct RankedRow {
    pub rank: usize,
    pub material_name: String,
    pub total_cost: f64,
    pub total_co2: f64,
    pub strength_mpa: f64,
    pub score: f64,
    pub reasons: String,
}

#[component]
pub fn RankedTable(rows: Vec<RankedRow>) -> Element {
    let is_empty = rows.is_empty();
    rsx! {
        div {
            class: "overflow-hidden rounded-xl border border-slate-800 bg-slate-900/40",
            table {
                class: "min-w-full divide-y divide-slate-800 text-sm",
                thead {
                    class: "text-left text-xs uppercase tracking-wide text-slate-500",
                    tr {
                        th { class: "px-4 py-3 font-medium", "#" }
                        th { class: "px-4 py-3 font-medium", "Material" }
                        th { class: "px-4 py-3 font-medium text-right", "Total Cost" }
                        th { class: "px-4 py-3 font-medium text-right", "Total CO2 (kg)" }
                        th { class: "px-4 py-3 font-medium text-right", "Strength (MPa)" }
                        th { class: "px-4 py-3 font-medium", "Score" }
                    }
                }
                tbody {
                    class: "divide-y divide-slate-800",
                    for row in rows {
                        RankedRowView { row }
                    }
                    if is_empty {
                        tr {
                            td {
                                class: "px-4 py-6 text-center text-sm text-slate-500",
                                colspan: "6",
                                "No eligible materials for this shipment."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RankedRowView(row: RankedRow) -> Element {
    let highlight = if row.rank == 1 {
        "bg-emerald-500/5"
    } else {
        "hover:bg-slate-800/40"
    };
    rsx! {
        tr {
            class: "transition-colors {highlight}",
            td { class: "px-4 py-3 text-slate-500", "{row.rank}" }
            td { class: "px-4 py-3 font-medium text-slate-100", "{row.material_name}" }
            td { class: "px-4 py-3 text-right text-slate-200", {format!("{:.2}", row.total_cost)} }
            td { class: "px-4 py-3 text-right text-slate-200", {format!("{:.2}", row.total_co2)} }
            td { class: "px-4 py-3 text-right text-slate-200", {format!("{:.2}", row.strength_mpa)} }
            td {
                class: "px-4 py-3",
                ScoreBadge { value: row.score }
            }
        }
        if !row.reasons.is_empty() {
            tr {
                td { class: "px-4 pb-3 text-xs text-slate-500", colspan: "6", "Why: {row.reasons}" }
            }
        }
    }
}
