use dioxus::prelude::*;

use crate::{
    domain::AppState,
    infra::{
        history::{HistoryStore, JsonHistoryStore},
        report::{default_export_dir, export_history_csv, export_history_report, format_timestamp},
    },
    ui::components::{
        history_table::{HistoryRow, HistoryTable},
        toast::{push_toast, ToastKind, ToastMessage},
    },
};

#[component]
pub fn HistoryPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let records = state.with(|st| st.history.clone());
    let record_count = records.len();

    // Newest first for display; exports keep chronological order.
    let rows: Vec<HistoryRow> = records
        .iter()
        .rev()
        .map(|record| HistoryRow {
            id: record.id.clone(),
            recorded_display: format_timestamp(record.recorded_at),
            item: record.item.clone(),
            material: record.best_material.clone(),
            weight_display: format!("{:.2} kg", record.weight_kg),
            units: record.units,
            fragility: record.fragility.label(),
            total_cost: record.total_cost,
            total_co2: record.total_co2,
            score: record.score,
        })
        .collect();

    let on_export_csv = {
        let records = records.clone();
        let toasts = toasts.clone();
        move |_| {
            if records.is_empty() {
                push_toast(toasts.clone(), ToastKind::Warning, "Nothing to export yet.");
                return;
            }
            let path = default_export_dir().join("sustainability_history.csv");
            match export_history_csv(&records, &path) {
                Ok(()) => push_toast(
                    toasts.clone(),
                    ToastKind::Success,
                    format!("Spreadsheet saved to {}", path.display()),
                ),
                Err(err) => push_toast(
                    toasts.clone(),
                    ToastKind::Error,
                    format!("Spreadsheet export failed: {err}"),
                ),
            }
        }
    };

    let on_export_report = {
        let records = records.clone();
        let toasts = toasts.clone();
        move |_| {
            if records.is_empty() {
                push_toast(toasts.clone(), ToastKind::Warning, "Nothing to export yet.");
                return;
            }
            let path = default_export_dir().join("sustainability_report.html");
            match export_history_report(&records, &path) {
                Ok(()) => push_toast(
                    toasts.clone(),
                    ToastKind::Success,
                    format!("Report saved to {} (print it to PDF from any browser)", path.display()),
                ),
                Err(err) => push_toast(
                    toasts.clone(),
                    ToastKind::Error,
                    format!("Report export failed: {err}"),
                ),
            }
        }
    };

    let on_clear = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let store = JsonHistoryStore::at_default_location();
            match store.clear() {
                Ok(()) => {
                    state.with_mut(|st| st.history.clear());
                    push_toast(toasts.clone(), ToastKind::Info, "History cleared.");
                }
                Err(err) => push_toast(
                    toasts.clone(),
                    ToastKind::Error,
                    format!("Failed to clear history: {err}"),
                ),
            }
        }
    };

    rsx! {
        div { class: "space-y-6",
            header {
                class: "flex flex-wrap items-start justify-between gap-4",
                div {
                    h1 { class: "text-2xl font-semibold text-slate-100", "Recommendation History" }
                    p {
                        class: "text-sm text-slate-400",
                        "{record_count} recorded recommendation(s), newest first."
                    }
                }
                div { class: "flex gap-2",
                    button {
                        class: "rounded-md border border-emerald-500/40 px-3 py-2 text-xs font-semibold uppercase tracking-wide text-emerald-200 hover:bg-emerald-500/10",
                        onclick: on_export_csv,
                        "Export Spreadsheet"
                    }
                    button {
                        class: "rounded-md border border-sky-500/40 px-3 py-2 text-xs font-semibold uppercase tracking-wide text-sky-200 hover:bg-sky-500/10",
                        onclick: on_export_report,
                        "Export Report"
                    }
                    button {
                        class: "rounded-md border border-rose-500/40 px-3 py-2 text-xs font-semibold uppercase tracking-wide text-rose-200 hover:bg-rose-500/10",
                        onclick: on_clear,
                        "Clear"
                    }
                }
            }

            HistoryTable { rows }
        }
    }
}
