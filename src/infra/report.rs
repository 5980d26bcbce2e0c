//! History exports: a CSV spreadsheet and a printable HTML report.
//!
//! Pure rendering of already-computed records; the webview's native print
//! dialog turns the HTML report into a PDF when the user wants one.

use std::fs;
use std::path::{Path, PathBuf};

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::info;

use crate::domain::{average_score, co2_reduction_pct, cost_savings_pct, RecommendationRecord};

const EXPORT_DIR_NAME: &str = "ecopack-advisor";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to write spreadsheet: {0}")]
    Csv(#[from] csv::Error),
}

/// Exports land in the user's download directory when one exists, else in
/// the app's data directory.
pub fn default_export_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::data_local_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(EXPORT_DIR_NAME)
}

/// Write the full history as a spreadsheet, one row per recommendation.
pub fn export_history_csv(
    records: &[RecommendationRecord],
    path: &Path,
) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "Item",
        "Weight (kg)",
        "Units",
        "Fragility",
        "Best Material",
        "Total Cost",
        "Total CO2",
        "Strength (MPa)",
        "Sustainability Score",
        "Reasons",
        "Recorded At",
    ])?;

    for record in records {
        writer.write_record([
            record.item.clone(),
            format!("{:.2}", record.weight_kg),
            record.units.to_string(),
            record.fragility.code().to_string(),
            record.best_material.clone(),
            format!("{:.2}", record.total_cost),
            format!("{:.2}", record.total_co2),
            format!("{:.2}", record.strength_mpa),
            format!("{:.2}", record.score),
            record.reasons.join("; "),
            format_timestamp(record.recorded_at),
        ])?;
    }
    writer.flush()?;

    info!(
        "exported {} history rows to {}",
        records.len(),
        path.display()
    );
    Ok(())
}

/// Write the sustainability report as a self-contained printable HTML page.
pub fn export_history_report(
    records: &[RecommendationRecord],
    path: &Path,
) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, render_report_html(records))?;
    info!("exported sustainability report to {}", path.display());
    Ok(())
}

fn render_report_html(records: &[RecommendationRecord]) -> String {
    let co2_reduction = co2_reduction_pct(records);
    let cost_savings = cost_savings_pct(records);
    let avg_score = average_score(records);

    let mut rows = String::new();
    for record in records {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{:.2}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td>{:.2}</td><td>{:.2}</td><td>{:.2}</td><td>{}</td></tr>\n",
            escape_html(&record.item),
            record.weight_kg,
            record.units,
            record.fragility.label(),
            escape_html(&record.best_material),
            record.total_cost,
            record.total_co2,
            record.score,
            format_timestamp(record.recorded_at),
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Sustainability Report</title>
<style>
body {{ font-family: sans-serif; margin: 2rem; color: #1f2937; }}
h1 {{ font-size: 1.4rem; }}
table {{ border-collapse: collapse; width: 100%; margin-top: 1rem; }}
th, td {{ border: 1px solid #9ca3af; padding: 0.4rem 0.6rem; font-size: 0.85rem; text-align: left; }}
th {{ background: #e5e7eb; }}
.summary {{ margin: 1rem 0; }}
.summary li {{ margin: 0.2rem 0; }}
@media print {{ body {{ margin: 0.5rem; }} }}
</style>
</head>
<body>
<h1>Sustainability Business Intelligence Report</h1>
<ul class="summary">
<li>CO2 Reduction: {co2_reduction:.2}%</li>
<li>Cost Savings: {cost_savings:.2}%</li>
<li>Total Records: {count}</li>
<li>Average Sustainability Score: {avg_score:.2}</li>
</ul>
<table>
<thead><tr><th>Item</th><th>Weight (kg)</th><th>Units</th><th>Fragility</th>
<th>Best Material</th><th>Total Cost</th><th>Total CO2</th><th>Score</th><th>Recorded At</th></tr></thead>
<tbody>
{rows}</tbody>
</table>
</body>
</html>
"#,
        count = records.len(),
    )
}

pub fn format_timestamp(unix_seconds: u64) -> String {
    OffsetDateTime::from_unix_timestamp(unix_seconds as i64)
        .ok()
        .and_then(|dt| dt.format(&Rfc3339).ok())
        .unwrap_or_else(|| "-".to_string())
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Fragility;

    fn record(item: &str, material: &str, total_cost: f64, total_co2: f64) -> RecommendationRecord {
        RecommendationRecord {
            id: "test".to_string(),
            item: item.to_string(),
            weight_kg: 1.5,
            units: 4,
            fragility: Fragility::High,
            best_material: material.to_string(),
            total_cost,
            total_co2,
            strength_mpa: 33.0,
            score: 77.5,
            reasons: vec!["Cost efficient option".to_string()],
            recorded_at: 1_700_000_000,
        }
    }

    #[test]
    fn csv_export_writes_header_and_one_row_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        let records = vec![
            record("Mango Crate", "Jute", 10.0, 2.0),
            record("Laptop", "Molded Pulp", 25.0, 4.0),
        ];

        export_history_csv(&records, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Item,Weight (kg),Units,Fragility,Best Material"));
        assert!(lines[1].contains("Jute"));
        assert!(lines[2].contains("Molded Pulp"));
    }

    #[test]
    fn report_contains_summary_metrics_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.html");
        let records = vec![
            record("Mango Crate", "Jute", 10.0, 2.0),
            record("Vase", "Bubble Wrap", 30.0, 6.0),
        ];

        export_history_report(&records, &path).unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("Sustainability Business Intelligence Report"));
        // mean 20 vs max 30, mean 4 vs max 6
        assert!(html.contains("Cost Savings: 33.33%"));
        assert!(html.contains("CO2 Reduction: 33.33%"));
        assert!(html.contains("Total Records: 2"));
        assert!(html.contains("Bubble Wrap"));
    }

    #[test]
    fn item_names_are_html_escaped() {
        let html = render_report_html(&[record("Glass <fragile> & co", "Foam", 1.0, 1.0)]);
        assert!(html.contains("Glass &lt;fragile&gt; &amp; co"));
        assert!(!html.contains("<fragile>"));
    }
}
