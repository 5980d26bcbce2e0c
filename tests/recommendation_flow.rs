//! End-to-end flow over the shipped dataset: load, rank, record, export.

use std::path::Path;

use ecopack_advisor::domain::{
    rank_materials, RecommendationRecord, ScoringPolicy, ShipmentRequest,
};
use ecopack_advisor::infra::dataset::load_materials;
use ecopack_advisor::infra::history::{HistoryStore, JsonHistoryStore};
use ecopack_advisor::infra::report::{export_history_csv, export_history_report};

const DATASET: &str = "data/materials.csv";

#[test]
fn shipped_dataset_loads_cleanly() {
    let loaded = load_materials(Path::new(DATASET)).expect("bundled dataset must load");
    assert_eq!(loaded.skipped, 0);
    assert_eq!(loaded.materials.len(), 30);

    // Two rows are deliberately incomplete in the source data.
    let ineligible: Vec<&str> = loaded
        .materials
        .iter()
        .filter(|m| !m.is_eligible())
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(ineligible, vec!["Corn Starch Peanuts", "Glass Wool Wrap"]);
}

#[test]
fn ranking_the_shipped_dataset_yields_a_sound_top_five() {
    let loaded = load_materials(Path::new(DATASET)).unwrap();
    let request = ShipmentRequest::parse("Mango Crate", "2.5", "12", "M").unwrap();
    let policy = ScoringPolicy::default();

    let result = rank_materials(&loaded.materials, &request, &policy);

    assert_eq!(result.ranked.len(), 5);
    let best = result.best.as_ref().expect("dataset has eligible rows");
    assert_eq!(Some(best), result.ranked.first());
    for pair in result.ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for candidate in &result.ranked {
        assert!((0.0..=100.0).contains(&candidate.score));
        assert!(!candidate.reasons.is_empty());
        assert_ne!(candidate.material_name, "Corn Starch Peanuts");
        assert_ne!(candidate.material_name, "Glass Wool Wrap");
    }
}

#[test]
fn recording_and_exporting_a_recommendation_round_trips() {
    let loaded = load_materials(Path::new(DATASET)).unwrap();
    let request = ShipmentRequest::parse("Ceramic Vase", "1.2", "6", "H").unwrap();
    let result = rank_materials(&loaded.materials, &request, &ScoringPolicy::default());
    let best = result.best.expect("eligible materials exist");

    let dir = tempfile::tempdir().unwrap();
    let store = JsonHistoryStore::new(dir.path().join("history.json"));
    let record = RecommendationRecord::new(&request, &best, 1_700_000_000);
    store.append(&record).unwrap();

    let history = store.load_all().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].item, "Ceramic Vase");
    assert_eq!(history[0].best_material, best.material_name);

    let csv_path = dir.path().join("history.csv");
    export_history_csv(&history, &csv_path).unwrap();
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert!(csv.contains("Ceramic Vase"));
    assert!(csv.contains(&best.material_name));

    let report_path = dir.path().join("report.html");
    export_history_report(&history, &report_path).unwrap();
    let html = std::fs::read_to_string(&report_path).unwrap();
    assert!(html.contains("Ceramic Vase"));
    assert!(html.contains("Total Records: 1"));
}
