//! Persistent recommendation history.
//!
//! The scorer only emits records; this store is the sink that keeps them.
//! The trait keeps the UI and the exporters independent of the concrete
//! storage, which is a JSON file in the local data directory.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::domain::RecommendationRecord;

const HISTORY_FILENAME: &str = "history.json";
const DATA_DIR_NAME: &str = "ecopack-advisor";

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

/// Append-and-fetch interface over the recommendation history.
pub trait HistoryStore {
    fn append(&self, record: &RecommendationRecord) -> Result<(), HistoryError>;
    fn load_all(&self) -> Result<Vec<RecommendationRecord>, HistoryError>;
    fn clear(&self) -> Result<(), HistoryError>;
}

/// History persisted as a JSON array on disk.
#[derive(Clone, Debug)]
pub struct JsonHistoryStore {
    path: PathBuf,
}

impl JsonHistoryStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store under the platform data directory, next to the app's other
    /// local files.
    pub fn at_default_location() -> Self {
        let base = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DATA_DIR_NAME);
        Self::new(base.join(HISTORY_FILENAME))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl HistoryStore for JsonHistoryStore {
    fn append(&self, record: &RecommendationRecord) -> Result<(), HistoryError> {
        let mut records = self.load_all()?;
        records.push(record.clone());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&records)?;
        fs::write(&self.path, json)?;
        info!(
            "recorded recommendation for {} ({} total) in {}",
            record.item,
            records.len(),
            self.path.display()
        );
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<RecommendationRecord>, HistoryError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn clear(&self) -> Result<(), HistoryError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            info!("cleared recommendation history at {}", self.path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Fragility, ScoredCandidate, ShipmentRequest};

    fn sample_record(item: &str) -> RecommendationRecord {
        let request = ShipmentRequest {
            item_name: item.to_string(),
            unit_weight_kg: 2.0,
            unit_count: 5,
            fragility: Fragility::Medium,
        };
        let best = ScoredCandidate {
            material_name: "Jute".to_string(),
            total_cost: 22.2,
            total_co2: 6.18,
            tensile_strength_mpa: 27.84,
            score: 68.69,
            reasons: vec!["Biodegradable and eco-friendly".to_string()],
        };
        RecommendationRecord::new(&request, &best, 1_700_000_000)
    }

    fn store_in(dir: &tempfile::TempDir) -> JsonHistoryStore {
        JsonHistoryStore::new(dir.path().join("history.json"))
    }

    #[test]
    fn missing_file_loads_as_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn append_then_load_round_trips_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let first = sample_record("Mango Crate");
        let second = sample_record("Laptop");
        store.append(&first).unwrap();
        store.append(&second).unwrap();

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded, vec![first, second]);
    }

    #[test]
    fn clear_removes_all_records() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.append(&sample_record("Vase")).unwrap();
        store.clear().unwrap();
        assert!(store.load_all().unwrap().is_empty());
    }
}
