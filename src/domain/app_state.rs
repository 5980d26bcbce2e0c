#![allow(dead_code)]

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use super::entities::{MaterialRecord, RecommendationRecord, ScoringPolicy};

/// Where the materials snapshot currently comes from.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DatasetStatus {
    #[default]
    NotLoaded,
    Loaded {
        path: String,
        rows: usize,
        /// Rows dropped by the loader (blank name or unreadable line).
        skipped: usize,
        loaded_at: SystemTime,
    },
    Failed(String),
}

impl DatasetStatus {
    pub fn is_loaded(&self) -> bool {
        matches!(self, DatasetStatus::Loaded { .. })
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Immutable materials snapshot shared by every scoring call.
    pub materials: Vec<MaterialRecord>,
    pub dataset: DatasetStatus,
    /// Recommendation history, newest last (as loaded from the store).
    pub history: Vec<RecommendationRecord>,
    pub policy: ScoringPolicy,
}

impl AppState {
    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.policy = persisted.policy;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            policy: self.policy.clone(),
        }
    }
}

/// User settings written to disk between sessions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub policy: ScoringPolicy,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            policy: ScoringPolicy::default(),
        }
    }
}
