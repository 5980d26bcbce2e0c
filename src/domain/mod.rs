//! Domain logic for packaging recommendations lives here.

pub mod app_state;
pub mod entities;
pub mod insights;
pub mod scoring;

#[allow(unused_imports)]
pub use app_state::{AppState, DatasetStatus, PersistedState};
#[allow(unused_imports)]
pub use entities::{
    Fragility, ItemCategory, MaterialRecord, Recommendation, RecommendationRecord, RequestError,
    ScoredCandidate, ScoringPolicy, ShipmentRequest,
};
#[allow(unused_imports)]
pub use insights::{average_score, co2_reduction_pct, cost_savings_pct, material_usage};
#[allow(unused_imports)]
pub use scoring::{classify_item, rank_materials};
