#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// One row of the materials table, as produced by the dataset loader.
///
/// Numeric fields are `None` when the source cell was missing or could not
/// be parsed; such rows are excluded from ranking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    pub name: String,
    pub category: Option<String>,
    pub cost_per_kg: Option<f64>,
    pub co2_per_kg: Option<f64>,
    pub tensile_strength_mpa: Option<f64>,
    pub biodegradable: bool,
}

impl MaterialRecord {
    /// A record can be ranked only when every numeric metric is present.
    pub fn is_eligible(&self) -> bool {
        self.tensile_strength_mpa.is_some()
            && self.cost_per_kg.is_some()
            && self.co2_per_kg.is_some()
    }
}

/// How fragile the shipped item is. Drives the required-strength threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fragility {
    #[default]
    Low,
    Medium,
    High,
}

impl Fragility {
    /// Lenient parse of form/dataset encodings ("H", "high", ...).
    /// Unrecognized values fall back to Low.
    pub fn parse(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "m" | "med" | "medium" => Fragility::Medium,
            "h" | "hi" | "high" => Fragility::High,
            _ => Fragility::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Fragility::Low => "Low",
            Fragility::Medium => "Medium",
            Fragility::High => "High",
        }
    }

    /// Single-letter code used in exports and the history store.
    pub fn code(&self) -> &'static str {
        match self {
            Fragility::Low => "L",
            Fragility::Medium => "M",
            Fragility::High => "H",
        }
    }
}

/// Validated shipment parameters for one scoring call.
///
/// Only constructed through [`ShipmentRequest::parse`], so the scorer never
/// sees a non-positive weight or unit count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRequest {
    pub item_name: String,
    pub unit_weight_kg: f64,
    pub unit_count: u32,
    pub fragility: Fragility,
}

impl ShipmentRequest {
    /// Coerce raw form strings into a typed request.
    pub fn parse(
        item_name: &str,
        unit_weight: &str,
        unit_count: &str,
        fragility: &str,
    ) -> Result<Self, RequestError> {
        let item_name = item_name.trim();
        if item_name.is_empty() {
            return Err(RequestError::EmptyItem);
        }

        let unit_weight_kg: f64 = unit_weight
            .trim()
            .parse()
            .map_err(|_| RequestError::InvalidWeight(unit_weight.trim().to_string()))?;
        if !unit_weight_kg.is_finite() || unit_weight_kg <= 0.0 {
            return Err(RequestError::InvalidWeight(unit_weight.trim().to_string()));
        }

        let unit_count: u32 = unit_count
            .trim()
            .parse()
            .map_err(|_| RequestError::InvalidUnits(unit_count.trim().to_string()))?;
        if unit_count == 0 {
            return Err(RequestError::InvalidUnits(unit_count.to_string()));
        }

        Ok(Self {
            item_name: item_name.to_string(),
            unit_weight_kg,
            unit_count,
            fragility: Fragility::parse(fragility),
        })
    }

    pub fn total_weight_kg(&self) -> f64 {
        self.unit_weight_kg * self.unit_count as f64
    }
}

/// Shipment form input that failed boundary validation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("item name must not be empty")]
    EmptyItem,
    #[error("unit weight must be a positive number (got \"{0}\")")]
    InvalidWeight(String),
    #[error("unit count must be a positive whole number (got \"{0}\")")]
    InvalidUnits(String),
}

/// Weights and thresholds of the scoring formula.
///
/// The sub-score weights must sum to 1.0 so the composite stays in 0-100.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub eco_weight: f64,
    pub cost_weight: f64,
    pub biodeg_weight: f64,
    pub strength_weight: f64,
    pub fragility_low: f64,
    pub fragility_medium: f64,
    pub fragility_high: f64,
    /// Required tensile strength per kg of unit weight (MPa/kg).
    pub strength_per_kg: f64,
    /// How many candidates the ranking keeps.
    pub top_n: usize,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            eco_weight: 0.30,
            cost_weight: 0.25,
            biodeg_weight: 0.20,
            strength_weight: 0.25,
            fragility_low: 1.0,
            fragility_medium: 1.5,
            fragility_high: 2.0,
            strength_per_kg: 5.0,
            top_n: 5,
        }
    }
}

impl ScoringPolicy {
    pub fn multiplier(&self, fragility: Fragility) -> f64 {
        match fragility {
            Fragility::Low => self.fragility_low,
            Fragility::Medium => self.fragility_medium,
            Fragility::High => self.fragility_high,
        }
    }

    /// Sanity checks applied when a policy is edited in the settings UI.
    pub fn validate(&self) -> Result<(), String> {
        let weight_sum =
            self.eco_weight + self.cost_weight + self.biodeg_weight + self.strength_weight;
        if (weight_sum - 1.0).abs() > 1e-6 {
            return Err(format!(
                "score weights must sum to 1.0 (currently {weight_sum:.3})"
            ));
        }
        for (label, value) in [
            ("eco", self.eco_weight),
            ("cost", self.cost_weight),
            ("biodegradability", self.biodeg_weight),
            ("strength", self.strength_weight),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{label} weight must be between 0 and 1"));
            }
        }
        for (label, value) in [
            ("low", self.fragility_low),
            ("medium", self.fragility_medium),
            ("high", self.fragility_high),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{label} fragility multiplier must be positive"));
            }
        }
        if !self.strength_per_kg.is_finite() || self.strength_per_kg <= 0.0 {
            return Err("required strength per kg must be positive".to_string());
        }
        if self.top_n == 0 {
            return Err("ranking depth must be at least 1".to_string());
        }
        Ok(())
    }
}

/// One ranked material with its shipment totals and justification.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoredCandidate {
    pub material_name: String,
    pub total_cost: f64,
    pub total_co2: f64,
    pub tensile_strength_mpa: f64,
    /// Composite sustainability score, 0-100, rounded to two decimals.
    pub score: f64,
    /// Ordered justification strings; never empty.
    pub reasons: Vec<String>,
}

/// Output of one scoring call: the top-N candidates plus the best one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Recommendation {
    pub ranked: Vec<ScoredCandidate>,
    pub best: Option<ScoredCandidate>,
}

/// Informational item classification derived from the item name.
/// Display-only; it never influences the ranking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemCategory {
    Food,
    Electronics,
    Cosmetics,
    Pharma,
    Fragile,
    #[default]
    General,
}

impl ItemCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ItemCategory::Food => "Food",
            ItemCategory::Electronics => "Electronics",
            ItemCategory::Cosmetics => "Cosmetics",
            ItemCategory::Pharma => "Pharma",
            ItemCategory::Fragile => "Fragile",
            ItemCategory::General => "General",
        }
    }
}

/// One persisted recommendation, as appended to the history store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRecord {
    pub id: String,
    pub item: String,
    pub weight_kg: f64,
    pub units: u32,
    pub fragility: Fragility,
    pub best_material: String,
    pub total_cost: f64,
    pub total_co2: f64,
    pub strength_mpa: f64,
    pub score: f64,
    #[serde(default)]
    pub reasons: Vec<String>,
    /// Unix timestamp (seconds) when the recommendation was accepted.
    pub recorded_at: u64,
}

impl RecommendationRecord {
    pub fn new(request: &ShipmentRequest, best: &ScoredCandidate, recorded_at: u64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            item: request.item_name.clone(),
            weight_kg: request.unit_weight_kg,
            units: request.unit_count,
            fragility: request.fragility,
            best_material: best.material_name.clone(),
            total_cost: best.total_cost,
            total_co2: best.total_co2,
            strength_mpa: best.tensile_strength_mpa,
            score: best.score,
            reasons: best.reasons.clone(),
            recorded_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_parse_accepts_a_well_formed_form() {
        let request = ShipmentRequest::parse("  Mango Crate ", "2.5", "12", "H").unwrap();
        assert_eq!(request.item_name, "Mango Crate");
        assert_eq!(request.unit_weight_kg, 2.5);
        assert_eq!(request.unit_count, 12);
        assert_eq!(request.fragility, Fragility::High);
        assert_eq!(request.total_weight_kg(), 30.0);
    }

    #[test]
    fn request_parse_rejects_malformed_input_at_the_boundary() {
        assert_eq!(
            ShipmentRequest::parse("", "1.0", "1", "L"),
            Err(RequestError::EmptyItem)
        );
        assert!(matches!(
            ShipmentRequest::parse("Box", "heavy", "1", "L"),
            Err(RequestError::InvalidWeight(_))
        ));
        assert!(matches!(
            ShipmentRequest::parse("Box", "-2", "1", "L"),
            Err(RequestError::InvalidWeight(_))
        ));
        assert!(matches!(
            ShipmentRequest::parse("Box", "1.0", "0", "L"),
            Err(RequestError::InvalidUnits(_))
        ));
        assert!(matches!(
            ShipmentRequest::parse("Box", "1.0", "2.5", "L"),
            Err(RequestError::InvalidUnits(_))
        ));
    }

    #[test]
    fn unknown_fragility_defaults_to_low() {
        assert_eq!(Fragility::parse("???"), Fragility::Low);
        assert_eq!(Fragility::parse("MEDIUM"), Fragility::Medium);
        assert_eq!(Fragility::parse(" h "), Fragility::High);
    }

    #[test]
    fn default_policy_is_valid_and_weights_sum_to_one() {
        let policy = ScoringPolicy::default();
        policy.validate().expect("defaults must validate");
        let sum = policy.eco_weight
            + policy.cost_weight
            + policy.biodeg_weight
            + policy.strength_weight;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn policy_validation_rejects_bad_edits() {
        let mut policy = ScoringPolicy {
            eco_weight: 0.5,
            ..ScoringPolicy::default()
        };
        assert!(policy.validate().is_err());

        policy = ScoringPolicy {
            fragility_high: 0.0,
            ..ScoringPolicy::default()
        };
        assert!(policy.validate().is_err());

        policy = ScoringPolicy {
            top_n: 0,
            ..ScoringPolicy::default()
        };
        assert!(policy.validate().is_err());
    }
}
