//! Material scoring and ranking.
//!
//! Pure computation over an immutable materials snapshot: no I/O, no clocks,
//! no randomness. Safe to call from concurrent UI tasks sharing one snapshot.

use std::cmp::Ordering;

use super::entities::{
    ItemCategory, MaterialRecord, Recommendation, ScoredCandidate, ScoringPolicy, ShipmentRequest,
};

/// Score every eligible material for the given shipment and return the
/// top-N candidates, best first.
///
/// A material is eligible when cost, CO2 and tensile strength are all
/// present; rows the loader could not parse are skipped here, not reported.
/// An empty or fully ineligible dataset yields an empty ranking, never an
/// error.
pub fn rank_materials(
    materials: &[MaterialRecord],
    request: &ShipmentRequest,
    policy: &ScoringPolicy,
) -> Recommendation {
    let eligible: Vec<(&MaterialRecord, Metrics)> = materials
        .iter()
        .filter_map(|record| Metrics::of(record).map(|metrics| (record, metrics)))
        .collect();

    if eligible.is_empty() {
        return Recommendation::default();
    }

    // Normalization maxima come from the per-unit metrics of the filtered
    // set. A degenerate maximum of 0 normalizes against 1 instead, which
    // collapses every ratio to full marks rather than dividing by zero.
    let max_cost = normalization_max(eligible.iter().map(|(_, m)| m.cost_per_kg));
    let max_co2 = normalization_max(eligible.iter().map(|(_, m)| m.co2_per_kg));

    let multiplier = policy.multiplier(request.fragility);
    let required_strength = request.unit_weight_kg * policy.strength_per_kg * multiplier;
    let shipment_kg = request.total_weight_kg();

    let mut candidates: Vec<ScoredCandidate> = eligible
        .into_iter()
        .map(|(record, metrics)| {
            let strength_score = (metrics.strength_mpa / required_strength).min(1.0);
            let eco_score = 1.0 - metrics.co2_per_kg / max_co2;
            let cost_score = 1.0 - metrics.cost_per_kg / max_cost;
            let biodeg_score = if record.biodegradable { 1.0 } else { 0.5 };

            let composite = eco_score * policy.eco_weight
                + cost_score * policy.cost_weight
                + biodeg_score * policy.biodeg_weight
                + strength_score * policy.strength_weight;
            let score = round2(composite * 100.0);

            ScoredCandidate {
                material_name: record.name.clone(),
                total_cost: round2(metrics.cost_per_kg * shipment_kg),
                total_co2: round2(metrics.co2_per_kg * shipment_kg),
                tensile_strength_mpa: metrics.strength_mpa,
                score,
                reasons: derive_reasons(
                    record.biodegradable,
                    eco_score,
                    cost_score,
                    strength_score,
                    score,
                ),
            }
        })
        .collect();

    // Stable sort keeps dataset order between equal scores.
    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    candidates.truncate(policy.top_n);

    let best = candidates.first().cloned();
    Recommendation {
        ranked: candidates,
        best,
    }
}

/// Per-unit metrics of an eligible row.
struct Metrics {
    cost_per_kg: f64,
    co2_per_kg: f64,
    strength_mpa: f64,
}

impl Metrics {
    fn of(record: &MaterialRecord) -> Option<Self> {
        let cost_per_kg = record.cost_per_kg.filter(|v| v.is_finite() && *v >= 0.0)?;
        let co2_per_kg = record.co2_per_kg.filter(|v| v.is_finite() && *v >= 0.0)?;
        let strength_mpa = record
            .tensile_strength_mpa
            .filter(|v| v.is_finite() && *v > 0.0)?;
        Some(Self {
            cost_per_kg,
            co2_per_kg,
            strength_mpa,
        })
    }
}

fn normalization_max(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.fold(0.0, f64::max);
    if max > 0.0 {
        max
    } else {
        1.0
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Qualitative justifications, evaluated independently and in this order.
/// The catch-all fires only when nothing else did, so the list is never
/// empty.
fn derive_reasons(
    biodegradable: bool,
    eco_score: f64,
    cost_score: f64,
    strength_score: f64,
    score: f64,
) -> Vec<String> {
    let mut reasons = Vec::new();
    if biodegradable {
        reasons.push("Biodegradable and eco-friendly".to_string());
    }
    if eco_score > 0.7 {
        reasons.push("Very low carbon footprint".to_string());
    }
    if cost_score > 0.7 {
        reasons.push("Cost efficient option".to_string());
    }
    if strength_score > 0.8 {
        reasons.push("High structural strength".to_string());
    }
    if score > 85.0 {
        reasons.push("Excellent sustainability performance".to_string());
    }
    if reasons.is_empty() {
        reasons.push("Balanced cost, strength and environmental impact".to_string());
    }
    reasons
}

/// Tag the item with a coarse category from name keywords. Informational
/// only; the ranking never reads it.
pub fn classify_item(item_name: &str) -> ItemCategory {
    const FOOD: &[&str] = &[
        "apple", "mango", "banana", "rice", "tea", "coffee", "juice", "snack", "fruit", "food",
    ];
    const ELECTRONICS: &[&str] = &[
        "laptop", "mobile", "phone", "tablet", "charger", "camera", "headphone", "router",
    ];
    const COSMETICS: &[&str] = &["cream", "lotion", "perfume", "lipstick", "shampoo", "soap"];
    const PHARMA: &[&str] = &["medicine", "syrup", "capsule", "pill", "vaccine"];
    const FRAGILE: &[&str] = &["glass", "ceramic", "mirror", "porcelain", "vase"];

    let name = item_name.to_ascii_lowercase();
    let matches = |keywords: &[&str]| keywords.iter().any(|kw| name.contains(kw));

    if matches(FOOD) {
        ItemCategory::Food
    } else if matches(ELECTRONICS) {
        ItemCategory::Electronics
    } else if matches(COSMETICS) {
        ItemCategory::Cosmetics
    } else if matches(PHARMA) {
        ItemCategory::Pharma
    } else if matches(FRAGILE) {
        ItemCategory::Fragile
    } else {
        ItemCategory::General
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Fragility;

    fn material(
        name: &str,
        cost: Option<f64>,
        co2: Option<f64>,
        strength: Option<f64>,
        biodegradable: bool,
    ) -> MaterialRecord {
        MaterialRecord {
            name: name.to_string(),
            category: None,
            cost_per_kg: cost,
            co2_per_kg: co2,
            tensile_strength_mpa: strength,
            biodegradable,
        }
    }

    fn request(weight: f64, units: u32, fragility: Fragility) -> ShipmentRequest {
        ShipmentRequest {
            item_name: "Test Item".to_string(),
            unit_weight_kg: weight,
            unit_count: units,
            fragility,
        }
    }

    fn sample_materials() -> Vec<MaterialRecord> {
        vec![
            material("Jute", Some(2.22), Some(0.618), Some(27.84), true),
            material("Plastic", Some(3.50), Some(1.20), Some(40.0), false),
            material("Cardboard", Some(1.10), Some(0.45), Some(12.0), true),
            material("Aluminium", Some(4.80), Some(9.20), Some(90.0), false),
        ]
    }

    #[test]
    fn best_is_head_of_a_descending_ranking() {
        let result = rank_materials(
            &sample_materials(),
            &request(1.0, 10, Fragility::Low),
            &ScoringPolicy::default(),
        );

        let best = result.best.expect("ranking must not be empty");
        assert_eq!(Some(&best), result.ranked.first());
        for pair in result.ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn scores_stay_within_bounds() {
        let result = rank_materials(
            &sample_materials(),
            &request(3.5, 4, Fragility::High),
            &ScoringPolicy::default(),
        );
        for candidate in &result.ranked {
            assert!((0.0..=100.0).contains(&candidate.score), "{candidate:?}");
        }
    }

    #[test]
    fn identical_inputs_yield_identical_output() {
        let materials = sample_materials();
        let req = request(2.0, 3, Fragility::Medium);
        let policy = ScoringPolicy::default();
        assert_eq!(
            rank_materials(&materials, &req, &policy),
            rank_materials(&materials, &req, &policy)
        );
    }

    #[test]
    fn equal_scores_keep_dataset_order() {
        // Two rows with identical metrics tie exactly; the stable sort must
        // keep First ahead of Second.
        let materials = vec![
            material("First", Some(2.0), Some(1.0), Some(50.0), true),
            material("Second", Some(2.0), Some(1.0), Some(50.0), true),
            material("Cheapest", Some(0.5), Some(0.2), Some(50.0), true),
        ];
        let result = rank_materials(
            &materials,
            &request(1.0, 1, Fragility::Low),
            &ScoringPolicy::default(),
        );
        let names: Vec<&str> = result
            .ranked
            .iter()
            .map(|c| c.material_name.as_str())
            .collect();
        let first = names.iter().position(|n| *n == "First").unwrap();
        let second = names.iter().position(|n| *n == "Second").unwrap();
        assert!(first < second);
        assert_eq!(
            result.ranked[first].score, result.ranked[second].score,
            "tie premise broken"
        );
    }

    #[test]
    fn missing_metrics_exclude_a_row_entirely() {
        let materials = vec![
            material("No Strength", Some(0.01), Some(0.01), None, true),
            material("No Cost", None, Some(0.5), Some(80.0), true),
            material("Complete", Some(2.0), Some(1.0), Some(30.0), false),
        ];
        let result = rank_materials(
            &materials,
            &request(1.0, 1, Fragility::Low),
            &ScoringPolicy::default(),
        );
        assert_eq!(result.ranked.len(), 1);
        assert_eq!(result.ranked[0].material_name, "Complete");
    }

    #[test]
    fn empty_dataset_is_a_normal_outcome() {
        let result = rank_materials(
            &[],
            &request(1.0, 1, Fragility::Low),
            &ScoringPolicy::default(),
        );
        assert!(result.ranked.is_empty());
        assert!(result.best.is_none());
    }

    #[test]
    fn ranking_is_capped_at_top_n() {
        let materials: Vec<MaterialRecord> = (0..8)
            .map(|i| {
                material(
                    &format!("M{i}"),
                    Some(1.0 + i as f64),
                    Some(0.5 + i as f64),
                    Some(40.0),
                    i % 2 == 0,
                )
            })
            .collect();
        let result = rank_materials(
            &materials,
            &request(1.0, 1, Fragility::Low),
            &ScoringPolicy::default(),
        );
        assert_eq!(result.ranked.len(), 5);
    }

    #[test]
    fn low_scoring_candidate_gets_exactly_the_fallback_reason() {
        // Worst on cost and CO2, weak strength, not biodegradable: every
        // qualitative threshold misses, so only the catch-all applies.
        let materials = vec![
            material("Frontrunner", Some(0.5), Some(0.1), Some(100.0), true),
            material("Laggard", Some(5.0), Some(2.0), Some(10.0), false),
        ];
        let result = rank_materials(
            &materials,
            &request(10.0, 1, Fragility::Low),
            &ScoringPolicy::default(),
        );
        let laggard = result
            .ranked
            .iter()
            .find(|c| c.material_name == "Laggard")
            .expect("laggard is eligible");
        assert!(laggard.score <= 85.0);
        assert_eq!(
            laggard.reasons,
            vec!["Balanced cost, strength and environmental impact".to_string()]
        );
    }

    #[test]
    fn jute_beats_plastic_on_the_reference_shipment() {
        let materials = vec![
            material("Jute", Some(2.22), Some(0.618), Some(27.84), true),
            material("Plastic", Some(3.50), Some(1.20), Some(40.0), false),
        ];
        let result = rank_materials(
            &materials,
            &request(1.0, 10, Fragility::Low),
            &ScoringPolicy::default(),
        );

        assert_eq!(result.ranked.len(), 2);
        let jute = &result.ranked[0];
        let plastic = &result.ranked[1];
        assert_eq!(jute.material_name, "Jute");
        assert_eq!(jute.total_cost, 22.2);
        assert_eq!(plastic.total_cost, 35.0);
        assert!(jute
            .reasons
            .iter()
            .any(|r| r == "Biodegradable and eco-friendly"));
        assert!(jute.reasons.iter().any(|r| r == "High structural strength"));
    }

    #[test]
    fn fragility_moves_only_the_strength_term() {
        // Single-row dataset: the row is its own cost/CO2 maximum, so both
        // normalized terms are 0 and the score isolates biodeg + strength.
        // Strength 20 against required 20 (Low) vs 40 (High).
        let materials = vec![material("Board", Some(2.0), Some(1.0), Some(20.0), true)];
        let policy = ScoringPolicy::default();

        let low = rank_materials(&materials, &request(4.0, 1, Fragility::Low), &policy);
        let high = rank_materials(&materials, &request(4.0, 1, Fragility::High), &policy);

        let low = low.best.unwrap();
        let high = high.best.unwrap();
        assert_eq!(low.score, 45.0);
        assert_eq!(high.score, 32.5);
        assert_eq!(low.total_cost, high.total_cost);
        assert_eq!(low.total_co2, high.total_co2);
    }

    #[test]
    fn zero_maxima_normalize_against_one() {
        let materials = vec![material("Freebie", Some(0.0), Some(0.0), Some(50.0), true)];
        let result = rank_materials(
            &materials,
            &request(1.0, 1, Fragility::Low),
            &ScoringPolicy::default(),
        );
        let best = result.best.unwrap();
        assert_eq!(best.score, 100.0);
    }

    #[test]
    fn item_classifier_matches_known_keywords() {
        assert_eq!(classify_item("Alphonso Mango Crate"), ItemCategory::Food);
        assert_eq!(classify_item("Gaming Laptop"), ItemCategory::Electronics);
        assert_eq!(classify_item("Ceramic Vase"), ItemCategory::Fragile);
        assert_eq!(classify_item("Mystery Box"), ItemCategory::General);
    }
}
