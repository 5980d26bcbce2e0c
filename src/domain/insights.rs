//! Aggregate sustainability metrics over the recommendation history.

use std::collections::HashMap;

use super::entities::RecommendationRecord;
use super::scoring::round2;

/// CO2 reduction of the recorded shipments versus the worst one:
/// `(max_total_co2 - mean_total_co2) / max_total_co2 * 100`.
///
/// Returns 0 for an empty history or a non-positive baseline, never NaN.
pub fn co2_reduction_pct(records: &[RecommendationRecord]) -> f64 {
    reduction_vs_baseline(records.iter().map(|r| r.total_co2))
}

/// Cost savings versus the most expensive recorded shipment, same shape as
/// [`co2_reduction_pct`].
pub fn cost_savings_pct(records: &[RecommendationRecord]) -> f64 {
    reduction_vs_baseline(records.iter().map(|r| r.total_cost))
}

pub fn average_score(records: &[RecommendationRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let sum: f64 = records.iter().map(|r| r.score).sum();
    round2(sum / records.len() as f64)
}

/// Most-recommended materials, count descending, capped at `limit`.
/// Materials with equal counts keep their first-seen order.
pub fn material_usage(records: &[RecommendationRecord], limit: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for record in records {
        let entry = counts.entry(record.best_material.as_str()).or_insert(0);
        if *entry == 0 {
            order.push(record.best_material.as_str());
        }
        *entry += 1;
    }

    let mut usage: Vec<(String, usize)> = order
        .into_iter()
        .map(|name| (name.to_string(), counts[name]))
        .collect();
    usage.sort_by(|a, b| b.1.cmp(&a.1));
    usage.truncate(limit);
    usage
}

fn reduction_vs_baseline(values: impl Iterator<Item = f64> + Clone) -> f64 {
    let count = values.clone().count();
    if count == 0 {
        return 0.0;
    }
    let baseline = values.clone().fold(0.0, f64::max);
    if baseline <= 0.0 {
        return 0.0;
    }
    let mean = values.sum::<f64>() / count as f64;
    round2((baseline - mean) / baseline * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Fragility;

    fn record(material: &str, total_cost: f64, total_co2: f64, score: f64) -> RecommendationRecord {
        RecommendationRecord {
            id: format!("test-{material}-{total_cost}"),
            item: "Widget".to_string(),
            weight_kg: 1.0,
            units: 1,
            fragility: Fragility::Low,
            best_material: material.to_string(),
            total_cost,
            total_co2,
            strength_mpa: 30.0,
            score,
            reasons: Vec::new(),
            recorded_at: 0,
        }
    }

    #[test]
    fn empty_history_reports_zero_not_nan() {
        assert_eq!(co2_reduction_pct(&[]), 0.0);
        assert_eq!(cost_savings_pct(&[]), 0.0);
        assert_eq!(average_score(&[]), 0.0);
    }

    #[test]
    fn single_record_is_its_own_baseline() {
        let records = vec![record("Jute", 10.0, 4.0, 70.0)];
        assert_eq!(co2_reduction_pct(&records), 0.0);
        assert_eq!(cost_savings_pct(&records), 0.0);
        assert_eq!(average_score(&records), 70.0);
    }

    #[test]
    fn reduction_compares_mean_against_the_worst_shipment() {
        let records = vec![
            record("Jute", 10.0, 2.0, 80.0),
            record("Plastic", 30.0, 6.0, 40.0),
        ];
        // mean cost 20 vs max 30, mean co2 4 vs max 6
        assert_eq!(cost_savings_pct(&records), 33.33);
        assert_eq!(co2_reduction_pct(&records), 33.33);
        assert_eq!(average_score(&records), 60.0);
    }

    #[test]
    fn usage_counts_are_descending_and_capped() {
        let mut records = Vec::new();
        for _ in 0..3 {
            records.push(record("Jute", 1.0, 1.0, 50.0));
        }
        records.push(record("Plastic", 1.0, 1.0, 50.0));
        records.push(record("Cardboard", 1.0, 1.0, 50.0));
        records.push(record("Cardboard", 1.0, 1.0, 50.0));

        let usage = material_usage(&records, 2);
        assert_eq!(
            usage,
            vec![("Jute".to_string(), 3), ("Cardboard".to_string(), 2)]
        );
    }

    #[test]
    fn equal_counts_keep_first_seen_order() {
        let records = vec![
            record("Plastic", 1.0, 1.0, 50.0),
            record("Jute", 1.0, 1.0, 50.0),
        ];
        let usage = material_usage(&records, 10);
        assert_eq!(usage[0].0, "Plastic");
        assert_eq!(usage[1].0, "Jute");
    }
}
