//! Aggregate quality scoring for a selected set of sources.
//!
//! Reliability, freshness, and coverage are scored independently on 0-100
//! and blended into an overall figure. Unknown ids are ignored rather than
//! reported; an empty selection scores zero across the board.

use super::DataSource;
use crate::core::Score0To100;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Blend applied to the three component scores.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct QualityWeights {
    pub reliability: f64,
    pub freshness: f64,
    pub coverage: f64,
}

impl Default for QualityWeights {
    fn default() -> Self {
        Self {
            reliability: 0.4,
            freshness: 0.3,
            coverage: 0.3,
        }
    }
}

impl QualityWeights {
    pub fn validate(&self) -> Result<(), String> {
        let sum = self.reliability + self.freshness + self.coverage;
        if (sum - 1.0).abs() > 1e-6 {
            return Err(format!("quality weights must sum to 1.0, got {sum}"));
        }
        Ok(())
    }

    pub fn normalize(&mut self) {
        let sum = self.reliability + self.freshness + self.coverage;
        if sum > 0.0 {
            self.reliability /= sum;
            self.freshness /= sum;
            self.coverage /= sum;
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DataQualityScore {
    pub overall_score: Score0To100,
    pub coverage_score: Score0To100,
    pub reliability_score: Score0To100,
    pub freshness_score: Score0To100,
}

impl DataQualityScore {
    fn zero() -> Self {
        Self {
            overall_score: Score0To100::new(0.0),
            coverage_score: Score0To100::new(0.0),
            reliability_score: Score0To100::new(0.0),
            freshness_score: Score0To100::new(0.0),
        }
    }
}

/// Score the quality of the selection identified by `ids` within `sources`.
///
/// - reliability: mean of per-source reliability
/// - freshness: mean of `max(0, 100 - 2*days_since_update)` against `now`
/// - coverage: `min(100, 10*unique_regions + 15*unique_types)`
/// - overall: weighted blend of the three
pub fn calculate_data_quality_score(
    sources: &[DataSource],
    ids: &[String],
    weights: &QualityWeights,
    now: DateTime<Utc>,
) -> DataQualityScore {
    let selected: Vec<&DataSource> = ids
        .iter()
        .filter_map(|id| sources.iter().find(|s| &s.id == id))
        .collect();

    if selected.is_empty() {
        return DataQualityScore::zero();
    }

    let count = selected.len() as f64;

    let reliability: f64 = selected.iter().map(|s| s.reliability as f64).sum::<f64>() / count;

    let freshness: f64 = selected
        .iter()
        .map(|s| {
            let days = (now - s.last_updated).num_days() as f64;
            (100.0 - 2.0 * days).clamp(0.0, 100.0)
        })
        .sum::<f64>()
        / count;

    let regions: HashSet<&str> = selected
        .iter()
        .flat_map(|s| s.coverage.regions.iter().map(String::as_str))
        .collect();
    let types: HashSet<_> = selected.iter().map(|s| s.source_type).collect();
    let coverage = (10.0 * regions.len() as f64 + 15.0 * types.len() as f64).min(100.0);

    let overall =
        weights.reliability * reliability + weights.freshness * freshness + weights.coverage * coverage;

    DataQualityScore {
        overall_score: Score0To100::new(overall),
        coverage_score: Score0To100::new(coverage),
        reliability_score: Score0To100::new(reliability),
        freshness_score: Score0To100::new(freshness),
    }
}

#[cfg(test)]
mod tests {
    use super::super::{SourceCategory, SourceCoverage, SourceType};
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap()
    }

    fn test_source(id: &str, reliability: u8, days_old: i64, regions: &[&str]) -> DataSource {
        DataSource {
            id: id.to_string(),
            name: id.to_uppercase(),
            source_type: SourceType::News,
            category: SourceCategory::OpenSource,
            description: String::new(),
            reliability,
            last_updated: now() - chrono::Duration::days(days_old),
            update_frequency: "daily".to_string(),
            coverage: SourceCoverage {
                regions: regions.iter().map(|s| s.to_string()).collect(),
                countries: vec![],
                timespan: String::new(),
            },
            tags: vec![],
            available: true,
            requires_subscription: false,
        }
    }

    #[test]
    fn empty_selection_scores_zero() {
        let score =
            calculate_data_quality_score(&[], &[], &QualityWeights::default(), now());
        assert_eq!(score.overall_score.value(), 0.0);
        assert_eq!(score.coverage_score.value(), 0.0);
        assert_eq!(score.reliability_score.value(), 0.0);
        assert_eq!(score.freshness_score.value(), 0.0);
    }

    #[test]
    fn unknown_ids_are_silently_dropped() {
        let sources = vec![test_source("a", 80, 0, &["Global"])];
        let ids = vec!["a".to_string(), "ghost".to_string()];
        let score =
            calculate_data_quality_score(&sources, &ids, &QualityWeights::default(), now());
        assert_eq!(score.reliability_score.value(), 80.0);

        let only_ghosts = vec!["ghost".to_string()];
        let score =
            calculate_data_quality_score(&sources, &only_ghosts, &QualityWeights::default(), now());
        assert_eq!(score.overall_score.value(), 0.0);
    }

    #[test]
    fn single_fresh_perfect_source_worked_example() {
        // reliability 100, freshness 100, coverage 10*1 + 15*1 = 25,
        // overall 0.4*100 + 0.3*100 + 0.3*25 = 77.5
        let sources = vec![test_source("a", 100, 0, &["Global"])];
        let ids = vec!["a".to_string()];
        let score =
            calculate_data_quality_score(&sources, &ids, &QualityWeights::default(), now());
        assert_eq!(score.reliability_score.value(), 100.0);
        assert_eq!(score.freshness_score.value(), 100.0);
        assert_eq!(score.coverage_score.value(), 25.0);
        assert_eq!(score.overall_score.value(), 77.5);
    }

    #[test]
    fn freshness_decays_two_points_per_day_with_floor() {
        let sources = vec![
            test_source("stale", 50, 60, &["Global"]),
            test_source("ancient", 50, 400, &["Global"]),
        ];
        let ids = vec!["stale".to_string()];
        let score =
            calculate_data_quality_score(&sources, &ids, &QualityWeights::default(), now());
        assert_eq!(score.freshness_score.value(), 0.0);

        let ids = vec!["ancient".to_string()];
        let score =
            calculate_data_quality_score(&sources, &ids, &QualityWeights::default(), now());
        assert_eq!(score.freshness_score.value(), 0.0);
    }

    #[test]
    fn coverage_unions_regions_and_types() {
        let mut sat = test_source("sat", 90, 0, &["East Africa", "Middle East"]);
        sat.source_type = SourceType::Satellite;
        let sources = vec![test_source("news", 80, 0, &["East Africa"]), sat];
        let ids: Vec<String> = vec!["news".into(), "sat".into()];
        let score =
            calculate_data_quality_score(&sources, &ids, &QualityWeights::default(), now());
        // 2 unique regions, 2 unique types: 10*2 + 15*2 = 50
        assert_eq!(score.coverage_score.value(), 50.0);
    }

    #[test]
    fn coverage_caps_at_one_hundred() {
        let sources: Vec<DataSource> = (0..12)
            .map(|i| {
                let region = format!("R{i}");
                test_source(&format!("s{i}"), 80, 0, &[region.as_str()])
            })
            .collect();
        let ids: Vec<String> = sources.iter().map(|s| s.id.clone()).collect();
        let score =
            calculate_data_quality_score(&sources, &ids, &QualityWeights::default(), now());
        // 12 regions * 10 + 1 type * 15 = 135, capped
        assert_eq!(score.coverage_score.value(), 100.0);
    }

    #[test]
    fn duplicate_ids_count_twice_in_means() {
        // Selection is resolved per id; repeating an id repeats its record.
        let sources = vec![
            test_source("a", 100, 0, &["Global"]),
            test_source("b", 50, 0, &["Global"]),
        ];
        let ids: Vec<String> = vec!["a".into(), "a".into(), "b".into()];
        let score =
            calculate_data_quality_score(&sources, &ids, &QualityWeights::default(), now());
        assert!((score.reliability_score.value() - 250.0 / 3.0).abs() < 1e-9);
    }
}
