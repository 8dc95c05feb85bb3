//! Source recommendations for a region and analysis focus.

use super::{DataSource, SourceType};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisType {
    Security,
    Economic,
    Political,
    Geospatial,
    Comprehensive,
}

impl AnalysisType {
    /// Source types suited to this analysis; `None` means no restriction.
    fn allowed_types(&self) -> Option<&'static [SourceType]> {
        match self {
            AnalysisType::Security => Some(&[
                SourceType::Security,
                SourceType::Intelligence,
                SourceType::News,
                SourceType::Social,
                SourceType::Satellite,
            ]),
            AnalysisType::Economic => Some(&[
                SourceType::Economic,
                SourceType::News,
                SourceType::Government,
                SourceType::Academic,
            ]),
            AnalysisType::Political => Some(&[
                SourceType::Government,
                SourceType::News,
                SourceType::Intelligence,
                SourceType::Ngo,
                SourceType::Social,
            ]),
            AnalysisType::Geospatial => Some(&[
                SourceType::Satellite,
                SourceType::Security,
                SourceType::Intelligence,
                SourceType::Government,
            ]),
            AnalysisType::Comprehensive => None,
        }
    }
}

/// Sources covering `region` and suited to `analysis`, most reliable first.
/// The sort is stable, so equally reliable sources keep catalog order.
pub fn recommended_data_sources<'a>(
    sources: &'a [DataSource],
    region: &str,
    analysis: AnalysisType,
) -> Vec<&'a DataSource> {
    let allowed = analysis.allowed_types();
    let mut matches: Vec<&DataSource> = sources
        .iter()
        .filter(|s| s.covers_region(region))
        .filter(|s| allowed.is_none_or(|types| types.contains(&s.source_type)))
        .collect();
    matches.sort_by(|a, b| b.reliability.cmp(&a.reliability));
    matches
}

#[cfg(test)]
mod tests {
    use super::super::builtin::all_data_sources;
    use super::*;

    #[test]
    fn comprehensive_keeps_every_type_sorted_by_reliability() {
        let recommended =
            recommended_data_sources(all_data_sources(), "East Africa", AnalysisType::Comprehensive);
        let ids: Vec<_> = recommended.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["sentinel-sat", "acacia-osint", "savanna-field", "civic-pulse"]
        );
        let reliabilities: Vec<_> = recommended.iter().map(|s| s.reliability).collect();
        let mut sorted = reliabilities.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(reliabilities, sorted);
    }

    #[test]
    fn security_focus_restricts_types() {
        let recommended =
            recommended_data_sources(all_data_sources(), "East Africa", AnalysisType::Security);
        let ids: Vec<_> = recommended.iter().map(|s| s.id.as_str()).collect();
        // savanna-field (ngo) does not fit the security allow-list
        assert_eq!(ids, vec!["sentinel-sat", "acacia-osint", "civic-pulse"]);
    }

    #[test]
    fn unknown_region_recommends_nothing() {
        assert!(
            recommended_data_sources(all_data_sources(), "Oceania", AnalysisType::Comprehensive)
                .is_empty()
        );
    }

    #[test]
    fn ties_keep_catalog_order() {
        use super::super::{SourceCategory, SourceCoverage};
        use chrono::{TimeZone, Utc};

        let make = |id: &str| DataSource {
            id: id.to_string(),
            name: id.to_uppercase(),
            source_type: SourceType::News,
            category: SourceCategory::OpenSource,
            description: String::new(),
            reliability: 80,
            last_updated: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            update_frequency: "daily".to_string(),
            coverage: SourceCoverage {
                regions: vec!["Global".to_string()],
                countries: vec![],
                timespan: String::new(),
            },
            tags: vec![],
            available: true,
            requires_subscription: false,
        };
        let sources = vec![make("first"), make("second"), make("third")];
        let recommended =
            recommended_data_sources(&sources, "Global", AnalysisType::Comprehensive);
        let ids: Vec<_> = recommended.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }
}
