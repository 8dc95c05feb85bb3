//! The built-in source catalog.
//!
//! A static table of the feeds the engine knows about out of the box.
//! Callers that bring their own catalog can pass any `&[DataSource]` to the
//! filtering and scoring functions instead.

use super::{DataSource, SourceCategory, SourceCoverage, SourceType};
use chrono::{TimeZone, Utc};
use once_cell::sync::Lazy;

static CATALOG: Lazy<Vec<DataSource>> = Lazy::new(build_catalog);

pub fn all_data_sources() -> &'static [DataSource] {
    &CATALOG
}

#[allow(clippy::too_many_arguments)]
fn source(
    id: &str,
    name: &str,
    source_type: SourceType,
    category: SourceCategory,
    description: &str,
    reliability: u8,
    updated: (i32, u32, u32),
    update_frequency: &str,
    regions: &[&str],
    countries: &[&str],
    timespan: &str,
    tags: &[&str],
    available: bool,
    requires_subscription: bool,
) -> DataSource {
    let (year, month, day) = updated;
    DataSource {
        id: id.to_string(),
        name: name.to_string(),
        source_type,
        category,
        description: description.to_string(),
        reliability,
        last_updated: Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap(),
        update_frequency: update_frequency.to_string(),
        coverage: SourceCoverage {
            regions: regions.iter().map(|s| s.to_string()).collect(),
            countries: countries.iter().map(|s| s.to_string()).collect(),
            timespan: timespan.to_string(),
        },
        tags: tags.iter().map(|s| s.to_string()).collect(),
        available,
        requires_subscription,
    }
}

fn build_catalog() -> Vec<DataSource> {
    vec![
        source(
            "horizon-newswire",
            "Horizon Newswire",
            SourceType::News,
            SourceCategory::OpenSource,
            "Global wire service with rolling geopolitical coverage",
            82,
            (2025, 2, 27),
            "hourly",
            &["Global"],
            &[],
            "2010-present",
            &["breaking", "wire"],
            true,
            false,
        ),
        source(
            "meridian-econ",
            "Meridian Economic Monitor",
            SourceType::Economic,
            SourceCategory::Commercial,
            "Macro indicators and market stress signals",
            88,
            (2025, 2, 20),
            "weekly",
            &["Europe", "Middle East"],
            &["DE", "TR"],
            "2005-present",
            &["markets", "indicators"],
            true,
            true,
        ),
        source(
            "sentinel-sat",
            "Sentinel Orbital Imagery",
            SourceType::Satellite,
            SourceCategory::Commercial,
            "Tasked and archive satellite imagery with change detection",
            93,
            (2025, 2, 25),
            "daily",
            &["East Africa", "Middle East"],
            &["ET", "SO", "YE"],
            "2017-present",
            &["imagery", "geospatial"],
            true,
            true,
        ),
        source(
            "acacia-osint",
            "Acacia OSINT Digest",
            SourceType::Intelligence,
            SourceCategory::OpenSource,
            "Curated open-source intelligence on the Horn of Africa",
            74,
            (2025, 2, 14),
            "daily",
            &["East Africa"],
            &["KE", "ET", "UG"],
            "2019-present",
            &["osint", "sanctions"],
            true,
            false,
        ),
        source(
            "civic-pulse",
            "Civic Pulse",
            SourceType::Social,
            SourceCategory::OpenSource,
            "Aggregated social sentiment across urban centers",
            58,
            (2025, 2, 28),
            "continuous",
            &["East Africa", "South Asia"],
            &["KE", "IN"],
            "2021-present",
            &["sentiment", "social-media"],
            true,
            false,
        ),
        source(
            "treasury-bulletins",
            "Treasury Sanctions Bulletins",
            SourceType::Government,
            SourceCategory::Government,
            "Official designation lists and enforcement notices",
            96,
            (2025, 1, 15),
            "monthly",
            &["Global"],
            &[],
            "1995-present",
            &["sanctions", "designations"],
            true,
            false,
        ),
        source(
            "crescent-security",
            "Crescent Security Watch",
            SourceType::Security,
            SourceCategory::Commercial,
            "Incident tracking and checkpoint status reporting",
            85,
            (2025, 2, 22),
            "daily",
            &["Middle East"],
            &["IQ", "SY", "LB"],
            "2014-present",
            &["incidents", "checkpoints"],
            true,
            true,
        ),
        source(
            "savanna-field",
            "Savanna Field Reports",
            SourceType::Ngo,
            SourceCategory::Internal,
            "Humanitarian field reporting from partner organizations",
            67,
            (2024, 12, 10),
            "ad hoc",
            &["East Africa"],
            &["KE", "TZ"],
            "2020-present",
            &["humanitarian", "field"],
            true,
            false,
        ),
        source(
            "lakeside-papers",
            "Lakeside Working Papers",
            SourceType::Academic,
            SourceCategory::OpenSource,
            "Peer-reviewed conflict research and regional studies",
            79,
            (2024, 11, 2),
            "quarterly",
            &["Global"],
            &[],
            "2000-present",
            &["research", "conflict"],
            true,
            false,
        ),
        source(
            "harbor-traffic",
            "Harbor Traffic Ledger",
            SourceType::Economic,
            SourceCategory::Commercial,
            "Port calls, transshipment, and trade-flow anomalies",
            71,
            (2025, 2, 18),
            "weekly",
            &["Middle East", "South Asia"],
            &["AE", "PK"],
            "2016-present",
            &["shipping", "trade"],
            false,
            true,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let catalog = all_data_sources();
        let mut ids: Vec<_> = catalog.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn reliability_stays_in_range() {
        assert!(all_data_sources().iter().all(|s| s.reliability <= 100));
    }

    #[test]
    fn region_lookup_is_exact() {
        let sat = all_data_sources()
            .iter()
            .find(|s| s.id == "sentinel-sat")
            .unwrap();
        assert!(sat.covers_region("East Africa"));
        assert!(!sat.covers_region("East"));
    }
}
