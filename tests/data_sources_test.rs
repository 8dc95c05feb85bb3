use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use savannah::{
    all_data_sources, calculate_data_quality_score, filter_data_sources,
    recommended_data_sources, AnalysisType, DataSource, DataSourceFilter, QualityWeights,
    SourceCategory, SourceCoverage, SourceType,
};

fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap()
}

#[test]
fn no_criteria_returns_full_catalog_in_catalog_order() {
    let catalog = all_data_sources();
    let filtered = filter_data_sources(catalog, &DataSourceFilter::default(), fixed_now());
    let ids: Vec<_> = filtered.iter().map(|s| s.id.as_str()).collect();
    let expected: Vec<_> = catalog.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, expected);
}

#[test]
fn unreachable_reliability_threshold_filters_everything() {
    let filter = DataSourceFilter {
        min_reliability: Some(101),
        ..DataSourceFilter::default()
    };
    assert!(filter_data_sources(all_data_sources(), &filter, fixed_now()).is_empty());
}

#[test]
fn combined_criteria_are_conjunctive() {
    let filter = DataSourceFilter {
        regions: Some(vec!["East Africa".to_string()]),
        min_reliability: Some(70),
        ..DataSourceFilter::default()
    };
    let filtered = filter_data_sources(all_data_sources(), &filter, fixed_now());
    assert!(!filtered.is_empty());
    for source in &filtered {
        assert!(source.coverage.regions.iter().any(|r| r == "East Africa"));
        assert!(source.reliability >= 70);
    }
}

#[test]
fn search_term_reaches_tags() {
    let filter = DataSourceFilter {
        search_term: Some("SANCTIONS".to_string()),
        ..DataSourceFilter::default()
    };
    let filtered = filter_data_sources(all_data_sources(), &filter, fixed_now());
    let ids: Vec<_> = filtered.iter().map(|s| s.id.as_str()).collect();
    assert!(ids.contains(&"treasury-bulletins"));
    assert!(ids.contains(&"acacia-osint"));
}

#[test]
fn empty_selection_scores_all_zero() {
    let score = calculate_data_quality_score(
        all_data_sources(),
        &[],
        &QualityWeights::default(),
        fixed_now(),
    );
    assert_eq!(score.overall_score.value(), 0.0);
    assert_eq!(score.coverage_score.value(), 0.0);
    assert_eq!(score.reliability_score.value(), 0.0);
    assert_eq!(score.freshness_score.value(), 0.0);
}

#[test]
fn worked_quality_example_scores_exactly() {
    // One source, updated today, reliability 100, one region, one type:
    // reliability 100, freshness 100, coverage 25, overall 77.5
    let sources = vec![DataSource {
        id: "perfect".to_string(),
        name: "Perfect Feed".to_string(),
        source_type: SourceType::Intelligence,
        category: SourceCategory::Internal,
        description: "fixture".to_string(),
        reliability: 100,
        last_updated: fixed_now(),
        update_frequency: "continuous".to_string(),
        coverage: SourceCoverage {
            regions: vec!["East Africa".to_string()],
            countries: vec![],
            timespan: "2024-present".to_string(),
        },
        tags: vec![],
        available: true,
        requires_subscription: false,
    }];
    let score = calculate_data_quality_score(
        &sources,
        &["perfect".to_string()],
        &QualityWeights::default(),
        fixed_now(),
    );
    assert_eq!(score.reliability_score.value(), 100.0);
    assert_eq!(score.freshness_score.value(), 100.0);
    assert_eq!(score.coverage_score.value(), 25.0);
    assert_eq!(score.overall_score.value(), 77.5);
}

#[test]
fn unknown_ids_are_ignored_without_error() {
    let known = ["sentinel-sat".to_string()];
    let with_ghosts = [
        "sentinel-sat".to_string(),
        "no-such-feed".to_string(),
        "also-missing".to_string(),
    ];
    let weights = QualityWeights::default();
    let baseline = calculate_data_quality_score(all_data_sources(), &known, &weights, fixed_now());
    let padded =
        calculate_data_quality_score(all_data_sources(), &with_ghosts, &weights, fixed_now());
    assert_eq!(baseline, padded);
}

#[test]
fn comprehensive_recommendations_sort_by_reliability() {
    let recommended =
        recommended_data_sources(all_data_sources(), "East Africa", AnalysisType::Comprehensive);
    let reliabilities: Vec<_> = recommended.iter().map(|s| s.reliability).collect();
    assert!(reliabilities.windows(2).all(|pair| pair[0] >= pair[1]));
    assert_eq!(recommended[0].id, "sentinel-sat");
}

#[test]
fn economic_focus_excludes_satellite_feeds() {
    let recommended =
        recommended_data_sources(all_data_sources(), "Middle East", AnalysisType::Economic);
    assert!(recommended.iter().all(|s| matches!(
        s.source_type,
        SourceType::Economic | SourceType::News | SourceType::Government | SourceType::Academic
    )));
}

#[test]
fn filtering_is_pure_and_repeatable() {
    let filter = DataSourceFilter {
        types: Some(vec![SourceType::News, SourceType::Economic]),
        min_reliability: Some(60),
        ..DataSourceFilter::default()
    };
    let first = filter_data_sources(all_data_sources(), &filter, fixed_now());
    let second = filter_data_sources(all_data_sources(), &filter, fixed_now());
    assert_eq!(first, second);
}
