mod common;

use common::{alert, connection, entity};
use pretty_assertions::assert_eq;
use savannah::{AlertSeverity, ConnectionStrength, EntityType, RiskAnalyzer, RiskLevel};

#[test]
fn baseline_scores_match_entity_types() {
    let analyzer = RiskAnalyzer::default();
    for (entity_type, expected) in [
        (EntityType::Person, 3.0),
        (EntityType::Organization, 4.0),
        (EntityType::Location, 2.0),
    ] {
        let result = analyzer.score_entity(&entity("e", entity_type), &[], &[]);
        assert_eq!(result.score.value(), expected);
        assert_eq!(result.factors, Vec::<String>::new());
    }
}

#[test]
fn connection_bonus_and_alert_count_compose() {
    let analyzer = RiskAnalyzer::default();
    let target = entity("hub", EntityType::Organization);
    let connections: Vec<_> = (0..4)
        .map(|i| connection("hub", &format!("n{i}"), ConnectionStrength::Strong))
        .collect();
    let alerts = vec![
        alert("a1", AlertSeverity::High, &["hub"]),
        alert("a2", AlertSeverity::Medium, &["hub"]),
        alert("a3", AlertSeverity::High, &["elsewhere"]),
    ];

    // base 4 + bonus 2 + one critical alert = 7
    let result = analyzer.score_entity(&target, &connections, &alerts);
    assert_eq!(result.score.value(), 7.0);
    assert_eq!(result.level(), RiskLevel::High);
    assert_eq!(
        result.factors,
        vec![
            "Multiple high-strength connections".to_string(),
            "1 critical alerts".to_string(),
        ]
    );
}

#[test]
fn score_never_exceeds_ten() {
    let analyzer = RiskAnalyzer::default();
    let target = entity("hub", EntityType::Organization);
    let connections: Vec<_> = (0..10)
        .map(|i| connection("hub", &format!("n{i}"), ConnectionStrength::Strong))
        .collect();
    let alerts: Vec<_> = (0..20)
        .map(|i| alert(&format!("a{i}"), AlertSeverity::High, &["hub"]))
        .collect();
    let result = analyzer.score_entity(&target, &connections, &alerts);
    assert_eq!(result.score.value(), 10.0);
}

#[test]
fn medium_and_low_severity_alerts_do_not_raise_risk() {
    let analyzer = RiskAnalyzer::default();
    let target = entity("e", EntityType::Person);
    let alerts = vec![
        alert("a1", AlertSeverity::Medium, &["e"]),
        alert("a2", AlertSeverity::Low, &["e"]),
    ];
    let result = analyzer.score_entity(&target, &[], &alerts);
    assert_eq!(result.score.value(), 3.0);
    assert!(result.factors.is_empty());
}

#[test]
fn repeated_scoring_is_deterministic() {
    let analyzer = RiskAnalyzer::default();
    let target = entity("e", EntityType::Person);
    let connections = vec![connection("e", "n", ConnectionStrength::Strong)];
    let alerts = vec![alert("a", AlertSeverity::High, &["e"])];
    let runs: Vec<_> = (0..5)
        .map(|_| analyzer.score_entity(&target, &connections, &alerts))
        .collect();
    assert!(runs.windows(2).all(|pair| pair[0] == pair[1]));
}
