use pretty_assertions::assert_eq;
use savannah::{
    ImpactLevel, ScenarioBaseData, ScenarioProcessor, ScenarioValue, ScenarioVariables,
};

fn vars(pairs: &[(&str, f64)]) -> ScenarioVariables {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), ScenarioValue::Number(*v)))
        .collect()
}

#[test]
fn severity_and_duration_drive_impact_classification() {
    let processor = ScenarioProcessor::default();
    let base = ScenarioBaseData::default();

    let results = processor.process(&base, &vars(&[("severity", 10.0), ("duration", 10.0)]), "1y");
    assert_eq!(results.impact, ImpactLevel::High);

    let results = processor.process(&base, &vars(&[("severity", 0.0), ("duration", 0.0)]), "1y");
    assert_eq!(results.impact, ImpactLevel::Low);

    // 0.7*7 + 0.3*0 = 4.9 lands in the medium band
    let results = processor.process(&base, &vars(&[("severity", 7.0)]), "1y");
    assert_eq!(results.impact, ImpactLevel::Medium);

    // exactly at the high threshold: 0.7*10 = 7.0
    let results = processor.process(&base, &vars(&[("severity", 10.0)]), "1y");
    assert_eq!(results.impact, ImpactLevel::High);
}

#[test]
fn missing_variables_degrade_to_zero_not_errors() {
    let processor = ScenarioProcessor::default();
    let base = ScenarioBaseData::default();
    let mut variables = ScenarioVariables::new();
    variables.insert(
        "severity".to_string(),
        ScenarioValue::Text("unquantified".to_string()),
    );

    let results = processor.process(&base, &variables, "1y");
    assert_eq!(results.impact, ImpactLevel::Low);
    // One variable still counts toward confidence: 75 + 2
    assert_eq!(results.confidence, 77);
}

#[test]
fn confidence_is_bounded_and_monotone_in_specification() {
    let processor = ScenarioProcessor::default();
    let with_history = ScenarioBaseData {
        historical_data: true,
        ..ScenarioBaseData::default()
    };

    let mut previous = 0;
    for n in 0..12 {
        let variables: ScenarioVariables = (0..n)
            .map(|i| (format!("v{i}"), ScenarioValue::Number(1.0)))
            .collect();
        let confidence = processor.process(&with_history, &variables, "1y").confidence;
        assert!(confidence >= previous);
        assert!(confidence <= 100);
        previous = confidence;
    }
    assert_eq!(previous, 100);
}

#[test]
fn high_impact_scenario_produces_full_narrative() {
    let processor = ScenarioProcessor::default();
    let base = ScenarioBaseData {
        region: Some("East Africa".to_string()),
        historical_data: true,
    };
    let mut variables = vars(&[
        ("severity", 9.0),
        ("duration", 8.0),
        ("economicImpact", 7.0),
        ("politicalInstability", 1.0),
        ("infrastructureImpact", 1.0),
    ]);
    variables.insert(
        "socialImpact".to_string(),
        ScenarioValue::Text("widespread".to_string()),
    );

    let results = processor.process(&base, &variables, "18 months");
    assert_eq!(results.impact, ImpactLevel::High);
    assert_eq!(results.time_horizon, "18 months");
    assert_eq!(
        results.affected_sectors,
        vec![
            "Banking",
            "Trade",
            "Infrastructure",
            "Transportation",
            "Public Services",
            "Healthcare"
        ]
    );
    assert_eq!(
        results.key_outcomes,
        vec![
            "Significant market disruption likely",
            "Long-term policy changes expected",
            "Projected economic impact of 7",
            "Estimated disruption duration of 8",
        ]
    );
    assert_eq!(
        results.risk_factors,
        vec![
            "Market Volatility",
            "Investment Uncertainty",
            "Political Instability",
            "Policy Changes",
            "Infrastructure Disruption",
            "Supply Chain Risks"
        ]
    );
}

#[test]
fn results_serialize_with_lowercase_impact() {
    let processor = ScenarioProcessor::default();
    let results = processor.process(
        &ScenarioBaseData::default(),
        &vars(&[("severity", 10.0), ("duration", 10.0)]),
        "1y",
    );
    let json = serde_json::to_string(&results).unwrap();
    assert!(json.contains("\"impact\":\"high\""));
}
