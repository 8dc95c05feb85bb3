//! The `scenario` command: variables in, impact assessment out.

use crate::analysis::{
    ScenarioBaseData, ScenarioProcessor, ScenarioResults, ScenarioValue, ScenarioVariables,
};
use crate::cli;
use crate::config::load_config;
use crate::errors::SavannahError;
use crate::io::input::load_scenario_variables;
use crate::io::output::OutputFormat;
use crate::store::Preferences;
use anyhow::Context;
use std::path::PathBuf;

pub struct ScenarioConfig {
    pub variables: Vec<String>,
    pub variables_file: Option<PathBuf>,
    pub time_horizon: String,
    pub historical_data: bool,
    pub region: Option<String>,
    pub format: Option<cli::OutputFormat>,
}

pub fn handle_scenario(config: ScenarioConfig) -> anyhow::Result<()> {
    let mut variables = match &config.variables_file {
        Some(path) => load_scenario_variables(path)
            .with_context(|| format!("loading variables {}", path.display()))?,
        None => ScenarioVariables::new(),
    };
    for pair in &config.variables {
        let (key, value) = parse_variable(pair)?;
        variables.insert(key, value);
    }

    let base = ScenarioBaseData {
        region: config.region.clone(),
        historical_data: config.historical_data,
    };
    let engine_config = load_config();
    let processor = ScenarioProcessor::new(engine_config.scenario);
    let results = processor.process(&base, &variables, &config.time_horizon);

    let store = super::open_preference_store();
    let preferences = Preferences::load(store.as_ref());
    match super::resolve_format(config.format, &preferences) {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Markdown => print!("{}", render_markdown(&results)),
        OutputFormat::Terminal => print!("{}", render_terminal(&results, &base)),
    }
    Ok(())
}

/// Parse a `key=value` pair; values that parse as f64 become numbers.
pub fn parse_variable(pair: &str) -> Result<(String, ScenarioValue), SavannahError> {
    let (key, raw) = pair
        .split_once('=')
        .ok_or_else(|| SavannahError::validation(pair, "expected key=value"))?;
    if key.is_empty() {
        return Err(SavannahError::validation(pair, "empty variable name"));
    }
    let value = match raw.parse::<f64>() {
        Ok(number) if number.is_finite() => ScenarioValue::Number(number),
        _ => ScenarioValue::Text(raw.to_string()),
    };
    Ok((key.to_string(), value))
}

fn render_markdown(results: &ScenarioResults) -> String {
    let mut out = String::new();
    out.push_str("# Scenario Assessment\n\n");
    out.push_str(&format!("- Impact: **{}**\n", results.impact));
    out.push_str(&format!("- Confidence: {}%\n", results.confidence));
    out.push_str(&format!("- Time horizon: {}\n", results.time_horizon));
    for (title, items) in [
        ("Affected sectors", &results.affected_sectors),
        ("Key outcomes", &results.key_outcomes),
        ("Risk factors", &results.risk_factors),
    ] {
        if !items.is_empty() {
            out.push_str(&format!("\n## {title}\n\n"));
            for item in items {
                out.push_str(&format!("- {item}\n"));
            }
        }
    }
    out
}

fn render_terminal(results: &ScenarioResults, base: &ScenarioBaseData) -> String {
    let mut out = String::new();
    out.push_str("SCENARIO ASSESSMENT\n");
    if let Some(region) = &base.region {
        out.push_str(&format!("Region: {region}\n"));
    }
    out.push_str(&format!(
        "Impact: {} | Confidence: {}% | Horizon: {}\n",
        results.impact, results.confidence, results.time_horizon
    ));
    for (title, items) in [
        ("Affected sectors", &results.affected_sectors),
        ("Key outcomes", &results.key_outcomes),
        ("Risk factors", &results.risk_factors),
    ] {
        if !items.is_empty() {
            out.push_str(&format!("\n{title}:\n"));
            for item in items {
                out.push_str(&format!("  - {item}\n"));
            }
        }
    }
    out
}
