//! Scenario impact processing.
//!
//! Scenarios are described by named variables (numbers or free text). The
//! processor classifies impact from severity and duration, derives a
//! confidence figure from how well-specified the scenario is, and expands
//! the variables into affected sectors, expected outcomes, and risk
//! factors. Everything is deterministic weighted arithmetic; missing or
//! non-numeric variables degrade to zero instead of failing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A scenario variable value. Numbers drive the arithmetic; text values
/// participate only in truthiness checks and templated outcomes.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ScenarioValue {
    Number(f64),
    Text(String),
}

impl ScenarioValue {
    /// Numeric reading of the value; text is non-numeric and reads as None.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ScenarioValue::Number(n) => Some(*n),
            ScenarioValue::Text(_) => None,
        }
    }

    /// Truthiness: non-zero numbers and non-empty text.
    pub fn is_truthy(&self) -> bool {
        match self {
            ScenarioValue::Number(n) => *n != 0.0,
            ScenarioValue::Text(s) => !s.is_empty(),
        }
    }
}

impl std::fmt::Display for ScenarioValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioValue::Number(n) => {
                if n.fract() == 0.0 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            ScenarioValue::Text(s) => write!(f, "{s}"),
        }
    }
}

pub type ScenarioVariables = BTreeMap<String, ScenarioValue>;

/// Context the scenario runs against.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ScenarioBaseData {
    #[serde(default)]
    pub region: Option<String>,
    /// Whether historical data backs this scenario; raises confidence.
    #[serde(default)]
    pub historical_data: bool,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ImpactLevel::Low => "low",
            ImpactLevel::Medium => "medium",
            ImpactLevel::High => "high",
        };
        write!(f, "{label}")
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScenarioResults {
    pub impact: ImpactLevel,
    /// 0-100.
    pub confidence: u8,
    pub time_horizon: String,
    pub affected_sectors: Vec<String>,
    pub key_outcomes: Vec<String>,
    pub risk_factors: Vec<String>,
}

/// Tunable knobs for scenario processing. Loaded from `.savannah.toml`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScenarioWeights {
    pub severity_weight: f64,
    pub duration_weight: f64,
    pub high_impact_threshold: f64,
    pub medium_impact_threshold: f64,
}

impl Default for ScenarioWeights {
    fn default() -> Self {
        Self {
            severity_weight: 0.7,
            duration_weight: 0.3,
            high_impact_threshold: 7.0,
            medium_impact_threshold: 4.0,
        }
    }
}

impl ScenarioWeights {
    pub fn validate(&self) -> Result<(), String> {
        let sum = self.severity_weight + self.duration_weight;
        if (sum - 1.0).abs() > 1e-6 {
            return Err(format!(
                "severity_weight + duration_weight must sum to 1.0, got {sum}"
            ));
        }
        if self.medium_impact_threshold > self.high_impact_threshold {
            return Err("medium_impact_threshold must not exceed high_impact_threshold".into());
        }
        Ok(())
    }

    pub fn normalize(&mut self) {
        let sum = self.severity_weight + self.duration_weight;
        if sum > 0.0 {
            self.severity_weight /= sum;
            self.duration_weight /= sum;
        }
    }
}

pub struct ScenarioProcessor {
    weights: ScenarioWeights,
}

impl Default for ScenarioProcessor {
    fn default() -> Self {
        Self {
            weights: ScenarioWeights::default(),
        }
    }
}

impl ScenarioProcessor {
    pub fn new(weights: ScenarioWeights) -> Self {
        Self { weights }
    }

    pub fn process(
        &self,
        base: &ScenarioBaseData,
        variables: &ScenarioVariables,
        time_horizon: &str,
    ) -> ScenarioResults {
        let impact = self.classify_impact(variables);

        ScenarioResults {
            impact,
            confidence: confidence(base, variables),
            time_horizon: time_horizon.to_string(),
            affected_sectors: affected_sectors(variables, impact),
            key_outcomes: key_outcomes(variables, impact),
            risk_factors: risk_factors(variables),
        }
    }

    fn classify_impact(&self, variables: &ScenarioVariables) -> ImpactLevel {
        let severity = numeric(variables, "severity");
        let duration = numeric(variables, "duration");
        let score = self.weights.severity_weight * severity + self.weights.duration_weight * duration;

        if score >= self.weights.high_impact_threshold {
            ImpactLevel::High
        } else if score >= self.weights.medium_impact_threshold {
            ImpactLevel::Medium
        } else {
            ImpactLevel::Low
        }
    }
}

/// Numeric value of a variable; missing or textual values read as 0.
fn numeric(variables: &ScenarioVariables, key: &str) -> f64 {
    variables
        .get(key)
        .and_then(ScenarioValue::as_number)
        .unwrap_or(0.0)
}

fn truthy(variables: &ScenarioVariables, key: &str) -> bool {
    variables.get(key).is_some_and(ScenarioValue::is_truthy)
}

/// Starts at 75, rises with scenario specificity and historical backing.
fn confidence(base: &ScenarioBaseData, variables: &ScenarioVariables) -> u8 {
    let mut value = 75.0 + (2.0 * variables.len() as f64).min(15.0);
    if base.historical_data {
        value += 10.0;
    }
    value.clamp(0.0, 100.0) as u8
}

fn affected_sectors(variables: &ScenarioVariables, impact: ImpactLevel) -> Vec<String> {
    let mut sectors = Vec::new();
    let high = impact == ImpactLevel::High;

    if truthy(variables, "economicImpact") || high {
        push_unique(&mut sectors, "Banking");
        push_unique(&mut sectors, "Trade");
    }
    if truthy(variables, "infrastructureImpact") {
        push_unique(&mut sectors, "Infrastructure");
        push_unique(&mut sectors, "Transportation");
    }
    if truthy(variables, "socialImpact") || high {
        push_unique(&mut sectors, "Public Services");
        push_unique(&mut sectors, "Healthcare");
    }

    sectors
}

fn key_outcomes(variables: &ScenarioVariables, impact: ImpactLevel) -> Vec<String> {
    let mut outcomes = Vec::new();

    if impact == ImpactLevel::High {
        outcomes.push("Significant market disruption likely".to_string());
        outcomes.push("Long-term policy changes expected".to_string());
    }
    if let Some(value) = variables.get("economicImpact") {
        outcomes.push(format!("Projected economic impact of {value}"));
    }
    if let Some(value) = variables.get("duration") {
        outcomes.push(format!("Estimated disruption duration of {value}"));
    }

    outcomes
}

fn risk_factors(variables: &ScenarioVariables) -> Vec<String> {
    let mut factors = Vec::new();

    if numeric(variables, "economicImpact") > 5.0 {
        push_unique(&mut factors, "Market Volatility");
        push_unique(&mut factors, "Investment Uncertainty");
    }
    if truthy(variables, "politicalInstability") {
        push_unique(&mut factors, "Political Instability");
        push_unique(&mut factors, "Policy Changes");
    }
    if truthy(variables, "infrastructureImpact") {
        push_unique(&mut factors, "Infrastructure Disruption");
        push_unique(&mut factors, "Supply Chain Risks");
    }

    factors
}

/// Insertion-ordered set semantics over a plain Vec.
fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|existing| existing == value) {
        list.push(value.to_string());
    }
}
