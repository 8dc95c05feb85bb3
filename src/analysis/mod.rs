//! Analytics core: pure scoring functions over snapshot records, plus the
//! report aggregate the command layer renders.

pub mod alerts;
pub mod influence;
pub mod risk;
pub mod scenario;
pub mod stability;

use crate::core::{Entity, IntelSnapshot, RiskLevel};
use chrono::{DateTime, Utc};
use im::Vector;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

pub use alerts::{filter_alerts, sort_alerts_by_severity, AlertFilter};
pub use influence::{analyze_network_influence, NetworkInfluence};
pub use risk::{RiskAnalyzer, RiskScore, RiskWeights};
pub use scenario::{
    ImpactLevel, ScenarioBaseData, ScenarioProcessor, ScenarioResults, ScenarioValue,
    ScenarioVariables, ScenarioWeights,
};
pub use stability::{
    average_stability, calculate_stability_index, generate_confidence_score, BaselineTrendModel,
    StabilityWeights, TrendModel, TrendReading,
};

/// Risk and influence assessment for a single entity.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EntityAssessment {
    pub entity: Entity,
    pub risk: RiskScore,
    pub level: RiskLevel,
    pub influence: NetworkInfluence,
}

/// Full snapshot assessment, ordered by descending risk.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub entity_count: usize,
    pub connection_count: usize,
    pub alert_count: usize,
    pub assessments: Vector<EntityAssessment>,
    pub average_risk: f64,
    pub high_risk_count: usize,
}

/// Assess every entity in the snapshot.
///
/// Scoring of individual entities is independent, so the fan-out runs on
/// the rayon pool unless `parallel` is off. Output ordering is
/// deterministic either way: descending risk, ties by snapshot order.
pub fn assess_snapshot(
    snapshot: &IntelSnapshot,
    analyzer: &RiskAnalyzer,
    generated_at: DateTime<Utc>,
    parallel: bool,
) -> AnalysisReport {
    let assess = |entity: &Entity| {
        let risk = analyzer.score_entity(entity, &snapshot.connections, &snapshot.alerts);
        let level = risk.level();
        let influence = analyze_network_influence(entity, &snapshot.connections);
        EntityAssessment {
            entity: entity.clone(),
            risk,
            level,
            influence,
        }
    };

    let mut assessments: Vec<EntityAssessment> = if parallel {
        snapshot.entities.par_iter().map(assess).collect()
    } else {
        snapshot.entities.iter().map(assess).collect()
    };

    assessments.sort_by(|a, b| {
        b.risk
            .score
            .value()
            .partial_cmp(&a.risk.score.value())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let total_risk: f64 = assessments.iter().map(|a| a.risk.score.value()).sum();
    let average_risk = if assessments.is_empty() {
        0.0
    } else {
        total_risk / assessments.len() as f64
    };
    let high_risk_count = assessments
        .iter()
        .filter(|a| a.level == RiskLevel::High)
        .count();

    AnalysisReport {
        generated_at,
        entity_count: snapshot.entities.len(),
        connection_count: snapshot.connections.len(),
        alert_count: snapshot.alerts.len(),
        assessments: assessments.into_iter().collect(),
        average_risk,
        high_risk_count,
    }
}
