//! Entity risk scoring.
//!
//! A risk score starts from a base determined by entity type, then grows
//! with high-strength connection density and the number of critical alerts
//! naming the entity. Scores are clamped to the 0-10 scale; each applied
//! adjustment is reported back as a human-readable factor.

use crate::core::{Alert, AlertSeverity, Connection, ConnectionStrength, Entity, EntityType};
use crate::core::{RiskLevel, Score0To10};
use serde::{Deserialize, Serialize};

/// Weights applied during risk scoring. Loaded from `.savannah.toml` when
/// present, otherwise defaults apply.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RiskWeights {
    pub person_base: f64,
    pub organization_base: f64,
    pub location_base: f64,
    /// Added once when strong connections exceed `strong_connection_threshold`.
    pub strong_connection_bonus: f64,
    pub strong_connection_threshold: usize,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            person_base: 3.0,
            organization_base: 4.0,
            location_base: 2.0,
            strong_connection_bonus: 2.0,
            strong_connection_threshold: 3,
        }
    }
}

impl RiskWeights {
    pub fn base_for(&self, entity_type: EntityType) -> f64 {
        match entity_type {
            EntityType::Person => self.person_base,
            EntityType::Organization => self.organization_base,
            EntityType::Location => self.location_base,
        }
    }

    /// Base scores must be non-negative so the clamp at 10 is the only
    /// bound the score can hit.
    pub fn validate(&self) -> Result<(), String> {
        let bases = [
            ("person_base", self.person_base),
            ("organization_base", self.organization_base),
            ("location_base", self.location_base),
            ("strong_connection_bonus", self.strong_connection_bonus),
        ];
        for (name, value) in bases {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be a non-negative number, got {value}"));
            }
        }
        Ok(())
    }
}

/// Computed risk for a single entity.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RiskScore {
    pub score: Score0To10,
    pub factors: Vec<String>,
}

impl RiskScore {
    pub fn level(&self) -> RiskLevel {
        RiskLevel::from_score(self.score)
    }
}

pub struct RiskAnalyzer {
    weights: RiskWeights,
}

impl Default for RiskAnalyzer {
    fn default() -> Self {
        Self {
            weights: RiskWeights::default(),
        }
    }
}

impl RiskAnalyzer {
    pub fn new(weights: RiskWeights) -> Self {
        Self { weights }
    }

    /// Score an entity against the connection graph and recent alert feed.
    ///
    /// Empty inputs yield exactly the type base score with no factors.
    /// Never fails: unknown ids in alerts simply contribute nothing.
    pub fn score_entity(
        &self,
        entity: &Entity,
        connections: &[Connection],
        recent_alerts: &[Alert],
    ) -> RiskScore {
        let mut score = self.weights.base_for(entity.entity_type);
        let mut factors = Vec::new();

        let strong_connections = connections
            .iter()
            .filter(|c| c.touches(&entity.id))
            .filter(|c| c.strength == ConnectionStrength::Strong)
            .count();
        if strong_connections > self.weights.strong_connection_threshold {
            score += self.weights.strong_connection_bonus;
            factors.push("Multiple high-strength connections".to_string());
        }

        let critical_alerts = recent_alerts
            .iter()
            .filter(|a| a.mentions(&entity.id))
            .filter(|a| a.severity() == AlertSeverity::High)
            .count();
        if critical_alerts > 0 {
            score += critical_alerts as f64;
            factors.push(format!("{critical_alerts} critical alerts"));
        }

        RiskScore {
            score: Score0To10::new(score),
            factors,
        }
    }
}
