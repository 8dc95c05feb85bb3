//! Confidence scoring and regional stability indices.
//!
//! Weighted-sum utilities shared by the report layer. The trend models at
//! the bottom are deliberate placeholders: they return fixed readings
//! regardless of input, behind a trait so callers can substitute a real
//! model without touching this module.

use crate::core::{Alert, Score0To10, Score0To100};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Confidence in an analysis product, 0-100.
///
/// `min(30, points*2) + min(30, quality*3) + (historical ? 20 : 0)
///  + min(20, external*2)`, capped at 100.
pub fn generate_confidence_score(
    data_points: f64,
    data_quality: f64,
    historical_data: bool,
    external_factors: f64,
) -> Score0To100 {
    let mut score = (data_points * 2.0).min(30.0) + (data_quality * 3.0).min(30.0);
    if historical_data {
        score += 20.0;
    }
    score += (external_factors * 2.0).min(20.0);
    Score0To100::new(score)
}

/// Fixed weights for the four stability pillars. The weights sum to 1.0 so
/// the index preserves the 0-10 bounds of its inputs.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StabilityWeights {
    pub political: f64,
    pub economic: f64,
    pub security: f64,
    pub social: f64,
}

impl Default for StabilityWeights {
    fn default() -> Self {
        Self {
            political: 0.30,
            economic: 0.30,
            security: 0.25,
            social: 0.15,
        }
    }
}

impl StabilityWeights {
    pub fn validate(&self) -> Result<(), String> {
        let sum = self.political + self.economic + self.security + self.social;
        if (sum - 1.0).abs() > 1e-6 {
            return Err(format!("stability weights must sum to 1.0, got {sum}"));
        }
        Ok(())
    }

    pub fn normalize(&mut self) {
        let sum = self.political + self.economic + self.security + self.social;
        if sum > 0.0 {
            self.political /= sum;
            self.economic /= sum;
            self.security /= sum;
            self.social /= sum;
        }
    }

    pub fn index(&self, political: f64, economic: f64, security: f64, social: f64) -> Score0To10 {
        Score0To10::new(
            self.political * political
                + self.economic * economic
                + self.security * security
                + self.social * social,
        )
    }
}

/// Stability index with the default pillar weights.
pub fn calculate_stability_index(
    political: f64,
    economic: f64,
    security: f64,
    social: f64,
) -> Score0To10 {
    StabilityWeights::default().index(political, economic, security, social)
}

/// Mean stability across region snapshots; empty input reads as 0.
pub fn average_stability(indices: &[f64]) -> Score0To10 {
    if indices.is_empty() {
        return Score0To10::new(0.0);
    }
    let sum: f64 = indices.iter().sum();
    Score0To10::new(sum / indices.len() as f64)
}

/// A directional reading with model confidence, both on a 0-1 scale.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct TrendReading {
    pub trend: f64,
    pub confidence: f64,
}

/// Seam for trend analysis. The shipped implementation is a constant
/// baseline; substitute a real model here rather than extending it.
pub trait TrendModel {
    fn security_trends(&self, alerts: &[Alert]) -> TrendReading;
    fn economic_impact(&self, indicators: &BTreeMap<String, f64>) -> TrendReading;
    fn sentiment_trends(&self, samples: &[String]) -> TrendReading;
    fn trend_metrics(&self, series: &[f64]) -> TrendReading;
}

/// Constant-output placeholder model: every reading is a neutral trend of
/// 0.5 at confidence 0.8, regardless of input.
#[derive(Clone, Copy, Debug, Default)]
pub struct BaselineTrendModel;

impl BaselineTrendModel {
    const READING: TrendReading = TrendReading {
        trend: 0.5,
        confidence: 0.8,
    };
}

impl TrendModel for BaselineTrendModel {
    fn security_trends(&self, _alerts: &[Alert]) -> TrendReading {
        Self::READING
    }

    fn economic_impact(&self, _indicators: &BTreeMap<String, f64>) -> TrendReading {
        Self::READING
    }

    fn sentiment_trends(&self, _samples: &[String]) -> TrendReading {
        Self::READING
    }

    fn trend_metrics(&self, _series: &[f64]) -> TrendReading {
        Self::READING
    }
}
