use crate::analysis::{RiskWeights, ScenarioWeights, StabilityWeights};
use crate::catalog::QualityWeights;
use serde::{Deserialize, Serialize};

/// Root of `.savannah.toml`. Every group is optional in the file and
/// defaults to the documented weights.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SavannahConfig {
    pub risk: RiskWeights,
    pub stability: StabilityWeights,
    pub scenario: ScenarioWeights,
    pub quality: QualityWeights,
}

impl SavannahConfig {
    /// Validate each weight group, replacing invalid groups with defaults
    /// and normalizing the ones that only need rescaling.
    pub fn sanitize(&mut self) -> Vec<String> {
        let mut warnings = Vec::new();

        if let Err(reason) = self.risk.validate() {
            warnings.push(format!("risk weights: {reason}"));
            self.risk = RiskWeights::default();
        }
        if let Err(reason) = self.stability.validate() {
            warnings.push(format!("stability weights: {reason}"));
            self.stability.normalize();
            if self.stability.validate().is_err() {
                self.stability = StabilityWeights::default();
            }
        }
        if let Err(reason) = self.scenario.validate() {
            warnings.push(format!("scenario weights: {reason}"));
            self.scenario.normalize();
            if self.scenario.validate().is_err() {
                self.scenario = ScenarioWeights::default();
            }
        }
        if let Err(reason) = self.quality.validate() {
            warnings.push(format!("quality weights: {reason}"));
            self.quality.normalize();
            if self.quality.validate().is_err() {
                self.quality = QualityWeights::default();
            }
        }

        warnings
    }
}
