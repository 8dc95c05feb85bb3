//! Snapshot and scenario-variable loading.

use crate::analysis::ScenarioVariables;
use crate::core::IntelSnapshot;
use crate::errors::SavannahError;
use std::fs;
use std::path::Path;

/// Load an intelligence snapshot from a JSON file.
pub fn load_snapshot(path: &Path) -> Result<IntelSnapshot, SavannahError> {
    let contents = fs::read_to_string(path).map_err(|e| SavannahError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|e| SavannahError::snapshot(path, e.to_string()))
}

/// Load scenario variables from a JSON object of name -> number|string.
pub fn load_scenario_variables(path: &Path) -> Result<ScenarioVariables, SavannahError> {
    let contents = fs::read_to_string(path).map_err(|e| SavannahError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|e| SavannahError::snapshot(path, e.to_string()))
}
