// Export modules for library usage
pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    Alert, AlertCore, AlertSeverity, AlertStatus, Connection, ConnectionStrength, Entity,
    EntityId, EntityType, IntelSnapshot, RiskLevel, Score0To10, Score0To100,
};

pub use crate::analysis::{
    analyze_network_influence, assess_snapshot, average_stability, calculate_stability_index,
    filter_alerts, generate_confidence_score, sort_alerts_by_severity, AlertFilter,
    AnalysisReport, BaselineTrendModel, EntityAssessment, ImpactLevel, NetworkInfluence,
    RiskAnalyzer, RiskScore, RiskWeights, ScenarioBaseData, ScenarioProcessor, ScenarioResults,
    ScenarioValue, ScenarioVariables, ScenarioWeights, StabilityWeights, TrendModel, TrendReading,
};

pub use crate::catalog::{
    all_data_sources, calculate_data_quality_score, filter_data_sources,
    recommended_data_sources, AnalysisType, DataQualityScore, DataSource, DataSourceFilter,
    QualityWeights, SourceCategory, SourceCoverage, SourceType,
};

pub use crate::config::{load_config, SavannahConfig};
pub use crate::errors::SavannahError;
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::store::{JsonFileStore, MemoryStore, Preferences, PreferenceStore};
