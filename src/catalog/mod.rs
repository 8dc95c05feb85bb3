//! Data-source catalog: record shapes, the built-in catalog, filtering,
//! quality scoring, and per-analysis recommendations.

pub mod builtin;
pub mod filter;
pub mod quality;
pub mod recommend;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use builtin::all_data_sources;
pub use filter::{filter_data_sources, DataSourceFilter};
pub use quality::{calculate_data_quality_score, DataQualityScore, QualityWeights};
pub use recommend::{recommended_data_sources, AnalysisType};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    News,
    Government,
    Intelligence,
    Social,
    Economic,
    Security,
    Satellite,
    Academic,
    Ngo,
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SourceType::News => "news",
            SourceType::Government => "government",
            SourceType::Intelligence => "intelligence",
            SourceType::Social => "social",
            SourceType::Economic => "economic",
            SourceType::Security => "security",
            SourceType::Satellite => "satellite",
            SourceType::Academic => "academic",
            SourceType::Ngo => "ngo",
        };
        write!(f, "{label}")
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SourceCategory {
    OpenSource,
    Commercial,
    Government,
    Internal,
}

/// Geographic and temporal extent a source reports on.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SourceCoverage {
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub timespan: String,
}

/// One catalog entry describing an information feed. Catalog entries are
/// static; filtering and scoring never mutate them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DataSource {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub source_type: SourceType,
    pub category: SourceCategory,
    pub description: String,
    /// 0-100.
    pub reliability: u8,
    pub last_updated: DateTime<Utc>,
    pub update_frequency: String,
    pub coverage: SourceCoverage,
    #[serde(default)]
    pub tags: Vec<String>,
    pub available: bool,
    #[serde(default)]
    pub requires_subscription: bool,
}

impl DataSource {
    pub fn covers_region(&self, region: &str) -> bool {
        self.coverage.regions.iter().any(|r| r == region)
    }
}
