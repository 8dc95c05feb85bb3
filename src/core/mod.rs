pub mod score_types;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use score_types::{Score0To10, Score0To100};

/// Identifier of a tracked entity. Snapshot producers guarantee uniqueness
/// within a snapshot; the analytics layer never mints ids of its own.
pub type EntityId = String;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Person,
    Organization,
    Location,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EntityType::Person => "Person",
            EntityType::Organization => "Organization",
            EntityType::Location => "Location",
        };
        write!(f, "{label}")
    }
}

/// A tracked actor in the relationship graph. Owned by the snapshot
/// producer; the analytics layer only ever reads these.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub connections: usize,
    pub last_updated: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ConnectionStrength {
    Strong,
    Medium,
    Weak,
}

/// Edge between two entities. Stored as a source/target pair but used as an
/// undirected edge: traversal checks both endpoints everywhere.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Connection {
    pub source: EntityId,
    pub target: EntityId,
    pub strength: ConnectionStrength,
    #[serde(rename = "type")]
    pub connection_type: String,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Connection {
    pub fn touches(&self, id: &str) -> bool {
        self.source == id || self.target == id
    }

    /// The endpoint opposite `id`, if `id` is one of the two endpoints.
    pub fn other_end(&self, id: &str) -> Option<&str> {
        if self.source == id {
            Some(self.target.as_str())
        } else if self.target == id {
            Some(self.source.as_str())
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    High,
    Medium,
    Low,
}

impl AlertSeverity {
    /// Sort weight, highest severity first.
    pub fn weight(&self) -> u8 {
        match self {
            AlertSeverity::High => 3,
            AlertSeverity::Medium => 2,
            AlertSeverity::Low => 1,
        }
    }
}

impl std::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AlertSeverity::High => "high",
            AlertSeverity::Medium => "medium",
            AlertSeverity::Low => "low",
        };
        write!(f, "{label}")
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum AlertStatus {
    New,
    InProgress,
    Resolved,
}

/// Fields shared by every alert variant.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AlertCore {
    pub id: String,
    #[serde(rename = "type")]
    pub alert_type: String,
    pub title: String,
    pub description: String,
    pub timeframe: String,
    pub severity: AlertSeverity,
    pub status: AlertStatus,
    #[serde(default)]
    pub related_entities: Vec<EntityId>,
}

/// An alert from the external feed. Enhanced alerts carry source confidence
/// and a region; the variant tag makes the discrimination explicit instead
/// of relying on field presence.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Alert {
    Base {
        #[serde(flatten)]
        core: AlertCore,
    },
    Enhanced {
        #[serde(flatten)]
        core: AlertCore,
        confidence: u8,
        region: String,
    },
}

impl Alert {
    pub fn core(&self) -> &AlertCore {
        match self {
            Alert::Base { core } => core,
            Alert::Enhanced { core, .. } => core,
        }
    }

    pub fn severity(&self) -> AlertSeverity {
        self.core().severity
    }

    pub fn status(&self) -> AlertStatus {
        self.core().status
    }

    /// Whether the alert names the given entity among its related entities.
    pub fn mentions(&self, entity_id: &str) -> bool {
        self.core()
            .related_entities
            .iter()
            .any(|id| id == entity_id)
    }
}

/// Qualitative risk classification derived from a numeric 0-10 score.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: Score0To10) -> Self {
        let value = score.value();
        if value >= 7.0 {
            RiskLevel::High
        } else if value >= 4.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        };
        write!(f, "{label}")
    }
}

/// One self-contained intelligence snapshot: the unit the CLI loads and the
/// analytics layer reads. Producers own the lifecycle of every record.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct IntelSnapshot {
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub connections: Vec<Connection>,
    #[serde(default)]
    pub alerts: Vec<Alert>,
}
