//! Alert feed triage: pure filtering and severity ordering.

use crate::core::{Alert, AlertSeverity, AlertStatus, EntityId};

/// Criteria for narrowing the alert feed. Every field is optional; present
/// criteria compose as a logical AND.
#[derive(Clone, Debug, Default)]
pub struct AlertFilter {
    pub severity: Option<AlertSeverity>,
    pub status: Option<AlertStatus>,
    /// Case-insensitive substring match over title and description.
    pub search: Option<String>,
    pub related_entity: Option<EntityId>,
}

pub fn filter_alerts<'a>(alerts: &'a [Alert], filter: &AlertFilter) -> Vec<&'a Alert> {
    alerts.iter().filter(|a| passes(a, filter)).collect()
}

fn passes(alert: &Alert, filter: &AlertFilter) -> bool {
    if let Some(severity) = filter.severity {
        if alert.severity() != severity {
            return false;
        }
    }
    if let Some(status) = filter.status {
        if alert.status() != status {
            return false;
        }
    }
    if let Some(ref term) = filter.search {
        let needle = term.to_lowercase();
        let core = alert.core();
        let matched = core.title.to_lowercase().contains(&needle)
            || core.description.to_lowercase().contains(&needle);
        if !matched {
            return false;
        }
    }
    if let Some(ref entity_id) = filter.related_entity {
        if !alert.mentions(entity_id) {
            return false;
        }
    }
    true
}

/// Order alerts highest severity first; ties keep their feed order.
pub fn sort_alerts_by_severity(alerts: &mut [&Alert]) {
    alerts.sort_by(|a, b| b.severity().weight().cmp(&a.severity().weight()));
}
