// Test utility module for savannah integration tests
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use savannah::{
    Alert, AlertCore, AlertSeverity, AlertStatus, Connection, ConnectionStrength, Entity,
    EntityType,
};

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap()
}

pub fn entity(id: &str, entity_type: EntityType) -> Entity {
    Entity {
        id: id.to_string(),
        name: format!("Entity {id}"),
        entity_type,
        role: None,
        connections: 0,
        last_updated: fixed_now() - chrono::Duration::days(3),
    }
}

pub fn connection(source: &str, target: &str, strength: ConnectionStrength) -> Connection {
    Connection {
        source: source.to_string(),
        target: target.to_string(),
        strength,
        connection_type: "associate".to_string(),
        last_updated: None,
    }
}

pub fn alert(id: &str, severity: AlertSeverity, related: &[&str]) -> Alert {
    Alert::Base {
        core: AlertCore {
            id: id.to_string(),
            alert_type: "security".to_string(),
            title: format!("Alert {id}"),
            description: "integration fixture".to_string(),
            timeframe: "48h".to_string(),
            severity,
            status: AlertStatus::New,
            related_entities: related.iter().map(|s| s.to_string()).collect(),
        },
    }
}
