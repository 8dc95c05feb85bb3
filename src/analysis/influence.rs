//! Network influence over the connection graph.
//!
//! Influence weighs an entity's direct connections by strength; reach counts
//! every distinct entity within two hops. The traversal treats edges as
//! undirected and accumulates neighbors in discovery order, which is also
//! the order `key_nodes` reports them in.

use crate::core::{Connection, ConnectionStrength, Entity, EntityId, Score0To10};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const KEY_NODE_LIMIT: usize = 5;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NetworkInfluence {
    pub influence: Score0To10,
    pub reach: usize,
    /// First five entities discovered in the two-hop neighborhood.
    pub key_nodes: Vec<EntityId>,
}

/// Score an entity's position in the connection graph.
///
/// Influence is `(2*strong + medium) / direct_total`, doubled and capped at
/// 10; an entity with no connections scores 0 with empty reach.
pub fn analyze_network_influence(entity: &Entity, connections: &[Connection]) -> NetworkInfluence {
    let direct: Vec<&Connection> = connections.iter().filter(|c| c.touches(&entity.id)).collect();

    let strong = direct
        .iter()
        .filter(|c| c.strength == ConnectionStrength::Strong)
        .count();
    let medium = direct
        .iter()
        .filter(|c| c.strength == ConnectionStrength::Medium)
        .count();
    let raw = (2 * strong + medium) as f64 / direct.len().max(1) as f64;
    let influence = Score0To10::new(raw * 2.0);

    let reachable = two_hop_neighborhood(&entity.id, connections);
    let key_nodes = reachable
        .iter()
        .take(KEY_NODE_LIMIT)
        .map(|id| id.to_string())
        .collect();

    NetworkInfluence {
        influence,
        reach: reachable.len(),
        key_nodes,
    }
}

/// Distinct ids within two hops of `origin`, in discovery order, excluding
/// `origin` itself.
fn two_hop_neighborhood<'a>(origin: &str, connections: &'a [Connection]) -> Vec<&'a str> {
    let mut seen: HashSet<&'a str> = HashSet::new();
    let mut ordered: Vec<&'a str> = Vec::new();
    let mut first_degree: Vec<&'a str> = Vec::new();

    for conn in connections.iter().filter(|c| c.touches(origin)) {
        if let Some(neighbor) = conn.other_end(origin) {
            if neighbor != origin && seen.insert(neighbor) {
                ordered.push(neighbor);
                first_degree.push(neighbor);
            }
        }
    }

    for neighbor in first_degree {
        for conn in connections.iter().filter(|c| c.touches(neighbor)) {
            if let Some(second) = conn.other_end(neighbor) {
                if second != origin && seen.insert(second) {
                    ordered.push(second);
                }
            }
        }
    }

    ordered
}
