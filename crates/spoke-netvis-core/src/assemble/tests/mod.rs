//! Unit tests for identity resolution and merging.

mod identity_tests;

use crate::types::{NodeRecord, NodeType, TraversalHop, TraversalPath};

pub(crate) fn named(node_type: NodeType, name: &str) -> NodeRecord {
    NodeRecord::new(node_type).with_property("name", name)
}

pub(crate) fn hop(source: NodeRecord, relationship: &str, target: NodeRecord) -> TraversalHop {
    TraversalHop {
        source,
        relationship: relationship.to_string(),
        target,
    }
}

pub(crate) fn chain(records: &[NodeRecord], relationships: &[&str]) -> TraversalPath {
    assert_eq!(records.len(), relationships.len() + 1);
    let hops = relationships
        .iter()
        .enumerate()
        .map(|(i, rel)| hop(records[i].clone(), rel, records[i + 1].clone()))
        .collect();
    TraversalPath::new(hops)
}
