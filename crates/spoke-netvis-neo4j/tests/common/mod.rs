//! Shared helpers for pipeline integration tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use spoke_netvis_core::error::NetvisResult;
use spoke_netvis_core::types::{NodeRecord, NodeType, TraversalHop, TraversalPath};
use spoke_netvis_neo4j::cypher::CypherQuery;
use spoke_netvis_neo4j::PathQueryBackend;

/// Scripted backend: replays canned responses in order and records every
/// statement it was asked to run.
pub struct ScriptedBackend {
    statements: Mutex<Vec<String>>,
    responses: Mutex<VecDeque<NetvisResult<Vec<TraversalPath>>>>,
}

impl ScriptedBackend {
    pub fn new(responses: Vec<NetvisResult<Vec<TraversalPath>>>) -> Self {
        Self {
            statements: Mutex::new(Vec::new()),
            responses: Mutex::new(responses.into()),
        }
    }

    pub fn recorded(&self) -> Vec<String> {
        self.statements.lock().unwrap().clone()
    }
}

#[async_trait]
impl PathQueryBackend for ScriptedBackend {
    async fn fetch_paths(&self, query: &CypherQuery) -> NetvisResult<Vec<TraversalPath>> {
        self.statements
            .lock()
            .unwrap()
            .push(query.statement.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected query: {}", query.statement))
    }
}

pub fn named(node_type: NodeType, name: &str) -> NodeRecord {
    NodeRecord::new(node_type).with_property("name", name)
}

/// Build a traversal from an alternating node/relationship chain.
pub fn chain(records: &[NodeRecord], relationships: &[&str]) -> TraversalPath {
    assert_eq!(records.len(), relationships.len() + 1);
    let hops = relationships
        .iter()
        .enumerate()
        .map(|(i, rel)| TraversalHop {
            source: records[i].clone(),
            relationship: rel.to_string(),
            target: records[i + 1].clone(),
        })
        .collect();
    TraversalPath::new(hops)
}
