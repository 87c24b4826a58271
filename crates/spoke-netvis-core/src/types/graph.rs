//! The merged output graph.
//!
//! Nodes are keyed by display key in first-seen order; edges are directed
//! and identified by `(source, target, relationship)`. Parallel edges with
//! distinct relationship types between the same endpoints coexist; exact
//! duplicates collapse, which makes merging the same path twice a no-op.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::error::{NetvisError, NetvisResult};

use super::node::{DisplayKey, NodeType};

/// One rendered node: resolved key plus its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub key: DisplayKey,
    pub node_type: NodeType,
}

/// One directed, typed edge between resolved keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GraphEdge {
    pub source: DisplayKey,
    pub target: DisplayKey,
    pub relationship: String,
}

/// The deduplicated, typed, directed graph produced by merging traversals.
///
/// Owned exclusively by the render request that produced it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PathGraph {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    #[serde(skip)]
    node_index: HashMap<DisplayKey, usize>,
    #[serde(skip)]
    edge_seen: HashSet<GraphEdge>,
}

impl PathGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Nodes in first-seen order.
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Edges in insertion order, exact duplicates removed.
    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// The category recorded for a key, if the node is present.
    pub fn node_type(&self, key: &DisplayKey) -> Option<NodeType> {
        self.node_index.get(key).map(|&i| self.nodes[i].node_type)
    }

    /// Distinct node types in first-seen order.
    pub fn node_types_first_seen(&self) -> Vec<NodeType> {
        let mut seen = HashSet::new();
        self.nodes
            .iter()
            .filter(|n| seen.insert(n.node_type))
            .map(|n| n.node_type)
            .collect()
    }

    /// Insert a node. First occurrence wins for the type; a later occurrence
    /// with a different type for the same key is a data-integrity error.
    pub fn insert_node(&mut self, key: DisplayKey, node_type: NodeType) -> NetvisResult<()> {
        if let Some(&index) = self.node_index.get(&key) {
            let existing = self.nodes[index].node_type;
            if existing != node_type {
                return Err(NetvisError::NodeTypeConflict {
                    key,
                    existing,
                    incoming: node_type,
                });
            }
            return Ok(());
        }
        self.node_index.insert(key.clone(), self.nodes.len());
        self.nodes.push(GraphNode { key, node_type });
        Ok(())
    }

    /// Insert a directed edge. A duplicate `(source, target, relationship)`
    /// triple is ignored; the same endpoints with a different relationship
    /// type form a parallel edge.
    pub fn insert_edge(&mut self, edge: GraphEdge) {
        if self.edge_seen.insert(edge.clone()) {
            self.edges.push(edge);
        }
    }
}

impl PartialEq for PathGraph {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.edges == other.edges
    }
}
