//! Database-returned traversals.
//!
//! A traversal is an ordered sequence of directed hops. These are transient
//! values: produced by one fetch, consumed by assembly, then discarded.

use serde::{Deserialize, Serialize};

use super::node::NodeRecord;

/// One directed relationship step within a traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalHop {
    pub source: NodeRecord,
    pub relationship: String,
    pub target: NodeRecord,
}

/// One database-returned traversal: an ordered hop sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalPath {
    pub hops: Vec<TraversalHop>,
}

impl TraversalPath {
    pub fn new(hops: Vec<TraversalHop>) -> Self {
        Self { hops }
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// Number of node occurrences in this traversal (endpoints per hop).
    ///
    /// Used by the non-increasing-merge property: the merged graph can never
    /// hold more nodes than the sum of this over all input paths.
    pub fn node_occurrences(&self) -> usize {
        self.hops.len() * 2
    }

    /// The complete node sequence of this traversal, as raw identity
    /// strings. Two traversals with identical sequences are duplicates.
    pub fn node_sequence(&self) -> Vec<String> {
        let mut sequence = Vec::with_capacity(self.hops.len() + 1);
        if let Some(first) = self.hops.first() {
            sequence.push(first.source.raw_signature());
        }
        for hop in &self.hops {
            sequence.push(hop.target.raw_signature());
        }
        sequence
    }
}
