//! The color legend for one rendered graph.

use serde::Serialize;

use crate::types::NodeType;

/// One legend row: a node category and its assigned color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub node_type: NodeType,
    pub color: String,
}

/// The palette restricted to the types actually present in a graph,
/// preserving first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn color_for(&self, node_type: NodeType) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.node_type == node_type)
            .map(|e| e.color.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &LegendEntry> {
        self.entries.iter()
    }
}
