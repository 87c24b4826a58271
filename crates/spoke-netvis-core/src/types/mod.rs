//! Data model for the visualization pipeline.
//!
//! - **node**: the fixed node category set, raw node records and display keys
//! - **path**: database-returned traversals (transient, per fetch)
//! - **template**: metapath templates and their CSV table loader
//! - **graph**: the merged, deduplicated output graph

mod graph;
mod node;
mod path;
mod template;

#[cfg(test)]
mod tests;

pub use graph::{GraphEdge, GraphNode, PathGraph};
pub use node::{DisplayKey, NodeRecord, NodeType};
pub use path::{TraversalHop, TraversalPath};
pub use template::{load_metapath_table, MetapathTemplate};
