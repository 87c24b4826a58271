//! Multi-path merge into one [`PathGraph`].

use std::collections::HashSet;

use tracing::debug;

use crate::error::NetvisResult;
use crate::types::{GraphEdge, PathGraph, TraversalPath};

use super::identity::{resolve_display_key, KeyProfile};

/// Merge a collection of traversals into one graph.
///
/// For every hop, both endpoint keys are resolved under `profile`, both
/// nodes are inserted (first occurrence wins for the type, a conflicting
/// later type is a data-integrity error) and the directed edge is inserted.
/// Under [`KeyProfile::Metapath`] repeated complete traversals (identical
/// node sequences) are dropped before merging, since overlapping template
/// rows can return the same records.
///
/// Merging is order-independent apart from first-seen ordering, and
/// idempotent: merging an identical path twice yields an identical graph.
/// The node count never exceeds the sum of node occurrences across inputs.
pub fn assemble_graph(paths: &[TraversalPath], profile: KeyProfile) -> NetvisResult<PathGraph> {
    let mut graph = PathGraph::new();
    let mut seen_sequences: HashSet<Vec<String>> = HashSet::new();
    let mut merged = 0usize;

    for path in paths {
        if profile == KeyProfile::Metapath && !seen_sequences.insert(path.node_sequence()) {
            continue;
        }
        for hop in &path.hops {
            let source = resolve_display_key(&hop.source, profile)?;
            let target = resolve_display_key(&hop.target, profile)?;
            graph.insert_node(source.clone(), hop.source.node_type)?;
            graph.insert_node(target.clone(), hop.target.node_type)?;
            graph.insert_edge(GraphEdge {
                source,
                target,
                relationship: hop.relationship.clone(),
            });
        }
        merged += 1;
    }

    debug!(
        paths = paths.len(),
        merged,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "assembled graph"
    );
    Ok(graph)
}
