//! Render-ready network preparation.

use serde::Serialize;

use crate::error::{NetvisError, NetvisResult};
use crate::types::{DisplayKey, NodeType, PathGraph};

use super::layout::LayoutParams;
use super::legend::{Legend, LegendEntry};
use super::palette::Palette;

/// One node as handed to the renderer: key, category and assigned color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderNode {
    pub id: DisplayKey,
    pub node_type: NodeType,
    pub color: String,
}

/// One directed edge as handed to the renderer, with its tooltip label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderEdge {
    pub from: DisplayKey,
    pub to: DisplayKey,
    pub relationship: String,
    pub title: String,
}

/// Everything the external renderer needs for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedNetwork {
    pub nodes: Vec<RenderNode>,
    pub edges: Vec<RenderEdge>,
    pub legend: Legend,
    pub layout: LayoutParams,
}

impl RenderedNetwork {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// Prepare the render hand-off for one assembled graph.
///
/// Colors come from the injected `palette`; the legend is the palette
/// restricted to types present in the graph, in first-seen order. A type
/// with no palette entry is [`NetvisError::UnknownNodeType`] - reported,
/// not silently defaulted.
pub fn prepare_render(
    graph: &PathGraph,
    palette: &Palette,
    layout: LayoutParams,
) -> NetvisResult<RenderedNetwork> {
    let color_of = |node_type: NodeType| -> NetvisResult<String> {
        palette
            .color(node_type)
            .map(str::to_string)
            .ok_or(NetvisError::UnknownNodeType(node_type))
    };

    let nodes = graph
        .nodes()
        .iter()
        .map(|node| {
            Ok(RenderNode {
                id: node.key.clone(),
                node_type: node.node_type,
                color: color_of(node.node_type)?,
            })
        })
        .collect::<NetvisResult<Vec<_>>>()?;

    let entries = graph
        .node_types_first_seen()
        .into_iter()
        .map(|node_type| {
            Ok(LegendEntry {
                node_type,
                color: color_of(node_type)?,
            })
        })
        .collect::<NetvisResult<Vec<_>>>()?;

    let edges = graph
        .edges()
        .iter()
        .map(|edge| RenderEdge {
            from: edge.source.clone(),
            to: edge.target.clone(),
            relationship: edge.relationship.clone(),
            title: format!("Edge Type: {}", edge.relationship),
        })
        .collect();

    Ok(RenderedNetwork {
        nodes,
        edges,
        legend: Legend { entries },
        layout,
    })
}
