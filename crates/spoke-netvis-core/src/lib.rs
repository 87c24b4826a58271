//! Core data model and graph pipeline for SPOKE network visualization.
//!
//! This crate turns database-returned traversals between an `Organism` and a
//! `Compound` node into one deduplicated, typed, directed graph together with
//! the styling a downstream renderer needs (per-type colors, a legend and
//! force-directed layout parameters).
//!
//! # Architecture
//!
//! - **types**: node records, display keys, traversal paths, metapath
//!   templates and the merged [`PathGraph`]
//! - **error**: comprehensive error handling with [`NetvisError`]
//! - **assemble**: identity resolution and multi-path merge
//! - **render**: palette, legend and layout preparation
//!
//! Everything here is pure and synchronous; query construction and database
//! access live in `spoke-netvis-neo4j`.
//!
//! # Example
//!
//! ```
//! use spoke_netvis_core::assemble::{assemble_graph, KeyProfile};
//! use spoke_netvis_core::error::NetvisResult;
//!
//! fn example() -> NetvisResult<()> {
//!     let graph = assemble_graph(&[], KeyProfile::Default)?;
//!     assert!(graph.is_empty());
//!     Ok(())
//! }
//! ```

pub mod assemble;
pub mod error;
pub mod render;
pub mod types;

// Re-exports for convenience
pub use assemble::{assemble_graph, resolve_display_key, KeyProfile};
pub use error::{NetvisError, NetvisResult};
pub use render::{
    prepare_render, LayoutParams, Legend, LegendEntry, Palette, RenderEdge, RenderNode,
    RenderedNetwork,
};
pub use types::{
    DisplayKey, GraphEdge, GraphNode, MetapathTemplate, NodeRecord, NodeType, PathGraph,
    TraversalHop, TraversalPath,
};
