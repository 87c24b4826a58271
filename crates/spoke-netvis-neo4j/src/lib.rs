//! Neo4j boundary for SPOKE network visualization.
//!
//! Builds parameterized Cypher traversal queries, executes them against a
//! remote graph database and drives the end-to-end render pipeline:
//!
//! caller -> query builder -> path fetcher -> graph assembler -> render
//! preparer -> external renderer.
//!
//! # Architecture
//!
//! - **config**: authenticated session settings from files and environment
//! - **cypher**: pure query construction (default mode and metapath mode)
//! - **backend**: the [`PathQueryBackend`] seam between fetch logic and the
//!   wire client, so the ladder is testable without a database
//! - **client**: the `neo4rs`-backed production backend
//! - **fetch**: the fallback ladder and per-template accumulation
//! - **pipeline**: one-call render request handling

pub mod backend;
pub mod client;
pub mod config;
pub mod cypher;
pub mod fetch;
pub mod pipeline;

// Re-exports for convenience
pub use backend::PathQueryBackend;
pub use client::Neo4jBackend;
pub use config::Neo4jConfig;
pub use cypher::{
    metapath_query, name_anchored_path_query, primary_path_query, shortest_path_fallback_query,
    CypherQuery, ParamValue, ROW_LIMIT,
};
pub use fetch::PathFetcher;
pub use pipeline::{render_network, RenderOptions, RenderRequest};
