//! The `neo4rs`-backed production backend.
//!
//! Sessions are scoped: each query borrows a pooled connection for the life
//! of its row stream and the pool reclaims it when the stream drops, on
//! every exit path. Failures are not retried here; they surface as fatal
//! fetch errors for the current render request.

use std::collections::HashMap;

use async_trait::async_trait;
use neo4rs::{query, Graph, Node, Path};
use tracing::debug;

use spoke_netvis_core::error::{NetvisError, NetvisResult};
use spoke_netvis_core::types::{NodeRecord, NodeType, TraversalHop, TraversalPath};

use crate::backend::PathQueryBackend;
use crate::config::Neo4jConfig;
use crate::cypher::{CypherQuery, ParamValue};

/// Authenticated connection pool against the remote graph database.
pub struct Neo4jBackend {
    graph: Graph,
}

impl Neo4jBackend {
    /// Establish the authenticated session pool.
    pub async fn connect(config: &Neo4jConfig) -> NetvisResult<Self> {
        config.validate()?;
        let graph = Graph::new(&config.uri, &config.user, &config.password)
            .await
            .map_err(|e| NetvisError::Connection(e.to_string()))?;
        debug!(uri = %config.uri, "connected to graph database");
        Ok(Self { graph })
    }
}

#[async_trait]
impl PathQueryBackend for Neo4jBackend {
    async fn fetch_paths(&self, built: &CypherQuery) -> NetvisResult<Vec<TraversalPath>> {
        let mut wire = query(&built.statement);
        for (name, value) in &built.parameters {
            wire = match value {
                ParamValue::Int(i) => wire.param(name, *i),
                ParamValue::Text(s) => wire.param(name, s.as_str()),
            };
        }

        let mut stream = self
            .graph
            .execute(wire)
            .await
            .map_err(|e| NetvisError::QueryExecution(e.to_string()))?;

        let mut paths = Vec::new();
        let mut rows = 0usize;
        while built.row_limit.map_or(true, |limit| rows < limit) {
            let row = match stream
                .next()
                .await
                .map_err(|e| NetvisError::QueryExecution(e.to_string()))?
            {
                Some(row) => row,
                None => break,
            };
            rows += 1;
            for column in &built.path_columns {
                let bolt_path: Path = row.get(column).map_err(|e| {
                    NetvisError::QueryExecution(format!("column {column}: {e}"))
                })?;
                paths.push(traversal_from_bolt(&bolt_path)?);
            }
        }

        debug!(rows, paths = paths.len(), "query returned");
        Ok(paths)
    }
}

/// Convert one wire path into the transport representation.
///
/// Relationships reference their endpoints by internal node id, so the
/// path's node list is indexed first and each hop looks its endpoints up.
fn traversal_from_bolt(path: &Path) -> NetvisResult<TraversalPath> {
    let mut records: HashMap<i64, NodeRecord> = HashMap::new();
    for node in path.nodes() {
        records.insert(node.id(), record_from_node(&node)?);
    }

    let mut hops = Vec::with_capacity(path.rels().len());
    for rel in path.rels() {
        let source = records.get(&rel.start_node_id()).cloned().ok_or_else(|| {
            NetvisError::QueryExecution(format!(
                "relationship references unknown start node {}",
                rel.start_node_id()
            ))
        })?;
        let target = records.get(&rel.end_node_id()).cloned().ok_or_else(|| {
            NetvisError::QueryExecution(format!(
                "relationship references unknown end node {}",
                rel.end_node_id()
            ))
        })?;
        hops.push(TraversalHop {
            source,
            relationship: rel.typ().to_string(),
            target,
        });
    }
    Ok(TraversalPath::new(hops))
}

fn record_from_node(node: &Node) -> NetvisResult<NodeRecord> {
    let label = node
        .labels()
        .into_iter()
        .next()
        .ok_or_else(|| NetvisError::QueryExecution("returned node has no label".to_string()))?;
    let node_type: NodeType = label.parse()?;

    let mut record = NodeRecord::new(node_type);
    for key in node.keys() {
        if let Some(value) = string_property(node, key) {
            record.set_property(key, value);
        }
    }
    Ok(record)
}

/// Stringify a node property. Identifiers are numeric for some categories
/// (Organism NCBI ids), so integer and float values are accepted alongside
/// strings; anything else is skipped.
fn string_property(node: &Node, key: &str) -> Option<String> {
    if let Ok(s) = node.get::<String>(key) {
        return Some(s);
    }
    if let Ok(i) = node.get::<i64>(key) {
        return Some(i.to_string());
    }
    if let Ok(f) = node.get::<f64>(key) {
        return Some(f.to_string());
    }
    if let Ok(b) = node.get::<bool>(key) {
        return Some(b.to_string());
    }
    None
}
