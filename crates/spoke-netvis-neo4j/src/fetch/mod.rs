//! Path fetching with the default-mode fallback ladder.
//!
//! Default mode: identifier-anchored primary query; if it yields zero paths
//! the name-anchored variant runs exactly once; if both are empty, one
//! unconstrained all-shortest-paths query between the raw anchors decides
//! the final (possibly empty) result.
//!
//! Template mode: every template is validated up front, then one query per
//! row runs sequentially against the same backend and all traversals
//! accumulate into one collection. The queries are independent of each
//! other; merging downstream is order-independent.


use tracing::{debug, info};

use spoke_netvis_core::error::NetvisResult;
use spoke_netvis_core::types::{MetapathTemplate, TraversalPath};

use crate::backend::PathQueryBackend;
use crate::cypher::{
    metapath_query, name_anchored_path_query, primary_path_query, shortest_path_fallback_query,
};

/// Executes built queries against one backend for one render request.
pub struct PathFetcher<'a, B: PathQueryBackend> {
    backend: &'a B,
}

impl<'a, B: PathQueryBackend> PathFetcher<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// Default-mode fetch: primary query, then the name-anchored variant,
    /// then the unconstrained fallback. An empty final result is a valid
    /// outcome ("no path found"), not an error.
    pub async fn fetch_default(
        &self,
        organism_id: i64,
        compound_id: &str,
    ) -> NetvisResult<Vec<TraversalPath>> {
        let paths = self
            .backend
            .fetch_paths(&primary_path_query(organism_id, compound_id))
            .await?;
        if !paths.is_empty() {
            return Ok(paths);
        }

        debug!(organism_id, compound_id, "primary query empty, trying name anchor");
        let paths = self
            .backend
            .fetch_paths(&name_anchored_path_query(organism_id, compound_id))
            .await?;
        if !paths.is_empty() {
            return Ok(paths);
        }

        info!(organism_id, compound_id, "falling back to all shortest paths");
        self.backend
            .fetch_paths(&shortest_path_fallback_query(organism_id, compound_id))
            .await
    }

    /// Template-mode fetch: one query per metapath row, sequential, results
    /// accumulated. All templates are validated before any query executes.
    pub async fn fetch_metapaths(
        &self,
        organism_id: i64,
        compound_id: &str,
        templates: &[MetapathTemplate],
    ) -> NetvisResult<Vec<TraversalPath>> {
        for template in templates {
            template.validate()?;
        }

        let mut paths = Vec::new();
        for template in templates {
            let query = metapath_query(organism_id, compound_id, template)?;
            let mut result = self.backend.fetch_paths(&query).await?;
            debug!(
                hop_count = template.hop_count,
                returned = result.len(),
                "metapath query done"
            );
            paths.append(&mut result);
        }
        Ok(paths)
    }
}
