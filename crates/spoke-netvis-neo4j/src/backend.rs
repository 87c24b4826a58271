//! The seam between fetch logic and the wire client.

use async_trait::async_trait;

use spoke_netvis_core::error::NetvisResult;
use spoke_netvis_core::types::TraversalPath;

use crate::cypher::CypherQuery;

/// Executes one built query and returns the traversals it matched.
///
/// Production uses [`crate::client::Neo4jBackend`]; tests substitute scripted
/// backends so the fallback ladder can be exercised without a database.
/// Implementations must release any session resources on every exit path,
/// success or failure.
#[async_trait]
pub trait PathQueryBackend: Send + Sync {
    async fn fetch_paths(&self, query: &CypherQuery) -> NetvisResult<Vec<TraversalPath>>;
}
