//! Display-key resolution.
//!
//! A node's identity is derived from its raw attributes through an explicit
//! ordered attempt list: first present, non-empty attribute wins. There is
//! no control flow by failure; the attempts are plain data.

use crate::error::{NetvisError, NetvisResult};
use crate::types::{DisplayKey, NodeRecord, NodeType};

/// Which attempt list applies to a render request.
///
/// The metapath traversal intentionally prefers a different display field
/// for some categories; everything else falls through the shared chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyProfile {
    /// Shared chain: `name`, then `identifier`.
    #[default]
    Default,
    /// Shared chain plus a per-type extra attempt (`description` for
    /// `Protein` nodes).
    Metapath,
}

impl KeyProfile {
    /// The ordered attribute attempts for one node category.
    pub fn attempts(&self, node_type: NodeType) -> Vec<&'static str> {
        let mut attempts = vec!["name", "identifier"];
        if let Some(extra) = self.extra_attempt(node_type) {
            attempts.push(extra);
        }
        attempts
    }

    fn extra_attempt(&self, node_type: NodeType) -> Option<&'static str> {
        match (self, node_type) {
            (KeyProfile::Metapath, NodeType::Protein) => Some("description"),
            _ => None,
        }
    }
}

/// Resolve the display key for one node record.
///
/// # Errors
///
/// [`NetvisError::IdentityResolution`] when no attempt yields a present,
/// non-empty attribute - the node cannot be keyed, which is fatal for the
/// current render request.
pub fn resolve_display_key(record: &NodeRecord, profile: KeyProfile) -> NetvisResult<DisplayKey> {
    let attempts = profile.attempts(record.node_type);
    attempts
        .iter()
        .find_map(|attr| record.property(attr))
        .map(DisplayKey::new)
        .ok_or(NetvisError::IdentityResolution {
            node_type: record.node_type,
            attempted: attempts,
        })
}
