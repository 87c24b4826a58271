//! Error types for network visualization operations.
//!
//! One error enum covers the whole pipeline: query construction, path
//! fetching, graph assembly and render preparation. Expected outcomes
//! (missing input, empty result set) are *not* errors - they are modeled as
//! `Option` / empty graphs at the call sites that produce them.

use thiserror::Error;

use crate::types::{DisplayKey, NodeType};

/// Result type alias for network visualization operations.
pub type NetvisResult<T> = Result<T, NetvisError>;

/// Comprehensive error type for the visualization pipeline.
///
/// Every fatal variant aborts the current render request; none of them leave
/// a partially populated graph behind.
#[derive(Error, Debug)]
pub enum NetvisError {
    // ========== Template Errors ==========
    /// A metapath template's declared hop count does not match its
    /// relationship labels. Raised before any query executes.
    #[error("Invalid metapath template: declared {declared} hops, got {actual} relationship labels")]
    TemplateValidation { declared: usize, actual: usize },

    /// A relationship label contains characters that cannot be embedded in a
    /// Cypher relationship pattern.
    #[error("Invalid relationship label in metapath template: {0:?}")]
    InvalidRelationshipLabel(String),

    /// The metapath table could not be parsed.
    #[error("Metapath table error: {0}")]
    TemplateTable(String),

    // ========== Database Errors ==========
    /// The database session could not be established.
    #[error("Graph database connection failed: {0}")]
    Connection(String),

    /// A query failed at the protocol level.
    #[error("Graph query execution failed: {0}")]
    QueryExecution(String),

    // ========== Assembly Errors ==========
    /// A returned node satisfies none of the display-key attempts.
    #[error("Cannot resolve display key for {node_type} node: none of {attempted:?} present")]
    IdentityResolution {
        node_type: NodeType,
        attempted: Vec<&'static str>,
    },

    /// A database label is not one of the known node categories.
    #[error("Unknown node label: {0}")]
    UnknownLabel(String),

    /// Two paths resolved the same display key to different node types.
    #[error("Node type conflict for key {key}: {existing} vs {incoming}")]
    NodeTypeConflict {
        key: DisplayKey,
        existing: NodeType,
        incoming: NodeType,
    },

    // ========== Render Errors ==========
    /// A node type present in the graph has no entry in the color palette.
    #[error("No palette color for node type {0}")]
    UnknownNodeType(NodeType),

    // ========== Configuration Errors ==========
    /// Invalid or unloadable configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    // ========== Serialization Errors ==========
    /// Serialization error at the renderer hand-off.
    #[error("Serialization error: {0}")]
    Serialization(String),

    // ========== I/O Errors ==========
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for NetvisError {
    fn from(err: csv::Error) -> Self {
        NetvisError::TemplateTable(err.to_string())
    }
}

impl From<serde_json::Error> for NetvisError {
    fn from(err: serde_json::Error) -> Self {
        NetvisError::Serialization(err.to_string())
    }
}

// Compile-time verification that NetvisError is thread-safe
static_assertions::assert_impl_all!(NetvisError: Send, Sync, std::error::Error);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_template_validation() {
        let err = NetvisError::TemplateValidation {
            declared: 3,
            actual: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains('2'));
        assert!(msg.contains("hops"));
    }

    #[test]
    fn test_error_display_identity_resolution() {
        let err = NetvisError::IdentityResolution {
            node_type: NodeType::Protein,
            attempted: vec!["name", "identifier"],
        };
        let msg = err.to_string();
        assert!(msg.contains("Protein"));
        assert!(msg.contains("name"));
        assert!(msg.contains("identifier"));
    }

    #[test]
    fn test_error_display_node_type_conflict() {
        let err = NetvisError::NodeTypeConflict {
            key: DisplayKey::new("ATP"),
            existing: NodeType::Compound,
            incoming: NodeType::Gene,
        };
        let msg = err.to_string();
        assert!(msg.contains("ATP"));
        assert!(msg.contains("Compound"));
        assert!(msg.contains("Gene"));
    }

    #[test]
    fn test_error_display_unknown_node_type() {
        let err = NetvisError::UnknownNodeType(NodeType::Reaction);
        assert!(err.to_string().contains("Reaction"));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ broken").unwrap_err();
        let err: NetvisError = json_err.into();
        assert!(matches!(err, NetvisError::Serialization(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: NetvisError = io_err.into();
        assert!(matches!(err, NetvisError::Io(_)));
    }

    #[test]
    fn test_netvis_result_type_alias() {
        fn example_fn() -> NetvisResult<u32> {
            Ok(42)
        }
        assert_eq!(example_fn().unwrap(), 42);
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NetvisError>();
    }
}
