//! Parameterized Cypher query construction.
//!
//! Pure string assembly - no network access happens here. Two modes exist:
//!
//! - **default_mode**: the fixed 1-2 hop enzyme skeleton joined with an
//!   all-shortest-paths search, plus its name-anchored variant and the
//!   unconstrained all-shortest-paths fallback
//! - **metapath**: one templated query per metapath table row

mod default_mode;
mod metapath;

#[cfg(test)]
mod tests;

use serde::Serialize;

pub use default_mode::{
    name_anchored_path_query, primary_path_query, shortest_path_fallback_query,
};
pub use metapath::metapath_query;

/// Upper bound on traversal records collected per query, to bound result
/// size on dense neighborhoods.
pub const ROW_LIMIT: usize = 10;

/// One Cypher parameter value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ParamValue {
    Int(i64),
    Text(String),
}

/// One executable traversal query.
///
/// `path_columns` names the path-typed columns of each returned row; the
/// backend extracts one traversal per named column per row. `row_limit`
/// caps how many rows are consumed from the result stream; `None` consumes
/// the stream whole.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CypherQuery {
    pub statement: String,
    pub parameters: Vec<(&'static str, ParamValue)>,
    pub path_columns: Vec<&'static str>,
    pub row_limit: Option<usize>,
}

impl CypherQuery {
    /// The value bound to a parameter name, if present. Test helper for
    /// asserting on built queries.
    pub fn parameter(&self, name: &str) -> Option<&ParamValue> {
        self.parameters
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }
}
