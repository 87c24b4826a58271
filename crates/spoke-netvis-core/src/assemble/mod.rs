//! Graph assembly: identity resolution and multi-path merge.
//!
//! Assembly is all-or-nothing: any data-integrity error aborts the merge and
//! no partially populated graph escapes to the caller.

mod identity;
mod merge;

#[cfg(test)]
mod tests;

pub use identity::{resolve_display_key, KeyProfile};
pub use merge::assemble_graph;
