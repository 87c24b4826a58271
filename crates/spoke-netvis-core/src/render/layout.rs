//! Force-directed layout physics parameters.

use serde::{Deserialize, Serialize};

/// Repulsion-model physics constants handed to the external renderer.
///
/// Constant across all graphs - not derived from graph content - so they
/// live in static configuration rather than being computed per request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutParams {
    pub node_distance: f64,
    pub central_gravity: f64,
    pub spring_length: f64,
    pub spring_strength: f64,
    pub damping: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            node_distance: 250.0,
            central_gravity: 0.33,
            spring_length: 110.0,
            spring_strength: 0.1,
            damping: 1.0,
        }
    }
}
