//! Render preparation: deterministic styling for the external renderer.
//!
//! - **palette**: immutable node-type color map, injected rather than global
//! - **legend**: the palette restricted to types present in one graph
//! - **layout**: fixed force-directed physics parameters
//! - **prepare**: the render-ready network hand-off

mod layout;
mod legend;
mod palette;
mod prepare;

#[cfg(test)]
mod tests;

pub use layout::LayoutParams;
pub use legend::{Legend, LegendEntry};
pub use palette::Palette;
pub use prepare::{prepare_render, RenderEdge, RenderNode, RenderedNetwork};
