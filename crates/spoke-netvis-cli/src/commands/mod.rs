//! Command handlers. Each handler returns the process exit code.

pub mod render;
