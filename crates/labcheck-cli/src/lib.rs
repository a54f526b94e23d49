//! CLI library components for labcheck.

pub mod logging;
pub mod pipeline;
pub mod render;
