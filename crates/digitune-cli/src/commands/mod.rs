//! CLI command implementations

pub mod chart;
pub mod generate;
pub mod json_output;
pub mod styles;
