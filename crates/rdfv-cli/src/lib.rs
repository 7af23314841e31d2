//! CLI library components for the RDFa validation report tool.

pub mod config;
pub mod logging;
pub mod pipeline;
