//! CLI command implementations

pub mod setup;
