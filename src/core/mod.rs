//! Core types
//!
//! Configuration model for declared submodules.

pub mod config;

pub use config::{ConfigError, SubmoduleConfig, SubmoduleSpec};
