//! submodule-setup - declarative git submodule setup
//!
//! Reads a YAML list of submodules, initializes the superproject repository
//! if needed, adds every submodule that is not already present, and commits
//! the result. A single invocation is assumed to own the working directory
//! for its whole run.

pub mod cli;
pub mod core;
pub mod git;
pub mod telemetry;
pub mod util;

pub use core::config::{SubmoduleConfig, SubmoduleSpec};
pub use git::{CliGitRunner, GitRunner};
