//! Setup context passed to the command handler
//!
//! Bundles the working directory and the config location resolved from the
//! command line.

use std::path::{Path, PathBuf};

/// Everything one setup pass needs to know about where it runs.
///
/// The working directory is assumed to be owned by this invocation for its
/// whole duration; concurrent runs against the same directory are not
/// detected.
#[derive(Debug, Clone)]
pub struct SetupContext {
    /// Root of the superproject (the process working directory)
    pub root: PathBuf,
    /// Config file as given on the command line, used in messages
    pub config_arg: String,
}

impl SetupContext {
    pub fn new(root: impl Into<PathBuf>, config_arg: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            config_arg: config_arg.into(),
        }
    }

    /// Get the superproject root as a `&Path`
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Config file location, resolved against the root when relative.
    pub fn config_path(&self) -> PathBuf {
        self.root.join(&self.config_arg)
    }
}
