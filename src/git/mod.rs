//! Git operations wrapper
//!
//! Every mutation goes through the `git` CLI behind the [`GitRunner`] trait,
//! so tests can swap in a recording fake. Repository state needed for the
//! idempotency check (`.git` markers, `.gitmodules`) is read from disk.

pub mod commit;
pub mod repo;
pub mod submodule;

pub use commit::commit_changes;
pub use repo::{ensure_repository, is_git_repo, InitOutcome};
pub use submodule::{
    add_submodule, is_registered, prepare_add, run_add, submodule_exists, AddOutcome, PendingAdd,
};

use crate::util::log_cmd;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

/// Errors that can occur during git operations
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git executable not found on PATH: {0}")]
    GitNotFound(#[from] which::Error),

    #[error("Failed to run git {args}: {source}")]
    Spawn {
        args: String,
        #[source]
        source: std::io::Error,
    },

    #[error("git {args} failed: {stderr}")]
    CommandFailed { args: String, stderr: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Outcome of one external command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionResult {
    pub success: bool,
    pub stderr: String,
}

impl ExecutionResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            stderr: String::new(),
        }
    }

    pub fn failed(stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            stderr: stderr.into(),
        }
    }

    /// Turn a failed result into a [`GitError::CommandFailed`].
    pub fn into_result(self, args: &[&str]) -> Result<(), GitError> {
        if self.success {
            Ok(())
        } else {
            Err(GitError::CommandFailed {
                args: args.join(" "),
                stderr: self.stderr.trim().to_string(),
            })
        }
    }
}

/// Runs git with the given arguments in a directory.
///
/// `Err` means git could not be started at all; a command that ran and
/// exited non-zero is an `Ok` result with `success == false`.
pub trait GitRunner {
    fn run(&self, args: &[&str], cwd: &Path) -> Result<ExecutionResult, GitError>;
}

/// Runs the real `git` executable, blocking until it exits.
#[derive(Debug, Clone)]
pub struct CliGitRunner {
    program: PathBuf,
}

impl CliGitRunner {
    /// Use a specific git executable.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Locate `git` on PATH.
    pub fn from_path() -> Result<Self, GitError> {
        let program = which::which("git")?;
        Ok(Self::new(program))
    }
}

impl GitRunner for CliGitRunner {
    fn run(&self, args: &[&str], cwd: &Path) -> Result<ExecutionResult, GitError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(args).current_dir(cwd);
        log_cmd(&cmd);

        let output = cmd.output().map_err(|source| GitError::Spawn {
            args: args.join(" "),
            source,
        })?;

        Ok(ExecutionResult {
            success: output.status.success(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
