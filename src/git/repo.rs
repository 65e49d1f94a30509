//! Main repository initialization

use super::{GitError, GitRunner};
use std::path::Path;
use tracing::debug;

/// What [`ensure_repository`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Initialized,
    AlreadyInitialized,
}

/// Check for a repository marker (`.git` directory or gitfile).
pub fn is_git_repo<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().join(".git").exists()
}

/// Run `git init` in `root` unless it already holds a repository.
///
/// A failing `git init` is returned as [`GitError::CommandFailed`].
pub fn ensure_repository(runner: &dyn GitRunner, root: &Path) -> Result<InitOutcome, GitError> {
    if is_git_repo(root) {
        debug!(root = %root.display(), "repository marker present");
        return Ok(InitOutcome::AlreadyInitialized);
    }

    let args = ["init"];
    runner.run(&args, root)?.into_result(&args)?;
    Ok(InitOutcome::Initialized)
}
