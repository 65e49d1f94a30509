//! Stage and commit submodule additions

use super::{GitError, GitRunner};
use std::path::Path;

/// Commit message used for a setup pass driven by `config_name`.
pub fn commit_message(config_name: &str) -> String {
    format!("Added/updated submodules from {}", config_name)
}

/// Stage everything in `root` and commit it.
///
/// Both steps are checked; the first failure is returned.
pub fn commit_changes(
    runner: &dyn GitRunner,
    root: &Path,
    config_name: &str,
) -> Result<(), GitError> {
    let stage = ["add", "-A"];
    runner.run(&stage, root)?.into_result(&stage)?;

    let message = commit_message(config_name);
    let commit = ["commit", "-m", message.as_str()];
    runner.run(&commit, root)?.into_result(&commit)
}
