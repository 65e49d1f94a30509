//! Submodule registration
//!
//! A submodule counts as present when `.gitmodules` already lists its path,
//! or when its checkout already carries a `.git` marker. Either one alone is
//! enough, which covers both "registered but not checked out" and "checked
//! out but never registered".

use super::{GitError, GitRunner};
use crate::core::config::SubmoduleSpec;
use regex::Regex;
use std::path::Path;
use tracing::{debug, warn};

/// Result of processing one declared submodule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// `git submodule add` succeeded.
    Added,
    /// Already registered or checked out; nothing was run.
    AlreadyPresent,
    /// Required fields were missing; nothing was run.
    Invalid(Vec<&'static str>),
    /// Preparing or running the add failed.
    Failed(String),
}

impl AddOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, AddOutcome::Added)
    }
}

/// A declared submodule that passed the existence check and validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAdd<'a> {
    pub name: &'a str,
    pub url: &'a str,
    pub path: &'a str,
    pub branch: Option<&'a str>,
}

fn normalize(path: &str) -> &str {
    let path = path.trim();
    let path = path.strip_prefix("./").unwrap_or(path);
    path.trim_end_matches('/')
}

/// Check whether `.gitmodules` in `root` has a `path = <path>` entry.
pub fn is_registered(root: &Path, path: &str) -> Result<bool, GitError> {
    let gitmodules = root.join(".gitmodules");
    if !gitmodules.exists() {
        return Ok(false);
    }

    let content = std::fs::read_to_string(&gitmodules)?;
    let wanted = normalize(path);
    let re = Regex::new(r"(?m)^\s*path\s*=\s*(.+?)\s*$")?;

    let found = re
        .captures_iter(&content)
        .any(|caps| normalize(&caps[1]) == wanted);
    Ok(found)
}

/// The idempotency check: registered in `.gitmodules` or checked out on disk.
pub fn submodule_exists(root: &Path, path: &str) -> Result<bool, GitError> {
    if is_registered(root, path)? {
        return Ok(true);
    }
    Ok(root.join(normalize(path)).join(".git").exists())
}

/// Build the `git submodule add` argument list.
pub fn add_args<'a>(url: &'a str, path: &'a str, branch: Option<&'a str>) -> Vec<&'a str> {
    let mut args = vec!["submodule", "add"];
    if let Some(branch) = branch {
        args.extend(["-b", branch]);
    }
    args.extend([url, path]);
    args
}

/// Decide whether `spec` needs adding.
///
/// `Err` carries the final outcome for entries that are already present,
/// incomplete, or whose presence could not be checked. Nothing is written.
pub fn prepare_add<'a>(
    root: &Path,
    spec: &'a SubmoduleSpec,
) -> Result<PendingAdd<'a>, AddOutcome> {
    if let Some(path) = spec.path() {
        match submodule_exists(root, path) {
            Ok(true) => {
                debug!(path, "submodule already present");
                return Err(AddOutcome::AlreadyPresent);
            }
            Ok(false) => {}
            Err(e) => {
                warn!(path, error = %e, "could not read .gitmodules");
                return Err(AddOutcome::Failed(e.to_string()));
            }
        }
    }

    let missing = spec.missing_fields();
    match (spec.name(), spec.url(), spec.path()) {
        (Some(name), Some(url), Some(path)) if missing.is_empty() => Ok(PendingAdd {
            name,
            url,
            path,
            branch: spec.branch(),
        }),
        _ => Err(AddOutcome::Invalid(missing)),
    }
}

/// Create parent directories and run `git submodule add`.
pub fn run_add(runner: &dyn GitRunner, root: &Path, pending: &PendingAdd<'_>) -> AddOutcome {
    if let Some(parent) = root.join(pending.path).parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            return AddOutcome::Failed(format!(
                "could not create '{}': {}",
                parent.display(),
                e
            ));
        }
    }

    let args = add_args(pending.url, pending.path, pending.branch);
    match runner.run(&args, root) {
        Ok(result) if result.success => AddOutcome::Added,
        Ok(result) => AddOutcome::Failed(result.stderr.trim().to_string()),
        Err(e) => AddOutcome::Failed(e.to_string()),
    }
}

/// Add one submodule unless it is already present.
///
/// Never fails: every problem is folded into the returned [`AddOutcome`] so
/// that one bad entry does not stop the rest.
pub fn add_submodule(runner: &dyn GitRunner, root: &Path, spec: &SubmoduleSpec) -> AddOutcome {
    match prepare_add(root, spec) {
        Ok(pending) => run_add(runner, root, &pending),
        Err(outcome) => outcome,
    }
}
