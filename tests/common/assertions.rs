//! Custom assertion helpers for integration tests.

use std::path::Path;

use super::git_helpers;

/// Assert that `path` is registered and checked out as a submodule of `root`.
pub fn assert_submodule(root: &Path, path: &str) {
    let gitmodules = std::fs::read_to_string(root.join(".gitmodules"))
        .unwrap_or_else(|e| panic!("expected .gitmodules in {}: {}", root.display(), e));
    assert!(
        gitmodules.contains(&format!("path = {}", path)),
        ".gitmodules should list '{}':\n{}",
        path,
        gitmodules
    );
    assert!(
        root.join(path).join(".git").exists(),
        "'{}' should be checked out",
        path
    );
    assert!(
        git_helpers::gitlinks(root).iter().any(|p| p == path),
        "'{}' should be a gitlink in the index",
        path
    );
}

/// Assert that the superproject has exactly `expected` commits.
pub fn assert_commit_count(root: &Path, expected: usize) {
    let actual = git_helpers::commit_count(root);
    assert_eq!(
        actual,
        expected,
        "expected {} commit(s) in {}, found {}",
        expected,
        root.display(),
        actual
    );
}
