//! Git helper utilities for integration tests.
//!
//! Creates local source repositories and inspects the superproject, all
//! offline through the `git` CLI.

use std::fs;
use std::path::Path;
use std::process::Command;

/// Environment that lets git commit and clone `file://` submodules without
/// any global configuration.
pub const GIT_TEST_ENV: [(&str, &str); 8] = [
    ("GIT_AUTHOR_NAME", "Test User"),
    ("GIT_AUTHOR_EMAIL", "test@example.com"),
    ("GIT_COMMITTER_NAME", "Test User"),
    ("GIT_COMMITTER_EMAIL", "test@example.com"),
    ("GIT_CONFIG_COUNT", "1"),
    ("GIT_CONFIG_KEY_0", "protocol.file.allow"),
    ("GIT_CONFIG_VALUE_0", "always"),
    ("NO_COLOR", "1"),
];

/// Initialize a non-bare git repository with user config.
pub fn init_repo(path: &Path) {
    fs::create_dir_all(path).unwrap();
    git(path, &["init", "-b", "main"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);
}

/// Create a file, stage, and commit it. Returns the commit hash.
pub fn commit_file(repo_path: &Path, filename: &str, content: &str, message: &str) -> String {
    fs::write(repo_path.join(filename), content).unwrap();
    git(repo_path, &["add", filename]);
    git(repo_path, &["commit", "-m", message]);
    get_head_sha(repo_path)
}

/// Create a branch without switching to it.
pub fn create_branch(repo_path: &Path, branch_name: &str) {
    git(repo_path, &["branch", branch_name]);
}

/// Get HEAD sha.
pub fn get_head_sha(repo_path: &Path) -> String {
    git_output(repo_path, &["rev-parse", "HEAD"])
}

/// Whether HEAD resolves to a commit.
pub fn has_commits(repo_path: &Path) -> bool {
    Command::new("git")
        .args(["rev-parse", "--verify", "HEAD"])
        .current_dir(repo_path)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Number of commits reachable from HEAD.
pub fn commit_count(repo_path: &Path) -> usize {
    if !has_commits(repo_path) {
        return 0;
    }
    git_output(repo_path, &["rev-list", "--count", "HEAD"])
        .parse()
        .unwrap()
}

/// Subject line of the HEAD commit.
pub fn head_subject(repo_path: &Path) -> String {
    git_output(repo_path, &["log", "-1", "--format=%s"])
}

/// Paths listed in the index as gitlinks (mode 160000).
pub fn gitlinks(repo_path: &Path) -> Vec<String> {
    git_output(repo_path, &["ls-files", "--stage"])
        .lines()
        .filter(|l| l.starts_with("160000"))
        .filter_map(|l| l.split('\t').nth(1))
        .map(str::to_string)
        .collect()
}

/// Run a git command, panic on failure.
fn git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(dir)
        .args(args)
        .envs(GIT_TEST_ENV)
        .output()
        .unwrap_or_else(|e| panic!("failed to run git {:?}: {}", args, e));
    assert!(
        output.status.success(),
        "git {:?} failed in {}: {}",
        args,
        dir.display(),
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Run a git command and return trimmed stdout.
fn git_output(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to run git {:?}: {}", args, e));
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
