//! Test fixtures for superproject environments.
//!
//! `SuperprojectBuilder` creates an empty working directory next to a set of
//! local source repositories that config entries can point at via `file://`.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use submodule_setup::core::config::DEFAULT_CONFIG_FILE;

use super::git_helpers;

/// A superproject directory plus source repos, cleaned up on drop.
pub struct SuperprojectFixture {
    /// Kept alive for the lifetime of the fixture.
    pub _temp: TempDir,
    /// Working directory the binary runs in.
    pub root: PathBuf,
    /// Directory holding the source repositories.
    pub sources_dir: PathBuf,
}

impl SuperprojectFixture {
    /// Path to a source repository.
    pub fn source_path(&self, name: &str) -> PathBuf {
        self.sources_dir.join(name)
    }

    /// The file:// URL for a source repository.
    pub fn source_url(&self, name: &str) -> String {
        format!("file://{}", self.source_path(name).display())
    }

    /// Write the default config file into the working directory.
    pub fn write_config(&self, yaml: &str) {
        self.write_config_as(DEFAULT_CONFIG_FILE, yaml);
    }

    /// Write a config file under a custom name.
    pub fn write_config_as(&self, file_name: &str, yaml: &str) {
        fs::write(self.root.join(file_name), yaml).unwrap();
    }

    /// Path inside the working directory.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// The binary, configured to run in the working directory.
    pub fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("submodule-setup").unwrap();
        cmd.current_dir(&self.root)
            .envs(git_helpers::GIT_TEST_ENV)
            .env_remove("SUBMODULE_SETUP_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }
}

/// Builder for superproject fixtures.
pub struct SuperprojectBuilder {
    sources: Vec<(String, Vec<String>)>,
}

impl SuperprojectBuilder {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Add a source repository with one commit on `main`.
    pub fn add_source(self, name: &str) -> Self {
        self.add_source_with_branches(name, &[])
    }

    /// Add a source repository with extra branches pointing at its first commit.
    pub fn add_source_with_branches(mut self, name: &str, branches: &[&str]) -> Self {
        self.sources.push((
            name.to_string(),
            branches.iter().map(|b| b.to_string()).collect(),
        ));
        self
    }

    pub fn build(self) -> SuperprojectFixture {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("superproject");
        let sources_dir = temp.path().join("sources");
        fs::create_dir_all(&root).unwrap();
        fs::create_dir_all(&sources_dir).unwrap();

        for (name, branches) in &self.sources {
            let path = sources_dir.join(name);
            create_source(&path, name);
            for branch in branches {
                git_helpers::create_branch(&path, branch);
            }
        }

        SuperprojectFixture {
            _temp: temp,
            root,
            sources_dir,
        }
    }
}

fn create_source(path: &Path, name: &str) {
    git_helpers::init_repo(path);
    git_helpers::commit_file(path, "README.md", &format!("# {}\n", name), "Initial commit");
}
