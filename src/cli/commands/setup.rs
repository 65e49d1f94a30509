//! Setup command implementation
//!
//! One pass: load the config, make sure the superproject is a repository,
//! add every declared submodule that is not there yet, and commit if
//! anything was added.

use crate::cli::context::SetupContext;
use crate::cli::output::Output;
use crate::core::config::SubmoduleConfig;
use crate::git::{
    commit_changes, ensure_repository, prepare_add, run_add, AddOutcome, GitRunner, InitOutcome,
};
use anyhow::Context;
use tracing::info;

/// Per-entry outcomes of one setup pass, in declaration order.
#[derive(Debug, Default)]
pub struct SetupReport {
    pub outcomes: Vec<(String, AddOutcome)>,
    /// Whether a commit was created.
    pub committed: bool,
}

impl SetupReport {
    /// Whether at least one submodule was newly added.
    pub fn any_added(&self) -> bool {
        self.outcomes.iter().any(|(_, o)| o.is_added())
    }

    pub fn added(&self) -> usize {
        self.count(|o| o.is_added())
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, AddOutcome::AlreadyPresent))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, AddOutcome::Invalid(_) | AddOutcome::Failed(_)))
    }

    /// One-line tally of the pass.
    pub fn summary(&self) -> String {
        format!(
            "{} added, {} already present, {} failed",
            self.added(),
            self.skipped(),
            self.failed()
        )
    }

    fn count(&self, pred: impl Fn(&AddOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, o)| pred(o)).count()
    }
}

/// Run the setup command
pub fn run_setup(ctx: &SetupContext, runner: &dyn GitRunner) -> anyhow::Result<SetupReport> {
    Output::info(&format!("Using config file: {}", ctx.config_arg));

    let config = SubmoduleConfig::load(&ctx.config_path())?;
    info!(count = config.submodules.len(), "loaded submodule config");

    match ensure_repository(runner, ctx.root())
        .context("Failed to initialize main repository")?
    {
        InitOutcome::Initialized => Output::success("Initialized main repository"),
        InitOutcome::AlreadyInitialized => Output::info("Main repository already initialized"),
    }

    let mut report = SetupReport::default();

    for spec in &config.submodules {
        let label = spec.label().to_string();
        let path = spec.path().unwrap_or_default();

        let outcome = match prepare_add(ctx.root(), spec) {
            Ok(pending) => {
                Output::info(&format!(
                    "Adding submodule '{}' from '{}' to '{}'",
                    pending.name, pending.url, pending.path
                ));
                let spinner = Output::spinner(&format!(
                    "Cloning {} into {}",
                    Output::submodule_name(pending.name),
                    Output::path(pending.path)
                ));
                let outcome = run_add(runner, ctx.root(), &pending);
                spinner.finish_and_clear();
                outcome
            }
            Err(outcome) => outcome,
        };

        match &outcome {
            AddOutcome::Added => {
                Output::success(&format!("Successfully added submodule '{}'", label))
            }
            AddOutcome::AlreadyPresent => Output::info(&format!(
                "Submodule '{}' at '{}' already exists, skipping...",
                label, path
            )),
            AddOutcome::Invalid(missing) => Output::error(&format!(
                "Missing required fields for submodule '{}': {}",
                label,
                missing.join(", ")
            )),
            AddOutcome::Failed(reason) => {
                Output::error(&format!("Failed to add submodule '{}': {}", label, reason))
            }
        }

        report.outcomes.push((label, outcome));
    }

    if report.any_added() {
        Output::info("Committing submodule additions...");
        commit_changes(runner, ctx.root(), &ctx.config_arg)
            .context("Failed to commit submodule additions")?;
        report.committed = true;
        Output::success(&format!("Committed submodules from {}", ctx.config_arg));
    } else {
        Output::info("No changes to commit");
    }

    Output::info(&report.summary());
    Output::success("Setup complete!");

    Ok(report)
}
