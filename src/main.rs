//! submodule-setup CLI entry point

use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use submodule_setup::cli::commands::setup::run_setup;
use submodule_setup::cli::SetupContext;
use submodule_setup::core::config::DEFAULT_CONFIG_FILE;
use submodule_setup::git::CliGitRunner;
use submodule_setup::telemetry::{init_telemetry, TelemetryConfig};

#[derive(Parser)]
#[command(name = "submodule-setup")]
#[command(author, version, about = "Declarative git submodule setup", long_about = None)]
struct Cli {
    /// Submodule config file
    #[arg(env = "SUBMODULE_SETUP_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    /// Log every git command
    #[arg(short, long)]
    verbose: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "submodule-setup", &mut std::io::stdout());
        return Ok(());
    }

    let telemetry = if cli.verbose {
        TelemetryConfig::verbose()
    } else {
        TelemetryConfig::default()
    };
    init_telemetry(&telemetry)?;

    let runner = CliGitRunner::from_path()?;
    let ctx = SetupContext::new(std::env::current_dir()?, cli.config);
    run_setup(&ctx, &runner)?;

    Ok(())
}
