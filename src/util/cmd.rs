//! Command logging for verbose output.

use std::process::Command;
use tracing::debug;

/// Log a command just before it is spawned.
///
/// Visible with `--verbose` or `RUST_LOG=submodule_setup::cmd=debug`.
pub fn log_cmd(cmd: &Command) {
    let program = cmd.get_program().to_string_lossy();
    let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy()).collect();
    let cwd = cmd
        .get_current_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    debug!(
        target: "submodule_setup::cmd",
        %program,
        ?args,
        %cwd,
        "exec"
    );
}
