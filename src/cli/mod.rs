//! Command-line interface for promptf.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`dispatch`] - Resolves the requested change and applies it

pub mod args;

pub use args::Cli;

use clap::CommandFactory;

use crate::detection::{detect_shell, EnvProvider};
use crate::error::Result;
use crate::shell::prompt::{self, PromptCommand};
use crate::shell::CommandRunner;
use crate::ui::Output;

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Resolve the requested prompt change and apply it.
///
/// With neither a format nor `--reset`, prints usage guidance and reports
/// exit code 1 without touching any shell. Otherwise the target shell is
/// resolved once (`--shell` override, else detection via `env`) and the
/// prompt command runs through `runner` — or is only printed under
/// `--dry-run`.
pub fn dispatch(
    cli: &Cli,
    env: &dyn EnvProvider,
    runner: &dyn CommandRunner,
    output: &Output,
) -> Result<CommandResult> {
    let Some(format) = cli.requested_format() else {
        Cli::command().print_help()?;
        return Ok(CommandResult::failure(1));
    };

    let shell = match cli.shell {
        Some(kind) => kind,
        None => detect_shell(env),
    };
    tracing::debug!(shell = %shell, "resolved target shell");

    if cli.dry_run {
        let command = PromptCommand::build(shell, &format);
        output.command(&command.display_line());
        return Ok(CommandResult::success());
    }

    prompt::apply(shell, &format, runner)?;

    if format.is_empty() {
        output.success(&format!("{shell} prompt reset to its default"));
    } else {
        output.success(&format!("{shell} prompt updated"));
    }

    Ok(CommandResult::success())
}
