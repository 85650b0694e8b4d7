//! Prompt command construction and application.
//!
//! Builds the shell-native command line that sets (or resets) the prompt for
//! the current interactive session and runs it through a [`CommandRunner`].
//! The format string itself is opaque to promptf: it is handed to the target
//! shell verbatim and any placeholder syntax errors are the shell's concern,
//! surfaced only through its exit status.

use crate::detection::ShellKind;
use crate::error::{PromptfError, Result};

use super::runner::CommandRunner;

/// A fully constructed prompt-setting command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptCommand {
    /// Program to spawn (`cmd` or `powershell`).
    pub program: String,

    /// Arguments passed to the program.
    pub args: Vec<String>,
}

impl PromptCommand {
    /// Build the command that sets the prompt for `shell`.
    ///
    /// An empty `format` requests the shell's built-in default.
    pub fn build(shell: ShellKind, format: &str) -> Self {
        match shell {
            ShellKind::Cmd => Self::for_cmd(format),
            ShellKind::PowerShell => Self::for_powershell(format),
        }
    }

    /// In cmd.exe the built-in `prompt` command sets the prompt for the
    /// session; with no argument it restores the default ($P$G).
    fn for_cmd(format: &str) -> Self {
        let mut args = vec!["/C".to_string(), "prompt".to_string()];
        if !format.is_empty() {
            args.push(format.to_string());
        }
        Self {
            program: "cmd".to_string(),
            args,
        }
    }

    /// In PowerShell the prompt is whatever the `prompt` function returns.
    /// Setting installs a session-scoped override that evaluates to the
    /// literal format; resetting removes the override, which reverts
    /// PowerShell to its built-in prompt. Removing a nonexistent override
    /// must stay a no-op, hence `-ErrorAction SilentlyContinue`.
    fn for_powershell(format: &str) -> Self {
        let script = if format.is_empty() {
            "Remove-Item function:\\prompt -ErrorAction SilentlyContinue;".to_string()
        } else {
            format!(
                "function global:prompt {{ '{}' }};",
                escape_single_quoted(format)
            )
        };

        Self {
            program: "powershell".to_string(),
            args: vec!["-NoProfile".to_string(), "-Command".to_string(), script],
        }
    }

    /// Render as a single shell-style line, for logs and `--dry-run`.
    pub fn display_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            if arg.is_empty() || arg.chars().any(char::is_whitespace) {
                line.push('"');
                line.push_str(arg);
                line.push('"');
            } else {
                line.push_str(arg);
            }
        }
        line
    }
}

/// Escape a string for use inside a single-quoted PowerShell literal.
///
/// Single-quoted PowerShell strings interpolate nothing; the only character
/// needing treatment is the quote itself, which doubles. This keeps a format
/// containing quotes from breaking out of the generated function body.
fn escape_single_quoted(s: &str) -> String {
    s.replace('\'', "''")
}

/// Apply `format` to the current session's prompt for `shell`.
///
/// An empty `format` restores the shell's default. A subprocess that cannot
/// be spawned or exits non-zero is a hard failure carrying the target shell
/// and the attempted format; no retry and no fallback shell.
pub fn apply(shell: ShellKind, format: &str, runner: &dyn CommandRunner) -> Result<()> {
    let command = PromptCommand::build(shell, format);
    tracing::debug!(shell = %shell, command = %command.display_line(), "applying prompt change");

    let status = runner
        .run(&command.program, &command.args)
        .map_err(|err| {
            tracing::debug!(%err, "failed to spawn {shell}");
            PromptfError::PromptCommandFailed {
                shell,
                format: format.to_string(),
                code: None,
            }
        })?;

    if status.success {
        Ok(())
    } else {
        Err(PromptfError::PromptCommandFailed {
            shell,
            format: format.to_string(),
            code: status.code,
        })
    }
}
