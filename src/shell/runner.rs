//! Subprocess execution.

use std::io;
use std::process::Command;

/// Exit status of a spawned command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// Exit code (None if killed by signal).
    pub code: Option<i32>,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,
}

/// Narrow seam over subprocess execution.
///
/// promptf spawns exactly one subprocess per invocation and waits on it
/// synchronously. Tests substitute a fake runner to assert on constructed
/// command lines without spawning real shells.
pub trait CommandRunner {
    /// Run `program` with `args`, inheriting stdio, and wait for exit.
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandStatus>;
}

/// [`CommandRunner`] that spawns real processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandStatus> {
        tracing::debug!(program, ?args, "spawning");
        let status = Command::new(program).args(args).status()?;
        Ok(CommandStatus {
            code: status.code(),
            success: status.success(),
        })
    }
}
