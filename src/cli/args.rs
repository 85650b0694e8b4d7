//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The entry point is the [`Cli`] struct.

use clap::Parser;

use crate::detection::ShellKind;

/// promptf - Customize your Windows shell prompt.
#[derive(Debug, Parser)]
#[command(name = "promptf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Prompt format string in the target shell's own placeholder syntax
    pub format: Option<String>,

    /// Reset the prompt to the shell's built-in default
    #[arg(short = 'r', long)]
    pub reset: bool,

    /// Target shell (skips host shell detection)
    #[arg(long, value_enum, value_name = "SHELL")]
    pub shell: Option<ShellKind>,

    /// Print the prompt command without executing it
    #[arg(long)]
    pub dry_run: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// The format to apply, with `--reset` taking precedence over a
    /// positional format. The empty string means "restore the default".
    ///
    /// `None` means neither was supplied (the usage-error path); an empty
    /// positional format counts as not supplied.
    pub fn requested_format(&self) -> Option<String> {
        if self.reset {
            Some(String::new())
        } else {
            self.format.clone().filter(|format| !format.is_empty())
        }
    }
}
