//! promptf - Customize your Windows shell prompt from the command line.
//!
//! promptf detects whether it is hosted by the classic command interpreter
//! (`cmd.exe`) or by PowerShell, then issues that shell's own
//! prompt-configuration command: `prompt <format>` for cmd.exe, or a
//! session-scoped `prompt` function override for PowerShell. An empty
//! format restores the shell's built-in default.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and dispatch
//! - [`detection`] - Host shell classification
//! - [`error`] - Error types and result aliases
//! - [`shell`] - Prompt command construction and subprocess execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use promptf::detection::{detect_shell, EnvProvider, ShellKind};
//!
//! // Simulate a cmd.exe host: no PSModulePath anywhere in sight.
//! struct NoVars;
//! impl EnvProvider for NoVars {
//!     fn var(&self, _key: &str) -> Option<String> {
//!         None
//!     }
//! }
//!
//! assert_eq!(detect_shell(&NoVars), ShellKind::Cmd);
//! ```

pub mod cli;
pub mod detection;
pub mod error;
pub mod shell;
pub mod ui;

pub use error::{PromptfError, Result};
