//! Host shell detection.
//!
//! Classifies the shell hosting this process as either the classic command
//! interpreter or PowerShell, based solely on the presence of the
//! `PSModulePath` environment variable. Environment access goes through the
//! [`EnvProvider`] seam so tests never touch real process state.

pub mod environment;
pub mod shell;

pub use environment::{EnvProvider, SystemEnv};
pub use shell::{detect_shell, ShellKind, POWERSHELL_MARKER};
