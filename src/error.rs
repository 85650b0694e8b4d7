//! Error types for promptf operations.
//!
//! This module defines [`PromptfError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `PromptfError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `PromptfError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use thiserror::Error;

use crate::detection::ShellKind;

/// Core error type for promptf operations.
#[derive(Debug, Error)]
pub enum PromptfError {
    /// The shell's prompt-setting command exited non-zero or could not be
    /// spawned at all (`code: None`).
    #[error(
        "Failed to set {shell} prompt with format '{format}' (exit code {code:?}). \
         Ensure the format is valid according to the shell's own syntax."
    )]
    PromptCommandFailed {
        shell: ShellKind,
        format: String,
        code: Option<i32>,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for promptf operations.
pub type Result<T> = std::result::Result<T, PromptfError>;
