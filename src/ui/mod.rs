//! Terminal output.
//!
//! - [`Output`] - message writer honoring quiet mode
//! - [`Theme`] - console styles, disabled for non-TTY or `NO_COLOR`

pub mod output;
pub mod theme;

pub use output::{Output, OutputMode};
pub use theme::{should_use_colors, Theme};
