//! Output mode and writer.

use super::theme::{should_use_colors, Theme};

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show status messages.
    #[default]
    Normal,
    /// Show nothing except errors.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }
}

/// Output writer that respects output mode and color settings.
#[derive(Debug)]
pub struct Output {
    mode: OutputMode,
    theme: Theme,
}

impl Output {
    /// Create a new output writer.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };
        Self { mode, theme }
    }

    /// Get the output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Write a line if the mode allows status messages.
    pub fn println(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    /// Write a command line in command styling.
    pub fn command(&self, line: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.command.apply_to(line));
        }
    }

    /// Write a success message.
    pub fn success(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{} {}", self.theme.success.apply_to("✓"), msg);
        }
    }

    /// Write an error message to stderr. Always shown, regardless of mode.
    pub fn error(&self, msg: &str) {
        eprintln!("{}", self.theme.error.apply_to(msg));
    }
}
