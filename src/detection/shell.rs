//! Shell kind classification.

use std::fmt;

use super::environment::EnvProvider;

/// Environment variable that PowerShell sessions always define.
pub const POWERSHELL_MARKER: &str = "PSModulePath";

/// The two shell families whose prompt promptf can configure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ShellKind {
    /// The classic command interpreter (`cmd.exe`).
    #[value(name = "cmd")]
    Cmd,

    /// Windows PowerShell / PowerShell Core.
    #[value(name = "powershell", alias = "pwsh")]
    PowerShell,
}

impl ShellKind {
    /// Lowercase name as used in command lines and messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShellKind::Cmd => "cmd",
            ShellKind::PowerShell => "powershell",
        }
    }
}

impl fmt::Display for ShellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify the shell hosting this process.
///
/// PowerShell sessions always have `PSModulePath` defined, with any value
/// (the empty string counts). cmd.exe never defines it, so absence means
/// the classic interpreter; that is a normal result, not an error.
pub fn detect_shell(env: &dyn EnvProvider) -> ShellKind {
    if env.var(POWERSHELL_MARKER).is_some() {
        tracing::debug!("{POWERSHELL_MARKER} present, host shell is powershell");
        ShellKind::PowerShell
    } else {
        tracing::debug!("{POWERSHELL_MARKER} absent, host shell is cmd");
        ShellKind::Cmd
    }
}
