//! Process environment access.

/// Read-only access to process environment variables.
///
/// Shell detection goes through this seam so tests can simulate either
/// shell without mutating process-wide state.
pub trait EnvProvider {
    /// Value of `key`, or `None` when the variable is unset.
    ///
    /// A variable set to the empty string is `Some("")`, not `None`.
    fn var(&self, key: &str) -> Option<String>;
}

/// [`EnvProvider`] backed by the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvProvider for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        // var_os: a non-unicode value still counts as present.
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}
