//! Configuration Module - Runtime Settings
//!
//! Generated programs may install a configuration once from their entry
//! shim. Programs that never call [`init`] run with [`RuntimeConfig::default`].

use crate::error::ConfigError;
use std::sync::OnceLock;

static CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();
static DEFAULT_CONFIG: RuntimeConfig = RuntimeConfig {
    violation: ViolationPolicy::Panic,
    flush_each_line: true,
};

/// What the runtime does when generated code violates a contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViolationPolicy {
    /// Panic with the violation message.
    ///
    /// A recovery boundary (`std::panic::catch_unwind`) in generated code
    /// can catch it; otherwise the program terminates.
    #[default]
    Panic,

    /// Print the diagnostic to stderr and exit with status 1
    Abort,
}

/// Runtime configuration for Fax programs
///
/// # Examples
///
/// ```rust
/// use faxc_runtime::{RuntimeConfig, ViolationPolicy};
///
/// let config = RuntimeConfig {
///     violation: ViolationPolicy::Abort,
///     ..Default::default()
/// };
/// assert!(config.flush_each_line);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Handling of `NullReference` / `IndexOutOfRange` violations
    ///
    /// Default: `ViolationPolicy::Panic`
    pub violation: ViolationPolicy,

    /// Flush stdout after every `println!`
    ///
    /// Keeps program output ordered relative to a fatal diagnostic on stderr.
    /// Default: true
    pub flush_each_line: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

/// Install the runtime configuration
///
/// Can be called at most once per process.
pub fn init(config: RuntimeConfig) -> Result<(), ConfigError> {
    CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyInitialized)?;
    log::debug!(target: "faxc_runtime", "runtime initialized: {:?}", config);
    Ok(())
}

/// The active configuration
pub fn config() -> &'static RuntimeConfig {
    CONFIG.get().unwrap_or(&DEFAULT_CONFIG)
}
