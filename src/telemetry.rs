//! Tracing subscriber setup.
//!
//! Library code only emits `tracing` events; embedding applications call
//! [`init_tracing`] once at startup to decide where they go.

use tracing_subscriber::fmt;

use crate::config::{LogFormat, LoggingConfig, ValidationError};

/// Installs a global fmt subscriber filtered by `config.level`.
///
/// Returns `Ok(false)` if a global subscriber was already installed (for
/// example by a test harness); the existing one is left in place.
pub fn init_tracing(config: &LoggingConfig) -> Result<bool, ValidationError> {
    let filter = config.env_filter()?;

    let installed = match config.format {
        LogFormat::Pretty => fmt().with_env_filter(filter).with_target(true).try_init(),
        LogFormat::Json => fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(false)
            .try_init(),
    };

    Ok(installed.is_ok())
}
