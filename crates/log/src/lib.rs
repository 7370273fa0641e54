//! # pomoshtnik-log
//!
//! Installs the global `tracing` subscriber for the pomoshtnik binaries.
//! Libraries in the workspace only emit events; the binary picks a
//! [`Config`] (a preset, the environment, or both) and calls [`init`] once.
//!
//! ```no_run
//! use pomoshtnik_log::Config;
//!
//! fn main() -> Result<(), pomoshtnik_log::LogError> {
//!     pomoshtnik_log::init(Config::development().with_overrides(|name| std::env::var(name).ok()))?;
//!     tracing::info!(port = 8080, "server starting");
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;

pub use builder::LoggerBuilder;
pub use config::{Config, DisplayConfig, FORMAT_ENV, Format, LEVEL_ENV};
pub use error::{LogError, LogResult};

/// Installs a subscriber for `config`.
///
/// # Errors
///
/// [`LogError::Filter`] for a bad level directive,
/// [`LogError::AlreadyInitialized`] if a subscriber is already installed.
pub fn init(config: Config) -> LogResult<()> {
    LoggerBuilder::from_config(config).build()
}

/// Installs a subscriber configured from the environment.
///
/// # Errors
///
/// As [`init`].
pub fn init_from_env() -> LogResult<()> {
    init(Config::from_env())
}
