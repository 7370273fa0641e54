//! Logger builder implementation
//!
//! `format` holds the fmt-layer construction shared by every format.

#[macro_use]
mod format;

use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, Format};
use crate::error::{LogError, LogResult};

/// Logger builder
#[derive(Debug, Clone)]
pub struct LoggerBuilder {
    config: Config,
}

/// Installs the subscriber, mapping a second installation to
/// [`LogError::AlreadyInitialized`].
macro_rules! try_init_subscriber {
    ($filter:expr, $fmt_layer:expr) => {
        Registry::default()
            .with($filter)
            .with($fmt_layer)
            .try_init()
            .map_err(|_| LogError::AlreadyInitialized)
    };
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// The configuration this builder installs.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parses the filter directive without installing anything.
    ///
    /// # Errors
    ///
    /// [`LogError::Filter`] if the directive does not parse.
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level).map_err(|e| LogError::Filter {
            filter: self.config.level.clone(),
            reason: e.to_string(),
        })
    }

    /// Build and install the global subscriber
    ///
    /// Events are written to standard error so standard output stays free
    /// for program output.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The filter directive cannot be parsed
    /// - A global subscriber is already installed
    pub fn build(self) -> LogResult<()> {
        let filter = self.filter()?;
        let display = &self.config.display;

        match self.config.format {
            Format::Compact => {
                let fmt_layer = create_fmt_layer!(compact, display, std::io::stderr);
                try_init_subscriber!(filter, fmt_layer)?;
            }
            Format::Pretty => {
                let fmt_layer = create_fmt_layer!(pretty, display, std::io::stderr);
                try_init_subscriber!(filter, fmt_layer)?;
            }
            Format::Json => {
                let fmt_layer = create_fmt_layer!(json, display, std::io::stderr)
                    .with_current_span(true)
                    .flatten_event(true);
                try_init_subscriber!(filter, fmt_layer)?;
            }
        }

        tracing::debug!(
            level = %self.config.level,
            format = %self.config.format,
            "logger initialized"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_directive_is_rejected_before_install() {
        let builder = LoggerBuilder::from_config(Config {
            level: "pomoshtnik=loud".to_string(),
            ..Config::default()
        });
        match builder.build() {
            Err(LogError::Filter { filter, .. }) => assert_eq!(filter, "pomoshtnik=loud"),
            other => panic!("expected a filter error, got {other:?}"),
        }
    }

    #[test]
    fn presets_have_valid_directives() {
        for config in [Config::development(), Config::production(), Config::quiet()] {
            assert!(LoggerBuilder::from_config(config).filter().is_ok());
        }
    }
}
