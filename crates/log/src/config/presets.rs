//! Configuration presets for common scenarios

use super::{Config, DisplayConfig, FORMAT_ENV, Format, LEVEL_ENV};

impl Config {
    /// Create configuration from environment variables
    ///
    /// Reads `POMOSHTNIK_LOG` (falling back to `RUST_LOG`) and
    /// `POMOSHTNIK_LOG_FORMAT`. Unknown formats keep the default.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_overrides(|name| std::env::var(name).ok())
    }

    /// Applies the environment overrides read through `lookup` on top of
    /// `self`.
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(level) = lookup(LEVEL_ENV).or_else(|| lookup("RUST_LOG")) {
            self.level = level;
        }

        if let Some(format) = lookup(FORMAT_ENV).and_then(|raw| raw.parse::<Format>().ok()) {
            self.format = format;
        }

        self
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            display: DisplayConfig {
                colors: true,
                source: true,
                ..DisplayConfig::default()
            },
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            display: DisplayConfig {
                colors: false,
                source: false,
                ..DisplayConfig::default()
            },
        }
    }

    /// Quiet configuration for command-line tools: warnings only, no
    /// colors, no target.
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            level: "warn".to_string(),
            format: Format::Compact,
            display: DisplayConfig {
                colors: false,
                target: false,
                ..DisplayConfig::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn own_variable_wins_over_rust_log() {
        let config = Config::default().with_overrides(env(&[
            ("POMOSHTNIK_LOG", "trace"),
            ("RUST_LOG", "error"),
        ]));
        assert_eq!(config.level, "trace");
    }

    #[test]
    fn rust_log_is_the_fallback() {
        let config = Config::default().with_overrides(env(&[("RUST_LOG", "error")]));
        assert_eq!(config.level, "error");
    }

    #[test]
    fn format_override_is_parsed() {
        let config = Config::quiet().with_overrides(env(&[("POMOSHTNIK_LOG_FORMAT", "JSON")]));
        assert_eq!(config.format, Format::Json);
        assert_eq!(config.level, "warn");

        let config = Config::quiet().with_overrides(env(&[("POMOSHTNIK_LOG_FORMAT", "xml")]));
        assert_eq!(config.format, Format::Compact);
    }

    #[test]
    fn presets_differ_in_format() {
        assert_eq!(Config::development().format, Format::Pretty);
        assert_eq!(Config::production().format, Format::Json);
        assert!(!Config::production().display.colors);
    }
}
