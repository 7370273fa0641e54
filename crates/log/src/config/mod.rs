//! Logger configuration

mod presets;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LogError;

/// Environment variable holding the filter directive.
pub const LEVEL_ENV: &str = "POMOSHTNIK_LOG";

/// Environment variable holding the output format.
pub const FORMAT_ENV: &str = "POMOSHTNIK_LOG_FORMAT";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Filter directive (e.g., "info", "debug,pomoshtnik_schema=trace")
    pub level: String,

    /// Output format
    pub format: Format,

    /// Display configuration
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::default(),
            display: DisplayConfig::default(),
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Compact single-line output
    #[default]
    Compact,
    /// Human-readable multi-line output
    Pretty,
    /// One JSON object per event
    Json,
}

impl Format {
    /// Every format, in declaration order.
    pub const ALL: [Self; 3] = [Self::Compact, Self::Pretty, Self::Json];

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Pretty => "pretty",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = LogError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let lowered = raw.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == lowered)
            .ok_or_else(|| LogError::Format(raw.to_string()))
    }
}

/// What each event line shows besides its message and fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// ANSI colors (ignored by the JSON format)
    pub colors: bool,
    /// Event target (module path)
    pub target: bool,
    /// Source file and line
    pub source: bool,
    /// Thread ids
    pub thread_ids: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            colors: true,
            target: true,
            source: false,
            thread_ids: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("compact", Format::Compact)]
    #[case("Pretty", Format::Pretty)]
    #[case(" json ", Format::Json)]
    fn formats_parse(#[case] raw: &str, #[case] expected: Format) {
        assert_eq!(raw.parse::<Format>().ok(), Some(expected));
    }

    #[test]
    fn unknown_format_is_an_error() {
        assert!(matches!("logfmt".parse::<Format>(), Err(LogError::Format(name)) if name == "logfmt"));
    }

    #[test]
    fn display_round_trips() {
        for format in Format::ALL {
            assert_eq!(format.to_string().parse::<Format>().ok(), Some(format));
        }
    }

    #[test]
    fn default_is_compact_info() {
        let config = Config::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, Format::Compact);
    }
}
