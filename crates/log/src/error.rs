//! Errors of subscriber setup.

/// Result type for logger operations
pub type LogResult<T> = Result<T, LogError>;

/// Why a subscriber could not be installed.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The level directive does not parse as an `EnvFilter`.
    #[error("invalid filter '{filter}': {reason}")]
    Filter {
        /// The rejected directive.
        filter: String,
        /// Parser message.
        reason: String,
    },

    /// The format name is not one of `compact`, `pretty`, `json`.
    #[error("unknown log format '{0}', expected compact, pretty or json")]
    Format(String),

    /// A global subscriber is already installed.
    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,
}
