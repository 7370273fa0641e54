//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use pomoshtnik_log::Format;

#[derive(Parser, Debug)]
#[command(name = "pomoshtnik")]
#[command(about = "Decode pomoshtnik payloads and chat commands", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Tracing filter directive
    #[arg(long, global = true, env = "POMOSHTNIK_LOG")]
    pub log_level: Option<String>,

    /// Log output format: compact, pretty or json
    #[arg(long, global = true, env = "POMOSHTNIK_LOG_FORMAT")]
    pub log_format: Option<Format>,

    /// How rejected input is reported
    #[arg(long, global = true, value_enum, default_value_t = ErrorFormat::Text)]
    pub errors: ErrorFormat,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a JSON document as one of the wire types
    Decode {
        /// Wire type to decode as
        #[arg(value_enum)]
        kind: WireType,

        /// Input file; reads stdin when omitted or `-`
        file: Option<PathBuf>,

        /// GitHub event name (the `X-GitHub-Event` header), for `webhook`
        #[arg(long, required_if_eq("kind", "webhook"))]
        event: Option<String>,
    },
    /// Decode a chat command, e.g. `pomoshtnik parse '!movie' The Matrix`
    Parse {
        /// Command tokens; a single argument is split on whitespace
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        tokens: Vec<String>,
    },
    /// List the wire types `decode` accepts
    Types,
}

/// Wire types `decode` knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WireType {
    Command,
    BotUser,
    SearchCommand,
    ApiRequest,
    ClientEvent,
    ServerEvent,
    ApplicationEvent,
    TmdbConfiguration,
    Movie,
    Show,
    Person,
    MovieSearch,
    ShowSearch,
    PersonSearch,
    GithubUser,
    GithubRepository,
    Webhook,
    Book,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ErrorFormat {
    /// One `location: message` line per problem
    Text,
    /// The full error tree as JSON
    Json,
}
