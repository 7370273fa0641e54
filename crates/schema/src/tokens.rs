//! Token-command decoder.
//!
//! Chat messages are split on whitespace; the first token names the
//! command and the rest are its arguments. The tokens are rearranged into
//! the `{type, data}` record a JSON client would have sent, and that record
//! goes through [`Command::decode`], so both front-ends accept exactly the
//! same commands.
//!
//! | Token        | Command             | Arguments                      |
//! |--------------|---------------------|--------------------------------|
//! | `!ping`      | `Ping`              | ignored                        |
//! | `!whoareyou` | `WhoAreYou`         | ignored                        |
//! | `!searches`  | `Searches`          | ignored                        |
//! | `!users`     | `Users`             | ignored                        |
//! | `!movie`     | `Movie`             | free text                      |
//! | `!movieid`   | `MovieById`         | integer id                     |
//! | `!movies`    | `MovieCandidates`   | free text                      |
//! | `!person`    | `Person`            | free text                      |
//! | `!show`      | `Show`              | free text                      |
//! | `!ghuser`    | `GitHubUser`        | free text                      |
//! | `!ghrepo`    | `GitHubRepository`  | `name <text>` or `topics <t>…` |

use crate::commands::{Command, CommandKind, RepositorySearchKind, RepositorySearchType};
use pomoshtnik_validator::combinators::{DATA_FIELD, TAG_FIELD};
use pomoshtnik_validator::prelude::*;
use serde_json::{Map, Value, json};

/// Command names and the discriminants they stand for.
pub const COMMAND_NAMES: &[(&str, CommandKind)] = &[
    ("!ping", CommandKind::Ping),
    ("!whoareyou", CommandKind::WhoAreYou),
    ("!searches", CommandKind::Searches),
    ("!users", CommandKind::Users),
    ("!movie", CommandKind::Movie),
    ("!movieid", CommandKind::MovieById),
    ("!movies", CommandKind::MovieCandidates),
    ("!person", CommandKind::Person),
    ("!show", CommandKind::Show),
    ("!ghuser", CommandKind::GitHubUser),
    ("!ghrepo", CommandKind::GitHubRepository),
];

/// Sub-kind tokens of `!ghrepo`.
const REPOSITORY_SEARCHES: &[(&str, RepositorySearchKind)] = &[
    ("name", RepositorySearchKind::RepositoryByName),
    ("topics", RepositorySearchKind::RepositoryByTopics),
];

/// Looks a command name up in [`COMMAND_NAMES`].
#[must_use]
pub fn command_kind(name: &str) -> Option<CommandKind> {
    COMMAND_NAMES
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, kind)| *kind)
}

/// The chat spelling of a command.
#[must_use]
pub fn command_name(kind: CommandKind) -> &'static str {
    match kind {
        CommandKind::Ping => "!ping",
        CommandKind::WhoAreYou => "!whoareyou",
        CommandKind::Searches => "!searches",
        CommandKind::Users => "!users",
        CommandKind::Movie => "!movie",
        CommandKind::MovieById => "!movieid",
        CommandKind::MovieCandidates => "!movies",
        CommandKind::Person => "!person",
        CommandKind::Show => "!show",
        CommandKind::GitHubUser => "!ghuser",
        CommandKind::GitHubRepository => "!ghrepo",
    }
}

/// Decodes an already-split command.
///
/// # Errors
///
/// - `empty_command` if `tokens` is empty.
/// - `unrecognized_command` if the first token is not a command name.
/// - Any error of [`Command::decode`] on the assembled record, located
///   under `data` (for example a non-numeric `!movieid` argument).
pub fn decode_tokens<S: AsRef<str>>(tokens: &[S]) -> ValidationResult<Command> {
    let outcome = assemble(tokens).and_then(|record| Command::decode(&record));
    match &outcome {
        Ok(command) => tracing::trace!(command = %command.kind(), "command decoded"),
        Err(error) => tracing::debug!(
            code = %error.code,
            problems = error.leaves().len(),
            "command rejected"
        ),
    }
    outcome
}

/// Splits `text` on whitespace and decodes the tokens.
pub fn decode_text(text: &str) -> ValidationResult<Command> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    decode_tokens(&tokens)
}

/// Builds the `{type, data}` record the tokens stand for.
fn assemble<S: AsRef<str>>(tokens: &[S]) -> ValidationResult<Value> {
    let Some((name, arguments)) = tokens.split_first() else {
        return Err(ValidationError::empty_command());
    };
    let name = name.as_ref();
    let kind = command_kind(name).ok_or_else(|| {
        let known: Vec<&str> = COMMAND_NAMES.iter().map(|(known, _)| *known).collect();
        ValidationError::unrecognized_command(name, &known)
    })?;
    let arguments: Vec<&str> = arguments.iter().map(AsRef::as_ref).collect();

    let data = match kind {
        CommandKind::Ping | CommandKind::WhoAreYou | CommandKind::Searches | CommandKind::Users => {
            None
        }
        CommandKind::Movie
        | CommandKind::MovieCandidates
        | CommandKind::Person
        | CommandKind::Show
        | CommandKind::GitHubUser => Some(json!(arguments.join(" "))),
        CommandKind::MovieById => {
            let raw = arguments.join(" ");
            // An unparsable id is passed through so the record decoder
            // reports it with its location.
            Some(raw.parse::<i64>().map_or_else(|_| json!(raw), |id| json!(id)))
        }
        CommandKind::GitHubRepository => Some(repository_search(&arguments)),
    };

    let mut record = Map::new();
    record.insert(TAG_FIELD.to_owned(), json!(kind.as_str()));
    if let Some(data) = data {
        record.insert(DATA_FIELD.to_owned(), data);
    }
    Ok(Value::Object(record))
}

fn repository_search(arguments: &[&str]) -> Value {
    let Some((sub_kind, rest)) = arguments.split_first() else {
        return json!({});
    };
    let found = REPOSITORY_SEARCHES
        .iter()
        .find(|(known, _)| known == sub_kind)
        .map(|(_, kind)| *kind);
    match found {
        Some(kind @ RepositorySearchKind::RepositoryByName) => {
            json!({ TAG_FIELD: kind.as_str(), DATA_FIELD: rest.join(" ") })
        }
        Some(kind @ RepositorySearchKind::RepositoryByTopics) => {
            json!({ TAG_FIELD: kind.as_str(), DATA_FIELD: rest })
        }
        None => json!({ TAG_FIELD: sub_kind }),
    }
}

impl Command {
    /// Tokens that decode back to this command.
    ///
    /// Free text is split on whitespace, so text with runs of spaces does
    /// not survive the trip unchanged.
    #[must_use]
    pub fn to_tokens(&self) -> Vec<String> {
        let mut tokens = vec![command_name(self.kind()).to_owned()];
        let words = |text: &str| -> Vec<String> {
            text.split_whitespace().map(str::to_owned).collect()
        };
        match self {
            Self::Ping | Self::WhoAreYou | Self::Searches | Self::Users => {}
            Self::Movie(text)
            | Self::MovieCandidates(text)
            | Self::Person(text)
            | Self::Show(text)
            | Self::GitHubUser(text) => tokens.extend(words(text)),
            Self::MovieById(id) => tokens.push(id.to_string()),
            Self::GitHubRepository(RepositorySearchType::RepositoryByName(name)) => {
                tokens.push("name".to_owned());
                tokens.extend(words(name));
            }
            Self::GitHubRepository(RepositorySearchType::RepositoryByTopics(topics)) => {
                tokens.push("topics".to_owned());
                tokens.extend(topics.iter().cloned());
            }
        }
        tokens
    }
}
