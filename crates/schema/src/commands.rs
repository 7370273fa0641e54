//! Chat commands, the users who send them and the searches they produce.
//!
//! Every union here travels in the adjacently tagged `{type, data}`
//! envelope: `type` names the variant and `data`, when present, carries
//! its payload. The generic unions ([`SearchResult`], [`SearchEntry`],
//! [`Either`]) come with decoder factories that take the payload
//! validator, so each instantiation is a plain function call:
//!
//! ```
//! use pomoshtnik_schema::commands::{SearchResult, search_result};
//! use pomoshtnik_validator::prelude::*;
//! use serde_json::json;
//!
//! let titles = search_result(string().array());
//! let found = titles.validate(&json!({"type": "SearchSuccess", "data": ["Alien"]}));
//! assert_eq!(found, Ok(SearchResult::SearchSuccess(vec!["Alien".to_owned()])));
//! ```

use crate::github::{Repository, UserData};
use crate::tmdb::{MovieCandidate, MovieData, Person, Show};
use pomoshtnik_validator::prelude::*;
use pomoshtnik_validator::{record, tags};
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// REPOSITORY SEARCH
// ============================================================================

tags! {
    pub enum RepositorySearchKind {
        RepositoryByName = "RepositoryByName",
        RepositoryByTopics = "RepositoryByTopics",
    }
}

/// How a `!ghrepo` command looks repositories up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum RepositorySearchType {
    RepositoryByName(String),
    RepositoryByTopics(Vec<String>),
}

impl RepositorySearchType {
    #[must_use]
    pub fn kind(&self) -> RepositorySearchKind {
        match self {
            Self::RepositoryByName(_) => RepositorySearchKind::RepositoryByName,
            Self::RepositoryByTopics(_) => RepositorySearchKind::RepositoryByTopics,
        }
    }
}

impl Decode for RepositorySearchType {
    fn decode(input: &Value) -> ValidationResult<Self> {
        tagged(|kind: RepositorySearchKind, input: &Value| match kind {
            RepositorySearchKind::RepositoryByName => data_variant(kind, string())
                .map(Self::RepositoryByName)
                .validate(input),
            RepositorySearchKind::RepositoryByTopics => data_variant(kind, string().array())
                .map(Self::RepositoryByTopics)
                .validate(input),
        })
        .validate(input)
    }
}

// ============================================================================
// COMMAND
// ============================================================================

tags! {
    /// Discriminants of [`Command`].
    pub enum CommandKind {
        Ping = "Ping",
        WhoAreYou = "WhoAreYou",
        Searches = "Searches",
        Users = "Users",
        Movie = "Movie",
        MovieById = "MovieById",
        MovieCandidates = "MovieCandidates",
        Person = "Person",
        Show = "Show",
        GitHubUser = "GitHubUser",
        GitHubRepository = "GitHubRepository",
    }
}

/// A request typed into chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum Command {
    Ping,
    WhoAreYou,
    Searches,
    Users,
    Movie(String),
    MovieById(i64),
    MovieCandidates(String),
    Person(String),
    Show(String),
    GitHubUser(String),
    GitHubRepository(RepositorySearchType),
}

impl Command {
    #[must_use]
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::Ping => CommandKind::Ping,
            Self::WhoAreYou => CommandKind::WhoAreYou,
            Self::Searches => CommandKind::Searches,
            Self::Users => CommandKind::Users,
            Self::Movie(_) => CommandKind::Movie,
            Self::MovieById(_) => CommandKind::MovieById,
            Self::MovieCandidates(_) => CommandKind::MovieCandidates,
            Self::Person(_) => CommandKind::Person,
            Self::Show(_) => CommandKind::Show,
            Self::GitHubUser(_) => CommandKind::GitHubUser,
            Self::GitHubRepository(_) => CommandKind::GitHubRepository,
        }
    }
}

impl Decode for Command {
    fn decode(input: &Value) -> ValidationResult<Self> {
        tagged(|kind: CommandKind, input: &Value| {
            let unit = |command: Self| unit_variant(kind).map(move |()| command.clone());
            match kind {
                CommandKind::Ping => unit(Self::Ping).validate(input),
                CommandKind::WhoAreYou => unit(Self::WhoAreYou).validate(input),
                CommandKind::Searches => unit(Self::Searches).validate(input),
                CommandKind::Users => unit(Self::Users).validate(input),
                CommandKind::Movie => data_variant(kind, string())
                    .map(Self::Movie)
                    .validate(input),
                CommandKind::MovieById => data_variant(kind, integer())
                    .map(Self::MovieById)
                    .validate(input),
                CommandKind::MovieCandidates => data_variant(kind, string())
                    .map(Self::MovieCandidates)
                    .validate(input),
                CommandKind::Person => data_variant(kind, string())
                    .map(Self::Person)
                    .validate(input),
                CommandKind::Show => data_variant(kind, string())
                    .map(Self::Show)
                    .validate(input),
                CommandKind::GitHubUser => data_variant(kind, string())
                    .map(Self::GitHubUser)
                    .validate(input),
                CommandKind::GitHubRepository => {
                    data_variant(kind, decoder::<RepositorySearchType>())
                        .map(Self::GitHubRepository)
                        .validate(input)
                }
            }
        })
        .validate(input)
    }
}

// ============================================================================
// ERRORS AND USERS
// ============================================================================

/// A failed call to the chat platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscordErrorData {
    pub command_text: String,
    pub name: String,
    pub message: String,
    pub method: String,
    pub path: String,
    pub code: i64,
    pub http_status: i64,
}

impl Decode for DiscordErrorData {
    fn decode(input: &Value) -> ValidationResult<Self> {
        record!(input => Self {
            command_text: "commandText" => string(),
            name: "name" => string(),
            message: "message" => string(),
            method: "method" => string(),
            path: "path" => string(),
            code: "code" => integer(),
            http_status: "httpStatus" => integer(),
        })
    }
}

/// Command text that did not decode, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrorData {
    pub command_text: String,
    pub reason: String,
}

impl Decode for ValidationErrorData {
    fn decode(input: &Value) -> ValidationResult<Self> {
        record!(input => Self {
            command_text: "commandText" => string(),
            reason: "reason" => string(),
        })
    }
}

/// A chat user the bot has seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BotUser {
    pub nickname: String,
    pub last_command: Command,
    pub last_seen: String,
    pub uuid: String,
}

impl Decode for BotUser {
    fn decode(input: &Value) -> ValidationResult<Self> {
        record!(input => Self {
            nickname: "nickname" => string(),
            last_command: "lastCommand" => decoder::<Command>(),
            last_seen: "lastSeen" => string(),
            uuid: "uuid" => string(),
        })
    }
}

tags! {
    pub enum CommandErrorKind {
        DiscordError = "DiscordError",
        ValidationError = "ValidationError",
        NoResults = "NoResults",
    }
}

/// Why a command produced no answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum CommandError {
    DiscordError(DiscordErrorData),
    ValidationError(ValidationErrorData),
    NoResults(String),
}

impl Decode for CommandError {
    fn decode(input: &Value) -> ValidationResult<Self> {
        tagged(|kind: CommandErrorKind, input: &Value| match kind {
            CommandErrorKind::DiscordError => data_variant(kind, decoder::<DiscordErrorData>())
                .map(Self::DiscordError)
                .validate(input),
            CommandErrorKind::ValidationError => {
                data_variant(kind, decoder::<ValidationErrorData>())
                    .map(Self::ValidationError)
                    .validate(input)
            }
            CommandErrorKind::NoResults => data_variant(kind, string())
                .map(Self::NoResults)
                .validate(input),
        })
        .validate(input)
    }
}

// ============================================================================
// GENERIC RESULTS
// ============================================================================

tags! {
    pub enum SearchResultKind {
        SearchSuccess = "SearchSuccess",
        SearchFailure = "SearchFailure",
    }
}

/// Outcome of one search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum SearchResult<T> {
    SearchSuccess(T),
    SearchFailure(CommandError),
}

impl<T> SearchResult<T> {
    #[must_use]
    pub fn kind(&self) -> SearchResultKind {
        match self {
            Self::SearchSuccess(_) => SearchResultKind::SearchSuccess,
            Self::SearchFailure(_) => SearchResultKind::SearchFailure,
        }
    }

    /// The payload of a successful search.
    pub fn success(&self) -> Option<&T> {
        match self {
            Self::SearchSuccess(payload) => Some(payload),
            Self::SearchFailure(_) => None,
        }
    }
}

/// Accepts only the `SearchSuccess` variant, with a payload accepted by
/// `payload`.
pub fn search_success<V: Validate>(payload: V) -> impl Validate<Output = SearchResult<V::Output>> {
    data_variant(SearchResultKind::SearchSuccess, payload).map(SearchResult::SearchSuccess)
}

/// Accepts only the `SearchFailure` variant.
pub fn search_failure<T>() -> impl Validate<Output = SearchResult<T>> {
    data_variant(SearchResultKind::SearchFailure, decoder::<CommandError>())
        .map(SearchResult::SearchFailure)
}

/// Decoder of a [`SearchResult`] whose success payload is accepted by
/// `payload`.
pub fn search_result<V: Validate>(payload: V) -> impl Validate<Output = SearchResult<V::Output>> {
    tagged(move |kind: SearchResultKind, input: &Value| match kind {
        SearchResultKind::SearchSuccess => search_success(&payload).validate(input),
        SearchResultKind::SearchFailure => search_failure().validate(input),
    })
}

impl<T: Decode> Decode for SearchResult<T> {
    fn decode(input: &Value) -> ValidationResult<Self> {
        search_result(decoder::<T>()).validate(input)
    }
}

/// One search, with who ran it and what came back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchEntry<T> {
    pub user: BotUser,
    pub uuid: String,
    pub result: SearchResult<T>,
}

/// Decoder of a [`SearchEntry`] whose success payload is accepted by
/// `payload`.
pub fn search_entry<V: Validate>(payload: V) -> impl Validate<Output = SearchEntry<V::Output>> {
    let outcome = search_result(payload);
    from_fn(move |input| {
        record!(input => SearchEntry {
            user: "user" => decoder::<BotUser>(),
            uuid: "uuid" => string(),
            result: "result" => &outcome,
        })
    })
}

impl<T: Decode> Decode for SearchEntry<T> {
    fn decode(input: &Value) -> ValidationResult<Self> {
        search_entry(decoder::<T>()).validate(input)
    }
}

tags! {
    pub enum Side {
        Left = "Left",
        Right = "Right",
    }
}

/// One of two payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    #[must_use]
    pub fn side(&self) -> Side {
        match self {
            Self::Left(_) => Side::Left,
            Self::Right(_) => Side::Right,
        }
    }
}

/// Decoder of an [`Either`] with `left` and `right` payload validators.
pub fn either<A, B>(left: A, right: B) -> impl Validate<Output = Either<A::Output, B::Output>>
where
    A: Validate,
    B: Validate,
{
    tagged(move |side: Side, input: &Value| match side {
        Side::Left => data_variant(side, &left).map(Either::Left).validate(input),
        Side::Right => data_variant(side, &right).map(Either::Right).validate(input),
    })
}

impl<L: Decode, R: Decode> Decode for Either<L, R> {
    fn decode(input: &Value) -> ValidationResult<Self> {
        either(decoder::<L>(), decoder::<R>()).validate(input)
    }
}

// ============================================================================
// SEARCH COMMAND
// ============================================================================

tags! {
    /// Discriminants of [`SearchCommand`].
    pub enum SearchCommandKind {
        PersonSearch = "PersonSearch",
        MovieSearch = "MovieSearch",
        MovieSearchById = "MovieSearchById",
        MovieCandidatesSearch = "MovieCandidatesSearch",
        ShowSearch = "ShowSearch",
        GitHubUserSearch = "GitHubUserSearch",
        GitHubRepositorySearch = "GitHubRepositorySearch",
    }
}

/// A stored search, keyed by the kind of lookup that ran.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum SearchCommand {
    PersonSearch(SearchEntry<Person>),
    MovieSearch(SearchEntry<MovieData>),
    MovieSearchById(SearchEntry<MovieData>),
    MovieCandidatesSearch(SearchEntry<Vec<MovieCandidate>>),
    ShowSearch(SearchEntry<Show>),
    GitHubUserSearch(SearchEntry<UserData>),
    GitHubRepositorySearch(SearchEntry<Repository>),
}

impl SearchCommand {
    #[must_use]
    pub fn kind(&self) -> SearchCommandKind {
        match self {
            Self::PersonSearch(_) => SearchCommandKind::PersonSearch,
            Self::MovieSearch(_) => SearchCommandKind::MovieSearch,
            Self::MovieSearchById(_) => SearchCommandKind::MovieSearchById,
            Self::MovieCandidatesSearch(_) => SearchCommandKind::MovieCandidatesSearch,
            Self::ShowSearch(_) => SearchCommandKind::ShowSearch,
            Self::GitHubUserSearch(_) => SearchCommandKind::GitHubUserSearch,
            Self::GitHubRepositorySearch(_) => SearchCommandKind::GitHubRepositorySearch,
        }
    }

    /// Identifier of the stored search.
    #[must_use]
    pub fn uuid(&self) -> &str {
        match self {
            Self::PersonSearch(entry) => &entry.uuid,
            Self::MovieSearch(entry) | Self::MovieSearchById(entry) => &entry.uuid,
            Self::MovieCandidatesSearch(entry) => &entry.uuid,
            Self::ShowSearch(entry) => &entry.uuid,
            Self::GitHubUserSearch(entry) => &entry.uuid,
            Self::GitHubRepositorySearch(entry) => &entry.uuid,
        }
    }

    /// The user who ran the search.
    #[must_use]
    pub fn user(&self) -> &BotUser {
        match self {
            Self::PersonSearch(entry) => &entry.user,
            Self::MovieSearch(entry) | Self::MovieSearchById(entry) => &entry.user,
            Self::MovieCandidatesSearch(entry) => &entry.user,
            Self::ShowSearch(entry) => &entry.user,
            Self::GitHubUserSearch(entry) => &entry.user,
            Self::GitHubRepositorySearch(entry) => &entry.user,
        }
    }
}

impl Decode for SearchCommand {
    fn decode(input: &Value) -> ValidationResult<Self> {
        tagged(|kind: SearchCommandKind, input: &Value| match kind {
            SearchCommandKind::PersonSearch => {
                data_variant(kind, search_entry(decoder::<Person>()))
                    .map(Self::PersonSearch)
                    .validate(input)
            }
            SearchCommandKind::MovieSearch => {
                data_variant(kind, search_entry(decoder::<MovieData>()))
                    .map(Self::MovieSearch)
                    .validate(input)
            }
            SearchCommandKind::MovieSearchById => {
                data_variant(kind, search_entry(decoder::<MovieData>()))
                    .map(Self::MovieSearchById)
                    .validate(input)
            }
            SearchCommandKind::MovieCandidatesSearch => {
                data_variant(kind, search_entry(decoder::<MovieCandidate>().array()))
                    .map(Self::MovieCandidatesSearch)
                    .validate(input)
            }
            SearchCommandKind::ShowSearch => data_variant(kind, search_entry(decoder::<Show>()))
                .map(Self::ShowSearch)
                .validate(input),
            SearchCommandKind::GitHubUserSearch => {
                data_variant(kind, search_entry(decoder::<UserData>()))
                    .map(Self::GitHubUserSearch)
                    .validate(input)
            }
            SearchCommandKind::GitHubRepositorySearch => {
                data_variant(kind, search_entry(decoder::<Repository>()))
                    .map(Self::GitHubRepositorySearch)
                    .validate(input)
            }
        })
        .validate(input)
    }
}
