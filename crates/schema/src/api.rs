//! REST and WebSocket API messages exchanged with the web UI.

use crate::commands::{BotUser, SearchCommand};
use pomoshtnik_validator::prelude::*;
use pomoshtnik_validator::tags;
use serde::Serialize;
use serde_json::Value;

tags! {
    pub enum ApiRequestKind {
        GetSearches = "GetSearches",
        GetSearch = "GetSearch",
        GetUsers = "GetUsers",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum ApiRequest {
    GetSearches,
    /// Fetches one search by its uuid.
    GetSearch(String),
    GetUsers,
}

impl ApiRequest {
    #[must_use]
    pub fn kind(&self) -> ApiRequestKind {
        match self {
            Self::GetSearches => ApiRequestKind::GetSearches,
            Self::GetSearch(_) => ApiRequestKind::GetSearch,
            Self::GetUsers => ApiRequestKind::GetUsers,
        }
    }
}

impl Decode for ApiRequest {
    fn decode(input: &Value) -> ValidationResult<Self> {
        tagged(|kind: ApiRequestKind, input: &Value| match kind {
            ApiRequestKind::GetSearches => unit_variant(kind)
                .map(|()| Self::GetSearches)
                .validate(input),
            ApiRequestKind::GetSearch => data_variant(kind, string())
                .map(Self::GetSearch)
                .validate(input),
            ApiRequestKind::GetUsers => unit_variant(kind).map(|()| Self::GetUsers).validate(input),
        })
        .validate(input)
    }
}

tags! {
    pub enum ClientEventKind {
        ExecuteApiRequest = "ExecuteApiRequest",
    }
}

/// Sent by the UI over the socket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum ClientEvent {
    ExecuteApiRequest(ApiRequest),
}

impl Decode for ClientEvent {
    fn decode(input: &Value) -> ValidationResult<Self> {
        tagged(|kind: ClientEventKind, input: &Value| match kind {
            ClientEventKind::ExecuteApiRequest => data_variant(kind, decoder::<ApiRequest>())
                .map(Self::ExecuteApiRequest)
                .validate(input),
        })
        .validate(input)
    }
}

tags! {
    pub enum ServerEventKind {
        SearchesResult = "SearchesResult",
        SearchResult = "SearchResult",
        UsersResult = "UsersResult",
    }
}

/// Sent to the UI in answer to an [`ApiRequest`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum ServerEvent {
    SearchesResult(Vec<SearchCommand>),
    SearchResult(SearchCommand),
    UsersResult(Vec<BotUser>),
}

impl Decode for ServerEvent {
    fn decode(input: &Value) -> ValidationResult<Self> {
        tagged(|kind: ServerEventKind, input: &Value| match kind {
            ServerEventKind::SearchesResult => {
                data_variant(kind, decoder::<SearchCommand>().array())
                    .map(Self::SearchesResult)
                    .validate(input)
            }
            ServerEventKind::SearchResult => data_variant(kind, decoder::<SearchCommand>())
                .map(Self::SearchResult)
                .validate(input),
            ServerEventKind::UsersResult => data_variant(kind, decoder::<BotUser>().array())
                .map(Self::UsersResult)
                .validate(input),
        })
        .validate(input)
    }
}

tags! {
    pub enum ApplicationEventKind {
        EventFromClient = "EventFromClient",
        EventFromServer = "EventFromServer",
    }
}

/// Either direction of socket traffic.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum ApplicationEvent {
    EventFromClient(ClientEvent),
    EventFromServer(ServerEvent),
}

impl Decode for ApplicationEvent {
    fn decode(input: &Value) -> ValidationResult<Self> {
        tagged(|kind: ApplicationEventKind, input: &Value| match kind {
            ApplicationEventKind::EventFromClient => data_variant(kind, decoder::<ClientEvent>())
                .map(Self::EventFromClient)
                .validate(input),
            ApplicationEventKind::EventFromServer => data_variant(kind, decoder::<ServerEvent>())
                .map(Self::EventFromServer)
                .validate(input),
        })
        .validate(input)
    }
}
