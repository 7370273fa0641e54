//! GitHub REST responses and webhook deliveries.

use pomoshtnik_validator::prelude::*;
use pomoshtnik_validator::{any_of, record, tags};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Owner {
    pub id: i64,
    pub login: String,
    pub url: String,
    pub html_url: String,
    pub followers_url: String,
    pub gists_url: String,
    pub repos_url: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub site_admin: bool,
}

impl Decode for Owner {
    fn decode(input: &Value) -> ValidationResult<Self> {
        record!(input => Self {
            id: "id" => integer(),
            login: "login" => string(),
            url: "url" => string(),
            html_url: "html_url" => string(),
            followers_url: "followers_url" => string(),
            gists_url: "gists_url" => string(),
            repos_url: "repos_url" => string(),
            kind: "type" => string(),
            site_admin: "site_admin" => boolean(),
        })
    }
}

/// A GitHub user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: i64,
    pub login: String,
    pub html_url: String,
    pub avatar_url: String,
    pub name: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub public_repos: i64,
    pub followers: i64,
    pub following: i64,
    pub created_at: String,
}

impl Decode for UserData {
    fn decode(input: &Value) -> ValidationResult<Self> {
        record!(input => Self {
            id: "id" => integer(),
            login: "login" => string(),
            html_url: "html_url" => string(),
            avatar_url: "avatar_url" => string(),
            name: "name" => string().optional(),
            company: "company" => string().optional(),
            blog: "blog" => string().optional(),
            location: "location" => string().optional(),
            bio: "bio" => string().optional(),
            public_repos: "public_repos" => integer(),
            followers: "followers" => integer(),
            following: "following" => integer(),
            created_at: "created_at" => string(),
        })
    }
}

/// Creation time of a repository: webhooks send Unix seconds, the REST
/// API an ISO 8601 string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Timestamp {
    Unix(i64),
    Iso(String),
}

impl Decode for Timestamp {
    fn decode(input: &Value) -> ValidationResult<Self> {
        any_of!(integer().map(Self::Unix), string().map(Self::Iso)).validate(input)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repository {
    pub id: i64,
    pub name: String,
    pub full_name: String,
    pub private: bool,
    pub fork: bool,
    pub created_at: Timestamp,
    pub updated_at: String,
    pub description: Option<String>,
    pub owner: Owner,
    pub html_url: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: Option<i64>,
    pub topics: Option<Vec<String>>,
}

impl Decode for Repository {
    fn decode(input: &Value) -> ValidationResult<Self> {
        record!(input => Self {
            id: "id" => integer(),
            name: "name" => string(),
            full_name: "full_name" => string(),
            private: "private" => boolean(),
            fork: "fork" => boolean(),
            created_at: "created_at" => decoder::<Timestamp>(),
            updated_at: "updated_at" => string(),
            description: "description" => string().nullable(),
            owner: "owner" => decoder::<Owner>(),
            html_url: "html_url" => string().optional(),
            language: "language" => string().optional(),
            stargazers_count: "stargazers_count" => integer().optional(),
            topics: "topics" => string().array().optional(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Organization {
    pub login: String,
    pub id: i64,
    pub avatar_url: String,
    pub url: String,
    pub members_url: String,
    pub repos_url: String,
    pub description: Option<String>,
}

impl Decode for Organization {
    fn decode(input: &Value) -> ValidationResult<Self> {
        record!(input => Self {
            login: "login" => string(),
            id: "id" => integer(),
            avatar_url: "avatar_url" => string(),
            url: "url" => string(),
            members_url: "members_url" => string(),
            repos_url: "repos_url" => string(),
            description: "description" => string().nullable(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sender {
    pub login: String,
    pub id: i64,
    pub avatar_url: String,
    pub url: String,
    pub html_url: String,
    pub followers_url: String,
    pub gists_url: String,
    pub repos_url: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub site_admin: bool,
}

impl Decode for Sender {
    fn decode(input: &Value) -> ValidationResult<Self> {
        record!(input => Self {
            login: "login" => string(),
            id: "id" => integer(),
            avatar_url: "avatar_url" => string(),
            url: "url" => string(),
            html_url: "html_url" => string(),
            followers_url: "followers_url" => string(),
            gists_url: "gists_url" => string(),
            repos_url: "repos_url" => string(),
            kind: "type" => string(),
            site_admin: "site_admin" => boolean(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pusher {
    pub name: String,
    pub email: String,
}

impl Decode for Pusher {
    fn decode(input: &Value) -> ValidationResult<Self> {
        record!(input => Self {
            name: "name" => string(),
            email: "email" => string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub name: String,
    pub email: String,
    pub username: String,
}

impl Decode for Author {
    fn decode(input: &Value) -> ValidationResult<Self> {
        record!(input => Self {
            name: "name" => string(),
            email: "email" => string(),
            username: "username" => string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Commit {
    pub id: String,
    pub tree_id: String,
    pub distinct: bool,
    pub message: String,
    pub timestamp: String,
    pub url: String,
    pub author: Author,
    pub committer: Author,
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub modified: Vec<String>,
}

impl Commit {
    /// First line of the commit message.
    #[must_use]
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }
}

impl Decode for Commit {
    fn decode(input: &Value) -> ValidationResult<Self> {
        record!(input => Self {
            id: "id" => string(),
            tree_id: "tree_id" => string(),
            distinct: "distinct" => boolean(),
            message: "message" => string(),
            timestamp: "timestamp" => string(),
            url: "url" => string(),
            author: "author" => decoder::<Author>(),
            committer: "committer" => decoder::<Author>(),
            added: "added" => string().array(),
            removed: "removed" => string().array(),
            modified: "modified" => string().array(),
        })
    }
}

/// Body of a `repository` delivery whose action is `created`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename = "created")]
pub struct RepositoryCreated {
    pub repository: Repository,
    pub organization: Organization,
    pub sender: Sender,
}

impl RepositoryCreated {
    pub const ACTION: &'static str = "created";
}

impl Decode for RepositoryCreated {
    fn decode(input: &Value) -> ValidationResult<Self> {
        record!(input => Self ["action" == Self::ACTION] {
            repository: "repository" => decoder::<Repository>(),
            organization: "organization" => decoder::<Organization>(),
            sender: "sender" => decoder::<Sender>(),
        })
    }
}

/// Body of a `push` delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PushedToRepository {
    pub repository: Repository,
    #[serde(rename = "ref")]
    pub reference: String,
    pub before: String,
    pub after: String,
    pub pusher: Pusher,
    pub organization: Organization,
    pub sender: Sender,
    pub created: bool,
    pub deleted: bool,
    pub forced: bool,
    pub compare: String,
    pub commits: Vec<Commit>,
    pub head_commit: Commit,
}

impl PushedToRepository {
    /// Branch or tag name, without the `refs/heads/` style prefix.
    #[must_use]
    pub fn ref_name(&self) -> &str {
        self.reference
            .rsplit_once('/')
            .map_or(self.reference.as_str(), |(_, name)| name)
    }
}

impl Decode for PushedToRepository {
    fn decode(input: &Value) -> ValidationResult<Self> {
        record!(input => Self {
            repository: "repository" => decoder::<Repository>(),
            reference: "ref" => string(),
            before: "before" => string(),
            after: "after" => string(),
            pusher: "pusher" => decoder::<Pusher>(),
            organization: "organization" => decoder::<Organization>(),
            sender: "sender" => decoder::<Sender>(),
            created: "created" => boolean(),
            deleted: "deleted" => boolean(),
            forced: "forced" => boolean(),
            compare: "compare" => string(),
            commits: "commits" => decoder::<Vec<Commit>>(),
            head_commit: "head_commit" => decoder::<Commit>(),
        })
    }
}

tags! {
    /// Webhook event names, as sent in the `X-GitHub-Event` header.
    pub enum WebhookEventKind {
        Repository = "repository",
        Push = "push",
    }
}

/// A webhook delivery, discriminated by its event name.
///
/// Decodes from the `{type, data}` envelope built by
/// [`WebhookEvent::envelope`] out of the event header and the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum WebhookEvent {
    #[serde(rename = "repository")]
    RepositoryCreated(RepositoryCreated),
    #[serde(rename = "push")]
    PushedToRepository(PushedToRepository),
}

impl WebhookEvent {
    /// Pairs the event header with the delivery body.
    #[must_use]
    pub fn envelope(event: &str, body: Value) -> Value {
        json!({"type": event, "data": body})
    }

    /// Decodes one delivery.
    pub fn from_delivery(event: &str, body: Value) -> ValidationResult<Self> {
        Self::decode(&Self::envelope(event, body))
    }

    #[must_use]
    pub fn kind(&self) -> WebhookEventKind {
        match self {
            Self::RepositoryCreated(_) => WebhookEventKind::Repository,
            Self::PushedToRepository(_) => WebhookEventKind::Push,
        }
    }

    /// The envelope this event decodes from.
    pub fn to_envelope(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

impl Decode for WebhookEvent {
    fn decode(input: &Value) -> ValidationResult<Self> {
        tagged(|kind: WebhookEventKind, input: &Value| match kind {
            WebhookEventKind::Repository => data_variant(kind, decoder::<RepositoryCreated>())
                .map(Self::RepositoryCreated)
                .validate(input),
            WebhookEventKind::Push => data_variant(kind, decoder::<PushedToRepository>())
                .map(Self::PushedToRepository)
                .validate(input),
        })
        .validate(input)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use serde_json::{Value, json};

    pub fn owner() -> Value {
        json!({
            "id": 1,
            "login": "octocat",
            "url": "https://api.github.com/users/octocat",
            "html_url": "https://github.com/octocat",
            "followers_url": "https://api.github.com/users/octocat/followers",
            "gists_url": "https://api.github.com/users/octocat/gists{/gist_id}",
            "repos_url": "https://api.github.com/users/octocat/repos",
            "type": "User",
            "site_admin": false,
        })
    }

    pub fn repository(created_at: Value) -> Value {
        json!({
            "id": 1296269,
            "name": "Hello-World",
            "full_name": "octocat/Hello-World",
            "private": false,
            "fork": false,
            "created_at": created_at,
            "updated_at": "2011-01-26T19:14:43Z",
            "description": null,
            "owner": owner(),
        })
    }

    pub fn organization() -> Value {
        json!({
            "login": "github",
            "id": 9919,
            "avatar_url": "https://avatars.githubusercontent.com/u/9919",
            "url": "https://api.github.com/orgs/github",
            "members_url": "https://api.github.com/orgs/github/members{/member}",
            "repos_url": "https://api.github.com/orgs/github/repos",
            "description": "How people build software.",
        })
    }

    pub fn sender() -> Value {
        let mut sender = owner();
        sender["avatar_url"] = json!("https://avatars.githubusercontent.com/u/1");
        sender
    }

    pub fn commit(message: &str) -> Value {
        let author = json!({"name": "Mona", "email": "mona@example.com", "username": "mona"});
        json!({
            "id": "6dcb09b",
            "tree_id": "f9d2a07",
            "distinct": true,
            "message": message,
            "timestamp": "2024-01-01T00:00:00Z",
            "url": "https://github.com/octocat/Hello-World/commit/6dcb09b",
            "author": author,
            "committer": author,
            "added": [],
            "removed": [],
            "modified": ["README.md"],
        })
    }

    pub fn push_body() -> Value {
        json!({
            "ref": "refs/heads/main",
            "before": "0000000",
            "after": "6dcb09b",
            "repository": repository(json!(1296269)),
            "pusher": {"name": "mona", "email": "mona@example.com"},
            "organization": organization(),
            "sender": sender(),
            "created": false,
            "deleted": false,
            "forced": false,
            "compare": "https://github.com/octocat/Hello-World/compare/0000000...6dcb09b",
            "commits": [commit("Update README\n\nlonger body")],
            "head_commit": commit("Update README\n\nlonger body"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn created_at_accepts_both_encodings() {
        let unix = Repository::decode(&repository(json!(1296269))).unwrap();
        assert_eq!(unix.created_at, Timestamp::Unix(1_296_269));

        let iso = Repository::decode(&repository(json!("2011-01-26T19:01:12Z"))).unwrap();
        assert_eq!(iso.created_at, Timestamp::Iso("2011-01-26T19:01:12Z".to_owned()));

        let error = Repository::decode(&repository(json!(true))).unwrap_err();
        assert!(error.names_field(codes::TYPE_MISMATCH, "created_at"));
    }

    #[test]
    fn description_is_nullable_but_required() {
        let mut body = repository(json!(1));
        body.as_object_mut().unwrap().remove("description");
        let error = Repository::decode(&body).unwrap_err();
        assert!(error.names_field(codes::REQUIRED, "description"));
    }

    #[test]
    fn push_delivery_decodes() {
        let event = WebhookEvent::from_delivery("push", push_body()).unwrap();
        let WebhookEvent::PushedToRepository(push) = event else {
            panic!("expected a push event");
        };
        assert_eq!(push.ref_name(), "main");
        assert_eq!(push.head_commit.summary(), "Update README");
    }

    #[test]
    fn repository_delivery_requires_created_action() {
        let body = json!({
            "action": "deleted",
            "repository": repository(json!(1)),
            "organization": organization(),
            "sender": sender(),
        });
        let error = WebhookEvent::from_delivery("repository", body).unwrap_err();
        assert!(error.names_field(codes::INVALID_LITERAL, "action"));
        assert_eq!(error.entries()[0].0, "data/action");
    }

    #[test]
    fn unknown_event_names_are_rejected() {
        let error = WebhookEvent::from_delivery("issues", json!({})).unwrap_err();
        assert_eq!(error.code, codes::UNRECOGNIZED_VARIANT);
        assert_eq!(error.param("known"), Some("repository, push"));
    }

    #[test]
    fn created_body_serializes_its_action() {
        let body = json!({
            "action": "created",
            "repository": repository(json!(1)),
            "organization": organization(),
            "sender": sender(),
        });
        let created = RepositoryCreated::decode(&body).unwrap();
        let wire = serde_json::to_value(&created).unwrap();
        assert_eq!(wire["action"], json!(RepositoryCreated::ACTION));
        assert_eq!(RepositoryCreated::decode(&wire), Ok(created));
    }

    #[test]
    fn envelopes_round_trip() {
        let created = WebhookEvent::from_delivery(
            "repository",
            json!({
                "action": "created",
                "repository": repository(json!("2011-01-26T19:01:12Z")),
                "organization": organization(),
                "sender": sender(),
            }),
        )
        .unwrap();
        assert_eq!(WebhookEvent::decode(&created.to_envelope().unwrap()), Ok(created));

        let pushed = WebhookEvent::from_delivery("push", push_body()).unwrap();
        let envelope = pushed.to_envelope().unwrap();
        assert_eq!(envelope["type"], json!("push"));
        assert_eq!(WebhookEvent::decode(&envelope), Ok(pushed));
    }
}
