//! Typed fixtures shared by the integration tests.

#![allow(dead_code)]

use pomoshtnik_schema::commands::{
    BotUser, Command, CommandError, DiscordErrorData, SearchEntry, SearchResult,
};
use pomoshtnik_schema::github::{
    Organization, Owner, Repository, RepositoryCreated, Sender, Timestamp, UserData,
};
use pomoshtnik_schema::tmdb::{
    CastEntry, CombinedCredits, Credits, CrewEntry, Genre, KnownFor, MovieCandidate, MovieCredit,
    MovieData, Person, Show, ShowCredit,
};
use pomoshtnik_validator::foundation::Decode;
use serde::Serialize;

/// Serializes `value` and decodes it again.
pub fn round_trip<T>(value: &T) -> T
where
    T: Serialize + Decode,
{
    let wire = serde_json::to_value(value).expect("fixture serializes");
    match T::decode(&wire) {
        Ok(decoded) => decoded,
        Err(error) => panic!("{wire} did not decode: {:?}", error.entries()),
    }
}

pub fn user(last_command: Command) -> BotUser {
    BotUser {
        nickname: "alice".into(),
        last_command,
        last_seen: "2024-01-01T00:00:00Z".into(),
        uuid: "u-1".into(),
    }
}

pub fn entry<T>(result: SearchResult<T>) -> SearchEntry<T> {
    SearchEntry {
        user: user(Command::Ping),
        uuid: "s-1".into(),
        result,
    }
}

pub fn discord_error() -> CommandError {
    CommandError::DiscordError(DiscordErrorData {
        command_text: "!movie Alien".into(),
        name: "DiscordAPIError".into(),
        message: "Missing Permissions".into(),
        method: "post".into(),
        path: "/channels/1/messages".into(),
        code: 50013,
        http_status: 403,
    })
}

pub fn credits() -> Credits {
    Credits {
        cast: vec![CastEntry {
            id: 6384,
            name: "Keanu Reeves".into(),
            character: "Neo".into(),
            credit_id: "52fe425bc3a36847f80181c1".into(),
            order: Some(0),
            profile_path: None,
        }],
        crew: vec![CrewEntry {
            id: 9340,
            name: "Lana Wachowski".into(),
            job: "Director".into(),
            department: "Directing".into(),
            credit_id: "52fe425bc3a36847f8018207".into(),
            profile_path: Some("/p.jpg".into()),
        }],
    }
}

pub fn movie() -> MovieData {
    MovieData {
        id: 603,
        imdb_id: Some("tt0133093".into()),
        title: "The Matrix".into(),
        original_title: "The Matrix".into(),
        tagline: Some("Welcome to the Real World.".into()),
        overview: None,
        release_date: "1999-03-30".into(),
        runtime: Some(136),
        budget: 63_000_000,
        revenue: 463_517_383,
        status: "Released".into(),
        genres: vec![Genre {
            id: 878,
            name: "Science Fiction".into(),
        }],
        homepage: None,
        poster_path: Some("/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg".into()),
        vote_average: 8.2,
        vote_count: 24_000,
        credits: credits(),
    }
}

pub fn movie_candidate() -> MovieCandidate {
    MovieCandidate {
        id: 348,
        title: "Alien".into(),
        original_title: "Alien".into(),
        overview: "In space no one can hear you scream.".into(),
        release_date: Some("1979-05-25".into()),
        poster_path: None,
        genre_ids: vec![27, 878],
        popularity: 61.5,
        vote_average: 8.1,
        vote_count: 14_000,
    }
}

pub fn show() -> Show {
    Show {
        id: 1396,
        name: "Breaking Bad".into(),
        original_name: "Breaking Bad".into(),
        overview: "A chemistry teacher turns to crime.".into(),
        first_air_date: Some("2008-01-20".into()),
        last_air_date: Some("2013-09-29".into()),
        status: "Ended".into(),
        in_production: false,
        number_of_seasons: 5,
        number_of_episodes: 62,
        episode_run_time: vec![45, 47],
        genres: Vec::new(),
        homepage: None,
        poster_path: None,
        vote_average: 8.9,
        vote_count: 12_000,
        external_ids: None,
        credits: Credits {
            cast: Vec::new(),
            crew: Vec::new(),
        },
    }
}

pub fn person() -> Person {
    Person {
        id: 6384,
        name: "Keanu Reeves".into(),
        biography: "Canadian actor.".into(),
        birthday: Some("1964-09-02".into()),
        deathday: None,
        place_of_birth: Some("Beirut, Lebanon".into()),
        profile_path: None,
        imdb_id: Some("nm0000206".into()),
        known_for_department: Some("Acting".into()),
        popularity: 44.3,
        combined_credits: CombinedCredits {
            cast: vec![
                KnownFor::Movie(MovieCredit {
                    id: 603,
                    title: "The Matrix".into(),
                    release_date: Some("1999-03-30".into()),
                    poster_path: None,
                    character: Some("Neo".into()),
                    job: None,
                }),
                KnownFor::Show(ShowCredit {
                    id: 1,
                    name: "Swimming with Sharks".into(),
                    first_air_date: None,
                    poster_path: None,
                    character: Some("Himself".into()),
                    job: None,
                }),
            ],
            crew: Vec::new(),
        },
    }
}

pub fn github_user() -> UserData {
    UserData {
        id: 583231,
        login: "octocat".into(),
        html_url: "https://github.com/octocat".into(),
        avatar_url: "https://avatars.githubusercontent.com/u/583231".into(),
        name: Some("The Octocat".into()),
        company: Some("@github".into()),
        blog: None,
        location: Some("San Francisco".into()),
        bio: None,
        public_repos: 8,
        followers: 9000,
        following: 9,
        created_at: "2011-01-25T18:44:36Z".into(),
    }
}

pub fn repository() -> Repository {
    Repository {
        id: 1296269,
        name: "Hello-World".into(),
        full_name: "octocat/Hello-World".into(),
        private: false,
        fork: false,
        created_at: Timestamp::Iso("2011-01-26T19:01:12Z".into()),
        updated_at: "2011-01-26T19:14:43Z".into(),
        description: Some("My first repository on GitHub!".into()),
        owner: Owner {
            id: 1,
            login: "octocat".into(),
            url: "https://api.github.com/users/octocat".into(),
            html_url: "https://github.com/octocat".into(),
            followers_url: "https://api.github.com/users/octocat/followers".into(),
            gists_url: "https://api.github.com/users/octocat/gists{/gist_id}".into(),
            repos_url: "https://api.github.com/users/octocat/repos".into(),
            kind: "User".into(),
            site_admin: false,
        },
        html_url: Some("https://github.com/octocat/Hello-World".into()),
        language: None,
        stargazers_count: Some(80),
        topics: Some(vec!["octocat".into(), "api".into()]),
    }
}

pub fn repository_created() -> RepositoryCreated {
    RepositoryCreated {
        repository: repository(),
        organization: Organization {
            login: "github".into(),
            id: 9919,
            avatar_url: "https://avatars.githubusercontent.com/u/9919".into(),
            url: "https://api.github.com/orgs/github".into(),
            members_url: "https://api.github.com/orgs/github/members{/member}".into(),
            repos_url: "https://api.github.com/orgs/github/repos".into(),
            description: None,
        },
        sender: Sender {
            login: "octocat".into(),
            id: 1,
            avatar_url: "https://avatars.githubusercontent.com/u/1".into(),
            url: "https://api.github.com/users/octocat".into(),
            html_url: "https://github.com/octocat".into(),
            followers_url: "https://api.github.com/users/octocat/followers".into(),
            gists_url: "https://api.github.com/users/octocat/gists{/gist_id}".into(),
            repos_url: "https://api.github.com/users/octocat/repos".into(),
            kind: "User".into(),
            site_admin: false,
        },
    }
}
