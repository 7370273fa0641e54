//! The Movie Database (TMDB) response payloads.
//!
//! Sizes are closed string sets; credits that may describe either a movie
//! or a TV show are a union discriminated by `media_type`.

use pomoshtnik_validator::prelude::*;
use pomoshtnik_validator::{record, tags};
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// IMAGE SIZES
// ============================================================================

tags! {
    /// Widths TMDB can render posters at.
    pub enum PosterSize {
        W92 = "w92",
        W154 = "w154",
        W185 = "w185",
        W342 = "w342",
        W500 = "w500",
        W780 = "w780",
        Original = "original",
    }
}

tags! {
    /// Sizes TMDB can render profile pictures at.
    pub enum ProfileSize {
        W45 = "w45",
        W185 = "w185",
        W300 = "w300",
        H632 = "h632",
        Original = "original",
    }
}

tags! {
    /// Sizes TMDB can render episode stills at.
    pub enum StillSize {
        W92 = "w92",
        W185 = "w185",
        W300 = "w300",
        H632 = "h632",
        Original = "original",
    }
}

tags! {
    /// Sizes TMDB can render backdrops at.
    pub enum BackdropSize {
        W300 = "w300",
        W780 = "w780",
        W1280 = "w1280",
        Original = "original",
    }
}

impl PosterSize {
    pub const PREFERRED: Self = Self::W185;
}

impl ProfileSize {
    pub const PREFERRED: Self = Self::W185;
}

impl StillSize {
    pub const PREFERRED: Self = Self::W185;
}

impl BackdropSize {
    pub const PREFERRED: Self = Self::W300;
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageConfigurationData {
    pub base_url: String,
    pub secure_base_url: String,
    pub poster_sizes: Vec<PosterSize>,
    pub profile_sizes: Vec<ProfileSize>,
    pub still_sizes: Vec<StillSize>,
    pub backdrop_sizes: Vec<BackdropSize>,
}

impl ImageConfigurationData {
    /// Full HTTPS URL of an image `path` rendered at `size`.
    #[must_use]
    pub fn image_url<S: Tag>(&self, size: S, path: &str) -> String {
        format!("{}{}{}", self.secure_base_url, size.as_str(), path)
    }
}

impl Decode for ImageConfigurationData {
    fn decode(input: &Value) -> ValidationResult<Self> {
        record!(input => Self {
            base_url: "base_url" => string(),
            secure_base_url: "secure_base_url" => string(),
            poster_sizes: "poster_sizes" => literal::<PosterSize>().array(),
            profile_sizes: "profile_sizes" => literal::<ProfileSize>().array(),
            still_sizes: "still_sizes" => literal::<StillSize>().array(),
            backdrop_sizes: "backdrop_sizes" => literal::<BackdropSize>().array(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigurationData {
    pub images: ImageConfigurationData,
    pub change_keys: Vec<String>,
}

impl Decode for ConfigurationData {
    fn decode(input: &Value) -> ValidationResult<Self> {
        record!(input => Self {
            images: "images" => decoder::<ImageConfigurationData>(),
            change_keys: "change_keys" => string().array(),
        })
    }
}

// ============================================================================
// SEARCH CANDIDATES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

impl Decode for Genre {
    fn decode(input: &Value) -> ValidationResult<Self> {
        record!(input => Self {
            id: "id" => integer(),
            name: "name" => string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieCandidate {
    pub id: i64,
    pub title: String,
    pub original_title: String,
    pub overview: String,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub genre_ids: Vec<i64>,
    pub popularity: f64,
    pub vote_average: f64,
    pub vote_count: i64,
}

impl Decode for MovieCandidate {
    fn decode(input: &Value) -> ValidationResult<Self> {
        record!(input => Self {
            id: "id" => integer(),
            title: "title" => string(),
            original_title: "original_title" => string(),
            overview: "overview" => string(),
            release_date: "release_date" => string().optional(),
            poster_path: "poster_path" => string().optional(),
            genre_ids: "genre_ids" => integer().array(),
            popularity: "popularity" => number(),
            vote_average: "vote_average" => number(),
            vote_count: "vote_count" => integer(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowCandidate {
    pub id: i64,
    pub name: String,
    pub original_name: String,
    pub overview: String,
    pub first_air_date: Option<String>,
    pub poster_path: Option<String>,
    pub origin_country: Vec<String>,
    pub popularity: f64,
    pub vote_average: f64,
    pub vote_count: i64,
}

impl Decode for ShowCandidate {
    fn decode(input: &Value) -> ValidationResult<Self> {
        record!(input => Self {
            id: "id" => integer(),
            name: "name" => string(),
            original_name: "original_name" => string(),
            overview: "overview" => string(),
            first_air_date: "first_air_date" => string().optional(),
            poster_path: "poster_path" => string().optional(),
            origin_country: "origin_country" => string().array(),
            popularity: "popularity" => number(),
            vote_average: "vote_average" => number(),
            vote_count: "vote_count" => integer(),
        })
    }
}

tags! {
    /// Discriminant of [`KnownFor`] credits.
    pub enum MediaType {
        Movie = "movie",
        Tv = "tv",
    }
}

/// A credit on a movie or on a TV show.
///
/// Each credit writes its own `media_type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum KnownFor {
    Movie(MovieCredit),
    Show(ShowCredit),
}

impl KnownFor {
    /// Movie title or show name.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Movie(movie) => &movie.title,
            Self::Show(show) => &show.name,
        }
    }
}

impl Decode for KnownFor {
    fn decode(input: &Value) -> ValidationResult<Self> {
        tagged(|media: MediaType, input: &Value| match media {
            MediaType::Movie => MovieCredit::decode(input).map(Self::Movie),
            MediaType::Tv => ShowCredit::decode(input).map(Self::Show),
        })
        .with_tag_field("media_type")
        .validate(input)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "media_type", rename = "movie")]
pub struct MovieCredit {
    pub id: i64,
    pub title: String,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub character: Option<String>,
    pub job: Option<String>,
}

impl Decode for MovieCredit {
    fn decode(input: &Value) -> ValidationResult<Self> {
        record!(input => Self ["media_type" == "movie"] {
            id: "id" => integer(),
            title: "title" => string(),
            release_date: "release_date" => string().optional(),
            poster_path: "poster_path" => string().optional(),
            character: "character" => string().optional(),
            job: "job" => string().optional(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "media_type", rename = "tv")]
pub struct ShowCredit {
    pub id: i64,
    pub name: String,
    pub first_air_date: Option<String>,
    pub poster_path: Option<String>,
    pub character: Option<String>,
    pub job: Option<String>,
}

impl Decode for ShowCredit {
    fn decode(input: &Value) -> ValidationResult<Self> {
        record!(input => Self ["media_type" == "tv"] {
            id: "id" => integer(),
            name: "name" => string(),
            first_air_date: "first_air_date" => string().optional(),
            poster_path: "poster_path" => string().optional(),
            character: "character" => string().optional(),
            job: "job" => string().optional(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonCandidate {
    pub id: i64,
    pub name: String,
    pub profile_path: Option<String>,
    pub known_for_department: Option<String>,
    pub popularity: f64,
    pub known_for: Vec<KnownFor>,
}

impl Decode for PersonCandidate {
    fn decode(input: &Value) -> ValidationResult<Self> {
        record!(input => Self {
            id: "id" => integer(),
            name: "name" => string(),
            profile_path: "profile_path" => string().optional(),
            known_for_department: "known_for_department" => string().optional(),
            popularity: "popularity" => number(),
            known_for: "known_for" => decoder::<Vec<KnownFor>>(),
        })
    }
}

// ============================================================================
// CREDITS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CastEntry {
    pub id: i64,
    pub name: String,
    pub character: String,
    pub credit_id: String,
    pub order: Option<i64>,
    pub profile_path: Option<String>,
}

impl Decode for CastEntry {
    fn decode(input: &Value) -> ValidationResult<Self> {
        record!(input => Self {
            id: "id" => integer(),
            name: "name" => string(),
            character: "character" => string(),
            credit_id: "credit_id" => string(),
            order: "order" => integer().optional(),
            profile_path: "profile_path" => string().optional(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrewEntry {
    pub id: i64,
    pub name: String,
    pub job: String,
    pub department: String,
    pub credit_id: String,
    pub profile_path: Option<String>,
}

impl Decode for CrewEntry {
    fn decode(input: &Value) -> ValidationResult<Self> {
        record!(input => Self {
            id: "id" => integer(),
            name: "name" => string(),
            job: "job" => string(),
            department: "department" => string(),
            credit_id: "credit_id" => string(),
            profile_path: "profile_path" => string().optional(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credits {
    pub cast: Vec<CastEntry>,
    pub crew: Vec<CrewEntry>,
}

impl Credits {
    /// Crew members with the given job, e.g. `"Director"`.
    pub fn with_job<'a>(&'a self, job: &'a str) -> impl Iterator<Item = &'a CrewEntry> + 'a {
        self.crew.iter().filter(move |entry| entry.job == job)
    }
}

impl Decode for Credits {
    fn decode(input: &Value) -> ValidationResult<Self> {
        record!(input => Self {
            cast: "cast" => decoder::<Vec<CastEntry>>(),
            crew: "crew" => decoder::<Vec<CrewEntry>>(),
        })
    }
}

/// Movie and TV credits of one person.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinedCredits {
    pub cast: Vec<KnownFor>,
    pub crew: Vec<KnownFor>,
}

impl Decode for CombinedCredits {
    fn decode(input: &Value) -> ValidationResult<Self> {
        record!(input => Self {
            cast: "cast" => decoder::<Vec<KnownFor>>(),
            crew: "crew" => decoder::<Vec<KnownFor>>(),
        })
    }
}

// ============================================================================
// DETAILS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieData {
    pub id: i64,
    pub imdb_id: Option<String>,
    pub title: String,
    pub original_title: String,
    pub tagline: Option<String>,
    pub overview: Option<String>,
    pub release_date: String,
    pub runtime: Option<i64>,
    pub budget: i64,
    pub revenue: i64,
    pub status: String,
    pub genres: Vec<Genre>,
    pub homepage: Option<String>,
    pub poster_path: Option<String>,
    pub vote_average: f64,
    pub vote_count: i64,
    pub credits: Credits,
}

impl Decode for MovieData {
    fn decode(input: &Value) -> ValidationResult<Self> {
        record!(input => Self {
            id: "id" => integer(),
            imdb_id: "imdb_id" => string().optional(),
            title: "title" => string(),
            original_title: "original_title" => string(),
            tagline: "tagline" => string().optional(),
            overview: "overview" => string().optional(),
            release_date: "release_date" => string(),
            runtime: "runtime" => integer().optional(),
            budget: "budget" => integer(),
            revenue: "revenue" => integer(),
            status: "status" => string(),
            genres: "genres" => decoder::<Vec<Genre>>(),
            homepage: "homepage" => string().optional(),
            poster_path: "poster_path" => string().optional(),
            vote_average: "vote_average" => number(),
            vote_count: "vote_count" => integer(),
            credits: "credits" => decoder::<Credits>(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalIds {
    pub imdb_id: Option<String>,
    pub tvdb_id: Option<i64>,
}

impl Decode for ExternalIds {
    fn decode(input: &Value) -> ValidationResult<Self> {
        record!(input => Self {
            imdb_id: "imdb_id" => string().optional(),
            tvdb_id: "tvdb_id" => integer().optional(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Show {
    pub id: i64,
    pub name: String,
    pub original_name: String,
    pub overview: String,
    pub first_air_date: Option<String>,
    pub last_air_date: Option<String>,
    pub status: String,
    pub in_production: bool,
    pub number_of_seasons: i64,
    pub number_of_episodes: i64,
    pub episode_run_time: Vec<i64>,
    pub genres: Vec<Genre>,
    pub homepage: Option<String>,
    pub poster_path: Option<String>,
    pub vote_average: f64,
    pub vote_count: i64,
    pub external_ids: Option<ExternalIds>,
    pub credits: Credits,
}

impl Decode for Show {
    fn decode(input: &Value) -> ValidationResult<Self> {
        record!(input => Self {
            id: "id" => integer(),
            name: "name" => string(),
            original_name: "original_name" => string(),
            overview: "overview" => string(),
            first_air_date: "first_air_date" => string().optional(),
            last_air_date: "last_air_date" => string().optional(),
            status: "status" => string(),
            in_production: "in_production" => boolean(),
            number_of_seasons: "number_of_seasons" => integer(),
            number_of_episodes: "number_of_episodes" => integer(),
            episode_run_time: "episode_run_time" => integer().array(),
            genres: "genres" => decoder::<Vec<Genre>>(),
            homepage: "homepage" => string().optional(),
            poster_path: "poster_path" => string().optional(),
            vote_average: "vote_average" => number(),
            vote_count: "vote_count" => integer(),
            external_ids: "external_ids" => decoder::<Option<ExternalIds>>(),
            credits: "credits" => decoder::<Credits>(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub biography: String,
    pub birthday: Option<String>,
    pub deathday: Option<String>,
    pub place_of_birth: Option<String>,
    pub profile_path: Option<String>,
    pub imdb_id: Option<String>,
    pub known_for_department: Option<String>,
    pub popularity: f64,
    pub combined_credits: CombinedCredits,
}

impl Decode for Person {
    fn decode(input: &Value) -> ValidationResult<Self> {
        record!(input => Self {
            id: "id" => integer(),
            name: "name" => string(),
            biography: "biography" => string(),
            birthday: "birthday" => string().optional(),
            deathday: "deathday" => string().optional(),
            place_of_birth: "place_of_birth" => string().optional(),
            profile_path: "profile_path" => string().optional(),
            imdb_id: "imdb_id" => string().optional(),
            known_for_department: "known_for_department" => string().optional(),
            popularity: "popularity" => number(),
            combined_credits: "combined_credits" => decoder::<CombinedCredits>(),
        })
    }
}

// ============================================================================
// SEARCH PAGES
// ============================================================================

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchPage<T> {
    pub page: u64,
    pub total_pages: u64,
    pub total_results: u64,
    pub results: Vec<T>,
}

pub type MovieSearchResult = SearchPage<MovieCandidate>;
pub type ShowSearchResult = SearchPage<ShowCandidate>;
pub type PersonSearchResult = SearchPage<PersonCandidate>;

/// Decoder of a search page whose results are decoded by `result`.
pub fn search_page<V: Validate>(result: V) -> impl Validate<Output = SearchPage<V::Output>> {
    from_fn(move |input| {
        record!(input => SearchPage {
            page: "page" => unsigned(),
            total_pages: "total_pages" => unsigned(),
            total_results: "total_results" => unsigned(),
            results: "results" => array(&result),
        })
    })
}

impl<T: Decode> Decode for SearchPage<T> {
    fn decode(input: &Value) -> ValidationResult<Self> {
        search_page(decoder::<T>()).validate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn movie_credit() -> Value {
        json!({"media_type": "movie", "id": 603, "title": "The Matrix", "character": "Neo"})
    }

    #[test]
    fn poster_size_array_reports_bad_index() {
        let error = literal::<PosterSize>()
            .array()
            .validate(&json!(["w92", "BAD", "w185"]))
            .unwrap_err();
        let entries = error.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, "[1]");
    }

    #[test]
    fn image_urls_use_secure_base() {
        let images = ImageConfigurationData::decode(&json!({
            "base_url": "http://image.tmdb.org/t/p/",
            "secure_base_url": "https://image.tmdb.org/t/p/",
            "poster_sizes": ["w92", "w185", "original"],
            "profile_sizes": ["w45"],
            "still_sizes": [],
            "backdrop_sizes": ["w300"],
        }))
        .unwrap();
        assert_eq!(images.poster_sizes.len(), 3);
        assert_eq!(
            images.image_url(PosterSize::PREFERRED, "/abc.jpg"),
            "https://image.tmdb.org/t/p/w185/abc.jpg"
        );
    }

    #[test]
    fn known_for_dispatches_on_media_type() {
        let credit = KnownFor::decode(&movie_credit()).unwrap();
        assert_eq!(credit.title(), "The Matrix");

        let show = KnownFor::decode(&json!({"media_type": "tv", "id": 1, "name": "Dark"})).unwrap();
        assert!(matches!(show, KnownFor::Show(_)));

        let error = KnownFor::decode(&json!({"media_type": "book", "id": 1})).unwrap_err();
        assert_eq!(error.code, codes::UNRECOGNIZED_VARIANT);
        assert_eq!(error.path.to_string(), "media_type");
    }

    #[test]
    fn known_for_serializes_with_its_discriminant() {
        let credit = KnownFor::decode(&movie_credit()).unwrap();
        let wire = serde_json::to_value(&credit).unwrap();
        assert_eq!(wire["media_type"], json!("movie"));
        assert_eq!(KnownFor::decode(&wire), Ok(credit));
    }

    #[test]
    fn credits_serialize_their_own_media_type() {
        let KnownFor::Movie(movie) = KnownFor::decode(&movie_credit()).unwrap() else {
            panic!("expected a movie credit");
        };
        let wire = serde_json::to_value(&movie).unwrap();
        assert_eq!(wire["media_type"], json!("movie"));
        assert_eq!(MovieCredit::decode(&wire), Ok(movie));

        let show = ShowCredit::decode(&json!({"media_type": "tv", "id": 1, "name": "Dark"})).unwrap();
        let wire = serde_json::to_value(&show).unwrap();
        assert_eq!(wire["media_type"], json!("tv"));
        assert_eq!(ShowCredit::decode(&wire), Ok(show));
    }

    #[test]
    fn search_page_decodes_generic_results() {
        let page = json!({
            "page": 1,
            "total_pages": 1,
            "total_results": 1,
            "results": [{"id": 18, "name": "Drama"}],
        });
        let genres = SearchPage::<Genre>::decode(&page).unwrap();
        assert_eq!(genres.results, vec![Genre { id: 18, name: "Drama".to_owned() }]);

        let error = search_page(decoder::<MovieCandidate>())
            .validate(&page)
            .unwrap_err();
        assert!(error.names_field(codes::REQUIRED, "title"));
        assert!(error.entries().iter().all(|(at, _)| at.starts_with("results/[0]/")));
    }

    #[test]
    fn crew_filter_by_job() {
        let credits = Credits::decode(&json!({
            "cast": [],
            "crew": [
                {"id": 1, "name": "Lana", "job": "Director", "department": "Directing", "credit_id": "a"},
                {"id": 2, "name": "Bill", "job": "Director of Photography", "department": "Camera", "credit_id": "b"},
            ],
        }))
        .unwrap();
        let directors: Vec<&str> = credits.with_job("Director").map(|c| c.name.as_str()).collect();
        assert_eq!(directors, vec!["Lana"]);
    }
}
