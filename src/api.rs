//! Client for the movie recommendation web service.
//!
//! Every endpoint answers with a JSON envelope carrying a `success` flag; the
//! server reports its own failures through `success: false` plus an `error`
//! string, and may do so under a non-2xx status. The envelope is therefore
//! decoded regardless of status code and `success` alone decides the outcome.

use serde::Deserialize;
use thiserror::Error;

/// Message shown for transport and decode failures, where no server-supplied
/// error text exists.
pub const GENERIC_FETCH_ERROR: &str = "An error occurred while fetching recommendations.";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("server error: {0}")]
    Backend(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Malformed(&'static str),
}

impl ApiError {
    /// Text for the inline error container: the server's own words for a
    /// reported failure, a fixed generic message for everything else.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Backend(text) => text.clone(),
            ApiError::Http(_) | ApiError::Malformed(_) => GENERIC_FETCH_ERROR.to_string(),
        }
    }
}

/// A movie as it appears in search results and similar-movie lists. The
/// backend sends more fields than these; extras are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
}

/// Full details for one movie.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieDetails {
    pub title: String,
    #[serde(default)]
    pub poster_path: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub runtime: u32,
    #[serde(default)]
    pub genres: Vec<String>,
}

/// One cast entry. `profile_path` is null for people without a photo.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CastMember {
    pub name: String,
    #[serde(default)]
    pub character: String,
    #[serde(default)]
    pub profile_path: Option<String>,
}

/// A content-based recommendation, scored against a seed movie title.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MovieRecommendation {
    pub title: String,
    #[serde(default)]
    pub poster_path: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub similarity_score: f64,
    #[serde(default)]
    pub vote_average: f64,
}

/// A collaborative recommendation, scored for a user id.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserRecommendation {
    pub title: String,
    #[serde(default)]
    pub poster_path: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub predicted_rating: f64,
    #[serde(default)]
    pub vote_average: f64,
}

/// Everything the detail modal needs, fetched in one call.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetailsBundle {
    pub details: MovieDetails,
    pub cast: Vec<CastMember>,
    pub similar: Vec<MovieSummary>,
}

#[derive(Debug, Deserialize)]
struct DetailsEnvelope {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    details: Option<MovieDetails>,
    #[serde(default)]
    credits: Option<Credits>,
    #[serde(default)]
    similar: Vec<MovieSummary>,
}

#[derive(Debug, Default, Deserialize)]
struct Credits {
    #[serde(default)]
    cast: Vec<CastMember>,
}

#[derive(Debug, Deserialize)]
struct RecommendationsEnvelope<T> {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    recommendations: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    movies: Vec<MovieSummary>,
}

fn details_from_envelope(envelope: DetailsEnvelope) -> Result<MovieDetailsBundle, ApiError> {
    if !envelope.success {
        return Err(ApiError::Backend(envelope.error.unwrap_or_default()));
    }
    let details = envelope
        .details
        .ok_or(ApiError::Malformed("success response without details"))?;
    Ok(MovieDetailsBundle {
        details,
        cast: envelope.credits.unwrap_or_default().cast,
        similar: envelope.similar,
    })
}

fn recs_from_envelope<T>(envelope: RecommendationsEnvelope<T>) -> Result<Vec<T>, ApiError> {
    if envelope.success {
        Ok(envelope.recommendations)
    } else {
        Err(ApiError::Backend(envelope.error.unwrap_or_default()))
    }
}

fn movies_from_envelope(envelope: SearchEnvelope) -> Result<Vec<MovieSummary>, ApiError> {
    if envelope.success {
        Ok(envelope.movies)
    } else {
        Err(ApiError::Backend(envelope.error.unwrap_or_default()))
    }
}

/// URL-encode a single form field, e.g. `movie_title=Blade+Runner`.
pub fn encode_form(key: &str, value: &str) -> String {
    serde_urlencoded::to_string([(key, value)]).unwrap_or_default()
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// A client against the given server base URL. No request timeout is set;
    /// calls wait as long as the server takes.
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET /movie_details/{id}`: details, cast credits and similar movies.
    pub async fn movie_details(&self, movie_id: u64) -> Result<MovieDetailsBundle, ApiError> {
        let url = format!("{}/movie_details/{}", self.base_url, movie_id);
        tracing::debug!(movie_id, "fetching movie details");

        let response = self.http.get(&url).send().await?;
        let envelope: DetailsEnvelope = response.json().await?;
        details_from_envelope(envelope)
    }

    /// `POST /recommend_by_movie`: content-based recommendations for a title.
    /// The title is sent exactly as typed; the server validates it.
    pub async fn recommend_by_movie(
        &self,
        movie_title: &str,
    ) -> Result<Vec<MovieRecommendation>, ApiError> {
        let url = format!("{}/recommend_by_movie", self.base_url);
        tracing::debug!(movie_title, "fetching movie recommendations");

        let envelope: RecommendationsEnvelope<MovieRecommendation> = self
            .post_form(&url, encode_form("movie_title", movie_title))
            .await?;
        recs_from_envelope(envelope)
    }

    /// `POST /recommend_by_user`: collaborative recommendations for a user id.
    pub async fn recommend_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<UserRecommendation>, ApiError> {
        let url = format!("{}/recommend_by_user", self.base_url);
        tracing::debug!(user_id, "fetching user recommendations");

        let envelope: RecommendationsEnvelope<UserRecommendation> = self
            .post_form(&url, encode_form("user_id", user_id))
            .await?;
        recs_from_envelope(envelope)
    }

    /// `POST /search_movies`: title search for the browse view.
    pub async fn search_movies(&self, query: &str) -> Result<Vec<MovieSummary>, ApiError> {
        let url = format!("{}/search_movies", self.base_url);
        tracing::debug!(query, "searching movies");

        let envelope: SearchEnvelope = self.post_form(&url, encode_form("query", query)).await?;
        movies_from_envelope(envelope)
    }

    async fn post_form<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        body: String,
    ) -> Result<T, ApiError> {
        let response = self
            .http
            .post(url)
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(body)
            .send()
            .await?;
        Ok(response.json().await?)
    }
}
