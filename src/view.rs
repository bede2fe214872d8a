use chrono::Datelike;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::api::{CastMember, MovieDetailsBundle, MovieRecommendation, MovieSummary, UserRecommendation};

/// Fallback cast photo when the backend has none for a person.
pub const PLACEHOLDER_IMAGE: &str = "/static/placeholder.jpg";

/// At most this many similar-movie cards are shown in the detail modal.
pub const SIMILAR_LIMIT: usize = 6;

/// One fully formatted movie detail modal.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub title: String,
    pub poster_path: String,
    pub overview: String,
    pub release_date: String,
    pub rating: String,
    pub runtime: String,
    pub genres: String,
    pub cast: Vec<CastCard>,
    pub similar: Vec<SimilarCard>,
}

/// One entry in the cast gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct CastCard {
    pub photo: String,
    pub name: String,
    pub character: String,
}

/// One similar-movie card inside the detail modal.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarCard {
    pub movie_id: u64,
    pub title: String,
    pub poster_path: String,
    pub rating: String,
}

/// One recommendation result card, with its score line prebuilt.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationCard {
    pub title: String,
    pub poster_path: String,
    pub overview: String,
    pub score: String,
}

impl DetailView {
    pub fn new(bundle: MovieDetailsBundle) -> Self {
        let d = bundle.details;
        Self {
            title: d.title,
            poster_path: d.poster_path,
            overview: d.overview,
            release_date: d.release_date,
            rating: rating_line(d.vote_average, d.vote_count),
            runtime: runtime_line(d.runtime),
            genres: genre_line(&d.genres),
            cast: bundle.cast.into_iter().map(CastCard::new).collect(),
            similar: bundle
                .similar
                .into_iter()
                .take(SIMILAR_LIMIT)
                .map(SimilarCard::new)
                .collect(),
        }
    }
}

impl CastCard {
    pub fn new(person: CastMember) -> Self {
        Self {
            photo: cast_photo(person.profile_path.as_deref()),
            name: person.name,
            character: person.character,
        }
    }
}

impl SimilarCard {
    pub fn new(movie: MovieSummary) -> Self {
        Self {
            movie_id: movie.id,
            title: movie.title,
            poster_path: movie.poster_path.unwrap_or_default(),
            rating: card_rating(movie.vote_average),
        }
    }
}

impl RecommendationCard {
    pub fn from_movie(rec: MovieRecommendation) -> Self {
        Self {
            score: similarity_line(rec.similarity_score, rec.vote_average),
            title: rec.title,
            poster_path: rec.poster_path,
            overview: rec.overview,
        }
    }

    pub fn from_user(rec: UserRecommendation) -> Self {
        Self {
            score: predicted_line(rec.predicted_rating, rec.vote_average),
            title: rec.title,
            poster_path: rec.poster_path,
            overview: rec.overview,
        }
    }
}

/// Rating line for the detail modal, e.g. `⭐ 8.2/10 (12345 votes)`.
pub fn rating_line(vote_average: f64, vote_count: u64) -> String {
    format!("⭐ {}/10 ({} votes)", vote_average, vote_count)
}

/// Runtime line for the detail modal, e.g. `139 minutes`.
pub fn runtime_line(runtime: u32) -> String {
    format!("{} minutes", runtime)
}

/// Comma-joined genre names.
pub fn genre_line(genres: &[String]) -> String {
    genres.join(", ")
}

/// Short rating tag for movie cards, e.g. `⭐ 8.2`.
pub fn card_rating(vote_average: f64) -> String {
    format!("⭐ {}", vote_average)
}

/// Score line for movie-based recommendation cards.
pub fn similarity_line(similarity_score: f64, vote_average: f64) -> String {
    format!(
        "Similarity: {}% | Rating: ⭐ {}/10",
        similarity_score, vote_average
    )
}

/// Score line for user-based recommendation cards.
pub fn predicted_line(predicted_rating: f64, vote_average: f64) -> String {
    format!(
        "Predicted Rating: {} | Current Rating: ⭐ {}/10",
        predicted_rating, vote_average
    )
}

/// Cast photo path, falling back to the placeholder when missing or empty.
pub fn cast_photo(profile_path: Option<&str>) -> String {
    match profile_path {
        Some(path) if !path.is_empty() => path.to_string(),
        _ => PLACEHOLDER_IMAGE.to_string(),
    }
}

/// Release year for movie card lines, if the date parses.
pub fn release_year(release_date: &str) -> Option<i32> {
    chrono::NaiveDate::parse_from_str(release_date, "%Y-%m-%d")
        .ok()
        .map(|d| d.year())
}

/// Truncate a string to `max_width` display columns, adding "…" if truncated.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            break;
        }
        width += w;
        result.push(c);
    }
    result.push('…');
    result
}
