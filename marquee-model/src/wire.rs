//! Upstream response shapes.
//!
//! These only deserialize; convert them into the public model with `From`.
//! Keeping them apart from [`CatalogItem`] and friends lets the public types
//! serialize and deserialize in their own shape.

use serde::Deserialize;

use crate::catalog::{CatalogItem, ResultsPage};
use crate::details::{CastMember, Genre, TitleDetails, Video};
use crate::media_type::ItemKind;

/// One entry of a list, trending or search response.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbResult {
    id: u64,
    title: Option<String>,
    name: Option<String>,
    release_date: Option<String>,
    first_air_date: Option<String>,
    poster_path: Option<String>,
    profile_path: Option<String>,
    backdrop_path: Option<String>,
    overview: Option<String>,
    media_type: Option<String>,
}

impl From<TmdbResult> for CatalogItem {
    fn from(raw: TmdbResult) -> Self {
        let title = non_empty(raw.title)
            .or_else(|| non_empty(raw.name))
            .unwrap_or_default();
        let year = raw
            .release_date
            .as_deref()
            .and_then(parse_year)
            .or_else(|| raw.first_air_date.as_deref().and_then(parse_year));

        CatalogItem {
            id: raw.id,
            title,
            year,
            poster_path: non_empty(raw.poster_path)
                .or_else(|| non_empty(raw.profile_path)),
            backdrop_path: non_empty(raw.backdrop_path),
            description: non_empty(raw.overview),
            media_kind: raw.media_type.as_deref().and_then(ItemKind::from_tag),
        }
    }
}

/// A paged collection as the API sends it; paging fields may be missing.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbPage {
    #[serde(default = "first_page")]
    page: u32,
    #[serde(default)]
    results: Vec<TmdbResult>,
    #[serde(default)]
    total_pages: u32,
    #[serde(default)]
    total_results: u32,
}

fn first_page() -> u32 {
    1
}

impl From<TmdbPage> for ResultsPage {
    fn from(raw: TmdbPage) -> Self {
        ResultsPage {
            page: raw.page,
            results: raw.results.into_iter().map(CatalogItem::from).collect(),
            total_pages: raw.total_pages,
            total_results: raw.total_results,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Collection<T> {
    #[serde(default = "Vec::new")]
    results: Vec<T>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Credits {
    #[serde(default)]
    cast: Vec<CastMember>,
}

/// A details record with `append_to_response` collections inlined.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbTitleDetails {
    #[serde(flatten)]
    base: TmdbResult,
    #[serde(default)]
    genres: Vec<Genre>,
    runtime: Option<u32>,
    #[serde(default)]
    episode_run_time: Vec<u32>,
    tagline: Option<String>,
    vote_average: Option<f32>,
    #[serde(default)]
    videos: Collection<Video>,
    #[serde(default)]
    credits: Credits,
    similar: Option<TmdbPage>,
    recommendations: Option<TmdbPage>,
}

impl From<TmdbTitleDetails> for TitleDetails {
    fn from(raw: TmdbTitleDetails) -> Self {
        let runtime = raw
            .runtime
            .filter(|minutes| *minutes > 0)
            .or_else(|| raw.episode_run_time.first().copied());

        TitleDetails {
            item: raw.base.into(),
            genres: raw.genres,
            runtime,
            tagline: non_empty(raw.tagline),
            vote_average: raw.vote_average,
            videos: raw.videos.results,
            cast: raw.credits.cast,
            similar: raw.similar.map(ResultsPage::from).unwrap_or_default(),
            recommendations: raw
                .recommendations
                .map(ResultsPage::from)
                .unwrap_or_default(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Leading four-digit year of an ISO date; blank or malformed dates give
/// nothing.
fn parse_year(date: &str) -> Option<i32> {
    let year = date.trim().get(..4)?;
    if !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    year.parse().ok()
}
