use std::fmt;

use marquee_config::{ApiKey, TmdbConfig};
use marquee_model::wire::{TmdbPage, TmdbTitleDetails};
use marquee_model::{
    Genre, GenreList, ImageSize, ItemKind, ListCategory, MediaKind,
    ResultsPage, TimeWindow, TitleDetails, TrendingKind, image_url_with_base,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, error};
use url::Url;

use crate::error::{ContentError, GENERIC_FAILURE_MESSAGE};
use crate::query::{
    BaseQuery, DETAILS_APPEND, DetailsQuery, NoQuery, PageQuery, SearchQuery,
};

/// Thin client over the catalog REST API.
///
/// Every call is one GET with `api_key` and `language` merged into the
/// query string. There is no caching and no retry; failures come back as a
/// [`ContentError`] carrying at most a human-readable message.
#[derive(Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    config: TmdbConfig,
}

impl fmt::Debug for ContentClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentClient")
            .field("base_url", &self.config.base_url.as_str())
            .field("language", &self.config.language)
            .field("api_key", &self.config.api_key)
            .finish()
    }
}

impl ContentClient {
    pub fn new(config: TmdbConfig) -> Self {
        Self::with_http(config, reqwest::Client::new())
    }

    pub fn with_http(config: TmdbConfig, http: reqwest::Client) -> Self {
        Self { http, config }
    }

    pub(crate) fn api_key(&self) -> Result<&ApiKey, ContentError> {
        self.config.api_key.as_ref().ok_or_else(|| {
            error!("TMDB API key not configured; refusing to send request");
            ContentError::MissingApiKey
        })
    }

    fn resource_url(&self, resource_path: &str) -> Result<Url, ContentError> {
        let raw = format!(
            "{}/{}",
            self.config.base_url.as_str().trim_end_matches('/'),
            resource_path.trim_start_matches('/')
        );
        Url::parse(&raw)
            .map_err(|source| ContentError::InvalidUrl { url: raw, source })
    }

    /// Fetch any collection as untyped JSON.
    pub async fn fetch<Q>(
        &self,
        resource_path: &str,
        query: &Q,
    ) -> Result<serde_json::Value, ContentError>
    where
        Q: Serialize + ?Sized,
    {
        self.fetch_json(resource_path, query).await
    }

    pub async fn fetch_json<Q, T>(
        &self,
        resource_path: &str,
        query: &Q,
    ) -> Result<T, ContentError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let api_key = self.api_key()?;
        let url = self.resource_url(resource_path)?;

        debug!(path = resource_path, "catalog request");

        let response = self
            .http
            .get(url)
            .query(&BaseQuery {
                api_key: api_key.expose(),
                language: &self.config.language,
            })
            .query(query)
            .send()
            .await
            .map_err(|source| {
                error!(
                    path = resource_path,
                    error = %source,
                    "catalog request failed"
                );
                ContentError::Network { source }
            })?;

        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await.map_err(|source| {
                error!(
                    path = resource_path,
                    error = %source,
                    "catalog response body could not be read"
                );
                ContentError::Network { source }
            })?;
            return serde_json::from_slice(&body).map_err(|source| {
                error!(
                    path = resource_path,
                    error = %source,
                    "catalog response did not match expected shape"
                );
                ContentError::Decode {
                    path: resource_path.to_string(),
                    source,
                }
            });
        }

        #[derive(Debug, Deserialize)]
        struct ErrorBody {
            #[serde(default)]
            status_message: Option<String>,
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.status_message)
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());

        error!(
            path = resource_path,
            status = status.as_u16(),
            message = %message,
            "catalog request rejected"
        );

        Err(ContentError::Upstream { message })
    }

    async fn fetch_page(
        &self,
        resource_path: &str,
        page: u32,
    ) -> Result<ResultsPage, ContentError> {
        self.fetch_json::<_, TmdbPage>(resource_path, &PageQuery::new(page))
            .await
            .map(ResultsPage::from)
    }

    /// Trending titles for a kind and window.
    pub async fn trending(
        &self,
        kind: TrendingKind,
        window: TimeWindow,
        page: u32,
    ) -> Result<ResultsPage, ContentError> {
        let path =
            format!("/trending/{}/{}", kind.as_path(), window.as_path());
        let results = self.fetch_page(&path, page).await?;

        Ok(match kind {
            TrendingKind::All => results,
            TrendingKind::Movie => results.with_kind(ItemKind::Movie),
            TrendingKind::Tv => results.with_kind(ItemKind::Tv),
        })
    }

    pub async fn popular(
        &self,
        kind: MediaKind,
        page: u32,
    ) -> Result<ResultsPage, ContentError> {
        let path = format!("/{}/popular", kind.as_path());
        let results = self.fetch_page(&path, page).await?;
        Ok(results.with_kind(kind.into()))
    }

    /// Primary record plus videos, credits, similar titles and
    /// recommendations in one round trip.
    pub async fn details_with_related(
        &self,
        kind: MediaKind,
        id: u64,
    ) -> Result<TitleDetails, ContentError> {
        let path = format!("/{}/{}", kind.as_path(), id);
        let mut details: TitleDetails = self
            .fetch_json::<_, TmdbTitleDetails>(
                &path,
                &DetailsQuery {
                    append_to_response: DETAILS_APPEND,
                },
            )
            .await?
            .into();
        details.item.media_kind.get_or_insert(kind.into());
        details.similar = details.similar.with_kind(kind.into());
        details.recommendations =
            details.recommendations.with_kind(kind.into());
        Ok(details)
    }

    pub async fn list_by_category(
        &self,
        kind: MediaKind,
        category: ListCategory,
        page: u32,
    ) -> Result<ResultsPage, ContentError> {
        let path = format!("/{}/{}", kind.as_path(), category.as_path());
        let results = self.fetch_page(&path, page).await?;
        Ok(results.with_kind(kind.into()))
    }

    pub async fn genres(
        &self,
        kind: MediaKind,
    ) -> Result<Vec<Genre>, ContentError> {
        let path = format!("/genre/{}/list", kind.as_path());
        let list: GenreList = self.fetch_json(&path, &NoQuery {}).await?;
        Ok(list.genres)
    }

    /// Search movies, TV and people at once.
    ///
    /// A blank query resolves to an empty page without any request.
    pub async fn search_multi(
        &self,
        query: &str,
        page: u32,
    ) -> Result<ResultsPage, ContentError> {
        if query.trim().is_empty() {
            debug!("blank search query; skipping request");
            return Ok(ResultsPage::empty());
        }

        self.fetch_json::<_, TmdbPage>(
            "/search/multi",
            &SearchQuery {
                query,
                page: page.max(1),
            },
        )
        .await
        .map(ResultsPage::from)
    }

    /// Image URL against the configured CDN base.
    pub fn image_url(
        &self,
        path: Option<&str>,
        size: ImageSize,
    ) -> Option<String> {
        image_url_with_base(&self.config.image_base_url, path, size)
    }
}
