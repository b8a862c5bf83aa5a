use std::fmt;
use std::path::PathBuf;

use marquee_model::{HomeRowSpec, IMAGE_BASE_URL};
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Upstream API key. Never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key, treating blank input as no key at all.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Settings for talking to the catalog API.
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    pub api_key: Option<ApiKey>,
    pub language: String,
    pub base_url: Url,
    /// CDN prefix ending in `/`; size tokens are appended directly.
    pub image_base_url: String,
}

impl TmdbConfig {
    pub fn new(api_key: Option<ApiKey>) -> Self {
        Self {
            api_key,
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            language: DEFAULT_LANGUAGE.to_string(),
            base_url: Url::parse(DEFAULT_API_BASE_URL)
                .expect("default API base URL is valid"),
            image_base_url: IMAGE_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeConfig {
    pub rows: Vec<HomeRowSpec>,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            rows: HomeRowSpec::default_layout(),
        }
    }
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}

/// Fully composed configuration; created once at startup and read-only
/// afterwards.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub tmdb: TmdbConfig,
    pub home: HomeConfig,
    pub metadata: ConfigMetadata,
}
