use std::path::PathBuf;

use marquee_model::HomeRowSpec;
use serde::{Deserialize, Serialize};

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub tmdb: FileTmdbConfig,
    pub home: Option<FileHomeConfig>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileTmdbConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_base_url: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileHomeConfig {
    #[serde(default)]
    pub rows: Vec<HomeRowSpec>,
}

/// Environment-derived configuration values.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub api_key: Option<String>,
    pub language: Option<String>,
    pub base_url: Option<String>,
    pub image_base_url: Option<String>,
    pub config_path: Option<PathBuf>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name).filter(|value| !value.trim().is_empty())
        };

        Self {
            api_key: var("TMDB_API_KEY"),
            language: var("TMDB_LANG"),
            base_url: var("TMDB_BASE_URL"),
            image_base_url: var("TMDB_IMAGE_BASE_URL"),
            config_path: var("MARQUEE_CONFIG").map(PathBuf::from),
        }
    }
}
