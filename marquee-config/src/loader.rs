use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::debug;
use url::Url;

use super::{
    models::{
        ApiKey, Config, ConfigMetadata, DEFAULT_API_BASE_URL,
        DEFAULT_LANGUAGE, HomeConfig, TmdbConfig,
    },
    sources::{EnvConfig, FileConfig},
    validation::{self, ConfigGuardRailError, ConfigWarning, ConfigWarnings},
};
use marquee_model::{HomeRowSpec, IMAGE_BASE_URL};

const DEFAULT_CONFIG_LOCATIONS: [&str; 2] =
    ["marquee.toml", "config/marquee.toml"];

/// Builds a [`Config`] from `.env`, the process environment, an optional
/// `marquee.toml` and built-in defaults, in falling order of precedence.
#[derive(Debug, Default, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_file: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read this TOML file instead of searching the default locations. The
    /// file must exist.
    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Load this `.env` file instead of searching for one. The file must
    /// exist.
    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.env_file = Some(path.into());
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = self.load_env_file()?;
        self.load_from_env(EnvConfig::gather(), env_file_loaded)
    }

    fn load_env_file(&self) -> Result<bool, ConfigLoadError> {
        match &self.env_file {
            Some(path) if !path.exists() => {
                Err(ConfigLoadError::MissingEnvFile { path: path.clone() })
            }
            Some(path) => {
                dotenvy::from_path(path)?;
                debug!(path = %path.display(), "loaded env file");
                Ok(true)
            }
            None => match dotenvy::dotenv() {
                Ok(path) => {
                    debug!(path = %path.display(), "loaded env file");
                    Ok(true)
                }
                Err(dotenvy::Error::Io(_)) => Ok(false),
                Err(err) => Err(err.into()),
            },
        }
    }

    /// Compose from already-gathered environment values.
    pub fn load_from_env(
        &self,
        env: EnvConfig,
        env_file_loaded: bool,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file_config, config_path) = self.load_file_config(&env)?;

        let mut warnings = ConfigWarnings::default();
        if config_path.is_none() {
            warnings.add(
                ConfigWarning::new(
                    "No marquee.toml detected; using environment variables and defaults",
                )
                .with_hint("Create marquee.toml to customise the home rows"),
            );
        }

        let config = compose_config(
            file_config.unwrap_or_default(),
            env,
            ConfigMetadata {
                config_path,
                env_file_loaded,
            },
        )?;

        warnings.extend(validation::apply_guard_rails(&config)?);

        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        // Explicit and env-provided paths must exist; defaults are optional.
        let explicit = self
            .config_path
            .clone()
            .or_else(|| env.config_path.clone());

        let path = match explicit {
            Some(path) if !path.exists() => {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            Some(path) => path,
            None => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .map(PathBuf::from)
                .find(|candidate| candidate.exists())
            {
                Some(path) => path,
                None => return Ok((None, None)),
            },
        };

        debug!(path = %path.display(), "reading configuration file");
        let file_config = read_file_config(&path)?;
        Ok((Some(file_config), Some(path)))
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    toml::from_str(&contents).map_err(|source| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn compose_config(
    file: FileConfig,
    env: EnvConfig,
    metadata: ConfigMetadata,
) -> Result<Config, ConfigLoadError> {
    let FileConfig {
        tmdb: file_tmdb,
        home: file_home,
    } = file;

    let api_key = env.api_key.or(file_tmdb.api_key).and_then(ApiKey::new);

    let language = env
        .language
        .or(file_tmdb.language)
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

    let raw_base = env
        .base_url
        .or(file_tmdb.base_url)
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    let base_url = Url::parse(raw_base.trim()).map_err(|source| {
        ConfigLoadError::InvalidBaseUrl {
            url: raw_base.clone(),
            source,
        }
    })?;

    let image_base_url = env
        .image_base_url
        .or(file_tmdb.image_base_url)
        .unwrap_or_else(|| IMAGE_BASE_URL.to_string());
    Url::parse(image_base_url.trim()).map_err(|source| {
        ConfigLoadError::InvalidBaseUrl {
            url: image_base_url.clone(),
            source,
        }
    })?;

    let home = HomeConfig {
        rows: file_home
            .map(|home| home.rows)
            .unwrap_or_else(HomeRowSpec::default_layout),
    };

    Ok(Config {
        tmdb: TmdbConfig {
            api_key,
            language,
            base_url,
            image_base_url: image_base_url.trim().to_string(),
        },
        home,
        metadata,
    })
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("env file missing: {path}")]
    MissingEnvFile { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid base URL '{url}'")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}
