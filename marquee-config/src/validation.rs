use std::collections::HashSet;

use thiserror::Error;

use super::models::Config;

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("TMDB_LANG must not be empty")]
    EmptyLanguage,
    #[error("home row {index} has a blank label")]
    BlankRowLabel { index: usize },
    #[error("image base URL `{url}` must end with '/'")]
    ImageBaseWithoutSlash { url: String },
}

/// A non-fatal configuration problem, optionally with a suggested fix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

impl ConfigWarning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Warnings collected while loading, in the order they were found.
#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings(Vec<ConfigWarning>);

impl ConfigWarnings {
    pub fn add(&mut self, warning: ConfigWarning) {
        self.0.push(warning);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Extend<ConfigWarning> for ConfigWarnings {
    fn extend<I: IntoIterator<Item = ConfigWarning>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for ConfigWarnings {
    type Item = ConfigWarning;
    type IntoIter = std::vec::IntoIter<ConfigWarning>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if config.tmdb.language.trim().is_empty() {
        return Err(ConfigGuardRailError::EmptyLanguage);
    }

    if !config.tmdb.image_base_url.ends_with('/') {
        return Err(ConfigGuardRailError::ImageBaseWithoutSlash {
            url: config.tmdb.image_base_url.clone(),
        });
    }

    if config.tmdb.api_key.is_none() {
        warnings.add(
            ConfigWarning::new(
                "TMDB API key not configured; every catalog request will fail",
            )
            .with_hint("Set TMDB_API_KEY or add `api_key` to the [tmdb] section"),
        );
    }

    if config.home.rows.is_empty() {
        warnings.add(ConfigWarning::new(
            "home layout has no rows; the dashboard will be empty",
        ));
    }

    let mut seen = HashSet::new();
    for (index, row) in config.home.rows.iter().enumerate() {
        if row.label.trim().is_empty() {
            return Err(ConfigGuardRailError::BlankRowLabel { index });
        }
        if !seen.insert(row.label.as_str()) {
            warnings.add(ConfigWarning::new(format!(
                "home row label `{}` appears more than once",
                row.label
            )));
        }
    }

    Ok(warnings)
}
