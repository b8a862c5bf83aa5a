use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::ModelError;

/// Media collections addressable by the catalog API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MediaKind {
    #[default]
    Movie,
    Tv,
}

impl MediaKind {
    /// Path segment used by the upstream API.
    pub const fn as_path(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
        }
    }
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Movie => write!(f, "Movie"),
            MediaKind::Tv => write!(f, "TV"),
        }
    }
}

impl FromStr for MediaKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "movie" | "movies" => Ok(MediaKind::Movie),
            "tv" | "series" | "show" | "shows" => Ok(MediaKind::Tv),
            _ => Err(ModelError::UnknownMediaKind(s.to_string())),
        }
    }
}

/// Scope of a trending query; `All` mixes movies, TV and people.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TrendingKind {
    #[default]
    All,
    Movie,
    Tv,
}

impl TrendingKind {
    pub const fn as_path(&self) -> &'static str {
        match self {
            TrendingKind::All => "all",
            TrendingKind::Movie => "movie",
            TrendingKind::Tv => "tv",
        }
    }
}

impl From<MediaKind> for TrendingKind {
    fn from(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Movie => TrendingKind::Movie,
            MediaKind::Tv => TrendingKind::Tv,
        }
    }
}

impl FromStr for TrendingKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(TrendingKind::All);
        }
        s.parse::<MediaKind>().map(TrendingKind::from)
    }
}

/// Kind tag carried on individual results (multi-search and trending/all).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ItemKind {
    Movie,
    Tv,
    Person,
}

impl ItemKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "movie" => Some(ItemKind::Movie),
            "tv" => Some(ItemKind::Tv),
            "person" => Some(ItemKind::Person),
            _ => None,
        }
    }
}

impl From<MediaKind> for ItemKind {
    fn from(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Movie => ItemKind::Movie,
            MediaKind::Tv => ItemKind::Tv,
        }
    }
}
