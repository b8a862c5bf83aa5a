use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::ModelError;

/// Trending aggregation window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TimeWindow {
    Day,
    #[default]
    Week,
}

impl TimeWindow {
    pub const fn as_path(&self) -> &'static str {
        match self {
            TimeWindow::Day => "day",
            TimeWindow::Week => "week",
        }
    }
}

impl FromStr for TimeWindow {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(TimeWindow::Day),
            "week" => Ok(TimeWindow::Week),
            _ => Err(ModelError::UnknownTimeWindow(s.to_string())),
        }
    }
}

/// Curated lists exposed per media collection (`/{kind}/{category}`).
///
/// `NowPlaying` and `Upcoming` only exist for movies, `AiringToday` and
/// `OnTheAir` only for TV; the upstream API answers other pairings with a
/// not-found error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ListCategory {
    NowPlaying,
    Upcoming,
    TopRated,
    Popular,
    AiringToday,
    OnTheAir,
}

impl ListCategory {
    pub const ALL: [ListCategory; 6] = [
        Self::NowPlaying,
        Self::Upcoming,
        Self::TopRated,
        Self::Popular,
        Self::AiringToday,
        Self::OnTheAir,
    ];

    pub const fn as_path(&self) -> &'static str {
        match self {
            Self::NowPlaying => "now_playing",
            Self::Upcoming => "upcoming",
            Self::TopRated => "top_rated",
            Self::Popular => "popular",
            Self::AiringToday => "airing_today",
            Self::OnTheAir => "on_the_air",
        }
    }
}

impl Display for ListCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

impl FromStr for ListCategory {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|category| category.as_path() == normalized)
            .ok_or_else(|| ModelError::UnknownCategory(s.to_string()))
    }
}
