use crate::listing::{ListCategory, TimeWindow};
use crate::media_type::{MediaKind, TrendingKind};

/// Label of the row the hero banner is drawn from.
pub const HERO_ROW_LABEL: &str = "Trending Now";

/// Where the items of one home row come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "source", rename_all = "snake_case")
)]
pub enum RowSource {
    Trending {
        #[cfg_attr(feature = "serde", serde(default))]
        kind: TrendingKind,
        #[cfg_attr(feature = "serde", serde(default))]
        window: TimeWindow,
    },
    Popular {
        #[cfg_attr(feature = "serde", serde(default))]
        kind: MediaKind,
    },
    Category {
        #[cfg_attr(feature = "serde", serde(default))]
        kind: MediaKind,
        category: ListCategory,
    },
}

/// One labelled row of the home bundle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HomeRowSpec {
    pub label: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub source: RowSource,
}

impl HomeRowSpec {
    pub fn new(label: impl Into<String>, source: RowSource) -> Self {
        Self {
            label: label.into(),
            source,
        }
    }

    /// The rows shown when no layout is configured, in display order.
    pub fn default_layout() -> Vec<HomeRowSpec> {
        vec![
            HomeRowSpec::new(
                HERO_ROW_LABEL,
                RowSource::Trending {
                    kind: TrendingKind::All,
                    window: TimeWindow::Week,
                },
            ),
            HomeRowSpec::new(
                "Popular Movies",
                RowSource::Popular {
                    kind: MediaKind::Movie,
                },
            ),
            HomeRowSpec::new(
                "Popular TV Shows",
                RowSource::Popular {
                    kind: MediaKind::Tv,
                },
            ),
            HomeRowSpec::new(
                "Top Rated",
                RowSource::Category {
                    kind: MediaKind::Movie,
                    category: ListCategory::TopRated,
                },
            ),
            HomeRowSpec::new(
                "Now Playing",
                RowSource::Category {
                    kind: MediaKind::Movie,
                    category: ListCategory::NowPlaying,
                },
            ),
            HomeRowSpec::new(
                "Upcoming",
                RowSource::Category {
                    kind: MediaKind::Movie,
                    category: ListCategory::Upcoming,
                },
            ),
        ]
    }
}
