use crate::media_type::ItemKind;

/// A single title as returned by list, trending and search endpoints.
///
/// Upstream records are normalized into this shape by [`crate::wire`]:
/// movies carry `title` and `release_date`, TV carries `name` and
/// `first_air_date`, people carry a `profile_path` in place of a poster.
/// The serde representation is this struct's own fields, so serialized
/// items read back unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogItem {
    pub id: u64,
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub year: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub poster_path: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub backdrop_path: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub media_kind: Option<ItemKind>,
}

impl CatalogItem {
    /// Tag the item with the collection it was requested from, unless the
    /// upstream already did.
    pub fn with_kind(mut self, kind: ItemKind) -> Self {
        self.media_kind.get_or_insert(kind);
        self
    }

    /// Wide artwork for banners, falling back to the poster.
    pub fn banner_path(&self) -> Option<&str> {
        self.backdrop_path
            .as_deref()
            .or(self.poster_path.as_deref())
    }
}

/// A labelled shelf of titles, in upstream order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentRow {
    pub title: String,
    pub items: Vec<CatalogItem>,
}

impl ContentRow {
    pub fn new(title: impl Into<String>, items: Vec<CatalogItem>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One page of a paged collection.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultsPage {
    pub page: u32,
    pub results: Vec<CatalogItem>,
    pub total_pages: u32,
    pub total_results: u32,
}

impl Default for ResultsPage {
    fn default() -> Self {
        Self::empty()
    }
}

impl ResultsPage {
    /// The empty result set returned without touching the network.
    pub fn empty() -> Self {
        Self {
            page: 1,
            results: Vec::new(),
            total_pages: 0,
            total_results: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn with_kind(mut self, kind: ItemKind) -> Self {
        self.results = self
            .results
            .into_iter()
            .map(|item| item.with_kind(kind))
            .collect();
        self
    }
}
