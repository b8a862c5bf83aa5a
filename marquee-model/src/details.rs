use crate::catalog::{CatalogItem, ResultsPage};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

/// Body of the genre list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenreList {
    #[cfg_attr(feature = "serde", serde(default))]
    pub genres: Vec<Genre>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub character: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub profile_path: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Video {
    pub key: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub site: String,
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub kind: String,
}

impl Video {
    pub fn is_trailer(&self) -> bool {
        self.kind.eq_ignore_ascii_case("trailer")
    }
}

/// Primary record plus the related collections fetched alongside it.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TitleDetails {
    pub item: CatalogItem,
    pub genres: Vec<Genre>,
    /// Minutes; the first episode runtime for TV.
    pub runtime: Option<u32>,
    pub tagline: Option<String>,
    pub vote_average: Option<f32>,
    pub videos: Vec<Video>,
    pub cast: Vec<CastMember>,
    pub similar: ResultsPage,
    pub recommendations: ResultsPage,
}

impl TitleDetails {
    /// First trailer hosted upstream, if any.
    pub fn trailer(&self) -> Option<&Video> {
        self.videos.iter().find(|video| video.is_trailer())
    }
}
