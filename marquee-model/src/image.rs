use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::ModelError;

/// Image CDN base, including the trailing slash; size tokens are appended
/// directly.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/";

/// Image size tokens understood by the image CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ImageSize {
    W45,
    W92,
    W154,
    W185,
    W300,
    W342,
    #[default]
    W500,
    W780,
    W1280,
    H632,
    Original,
}

impl ImageSize {
    pub const ALL: [ImageSize; 11] = [
        Self::W45,
        Self::W92,
        Self::W154,
        Self::W185,
        Self::W300,
        Self::W342,
        Self::W500,
        Self::W780,
        Self::W1280,
        Self::H632,
        Self::Original,
    ];

    /// Default size for hero backdrops.
    pub const fn backdrop() -> Self {
        Self::W1280
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::W45 => "w45",
            Self::W92 => "w92",
            Self::W154 => "w154",
            Self::W185 => "w185",
            Self::W300 => "w300",
            Self::W342 => "w342",
            Self::W500 => "w500",
            Self::W780 => "w780",
            Self::W1280 => "w1280",
            Self::H632 => "h632",
            Self::Original => "original",
        }
    }
}

impl Display for ImageSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageSize {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == token)
            .ok_or_else(|| ModelError::UnknownImageSize(s.to_string()))
    }
}

/// Compose a displayable image URL from an API path fragment.
///
/// Returns `None` when the fragment is absent or empty.
pub fn image_url(path: Option<&str>, size: ImageSize) -> Option<String> {
    image_url_with_base(IMAGE_BASE_URL, path, size)
}

/// Same as [`image_url`] against a caller-provided CDN base.
pub fn image_url_with_base(
    base: &str,
    path: Option<&str>,
    size: ImageSize,
) -> Option<String> {
    let path = path.filter(|p| !p.is_empty())?;
    Some(format!("{base}{}{path}", size.as_str()))
}
