//! Catalog data model definitions shared across Marquee crates.

pub mod catalog;
pub mod details;
pub mod error;
pub mod home;
pub mod image;
pub mod listing;
pub mod media_type;
#[cfg(feature = "serde")]
pub mod wire;

pub use catalog::{CatalogItem, ContentRow, ResultsPage};
pub use details::{CastMember, Genre, GenreList, TitleDetails, Video};
pub use error::ModelError;
pub use home::{HERO_ROW_LABEL, HomeRowSpec, RowSource};
pub use image::{IMAGE_BASE_URL, ImageSize, image_url, image_url_with_base};
pub use listing::{ListCategory, TimeWindow};
pub use media_type::{ItemKind, MediaKind, TrendingKind};
