use async_trait::async_trait;
use marquee_model::ContentRow;

use crate::error::ContentError;

/// Anything that can produce the ordered rows of the home screen.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every row of the home bundle. Either all rows arrive or the
    /// whole call fails.
    async fn home_rows(&self) -> Result<Vec<ContentRow>, ContentError>;
}
