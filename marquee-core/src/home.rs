use std::sync::Arc;

use async_trait::async_trait;
use marquee_model::{ContentRow, HomeRowSpec, ResultsPage, RowSource};
use tracing::debug;

use crate::client::ContentClient;
use crate::error::ContentError;
use crate::source::CatalogSource;

impl ContentClient {
    /// Fetch page one of every row in `layout`, in layout order.
    ///
    /// Rows are requested one after another so a single load never has more
    /// than one request in flight. The first failing row fails the whole
    /// bundle and later rows are not requested.
    pub async fn home_rows(
        &self,
        layout: &[HomeRowSpec],
    ) -> Result<Vec<ContentRow>, ContentError> {
        self.api_key()?;

        let mut rows = Vec::with_capacity(layout.len());
        for spec in layout {
            let page = self.row_page(spec.source).await?;
            debug!(
                row = %spec.label,
                items = page.results.len(),
                "home row fetched"
            );
            rows.push(ContentRow::new(spec.label.clone(), page.results));
        }

        Ok(rows)
    }

    async fn row_page(
        &self,
        source: RowSource,
    ) -> Result<ResultsPage, ContentError> {
        match source {
            RowSource::Trending { kind, window } => {
                self.trending(kind, window, 1).await
            }
            RowSource::Popular { kind } => self.popular(kind, 1).await,
            RowSource::Category { kind, category } => {
                self.list_by_category(kind, category, 1).await
            }
        }
    }
}

/// The home bundle: a client paired with the row layout it should load.
#[derive(Debug, Clone)]
pub struct HomeFeed {
    client: Arc<ContentClient>,
    layout: Vec<HomeRowSpec>,
}

impl HomeFeed {
    pub fn new(client: Arc<ContentClient>, layout: Vec<HomeRowSpec>) -> Self {
        Self { client, layout }
    }

    pub fn with_default_layout(client: Arc<ContentClient>) -> Self {
        Self::new(client, HomeRowSpec::default_layout())
    }
}

#[async_trait]
impl CatalogSource for HomeFeed {
    async fn home_rows(&self) -> Result<Vec<ContentRow>, ContentError> {
        self.client.home_rows(&self.layout).await
    }
}
