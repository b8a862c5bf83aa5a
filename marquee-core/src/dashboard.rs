//! One-shot home screen loader.
//!
//! A mount starts in [`DashboardState::Loading`] and moves exactly once to
//! either [`DashboardState::Loaded`] or [`DashboardState::Error`]. The only
//! recovery from an error is a fresh mount.

use std::sync::Arc;

use marquee_model::{CatalogItem, ContentRow, HERO_ROW_LABEL};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::error::ContentError;
use crate::source::CatalogSource;

/// Shown for every load failure, whatever the cause.
pub const LOAD_FAILURE_MESSAGE: &str =
    "Failed to load content. Please check the API service.";

/// Pick the hero item: the first item of the "Trending Now" row, otherwise
/// the first item of the first row, otherwise nothing.
pub fn select_hero(rows: &[ContentRow]) -> Option<&CatalogItem> {
    rows.iter()
        .find(|row| row.title == HERO_ROW_LABEL)
        .and_then(|row| row.items.first())
        .or_else(|| rows.first().and_then(|row| row.items.first()))
}

/// Loaded home screen: ordered rows plus the hero derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    hero: Option<CatalogItem>,
    rows: Vec<ContentRow>,
}

impl Dashboard {
    pub fn new(rows: Vec<ContentRow>) -> Self {
        let hero = select_hero(&rows).cloned();
        Self { hero, rows }
    }

    pub fn hero(&self) -> Option<&CatalogItem> {
        self.hero.as_ref()
    }

    pub fn rows(&self) -> &[ContentRow] {
        &self.rows
    }

    /// Rows worth drawing; empty shelves are skipped by presentation.
    pub fn visible_rows(&self) -> impl Iterator<Item = &ContentRow> {
        self.rows.iter().filter(|row| !row.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum DashboardState {
    Loading,
    Error(String),
    Loaded(Dashboard),
}

impl DashboardState {
    /// Map a finished fetch onto the terminal state. Failure detail goes to
    /// the log only.
    pub fn from_result(result: Result<Vec<ContentRow>, ContentError>) -> Self {
        match result {
            Ok(rows) => {
                info!(rows = rows.len(), "dashboard loaded");
                DashboardState::Loaded(Dashboard::new(rows))
            }
            Err(err) => {
                error!(
                    error = %err,
                    cause = ?std::error::Error::source(&err),
                    "dashboard data fetch failed"
                );
                DashboardState::Error(LOAD_FAILURE_MESSAGE.to_string())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DashboardState::Loading)
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        match self {
            DashboardState::Loaded(dashboard) => Some(dashboard),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            DashboardState::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DashboardLoader;

impl DashboardLoader {
    /// Start loading on the current tokio runtime.
    ///
    /// Issues exactly one `home_rows` call. Must be called from within a
    /// runtime context. The slot always receives a terminal state, even if
    /// the source panics.
    pub fn mount(source: Arc<dyn CatalogSource>) -> DashboardMount {
        let (tx, rx) = watch::channel(DashboardState::Loading);

        let task = tokio::spawn(async move {
            let fetch =
                tokio::spawn(async move { source.home_rows().await });
            let state = match fetch.await {
                Ok(result) => DashboardState::from_result(result),
                Err(err) => {
                    error!(error = %err, "dashboard load task failed");
                    DashboardState::Error(LOAD_FAILURE_MESSAGE.to_string())
                }
            };
            if tx.send(state).is_err() {
                debug!("dashboard unmounted before load finished; discarding");
            }
        });

        DashboardMount { state: rx, task }
    }
}

/// Handle to one mounted dashboard. Dropping it discards any pending
/// result.
#[derive(Debug)]
pub struct DashboardMount {
    state: watch::Receiver<DashboardState>,
    task: JoinHandle<()>,
}

impl DashboardMount {
    /// Current state snapshot.
    pub fn state(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    /// Wait until the mount leaves `Loading`.
    pub async fn settled(&mut self) -> DashboardState {
        match self.state.wait_for(|state| !state.is_loading()).await {
            Ok(state) => state.clone(),
            Err(_) => {
                // Only reachable if the runtime shut down mid-load.
                error!("dashboard load task ended without a result");
                DashboardState::Error(LOAD_FAILURE_MESSAGE.to_string())
            }
        }
    }

    /// Drop the state slot and hand back the load task so callers can wait
    /// for it to drain.
    pub fn unmount(self) -> JoinHandle<()> {
        let DashboardMount { state, task } = self;
        drop(state);
        task
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    fn item(id: u64, title: &str) -> CatalogItem {
        CatalogItem {
            id,
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn hero_prefers_trending_row() {
        let rows = vec![
            ContentRow::new("Popular Movies", vec![item(9, "Z")]),
            ContentRow::new(HERO_ROW_LABEL, vec![item(1, "A"), item(2, "B")]),
        ];
        assert_eq!(select_hero(&rows).map(|i| i.id), Some(1));
    }

    #[test]
    fn hero_falls_back_to_first_row() {
        let rows = vec![
            ContentRow::new("Popular", vec![item(3, "C"), item(4, "D")]),
            ContentRow::new("Top Rated", vec![item(5, "E")]),
        ];
        assert_eq!(select_hero(&rows).map(|i| i.id), Some(3));
    }

    #[test]
    fn empty_trending_row_falls_back_to_first_row() {
        let rows = vec![
            ContentRow::new("Upcoming", vec![item(7, "G")]),
            ContentRow::new(HERO_ROW_LABEL, Vec::new()),
        ];
        assert_eq!(select_hero(&rows).map(|i| i.id), Some(7));
    }

    #[test]
    fn label_match_is_exact() {
        let rows = vec![
            ContentRow::new("Popular", vec![item(3, "C")]),
            ContentRow::new("trending now", vec![item(1, "A")]),
        ];
        assert_eq!(select_hero(&rows).map(|i| i.id), Some(3));
    }

    #[test]
    fn no_rows_means_no_hero() {
        let dashboard = Dashboard::new(Vec::new());
        assert!(dashboard.hero().is_none());
        assert_eq!(dashboard.visible_rows().count(), 0);
    }

    #[test]
    fn failures_collapse_to_generic_message() {
        let state = DashboardState::from_result(Err(ContentError::Upstream {
            message: "Invalid key".into(),
        }));
        assert_eq!(state.error_message(), Some(LOAD_FAILURE_MESSAGE));

        let state = DashboardState::from_result(Err(ContentError::MissingApiKey));
        assert_eq!(state.error_message(), Some(LOAD_FAILURE_MESSAGE));
    }

    #[test]
    fn state_serializes_with_tag() {
        let state = DashboardState::Error(LOAD_FAILURE_MESSAGE.into());
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["state"], "error");
        assert_eq!(value["data"], LOAD_FAILURE_MESSAGE);

        let value = serde_json::to_value(DashboardState::Loading).unwrap();
        assert_eq!(value["state"], "loading");
    }

    #[test]
    fn loaded_state_reads_back_from_json() {
        let mut hero = item(1, "Dune");
        hero.year = Some(2021);
        hero.description = Some("Spice.".into());
        hero.media_kind = Some(marquee_model::ItemKind::Movie);
        let state = DashboardState::Loaded(Dashboard::new(vec![
            ContentRow::new(HERO_ROW_LABEL, vec![hero]),
        ]));

        let json = serde_json::to_string_pretty(&state).unwrap();
        let back: DashboardState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    struct CountingSource {
        calls: AtomicUsize,
        rows: Vec<ContentRow>,
    }

    #[async_trait]
    impl CatalogSource for CountingSource {
        async fn home_rows(&self) -> Result<Vec<ContentRow>, ContentError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.rows.clone())
        }
    }

    #[tokio::test]
    async fn mount_fetches_once_and_settles_loaded() {
        let source = Arc::new(CountingSource {
            calls: AtomicUsize::new(0),
            rows: vec![ContentRow::new(HERO_ROW_LABEL, vec![item(1, "A")])],
        });

        let mut mount = DashboardLoader::mount(source.clone());
        let state = mount.settled().await;

        let dashboard = state.dashboard().expect("loaded");
        assert_eq!(dashboard.hero().map(|i| i.id), Some(1));
        assert_eq!(mount.state(), state);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    struct GatedSource {
        gate: Notify,
    }

    #[async_trait]
    impl CatalogSource for GatedSource {
        async fn home_rows(&self) -> Result<Vec<ContentRow>, ContentError> {
            self.gate.notified().await;
            Err(ContentError::MissingApiKey)
        }
    }

    #[tokio::test]
    async fn state_stays_loading_until_source_returns() {
        let source = Arc::new(GatedSource {
            gate: Notify::new(),
        });
        let mut mount = DashboardLoader::mount(source.clone());
        assert!(mount.state().is_loading());

        source.gate.notify_one();
        let state = mount.settled().await;
        assert_eq!(state.error_message(), Some(LOAD_FAILURE_MESSAGE));
    }

    struct PanickingSource;

    #[async_trait]
    impl CatalogSource for PanickingSource {
        async fn home_rows(&self) -> Result<Vec<ContentRow>, ContentError> {
            panic!("source blew up");
        }
    }

    #[tokio::test]
    async fn panicking_source_still_settles_into_error() {
        let mut mount = DashboardLoader::mount(Arc::new(PanickingSource));
        let state = mount.settled().await;

        assert_eq!(state.error_message(), Some(LOAD_FAILURE_MESSAGE));
        assert_eq!(mount.state(), state);
    }

    #[tokio::test]
    async fn unmount_before_completion_discards_result() {
        let source = Arc::new(GatedSource {
            gate: Notify::new(),
        });
        let mount = DashboardLoader::mount(source.clone());
        let task = mount.unmount();

        source.gate.notify_one();
        task.await.expect("load task finishes cleanly after unmount");
    }
}
