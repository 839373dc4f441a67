use std::sync::Arc;

use crate::color::ColorMap;
use crate::config::AppConfig;
use crate::data::error::DataSourceError;
use crate::data::filter::filter;
use crate::data::loader::DatasetCache;
use crate::data::model::{Dataset, FilterCriteria};
use crate::data::summary::Summary;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: AppConfig,

    /// Memoized source file.
    cache: DatasetCache,

    /// Full dataset (None until the first successful load).
    pub dataset: Option<Arc<Dataset>>,

    /// Current widget selections.
    pub criteria: FilterCriteria,

    /// Rows passing `criteria`, recomputed on every change.
    pub view: Dataset,

    /// Metrics and grouped totals over `view`.
    pub summary: Summary,

    pub category_colors: ColorMap,
    pub payment_colors: ColorMap,

    /// Message for the error banner; set by any failure in the pipeline.
    pub error: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let cache = DatasetCache::new(config.data_path.clone());
        let mut state = Self {
            config,
            cache,
            dataset: None,
            criteria: FilterCriteria::default(),
            view: Dataset::default(),
            summary: Summary::default(),
            category_colors: ColorMap::default(),
            payment_colors: ColorMap::default(),
            error: None,
        };
        state.load();
        state
    }

    /// Fetch the dataset (reading the file only the first time) and reset the
    /// filters to span it.
    pub fn load(&mut self) {
        match self.cache.get() {
            Ok(dataset) => self.set_dataset(dataset),
            Err(e) => self.fail(e),
        }
    }

    fn set_dataset(&mut self, dataset: Arc<Dataset>) {
        self.criteria = FilterCriteria::spanning(&dataset);
        self.category_colors = ColorMap::new(dataset.categories.iter());
        self.payment_colors = ColorMap::new(dataset.payment_modes.iter());
        self.dataset = Some(dataset);
        self.error = None;
        self.refilter();
    }

    /// Recompute `view` and `summary` after a criteria change.
    pub fn refilter(&mut self) {
        match self.cache.get() {
            Ok(dataset) => {
                self.view = filter(&dataset, &self.criteria);
                self.summary = Summary::from_view(&self.view);
                log::debug!(
                    "{} of {} transactions match {:?}",
                    self.view.len(),
                    dataset.len(),
                    self.criteria
                );
            }
            Err(e) => self.fail(e),
        }
    }

    /// Restore the default criteria: full date span, all labels.
    pub fn reset_filters(&mut self) {
        if let Some(ds) = &self.dataset {
            self.criteria = FilterCriteria::spanning(ds);
            self.refilter();
        }
    }

    fn fail(&mut self, err: DataSourceError) {
        log::error!("Failed to load {}: {err}", self.cache.path().display());
        self.error = Some(format!("An error occurred: {err}"));
        self.view = Dataset::default();
        self.summary = Summary::default();
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    const CSV: &str = "Date,Category,Payment Mode,Amount Paid,Cashback\n\
                       2024-01-01,Food,Card,100,5\n\
                       2024-01-02,Travel,Cash,200,0\n\
                       2024-01-03,Food,Cash,50,1\n";

    fn config_for(path: &Path) -> AppConfig {
        AppConfig {
            data_path: path.to_path_buf(),
            ..AppConfig::default()
        }
    }

    fn fixture() -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expenses.csv");
        std::fs::write(&path, CSV).unwrap();
        let state = AppState::new(config_for(&path));
        (dir, state)
    }

    #[test]
    fn startup_shows_everything() {
        let (_dir, state) = fixture();
        assert!(state.error.is_none());
        assert_eq!(state.view.len(), 3);
        assert_eq!(state.summary.total_amount, 350.0);
        assert_eq!(state.criteria.start.to_string(), "2024-01-01");
        assert_eq!(state.criteria.end.to_string(), "2024-01-03");
    }

    #[test]
    fn refilter_applies_current_criteria() {
        let (_dir, mut state) = fixture();
        state.criteria.payment_mode = Some("Cash".into());
        state.refilter();
        assert_eq!(state.summary.transaction_count, 2);
        assert_eq!(state.summary.total_cashback, 1.0);

        state.criteria.category = Some("Food".into());
        state.refilter();
        assert_eq!(state.summary.transaction_count, 1);
        assert_eq!(state.summary.average_amount, Some(50.0));

        state.reset_filters();
        assert_eq!(state.summary.transaction_count, 3);
        assert_eq!(state.criteria.category, None);
    }

    #[test]
    fn refilter_uses_cached_dataset() {
        let (dir, mut state) = fixture();
        std::fs::remove_file(dir.path().join("expenses.csv")).unwrap();
        state.criteria.category = Some("Travel".into());
        state.refilter();
        assert!(state.error.is_none());
        assert_eq!(state.summary.total_amount, 200.0);
    }

    #[test]
    fn missing_file_sets_banner() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(config_for(&dir.path().join("missing.csv")));
        let msg = state.error.as_deref().unwrap();
        assert!(msg.starts_with("An error occurred:"), "{msg}");
        assert!(msg.contains("missing.csv"), "{msg}");
        assert!(state.dataset.is_none());
        assert!(state.summary.is_empty());
    }

    #[test]
    fn retry_after_fixing_file_clears_banner() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expenses.csv");
        let mut state = AppState::new(config_for(&path));
        assert!(state.error.is_some());

        std::fs::write(&path, CSV).unwrap();
        state.load();
        assert!(state.error.is_none());
        assert_eq!(state.view.len(), 3);
    }
}
