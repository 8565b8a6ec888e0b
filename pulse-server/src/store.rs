use std::sync::Arc;

use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use pulse_types::{AnalyticsReport, AnalyticsSample, PlatformAccount, Post};

use crate::analytics;

/// Immutable snapshot of everything the dashboard serves. Produced whole by
/// the generator; never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub generated_at: DateTime<Utc>,
    pub accounts: Vec<PlatformAccount>,
    pub samples: Vec<AnalyticsSample>,
    pub posts: Vec<Post>,
}

impl Default for Dataset {
    fn default() -> Self {
        Self {
            generated_at: Utc::now(),
            accounts: Vec::new(),
            samples: Vec::new(),
            posts: Vec::new(),
        }
    }
}

/// Process-wide handle to the current snapshot. Reads are lock-free loads;
/// the only mutation is an atomic pointer swap on (re)generation, so readers
/// never observe a partially rebuilt dataset.
#[derive(Clone)]
pub struct DataStore {
    inner: Arc<ArcSwap<Dataset>>,
}

impl DataStore {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(dataset)),
        }
    }

    /// Store with no generated data yet. Queries degrade to empty results.
    pub fn empty() -> Self {
        Self::new(Dataset::default())
    }

    pub fn snapshot(&self) -> Arc<Dataset> {
        self.inner.load_full()
    }

    /// Swap in a freshly generated snapshot.
    pub fn replace(&self, dataset: Dataset) {
        self.inner.store(Arc::new(dataset));
    }

    /// Account summaries in canonical platform order.
    pub fn account_summaries(&self) -> Vec<PlatformAccount> {
        self.snapshot().accounts.clone()
    }

    /// 7-day windowed chart view over the current snapshot.
    pub fn analytics(&self) -> AnalyticsReport {
        analytics::build_report(&self.snapshot())
    }

    /// The `limit` most recent posts. The snapshot's post list is already
    /// sorted newest first, so this is a plain prefix.
    pub fn recent_posts(&self, limit: usize) -> Vec<Post> {
        self.snapshot().posts.iter().take(limit).cloned().collect()
    }
}
