use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::ml::Classifier;

/// Shared application state for API handlers
///
/// The classifier is loaded once at startup and never mutated, so it is
/// shared across concurrent requests without locking.
#[derive(Clone)]
pub struct AppState {
    /// Loaded classifier artifact
    pub classifier: Arc<Classifier>,

    /// Application start time
    pub start_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(classifier: Arc<Classifier>) -> Self {
        Self {
            classifier,
            start_time: Utc::now(),
        }
    }

    /// Get system uptime in seconds
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.start_time).num_seconds()
    }
}
