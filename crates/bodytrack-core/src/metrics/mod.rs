//! Metrics engine: pure reductions over the entry sequence.
//!
//! Every function takes the entries in insertion order and returns
//! `TrackerError::NoData` for an empty slice instead of computing over nothing.

pub mod analytics;
pub mod composition;
pub mod progress;

pub use analytics::{compute_analytics, AnalyticsSnapshot, MetricSummary, Trend};
pub use composition::{compute_composition, CompositionSnapshot};
pub use progress::{compute_progress, MetricProgress, ProgressSnapshot};

use crate::error::{Result, TrackerError};
use crate::model::Entry;

fn latest(entries: &[Entry]) -> Result<&Entry> {
    entries.last().ok_or(TrackerError::NoData)
}
