//! In-process entry/target/photo store.
//!
//! One `RwLock` guards all three collections. Appends and target replacement
//! take the write side; listings and the metrics engine run under the read
//! side, so a computation always sees a whole entry sequence. Nothing is
//! persisted: contents live for the process lifetime.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use bodytrack_core::error::Result;
use bodytrack_core::metrics::{
    compute_analytics, compute_composition, compute_progress, AnalyticsSnapshot,
    CompositionSnapshot, ProgressSnapshot,
};
use bodytrack_core::model::{Entry, EntryDraft, Photo, PhotoDraft, Targets};

#[derive(Default)]
pub struct TrackerStore {
    inner: RwLock<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    entries: Vec<Entry>,
    targets: Targets,
    /// Oldest first; listed in reverse.
    photos: Vec<Photo>,
}

impl TrackerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp and append an entry using the current UTC time.
    pub fn append_entry(&self, draft: EntryDraft) -> Entry {
        self.append_entry_at(draft, Utc::now())
    }

    /// Append with an explicit clock reading. The stamp never goes below the
    /// previous entry's date, so dates stay non-decreasing in insertion order.
    pub fn append_entry_at(&self, draft: EntryDraft, now: DateTime<Utc>) -> Entry {
        let mut inner = self.inner.write();
        let date = match inner.entries.last() {
            Some(prev) if prev.date > now => prev.date,
            _ => now,
        };
        let entry = draft.stamp(date);
        inner.entries.push(entry.clone());

        tracing::debug!(
            total = inner.entries.len(),
            weight = entry.weight,
            body_fat = entry.body_fat,
            %date,
            "entry appended"
        );
        entry
    }

    pub fn list_entries(&self) -> Vec<Entry> {
        self.inner.read().entries.clone()
    }

    pub fn entry_count(&self) -> usize {
        self.inner.read().entries.len()
    }

    pub fn get_targets(&self) -> Targets {
        self.inner.read().targets.clone()
    }

    pub fn set_targets(&self, targets: Targets) {
        tracing::debug!(weight = targets.weight, body_fat = targets.body_fat, "targets replaced");
        self.inner.write().targets = targets;
    }

    pub fn add_photo(&self, draft: PhotoDraft) -> Photo {
        let photo = draft.stamp(Utc::now());
        let mut inner = self.inner.write();
        inner.photos.push(photo.clone());
        tracing::debug!(total = inner.photos.len(), bytes = photo.data_url.len(), "photo added");
        photo
    }

    /// Newest first.
    pub fn list_photos(&self) -> Vec<Photo> {
        self.inner.read().photos.iter().rev().cloned().collect()
    }

    pub fn photo_count(&self) -> usize {
        self.inner.read().photos.len()
    }

    pub fn analytics(&self) -> Result<AnalyticsSnapshot> {
        compute_analytics(&self.inner.read().entries)
    }

    pub fn progress(&self) -> Result<ProgressSnapshot> {
        let inner = self.inner.read();
        compute_progress(&inner.entries, &inner.targets)
    }

    pub fn composition(&self) -> Result<CompositionSnapshot> {
        compute_composition(&self.inner.read().entries)
    }
}
