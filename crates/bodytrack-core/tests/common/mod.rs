//! Entry fixtures shared by the engine tests.

#![allow(dead_code)]

use bodytrack_core::model::{Entry, EntryDraft};
use chrono::{DateTime, Duration, TimeZone, Utc};

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap()
}

pub fn entry(weight: f64, body_fat: f64) -> Entry {
    EntryDraft::new(weight, body_fat).stamp(base_time())
}

/// Entries a day apart, in the given order.
pub fn series(values: &[(f64, f64)]) -> Vec<Entry> {
    values
        .iter()
        .enumerate()
        .map(|(i, &(w, bf))| EntryDraft::new(w, bf).stamp(base_time() + Duration::days(i as i64)))
        .collect()
}
