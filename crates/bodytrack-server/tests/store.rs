#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use bodytrack_core::model::{EntryDraft, PhotoDraft, Targets};
use bodytrack_core::TrackerError;
use bodytrack_server::store::TrackerStore;
use chrono::{Duration, TimeZone, Utc};

#[test]
fn entries_keep_insertion_order() {
    let store = TrackerStore::new();
    for w in [72.0, 70.0, 71.0] {
        store.append_entry(EntryDraft::new(w, 20.0));
    }
    let weights: Vec<f64> = store.list_entries().iter().map(|e| e.weight).collect();
    assert_eq!(weights, vec![72.0, 70.0, 71.0]);
}

#[test]
fn dates_never_go_backwards() {
    let store = TrackerStore::new();
    let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    let first = store.append_entry_at(EntryDraft::new(70.0, 20.0), t0);
    // clock stepped back an hour
    let second = store.append_entry_at(EntryDraft::new(71.0, 20.0), t0 - Duration::hours(1));
    let third = store.append_entry_at(EntryDraft::new(72.0, 20.0), t0 + Duration::minutes(5));

    assert_eq!(first.date, t0);
    assert_eq!(second.date, t0);
    assert_eq!(third.date, t0 + Duration::minutes(5));

    let dates: Vec<_> = store.list_entries().iter().map(|e| e.date).collect();
    assert!(dates.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn successive_appends_have_monotone_dates() {
    let store = TrackerStore::new();
    for i in 0..50 {
        store.append_entry(EntryDraft::new(60.0 + i as f64, 15.0));
    }
    let entries = store.list_entries();
    assert_eq!(entries.len(), 50);
    assert!(entries.windows(2).all(|w| w[0].date <= w[1].date));
}

#[test]
fn targets_default_then_replace_wholesale() {
    let store = TrackerStore::new();
    assert_eq!(store.get_targets(), Targets::new(0.0, 0.0));

    store.set_targets(Targets::new(75.0, 15.0));
    assert_eq!(store.get_targets(), Targets::new(75.0, 15.0));

    let partial = Targets::from_json(serde_json::json!({ "weight": 80 })).unwrap();
    store.set_targets(partial);
    let t = store.get_targets();
    assert_eq!(t.weight, 80.0);
    assert_eq!(t.body_fat, 0.0);
}

#[test]
fn derived_views_on_empty_store() {
    let store = TrackerStore::new();
    assert!(matches!(store.analytics(), Err(TrackerError::NoData)));
    assert!(matches!(store.progress(), Err(TrackerError::NoData)));
    assert!(matches!(store.composition(), Err(TrackerError::NoData)));
}

#[test]
fn progress_reads_current_targets() {
    let store = TrackerStore::new();
    store.append_entry(EntryDraft::new(70.0, 20.0));
    store.set_targets(Targets::new(70.0, 15.0));

    let p = store.progress().unwrap();
    assert_eq!(p.weight.progress_percentage, 100.0);
    assert_eq!(p.body_fat.progress_percentage, 75.0);
}

#[test]
fn photos_list_newest_first() {
    let store = TrackerStore::new();
    for tag in ["a", "b", "c"] {
        let draft = PhotoDraft {
            data_url: format!("data:image/png;base64,{tag}"),
        };
        store.add_photo(draft);
    }
    let urls: Vec<String> = store.list_photos().into_iter().map(|p| p.data_url).collect();
    assert_eq!(
        urls,
        vec![
            "data:image/png;base64,c",
            "data:image/png;base64,b",
            "data:image/png;base64,a"
        ]
    );
    assert_eq!(store.photo_count(), 3);
}

#[test]
fn concurrent_appends_are_all_kept() {
    let store = Arc::new(TrackerStore::new());
    let handles: Vec<_> = (0..8)
        .map(|t| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                for i in 0..100 {
                    store.append_entry(EntryDraft::new(t as f64 * 1000.0 + i as f64, 20.0));
                    let _ = store.analytics().unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let entries = store.list_entries();
    assert_eq!(entries.len(), 800);
    assert_eq!(store.analytics().unwrap().total_entries, 800);
    assert!(entries.windows(2).all(|w| w[0].date <= w[1].date));

    // each writer's own entries stay in the order it submitted them
    for t in 0..8 {
        let own: Vec<f64> = entries
            .iter()
            .map(|e| e.weight)
            .filter(|w| (*w / 1000.0).floor() as i32 == t)
            .collect();
        assert_eq!(own.len(), 100);
        assert!(own.windows(2).all(|w| w[0] < w[1]));
    }
}
