//! Timing repair fixers.
//!
//! `fix_overlaps` and `fix_short_gaps` sort a copy by start time and emit
//! the entries in that order; the duration clamps are per-entry and
//! neighbor-unaware by design, which is why the pipeline runs the gap and
//! overlap repairs around them.

use crate::model::{Collection, Entry};

fn sorted_entries(collection: &Collection) -> Vec<Entry> {
    let mut entries = collection.entries.clone();
    entries.sort_by_key(|entry| entry.start_ms);
    entries
}

/// Clamp each overlapping entry's end to just before its successor starts.
///
/// After this fix, for every time-sorted adjacent pair,
/// `prev.end_ms <= next.start_ms`.
#[must_use]
pub fn fix_overlaps(collection: &Collection) -> Collection {
    let mut entries = sorted_entries(collection);
    for i in 0..entries.len().saturating_sub(1) {
        let next_start = entries[i + 1].start_ms;
        if entries[i].end_ms > next_start {
            entries[i].end_ms = next_start - 1;
        }
    }
    collection.replace_entries(entries)
}

/// Extend entries shorter than `min_duration_ms` to exactly the minimum.
/// Per-entry; may reintroduce overlaps, which the pipeline repairs next.
#[must_use]
pub fn extend_short_durations(collection: &Collection, min_duration_ms: i64) -> Collection {
    let entries = collection
        .entries
        .iter()
        .map(|entry| {
            if entry.duration_ms() < min_duration_ms {
                entry.with_times(entry.start_ms, entry.start_ms + min_duration_ms)
            } else {
                entry.clone()
            }
        })
        .collect();
    collection.replace_entries(entries)
}

/// Shorten entries longer than `max_duration_ms` to exactly the maximum.
#[must_use]
pub fn shorten_long_durations(collection: &Collection, max_duration_ms: i64) -> Collection {
    let entries = collection
        .entries
        .iter()
        .map(|entry| {
            if entry.duration_ms() > max_duration_ms {
                entry.with_times(entry.start_ms, entry.start_ms + max_duration_ms)
            } else {
                entry.clone()
            }
        })
        .collect();
    collection.replace_entries(entries)
}

/// Open up gaps below `min_gap_ms` by pulling the earlier entry's end back
/// to `next.start_ms - min_gap_ms`.
///
/// The pull-back is floored at `start_ms + min_duration_ms` — a secondary,
/// smaller floor preventing this fix from leaving a degenerate near-zero
/// duration. Negative gaps are overlaps and are not touched here.
#[must_use]
pub fn fix_short_gaps(collection: &Collection, min_gap_ms: i64, min_duration_ms: i64) -> Collection {
    let mut entries = sorted_entries(collection);
    for i in 0..entries.len().saturating_sub(1) {
        let gap = entries[i + 1].start_ms - entries[i].end_ms;
        if (0..min_gap_ms).contains(&gap) {
            let target = entries[i + 1].start_ms - min_gap_ms;
            let floor = entries[i].start_ms + min_duration_ms;
            entries[i].end_ms = target.max(floor);
        }
    }
    collection.replace_entries(entries)
}
