//! Repair pipeline contract tests: fixed ordering, idempotence, and the
//! two documented bounded limitations.

use subfix_core::fix::{self, FixConfig};
use subfix_core::model::{Collection, Entry, SubtitleFormat};

fn collection(entries: Vec<Entry>) -> Collection {
    Collection::with_entries(SubtitleFormat::Srt, entries)
}

#[test]
fn fix_all_is_idempotent_on_ordinary_input() {
    let messy = collection(vec![
        Entry::new(0, 2_000, "  "),
        Entry::new(1_000, 3_000, "<i>Hello there, how are you doing tonight?</i>"),
        Entry::new(4_000, 4_100, "Short one"),
        Entry::new(5_000, 17_000, "This one lingers on screen for far too long to be useful"),
        Entry::new(18_000, 19_000, "[Music]"),
        Entry::new(22_000, 23_000, "Closing line"),
    ]);
    let config = FixConfig::default();
    let once = fix::fix_all(&messy, &config);
    let twice = fix::fix_all(&once, &config);
    assert_eq!(once, twice);
}

#[test]
fn pipeline_output_satisfies_invariants() {
    let messy = collection(vec![
        Entry::new(5_000, 5_100, "late but short"),
        Entry::new(0, 6_000, "early and far too long overlapping everything"),
        Entry::new(7_000, 7_020, "tight"),
        Entry::new(7_600, 9_000, "follower"),
    ]);
    let fixed = fix::fix_all(&messy, &FixConfig::default());

    // Time-sorted, non-overlapping, reindexed.
    for pair in fixed.entries.windows(2) {
        assert!(pair[0].start_ms <= pair[1].start_ms);
        assert!(pair[0].end_ms <= pair[1].start_ms);
    }
    for (i, entry) in fixed.entries.iter().enumerate() {
        assert_eq!(entry.index, i + 1);
    }
}

#[test]
fn overlap_fix_keeps_ids_stable() {
    let before = collection(vec![
        Entry::new(1_000, 3_000, "Hello"),
        Entry::new(2_000, 5_000, "World"),
    ]);
    let ids: Vec<_> = before.entries.iter().map(|e| e.id).collect();
    let fixed = fix::fix_overlaps(&before);
    let fixed_ids: Vec<_> = fixed.entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, fixed_ids);
    assert_eq!(fixed.entries[0].end_ms, 1_999);
}

#[test]
fn duplicate_removal_limitation_is_not_idempotent() {
    // The single-previous-match rule: the middle occurrence is removed
    // (compared against the first) but still becomes the comparison point,
    // letting the third survive pass one and fall in pass two.
    let chain = collection(vec![
        Entry::new(400, 900, "Same text"),
        Entry::new(0, 350, "Same text"),
        Entry::new(520, 1_020, "Same text"),
    ]);
    let once = fix::remove_duplicates(&chain);
    let twice = fix::remove_duplicates(&once);
    assert_eq!(once.len(), 2);
    assert_eq!(twice.len(), 1);
}

#[test]
fn long_word_wrap_limitation_is_stable() {
    // A word over the threshold stays over-length; rerunning the wrapper
    // must not churn it.
    let entry = collection(vec![Entry::new(0, 1_000, "antidisestablishmentarianism is long")]);
    let config = FixConfig {
        max_chars_per_line: 10,
        ..FixConfig::default()
    };
    let once = fix::rewrap_long_lines(&entry, config.max_chars_per_line);
    assert!(once.entries[0]
        .text
        .lines()
        .any(|l| l.chars().count() > config.max_chars_per_line));
    let twice = fix::rewrap_long_lines(&once, config.max_chars_per_line);
    assert_eq!(once, twice);
}

#[test]
fn structural_cleanup_runs_before_timing_heuristics() {
    // The empty entry overlaps its neighbor; it must be removed rather
    // than have the neighbor's timing clamped against it.
    let messy = collection(vec![
        Entry::new(0, 5_000, "   "),
        Entry::new(1_000, 3_000, "Only real entry"),
    ]);
    let fixed = fix::fix_all(&messy, &FixConfig::default());
    assert_eq!(fixed.len(), 1);
    assert_eq!(fixed.entries[0].start_ms, 1_000);
    assert_eq!(fixed.entries[0].end_ms, 3_000);
}
