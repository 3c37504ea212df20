//! Auto-repair pipeline
//!
//! Pure, total repair functions for the problems the lint suite detects,
//! plus [`fix_all`], which composes them in a fixed order. The order
//! matters: later fixes assume invariants established by earlier ones.
//!
//! 1. [`remove_empty`] and [`remove_duplicates`] — structural cleanup
//!    first, so timing heuristics act only on meaningful entries.
//! 2. [`strip_formatting_tags`] and [`strip_hearing_impaired`] — text
//!    cleanup, which may empty and drop further entries.
//! 3. [`fix_overlaps`] — establish non-overlapping, time-sorted order.
//! 4. [`extend_short_durations`] and [`shorten_long_durations`] —
//!    per-entry clamps, neighbor-unaware, so they can reintroduce overlaps
//!    and short gaps.
//! 5. [`fix_overlaps`]-adjacent repairs again via [`fix_short_gaps`] —
//!    which is exactly why the gap fixer runs after the duration clamps.
//! 6. [`rewrap_long_lines`] — purely textual, last.
//!
//! Running the pipeline twice yields the same result as once, except for
//! two documented bounded limitations: duplicate removal compares only the
//! most recently seen occurrence, and the wrapper never splits a single
//! over-length word.

use crate::model::Collection;

mod structural;
mod timing;
mod wrap;

pub use structural::{remove_duplicates, remove_empty, strip_formatting_tags, strip_hearing_impaired};
pub use timing::{extend_short_durations, fix_overlaps, fix_short_gaps, shorten_long_durations};
pub use wrap::rewrap_long_lines;

/// Thresholds consumed by the fixers. Defaults match [`crate::lint::LintConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixConfig {
    /// Wrap threshold for `rewrap_long_lines`
    pub max_chars_per_line: usize,
    /// Duration floor for `extend_short_durations` and the gap fixer's
    /// secondary floor
    pub min_duration_ms: i64,
    /// Duration ceiling for `shorten_long_durations`
    pub max_duration_ms: i64,
    /// Target gap for `fix_short_gaps`
    pub min_gap_ms: i64,
}

impl Default for FixConfig {
    fn default() -> Self {
        Self {
            max_chars_per_line: 42,
            min_duration_ms: 500,
            max_duration_ms: 10_000,
            min_gap_ms: 100,
        }
    }
}

/// Run the full repair pipeline in its fixed order.
#[must_use]
pub fn fix_all(collection: &Collection, config: &FixConfig) -> Collection {
    let collection = remove_empty(collection);
    let collection = remove_duplicates(&collection);
    let collection = strip_formatting_tags(&collection);
    let collection = strip_hearing_impaired(&collection);
    let collection = fix_overlaps(&collection);
    let collection = extend_short_durations(&collection, config.min_duration_ms);
    let collection = shorten_long_durations(&collection, config.max_duration_ms);
    let collection = fix_short_gaps(&collection, config.min_gap_ms, config.min_duration_ms);
    rewrap_long_lines(&collection, config.max_chars_per_line)
}
