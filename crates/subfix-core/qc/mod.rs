//! Readability and timing quality control
//!
//! Per-entry evaluation of readability and timing metrics against a named
//! threshold profile. Metrics are computed on markup-stripped text so tags
//! and bracket annotations never inflate reading-speed numbers.
//!
//! Profiles are a closed, data-only preset set selected by id — not a
//! plugin surface. The set is small and fixed by design.

use crate::model::Entry;
use crate::text::strip_markup;
use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// A named bundle of QC thresholds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ThresholdProfile {
    /// Stable preset id
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Short description for UI display
    pub description: &'static str,
    /// Maximum characters per second
    pub max_cps: f64,
    /// Maximum words per minute
    pub max_wpm: f64,
    /// Maximum characters per line
    pub max_cpl: usize,
    /// Minimum display duration in milliseconds
    pub min_duration_ms: i64,
    /// Maximum display duration in milliseconds
    pub max_duration_ms: i64,
    /// Minimum gap to the next entry in milliseconds
    pub min_gap_ms: i64,
}

/// The fixed preset set. `standard` is the default.
pub const PROFILES: &[ThresholdProfile] = &[
    ThresholdProfile {
        id: "standard",
        name: "Standard",
        description: "Balanced defaults for general-purpose subtitling",
        max_cps: 17.0,
        max_wpm: 180.0,
        max_cpl: 42,
        min_duration_ms: 500,
        max_duration_ms: 10_000,
        min_gap_ms: 100,
    },
    ThresholdProfile {
        id: "netflix",
        name: "Netflix",
        description: "Netflix timed-text style guide limits",
        max_cps: 17.0,
        max_wpm: 160.0,
        max_cpl: 42,
        min_duration_ms: 833,
        max_duration_ms: 7_000,
        min_gap_ms: 83,
    },
    ThresholdProfile {
        id: "relaxed",
        name: "Relaxed",
        description: "Permissive limits for drafts and fast-paced content",
        max_cps: 25.0,
        max_wpm: 240.0,
        max_cpl: 50,
        min_duration_ms: 300,
        max_duration_ms: 15_000,
        min_gap_ms: 40,
    },
];

impl ThresholdProfile {
    /// The default preset (`standard`).
    #[must_use]
    pub fn default_profile() -> &'static Self {
        &PROFILES[0]
    }

    /// Look up a preset by id.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EngineError::UnknownProfile`] when no preset has
    /// the given id.
    pub fn by_id(id: &str) -> crate::Result<&'static Self> {
        PROFILES
            .iter()
            .find(|profile| profile.id == id)
            .ok_or_else(|| crate::EngineError::UnknownProfile { id: id.to_string() })
    }
}

/// Readability and timing metrics for one entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct QcMetrics {
    /// Characters excluding whitespace, markup stripped
    pub char_count: usize,
    /// Whitespace-collapsed word count, markup stripped
    pub word_count: usize,
    /// Longest single line in characters, per original line, post-strip
    pub max_line_chars: usize,
    /// Display duration, floored at 1ms to keep rates finite
    pub duration_ms: i64,
    /// Characters per second, one decimal
    pub cps: f64,
    /// Words per minute, one decimal
    pub wpm: f64,
}

/// Threshold violations, each independently triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum QcIssue {
    Cps,
    Wpm,
    Cpl,
    DurationShort,
    DurationLong,
    Overlap,
    GapShort,
}

impl fmt::Display for QcIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cps => write!(f, "cps"),
            Self::Wpm => write!(f, "wpm"),
            Self::Cpl => write!(f, "cpl"),
            Self::DurationShort => write!(f, "duration_short"),
            Self::DurationLong => write!(f, "duration_long"),
            Self::Overlap => write!(f, "overlap"),
            Self::GapShort => write!(f, "gap_short"),
        }
    }
}

/// Per-entry QC result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct QcReport {
    pub metrics: QcMetrics,
    pub issues: Vec<QcIssue>,
    /// Gap to the next entry in milliseconds; `None` for the last entry.
    /// Negative means the entries overlap.
    pub gap_to_next_ms: Option<i64>,
}

/// Round to one decimal, guarding non-finite intermediates to 0.
fn round1(value: f64) -> f64 {
    if value.is_finite() {
        (value * 10.0).round() / 10.0
    } else {
        0.0
    }
}

/// Evaluate one entry against a threshold profile.
///
/// `next` is the temporally following entry, used for gap/overlap checks;
/// pass `None` for the last entry. Overlap and short-gap are mutually
/// exclusive: a negative gap reports only `Overlap`.
#[must_use]
pub fn evaluate(entry: &Entry, next: Option<&Entry>, thresholds: &ThresholdProfile) -> QcReport {
    let stripped = strip_markup(&entry.text);

    let char_count = stripped.chars().filter(|c| !c.is_whitespace()).count();
    let word_count = stripped.split_whitespace().count();
    let max_line_chars = entry
        .text
        .lines()
        .map(|line| strip_markup(line).trim().chars().count())
        .max()
        .unwrap_or(0);

    let duration_ms = entry.duration_ms().max(1);
    #[allow(clippy::cast_precision_loss)]
    let cps = round1(char_count as f64 * 1_000.0 / duration_ms as f64);
    #[allow(clippy::cast_precision_loss)]
    let wpm = round1(word_count as f64 * 60_000.0 / duration_ms as f64);

    let gap_to_next_ms = next.map(|n| n.start_ms - entry.end_ms);

    let mut issues = Vec::new();
    if cps > thresholds.max_cps {
        issues.push(QcIssue::Cps);
    }
    if wpm > thresholds.max_wpm {
        issues.push(QcIssue::Wpm);
    }
    if max_line_chars > thresholds.max_cpl {
        issues.push(QcIssue::Cpl);
    }
    if entry.duration_ms() < thresholds.min_duration_ms {
        issues.push(QcIssue::DurationShort);
    }
    if entry.duration_ms() > thresholds.max_duration_ms {
        issues.push(QcIssue::DurationLong);
    }
    if let Some(gap) = gap_to_next_ms {
        if gap < 0 {
            issues.push(QcIssue::Overlap);
        } else if gap < thresholds.min_gap_ms {
            issues.push(QcIssue::GapShort);
        }
    }

    QcReport {
        metrics: QcMetrics {
            char_count,
            word_count,
            max_line_chars,
            duration_ms,
            cps,
            wpm,
        },
        issues,
        gap_to_next_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entry;

    fn profile() -> &'static ThresholdProfile {
        ThresholdProfile::default_profile()
    }

    #[test]
    fn profile_lookup() {
        assert_eq!(ThresholdProfile::by_id("netflix").unwrap().min_duration_ms, 833);
        assert!(ThresholdProfile::by_id("nope").is_err());
        assert_eq!(ThresholdProfile::default_profile().id, "standard");
    }

    #[test]
    fn counts_ignore_markup_and_whitespace() {
        let entry = Entry::new(0, 2_000, "<i>Hello</i> {\\an8}world [loudly]");
        let report = evaluate(&entry, None, profile());
        assert_eq!(report.metrics.char_count, 10);
        assert_eq!(report.metrics.word_count, 2);
    }

    #[test]
    fn max_line_chars_is_per_original_line() {
        let entry = Entry::new(0, 2_000, "short\na considerably longer second line");
        let report = evaluate(&entry, None, profile());
        assert_eq!(report.metrics.max_line_chars, "a considerably longer second line".len());
    }

    #[test]
    fn zero_duration_is_floored_not_divided() {
        let entry = Entry::new(1_000, 1_000, "Hi");
        let report = evaluate(&entry, None, profile());
        assert_eq!(report.metrics.duration_ms, 1);
        assert!(report.metrics.cps.is_finite());
        assert!(report.issues.contains(&QcIssue::DurationShort));
    }

    #[test]
    fn fast_text_triggers_cps() {
        let entry = Entry::new(0, 1_000, "This sentence is far too long to read in one second");
        let report = evaluate(&entry, None, profile());
        assert!(report.issues.contains(&QcIssue::Cps));
    }

    #[test]
    fn overlap_and_gap_short_are_mutually_exclusive() {
        let a = Entry::new(0, 2_000, "first");
        let overlapping = Entry::new(1_500, 3_000, "second");
        let report = evaluate(&a, Some(&overlapping), profile());
        assert_eq!(report.gap_to_next_ms, Some(-500));
        assert!(report.issues.contains(&QcIssue::Overlap));
        assert!(!report.issues.contains(&QcIssue::GapShort));

        let close = Entry::new(2_050, 3_000, "second");
        let report = evaluate(&a, Some(&close), profile());
        assert_eq!(report.gap_to_next_ms, Some(50));
        assert!(report.issues.contains(&QcIssue::GapShort));
        assert!(!report.issues.contains(&QcIssue::Overlap));
    }

    #[test]
    fn last_entry_has_no_gap() {
        let entry = Entry::new(0, 2_000, "only");
        let report = evaluate(&entry, None, profile());
        assert_eq!(report.gap_to_next_ms, None);
    }

    #[test]
    fn rates_round_to_one_decimal() {
        let entry = Entry::new(0, 3_000, "abcdefgh");
        let report = evaluate(&entry, None, profile());
        assert!((report.metrics.cps - 2.7).abs() < f64::EPSILON);
    }
}
