//! Error detection for subtitle collections
//!
//! Whole-collection scans producing typed issue reports. Each detector is a
//! pure, total function behind the [`LintRule`] trait: no input shape
//! panics, the worst case is an empty issue list, and the caller's
//! collection is never mutated or reordered — rules needing temporal
//! adjacency sort a local copy.

use crate::model::{Collection, EntryId};
use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

pub mod rules;

pub use rules::BuiltinRules;

/// Typed issue category reported by a detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IssueKind {
    /// Trimmed text is empty
    Empty,
    /// Entry overlaps the temporally next entry
    Overlap,
    /// Entire text is a hearing-impaired cue
    HearingImpaired,
    /// A line exceeds the per-line character limit
    LongLine,
    /// Case-insensitive repeat of the most recently seen text within 500ms
    Duplicate,
    /// Inline markup tags or override blocks present
    FormattingTags,
    /// Display duration below the minimum
    ShortDuration,
    /// Display duration above the maximum
    LongDuration,
    /// Non-negative gap to the next entry below the minimum
    GapShort,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Overlap => write!(f, "overlap"),
            Self::HearingImpaired => write!(f, "hearing_impaired"),
            Self::LongLine => write!(f, "long_line"),
            Self::Duplicate => write!(f, "duplicate"),
            Self::FormattingTags => write!(f, "formatting_tags"),
            Self::ShortDuration => write!(f, "short_duration"),
            Self::LongDuration => write!(f, "long_duration"),
            Self::GapShort => write!(f, "gap_short"),
        }
    }
}

/// One detected problem, tied to an entry by stable id and display index.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LintIssue {
    pub kind: IssueKind,
    pub entry_id: EntryId,
    pub index: usize,
    pub message: String,
}

impl LintIssue {
    pub(crate) fn new(
        kind: IssueKind,
        entry: &crate::model::Entry,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            entry_id: entry.id,
            index: entry.index,
            message: message.into(),
        }
    }
}

/// Thresholds consumed by the detectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintConfig {
    /// Per-line character limit for `long_line`
    pub max_chars_per_line: usize,
    /// Lower duration bound for `short_duration`
    pub min_duration_ms: i64,
    /// Upper duration bound for `long_duration`
    pub max_duration_ms: i64,
    /// Minimum acceptable gap for `gap_short`
    pub min_gap_ms: i64,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            max_chars_per_line: 42,
            min_duration_ms: 500,
            max_duration_ms: 10_000,
            min_gap_ms: 100,
        }
    }
}

/// A single detector.
pub trait LintRule: Send + Sync {
    /// Stable rule id, matching the [`IssueKind`] names it reports.
    fn id(&self) -> &'static str;

    /// Human-readable rule name.
    fn name(&self) -> &'static str;

    /// What the rule looks for.
    fn description(&self) -> &'static str;

    /// Scan the collection. Pure: never mutates or reorders the input.
    fn check(&self, collection: &Collection, config: &LintConfig) -> Vec<LintIssue>;
}

/// Run every built-in detector over the collection.
#[must_use]
pub fn detect_all_errors(collection: &Collection, config: &LintConfig) -> Vec<LintIssue> {
    BuiltinRules::all()
        .iter()
        .flat_map(|rule| rule.check(collection, config))
        .collect()
}

/// Local, start-time-sorted copy of the entries for adjacency scans.
pub(crate) fn sorted_by_start(collection: &Collection) -> Vec<&crate::model::Entry> {
    let mut sorted: Vec<_> = collection.entries.iter().collect();
    sorted.sort_by_key(|entry| entry.start_ms);
    sorted
}
