//! Timing overlap detection.

use crate::lint::{sorted_by_start, IssueKind, LintConfig, LintIssue, LintRule};
use crate::model::Collection;

/// Flags entries whose display time runs into the temporally next entry.
///
/// Sorts a local copy by start time; the caller's ordering is untouched.
/// The issue is reported on the earlier entry of each violating pair.
pub struct OverlapRule;

impl LintRule for OverlapRule {
    fn id(&self) -> &'static str {
        "overlap"
    }

    fn name(&self) -> &'static str {
        "Timing overlap"
    }

    fn description(&self) -> &'static str {
        "Adjacent entries whose display times overlap"
    }

    fn check(&self, collection: &Collection, _config: &LintConfig) -> Vec<LintIssue> {
        let sorted = sorted_by_start(collection);
        sorted
            .windows(2)
            .filter(|pair| pair[0].end_ms > pair[1].start_ms)
            .map(|pair| {
                LintIssue::new(
                    IssueKind::Overlap,
                    pair[0],
                    format!("overlaps next entry by {}ms", pair[0].end_ms - pair[1].start_ms),
                )
            })
            .collect()
    }
}
