//! Short inter-entry gap detection.

use crate::lint::{sorted_by_start, IssueKind, LintConfig, LintIssue, LintRule};
use crate::model::Collection;

/// Flags temporally adjacent pairs with a gap in `[0, min_gap_ms)`.
///
/// Negative gaps are overlaps and belong to the overlap rule alone; this
/// rule never double-reports them.
pub struct ShortGapRule;

impl LintRule for ShortGapRule {
    fn id(&self) -> &'static str {
        "gap_short"
    }

    fn name(&self) -> &'static str {
        "Short gap"
    }

    fn description(&self) -> &'static str {
        "Adjacent entries with too little breathing room between them"
    }

    fn check(&self, collection: &Collection, config: &LintConfig) -> Vec<LintIssue> {
        let sorted = sorted_by_start(collection);
        sorted
            .windows(2)
            .filter_map(|pair| {
                let gap = pair[1].start_ms - pair[0].end_ms;
                ((0..config.min_gap_ms).contains(&gap)).then(|| {
                    LintIssue::new(
                        IssueKind::GapShort,
                        pair[0],
                        format!("gap of {gap}ms below minimum {}ms", config.min_gap_ms),
                    )
                })
            })
            .collect()
    }
}
