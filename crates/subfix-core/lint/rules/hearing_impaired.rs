//! Hearing-impaired cue detection.

use crate::lint::{IssueKind, LintConfig, LintIssue, LintRule};
use crate::model::Collection;
use crate::text::is_hearing_impaired;

/// Flags entries whose entire trimmed text is a hearing-impaired cue:
/// `[...]`, `(...)`, `♪...♪`, or a dash-prefixed variant.
///
/// Whole-text matching only. Dialogue that merely contains a bracketed
/// aside is not flagged; the fixer handles mixed cases by stripping the
/// aside instead of dropping the entry.
pub struct HearingImpairedRule;

impl LintRule for HearingImpairedRule {
    fn id(&self) -> &'static str {
        "hearing_impaired"
    }

    fn name(&self) -> &'static str {
        "Hearing-impaired cue"
    }

    fn description(&self) -> &'static str {
        "Entries that are entirely sound or speaker annotations"
    }

    fn check(&self, collection: &Collection, _config: &LintConfig) -> Vec<LintIssue> {
        collection
            .entries
            .iter()
            .filter(|entry| is_hearing_impaired(&entry.text))
            .map(|entry| {
                LintIssue::new(IssueKind::HearingImpaired, entry, "entry is a hearing-impaired cue")
            })
            .collect()
    }
}
