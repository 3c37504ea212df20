//! Inline markup detection.

use crate::lint::{IssueKind, LintConfig, LintIssue, LintRule};
use crate::model::Collection;
use crate::text::has_formatting_tags;

/// Flags entries carrying inline markup: `<...>` tag syntax or `{...}` ASS
/// override blocks.
pub struct FormattingTagsRule;

impl LintRule for FormattingTagsRule {
    fn id(&self) -> &'static str {
        "formatting_tags"
    }

    fn name(&self) -> &'static str {
        "Formatting tags"
    }

    fn description(&self) -> &'static str {
        "Entries containing inline markup tags or override blocks"
    }

    fn check(&self, collection: &Collection, _config: &LintConfig) -> Vec<LintIssue> {
        collection
            .entries
            .iter()
            .filter(|entry| has_formatting_tags(&entry.text))
            .map(|entry| {
                LintIssue::new(IssueKind::FormattingTags, entry, "entry contains formatting tags")
            })
            .collect()
    }
}
