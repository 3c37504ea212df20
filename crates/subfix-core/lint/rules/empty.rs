//! Empty-text detection.

use crate::lint::{IssueKind, LintConfig, LintIssue, LintRule};
use crate::model::Collection;

/// Flags entries whose trimmed text is empty.
pub struct EmptyRule;

impl LintRule for EmptyRule {
    fn id(&self) -> &'static str {
        "empty"
    }

    fn name(&self) -> &'static str {
        "Empty entry"
    }

    fn description(&self) -> &'static str {
        "Entries with no visible text"
    }

    fn check(&self, collection: &Collection, _config: &LintConfig) -> Vec<LintIssue> {
        collection
            .entries
            .iter()
            .filter(|entry| entry.text.trim().is_empty())
            .map(|entry| LintIssue::new(IssueKind::Empty, entry, "entry has no text"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Entry, SubtitleFormat};

    #[test]
    fn flags_whitespace_only_text() {
        let collection = Collection::with_entries(
            SubtitleFormat::Srt,
            vec![Entry::new(0, 1_000, "  \n "), Entry::new(2_000, 3_000, "kept")],
        );
        let issues = EmptyRule.check(&collection, &LintConfig::default());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].index, 1);
    }
}
