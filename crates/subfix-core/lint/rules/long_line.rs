//! Line length detection.

use crate::lint::{IssueKind, LintConfig, LintIssue, LintRule};
use crate::model::Collection;

/// Flags entries with any line over `max_chars_per_line` characters.
pub struct LongLineRule;

impl LintRule for LongLineRule {
    fn id(&self) -> &'static str {
        "long_line"
    }

    fn name(&self) -> &'static str {
        "Long line"
    }

    fn description(&self) -> &'static str {
        "Entries with a line exceeding the per-line character limit"
    }

    fn check(&self, collection: &Collection, config: &LintConfig) -> Vec<LintIssue> {
        collection
            .entries
            .iter()
            .filter_map(|entry| {
                let longest = entry
                    .text
                    .lines()
                    .map(|line| line.chars().count())
                    .max()
                    .unwrap_or(0);
                (longest > config.max_chars_per_line).then(|| {
                    LintIssue::new(
                        IssueKind::LongLine,
                        entry,
                        format!(
                            "line of {longest} characters exceeds limit of {}",
                            config.max_chars_per_line
                        ),
                    )
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Entry, SubtitleFormat};

    #[test]
    fn measures_each_line_separately() {
        let collection = Collection::with_entries(
            SubtitleFormat::Srt,
            vec![Entry::new(0, 1_000, "fits\nthis second line is much much much too long for one row")],
        );
        let issues = LongLineRule.check(&collection, &LintConfig::default());
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn respects_configured_limit() {
        let collection = Collection::with_entries(
            SubtitleFormat::Srt,
            vec![Entry::new(0, 1_000, "only twenty one chars")],
        );
        let config = LintConfig {
            max_chars_per_line: 10,
            ..LintConfig::default()
        };
        assert_eq!(LongLineRule.check(&collection, &config).len(), 1);
        assert!(LongLineRule.check(&collection, &LintConfig::default()).is_empty());
    }
}
