//! Display duration bounds.

use crate::lint::{IssueKind, LintConfig, LintIssue, LintRule};
use crate::model::Collection;

/// Flags entries displayed too briefly or too long, against the configured
/// duration bounds.
pub struct DurationRule;

impl LintRule for DurationRule {
    fn id(&self) -> &'static str {
        "duration"
    }

    fn name(&self) -> &'static str {
        "Duration bounds"
    }

    fn description(&self) -> &'static str {
        "Entries whose display duration falls outside the configured bounds"
    }

    fn check(&self, collection: &Collection, config: &LintConfig) -> Vec<LintIssue> {
        let mut issues = Vec::new();
        for entry in &collection.entries {
            let duration = entry.duration_ms();
            if duration < config.min_duration_ms {
                issues.push(LintIssue::new(
                    IssueKind::ShortDuration,
                    entry,
                    format!("duration {duration}ms below minimum {}ms", config.min_duration_ms),
                ));
            } else if duration > config.max_duration_ms {
                issues.push(LintIssue::new(
                    IssueKind::LongDuration,
                    entry,
                    format!("duration {duration}ms above maximum {}ms", config.max_duration_ms),
                ));
            }
        }
        issues
    }
}
