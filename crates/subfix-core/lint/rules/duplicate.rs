//! Near-in-time duplicate detection.

use ahash::AHashMap;

use crate::lint::{IssueKind, LintConfig, LintIssue, LintRule};
use crate::model::{Collection, Entry};

/// Start-time window within which a repeated text counts as a duplicate.
pub(crate) const DUPLICATE_WINDOW_MS: i64 = 500;

/// Flags entries repeating the most recently seen entry with the same
/// normalized text (case-insensitive, trimmed) within 500ms of its start.
///
/// One forward pass with a text-to-last-seen map: only the immediately
/// preceding occurrence is compared, not the full history. A bounded,
/// documented limitation — an identical text seen twice more than 500ms
/// apart and then again close to the second occurrence is only compared
/// against the second.
pub struct DuplicateRule;

impl LintRule for DuplicateRule {
    fn id(&self) -> &'static str {
        "duplicate"
    }

    fn name(&self) -> &'static str {
        "Duplicate entry"
    }

    fn description(&self) -> &'static str {
        "Entries repeating the previous occurrence of the same text within 500ms"
    }

    fn check(&self, collection: &Collection, _config: &LintConfig) -> Vec<LintIssue> {
        let mut issues = Vec::new();
        let mut last_seen: AHashMap<String, &Entry> = AHashMap::new();

        for entry in &collection.entries {
            let normalized = entry.text.trim().to_lowercase();
            if normalized.is_empty() {
                continue;
            }
            if let Some(previous) = last_seen.get(normalized.as_str()) {
                if (entry.start_ms - previous.start_ms).abs() < DUPLICATE_WINDOW_MS {
                    issues.push(LintIssue::new(
                        IssueKind::Duplicate,
                        entry,
                        format!("duplicates entry #{}", previous.index),
                    ));
                }
            }
            last_seen.insert(normalized, entry);
        }

        issues
    }
}
