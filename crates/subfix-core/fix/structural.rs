//! Structural and text cleanup fixers.

use ahash::AHashMap;

use crate::lint::rules::duplicate::DUPLICATE_WINDOW_MS;
use crate::model::Collection;
use crate::text::{is_hearing_impaired, strip_annotations, strip_tags};

/// Drop entries whose trimmed text is empty, then reindex.
#[must_use]
pub fn remove_empty(collection: &Collection) -> Collection {
    let kept = collection
        .entries
        .iter()
        .filter(|entry| !entry.text.trim().is_empty())
        .cloned()
        .collect();
    collection.replace_entries(kept)
}

/// Drop entries duplicating the most recently seen entry with the same
/// normalized text within 500ms, then reindex.
///
/// Mirrors the duplicate detector's single-previous-match rule, including
/// its map update for every occurrence: a removed entry still becomes the
/// comparison point for the next one. This is the bounded limitation that
/// keeps the fixer from being strictly idempotent on pathological repeat
/// chains.
#[must_use]
pub fn remove_duplicates(collection: &Collection) -> Collection {
    let mut kept = Vec::with_capacity(collection.entries.len());
    let mut last_seen: AHashMap<String, i64> = AHashMap::new();

    for entry in &collection.entries {
        let normalized = entry.text.trim().to_lowercase();
        if normalized.is_empty() {
            kept.push(entry.clone());
            continue;
        }
        let duplicate = last_seen
            .get(normalized.as_str())
            .is_some_and(|&previous| (entry.start_ms - previous).abs() < DUPLICATE_WINDOW_MS);
        last_seen.insert(normalized, entry.start_ms);
        if !duplicate {
            kept.push(entry.clone());
        }
    }

    collection.replace_entries(kept)
}

/// Strip inline markup (`<...>` tags and `{...}` override blocks) from
/// every entry's text.
#[must_use]
pub fn strip_formatting_tags(collection: &Collection) -> Collection {
    let stripped = collection
        .entries
        .iter()
        .map(|entry| entry.with_text(strip_tags(&entry.text).trim()))
        .collect();
    collection.replace_entries(stripped)
}

/// Conservative two-stage hearing-impaired repair.
///
/// Stage one removes bracket and parenthetical substrings and trims, so an
/// entry mixing an annotation with real dialogue keeps the dialogue. Stage
/// two drops entries whose remaining text is empty or still matches a
/// whole-text hearing-impaired pattern (musical cues, dash variants).
#[must_use]
pub fn strip_hearing_impaired(collection: &Collection) -> Collection {
    let mut kept = Vec::with_capacity(collection.entries.len());
    for entry in &collection.entries {
        let cleaned = strip_annotations(&entry.text);
        let cleaned = cleaned.trim();
        if cleaned.is_empty() || is_hearing_impaired(cleaned) {
            continue;
        }
        kept.push(entry.with_text(cleaned));
    }
    collection.replace_entries(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Entry, SubtitleFormat};

    fn collection(entries: Vec<Entry>) -> Collection {
        Collection::with_entries(SubtitleFormat::Srt, entries)
    }

    #[test]
    fn remove_empty_drops_and_reindexes() {
        let fixed = remove_empty(&collection(vec![
            Entry::new(0, 1_000, "keep"),
            Entry::new(2_000, 3_000, " \n "),
            Entry::new(4_000, 5_000, "also keep"),
        ]));
        assert_eq!(fixed.len(), 2);
        assert_eq!(fixed.entries[1].index, 2);
        assert_eq!(fixed.entries[1].text, "also keep");
    }

    #[test]
    fn remove_duplicates_keeps_first_occurrence() {
        let fixed = remove_duplicates(&collection(vec![
            Entry::new(1_000, 2_000, "Hello"),
            Entry::new(1_200, 2_200, "HELLO"),
            Entry::new(9_000, 10_000, "Hello"),
        ]));
        assert_eq!(fixed.len(), 2);
        assert_eq!(fixed.entries[0].start_ms, 1_000);
        assert_eq!(fixed.entries[1].start_ms, 9_000);
    }

    #[test]
    fn strip_formatting_tags_keeps_plain_text() {
        let fixed = strip_formatting_tags(&collection(vec![Entry::new(
            0,
            1_000,
            "<b>Bold</b> and {\\i1}slanted{\\i0}",
        )]));
        assert_eq!(fixed.entries[0].text, "Bold and slanted");
    }

    #[test]
    fn hearing_impaired_mixed_dialogue_survives() {
        let fixed = strip_hearing_impaired(&collection(vec![
            Entry::new(0, 1_000, "[door slams] Who's there?"),
            Entry::new(2_000, 3_000, "[Music]"),
            Entry::new(4_000, 5_000, "♪ la la ♪"),
            Entry::new(6_000, 7_000, "Plain dialogue"),
        ]));
        assert_eq!(fixed.len(), 2);
        assert_eq!(fixed.entries[0].text, "Who's there?");
        assert_eq!(fixed.entries[1].text, "Plain dialogue");
    }

    #[test]
    fn whole_annotation_entry_is_removed() {
        let before = collection(vec![
            Entry::new(0, 1_000, "[Music]"),
            Entry::new(2_000, 3_000, "kept"),
        ]);
        let fixed = strip_hearing_impaired(&before);
        assert_eq!(fixed.len(), before.len() - 1);
    }
}
