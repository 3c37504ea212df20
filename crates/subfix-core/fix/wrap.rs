//! Line rewrapping fixer.

use crate::model::Collection;
use crate::text::wrap_text;

/// Greedy word-wrap for entries with any line over `max_chars_per_line`.
///
/// Breaks only at whitespace; a single word longer than the threshold is
/// left intact and over-length rather than split mid-word. Entries whose
/// lines already fit are untouched.
#[must_use]
pub fn rewrap_long_lines(collection: &Collection, max_chars_per_line: usize) -> Collection {
    let entries = collection
        .entries
        .iter()
        .map(|entry| {
            let wrapped = wrap_text(&entry.text, max_chars_per_line);
            if wrapped == entry.text {
                entry.clone()
            } else {
                entry.with_text(wrapped)
            }
        })
        .collect();
    collection.replace_entries(entries)
}
