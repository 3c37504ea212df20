//! SRT (SubRip) parsing and serialization
//!
//! SRT files are blank-line-delimited blocks: an index line, a
//! `start --> end` time-range line, then text lines. The parser is tolerant
//! of a missing or malformed index line: it keys on the `-->` separator
//! instead. Blocks without a time-range line, or with empty trimmed text,
//! are dropped.
//!
//! WebVTT cue bodies share this shape, so the block scanner here is reused
//! by the WebVTT parser with one difference (cue-setting discard).

use super::{normalize_line_endings, strip_bom, ParseReport};
use crate::model::{Collection, Entry, SubtitleFormat};
use crate::time::{format_timestamp, parse_timestamp, TimeVariant};

/// Parse SRT text into a collection.
pub(crate) fn parse(text: &str, report: &mut ParseReport) -> Collection {
    let normalized = normalize_line_endings(strip_bom(text));
    let entries = parse_time_blocks(&normalized, 1, false, report);
    Collection::with_entries(SubtitleFormat::Srt, entries)
}

/// Serialize a collection as SRT.
///
/// Output index numbers are regenerated from array position; the stored
/// `index` field is never consulted. Serialization order is authoritative.
pub(crate) fn serialize(collection: &Collection) -> String {
    let mut out = String::new();
    for (i, entry) in collection.entries.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "{}\n{} --> {}\n{}\n",
            i + 1,
            format_timestamp(entry.start_ms, TimeVariant::Srt),
            format_timestamp(entry.end_ms, TimeVariant::Srt),
            entry.text
        ));
    }
    out
}

/// Scan blank-line-delimited blocks for `-->` time-range lines.
///
/// `first_line` is the 1-based line number of the first line of `text` in
/// the original source, so reports point at real positions even after the
/// WebVTT header has been cut off. When `discard_cue_settings` is set, only
/// the first whitespace-delimited token after `-->` is the end time;
/// anything after it (WebVTT cue settings) is dropped.
pub(crate) fn parse_time_blocks(
    text: &str,
    first_line: usize,
    discard_cue_settings: bool,
    report: &mut ParseReport,
) -> Vec<Entry> {
    let mut entries = Vec::new();
    let mut block: Vec<&str> = Vec::new();
    let mut block_start = first_line;

    for (offset, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            if !block.is_empty() {
                entries.extend(parse_block(&block, block_start, discard_cue_settings, report));
                block.clear();
            }
        } else {
            if block.is_empty() {
                block_start = first_line + offset;
            }
            block.push(line);
        }
    }
    if !block.is_empty() {
        entries.extend(parse_block(&block, block_start, discard_cue_settings, report));
    }

    entries
}

/// Parse one block. Returns `None` (and reports) when the block has no
/// time-range line or no text.
fn parse_block(
    block: &[&str],
    block_start: usize,
    discard_cue_settings: bool,
    report: &mut ParseReport,
) -> Option<Entry> {
    let arrow_pos = block.iter().position(|line| line.contains("-->"));
    let Some(arrow_pos) = arrow_pos else {
        report.skipped(block_start, "block has no time-range line");
        return None;
    };

    let (start_token, end_part) = block[arrow_pos]
        .split_once("-->")
        .unwrap_or((block[arrow_pos], ""));
    let end_token = if discard_cue_settings {
        end_part.split_whitespace().next().unwrap_or("")
    } else {
        end_part.trim()
    };

    let time_line = block_start + arrow_pos;
    let start_ms = parse_checked(start_token, time_line, report);
    let end_ms = parse_checked(end_token, time_line, report);

    let text = block[arrow_pos + 1..].join("\n");
    let text = text.trim();
    if text.is_empty() {
        report.skipped(block_start, "block has no text");
        return None;
    }

    Some(Entry::new(start_ms, end_ms, text))
}

/// Parse a timestamp token, reporting when the silent zero fallback fired
/// for something that clearly wasn't a zero timestamp.
fn parse_checked(token: &str, line: usize, report: &mut ParseReport) -> i64 {
    let ms = parse_timestamp(token);
    if ms == 0 && !token.trim_start().starts_with('0') {
        report.push(line, format!("unparsable timestamp {token:?}, fell back to 0"));
    }
    ms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats;
    use crate::model::SubtitleFormat;

    const SAMPLE: &str = "1\n00:00:01,000 --> 00:00:03,000\nHello\n\n2\n00:00:04,000 --> 00:00:06,000\nWorld\nagain\n";

    #[test]
    fn parses_blocks_with_multiline_text() {
        let collection = formats::parse(SAMPLE, SubtitleFormat::Srt);
        assert_eq!(collection.entries.len(), 2);
        assert_eq!(collection.entries[0].text, "Hello");
        assert_eq!(collection.entries[1].text, "World\nagain");
        assert_eq!(collection.entries[1].start_ms, 4_000);
        assert_eq!(collection.entries[1].index, 2);
    }

    #[test]
    fn tolerates_missing_index_line() {
        let src = "00:00:01,000 --> 00:00:02,000\nNo index here\n";
        let collection = formats::parse(src, SubtitleFormat::Srt);
        assert_eq!(collection.entries.len(), 1);
        assert_eq!(collection.entries[0].text, "No index here");
    }

    #[test]
    fn drops_blocks_without_time_range() {
        let src = "1\njust some text\n\n2\n00:00:01,000 --> 00:00:02,000\nkept\n";
        let (collection, report) = formats::parse_with_report(src, SubtitleFormat::Srt);
        assert_eq!(collection.entries.len(), 1);
        assert_eq!(report.skipped_blocks, 1);
    }

    #[test]
    fn drops_blocks_with_empty_text() {
        let src = "1\n00:00:01,000 --> 00:00:02,000\n\n\n2\n00:00:03,000 --> 00:00:04,000\nkept\n";
        let collection = formats::parse(src, SubtitleFormat::Srt);
        assert_eq!(collection.entries.len(), 1);
        assert_eq!(collection.entries[0].text, "kept");
    }

    #[test]
    fn handles_crlf_line_endings() {
        let src = "1\r\n00:00:01,000 --> 00:00:02,000\r\nwindows\r\n";
        let collection = formats::parse(src, SubtitleFormat::Srt);
        assert_eq!(collection.entries.len(), 1);
        assert_eq!(collection.entries[0].text, "windows");
    }

    #[test]
    fn malformed_timestamp_falls_back_to_zero_with_report() {
        let src = "1\nbogus --> 00:00:02,000\ntext\n";
        let (collection, report) = formats::parse_with_report(src, SubtitleFormat::Srt);
        assert_eq!(collection.entries[0].start_ms, 0);
        assert_eq!(collection.entries[0].end_ms, 2_000);
        assert!(!report.issues.is_empty());
    }

    #[test]
    fn serializes_with_positional_indices() {
        let mut collection = formats::parse(SAMPLE, SubtitleFormat::Srt);
        // Stored indices are stale on purpose; output must ignore them.
        collection.entries[0].index = 99;
        let out = formats::serialize(&collection, SubtitleFormat::Srt);
        assert!(out.starts_with("1\n00:00:01,000 --> 00:00:03,000\nHello\n"));
        assert!(out.contains("\n2\n00:00:04,000 --> 00:00:06,000\nWorld\nagain\n"));
    }
}
