//! WebVTT parsing and serialization
//!
//! WebVTT is the SRT block shape behind a `WEBVTT` header: everything up to
//! and including the first blank line is header/metadata and is cut off
//! before block scanning. The one cue-level difference from SRT is that the
//! time-range line may carry cue settings (positioning) after the end
//! timestamp; only the first whitespace-delimited token after `-->` is the
//! end time.

use super::{normalize_line_endings, srt::parse_time_blocks, strip_bom, ParseReport};
use crate::model::{Collection, Entry, SubtitleFormat};
use crate::time::{format_timestamp, TimeVariant};

/// Parse WebVTT text into a collection.
pub(crate) fn parse(text: &str, report: &mut ParseReport) -> Collection {
    let normalized = normalize_line_endings(strip_bom(text));
    let entries = parse_body(&normalized, report);
    Collection::with_entries(SubtitleFormat::WebVtt, entries)
}

fn parse_body(normalized: &str, report: &mut ParseReport) -> Vec<Entry> {
    let lines: Vec<&str> = normalized.lines().collect();
    let Some(blank) = lines.iter().position(|line| line.trim().is_empty()) else {
        report.push(1, "no blank line terminating the WEBVTT header");
        return Vec::new();
    };

    let body = lines[blank + 1..].join("\n");
    parse_time_blocks(&body, blank + 2, true, report)
}

/// Serialize a collection as WebVTT. Cue numbers are regenerated from array
/// position.
pub(crate) fn serialize(collection: &Collection) -> String {
    let mut out = String::from("WEBVTT\n\n");
    for (i, entry) in collection.entries.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "{}\n{} --> {}\n{}\n",
            i + 1,
            format_timestamp(entry.start_ms, TimeVariant::WebVtt),
            format_timestamp(entry.end_ms, TimeVariant::WebVtt),
            entry.text
        ));
    }
    out
}
