//! ASS/SSA parsing and serialization
//!
//! ASS scripts carry a styled header (script info, style definitions)
//! followed by an `[Events]` section whose `Format:` line declares the
//! column order for every `Dialogue:` line — the order is not fixed and
//! must be derived per file. The text column absorbs the remainder of the
//! line, so commas inside subtitle text must never be treated as field
//! separators.
//!
//! Everything preceding `[Events]` is kept verbatim as the collection's
//! opaque header for round-trip on save; it is never parsed further. A
//! script missing `[Events]` or its `Format:` line parses to zero entries
//! with only the header populated — degraded, not an error.

use super::{normalize_line_endings, strip_bom, ParseReport};
use crate::model::{Collection, Entry, SubtitleFormat};
use crate::time::{format_timestamp, parse_timestamp, TimeVariant};

/// Canonical column order used when reconstructing `[Events]` on save.
const EVENTS_FORMAT: &str =
    "Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text";

/// Fallback header for collections not loaded from an ASS file.
const DEFAULT_HEADER: &str = "\
[Script Info]
Title: Untitled
ScriptType: v4.00+
WrapStyle: 0
ScaledBorderAndShadow: yes

[V4+ Styles]
Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding
Style: Default,Arial,48,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,0,0,0,0,100,100,0,0,1,2,0,2,10,10,10,1";

/// Positional indices of the columns the engine reads, derived from a
/// per-file `Format:` line.
struct EventColumns {
    start: usize,
    end: usize,
    text: usize,
}

impl EventColumns {
    /// Derive column positions from the comma-separated names after
    /// `Format:`. Names are matched case-insensitively; the text column
    /// must be last of the three or the bounded field split below would
    /// truncate timing fields.
    fn from_format_line(fields: &str) -> Option<Self> {
        let mut start = None;
        let mut end = None;
        let mut text = None;
        for (i, name) in fields.split(',').enumerate() {
            match name.trim().to_ascii_lowercase().as_str() {
                "start" => start = Some(i),
                "end" => end = Some(i),
                "text" => text = Some(i),
                _ => {}
            }
        }
        let (start, end, text) = (start?, end?, text?);
        if start >= text || end >= text {
            return None;
        }
        Some(Self { start, end, text })
    }
}

/// Parse ASS/SSA text into a collection.
pub(crate) fn parse(text: &str, report: &mut ParseReport) -> Collection {
    let normalized = normalize_line_endings(strip_bom(text));
    let lines: Vec<&str> = normalized.lines().collect();

    let events_at = lines
        .iter()
        .position(|line| line.trim().eq_ignore_ascii_case("[events]"));

    let mut collection = Collection::new(SubtitleFormat::Ass);
    let header_lines = events_at.unwrap_or(lines.len());
    let header = lines[..header_lines].join("\n");
    if !header.trim().is_empty() {
        collection.header = Some(header);
    }

    let Some(events_at) = events_at else {
        report.push(1, "no [Events] section");
        return collection;
    };

    // The events section runs until the next bracketed section header.
    let section: Vec<(usize, &str)> = lines[events_at + 1..]
        .iter()
        .enumerate()
        .map(|(i, line)| (events_at + 2 + i, *line))
        .take_while(|(_, line)| !is_section_header(line))
        .collect();

    let columns = section.iter().find_map(|(_, line)| {
        strip_prefix_ci(line, "format:").and_then(EventColumns::from_format_line)
    });
    let Some(columns) = columns else {
        report.push(events_at + 1, "no usable Format: line in [Events]");
        return collection;
    };

    let mut entries = Vec::new();
    for (line_no, line) in &section {
        let Some(fields) = strip_prefix_ci(line, "dialogue:") else {
            continue;
        };
        match parse_dialogue(fields, &columns) {
            Some(entry) => entries.push(entry),
            None => report.skipped(*line_no, "malformed Dialogue: line"),
        }
    }

    collection.replace_entries(entries)
}

fn is_section_header(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with('[') && trimmed.ends_with(']')
}

/// Case-insensitive prefix strip, tolerating leading whitespace.
fn strip_prefix_ci<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let trimmed = line.trim_start();
    let head = trimmed.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &trimmed[prefix.len()..])
}

/// Split a dialogue line into fields, but only as many times as there are
/// columns preceding the text column: the remainder of the line, embedded
/// commas included, is the text field verbatim.
fn parse_dialogue(fields: &str, columns: &EventColumns) -> Option<Entry> {
    let parts: Vec<&str> = fields.splitn(columns.text + 1, ',').collect();
    if parts.len() <= columns.text {
        return None;
    }

    let start_ms = parse_timestamp(parts[columns.start]);
    let end_ms = parse_timestamp(parts[columns.end]);
    let text = parts[columns.text].replace("\\N", "\n");
    if text.trim().is_empty() {
        return None;
    }

    Some(Entry::new(start_ms, end_ms, text))
}

/// Serialize a collection as ASS.
///
/// A preserved header is emitted verbatim (trailing whitespace normalized);
/// collections authored fresh fall back to [`DEFAULT_HEADER`]. `[Events]`
/// is reconstructed with the canonical column order and `\n` re-encoded as
/// the `\N` inline break token.
pub(crate) fn serialize(collection: &Collection) -> String {
    let header = collection.header.as_deref().unwrap_or(DEFAULT_HEADER);

    let mut out = String::from(header.trim_end());
    out.push_str("\n\n[Events]\n");
    out.push_str(EVENTS_FORMAT);
    out.push('\n');

    for entry in &collection.entries {
        let text = entry.text.replace('\n', "\\N");
        out.push_str(&format!(
            "Dialogue: 0,{},{},Default,,0,0,0,,{}\n",
            format_timestamp(entry.start_ms, TimeVariant::Ass),
            format_timestamp(entry.end_ms, TimeVariant::Ass),
            text
        ));
    }
    out
}
