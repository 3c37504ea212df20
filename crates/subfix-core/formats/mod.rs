//! Format detection, parsing and serialization
//!
//! Three format-specific transforms between raw text and the canonical
//! model, plus content- and filename-based detection. Conversion between
//! formats is parse-then-serialize; the engine carries no per-format state
//! beyond the ASS header blob.
//!
//! Parsing never fails: malformed blocks are dropped, malformed timestamps
//! fall back to zero, and a degraded ASS parse yields zero entries. Callers
//! that want visibility into those soft failures use [`parse_with_report`],
//! which collects non-fatal [`ParseIssue`]s alongside the same result.

use crate::model::{Collection, SubtitleFormat};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod ass;
pub mod srt;
pub mod webvtt;

/// A non-fatal problem encountered while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParseIssue {
    /// 1-based line number in the normalized source
    pub line: usize,
    /// Human-readable description
    pub message: String,
}

/// Everything the silent parse contract swallows: skipped blocks, timestamp
/// fallbacks, missing sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParseReport {
    /// Issues in source order
    pub issues: Vec<ParseIssue>,
    /// Number of blocks dropped without producing an entry
    pub skipped_blocks: usize,
}

impl ParseReport {
    pub(crate) fn push(&mut self, line: usize, message: impl Into<String>) {
        self.issues.push(ParseIssue {
            line,
            message: message.into(),
        });
    }

    pub(crate) fn skipped(&mut self, line: usize, message: impl Into<String>) {
        self.skipped_blocks += 1;
        self.push(line, message);
    }
}

/// Normalize `\r\n` and lone `\r` line endings to `\n`.
#[must_use]
pub(crate) fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Strip a leading UTF-8 byte order mark, if present.
#[must_use]
pub(crate) fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{FEFF}').unwrap_or(text)
}

/// Sniff the subtitle format from content.
///
/// A leading `WEBVTT` token (after BOM and whitespace) wins; ASS section
/// markers come next; SRT is the fallback, since it has no unique
/// signature.
#[must_use]
pub fn detect_from_content(text: &str) -> SubtitleFormat {
    let text = strip_bom(text).trim_start();
    if text.starts_with("WEBVTT") {
        return SubtitleFormat::WebVtt;
    }
    const ASS_MARKERS: [&str; 4] = ["[Script Info]", "[V4+ Styles]", "[V4 Styles]", "[Events]"];
    if ASS_MARKERS.iter().any(|marker| text.contains(marker)) {
        return SubtitleFormat::Ass;
    }
    SubtitleFormat::Srt
}

/// Infer the format from a filename extension. Anything but `.vtt`, `.ass`
/// and `.ssa` maps to SRT.
#[must_use]
pub fn detect_from_filename(name: &str) -> SubtitleFormat {
    match name
        .rsplit('.')
        .next()
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("vtt") => SubtitleFormat::WebVtt,
        Some("ass" | "ssa") => SubtitleFormat::Ass,
        _ => SubtitleFormat::Srt,
    }
}

/// Parse text in the given format. Total: the worst case is an empty
/// collection.
#[must_use]
pub fn parse(text: &str, format: SubtitleFormat) -> Collection {
    parse_with_report(text, format).0
}

/// Parse text, auto-detecting the format from content.
#[must_use]
pub fn parse_auto(text: &str) -> Collection {
    parse(text, detect_from_content(text))
}

/// Parse text and report every soft failure the silent contract swallows.
#[must_use]
pub fn parse_with_report(text: &str, format: SubtitleFormat) -> (Collection, ParseReport) {
    let mut report = ParseReport::default();
    let collection = match format {
        SubtitleFormat::Srt => srt::parse(text, &mut report),
        SubtitleFormat::WebVtt => webvtt::parse(text, &mut report),
        SubtitleFormat::Ass => ass::parse(text, &mut report),
    };
    (collection, report)
}

/// Serialize a collection into the target format, which may differ from the
/// source format.
#[must_use]
pub fn serialize(collection: &Collection, target: SubtitleFormat) -> String {
    match target {
        SubtitleFormat::Srt => srt::serialize(collection),
        SubtitleFormat::WebVtt => webvtt::serialize(collection),
        SubtitleFormat::Ass => ass::serialize(collection),
    }
}
