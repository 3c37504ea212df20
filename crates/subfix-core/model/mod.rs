//! Canonical in-memory subtitle model
//!
//! Defines the format-independent [`Entry`] and [`Collection`] value types
//! shared by every parser, serializer, detector and fixer. Timestamps are
//! integer milliseconds regardless of source-format precision; ASS/SSA is
//! centisecond-precision, so round-tripping through this model truncates to
//! 10ms granularity (accepted, documented).
//!
//! Entries are plain data. Transforms never mutate them in place: each
//! operation returns new entries or a new collection.

use core::sync::atomic::{AtomicU64, Ordering};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The three supported subtitle container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SubtitleFormat {
    /// SubRip: numbered blocks of time-range + text
    Srt,
    /// WebVTT: `WEBVTT` header, then cue blocks with optional settings
    WebVtt,
    /// Advanced SubStation Alpha (and legacy SSA): styled script with a
    /// header and an `[Events]` section
    Ass,
}

impl SubtitleFormat {
    /// Canonical lowercase name, matching the common file extension.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Srt => "srt",
            Self::WebVtt => "vtt",
            Self::Ass => "ass",
        }
    }

    /// Look up a format by name or extension (`srt`, `vtt`, `ass`, `ssa`).
    ///
    /// # Errors
    ///
    /// Returns [`crate::EngineError::UnknownFormat`] for anything else.
    pub fn from_name(name: &str) -> crate::Result<Self> {
        match name.trim().trim_start_matches('.').to_ascii_lowercase().as_str() {
            "srt" => Ok(Self::Srt),
            "vtt" | "webvtt" => Ok(Self::WebVtt),
            "ass" | "ssa" => Ok(Self::Ass),
            other => Err(crate::EngineError::UnknownFormat {
                name: other.to_string(),
            }),
        }
    }
}

/// Process-unique, stable entry identifier.
///
/// Assigned once at creation from a global counter and never recomputed,
/// so callers can track an entry across reorderings and repairs. Display
/// position lives in [`Entry::index`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EntryId(pub u64);

static NEXT_ENTRY_ID: AtomicU64 = AtomicU64::new(1);

impl EntryId {
    /// Allocate the next process-unique id.
    fn next() -> Self {
        Self(NEXT_ENTRY_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A single subtitle cue in canonical form.
///
/// `end_ms > start_ms` is expected by most operations but deliberately not
/// enforced here; the lint and fix suites find and repair malformed timing
/// instead of rejecting it at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Entry {
    /// Stable identity, never recomputed
    pub id: EntryId,
    /// 1-based display position; recomputed from array order by [`reindex`],
    /// never trusted as identity
    pub index: usize,
    /// Start time in milliseconds
    pub start_ms: i64,
    /// End time in milliseconds
    pub end_ms: i64,
    /// Cue text; may contain embedded `\n` and format-native inline markup,
    /// preserved verbatim unless a fixer strips it
    pub text: String,
}

impl Entry {
    /// Create an entry with a fresh id. `index` starts at 0 and is assigned
    /// by [`reindex`] once the entry's position in a collection is known.
    #[must_use]
    pub fn new(start_ms: i64, end_ms: i64, text: impl Into<String>) -> Self {
        Self {
            id: EntryId::next(),
            index: 0,
            start_ms,
            end_ms,
            text: text.into(),
        }
    }

    /// Display duration in milliseconds. May be zero or negative for
    /// malformed entries.
    #[must_use]
    pub const fn duration_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }

    /// Copy of this entry with different text, same id and timing.
    #[must_use]
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }

    /// Copy of this entry with different timing, same id and text.
    #[must_use]
    pub fn with_times(&self, start_ms: i64, end_ms: i64) -> Self {
        Self {
            start_ms,
            end_ms,
            ..self.clone()
        }
    }
}

/// An ordered collection of entries plus format metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Collection {
    /// Source (or target) container format
    pub format: SubtitleFormat,
    /// Entries in display order
    pub entries: Vec<Entry>,
    /// For ASS only: every line preceding the `[Events]` section, verbatim.
    /// Opaque; kept solely so styling survives a load/save round-trip.
    pub header: Option<String>,
}

impl Collection {
    /// Empty collection for the given format.
    #[must_use]
    pub const fn new(format: SubtitleFormat) -> Self {
        Self {
            format,
            entries: Vec::new(),
            header: None,
        }
    }

    /// Collection from pre-built entries, reindexed to match array order.
    #[must_use]
    pub fn with_entries(format: SubtitleFormat, entries: Vec<Entry>) -> Self {
        Self {
            format,
            entries: reindex(entries),
            header: None,
        }
    }

    /// Copy of this collection with the given entries, reindexed. Format
    /// and header carry over.
    #[must_use]
    pub fn replace_entries(&self, entries: Vec<Entry>) -> Self {
        Self {
            format: self.format,
            entries: reindex(entries),
            header: self.header.clone(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Recompute 1-based display indices from array order.
///
/// Must follow any operation that removes or reorders entries. Ids are
/// untouched.
#[must_use]
pub fn reindex(entries: Vec<Entry>) -> Vec<Entry> {
    entries
        .into_iter()
        .enumerate()
        .map(|(i, mut entry)| {
            entry.index = i + 1;
            entry
        })
        .collect()
}
