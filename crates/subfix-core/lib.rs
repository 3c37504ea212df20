//! # subfix-core
//!
//! Subtitle parsing, conversion, quality-control and auto-repair engine.
//! Converts between SRT, WebVTT and ASS/SSA, evaluates readability and
//! timing against configurable threshold profiles, and applies an ordered
//! pipeline of deterministic repairs for common authoring errors.
//!
//! ## Design
//!
//! - **Canonical model**: millisecond-precision [`Entry`] values independent
//!   of the source format; ASS centisecond precision truncates to 10ms on
//!   round-trip by design.
//! - **Pure transforms**: every detector and fixer takes references and
//!   returns new values. Nothing is mutated in place, so a collection can be
//!   shared across callers without locks.
//! - **Soft failure**: malformed timestamps parse to `0`, unparsable blocks
//!   are dropped, and a degraded ASS parse yields zero entries. The engine
//!   never aborts on bad input; anomalies surface through QC and lint.
//!
//! ## Quick start
//!
//! ```rust
//! use subfix_core::{formats, lint, fix, qc};
//!
//! let src = "1\n00:00:01,000 --> 00:00:03,000\nHello\n\n2\n00:00:02,000 --> 00:00:05,000\nWorld\n";
//! let collection = formats::parse_auto(src);
//! assert_eq!(collection.entries.len(), 2);
//!
//! let issues = lint::detect_all_errors(&collection, &lint::LintConfig::default());
//! assert!(issues.iter().any(|i| i.kind == lint::IssueKind::Overlap));
//!
//! let repaired = fix::fix_all(&collection, &fix::FixConfig::default());
//! let srt = formats::serialize(&repaired, subfix_core::SubtitleFormat::Srt);
//! assert!(srt.starts_with("1\n"));
//! # let _ = qc::ThresholdProfile::default_profile();
//! ```

#![deny(clippy::all)]
#![deny(unsafe_code)]

pub mod error;
pub mod fix;
pub mod formats;
pub mod lint;
pub mod model;
pub mod qc;
pub mod text;
pub mod time;

pub use error::EngineError;
pub use model::{Collection, Entry, EntryId, SubtitleFormat};

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Convenience alias for engine results.
pub type Result<T> = core::result::Result<T, EngineError>;
