//! Error types for subfix-core
//!
//! The engine's transforms are total: parsers, detectors and fixers accept
//! any input shape and fail soft (zero timestamps, dropped blocks, empty
//! collections). The only fallible seams are lookups by caller-supplied
//! name, which return [`EngineError`].

use thiserror::Error;

/// Error type for the engine's fallible lookup operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Threshold profile id did not match any preset
    #[error("unknown threshold profile: {id}")]
    UnknownProfile { id: String },

    /// Format name did not match any supported subtitle format
    #[error("unknown subtitle format: {name}")]
    UnknownFormat { name: String },
}
