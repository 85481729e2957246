//! Unified error types for eventide.
//!
//! Only data-integrity failures are errors here. "Not ready yet" conditions
//! (unknown deployment id, undiscovered unit or zone, incomplete range) are
//! expected steady-state outcomes and are encoded in return values instead.

use thiserror::Error;

/// All eventide errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A raw log line did not contain the expected `" - "` separator and
    /// could not be translated. Surfaced to the watcher synchronously; the
    /// watcher decides whether to drop the single line or halt.
    #[error("malformed log line, missing \" - \" separator: {line:?}")]
    MalformedLine {
        /// The offending raw line, unmodified.
        line: String,
    },
}

/// Result alias used throughout eventide.
pub type Result<T> = std::result::Result<T, Error>;
