//! The lifecycle event value type

use serde::{Deserialize, Serialize};

/// One structured lifecycle event, produced from a raw worker log line.
///
/// Events are immutable once stored. Each event carries:
/// - A producer-assigned sequence index, unique within its deployment.
///   The index establishes the canonical event order; arrival order across
///   producers is unspecified and must never be relied upon.
/// - A human-readable description, already prefixed with the worker host
///   identity (`"[host/address] - ..."`).
/// - An assignment timestamp, used only for diagnostics, never ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Sequence index within the owning deployment (producer-assigned).
    pub index: u64,
    /// Host-prefixed, human-readable event text.
    pub description: String,
    /// Assignment time, milliseconds since epoch. Diagnostic only.
    pub timestamp: i64,
}

impl Event {
    /// Create an event at `index`, stamped with the current time.
    pub fn new(index: u64, description: impl Into<String>) -> Self {
        Event {
            index,
            description: description.into(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Create an event with an explicit timestamp (replay, tests).
    pub fn with_timestamp(index: u64, description: impl Into<String>, timestamp: i64) -> Self {
        Event {
            index,
            description: description.into(),
            timestamp,
        }
    }
}
