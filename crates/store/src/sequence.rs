//! One deployment's sparse event sequence
//!
//! Indices are producer-assigned and arrive in no particular order, so the
//! sequence is a plain hash map from index to event plus a watermark that
//! tracks how far the sequence is contiguously filled from index 0.
//!
//! # Watermark
//!
//! `filled_prefix` is the smallest index with no event yet: every index
//! below it is present. Producers assign indices monotonically from 0, so
//! once the watchers catch up the watermark covers the whole sequence and
//! `is_complete` answers in O(1) without rescanning the range. Only ranges
//! reaching past the watermark fall back to a bounded scan.

use eventide_core::{Event, Range};
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// A sparse, insert-once sequence of events for a single deployment.
///
/// Not internally synchronized; [`crate::EventStore`] guards each sequence
/// behind its deployment's shard.
#[derive(Debug, Default)]
pub struct EventSequence {
    /// Index to event. Keys need not be contiguous at any point in time.
    events: FxHashMap<u64, Event>,
    /// All indices strictly below this are present.
    filled_prefix: u64,
}

impl EventSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `event` at its index, unless that index is already filled.
    ///
    /// First writer wins: a later insert for an occupied index is a no-op
    /// returning `false`. Duplicate delivery from a re-tailed log is
    /// expected, so this is an idempotence guarantee, not an error path.
    pub fn insert(&mut self, event: Event) -> bool {
        match self.events.entry(event.index) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(event);
                // Advance the watermark over every newly contiguous index.
                while self.events.contains_key(&self.filled_prefix) {
                    self.filled_prefix += 1;
                }
                true
            }
        }
    }

    /// All present events with index in `range`, ascending by index.
    ///
    /// Missing indices are simply omitted; the result may be shorter than
    /// `range.span()`. Completeness is a separate, explicit check.
    pub fn extract(&self, range: Range) -> Vec<Event> {
        range
            .indices()
            .filter_map(|index| self.events.get(&index).cloned())
            .collect()
    }

    /// Whether every index in `range` is present.
    ///
    /// Degenerate ranges (`from > to`) are vacuously complete.
    pub fn is_complete(&self, range: Range) -> bool {
        if range.is_degenerate() {
            return true;
        }
        if range.to < self.filled_prefix {
            return true;
        }
        // Scan only the part the watermark does not cover.
        (range.from.max(self.filled_prefix)..=range.to)
            .all(|index| self.events.contains_key(&index))
    }

    /// Number of events stored so far.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the sequence holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The contiguous-prefix watermark: every index below it is present.
    pub fn filled_prefix(&self) -> u64 {
        self.filled_prefix
    }
}
