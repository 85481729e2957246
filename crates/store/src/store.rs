//! Sharded multi-deployment event store
//!
//! DashMap keyed by deployment id, one [`EventSequence`] per deployment.
//!
//! # Design
//!
//! - DashMap: sharded by default, lock-free reads
//! - Per-DeploymentId: natural partitioning, no cross-deployment contention
//! - FxHashMap inside each sequence: O(1) index lookups
//!
//! # Thread Safety
//!
//! All operations are safe from any number of concurrent callers:
//! - `put()`: locks only the target deployment's entry
//! - `extract()`/`is_complete()`: read guard on the target entry only
//! - Different deployments never contend
//!
//! Readers may observe more events between an `is_complete` and a
//! subsequent `extract` on the same range, never fewer, and never a
//! different event at an already-returned index (insert-once invariant).

use crate::sequence::EventSequence;
use dashmap::DashMap;
use eventide_core::{DeploymentId, Event, Range};

/// Concurrently-writable store of per-deployment event sequences.
///
/// # Example
///
/// ```
/// use eventide_core::{DeploymentId, Event, Range};
/// use eventide_store::EventStore;
///
/// let store = EventStore::new();
/// let deployment = DeploymentId::from("op-42");
///
/// store.put(&deployment, Event::new(0, "[h1/10.0.0.1] - Starting service"));
/// assert!(store.is_complete(&deployment, Range::new(0, 0)));
/// ```
pub struct EventStore {
    sequences: DashMap<DeploymentId, EventSequence>,
}

impl EventStore {
    /// Create an empty store.
    pub fn new() -> Self {
        EventStore {
            sequences: DashMap::new(),
        }
    }

    /// Create with capacity for an expected number of live deployments.
    pub fn with_capacity(deployments: usize) -> Self {
        EventStore {
            sequences: DashMap::with_capacity(deployments),
        }
    }

    /// Insert `event` into the sequence owned by `deployment`.
    ///
    /// The sequence is created lazily on first use. Insertion is insert-once:
    /// `true` means the event was stored, `false` means the index was already
    /// filled and the event was discarded (first-writer-wins). Duplicate
    /// delivery from a re-tailed log is expected; a `false` here is an
    /// idempotent no-op, never an error.
    ///
    /// Writers for different deployments never contend; writers for the same
    /// deployment serialize only on that deployment's entry.
    pub fn put(&self, deployment: &DeploymentId, event: Event) -> bool {
        let index = event.index;
        let stored = self
            .sequences
            .entry(deployment.clone())
            .or_default()
            .insert(event);
        if !stored {
            tracing::debug!(%deployment, index, "duplicate index ignored");
        }
        stored
    }

    /// Every present event with index in `range`, ascending by index.
    ///
    /// Never blocks and never errors: missing indices are omitted, and an
    /// unknown deployment yields an empty result. Whether the page is fit to
    /// hand to a client is decided by [`EventStore::is_complete`], not here.
    pub fn extract(&self, deployment: &DeploymentId, range: Range) -> Vec<Event> {
        self.sequences
            .get(deployment)
            .map(|seq| seq.extract(range))
            .unwrap_or_default()
    }

    /// Whether every index in `range` is present for `deployment`.
    ///
    /// The authoritative gate a consumer must pass before treating an
    /// [`EventStore::extract`] result as final. Degenerate ranges
    /// (`from > to`) are vacuously complete even for unknown deployments;
    /// any proper range against an unknown deployment is incomplete.
    pub fn is_complete(&self, deployment: &DeploymentId, range: Range) -> bool {
        if range.is_degenerate() {
            return true;
        }
        self.sequences
            .get(deployment)
            .map(|seq| seq.is_complete(range))
            .unwrap_or(false)
    }

    /// Drop the whole sequence for `deployment`.
    ///
    /// Retention policy is owned by the caller: this is invoked once a
    /// deployment is confirmed fully undeployed or its retention window
    /// lapses. Returns whether a sequence existed.
    pub fn evict(&self, deployment: &DeploymentId) -> bool {
        let existed = self.sequences.remove(deployment).is_some();
        if existed {
            tracing::debug!(%deployment, "evicted event sequence");
        }
        existed
    }

    /// Number of deployments with a live sequence.
    pub fn deployment_count(&self) -> usize {
        self.sequences.len()
    }

    /// Number of events stored for `deployment` (0 if unknown).
    pub fn event_count(&self, deployment: &DeploymentId) -> usize {
        self.sequences
            .get(deployment)
            .map(|seq| seq.len())
            .unwrap_or(0)
    }

    /// Ids of all deployments with a live sequence.
    pub fn deployments(&self) -> Vec<DeploymentId> {
        self.sequences.iter().map(|e| e.key().clone()).collect()
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventStore")
            .field("deployment_count", &self.deployment_count())
            .finish()
    }
}


#[cfg(test)]
mod props {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn event(index: u64) -> Event {
        Event::with_timestamp(index, format!("event {index}"), 0)
    }

    proptest! {
        /// extract length equals the range span exactly when is_complete.
        #[test]
        fn complete_iff_extract_fills_span(
            indices in proptest::collection::btree_set(0u64..64, 0..40),
            from in 0u64..64,
            to in 0u64..64,
        ) {
            let store = EventStore::new();
            let deployment = DeploymentId::from("prop");
            for &index in &indices {
                store.put(&deployment, event(index));
            }

            let range = Range::new(from, to);
            let extracted = store.extract(&deployment, range);
            prop_assert_eq!(
                store.is_complete(&deployment, range),
                extracted.len() as u64 == range.span()
            );
        }

        /// extract returns exactly the stored indices in range, ascending.
        #[test]
        fn extract_is_sorted_intersection(
            indices in proptest::collection::btree_set(0u64..64, 0..40),
            from in 0u64..64,
            to in 0u64..64,
        ) {
            let store = EventStore::new();
            let deployment = DeploymentId::from("prop");
            for &index in &indices {
                store.put(&deployment, event(index));
            }

            let extracted = store.extract(&deployment, Range::new(from, to));
            let got: Vec<u64> = extracted.iter().map(|e| e.index).collect();
            let expected: Vec<u64> = indices
                .iter()
                .copied()
                .filter(|i| (from..=to).contains(i))
                .collect();
            prop_assert_eq!(got, expected);
        }

        /// Replaying any permutation of duplicates never changes the winner.
        #[test]
        fn duplicates_never_overwrite(replays in 1usize..5) {
            let store = EventStore::new();
            let deployment = DeploymentId::from("prop");

            store.put(&deployment, Event::with_timestamp(0, "original", 0));
            for attempt in 0..replays {
                store.put(
                    &deployment,
                    Event::with_timestamp(0, format!("replay {attempt}"), 0),
                );
            }

            let extracted = store.extract(&deployment, Range::new(0, 0));
            prop_assert_eq!(extracted[0].description.as_str(), "original");
        }

        /// Completeness is monotone: once true, further writes keep it true.
        #[test]
        fn completeness_monotone(
            base in proptest::collection::btree_set(0u64..32, 0..20),
            extra in proptest::collection::btree_set(0u64..32, 0..20),
        ) {
            let store = EventStore::new();
            let deployment = DeploymentId::from("prop");
            for &index in &base {
                store.put(&deployment, event(index));
            }

            let complete_before: Vec<Range> = (0..32u64)
                .flat_map(|from| (from..32).map(move |to| Range::new(from, to)))
                .filter(|r| store.is_complete(&deployment, *r))
                .collect();

            let union: BTreeSet<u64> = base.union(&extra).copied().collect();
            for &index in &union {
                store.put(&deployment, event(index));
            }

            for range in complete_before {
                prop_assert!(store.is_complete(&deployment, range));
            }
        }
    }
}
