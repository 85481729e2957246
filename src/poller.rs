//! Completeness-gated range polling
//!
//! The poller is deliberately non-blocking: it decouples completeness
//! detection (pure data, lives here) from waiting policy (I/O, lives in the
//! transport). A transport that wants long-poll semantics loops on
//! [`poll`] with its own deadline and backoff.

use eventide_core::{CorrelationId, DeploymentId, Event, Range};
use eventide_store::EventStore;

/// Outcome of one poll attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// Every index in the requested range was present; the page has no holes.
    Complete(Vec<Event>),
    /// At least one index is still missing. Retry later; acting on partial
    /// data is exactly what this outcome exists to prevent.
    Incomplete,
}

impl PollOutcome {
    /// Whether the poll returned a complete page.
    pub fn is_complete(&self) -> bool {
        matches!(self, PollOutcome::Complete(_))
    }
}

/// Return the full page of events in `range`, or signal that it is not yet
/// completely available.
///
/// Checks [`EventStore::is_complete`] first and only then extracts, so a
/// returned page never has holes. Events may keep landing between the check
/// and the extraction; that can only add data outside the already-complete
/// range, never remove or change events inside it (insert-once invariant),
/// so the page stays valid.
///
/// `correlation` is supplied by the caller (one per client request) and
/// appears in the diagnostic logs of both outcomes.
pub fn poll(
    store: &EventStore,
    deployment: &DeploymentId,
    range: Range,
    correlation: CorrelationId,
) -> PollOutcome {
    if store.is_complete(deployment, range) {
        let events = store.extract(deployment, range);
        tracing::debug!(
            %correlation,
            %deployment,
            %range,
            count = events.len(),
            "serving complete event page"
        );
        PollOutcome::Complete(events)
    } else {
        tracing::debug!(%correlation, %deployment, %range, "range not yet complete");
        PollOutcome::Incomplete
    }
}
