//! # Eventide
//!
//! Deployment lifecycle event aggregation with range-complete polling.
//!
//! Many independent workers belonging to a distributed deployment emit
//! lifecycle progress as free-text log lines. Eventide normalizes those
//! lines into structured, sequence-indexed events and serves range-bounded
//! reads of the sequence to polling clients, guaranteeing that a returned
//! page has no holes: either every index in the requested window is present,
//! or the caller is told the range is not yet complete and retries.
//!
//! ## Quick Start
//!
//! ```
//! use eventide::prelude::*;
//!
//! let store = EventStore::new();
//! let deployment = DeploymentId::from("op-42");
//!
//! // A log watcher translates a raw line and stores it at its index.
//! let description = translate(
//!     "2024-01-01 10:00:00 - org.foo.USMEventLogger.Starting service",
//!     "h1",
//!     "10.0.0.1",
//! ).unwrap();
//! store.put(&deployment, Event::new(0, description));
//!
//! // A polling client asks for a window; pages with holes are never returned.
//! match poll(&store, &deployment, Range::new(0, 0), CorrelationId::new()) {
//!     PollOutcome::Complete(events) => assert_eq!(events.len(), 1),
//!     PollOutcome::Incomplete => unreachable!(),
//! }
//! ```
//!
//! ## Pieces
//!
//! - [`translate`] - raw log line + host identity to event description
//! - [`classify`] / [`workers_for_deployment`] / [`workers_for_undeployment`]
//!   - resolve operation ids against the live [`TopologyView`]
//! - [`EventStore`] - concurrent, per-deployment sparse event sequences
//! - [`poll`] - the non-blocking completeness-gated page read
//!
//! Transport (REST long-polling, backoff) and log tailing are external:
//! eventide is the library-level contract between them.

#![warn(missing_docs)]

mod poller;

pub mod prelude;

pub use poller::{poll, PollOutcome};

// Re-export the crate surface at the root, the way consumers use it.
pub use eventide_core::{
    CorrelationId, DeploymentId, Error, Event, OperationKind, Range, Result, TopologyView, Unit,
    Worker,
};
pub use eventide_ingest::{
    classify, translate, workers_for_deployment, workers_for_undeployment,
    LIFECYCLE_LOGGER_PATTERN,
};
pub use eventide_store::EventStore;
