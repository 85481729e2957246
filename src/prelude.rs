//! Convenience re-exports for eventide consumers.
//!
//! ```
//! use eventide::prelude::*;
//! ```

pub use crate::poller::{poll, PollOutcome};
pub use eventide_core::{
    CorrelationId, DeploymentId, Error, Event, OperationKind, Range, Result, TopologyView, Unit,
    Worker,
};
pub use eventide_ingest::{
    classify, translate, workers_for_deployment, workers_for_undeployment,
};
pub use eventide_store::EventStore;
