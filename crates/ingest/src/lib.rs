//! Log ingestion for eventide
//!
//! Two stateless pieces sit between the external log tailer and the event
//! store:
//!
//! - [`translate`]: raw worker log line + host identity -> structured event
//!   description
//! - [`classifier`]: resolve an operation id against the live topology to
//!   deployment/undeployment, and locate the workers whose logs to tail

#![warn(clippy::all)]

pub mod classifier;
mod translate;

pub use classifier::{classify, workers_for_deployment, workers_for_undeployment};
pub use translate::{translate, LIFECYCLE_LOGGER_PATTERN};
