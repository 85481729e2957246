//! Core types for the eventide aggregation library
//!
//! This crate defines the fundamental types shared by every layer:
//! - [`DeploymentId`]: correlation key tying workers to one deployment operation
//! - [`Event`]: an immutable, sequence-indexed lifecycle event
//! - [`Range`]: an inclusive index window for extraction and completeness checks
//! - [`TopologyView`]: the read-only view of the live worker topology
//! - [`Error`]: the canonical error type

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod event;
pub mod topology;
pub mod types;

pub use error::{Error, Result};
pub use event::Event;
pub use topology::{TopologyView, Unit, Worker};
pub use types::{CorrelationId, DeploymentId, OperationKind, Range};
