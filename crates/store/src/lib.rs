//! Event sequence store for eventide
//!
//! This crate implements the shared mutable core of the system: a
//! per-deployment, concurrently-writable, sparse, index-keyed sequence of
//! lifecycle events with range-extraction and range-completeness queries.
//!
//! - [`EventStore`]: DashMap of deployment id to sequence, so unrelated
//!   deployments never contend
//! - [`sequence::EventSequence`]: one deployment's sparse sequence with a
//!   contiguous-prefix watermark for cheap completeness checks

#![warn(clippy::all)]

pub mod sequence;
mod store;

pub use store::EventStore;
