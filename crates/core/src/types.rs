//! Fundamental identifier and range types
//!
//! - [`DeploymentId`]: opaque correlation key for one deployment operation
//! - [`OperationKind`]: the two-way deployment/undeployment classification
//! - [`Range`]: inclusive index window used by extraction and completeness
//! - [`CorrelationId`]: caller-supplied diagnostics key for read paths

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque correlation key tying a set of workers to one deployment operation.
///
/// Deployment ids are assigned by the orchestration layer and carried as
/// topology metadata on each unit. This core never interprets their content;
/// it only compares and hashes them.
///
/// # Examples
///
/// ```
/// use eventide_core::DeploymentId;
///
/// let id = DeploymentId::from("op-42");
/// assert_eq!(id.as_str(), "op-42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeploymentId(String);

impl DeploymentId {
    /// Create a deployment id from its string form.
    pub fn new(id: impl Into<String>) -> Self {
        DeploymentId(id.into())
    }

    /// The string form of the id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DeploymentId {
    fn from(id: &str) -> Self {
        DeploymentId(id.to_string())
    }
}

impl From<String> for DeploymentId {
    fn from(id: String) -> Self {
        DeploymentId(id)
    }
}

impl std::fmt::Display for DeploymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classification of an operation id.
///
/// The classification is a closed two-way inference: an operation id that
/// matches no in-progress deployment is treated as an undeployment, even if
/// it matches no known undeployment either. This mirrors the orchestrator's
/// behavior and is deliberately not "fixed" here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationKind {
    /// The operation id belongs to an in-progress deployment.
    Deployment,
    /// Anything else: assumed to be an undeployment.
    Undeployment,
}

/// Inclusive index window for range extraction and completeness checks.
///
/// `from > to` denotes the degenerate empty range, which is vacuously
/// complete and extracts to nothing. Callers should avoid constructing such
/// ranges deliberately, but every consumer of [`Range`] must tolerate them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    /// First index in the window (inclusive).
    pub from: u64,
    /// Last index in the window (inclusive).
    pub to: u64,
}

impl Range {
    /// Create a new inclusive range.
    pub fn new(from: u64, to: u64) -> Self {
        Range { from, to }
    }

    /// Whether this is the degenerate empty range (`from > to`).
    pub fn is_degenerate(&self) -> bool {
        self.from > self.to
    }

    /// Number of indices covered by the range; zero when degenerate.
    pub fn span(&self) -> u64 {
        if self.is_degenerate() {
            0
        } else {
            (self.to - self.from).saturating_add(1)
        }
    }

    /// Iterate the indices covered by the range in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = u64> {
        self.from..=self.to
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.from, self.to)
    }
}

/// Caller-supplied correlation key for diagnostic logging on read paths.
///
/// Replaces ambient "current thread" identity: the transport layer mints one
/// id per client request and passes it through explicitly, so log lines from
/// concurrent polls can be told apart regardless of executor threading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CorrelationId(Uuid);

impl CorrelationId {
    /// Mint a new random correlation id.
    pub fn new() -> Self {
        CorrelationId(Uuid::new_v4())
    }
}

impl Default for CorrelationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
