//! Read-only view of the live worker topology
//!
//! The topology itself is owned by an external admin/orchestration layer;
//! this crate only defines the trait the classifier reads through and the
//! value types that cross that boundary.

use crate::types::DeploymentId;
use serde::{Deserialize, Serialize};

/// A live, read-only view of the current worker topology.
///
/// Implementations are expected to reflect an eventually-consistent view:
/// a unit or zone that exists in the orchestrator may not be visible here
/// yet. Absence is therefore never an error, only "not discoverable yet."
pub trait TopologyView {
    /// Snapshot of the currently known units.
    fn units(&self) -> Vec<Unit>;

    /// Resolve a named zone to its member workers, or `None` if the zone
    /// has not converged yet.
    fn zone_workers(&self, zone_name: &str) -> Option<Vec<Worker>>;
}

/// One deployable unit in the topology.
///
/// A unit has at most one deployment id and at most one undeployment id at
/// a time; the presence of an undeployment id marks it as being torn down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Unit name; also the name of the zone its workers are grouped under.
    pub name: String,
    /// Deployment operation currently installing this unit, if any.
    pub deployment_id: Option<DeploymentId>,
    /// Undeployment operation currently tearing this unit down, if any.
    pub undeployment_id: Option<DeploymentId>,
    /// Management/control-plane units are ignored by classification.
    pub management: bool,
}

impl Unit {
    /// Create a unit with no operation metadata.
    pub fn new(name: impl Into<String>) -> Self {
        Unit {
            name: name.into(),
            deployment_id: None,
            undeployment_id: None,
            management: false,
        }
    }

    /// Attach a deployment id.
    pub fn with_deployment(mut self, id: impl Into<DeploymentId>) -> Self {
        self.deployment_id = Some(id.into());
        self
    }

    /// Attach an undeployment id.
    pub fn with_undeployment(mut self, id: impl Into<DeploymentId>) -> Self {
        self.undeployment_id = Some(id.into());
        self
    }

    /// Mark this unit as a management/control-plane unit.
    pub fn management(mut self) -> Self {
        self.management = true;
        self
    }

    /// Whether an uninstall has been initiated on this unit.
    pub fn is_tearing_down(&self) -> bool {
        self.undeployment_id.is_some()
    }
}

/// One running worker whose logs are tailed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    /// Host name of the machine running the worker.
    pub host_name: String,
    /// Host address of the machine running the worker.
    pub host_address: String,
}

impl Worker {
    /// Create a worker from its host identity.
    pub fn new(host_name: impl Into<String>, host_address: impl Into<String>) -> Self {
        Worker {
            host_name: host_name.into(),
            host_address: host_address.into(),
        }
    }
}
