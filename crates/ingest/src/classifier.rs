//! Operation classification and worker-group lookup
//!
//! Operation ids are resolved against the live topology view. Absence is
//! never an error here: a unit or zone the orchestrator already knows about
//! may not have converged into the view yet, so empty results mean "not
//! discoverable yet" and callers retry.

use eventide_core::{OperationKind, TopologyView, Worker};

/// Classify an operation id as deployment or undeployment.
///
/// Scans the live units, skipping management/control-plane units. Any unit
/// whose deployment id equals `operation_id` makes it a deployment.
///
/// Otherwise the operation is classified as an undeployment. This is a
/// closed two-way inference carried over from the orchestrator: an id that
/// matches neither an active deployment nor any known undeployment is still
/// reported as [`OperationKind::Undeployment`].
pub fn classify(topology: &dyn TopologyView, operation_id: &str) -> OperationKind {
    for unit in topology.units() {
        if unit.management {
            continue;
        }
        if unit
            .deployment_id
            .as_ref()
            .is_some_and(|id| id.as_str() == operation_id)
        {
            return OperationKind::Deployment;
        }
    }
    tracing::debug!(operation_id, "no unit with matching deployment id, assuming undeployment");
    OperationKind::Undeployment
}

/// Workers belonging to the deployment identified by `deployment_id`.
///
/// Finds the unit whose deployment id matches, then resolves the zone named
/// after the unit to its member workers. Empty when no unit matches or the
/// zone has not converged yet; both are retryable, not errors.
pub fn workers_for_deployment(topology: &dyn TopologyView, deployment_id: &str) -> Vec<Worker> {
    for unit in topology.units() {
        if unit
            .deployment_id
            .as_ref()
            .is_some_and(|id| id.as_str() == deployment_id)
        {
            return topology.zone_workers(&unit.name).unwrap_or_default();
        }
    }
    Vec::new()
}

/// Workers belonging to the undeployment identified by `undeployment_id`.
///
/// Mirrors [`workers_for_deployment`] but matches the unit's undeployment
/// id; the zone lookup is still by unit name.
pub fn workers_for_undeployment(topology: &dyn TopologyView, undeployment_id: &str) -> Vec<Worker> {
    for unit in topology.units() {
        if unit
            .undeployment_id
            .as_ref()
            .is_some_and(|id| id.as_str() == undeployment_id)
        {
            return topology.zone_workers(&unit.name).unwrap_or_default();
        }
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventide_core::Unit;
    use std::collections::HashMap;

    /// Fixed topology snapshot for tests.
    struct StaticTopology {
        units: Vec<Unit>,
        zones: HashMap<String, Vec<Worker>>,
    }

    impl StaticTopology {
        fn new(units: Vec<Unit>) -> Self {
            StaticTopology {
                units,
                zones: HashMap::new(),
            }
        }

        fn with_zone(mut self, name: &str, workers: Vec<Worker>) -> Self {
            self.zones.insert(name.to_string(), workers);
            self
        }
    }

    impl TopologyView for StaticTopology {
        fn units(&self) -> Vec<Unit> {
            self.units.clone()
        }

        fn zone_workers(&self, zone_name: &str) -> Option<Vec<Worker>> {
            self.zones.get(zone_name).cloned()
        }
    }

    #[test]
    fn matching_deployment_id_classifies_as_deployment() {
        let topology = StaticTopology::new(vec![Unit::new("petclinic").with_deployment("op-42")]);
        assert_eq!(classify(&topology, "op-42"), OperationKind::Deployment);
    }

    #[test]
    fn unmatched_id_classifies_as_undeployment() {
        let topology = StaticTopology::new(vec![Unit::new("petclinic").with_deployment("op-1")]);
        assert_eq!(classify(&topology, "op-42"), OperationKind::Undeployment);
    }

    #[test]
    fn completely_unknown_id_still_classifies_as_undeployment() {
        // Closed-world inference: an id matching neither a deployment nor
        // any known undeployment is reported as undeployment.
        let topology = StaticTopology::new(vec![]);
        assert_eq!(classify(&topology, "never-issued"), OperationKind::Undeployment);
    }

    #[test]
    fn management_units_are_ignored() {
        let topology =
            StaticTopology::new(vec![Unit::new("rest").with_deployment("op-42").management()]);
        assert_eq!(classify(&topology, "op-42"), OperationKind::Undeployment);
    }

    #[test]
    fn deployment_workers_resolved_via_unit_zone() {
        let workers = vec![Worker::new("h1", "10.0.0.1"), Worker::new("h2", "10.0.0.2")];
        let topology = StaticTopology::new(vec![Unit::new("petclinic").with_deployment("op-42")])
            .with_zone("petclinic", workers.clone());

        assert_eq!(workers_for_deployment(&topology, "op-42"), workers);
    }

    #[test]
    fn unconverged_zone_yields_empty_worker_group() {
        let topology = StaticTopology::new(vec![Unit::new("petclinic").with_deployment("op-42")]);
        assert!(workers_for_deployment(&topology, "op-42").is_empty());
    }

    #[test]
    fn unknown_deployment_yields_empty_worker_group() {
        let topology = StaticTopology::new(vec![]);
        assert!(workers_for_deployment(&topology, "op-42").is_empty());
    }

    #[test]
    fn undeployment_workers_match_on_undeployment_id() {
        let workers = vec![Worker::new("h1", "10.0.0.1")];
        let topology = StaticTopology::new(vec![
            Unit::new("petclinic")
                .with_deployment("op-1")
                .with_undeployment("op-9"),
        ])
        .with_zone("petclinic", workers.clone());

        assert_eq!(workers_for_undeployment(&topology, "op-9"), workers);
        assert!(workers_for_undeployment(&topology, "op-1").is_empty());
    }
}
