//! Solver node space: depots first, then stops.

use std::collections::{HashMap, HashSet};

use crate::dimensions::CAPACITY_DIMENSIONS;
use crate::error::OptimizeError;
use crate::model::{LocationRef, StopInput, VehicleInput};

/// One row of the solver graph.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverNode {
    pub index: usize,
    pub location_id: i64,
    pub is_depot: bool,
    pub ready_time: i64,
    pub due_time: i64,
    pub service_time: i64,
    /// Pallets, weight, refrigerated units; zero at depots.
    pub demand: [i64; CAPACITY_DIMENSIONS],
    /// Index into the request's stop list; `None` for depots.
    pub stop: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct NodeSpace {
    nodes: Vec<SolverNode>,
    depot_count: usize,
}

impl NodeSpace {
    /// Builds the node list and the depot lookup for one optimize call.
    ///
    /// Depots are the distinct start/end locations of all vehicles in
    /// first-seen order. Stops follow in input order. A stop due time of
    /// zero is read as "open until `horizon`".
    pub fn build(
        vehicles: &[VehicleInput],
        stops: &[StopInput],
        horizon: i64,
    ) -> (Self, DepotIndexMap) {
        let depots = depot_locations(vehicles);
        let mut nodes = Vec::with_capacity(depots.len() + stops.len());
        let mut by_location_id = HashMap::with_capacity(depots.len());

        for depot in &depots {
            let index = nodes.len();
            nodes.push(SolverNode {
                index,
                location_id: depot.location_id,
                is_depot: true,
                ready_time: 0,
                due_time: horizon,
                service_time: 0,
                demand: [0; CAPACITY_DIMENSIONS],
                stop: None,
            });
            by_location_id.insert(depot.location_id, index);
        }

        for (stop_index, stop) in stops.iter().enumerate() {
            let due = if stop.due_time <= 0 {
                horizon
            } else {
                stop.due_time.min(horizon)
            };
            nodes.push(SolverNode {
                index: nodes.len(),
                location_id: stop.location.location_id,
                is_depot: false,
                ready_time: stop.ready_time.max(0),
                due_time: due,
                service_time: stop.service_time_minutes.max(0),
                demand: [
                    stop.pallet_demand,
                    stop.weight_demand,
                    stop.effective_refrigerated_demand(),
                ],
                stop: Some(stop_index),
            });
        }

        let depot_count = depots.len();
        (Self { nodes, depot_count }, DepotIndexMap { by_location_id })
    }

    pub fn nodes(&self) -> &[SolverNode] {
        &self.nodes
    }

    pub fn depot_count(&self) -> usize {
        self.depot_count
    }
}

/// Resolves depot location ids to node indices.
#[derive(Debug, Clone, Default)]
pub struct DepotIndexMap {
    by_location_id: HashMap<i64, usize>,
}

impl DepotIndexMap {
    pub fn node_index_of(&self, location_id: i64) -> Result<usize, OptimizeError> {
        self.by_location_id
            .get(&location_id)
            .copied()
            .ok_or(OptimizeError::DepotNotFound(location_id))
    }
}

/// Distinct vehicle start/end locations in first-seen order.
pub fn depot_locations(vehicles: &[VehicleInput]) -> Vec<&LocationRef> {
    let mut seen = HashSet::new();
    vehicles
        .iter()
        .flat_map(|vehicle| [&vehicle.start_location, &vehicle.end_location])
        .filter(|location| seen.insert(location.location_id))
        .collect()
}

/// Locations in the exact order the solver numbers its nodes.
///
/// Request producers use this to lay out the distance and travel-time
/// matrices.
pub fn locations_in_node_order<'a>(
    vehicles: &'a [VehicleInput],
    stops: &'a [StopInput],
) -> Vec<&'a LocationRef> {
    let mut locations = depot_locations(vehicles);
    locations.extend(stops.iter().map(|stop| &stop.location));
    locations
}
