//! Routing model: capacity and time dimensions plus per-vehicle costs.
//!
//! All costs are integers scaled by `cost_scale` so the search compares
//! exact values; the mapper converts back to currency units.

use tracing::debug;

use crate::error::OptimizeError;
use crate::model::{OptimizeRouteRequest, StopInput};
use crate::nodes::{DepotIndexMap, NodeSpace, SolverNode};

pub const CAPACITY_DIMENSIONS: usize = 3;

/// Additive capacity dimensions tracked along every route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapacityDimension {
    Pallets,
    Weight,
    Refrigerated,
}

impl CapacityDimension {
    pub const ALL: [CapacityDimension; CAPACITY_DIMENSIONS] = [
        CapacityDimension::Pallets,
        CapacityDimension::Weight,
        CapacityDimension::Refrigerated,
    ];

    pub const fn index(self) -> usize {
        match self {
            CapacityDimension::Pallets => 0,
            CapacityDimension::Weight => 1,
            CapacityDimension::Refrigerated => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            CapacityDimension::Pallets => "Pallets",
            CapacityDimension::Weight => "Weight",
            CapacityDimension::Refrigerated => "Refrig",
        }
    }
}

/// Time dimension bounds shared by all vehicles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeDimension {
    /// Waiting allowed before serving a node.
    pub slack_max: i64,
    /// Every cumulative time lies in `[0, horizon]`.
    pub horizon: i64,
}

/// A vehicle bound to its start/end nodes with scaled cost rates.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleModel {
    pub vehicle_id: i64,
    pub start: usize,
    pub end: usize,
    pub speed_factor: f64,
    pub capacity: [i64; CAPACITY_DIMENSIONS],
    pub shift_limit: i64,
    /// Charged once when the vehicle serves at least one stop.
    pub fixed_cost: i64,
    /// Cost of one minute past `shift_limit`.
    pub overtime_cost_per_minute: i64,
    pub cost_per_minute: f64,
    pub cost_per_km: f64,
}

/// Everything the search needs to price and check a route.
#[derive(Debug, Clone)]
pub struct RoutingModel<'a> {
    nodes: &'a [SolverNode],
    stops: &'a [StopInput],
    distance: &'a [Vec<i64>],
    travel_time: &'a [Vec<i64>],
    vehicles: Vec<VehicleModel>,
    time: TimeDimension,
    cost_scale: i64,
    depot_count: usize,
}

impl<'a> RoutingModel<'a> {
    /// Binds vehicles to depot nodes and derives the scaled cost terms.
    ///
    /// Fails only if a vehicle's depot is missing from `depots`, which
    /// cannot happen for a validated request.
    pub fn new(
        space: &'a NodeSpace,
        depots: &DepotIndexMap,
        request: &'a OptimizeRouteRequest,
        cost_scale: i64,
    ) -> Result<Self, OptimizeError> {
        let overtime_multiplier = request.effective_overtime_multiplier();
        let scale = cost_scale as f64;

        let vehicles = request
            .vehicles
            .iter()
            .map(|vehicle| {
                Ok(VehicleModel {
                    vehicle_id: vehicle.vehicle_id,
                    start: depots.node_index_of(vehicle.start_location.location_id)?,
                    end: depots.node_index_of(vehicle.end_location.location_id)?,
                    speed_factor: vehicle.speed_factor,
                    capacity: [
                        vehicle.max_pallets,
                        vehicle.max_weight,
                        vehicle.refrigerated_capacity,
                    ],
                    shift_limit: vehicle.shift_limit_minutes,
                    fixed_cost: (vehicle.base_fee * scale).round() as i64,
                    overtime_cost_per_minute: (vehicle.cost_per_minute
                        * (overtime_multiplier - 1.0)
                        * scale)
                        .round() as i64,
                    cost_per_minute: vehicle.cost_per_minute,
                    cost_per_km: vehicle.cost_per_km,
                })
            })
            .collect::<Result<Vec<_>, OptimizeError>>()?;

        Ok(Self {
            nodes: space.nodes(),
            stops: &request.stops,
            distance: &request.distance_matrix,
            travel_time: &request.travel_time_matrix,
            vehicles,
            time: TimeDimension {
                slack_max: request.settings.max_slack_minutes.max(0),
                horizon: request.settings.horizon_minutes,
            },
            cost_scale,
            depot_count: space.depot_count(),
        })
    }

    pub fn nodes(&self) -> &'a [SolverNode] {
        self.nodes
    }

    pub fn vehicles(&self) -> &[VehicleModel] {
        &self.vehicles
    }

    pub fn vehicle(&self, vehicle: usize) -> &VehicleModel {
        &self.vehicles[vehicle]
    }

    pub fn time(&self) -> TimeDimension {
        self.time
    }

    pub fn cost_scale(&self) -> i64 {
        self.cost_scale
    }

    /// Node indices of all stops, in input order.
    pub fn stop_nodes(&self) -> std::ops::Range<usize> {
        self.depot_count..self.nodes.len()
    }

    /// The request stop a node was built from.
    pub fn stop(&self, node: usize) -> Option<&'a StopInput> {
        self.nodes[node].stop.map(|index| &self.stops[index])
    }

    /// Unscaled travel plus service minutes on the arc `from -> to`.
    pub fn arc_minutes(&self, from: usize, to: usize) -> i64 {
        self.travel_time[from][to] + self.nodes[from].service_time
    }

    pub fn arc_distance(&self, from: usize, to: usize) -> i64 {
        self.distance[from][to]
    }

    /// Time-dimension transit of `vehicle` on `from -> to`.
    pub fn transit_time(&self, vehicle: usize, from: usize, to: usize) -> i64 {
        let minutes = self.arc_minutes(from, to) as f64;
        (minutes * self.vehicles[vehicle].speed_factor).round() as i64
    }

    /// Scaled time cost plus distance cost of `vehicle` on `from -> to`.
    pub fn arc_cost(&self, vehicle: usize, from: usize, to: usize) -> i64 {
        let v = &self.vehicles[vehicle];
        let minutes = self.arc_minutes(from, to) as f64;
        let km = self.arc_distance(from, to) as f64;
        ((minutes * v.cost_per_minute + km * v.cost_per_km) * self.cost_scale as f64).round()
            as i64
    }

    pub fn demand(&self, dimension: CapacityDimension, node: usize) -> i64 {
        self.nodes[node].demand[dimension.index()]
    }

    /// Cumulative time bounds of a node.
    pub fn window(&self, node: usize) -> (i64, i64) {
        let n = &self.nodes[node];
        (n.ready_time, n.due_time.min(self.time.horizon))
    }

    /// Minutes the end cumul exceeds the vehicle's soft shift limit.
    pub fn overtime_minutes(&self, vehicle: usize, end_cumul: i64) -> i64 {
        (end_cumul - self.vehicles[vehicle].shift_limit).max(0)
    }

    /// Scaled soft upper bound penalty for ending at `end_cumul`.
    pub fn overtime_penalty(&self, vehicle: usize, end_cumul: i64) -> i64 {
        self.overtime_minutes(vehicle, end_cumul) * self.vehicles[vehicle].overtime_cost_per_minute
    }

    /// Emits the node table and vehicle bindings as debug events.
    pub fn trace(&self) {
        for node in self.nodes {
            debug!(
                node = node.index,
                location_id = node.location_id,
                depot = node.is_depot,
                ready = node.ready_time,
                due = node.due_time,
                service = node.service_time,
                pallets = node.demand[CapacityDimension::Pallets.index()],
                weight = node.demand[CapacityDimension::Weight.index()],
                refrigerated = node.demand[CapacityDimension::Refrigerated.index()],
                "solver node"
            );
        }
        for (index, vehicle) in self.vehicles.iter().enumerate() {
            debug!(
                vehicle = index,
                vehicle_id = vehicle.vehicle_id,
                start = vehicle.start,
                end = vehicle.end,
                shift_limit = vehicle.shift_limit,
                fixed_cost = vehicle.fixed_cost,
                "vehicle binding"
            );
        }
    }
}
