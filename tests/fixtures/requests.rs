//! Builders for vehicles, stops and requests with sensible defaults.

use chrono::Utc;
use uuid::Uuid;

use route_optimizer::matrix::{ApproxMatrix, attach_matrices};
use route_optimizer::{
    LocationRef, OptimizationSettings, OptimizeRouteRequest, StopInput, StopType, VehicleInput,
};

/// Builder for test vehicles.
#[derive(Clone, Debug)]
pub struct TestVehicle(VehicleInput);

impl TestVehicle {
    pub fn new(id: i64, depot: &LocationRef) -> Self {
        Self(VehicleInput {
            vehicle_id: id,
            name: format!("truck-{id}"),
            shift_limit_minutes: 480,
            start_location: depot.clone(),
            end_location: depot.clone(),
            speed_factor: 1.0,
            cost_per_minute: 1.0,
            cost_per_km: 0.5,
            base_fee: 10.0,
            max_pallets: 20,
            max_weight: 1000,
            refrigerated_capacity: 4,
        })
    }

    pub fn capacity(mut self, pallets: i64, weight: i64, refrigerated: i64) -> Self {
        self.0.max_pallets = pallets;
        self.0.max_weight = weight;
        self.0.refrigerated_capacity = refrigerated;
        self
    }

    pub fn ends_at(mut self, depot: &LocationRef) -> Self {
        self.0.end_location = depot.clone();
        self
    }

    pub fn shift_limit(mut self, minutes: i64) -> Self {
        self.0.shift_limit_minutes = minutes;
        self
    }

    pub fn speed(mut self, factor: f64) -> Self {
        self.0.speed_factor = factor;
        self
    }

    pub fn costs(mut self, base_fee: f64, per_minute: f64, per_km: f64) -> Self {
        self.0.base_fee = base_fee;
        self.0.cost_per_minute = per_minute;
        self.0.cost_per_km = per_km;
        self
    }

    pub fn build(self) -> VehicleInput {
        self.0
    }
}

/// Builder for test stops.
#[derive(Clone, Debug)]
pub struct TestStop(StopInput);

impl TestStop {
    pub fn new(id: i64, location: LocationRef) -> Self {
        Self(StopInput {
            stop_id: id,
            stop_type: StopType::Delivery,
            name: format!("stop-{id}"),
            location,
            service_time_minutes: 5,
            ready_time: 0,
            due_time: 0,
            pallet_demand: 1,
            weight_demand: 10,
            refrigerated_demand: 0,
            requires_refrigeration: false,
        })
    }

    pub fn pickup(mut self) -> Self {
        self.0.stop_type = StopType::Pickup;
        self
    }

    pub fn window(mut self, ready: i64, due: i64) -> Self {
        self.0.ready_time = ready;
        self.0.due_time = due;
        self
    }

    pub fn service(mut self, minutes: i64) -> Self {
        self.0.service_time_minutes = minutes;
        self
    }

    pub fn demand(mut self, pallets: i64, weight: i64) -> Self {
        self.0.pallet_demand = pallets;
        self.0.weight_demand = weight;
        self
    }

    pub fn refrigerated(mut self) -> Self {
        self.0.requires_refrigeration = true;
        self
    }

    pub fn build(self) -> StopInput {
        self.0
    }
}

/// Square matrix with `value` off the diagonal.
pub fn uniform_matrix(n: usize, value: i64) -> Vec<Vec<i64>> {
    let mut matrix = vec![vec![value; n]; n];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[i] = 0;
    }
    matrix
}

/// Builder for whole requests.
///
/// Without explicit matrices, `build` derives them from coordinates.
#[derive(Clone, Debug, Default)]
pub struct RequestBuilder {
    vehicles: Vec<VehicleInput>,
    stops: Vec<StopInput>,
    matrices: Option<(Vec<Vec<i64>>, Vec<Vec<i64>>)>,
    settings: OptimizationSettings,
    overtime_multiplier: Option<f64>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vehicle(mut self, vehicle: TestVehicle) -> Self {
        self.vehicles.push(vehicle.build());
        self
    }

    pub fn stop(mut self, stop: TestStop) -> Self {
        self.stops.push(stop.build());
        self
    }

    pub fn matrices(mut self, distance: Vec<Vec<i64>>, travel_time: Vec<Vec<i64>>) -> Self {
        self.matrices = Some((distance, travel_time));
        self
    }

    pub fn time_limit(mut self, seconds: u64) -> Self {
        self.settings.search_time_limit_seconds = seconds;
        self
    }

    pub fn settings(mut self, settings: OptimizationSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn overtime_multiplier(mut self, multiplier: f64) -> Self {
        self.overtime_multiplier = Some(multiplier);
        self
    }

    pub fn build(self) -> OptimizeRouteRequest {
        let mut request = OptimizeRouteRequest {
            tenant_id: Uuid::new_v4(),
            run_id: Uuid::new_v4(),
            requested_at: Utc::now(),
            vehicles: self.vehicles,
            stops: self.stops,
            distance_matrix: Vec::new(),
            travel_time_matrix: Vec::new(),
            overtime_multiplier: self.overtime_multiplier.unwrap_or(2.0),
            settings: self.settings,
        };
        match self.matrices {
            Some((distance, travel_time)) => {
                request.distance_matrix = distance;
                request.travel_time_matrix = travel_time;
            }
            None => attach_matrices(&ApproxMatrix::default(), &mut request),
        }
        request
    }
}
