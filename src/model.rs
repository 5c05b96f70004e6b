//! Request and response types exchanged with the optimizer.
//!
//! These mirror the upstream message contract: field names serialize in
//! camelCase and every type is created fresh for a single optimize call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Overtime multiplier used when a request carries a non-positive value.
pub const DEFAULT_OVERTIME_MULTIPLIER: f64 = 2.0;

/// A geographic location with a stable external identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRef {
    pub location_id: i64,
    #[serde(default)]
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationRef {
    pub fn new(location_id: i64, latitude: f64, longitude: f64) -> Self {
        Self {
            location_id,
            address: String::new(),
            latitude,
            longitude,
        }
    }

    /// (lat, lng) pair.
    pub fn coords(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

/// A vehicle available for dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleInput {
    pub vehicle_id: i64,
    #[serde(default)]
    pub name: String,
    /// Soft limit on the cumulative time at the end of the route.
    pub shift_limit_minutes: i64,
    pub start_location: LocationRef,
    pub end_location: LocationRef,
    /// Multiplies every transit time of this vehicle. Must be positive.
    pub speed_factor: f64,
    pub cost_per_minute: f64,
    pub cost_per_km: f64,
    /// Fixed dispatch fee, charged only when the vehicle is used.
    pub base_fee: f64,
    pub max_pallets: i64,
    pub max_weight: i64,
    pub refrigerated_capacity: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StopType {
    Depot,
    Pickup,
    #[default]
    Delivery,
}

/// A job to perform at a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopInput {
    pub stop_id: i64,
    #[serde(rename = "type", default)]
    pub stop_type: StopType,
    #[serde(default)]
    pub name: String,
    pub location: LocationRef,
    pub service_time_minutes: i64,
    pub ready_time: i64,
    /// Zero means "open until the horizon".
    pub due_time: i64,
    #[serde(default)]
    pub pallet_demand: i64,
    #[serde(default)]
    pub weight_demand: i64,
    #[serde(default)]
    pub refrigerated_demand: i64,
    #[serde(default)]
    pub requires_refrigeration: bool,
}

impl StopInput {
    /// Refrigerated units this stop consumes; a refrigeration requirement
    /// counts as at least one unit.
    pub fn effective_refrigerated_demand(&self) -> i64 {
        if self.requires_refrigeration {
            self.refrigerated_demand.max(1)
        } else {
            self.refrigerated_demand
        }
    }
}

/// Tunables carried with each request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptimizationSettings {
    /// Maximum waiting time allowed at any node.
    pub max_slack_minutes: i64,
    /// Upper bound of the time dimension.
    pub horizon_minutes: i64,
    /// Wall-clock budget of the improvement phase.
    pub search_time_limit_seconds: u64,
}

impl Default for OptimizationSettings {
    fn default() -> Self {
        Self {
            max_slack_minutes: 60,
            horizon_minutes: 720,
            search_time_limit_seconds: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRouteRequest {
    pub tenant_id: Uuid,
    pub run_id: Uuid,
    pub requested_at: DateTime<Utc>,
    pub vehicles: Vec<VehicleInput>,
    pub stops: Vec<StopInput>,
    /// Kilometres between nodes, depots first then stops.
    pub distance_matrix: Vec<Vec<i64>>,
    /// Minutes between nodes, same ordering as `distance_matrix`.
    pub travel_time_matrix: Vec<Vec<i64>>,
    #[serde(default = "default_overtime_multiplier")]
    pub overtime_multiplier: f64,
    #[serde(default)]
    pub settings: OptimizationSettings,
}

fn default_overtime_multiplier() -> f64 {
    DEFAULT_OVERTIME_MULTIPLIER
}

impl OptimizeRouteRequest {
    /// Overtime multiplier with the fallback and lower clamp applied.
    pub fn effective_overtime_multiplier(&self) -> f64 {
        if self.overtime_multiplier <= 0.0 || !self.overtime_multiplier.is_finite() {
            DEFAULT_OVERTIME_MULTIPLIER
        } else {
            self.overtime_multiplier.max(1.0)
        }
    }
}

/// One served stop in a vehicle's route.
///
/// Loads are cumulative values at departure from the stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskAssignment {
    pub stop_id: i64,
    #[serde(rename = "type")]
    pub stop_type: StopType,
    pub name: String,
    pub arrival_time: i64,
    pub departure_time: i64,
    pub pallet_load: i64,
    pub weight_load: i64,
    pub refrigerated_load: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    pub vehicle_id: i64,
    pub vehicle_name: String,
    pub used: bool,
    pub stops: Vec<TaskAssignment>,
    pub total_minutes: f64,
    pub total_distance_km: f64,
    /// Minutes the route ends past the vehicle's shift limit.
    pub overtime_minutes: i64,
    pub total_cost: f64,
}

impl RouteResult {
    /// Route of a vehicle the solution leaves parked.
    pub fn unused(vehicle: &VehicleInput) -> Self {
        Self {
            vehicle_id: vehicle.vehicle_id,
            vehicle_name: vehicle.name.clone(),
            used: false,
            stops: Vec::new(),
            total_minutes: 0.0,
            total_distance_km: 0.0,
            overtime_minutes: 0,
            total_cost: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRouteResponse {
    pub tenant_id: Uuid,
    pub run_id: Uuid,
    pub completed_at: DateTime<Utc>,
    pub routes: Vec<RouteResult>,
    pub total_cost: f64,
    /// Set only when validation failed or no feasible plan exists.
    pub error_message: Option<String>,
}

impl OptimizeRouteResponse {
    /// Empty response carrying a business-level failure.
    pub fn failure(request: &OptimizeRouteRequest, message: impl Into<String>) -> Self {
        Self {
            tenant_id: request.tenant_id,
            run_id: request.run_id,
            completed_at: Utc::now(),
            routes: Vec::new(),
            total_cost: 0.0,
            error_message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error_message.is_none()
    }
}
