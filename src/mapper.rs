//! Maps a solved assignment back to the response contract.

use chrono::Utc;

use crate::dimensions::{CapacityDimension, RoutingModel};
use crate::error::OptimizeError;
use crate::model::{OptimizeRouteRequest, OptimizeRouteResponse, RouteResult, TaskAssignment};
use crate::schedule::schedule;
use crate::solver::Assignment;

/// Builds one `RouteResult` per vehicle, in request order.
///
/// Totals are realized values in request units: minutes are unscaled travel
/// plus service time, and the cost is the base fee plus time, distance and
/// overtime cost.
pub fn map_assignment(
    request: &OptimizeRouteRequest,
    model: &RoutingModel<'_>,
    assignment: &Assignment,
) -> Result<OptimizeRouteResponse, OptimizeError> {
    let overtime_multiplier = request.effective_overtime_multiplier();
    let mut routes = Vec::with_capacity(request.vehicles.len());

    for (index, vehicle) in request.vehicles.iter().enumerate() {
        let stops = &assignment.routes[index];
        if !assignment.is_vehicle_used(index) {
            routes.push(RouteResult::unused(vehicle));
            continue;
        }

        let Some(solved) = schedule(model, index, stops) else {
            return Err(OptimizeError::Infeasible(format!(
                "Route of vehicle {} violates its capacity or time windows",
                vehicle.vehicle_id
            )));
        };

        let mut tasks = Vec::with_capacity(stops.len());
        for (position, &node) in stops.iter().enumerate() {
            let Some(stop) = model.stop(node) else {
                continue;
            };
            let arrival = solved.arrivals[position];
            let load = solved.loads[position];
            tasks.push(TaskAssignment {
                stop_id: stop.stop_id,
                stop_type: stop.stop_type,
                name: stop.name.clone(),
                arrival_time: arrival,
                departure_time: arrival + model.nodes()[node].service_time,
                pallet_load: load[CapacityDimension::Pallets.index()],
                weight_load: load[CapacityDimension::Weight.index()],
                refrigerated_load: load[CapacityDimension::Refrigerated.index()],
            });
        }

        let bound = model.vehicle(index);
        let mut total_minutes = 0;
        let mut total_km = 0;
        let mut prev = bound.start;
        for &node in stops.iter().chain(std::iter::once(&bound.end)) {
            total_minutes += model.arc_minutes(prev, node);
            total_km += model.arc_distance(prev, node);
            prev = node;
        }

        let total_minutes = total_minutes as f64;
        let total_distance_km = total_km as f64;
        let overtime_cost = solved.overtime_minutes as f64
            * vehicle.cost_per_minute
            * (overtime_multiplier - 1.0);
        let total_cost = vehicle.base_fee
            + total_minutes * vehicle.cost_per_minute
            + total_distance_km * vehicle.cost_per_km
            + overtime_cost;

        routes.push(RouteResult {
            vehicle_id: vehicle.vehicle_id,
            vehicle_name: vehicle.name.clone(),
            used: true,
            stops: tasks,
            total_minutes,
            total_distance_km,
            overtime_minutes: solved.overtime_minutes,
            total_cost,
        });
    }

    let total_cost = routes.iter().map(|route| route.total_cost).sum();

    Ok(OptimizeRouteResponse {
        tenant_id: request.tenant_id,
        run_id: request.run_id,
        completed_at: Utc::now(),
        routes,
        total_cost,
        error_message: None,
    })
}
