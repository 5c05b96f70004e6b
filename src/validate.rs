//! Structural checks run before any model is built.

use std::collections::HashSet;

use crate::error::OptimizeError;
use crate::model::OptimizeRouteRequest;
use crate::nodes::depot_locations;

/// Rejects requests the model cannot be built from.
///
/// The canonical depot set is taken from the first vehicle's start and end
/// locations; every other vehicle must stay within it.
pub fn validate(request: &OptimizeRouteRequest) -> Result<(), OptimizeError> {
    let Some(first) = request.vehicles.first() else {
        return Err(OptimizeError::invalid("No vehicles provided"));
    };

    let depot_ids: HashSet<i64> = [
        first.start_location.location_id,
        first.end_location.location_id,
    ]
    .into_iter()
    .collect();

    let mut collisions: Vec<i64> = request
        .stops
        .iter()
        .map(|stop| stop.location.location_id)
        .filter(|id| depot_ids.contains(id))
        .collect();
    if !collisions.is_empty() {
        collisions.sort_unstable();
        collisions.dedup();
        let listed = collisions
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        return Err(OptimizeError::invalid(format!(
            "Job/Depot LocationId collision detected. LocationId(s): {listed}"
        )));
    }

    for vehicle in &request.vehicles {
        for location_id in [
            vehicle.start_location.location_id,
            vehicle.end_location.location_id,
        ] {
            if !depot_ids.contains(&location_id) {
                return Err(OptimizeError::invalid(format!(
                    "Vehicle {} references missing DepotId {}",
                    vehicle.vehicle_id, location_id
                )));
            }
        }

        if !vehicle.speed_factor.is_finite() || vehicle.speed_factor <= 0.0 {
            return Err(OptimizeError::invalid(format!(
                "Vehicle {} has non-positive SpeedFactor",
                vehicle.vehicle_id
            )));
        }
    }

    let mut stop_ids = HashSet::with_capacity(request.stops.len());
    for stop in &request.stops {
        if !stop_ids.insert(stop.stop_id) {
            return Err(OptimizeError::invalid(format!(
                "Duplicate StopInput.StopId detected: {}",
                stop.stop_id
            )));
        }
        if stop.due_time != 0 && stop.ready_time > stop.due_time {
            return Err(OptimizeError::invalid(format!(
                "Stop {} ReadyTime {} is after DueTime {}",
                stop.stop_id, stop.ready_time, stop.due_time
            )));
        }
    }

    let node_count = depot_locations(&request.vehicles).len() + request.stops.len();
    check_square("DistanceMatrix", &request.distance_matrix, node_count)?;
    check_square("TravelTimeMatrix", &request.travel_time_matrix, node_count)?;

    Ok(())
}

fn check_square(name: &str, matrix: &[Vec<i64>], n: usize) -> Result<(), OptimizeError> {
    if matrix.len() != n || matrix.iter().any(|row| row.len() != n) {
        return Err(OptimizeError::invalid(format!(
            "{name} dimension mismatch: expected {n}x{n}"
        )));
    }
    Ok(())
}
