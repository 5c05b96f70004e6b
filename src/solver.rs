//! Route search: parallel cheapest insertion followed by guided local search.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::debug;

use crate::dimensions::RoutingModel;
use crate::error::OptimizeError;
use crate::schedule::{RouteProfile, route_cost};

#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Wall-clock budget for construction and improvement together.
    pub time_limit: Duration,
    /// Maximum iterations for local search improvement.
    pub local_search_iterations: usize,
    /// Scales the arc penalty weight relative to the average arc cost.
    /// Zero disables guided local search and stops at the first local optimum.
    pub guided_lambda_coefficient: f64,
    /// Local optima allowed in a row without a new best solution.
    pub max_stale_rounds: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(1),
            local_search_iterations: 20_000,
            guided_lambda_coefficient: 0.1,
            max_stale_rounds: 50,
        }
    }
}

/// Stop nodes per vehicle, in service order, with the scaled total cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub routes: Vec<Vec<usize>>,
    pub cost: i64,
}

impl Assignment {
    pub fn is_vehicle_used(&self, vehicle: usize) -> bool {
        !self.routes[vehicle].is_empty()
    }
}

/// Wall-clock end of a search. Budgets too large for an `Instant` never
/// expire.
#[derive(Debug, Clone, Copy)]
struct Deadline(Option<Instant>);

impl Deadline {
    fn after(started: Instant, limit: Duration) -> Self {
        Self(started.checked_add(limit))
    }

    fn reached(&self) -> bool {
        self.0.is_some_and(|deadline| Instant::now() >= deadline)
    }
}

#[derive(Debug, Clone)]
struct RouteState {
    vehicle: usize,
    stops: Vec<usize>,
    /// Real scaled cost.
    cost: i64,
    /// Cost plus guided local search arc penalties.
    augmented: i64,
}

#[derive(Debug, Clone, Copy)]
struct Insertion {
    delta: i64,
    node: usize,
    route: usize,
    position: usize,
    cost: i64,
}

impl Insertion {
    fn key(&self) -> (i64, usize, usize, usize) {
        (self.delta, self.node, self.route, self.position)
    }
}

/// Arc penalties of guided local search.
#[derive(Debug, Default)]
struct Penalties {
    counts: HashMap<(usize, usize), i64>,
    lambda: i64,
}

impl Penalties {
    fn route_penalty(&self, model: &RoutingModel<'_>, vehicle: usize, stops: &[usize]) -> i64 {
        if self.lambda == 0 || stops.is_empty() {
            return 0;
        }
        let v = model.vehicle(vehicle);
        let total: i64 = arcs(v.start, stops, v.end)
            .map(|arc| self.counts.get(&arc).copied().unwrap_or(0))
            .sum();
        total * self.lambda
    }
}

/// Arcs travelled by a route, depot to depot.
fn arcs(start: usize, stops: &[usize], end: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
    let firsts = std::iter::once(start).chain(stops.iter().copied());
    let seconds = stops.iter().copied().chain(std::iter::once(end));
    firsts.zip(seconds)
}

/// Searches an assignment of every stop to one vehicle.
///
/// Returns [`OptimizeError::Infeasible`] when some stop fits no route
/// under the hard capacity and time-window bounds, and
/// [`OptimizeError::TimeLimitReached`] when the budget runs out before
/// every stop is routed.
pub fn solve(
    model: &RoutingModel<'_>,
    options: &SearchOptions,
) -> Result<Assignment, OptimizeError> {
    let started = Instant::now();
    let deadline = Deadline::after(started, options.time_limit);

    let mut routes = construct(model, deadline)?;
    let initial: i64 = routes.iter().map(|r| r.cost).sum();
    debug!(
        cost = initial,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "initial solution built"
    );

    let best = local_search(&mut routes, model, options, deadline);
    debug!(
        initial_cost = initial,
        best_cost = best.cost,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "search finished"
    );
    Ok(best)
}

// ============================================================================
// Construction
// ============================================================================

/// Best insertion of a pending stop into each route.
#[derive(Debug)]
struct Pending {
    node: usize,
    best: Vec<Option<Insertion>>,
}

/// Cheapest insertion over all pending stops until every stop is routed.
/// Only the route that received the last stop is re-priced each round.
fn construct(
    model: &RoutingModel<'_>,
    deadline: Deadline,
) -> Result<Vec<RouteState>, OptimizeError> {
    let mut routes: Vec<RouteState> = (0..model.vehicles().len())
        .map(|vehicle| RouteState {
            vehicle,
            stops: Vec::new(),
            cost: 0,
            augmented: 0,
        })
        .collect();

    let profiles: Vec<RouteProfile> = routes
        .iter()
        .map(|route| RouteProfile::new(model, route.vehicle, &route.stops))
        .collect();
    let mut pending: Vec<Pending> = model
        .stop_nodes()
        .map(|node| Pending {
            node,
            best: Vec::new(),
        })
        .collect();
    pending.par_iter_mut().for_each(|entry| {
        entry.best = profiles
            .iter()
            .enumerate()
            .map(|(route, profile)| best_insertion(model, profile, route, entry.node))
            .collect();
    });
    let total = pending.len();

    while !pending.is_empty() {
        if deadline.reached() {
            return Err(OptimizeError::TimeLimitReached {
                routed: total - pending.len(),
                total,
            });
        }

        if let Some(entry) = pending.iter().find(|e| e.best.iter().all(Option::is_none)) {
            return Err(infeasible(model, entry.node));
        }

        let Some((index, best)) = pending
            .iter()
            .enumerate()
            .flat_map(|(index, entry)| entry.best.iter().flatten().map(move |i| (index, *i)))
            .min_by_key(|(_, insertion)| insertion.key())
        else {
            break;
        };

        let node = pending.remove(index).node;
        let route = &mut routes[best.route];
        route.stops.insert(best.position, node);
        route.cost = best.cost;
        route.augmented = best.cost;

        let profile = RouteProfile::new(model, route.vehicle, &route.stops);
        pending.par_iter_mut().for_each(|entry| {
            entry.best[best.route] = best_insertion(model, &profile, best.route, entry.node);
        });
    }

    Ok(routes)
}

fn best_insertion(
    model: &RoutingModel<'_>,
    profile: &RouteProfile,
    route: usize,
    node: usize,
) -> Option<Insertion> {
    (0..=profile.stop_count())
        .filter_map(|position| {
            let cost = profile.insertion_cost(model, node, position)?;
            Some(Insertion {
                delta: cost - profile.cost(),
                node,
                route,
                position,
                cost,
            })
        })
        .min_by_key(Insertion::key)
}

fn infeasible(model: &RoutingModel<'_>, node: usize) -> OptimizeError {
    let stop_id = model.stop(node).map_or(model.nodes()[node].location_id, |s| s.stop_id);
    OptimizeError::Infeasible(format!(
        "No feasible assignment: stop {stop_id} cannot be served by any vehicle \
         within capacity and time-window limits"
    ))
}

// ============================================================================
// Local Search Operators
// ============================================================================

/// Augmented cost of a candidate route, or `None` when infeasible.
fn evaluate(
    model: &RoutingModel<'_>,
    penalties: &Penalties,
    vehicle: usize,
    stops: &[usize],
) -> Option<(i64, i64)> {
    let cost = route_cost(model, vehicle, stops)?;
    Some((cost, cost + penalties.route_penalty(model, vehicle, stops)))
}

/// 2-opt: reverse a segment within a route.
/// Returns true if an improvement was made.
fn two_opt_improve(
    route: &mut RouteState,
    model: &RoutingModel<'_>,
    penalties: &Penalties,
    deadline: Deadline,
) -> bool {
    let n = route.stops.len();
    if n < 2 {
        return false;
    }

    for i in 0..n - 1 {
        if deadline.reached() {
            return false;
        }
        for j in i + 1..n {
            let mut candidate = route.stops.clone();
            candidate[i..=j].reverse();

            if let Some((cost, augmented)) =
                evaluate(model, penalties, route.vehicle, &candidate)
            {
                if augmented < route.augmented {
                    route.stops = candidate;
                    route.cost = cost;
                    route.augmented = augmented;
                    return true;
                }
            }
        }
    }

    false
}

/// Relocate: move a stop to another position in the same or another route.
/// Returns true if an improvement was made.
fn relocate_improve(
    routes: &mut [RouteState],
    model: &RoutingModel<'_>,
    penalties: &Penalties,
    deadline: Deadline,
) -> bool {
    for from in 0..routes.len() {
        for stop_index in 0..routes[from].stops.len() {
            if deadline.reached() {
                return false;
            }
            let node = routes[from].stops[stop_index];
            let mut remaining = routes[from].stops.clone();
            remaining.remove(stop_index);

            for to in 0..routes.len() {
                if from == to {
                    for position in 0..=remaining.len() {
                        if position == stop_index {
                            continue;
                        }
                        let mut candidate = remaining.clone();
                        candidate.insert(position, node);
                        if let Some((cost, augmented)) =
                            evaluate(model, penalties, routes[from].vehicle, &candidate)
                        {
                            if augmented < routes[from].augmented {
                                let route = &mut routes[from];
                                route.stops = candidate;
                                route.cost = cost;
                                route.augmented = augmented;
                                return true;
                            }
                        }
                    }
                    continue;
                }

                let Some((from_cost, from_augmented)) =
                    evaluate(model, penalties, routes[from].vehicle, &remaining)
                else {
                    continue;
                };
                let current = routes[from].augmented + routes[to].augmented;

                for position in 0..=routes[to].stops.len() {
                    let mut candidate = routes[to].stops.clone();
                    candidate.insert(position, node);
                    let Some((to_cost, to_augmented)) =
                        evaluate(model, penalties, routes[to].vehicle, &candidate)
                    else {
                        continue;
                    };

                    if from_augmented + to_augmented < current {
                        let source = &mut routes[from];
                        source.stops = remaining;
                        source.cost = from_cost;
                        source.augmented = from_augmented;

                        let target = &mut routes[to];
                        target.stops = candidate;
                        target.cost = to_cost;
                        target.augmented = to_augmented;
                        return true;
                    }
                }
            }
        }
    }

    false
}

/// Exchange: swap two stops, within one route or across two routes.
/// Returns true if an improvement was made.
fn exchange_improve(
    routes: &mut [RouteState],
    model: &RoutingModel<'_>,
    penalties: &Penalties,
    deadline: Deadline,
) -> bool {
    for a in 0..routes.len() {
        for i in 0..routes[a].stops.len() {
            if deadline.reached() {
                return false;
            }

            for j in i + 1..routes[a].stops.len() {
                let mut candidate = routes[a].stops.clone();
                candidate.swap(i, j);
                if let Some((cost, augmented)) =
                    evaluate(model, penalties, routes[a].vehicle, &candidate)
                {
                    if augmented < routes[a].augmented {
                        let route = &mut routes[a];
                        route.stops = candidate;
                        route.cost = cost;
                        route.augmented = augmented;
                        return true;
                    }
                }
            }

            for b in a + 1..routes.len() {
                for j in 0..routes[b].stops.len() {
                    let mut left = routes[a].stops.clone();
                    let mut right = routes[b].stops.clone();
                    std::mem::swap(&mut left[i], &mut right[j]);

                    let Some((left_cost, left_augmented)) =
                        evaluate(model, penalties, routes[a].vehicle, &left)
                    else {
                        continue;
                    };
                    let Some((right_cost, right_augmented)) =
                        evaluate(model, penalties, routes[b].vehicle, &right)
                    else {
                        continue;
                    };

                    let current = routes[a].augmented + routes[b].augmented;
                    if left_augmented + right_augmented < current {
                        let first = &mut routes[a];
                        first.stops = left;
                        first.cost = left_cost;
                        first.augmented = left_augmented;

                        let second = &mut routes[b];
                        second.stops = right;
                        second.cost = right_cost;
                        second.augmented = right_augmented;
                        return true;
                    }
                }
            }
        }
    }

    false
}

// ============================================================================
// Guided Local Search
// ============================================================================

/// Penalizes the arcs of maximal utility `cost / (1 + penalty)` in the
/// current local optimum.
fn penalize(routes: &[RouteState], model: &RoutingModel<'_>, penalties: &mut Penalties) {
    let mut best_utility = f64::MIN;
    let mut selected: Vec<(usize, usize)> = Vec::new();

    for route in routes.iter().filter(|r| !r.stops.is_empty()) {
        let v = model.vehicle(route.vehicle);
        for arc in arcs(v.start, &route.stops, v.end) {
            let cost = model.arc_cost(route.vehicle, arc.0, arc.1) as f64;
            let penalty = penalties.counts.get(&arc).copied().unwrap_or(0) as f64;
            let utility = cost / (1.0 + penalty);
            if utility > best_utility {
                best_utility = utility;
                selected.clear();
                selected.push(arc);
            } else if utility == best_utility {
                selected.push(arc);
            }
        }
    }

    for arc in selected {
        *penalties.counts.entry(arc).or_insert(0) += 1;
    }
}

fn refresh_augmented(routes: &mut [RouteState], model: &RoutingModel<'_>, penalties: &Penalties) {
    for route in routes.iter_mut() {
        let penalty = penalties.route_penalty(model, route.vehicle, &route.stops);
        route.augmented = route.cost + penalty;
    }
}

fn snapshot(routes: &[RouteState]) -> Assignment {
    Assignment {
        routes: routes.iter().map(|r| r.stops.clone()).collect(),
        cost: routes.iter().map(|r| r.cost).sum(),
    }
}

/// Run local search until the deadline, the iteration cap, or too many
/// local optima without a new best.
fn local_search(
    routes: &mut [RouteState],
    model: &RoutingModel<'_>,
    options: &SearchOptions,
    deadline: Deadline,
) -> Assignment {
    let mut penalties = Penalties::default();
    let mut best = snapshot(routes);
    let mut stale_rounds = 0;
    let mut local_optima = 0;

    for _ in 0..options.local_search_iterations {
        if deadline.reached() {
            break;
        }

        let mut improved = false;

        // Try 2-opt on each route
        for route in routes.iter_mut() {
            if two_opt_improve(route, model, &penalties, deadline) {
                improved = true;
            }
        }

        if !improved {
            improved = relocate_improve(routes, model, &penalties, deadline)
                || exchange_improve(routes, model, &penalties, deadline);
        }

        let cost: i64 = routes.iter().map(|r| r.cost).sum();
        if cost < best.cost {
            best = snapshot(routes);
            stale_rounds = 0;
        }

        if improved {
            continue;
        }

        local_optima += 1;
        if options.guided_lambda_coefficient <= 0.0 {
            break;
        }
        stale_rounds += 1;
        if stale_rounds > options.max_stale_rounds {
            break;
        }

        if penalties.lambda == 0 {
            let arc_count: usize = routes
                .iter()
                .filter(|r| !r.stops.is_empty())
                .map(|r| r.stops.len() + 1)
                .sum();
            if arc_count == 0 {
                break;
            }
            let average = cost as f64 / arc_count as f64;
            let lambda = (options.guided_lambda_coefficient * average).round() as i64;
            penalties.lambda = lambda.max(1);
        }
        penalize(routes, model, &mut penalties);
        refresh_augmented(routes, model, &penalties);
    }

    debug!(
        local_optima,
        lambda = penalties.lambda,
        best_cost = best.cost,
        "local search done"
    );
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        LocationRef, OptimizationSettings, OptimizeRouteRequest, StopInput, StopType,
        VehicleInput,
    };
    use crate::nodes::NodeSpace;
    use crate::schedule::schedule;
    use chrono::Utc;
    use uuid::Uuid;

    fn vehicle(id: i64, max_pallets: i64) -> VehicleInput {
        VehicleInput {
            vehicle_id: id,
            name: String::new(),
            shift_limit_minutes: 600,
            start_location: LocationRef::new(1, 0.0, 0.0),
            end_location: LocationRef::new(1, 0.0, 0.0),
            speed_factor: 1.0,
            cost_per_minute: 1.0,
            cost_per_km: 1.0,
            base_fee: 50.0,
            max_pallets,
            max_weight: 1000,
            refrigerated_capacity: 0,
        }
    }

    fn stop(id: i64, x: f64, ready: i64, due: i64) -> StopInput {
        StopInput {
            stop_id: id,
            stop_type: StopType::Delivery,
            name: String::new(),
            location: LocationRef::new(100 + id, 0.0, x),
            service_time_minutes: 5,
            ready_time: ready,
            due_time: due,
            pallet_demand: 1,
            weight_demand: 1,
            refrigerated_demand: 0,
            requires_refrigeration: false,
        }
    }

    /// Points on a line; distance and minutes are the coordinate gap.
    fn request(vehicles: Vec<VehicleInput>, stops: Vec<StopInput>) -> OptimizeRouteRequest {
        let mut xs = vec![0.0];
        xs.extend(stops.iter().map(|s| s.location.longitude));
        let matrix: Vec<Vec<i64>> = xs
            .iter()
            .map(|a| xs.iter().map(|b| (a - b).abs().round() as i64).collect())
            .collect();
        OptimizeRouteRequest {
            tenant_id: Uuid::nil(),
            run_id: Uuid::nil(),
            requested_at: Utc::now(),
            vehicles,
            stops,
            distance_matrix: matrix.clone(),
            travel_time_matrix: matrix,
            overtime_multiplier: 2.0,
            settings: OptimizationSettings::default(),
        }
    }

    fn fast() -> SearchOptions {
        SearchOptions {
            time_limit: Duration::from_millis(200),
            ..SearchOptions::default()
        }
    }

    fn assert_every_stop_once(assignment: &Assignment, model: &RoutingModel<'_>) {
        let mut seen: Vec<usize> = assignment.routes.iter().flatten().copied().collect();
        seen.sort_unstable();
        assert_eq!(seen, model.stop_nodes().collect::<Vec<_>>());
    }

    #[test]
    fn test_single_vehicle_serves_all_stops() {
        let req = request(
            vec![vehicle(1, 10)],
            vec![stop(1, 30.0, 0, 0), stop(2, 10.0, 0, 0), stop(3, 20.0, 0, 0)],
        );
        let (space, depots) = NodeSpace::build(&req.vehicles, &req.stops, 720);
        let model = RoutingModel::new(&space, &depots, &req, 1000).unwrap();

        let assignment = solve(&model, &fast()).unwrap();
        assert_every_stop_once(&assignment, &model);
        assert!(assignment.is_vehicle_used(0));
        let s = schedule(&model, 0, &assignment.routes[0]).unwrap();
        assert_eq!(s.cost, assignment.cost);
    }

    #[test]
    fn test_unused_vehicle_stays_parked() {
        let req = request(
            vec![vehicle(1, 10), vehicle(2, 10)],
            vec![stop(1, 10.0, 0, 0), stop(2, 12.0, 0, 0)],
        );
        let (space, depots) = NodeSpace::build(&req.vehicles, &req.stops, 720);
        let model = RoutingModel::new(&space, &depots, &req, 1000).unwrap();

        let assignment = solve(&model, &fast()).unwrap();
        assert_every_stop_once(&assignment, &model);
        let used = (0..2).filter(|&v| assignment.is_vehicle_used(v)).count();
        assert_eq!(used, 1, "a second dispatch fee never pays off here");
    }

    #[test]
    fn test_capacity_splits_across_vehicles() {
        let req = request(
            vec![vehicle(1, 2), vehicle(2, 2)],
            vec![
                stop(1, 10.0, 0, 0),
                stop(2, 11.0, 0, 0),
                stop(3, 12.0, 0, 0),
                stop(4, 13.0, 0, 0),
            ],
        );
        let (space, depots) = NodeSpace::build(&req.vehicles, &req.stops, 720);
        let model = RoutingModel::new(&space, &depots, &req, 1000).unwrap();

        let assignment = solve(&model, &fast()).unwrap();
        assert_every_stop_once(&assignment, &model);
        assert!(assignment.routes.iter().all(|r| r.len() == 2));
    }

    #[test]
    fn test_time_windows_force_order() {
        // The far stop must be served first.
        let req = request(
            vec![vehicle(1, 10)],
            vec![stop(1, 10.0, 0, 0), stop(2, 40.0, 0, 44)],
        );
        let (space, depots) = NodeSpace::build(&req.vehicles, &req.stops, 720);
        let model = RoutingModel::new(&space, &depots, &req, 1000).unwrap();

        let assignment = solve(&model, &fast()).unwrap();
        assert_eq!(assignment.routes[0], vec![2, 1]);
    }

    #[test]
    fn test_unservable_stop_is_infeasible() {
        let req = request(vec![vehicle(1, 10)], vec![stop(1, 10.0, 0, 0), stop(2, 50.0, 0, 20)]);
        let (space, depots) = NodeSpace::build(&req.vehicles, &req.stops, 720);
        let model = RoutingModel::new(&space, &depots, &req, 1000).unwrap();

        let err = solve(&model, &fast()).unwrap_err();
        assert!(matches!(err, OptimizeError::Infeasible(_)));
        assert!(err.to_string().contains("stop 2"), "{err}");
    }

    #[test]
    fn test_local_search_never_worsens_construction() {
        let stops = (1..=8).map(|i| stop(i, (i * 7 % 50) as f64, 0, 0)).collect();
        let req = request(vec![vehicle(1, 4), vehicle(2, 4), vehicle(3, 4)], stops);
        let (space, depots) = NodeSpace::build(&req.vehicles, &req.stops, 720);
        let model = RoutingModel::new(&space, &depots, &req, 1000).unwrap();

        let deadline = Deadline::after(Instant::now(), Duration::from_millis(200));
        let mut routes = construct(&model, deadline).unwrap();
        let constructed: i64 = routes.iter().map(|r| r.cost).sum();
        let best = local_search(&mut routes, &model, &fast(), deadline);

        assert!(best.cost <= constructed);
        assert_every_stop_once(&best, &model);
        let recomputed: i64 = best
            .routes
            .iter()
            .enumerate()
            .map(|(v, stops)| route_cost(&model, v, stops).unwrap())
            .sum();
        assert_eq!(recomputed, best.cost);
    }

    #[test]
    fn test_construction_picks_cheapest_insertions() {
        let req = request(
            vec![vehicle(1, 10)],
            vec![stop(1, 30.0, 0, 0), stop(2, 10.0, 0, 0), stop(3, 20.0, 0, 0)],
        );
        let (space, depots) = NodeSpace::build(&req.vehicles, &req.stops, 720);
        let model = RoutingModel::new(&space, &depots, &req, 1).unwrap();

        let deadline = Deadline::after(Instant::now(), Duration::from_secs(5));
        let routes = construct(&model, deadline).unwrap();
        assert_eq!(routes[0].stops, vec![1, 3, 2]);
        assert_eq!(Some(routes[0].cost), route_cost(&model, 0, &routes[0].stops));
    }

    #[test]
    fn test_zero_budget_stops_before_routing() {
        let req = request(vec![vehicle(1, 10)], vec![stop(1, 10.0, 0, 0), stop(2, 20.0, 0, 0)]);
        let (space, depots) = NodeSpace::build(&req.vehicles, &req.stops, 720);
        let model = RoutingModel::new(&space, &depots, &req, 1000).unwrap();
        let options = SearchOptions {
            time_limit: Duration::ZERO,
            ..SearchOptions::default()
        };

        let err = solve(&model, &options).unwrap_err();
        assert_eq!(err, OptimizeError::TimeLimitReached { routed: 0, total: 2 });
        assert!(!err.is_internal());
    }

    #[test]
    fn test_unrepresentable_budget_never_expires() {
        let deadline = Deadline::after(Instant::now(), Duration::MAX);
        assert!(deadline.0.is_none());
        assert!(!deadline.reached());
        assert!(Deadline::after(Instant::now(), Duration::ZERO).reached());

        let req = request(vec![vehicle(1, 10)], vec![stop(1, 10.0, 0, 0)]);
        let (space, depots) = NodeSpace::build(&req.vehicles, &req.stops, 720);
        let model = RoutingModel::new(&space, &depots, &req, 1000).unwrap();
        let options = SearchOptions {
            time_limit: Duration::from_secs(u64::MAX),
            local_search_iterations: 50,
            ..SearchOptions::default()
        };
        let assignment = solve(&model, &options).unwrap();
        assert_every_stop_once(&assignment, &model);
    }

    #[test]
    fn test_arcs_cover_depot_to_depot() {
        let arcs: Vec<_> = arcs(0, &[3, 4], 1).collect();
        assert_eq!(arcs, vec![(0, 3), (3, 4), (4, 1)]);
        assert_eq!(super::arcs(0, &[], 0).count(), 1);
    }
}
