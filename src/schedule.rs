//! Cumulative time and load propagation along one vehicle's route.
//!
//! A route is the ordered list of stop nodes a vehicle serves between its
//! start and end depots. Time is propagated as an interval per position:
//! `I_k = (I_{k-1} + [transit, transit + slack]) ∩ window(k)`. An empty
//! interval means the route violates a hard time window.

use crate::dimensions::{CAPACITY_DIMENSIONS, CapacityDimension, RoutingModel};

/// Solved cumulative values of a feasible route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSchedule {
    /// Cumul time at each stop, in route order.
    pub arrivals: Vec<i64>,
    /// Cumul time at the start depot.
    pub start_time: i64,
    /// Cumul time at the end depot.
    pub end_time: i64,
    /// Loads at departure from each stop, in route order.
    pub loads: Vec<[i64; CAPACITY_DIMENSIONS]>,
    pub overtime_minutes: i64,
    /// Scaled cost: fixed fee, arc costs and overtime penalty.
    pub cost: i64,
}

/// Scaled cost of serving `stops` with `vehicle`, or `None` when a hard
/// capacity or time-window bound is violated. An empty route costs nothing.
pub fn route_cost(model: &RoutingModel<'_>, vehicle: usize, stops: &[usize]) -> Option<i64> {
    if stops.is_empty() {
        return Some(0);
    }
    if !loads_fit(model, vehicle, stops) {
        return None;
    }

    let v = model.vehicle(vehicle);
    let slack = model.time().slack_max;
    let (mut lo, mut hi) = model.window(v.start);
    let mut prev = v.start;
    let mut cost = v.fixed_cost;

    for &node in stops.iter().chain(std::iter::once(&v.end)) {
        let transit = model.transit_time(vehicle, prev, node);
        let (ready, due) = model.window(node);
        lo = (lo + transit).max(ready);
        hi = (hi + transit + slack).min(due);
        if lo > hi {
            return None;
        }
        cost += model.arc_cost(vehicle, prev, node);
        prev = node;
    }

    Some(cost + model.overtime_penalty(vehicle, lo))
}

/// Full schedule of a route, with the end time pushed as early as the
/// windows allow and earlier cumuls rebuilt backwards from it.
pub fn schedule(
    model: &RoutingModel<'_>,
    vehicle: usize,
    stops: &[usize],
) -> Option<RouteSchedule> {
    if !loads_fit(model, vehicle, stops) {
        return None;
    }

    let v = model.vehicle(vehicle);
    let slack = model.time().slack_max;

    let mut path = Vec::with_capacity(stops.len() + 2);
    path.push(v.start);
    path.extend_from_slice(stops);
    path.push(v.end);

    let mut bounds = Vec::with_capacity(path.len());
    bounds.push(model.window(v.start));
    let mut transits = Vec::with_capacity(path.len() - 1);
    for pair in path.windows(2) {
        let (lo, hi) = bounds[bounds.len() - 1];
        let transit = model.transit_time(vehicle, pair[0], pair[1]);
        let (ready, due) = model.window(pair[1]);
        let next = ((lo + transit).max(ready), (hi + transit + slack).min(due));
        if next.0 > next.1 {
            return None;
        }
        bounds.push(next);
        transits.push(transit);
    }

    let mut times = vec![0; path.len()];
    let last = path.len() - 1;
    times[last] = bounds[last].0;
    for k in (0..last).rev() {
        times[k] = bounds[k].0.max(times[k + 1] - transits[k] - slack);
    }

    let mut loads = Vec::with_capacity(stops.len());
    let mut load = [0; CAPACITY_DIMENSIONS];
    for &node in stops {
        for dimension in CapacityDimension::ALL {
            load[dimension.index()] += model.demand(dimension, node);
        }
        loads.push(load);
    }

    let end_time = times[last];
    let cost = if stops.is_empty() {
        0
    } else {
        v.fixed_cost
            + path
                .windows(2)
                .map(|pair| model.arc_cost(vehicle, pair[0], pair[1]))
                .sum::<i64>()
            + model.overtime_penalty(vehicle, end_time)
    };

    Some(RouteSchedule {
        arrivals: times[1..last].to_vec(),
        start_time: times[0],
        end_time,
        loads,
        overtime_minutes: model.overtime_minutes(vehicle, end_time),
        cost,
    })
}

/// Propagation state of a feasible route, kept so single-stop insertions
/// can be priced without re-walking the whole route.
///
/// Positions index the full path: 0 is the start depot, `1..=m` are the
/// stops and `m + 1` is the end depot.
#[derive(Debug, Clone)]
pub struct RouteProfile {
    vehicle: usize,
    path: Vec<usize>,
    /// Forward time interval at each position.
    bounds: Vec<(i64, i64)>,
    /// Load after serving each position.
    loads: Vec<[i64; CAPACITY_DIMENSIONS]>,
    /// Per-dimension min and max of `loads[k..]`.
    suffix_min: Vec<[i64; CAPACITY_DIMENSIONS]>,
    suffix_max: Vec<[i64; CAPACITY_DIMENSIONS]>,
    /// Waiting absorbed up to each position.
    waited: Vec<i64>,
    /// `min(hi_j - lo_j + waited_j)` over positions after `k`.
    room: Vec<i64>,
    arc_cost: i64,
    cost: i64,
    feasible: bool,
}

impl RouteProfile {
    /// Profile of `stops` served by `vehicle`. Nothing can be inserted into
    /// a route whose time windows are already broken.
    pub fn new(model: &RoutingModel<'_>, vehicle: usize, stops: &[usize]) -> Self {
        let v = model.vehicle(vehicle);
        let slack = model.time().slack_max;

        let mut path = Vec::with_capacity(stops.len() + 2);
        path.push(v.start);
        path.extend_from_slice(stops);
        path.push(v.end);
        let len = path.len();

        let mut bounds = Vec::with_capacity(len);
        let mut waited = Vec::with_capacity(len);
        let mut loads = Vec::with_capacity(len);
        let mut arc_cost = 0;
        bounds.push(model.window(v.start));
        waited.push(0);
        loads.push([0; CAPACITY_DIMENSIONS]);

        for k in 1..len {
            let (from, to) = (path[k - 1], path[k]);
            let (lo, hi) = bounds[k - 1];
            let transit = model.transit_time(vehicle, from, to);
            let (ready, due) = model.window(to);
            let next = ((lo + transit).max(ready), (hi + transit + slack).min(due));
            waited.push(waited[k - 1] + next.0 - (lo + transit));
            bounds.push(next);

            let mut load = loads[k - 1];
            for dimension in CapacityDimension::ALL {
                load[dimension.index()] += model.demand(dimension, to);
            }
            loads.push(load);
            arc_cost += model.arc_cost(vehicle, from, to);
        }

        let mut suffix_min = loads.clone();
        let mut suffix_max = loads.clone();
        let mut room = vec![i64::MAX; len];
        for k in (0..len - 1).rev() {
            for i in 0..CAPACITY_DIMENSIONS {
                suffix_min[k][i] = suffix_min[k][i].min(suffix_min[k + 1][i]);
                suffix_max[k][i] = suffix_max[k][i].max(suffix_max[k + 1][i]);
            }
            let (lo, hi) = bounds[k + 1];
            room[k] = room[k + 1].min(hi - lo + waited[k + 1]);
        }

        let cost = if stops.is_empty() {
            0
        } else {
            v.fixed_cost + arc_cost + model.overtime_penalty(vehicle, bounds[len - 1].0)
        };
        let feasible = bounds.iter().all(|(lo, hi)| lo <= hi);

        Self {
            vehicle,
            path,
            bounds,
            loads,
            suffix_min,
            suffix_max,
            waited,
            room,
            arc_cost,
            cost,
            feasible,
        }
    }

    /// Scaled cost of the profiled route, as [`route_cost`] reports it.
    pub fn cost(&self) -> i64 {
        self.cost
    }

    /// Number of stops on the profiled route.
    pub fn stop_count(&self) -> usize {
        self.path.len() - 2
    }

    /// Cost of the route with `node` inserted at stop index `position`, or
    /// `None` when that breaks a capacity or time-window bound. Equal to
    /// [`route_cost`] of the extended route.
    pub fn insertion_cost(
        &self,
        model: &RoutingModel<'_>,
        node: usize,
        position: usize,
    ) -> Option<i64> {
        if !self.feasible {
            return None;
        }
        let v = model.vehicle(self.vehicle);
        for dimension in CapacityDimension::ALL {
            let i = dimension.index();
            let demand = model.demand(dimension, node);
            let here = self.loads[position][i] + demand;
            let low = self.suffix_min[position + 1][i] + demand;
            let high = self.suffix_max[position + 1][i] + demand;
            if here < 0 || here > v.capacity[i] || low < 0 || high > v.capacity[i] {
                return None;
            }
        }

        let end_time = self.end_time_with(model, node, position)?;
        let (prev, next) = (self.path[position], self.path[position + 1]);
        let arc_cost = self.arc_cost - model.arc_cost(self.vehicle, prev, next)
            + model.arc_cost(self.vehicle, prev, node)
            + model.arc_cost(self.vehicle, node, next);

        Some(v.fixed_cost + arc_cost + model.overtime_penalty(self.vehicle, end_time))
    }

    /// Earliest end cumul after inserting `node`, or `None` when some
    /// interval empties.
    fn end_time_with(&self, model: &RoutingModel<'_>, node: usize, position: usize) -> Option<i64> {
        let slack = model.time().slack_max;
        let last = self.path.len() - 1;
        let (mut lo, mut hi) = self.bounds[position];
        let mut from = self.path[position];

        for k in position..=last {
            let to = if k == position { node } else { self.path[k] };
            let transit = model.transit_time(self.vehicle, from, to);
            let (ready, due) = model.window(to);
            lo = (lo + transit).max(ready);
            hi = (hi + transit + slack).min(due);
            if lo > hi {
                return None;
            }
            from = to;
            if k == position {
                continue;
            }

            let (base_lo, base_hi) = self.bounds[k];
            if hi == base_hi && lo >= base_lo {
                // Upper bounds from here on are unchanged; the delay only
                // shrinks by the waiting it absorbs.
                let delay = lo - base_lo;
                if self.room[k] != i64::MAX && delay > self.room[k] - self.waited[k] {
                    return None;
                }
                let absorbed = self.waited[last] - self.waited[k];
                return Some(self.bounds[last].0 + (delay - absorbed).max(0));
            }
        }

        Some(lo)
    }
}

/// Every prefix load stays within `[0, capacity]` in all dimensions.
fn loads_fit(model: &RoutingModel<'_>, vehicle: usize, stops: &[usize]) -> bool {
    let capacity = model.vehicle(vehicle).capacity;
    let mut load = [0; CAPACITY_DIMENSIONS];
    for &node in stops {
        for dimension in CapacityDimension::ALL {
            let i = dimension.index();
            load[i] += model.demand(dimension, node);
            if load[i] < 0 || load[i] > capacity[i] {
                return false;
            }
        }
    }
    true
}
