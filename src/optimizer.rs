//! Optimize entry point: validate, build the model, search, map.

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::dimensions::RoutingModel;
use crate::error::OptimizeError;
use crate::mapper::map_assignment;
use crate::model::{OptimizeRouteRequest, OptimizeRouteResponse};
use crate::nodes::NodeSpace;
use crate::solver::{SearchOptions, solve};
use crate::traits::RouteOptimizer;
use crate::validate::validate;

#[derive(Debug, Clone)]
pub struct OptimizerOptions {
    /// Integer scale applied to fees, time costs and distance costs.
    pub cost_scale: i64,
    /// Maximum iterations for local search improvement.
    pub local_search_iterations: usize,
    /// Guided local search penalty weight; zero runs plain local search.
    pub guided_lambda_coefficient: f64,
    /// Local optima allowed without a new best before the search stops.
    pub max_stale_rounds: usize,
    /// Log solver nodes and vehicle bindings at debug level.
    pub trace_model: bool,
}

impl Default for OptimizerOptions {
    fn default() -> Self {
        let search = SearchOptions::default();
        Self {
            cost_scale: 1000,
            local_search_iterations: search.local_search_iterations,
            guided_lambda_coefficient: search.guided_lambda_coefficient,
            max_stale_rounds: search.max_stale_rounds,
            trace_model: false,
        }
    }
}

/// Stateless route optimizer. Every call builds its own model.
#[derive(Debug, Clone, Default)]
pub struct Optimizer {
    options: OptimizerOptions,
}

impl Optimizer {
    pub fn new(options: OptimizerOptions) -> Self {
        Self { options }
    }

    /// Runs one optimization and reports every failure as an error.
    pub fn try_optimize(
        &self,
        request: &OptimizeRouteRequest,
    ) -> Result<OptimizeRouteResponse, OptimizeError> {
        validate(request)?;

        let (space, depots) =
            NodeSpace::build(&request.vehicles, &request.stops, request.settings.horizon_minutes);
        let model = RoutingModel::new(&space, &depots, request, self.options.cost_scale)?;
        if self.options.trace_model {
            model.trace();
        }

        let search = SearchOptions {
            time_limit: Duration::from_secs(request.settings.search_time_limit_seconds),
            local_search_iterations: self.options.local_search_iterations,
            guided_lambda_coefficient: self.options.guided_lambda_coefficient,
            max_stale_rounds: self.options.max_stale_rounds,
        };
        let assignment = solve(&model, &search)?;

        map_assignment(request, &model, &assignment)
    }

    /// Runs one optimization, turning validation failures and infeasibility
    /// into a response with `error_message` set.
    ///
    /// # Panics
    ///
    /// Panics when the solver graph disagrees with a request that passed
    /// validation. That is a bug in this crate, not bad input.
    pub fn optimize(&self, request: &OptimizeRouteRequest) -> OptimizeRouteResponse {
        let started = Instant::now();
        info!(
            tenant_id = %request.tenant_id,
            run_id = %request.run_id,
            vehicles = request.vehicles.len(),
            stops = request.stops.len(),
            "optimization started"
        );

        match self.try_optimize(request) {
            Ok(response) => {
                info!(
                    tenant_id = %request.tenant_id,
                    run_id = %request.run_id,
                    used_vehicles = response.routes.iter().filter(|r| r.used).count(),
                    total_cost = response.total_cost,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "optimization completed"
                );
                response
            }
            Err(err) if err.is_internal() => {
                panic!("solver graph diverged from validated request: {err}");
            }
            Err(err) => {
                warn!(
                    tenant_id = %request.tenant_id,
                    run_id = %request.run_id,
                    error = %err,
                    "optimization rejected"
                );
                OptimizeRouteResponse::failure(request, err.to_string())
            }
        }
    }
}

impl RouteOptimizer for Optimizer {
    fn optimize(&self, request: &OptimizeRouteRequest) -> OptimizeRouteResponse {
        Optimizer::optimize(self, request)
    }
}

/// Optimizes with default options.
pub fn optimize(request: &OptimizeRouteRequest) -> OptimizeRouteResponse {
    Optimizer::default().optimize(request)
}
