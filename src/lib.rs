//! route-optimizer core
//!
//! Capacitated, time-windowed vehicle routing: one request in, one route
//! per vehicle out.

pub mod dimensions;
pub mod error;
pub mod mapper;
pub mod matrix;
pub mod model;
pub mod nodes;
pub mod optimizer;
pub mod schedule;
pub mod solver;
pub mod traits;
pub mod validate;

pub use error::OptimizeError;
pub use model::{
    LocationRef, OptimizationSettings, OptimizeRouteRequest, OptimizeRouteResponse, RouteResult,
    StopInput, StopType, TaskAssignment, VehicleInput,
};
pub use optimizer::{Optimizer, OptimizerOptions, optimize};
pub use traits::{RouteOptimizer, TravelMatrixProvider};
