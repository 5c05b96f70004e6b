//! Seams between the optimizer and the layers around it.
//!
//! The message layer only needs [`RouteOptimizer`]; request producers that
//! lack a routing engine can fill the matrices through a
//! [`TravelMatrixProvider`].

use crate::matrix::TravelMatrices;
use crate::model::{LocationRef, OptimizeRouteRequest, OptimizeRouteResponse};

/// Turns one request into one response. Implementations hold no state
/// between calls and may be shared across threads.
pub trait RouteOptimizer: Send + Sync {
    fn optimize(&self, request: &OptimizeRouteRequest) -> OptimizeRouteResponse;
}

/// Provides distance and travel-time matrices for a set of locations.
///
/// Both matrices are indexed by the provided location order.
pub trait TravelMatrixProvider {
    fn matrices_for(&self, locations: &[&LocationRef]) -> TravelMatrices;
}
