//! Optimizer error type.

use thiserror::Error;

/// Failures of a single optimize call.
///
/// `InvalidInput`, `Infeasible` and `TimeLimitReached` are business
/// outcomes reported back to the caller in the response. `DepotNotFound` after validation means the
/// node builder and the validator disagree, which is a bug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptimizeError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Infeasible(String),

    #[error("Search time limit reached after routing {routed} of {total} stops")]
    TimeLimitReached { routed: usize, total: usize },

    #[error("Depot LocationId {0} not found in solver graph")]
    DepotNotFound(i64),
}

impl OptimizeError {
    pub fn invalid(message: impl Into<String>) -> Self {
        OptimizeError::InvalidInput(message.into())
    }

    /// True for invariant violations that must never be reported as a
    /// regular error response.
    pub fn is_internal(&self) -> bool {
        matches!(self, OptimizeError::DepotNotFound(_))
    }
}
