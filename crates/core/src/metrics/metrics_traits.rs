//! Service trait for the metrics engine.

use crate::metrics::{PropertyInputs, PropertyMetrics};

/// Computes the derived metrics for a property from its current inputs.
///
/// Implementations must be pure: no retained state, no side effects, and
/// identical inputs always produce identical outputs. Degraded inputs yield
/// degraded values (zeros, floors, or `None` markers), never an error, so
/// callers do not need to guard the call.
pub trait MetricsServiceTrait: Send + Sync {
    fn compute(&self, inputs: &PropertyInputs) -> PropertyMetrics;
}
