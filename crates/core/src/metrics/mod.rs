//! Metrics module - input/output records, the engine, and its trait.

mod metrics_constants;
mod metrics_model;
mod metrics_service;
mod metrics_traits;



// Re-export the public interface
pub use metrics_constants::*;
pub use metrics_model::{PropertyInputs, PropertyMetrics, RentPeriod};
pub use metrics_service::MetricsService;
pub use metrics_traits::MetricsServiceTrait;
