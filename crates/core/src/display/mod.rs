//! Presentation boundary - formatted view model and render capability.

mod display_model;
mod display_service;
mod display_traits;


// Re-export the public interface
pub use display_model::MetricsDisplay;
pub use display_service::{format_currency, format_percent, DisplayService};
pub use display_traits::MetricsRendererTrait;
