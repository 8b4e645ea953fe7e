//! Snapshot export boundary - models, errors, and the exporter capability.

mod export_constants;
mod export_errors;
mod export_model;
mod export_traits;

// Re-export the public interface
pub use export_constants::*;
pub use export_errors::ExportError;
pub use export_model::{Snapshot, SnapshotOptions, SnapshotRegion};
pub use export_traits::SnapshotExporterTrait;
