//! Exporter capability implemented by the host shell.

use crate::errors::Result;
use crate::export::{Snapshot, SnapshotOptions, SnapshotRegion};

/// Captures a rendered visual region as a raster image.
///
/// Implemented by the host shell; the crate itself does no rasterization.
/// Exports read nothing from the metrics engine and have no effect on
/// computed values.
pub trait SnapshotExporterTrait: Send + Sync {
    fn export_snapshot(
        &self,
        region: &SnapshotRegion,
        options: &SnapshotOptions,
    ) -> Result<Snapshot>;
}
