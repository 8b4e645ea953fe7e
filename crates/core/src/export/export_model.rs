use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::export::export_constants::{DEFAULT_SNAPSHOT_FILE_NAME, DEFAULT_SNAPSHOT_QUALITY};
use crate::settings::Theme;

/// Identifies the rendered visual region to capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotRegion {
    /// Element id of the calculator panel in the host UI.
    pub element_id: String,
}

impl SnapshotRegion {
    pub fn new(element_id: impl Into<String>) -> Self {
        SnapshotRegion {
            element_id: element_id.into(),
        }
    }
}

/// Options for a snapshot export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotOptions {
    /// JPEG quality in [0, 1].
    pub quality: Decimal,
    /// Suggested download file name.
    pub file_name: String,
    /// Background color painted behind transparent areas.
    pub background: String,
}

impl SnapshotOptions {
    /// Export options matching the calculator's download action for the
    /// active theme.
    pub fn for_theme(theme: Theme) -> Self {
        SnapshotOptions {
            quality: DEFAULT_SNAPSHOT_QUALITY,
            file_name: DEFAULT_SNAPSHOT_FILE_NAME.to_string(),
            background: theme.background_color().to_string(),
        }
    }
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self::for_theme(Theme::Light)
    }
}

/// A captured raster image offered to the user as a download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}
