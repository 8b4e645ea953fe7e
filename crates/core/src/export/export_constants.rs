use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// JPEG encoding quality for snapshot exports, in [0, 1]
pub const DEFAULT_SNAPSHOT_QUALITY: Decimal = dec!(0.95);

/// Suggested file name for the downloaded snapshot
pub const DEFAULT_SNAPSHOT_FILE_NAME: &str = "property-wizard.jpg";

/// MIME type of exported snapshots
pub const SNAPSHOT_MIME_TYPE: &str = "image/jpeg";
