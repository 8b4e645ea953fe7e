pub mod constants;
pub mod display;
pub mod errors;
pub mod export;
pub mod metrics;
pub mod settings;

pub use errors::{Error, Result};
pub use metrics::*;
pub use settings::*;
