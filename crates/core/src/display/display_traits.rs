//! Render capability implemented by the presentation layer.

use crate::errors::Result;
use crate::metrics::PropertyMetrics;
use crate::settings::Theme;

/// Renders the derived metrics under one theme.
///
/// Implemented by the presentation layer and consumed by the application
/// shell; the engine never renders. Implementations own layout and styling,
/// but the formatting rules of this module (zero-decimal currency,
/// two-decimal percentages, placeholder for undefined values) apply.
pub trait MetricsRendererTrait: Send + Sync {
    fn render(&self, metrics: &PropertyMetrics, theme: Theme) -> Result<()>;
}
