/// Decimal places for currency amounts in display output
pub const CURRENCY_DISPLAY_PRECISION: u32 = 0;

/// Decimal places for percentages in display output
pub const PERCENT_DISPLAY_PRECISION: u32 = 2;

/// Glyph rendered in place of a metric with no defined value
pub const PLACEHOLDER_GLYPH: &str = "—";

/// Currency symbol prefixed to display amounts
pub const CURRENCY_SYMBOL: &str = "$";
