use num_traits::Zero;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{
    CURRENCY_DISPLAY_PRECISION, CURRENCY_SYMBOL, PERCENT_DISPLAY_PRECISION, PLACEHOLDER_GLYPH,
};
use crate::display::MetricsDisplay;
use crate::metrics::PropertyMetrics;

/// Formats a currency amount: symbol, thousands grouping, no decimal places.
/// Negative amounts carry the sign ahead of the symbol (`-$98`).
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(
        CURRENCY_DISPLAY_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    );
    let grouped = group_thousands(&rounded.abs().to_string());
    if rounded < Decimal::zero() {
        format!("-{}{}", CURRENCY_SYMBOL, grouped)
    } else {
        format!("{}{}", CURRENCY_SYMBOL, grouped)
    }
}

/// Formats a ratio as a percentage with two decimal places, or the
/// placeholder glyph when the value is undefined.
pub fn format_percent(value: Option<Decimal>) -> String {
    match value {
        Some(pct) => {
            let rounded = pct.round_dp_with_strategy(
                PERCENT_DISPLAY_PRECISION,
                RoundingStrategy::MidpointAwayFromZero,
            );
            format!("{:.2}%", rounded)
        }
        None => PLACEHOLDER_GLYPH.to_string(),
    }
}

// Inserts a comma every three digits, counting from the right. The input is
// an unsigned whole-number string (rounding to zero decimal places happens
// first).
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Builds the formatted view model shipped to the presentation layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayService;

impl DisplayService {
    pub fn new() -> Self {
        DisplayService
    }

    pub fn prepare(&self, metrics: &PropertyMetrics) -> MetricsDisplay {
        MetricsDisplay {
            loan_amount: format_currency(metrics.loan_amount),
            annual_rent: format_currency(metrics.annual_rent),
            property_mgmt_cost: format_currency(metrics.property_mgmt_cost),
            annual_expenses: format_currency(metrics.annual_expenses),
            annual_debt_service: format_currency(metrics.annual_debt_service),
            equity_at_purchase: format_currency(metrics.equity_at_purchase),
            gross_yield: format_percent(metrics.gross_yield),
            net_yield: format_percent(metrics.net_yield),
            cash_flow: format_currency(metrics.cash_flow),
            weekly_cash_flow: format_currency(metrics.weekly_cash_flow),
            below_market_percent: format_percent(metrics.below_market_percent),
            cash_flow_positive: metrics.cash_flow >= Decimal::zero(),
            weekly_cash_flow_positive: metrics.weekly_cash_flow >= Decimal::zero(),
        }
    }
}
