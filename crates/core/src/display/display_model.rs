use serde::{Deserialize, Serialize};

/// Formatted view of the derived metrics, ready for the presentation layer.
///
/// Currency amounts carry no decimal places, percentages carry two, and a
/// metric with no defined value is substituted with the placeholder glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsDisplay {
    pub loan_amount: String,
    pub annual_rent: String,
    pub property_mgmt_cost: String,
    pub annual_expenses: String,
    pub annual_debt_service: String,
    pub equity_at_purchase: String,
    pub gross_yield: String,
    pub net_yield: String,
    pub cash_flow: String,
    pub weekly_cash_flow: String,
    pub below_market_percent: String,
    /// Presentation cue for the annual cash-flow cell (green when
    /// non-negative, red otherwise).
    pub cash_flow_positive: bool,
    /// Presentation cue for the weekly cash-flow cell.
    pub weekly_cash_flow_positive: bool,
}
