//! Input and output records for the property metrics engine.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::metrics::metrics_constants::{
    FORTNIGHTLY_PERIODS, MONTHLY_PERIODS, WEEKLY_PERIODS, YEARLY_PERIODS,
};

/// Collection frequency for the rent input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RentPeriod {
    #[default]
    Weekly,
    Fortnightly,
    Monthly,
    Yearly,
}

impl RentPeriod {
    /// Number of rent collections in a full year.
    pub fn periods_per_year(&self) -> Decimal {
        match self {
            RentPeriod::Weekly => WEEKLY_PERIODS,
            RentPeriod::Fortnightly => FORTNIGHTLY_PERIODS,
            RentPeriod::Monthly => MONTHLY_PERIODS,
            RentPeriod::Yearly => YEARLY_PERIODS,
        }
    }
}

/// Editable input record for a property under evaluation.
///
/// Fields map one-to-one onto the calculator's input cells and are mutated
/// field-by-field as the user types; the caller recomputes the metrics after
/// each change. Wire names are camelCase. A field missing from an incoming
/// payload deserializes to zero (or the weekly rent period) rather than
/// failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyInputs {
    #[serde(default)]
    pub purchase_price: Decimal,
    #[serde(default)]
    pub market_value: Decimal,
    /// Deposit as a percentage of the purchase price. Values outside [0, 100]
    /// behave as if clamped when the loan is derived.
    #[serde(default)]
    pub deposit_percent: Decimal,
    /// Annual simple interest rate, percent. Not clamped.
    #[serde(default)]
    pub interest_rate: Decimal,
    /// Rent per `rent_period`.
    #[serde(default)]
    pub rent: Decimal,
    #[serde(default)]
    pub rent_period: RentPeriod,
    /// Expected vacant weeks per year. Values outside [0, 52] behave as if
    /// clamped when the annual rent is derived.
    #[serde(default)]
    pub vacancy_weeks: Decimal,
    /// Annual council rates
    #[serde(default)]
    pub rates: Decimal,
    /// Annual insurance premium
    #[serde(default)]
    pub insurance: Decimal,
    /// Annual maintenance allowance
    #[serde(default)]
    pub maintenance: Decimal,
    /// Annual body corporate levies
    #[serde(default)]
    pub body_corp: Decimal,
    /// Management fee as a percentage of annual rent. Not clamped.
    #[serde(default)]
    pub property_mgmt_percent: Decimal,
}

impl Default for PropertyInputs {
    /// Defaults for a freshly created record: 20% deposit, 7% interest, two
    /// vacant weeks, 8% management fee, weekly rent, all amounts zero.
    fn default() -> Self {
        PropertyInputs {
            purchase_price: Decimal::ZERO,
            market_value: Decimal::ZERO,
            deposit_percent: dec!(20),
            interest_rate: dec!(7),
            rent: Decimal::ZERO,
            rent_period: RentPeriod::Weekly,
            vacancy_weeks: dec!(2),
            rates: Decimal::ZERO,
            insurance: Decimal::ZERO,
            maintenance: Decimal::ZERO,
            body_corp: Decimal::ZERO,
            property_mgmt_percent: dec!(8),
        }
    }
}

impl PropertyInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lenient intake from a UI payload. Missing fields degrade to zero;
    /// malformed JSON or non-numeric values are a validation error.
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// Derived metrics for the current inputs. Read-only; recomputed in full on
/// every input change and never persisted.
///
/// The yield and discount ratios are `None` when their denominator is zero.
/// The presentation layer renders a placeholder glyph for those.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyMetrics {
    pub loan_amount: Decimal,
    pub annual_rent: Decimal,
    pub property_mgmt_cost: Decimal,
    pub annual_expenses: Decimal,
    pub annual_debt_service: Decimal,
    pub equity_at_purchase: Decimal,
    pub gross_yield: Option<Decimal>,
    pub net_yield: Option<Decimal>,
    pub cash_flow: Decimal,
    pub weekly_cash_flow: Decimal,
    pub below_market_percent: Option<Decimal>,
}
