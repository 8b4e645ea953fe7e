use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;

use crate::metrics::metrics_constants::{MAX_DEPOSIT_PERCENT, PERCENT, WEEKS_PER_YEAR};
use crate::metrics::{MetricsServiceTrait, PropertyInputs, PropertyMetrics};

/// Stateless engine deriving the full set of investment metrics from the
/// current input record.
///
/// Every output is recomputed on each call; there is no caching and no
/// retained state, so the caller is free to invoke it on every field change.
/// The figures are year-one cash-flow estimates: debt service is simple
/// interest-only, not an amortization schedule.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsService;

impl MetricsService {
    pub fn new() -> Self {
        MetricsService
    }

    /// Outstanding loan after the deposit. A deposit outside [0, 100] behaves
    /// as if clamped into that range; the result never goes negative.
    fn loan_amount(inputs: &PropertyInputs) -> Decimal {
        let deposit = inputs
            .deposit_percent
            .clamp(Decimal::ZERO, MAX_DEPOSIT_PERCENT);
        let financed = inputs.purchase_price * (Decimal::ONE - deposit / PERCENT);
        financed.max(Decimal::ZERO)
    }

    /// Annual rent net of vacancy. The rent is scaled by its collection
    /// frequency, then by the occupied share of the 52-week year. The
    /// division by 52 happens last so exact inputs stay exact.
    fn annual_rent(inputs: &PropertyInputs) -> Decimal {
        let occupied_weeks =
            (WEEKS_PER_YEAR - inputs.vacancy_weeks).clamp(Decimal::ZERO, WEEKS_PER_YEAR);
        inputs.rent * inputs.rent_period.periods_per_year() * occupied_weeks / WEEKS_PER_YEAR
    }

    /// Year-one interest cost. Zero when there is no loan or the rate is
    /// negative.
    fn annual_debt_service(loan_amount: Decimal, interest_rate: Decimal) -> Decimal {
        if loan_amount <= Decimal::zero() || interest_rate < Decimal::zero() {
            return Decimal::ZERO;
        }
        loan_amount * interest_rate / PERCENT
    }

    /// `numerator` as a percentage of `denominator`, or `None` when the
    /// denominator is not positive.
    fn percent_of(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
        if denominator > Decimal::zero() {
            Some(numerator / denominator * PERCENT)
        } else {
            None
        }
    }
}

impl MetricsServiceTrait for MetricsService {
    fn compute(&self, inputs: &PropertyInputs) -> PropertyMetrics {
        debug!("Recomputing property metrics");

        let loan_amount = Self::loan_amount(inputs);
        let annual_rent = Self::annual_rent(inputs);
        let property_mgmt_cost = annual_rent * inputs.property_mgmt_percent / PERCENT;
        let annual_expenses = inputs.rates
            + inputs.insurance
            + inputs.maintenance
            + inputs.body_corp
            + property_mgmt_cost;
        let annual_debt_service = Self::annual_debt_service(loan_amount, inputs.interest_rate);

        let equity_at_purchase = (inputs.market_value - loan_amount).max(Decimal::ZERO);
        let cash_flow = annual_rent - annual_expenses - annual_debt_service;

        PropertyMetrics {
            loan_amount,
            annual_rent,
            property_mgmt_cost,
            annual_expenses,
            annual_debt_service,
            equity_at_purchase,
            gross_yield: Self::percent_of(annual_rent, inputs.purchase_price),
            net_yield: Self::percent_of(annual_rent - annual_expenses, inputs.purchase_price),
            cash_flow,
            weekly_cash_flow: cash_flow / WEEKS_PER_YEAR,
            below_market_percent: Self::percent_of(
                inputs.market_value - inputs.purchase_price,
                inputs.market_value,
            ),
        }
    }
}
