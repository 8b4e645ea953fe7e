//! Property-based tests for the metrics engine.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use proptest::prelude::*;
use property_wizard_core::metrics::{
    MetricsService, MetricsServiceTrait, PropertyInputs, RentPeriod,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// =============================================================================
// Generators
// =============================================================================

/// Generates a random rent collection frequency.
fn arb_rent_period() -> impl Strategy<Value = RentPeriod> {
    prop_oneof![
        Just(RentPeriod::Weekly),
        Just(RentPeriod::Fortnightly),
        Just(RentPeriod::Monthly),
        Just(RentPeriod::Yearly),
    ]
}

/// Generates a non-negative currency amount up to $100M, two decimal places.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Generates a percentage well outside the sensible range, from -500% to
/// 500%, two decimal places.
fn arb_percent_wild() -> impl Strategy<Value = Decimal> {
    (-50_000i64..50_000).prop_map(|bps| Decimal::new(bps, 2))
}

/// Generates a vacancy figure from -104 to 104 weeks, one decimal place.
fn arb_weeks_wild() -> impl Strategy<Value = Decimal> {
    (-1_040i64..1_040).prop_map(|tenths| Decimal::new(tenths, 1))
}

/// Generates a full input record with deliberately out-of-range percentages
/// and vacancy values mixed in.
fn arb_inputs() -> impl Strategy<Value = PropertyInputs> {
    (
        (
            arb_amount(),
            arb_amount(),
            arb_percent_wild(),
            arb_percent_wild(),
        ),
        (arb_amount(), arb_rent_period(), arb_weeks_wild()),
        (
            arb_amount(),
            arb_amount(),
            arb_amount(),
            arb_amount(),
            arb_percent_wild(),
        ),
    )
        .prop_map(
            |(
                (purchase_price, market_value, deposit_percent, interest_rate),
                (rent, rent_period, vacancy_weeks),
                (rates, insurance, maintenance, body_corp, property_mgmt_percent),
            )| PropertyInputs {
                purchase_price,
                market_value,
                deposit_percent,
                interest_rate,
                rent,
                rent_period,
                vacancy_weeks,
                rates,
                insurance,
                maintenance,
                body_corp,
                property_mgmt_percent,
            },
        )
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A deposit outside [0, 100] produces the same loan as its clamp into
    /// that range.
    #[test]
    fn prop_deposit_outside_range_behaves_as_clamped(inputs in arb_inputs()) {
        let service = MetricsService::new();

        let mut clamped = inputs.clone();
        clamped.deposit_percent = inputs.deposit_percent.clamp(dec!(0), dec!(100));

        prop_assert_eq!(
            service.compute(&inputs).loan_amount,
            service.compute(&clamped).loan_amount
        );
    }

    /// A vacancy outside [0, 52] produces the same annual rent as its clamp
    /// into that range.
    #[test]
    fn prop_vacancy_outside_range_behaves_as_clamped(inputs in arb_inputs()) {
        let service = MetricsService::new();

        let mut clamped = inputs.clone();
        clamped.vacancy_weeks = inputs.vacancy_weeks.clamp(dec!(0), dec!(52));

        prop_assert_eq!(
            service.compute(&inputs).annual_rent,
            service.compute(&clamped).annual_rent
        );
    }

    /// A negative interest rate never produces debt service.
    #[test]
    fn prop_negative_rate_means_zero_debt_service(
        mut inputs in arb_inputs(),
        rate_bps in -50_000i64..0,
    ) {
        inputs.interest_rate = Decimal::new(rate_bps, 2);
        let metrics = MetricsService::new().compute(&inputs);

        prop_assert_eq!(metrics.annual_debt_service, Decimal::ZERO);
    }

    /// With the whole price covered by the deposit there is no loan and no
    /// debt service, whatever the rate.
    #[test]
    fn prop_full_deposit_means_zero_debt_service(
        mut inputs in arb_inputs(),
        deposit in 100i64..1_000,
    ) {
        inputs.deposit_percent = Decimal::from(deposit);
        let metrics = MetricsService::new().compute(&inputs);

        prop_assert_eq!(metrics.loan_amount, Decimal::ZERO);
        prop_assert_eq!(metrics.annual_debt_service, Decimal::ZERO);
    }

    /// Recomputation with unchanged inputs is exact: the two records compare
    /// equal field for field.
    #[test]
    fn prop_compute_is_idempotent(inputs in arb_inputs()) {
        let service = MetricsService::new();
        prop_assert_eq!(service.compute(&inputs), service.compute(&inputs));
    }

    /// The engine is total: no input combination errors or panics, floored
    /// metrics never go negative, and the undefined markers appear exactly
    /// when their denominator is not positive.
    #[test]
    fn prop_compute_is_total_and_degrades_gracefully(inputs in arb_inputs()) {
        let metrics = MetricsService::new().compute(&inputs);

        prop_assert!(metrics.loan_amount >= Decimal::ZERO);
        prop_assert!(metrics.annual_rent >= Decimal::ZERO);
        prop_assert!(metrics.equity_at_purchase >= Decimal::ZERO);
        prop_assert!(metrics.annual_debt_service >= Decimal::ZERO);

        prop_assert_eq!(
            metrics.gross_yield.is_some(),
            inputs.purchase_price > Decimal::ZERO
        );
        prop_assert_eq!(
            metrics.net_yield.is_some(),
            inputs.purchase_price > Decimal::ZERO
        );
        prop_assert_eq!(
            metrics.below_market_percent.is_some(),
            inputs.market_value > Decimal::ZERO
        );
    }
}
