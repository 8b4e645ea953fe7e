use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Rent collections per year, weekly frequency
pub const WEEKLY_PERIODS: Decimal = dec!(52);

/// Rent collections per year, fortnightly frequency
pub const FORTNIGHTLY_PERIODS: Decimal = dec!(26);

/// Rent collections per year, monthly frequency
pub const MONTHLY_PERIODS: Decimal = dec!(12);

/// Rent collections per year, yearly frequency
pub const YEARLY_PERIODS: Decimal = dec!(1);

/// Weeks in a rental year. Shared by the vacancy factor and the weekly
/// cash-flow figure.
pub const WEEKS_PER_YEAR: Decimal = dec!(52);

/// Divisor converting a percentage input into a fraction
pub const PERCENT: Decimal = dec!(100);

/// Upper clamp bound for the deposit percentage input
pub const MAX_DEPOSIT_PERCENT: Decimal = dec!(100);
