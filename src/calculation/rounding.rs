//! Currency rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits kept in every monetary amount.
pub const CURRENCY_SCALE: u32 = 2;

/// Rounds to whole kopecks, half away from zero, and fixes the scale at two
/// fractional digits so `50000` is reported as `50000.00`.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("2.675").unwrap()).to_string(), "2.68");
/// assert_eq!(round_currency(Decimal::from(50000)).to_string(), "50000.00");
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CURRENCY_SCALE);
    rounded
}

/// Applies a percentage: `amount × percent / 100`, unrounded.
pub(crate) fn percent_of(amount: Decimal, percent: Decimal) -> Decimal {
    amount * percent / Decimal::ONE_HUNDRED
}
