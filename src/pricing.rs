//! Pricing

use decimal_percentage::Percentage;
use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

/// Errors that can occur while pricing a discount.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// The discounted amount could not be represented in minor units.
    #[error("discounted amount overflowed minor units")]
    Conversion,
}

/// Applies a percentage discount to a price.
///
/// Computes `original_price * (1 - discount_percentage / 100)`. Percentages
/// outside `0..=100` and negative prices are not rejected.
pub fn calculate_discounted_price(original_price: Decimal, discount_percentage: Decimal) -> Decimal {
    original_price * (Decimal::ONE - discount_percentage / Decimal::ONE_HUNDRED)
}

/// Converts whole percentage points (e.g. `25`) into a [`Percentage`].
pub fn discount_percentage(points: u8) -> Percentage {
    Percentage::from(Decimal::from(points) / Decimal::ONE_HUNDRED)
}

/// Applies a percentage discount to money, rounding to the nearest minor unit.
///
/// # Errors
///
/// Returns [`PricingError::Conversion`] if the discounted amount does not fit
/// in minor units.
pub fn discounted_money<'a>(
    price: &Money<'a, Currency>,
    discount: Percentage,
) -> Result<Money<'a, Currency>, PricingError> {
    let minor = Decimal::from_i64(price.to_minor_units()).ok_or(PricingError::Conversion)?;

    let remaining = Decimal::ONE - discount * Decimal::ONE;

    let discounted = minor
        .checked_mul(remaining)
        .ok_or(PricingError::Conversion)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(PricingError::Conversion)?;

    Ok(Money::from_minor(discounted, price.currency()))
}
