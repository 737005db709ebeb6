//! Rental charge pricing.
//!
//! All amounts are fixed-point [`Decimal`]s. The pre-discount charge is an
//! exact product, the discount is rounded half-up to cents, and the final
//! charge is the plain difference of the two.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{RentalError, RentalResult};

/// Number of fraction digits the discount amount is rounded to.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// The monetary fields of a rental agreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeBreakdown {
    /// Daily rate times chargeable days.
    pub pre_discount_charge: Decimal,
    /// `pre_discount_charge * discount_percent / 100`, rounded half-up to cents.
    pub discount_amount: Decimal,
    /// `pre_discount_charge - discount_amount`.
    pub final_charge: Decimal,
}

/// Computes the charges for a rental.
///
/// # Errors
///
/// Returns `InvalidState` if `daily_rate` is negative, or if the charge
/// overflows the decimal range. Both can only come from a corrupt catalog
/// entry.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::compute_charges;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let charges = compute_charges(Decimal::from_str("1.99").unwrap(), 4, Decimal::from(10)).unwrap();
/// assert_eq!(charges.pre_discount_charge, Decimal::from_str("7.96").unwrap());
/// // 0.796 rounds half-up to 0.80
/// assert_eq!(charges.discount_amount, Decimal::from_str("0.80").unwrap());
/// assert_eq!(charges.final_charge, Decimal::from_str("7.16").unwrap());
/// ```
pub fn compute_charges(
    daily_rate: Decimal,
    charge_days: u32,
    discount_percent: Decimal,
) -> RentalResult<ChargeBreakdown> {
    if daily_rate.is_sign_negative() && !daily_rate.is_zero() {
        return Err(RentalError::InvalidState {
            message: format!("Daily rental charge cannot be negative: {}", daily_rate),
        });
    }

    let out_of_range = || RentalError::InvalidState {
        message: format!(
            "Charge exceeds representable range: {} over {} days",
            daily_rate, charge_days
        ),
    };

    let pre_discount_charge = daily_rate
        .checked_mul(Decimal::from(charge_days))
        .ok_or_else(out_of_range)?;
    let discount_amount =
        discount_for(pre_discount_charge, discount_percent).ok_or_else(out_of_range)?;
    let final_charge = pre_discount_charge - discount_amount;

    Ok(ChargeBreakdown {
        pre_discount_charge,
        discount_amount,
        final_charge,
    })
}

/// Applies a percentage to an amount and rounds half-up to cents.
///
/// Returns `None` if the intermediate product overflows.
pub fn discount_for(amount: Decimal, discount_percent: Decimal) -> Option<Decimal> {
    let discount = amount
        .checked_mul(discount_percent)?
        .checked_div(Decimal::ONE_HUNDRED)?;
    Some(discount.round_dp_with_strategy(
        CURRENCY_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    ))
}
