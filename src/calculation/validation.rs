//! Rental request validation.
//!
//! Checks run in a fixed order (tool code, checkout date, discount percent,
//! rental days) and report at most one violation per field.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use crate::error::FieldViolation;
use crate::models::RentalRequest;

/// Field name of the tool code in request payloads.
pub const FIELD_TOOL_CODE: &str = "toolCode";
/// Field name of the checkout date in request payloads.
pub const FIELD_CHECKOUT_DATE: &str = "checkoutDate";
/// Field name of the discount percent in request payloads.
pub const FIELD_DISCOUNT_PERCENT: &str = "discountPercent";
/// Field name of the rental days in request payloads.
pub const FIELD_RENTAL_DAYS: &str = "rentalDays";

/// A request whose fields have all passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    /// Non-blank tool code, as submitted.
    pub tool_code: String,
    /// Rental length, at least 1.
    pub rental_days: u32,
    /// Whole number in `[0, 100]`.
    pub discount_percent: Decimal,
    /// Not before the validation date.
    pub checkout_date: NaiveDate,
    /// `checkout_date` plus `rental_days`.
    pub due_date: NaiveDate,
}

/// Validates a request against `today`, returning every failing field.
///
/// An empty list means the request is valid.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::validate_request;
/// use tool_rental::models::RentalRequest;
/// use chrono::{Days, NaiveDate};
/// use rust_decimal::Decimal;
///
/// let today = NaiveDate::from_ymd_opt(2015, 9, 1).unwrap();
/// let request = RentalRequest::new("JAKR", 5, Decimal::from(101), NaiveDate::from_ymd_opt(2015, 9, 3).unwrap());
///
/// let violations = validate_request(&request, today);
/// assert_eq!(violations.len(), 1);
/// assert_eq!(violations[0].message, "Discount percent must be between 0 and 100");
/// ```
pub fn validate_request(request: &RentalRequest, today: NaiveDate) -> Vec<FieldViolation> {
    check_request(request, today).err().unwrap_or_default()
}

/// Validates a request and, on success, returns its checked values.
pub fn check_request(
    request: &RentalRequest,
    today: NaiveDate,
) -> Result<ValidatedRequest, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    if request.tool_code.trim().is_empty() {
        violations.push(FieldViolation::new(
            FIELD_TOOL_CODE,
            "Tool code cannot be null or empty",
        ));
    }

    let checkout_date = match request.checkout_date {
        None => {
            violations.push(FieldViolation::new(
                FIELD_CHECKOUT_DATE,
                "Checkout date cannot be null",
            ));
            None
        }
        Some(date) if date < today => {
            violations.push(FieldViolation::new(
                FIELD_CHECKOUT_DATE,
                "Checkout date cannot be in the past",
            ));
            None
        }
        Some(date) => Some(date),
    };

    let discount_percent = match request.discount_percent {
        None => {
            violations.push(FieldViolation::new(
                FIELD_DISCOUNT_PERCENT,
                "Discount percent cannot be null",
            ));
            None
        }
        Some(percent) if !percent.fract().is_zero() => {
            violations.push(FieldViolation::new(
                FIELD_DISCOUNT_PERCENT,
                "Discount percent must be a whole number",
            ));
            None
        }
        Some(percent) if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED => {
            violations.push(FieldViolation::new(
                FIELD_DISCOUNT_PERCENT,
                "Discount percent must be between 0 and 100",
            ));
            None
        }
        Some(percent) => Some(percent),
    };

    let rental_days = if request.rental_days < 1 {
        violations.push(FieldViolation::new(
            FIELD_RENTAL_DAYS,
            "Rental days must be 1 or greater",
        ));
        None
    } else {
        match u32::try_from(request.rental_days) {
            Ok(days) => Some(days),
            Err(_) => {
                violations.push(FieldViolation::new(
                    FIELD_RENTAL_DAYS,
                    format!("Rental days cannot exceed {}", u32::MAX),
                ));
                None
            }
        }
    };

    let due_date = match (checkout_date, rental_days) {
        (Some(checkout_date), Some(days)) => {
            let due_date = checkout_date.checked_add_days(Days::new(u64::from(days)));
            if due_date.is_none() {
                violations.push(FieldViolation::new(
                    FIELD_RENTAL_DAYS,
                    "Rental period extends past the supported calendar range",
                ));
            }
            due_date
        }
        _ => None,
    };

    match (checkout_date, discount_percent, rental_days, due_date) {
        (Some(checkout_date), Some(discount_percent), Some(rental_days), Some(due_date))
            if violations.is_empty() =>
        {
            Ok(ValidatedRequest {
                tool_code: request.tool_code.clone(),
                rental_days,
                discount_percent,
                checkout_date,
                due_date,
            })
        }
        _ => Err(violations),
    }
}
