//! Calculation logic for the tool rental engine.
//!
//! This module contains the holiday observance rules, chargeable day
//! counting, charge pricing, request validation and the agreement builder
//! that ties them together.

mod agreement;
mod charge_days;
mod clock;
mod holiday;
mod pricing;
mod validation;

pub use agreement::{PolicyResolver, build_agreement};
pub use charge_days::{DayKind, classify_day, count_chargeable_days, is_chargeable_day};
pub use clock::{Clock, FixedClock, SystemClock};
pub use holiday::{Holiday, holiday_name, holidays_in_year, is_holiday};
pub use pricing::{CURRENCY_DECIMAL_PLACES, ChargeBreakdown, compute_charges, discount_for};
pub use validation::{
    FIELD_CHECKOUT_DATE, FIELD_DISCOUNT_PERCENT, FIELD_RENTAL_DAYS, FIELD_TOOL_CODE,
    ValidatedRequest, check_request, validate_request,
};
