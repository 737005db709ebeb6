//! Rental request model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A request to check out a tool.
///
/// Fields that a client may omit are `Option`s so that validation, not
/// deserialization, decides how a missing value is reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalRequest {
    /// The code of the tool to rent.
    #[serde(default)]
    pub tool_code: String,
    /// Number of calendar days the tool is rented for. Must be at least 1.
    #[serde(default)]
    pub rental_days: i64,
    /// Whole-number discount percentage in `[0, 100]`.
    #[serde(default)]
    pub discount_percent: Option<Decimal>,
    /// The day the tool is picked up. Must not be before today.
    #[serde(default)]
    pub checkout_date: Option<NaiveDate>,
}

impl RentalRequest {
    /// Creates a fully populated request.
    ///
    /// # Example
    ///
    /// ```
    /// use tool_rental::models::RentalRequest;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let request = RentalRequest::new(
    ///     "JAKR",
    ///     9,
    ///     Decimal::ZERO,
    ///     NaiveDate::from_ymd_opt(2015, 7, 2).unwrap(),
    /// );
    /// assert_eq!(request.rental_days, 9);
    /// ```
    pub fn new(
        tool_code: impl Into<String>,
        rental_days: i64,
        discount_percent: Decimal,
        checkout_date: NaiveDate,
    ) -> Self {
        Self {
            tool_code: tool_code.into(),
            rental_days,
            discount_percent: Some(discount_percent),
            checkout_date: Some(checkout_date),
        }
    }
}
