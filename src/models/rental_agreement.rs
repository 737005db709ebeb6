//! Rental agreement model.
//!
//! This module contains the [`RentalAgreement`] type, the immutable record
//! produced by a successful checkout.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::display::{format_currency, format_date, format_percent};

/// The outcome of a tool checkout.
///
/// Agreements are only constructed by the agreement builder from a validated
/// request and a policy snapshot. Fields are read through accessors and
/// never change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalAgreement {
    pub(crate) tool_code: String,
    pub(crate) tool_type: String,
    pub(crate) tool_brand: String,
    pub(crate) rental_days: u32,
    pub(crate) checkout_date: NaiveDate,
    pub(crate) due_date: NaiveDate,
    pub(crate) daily_rental_charge: Decimal,
    pub(crate) weekday_charge: bool,
    pub(crate) weekend_charge: bool,
    pub(crate) holiday_charge: bool,
    pub(crate) charge_days: u32,
    pub(crate) pre_discount_charge: Decimal,
    pub(crate) discount_percent: Decimal,
    pub(crate) discount_amount: Decimal,
    pub(crate) final_charge: Decimal,
}

impl RentalAgreement {
    /// The rented tool's code.
    pub fn tool_code(&self) -> &str {
        &self.tool_code
    }

    /// The rented tool's type.
    pub fn tool_type(&self) -> &str {
        &self.tool_type
    }

    /// The rented tool's brand.
    pub fn tool_brand(&self) -> &str {
        &self.tool_brand
    }

    /// Number of calendar days rented.
    pub fn rental_days(&self) -> u32 {
        self.rental_days
    }

    /// The pickup date.
    pub fn checkout_date(&self) -> NaiveDate {
        self.checkout_date
    }

    /// The return date: checkout date plus rental days.
    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// The daily rate copied from the policy.
    pub fn daily_rental_charge(&self) -> Decimal {
        self.daily_rental_charge
    }

    /// Whether the policy charges weekdays.
    pub fn weekday_charge(&self) -> bool {
        self.weekday_charge
    }

    /// Whether the policy charges weekends.
    pub fn weekend_charge(&self) -> bool {
        self.weekend_charge
    }

    /// Whether the policy charges holidays.
    pub fn holiday_charge(&self) -> bool {
        self.holiday_charge
    }

    /// Number of days in the rental period that are charged.
    pub fn charge_days(&self) -> u32 {
        self.charge_days
    }

    /// Daily rate times charge days.
    pub fn pre_discount_charge(&self) -> Decimal {
        self.pre_discount_charge
    }

    /// The requested discount percentage.
    pub fn discount_percent(&self) -> Decimal {
        self.discount_percent
    }

    /// The discount, rounded half-up to cents.
    pub fn discount_amount(&self) -> Decimal {
        self.discount_amount
    }

    /// Pre-discount charge minus discount amount.
    pub fn final_charge(&self) -> Decimal {
        self.final_charge
    }
}

impl fmt::Display for RentalAgreement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tool code: {}", self.tool_code)?;
        writeln!(f, "Tool type: {}", self.tool_type)?;
        writeln!(f, "Brand: {}", self.tool_brand)?;
        writeln!(f, "Rental days: {}", self.rental_days)?;
        writeln!(f, "Checkout date: {}", format_date(self.checkout_date))?;
        writeln!(f, "Due date: {}", format_date(self.due_date))?;
        writeln!(
            f,
            "Daily rental charge: {}",
            format_currency(self.daily_rental_charge)
        )?;
        writeln!(f, "Weekday charge applicable: {}", self.weekday_charge)?;
        writeln!(f, "Weekend charge applicable: {}", self.weekend_charge)?;
        writeln!(f, "Holiday charge applicable: {}", self.holiday_charge)?;
        writeln!(f, "Charge days: {}", self.charge_days)?;
        writeln!(
            f,
            "Pre-discount charge: {}",
            format_currency(self.pre_discount_charge)
        )?;
        writeln!(f, "Discount percent: {}", format_percent(self.discount_percent))?;
        writeln!(
            f,
            "Discount amount: {}",
            format_currency(self.discount_amount)
        )?;
        write!(f, "Final charge: {}", format_currency(self.final_charge))
    }
}
