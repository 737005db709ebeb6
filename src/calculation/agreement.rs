//! Rental agreement assembly.
//!
//! [`build_agreement`] is the entry point of the engine. It runs the
//! checkout pipeline:
//!
//! 1. Validate the request against the clock's date
//! 2. Resolve the tool's charge policy
//! 3. Count chargeable days between checkout and due date
//! 4. Price the rental
//! 5. Assemble the immutable [`RentalAgreement`]
//!
//! Any failure stops the pipeline; no partial agreement is returned.

use tracing::debug;

use crate::error::{RentalError, RentalResult};
use crate::models::{RentalAgreement, RentalRequest, ToolChargePolicy};

use super::charge_days::count_chargeable_days;
use super::clock::Clock;
use super::pricing::compute_charges;
use super::validation::check_request;

/// Looks up the charge policy for a tool code.
///
/// Implementations return an owned snapshot. A missing tool is reported
/// as [`RentalError::NotFound`]; lookup failures must be returned as
/// errors, never replaced with a zero-charge policy.
pub trait PolicyResolver {
    /// Resolves the policy for `tool_code`.
    fn resolve(&self, tool_code: &str) -> RentalResult<ToolChargePolicy>;
}

impl<F> PolicyResolver for F
where
    F: Fn(&str) -> RentalResult<ToolChargePolicy>,
{
    fn resolve(&self, tool_code: &str) -> RentalResult<ToolChargePolicy> {
        self(tool_code)
    }
}

/// Builds a rental agreement for a checkout request.
///
/// # Errors
///
/// - `InvalidInput` when any request field fails validation
/// - `NotFound` when the resolver has no policy for the tool code
/// - `InvalidState` when the policy has no daily rate, a negative one, or
///   one whose charge overflows
///
/// # Example
///
/// ```
/// use tool_rental::calculation::{build_agreement, FixedClock};
/// use tool_rental::error::RentalResult;
/// use tool_rental::models::{RentalRequest, ToolChargePolicy};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let resolver = |code: &str| -> RentalResult<ToolChargePolicy> {
///     Ok(ToolChargePolicy {
///         tool_code: code.to_string(),
///         tool_type: "Ladder".to_string(),
///         brand: "Werner".to_string(),
///         daily_rental_charge: Some(Decimal::from_str("1.99").unwrap()),
///         weekday_charge: true,
///         weekend_charge: true,
///         holiday_charge: true,
///     })
/// };
/// let checkout = NaiveDate::from_ymd_opt(2020, 7, 2).unwrap();
/// let request = RentalRequest::new("LADW", 3, Decimal::from(10), checkout);
///
/// let agreement = build_agreement(&request, &resolver, &FixedClock(checkout)).unwrap();
/// assert_eq!(agreement.charge_days(), 3);
/// assert_eq!(agreement.final_charge(), Decimal::from_str("5.37").unwrap());
/// ```
pub fn build_agreement<R, C>(
    request: &RentalRequest,
    resolver: &R,
    clock: &C,
) -> RentalResult<RentalAgreement>
where
    R: PolicyResolver + ?Sized,
    C: Clock + ?Sized,
{
    let validated = check_request(request, clock.today()).map_err(|violations| {
        RentalError::from_violations(violations).unwrap_or_else(|| RentalError::InvalidInput {
            message: "Invalid rental request".to_string(),
            violations: Vec::new(),
        })
    })?;

    let policy = resolver.resolve(&validated.tool_code)?;
    let daily_rental_charge =
        policy
            .daily_rental_charge
            .ok_or_else(|| RentalError::InvalidState {
                message: format!(
                    "Daily rental charge cannot be null for tool: {}",
                    policy.tool_code
                ),
            })?;

    let due_date = validated.due_date;
    let charge_days = count_chargeable_days(&policy, validated.checkout_date, due_date);
    let charges = compute_charges(daily_rental_charge, charge_days, validated.discount_percent)?;

    debug!(
        tool_code = %policy.tool_code,
        checkout_date = %validated.checkout_date,
        due_date = %due_date,
        charge_days,
        pre_discount_charge = %charges.pre_discount_charge,
        discount_amount = %charges.discount_amount,
        final_charge = %charges.final_charge,
        "Priced rental"
    );

    Ok(RentalAgreement {
        tool_code: policy.tool_code,
        tool_type: policy.tool_type,
        tool_brand: policy.brand,
        rental_days: validated.rental_days,
        checkout_date: validated.checkout_date,
        due_date,
        daily_rental_charge,
        weekday_charge: policy.weekday_charge,
        weekend_charge: policy.weekend_charge,
        holiday_charge: policy.holiday_charge,
        charge_days,
        pre_discount_charge: charges.pre_discount_charge,
        discount_percent: validated.discount_percent,
        discount_amount: charges.discount_amount,
        final_charge: charges.final_charge,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::FixedClock;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tool(
        code: &str,
        tool_type: &str,
        brand: &str,
        rate: &str,
        flags: (bool, bool, bool),
    ) -> ToolChargePolicy {
        ToolChargePolicy {
            tool_code: code.to_string(),
            tool_type: tool_type.to_string(),
            brand: brand.to_string(),
            daily_rental_charge: Some(dec(rate)),
            weekday_charge: flags.0,
            weekend_charge: flags.1,
            holiday_charge: flags.2,
        }
    }

    fn catalog() -> HashMap<String, ToolChargePolicy> {
        [
            tool("CHNS", "Chainsaw", "Stihl", "1.49", (true, false, true)),
            tool("LADW", "Ladder", "Werner", "1.99", (true, true, false)),
            tool("JAKD", "Jackhammer", "DeWalt", "2.99", (true, false, false)),
            tool("JAKR", "Jackhammer", "Ridgid", "2.99", (true, false, false)),
        ]
        .into_iter()
        .map(|p| (p.tool_code.clone(), p))
        .collect()
    }

    fn resolver(
        tools: HashMap<String, ToolChargePolicy>,
    ) -> impl Fn(&str) -> RentalResult<ToolChargePolicy> {
        move |code: &str| {
            tools.get(code).cloned().ok_or_else(|| RentalError::NotFound {
                tool_code: code.to_string(),
            })
        }
    }

    fn checkout(
        code: &str,
        date: NaiveDate,
        days: i64,
        discount: i64,
    ) -> RentalResult<RentalAgreement> {
        let request = RentalRequest::new(code, days, Decimal::from(discount), date);
        build_agreement(&request, &resolver(catalog()), &FixedClock(date))
    }

    #[test]
    fn test_discount_over_100_is_invalid_input() {
        let result = checkout("JAKR", make_date(2015, 9, 3), 5, 101);
        match result {
            Err(RentalError::InvalidInput {
                message,
                violations,
            }) => {
                assert_eq!(message, "Discount percent must be between 0 and 100");
                assert_eq!(violations.len(), 1);
            }
            other => panic!("Expected InvalidInput error, got {:?}", other),
        }
    }

    #[test]
    fn test_ladder_over_independence_day() {
        let agreement = checkout("LADW", make_date(2020, 7, 2), 3, 10).unwrap();

        assert_eq!(agreement.due_date(), make_date(2020, 7, 5));
        assert_eq!(agreement.charge_days(), 1);
        assert_eq!(agreement.pre_discount_charge(), dec("1.99"));
        assert_eq!(agreement.discount_amount(), dec("0.20"));
        assert_eq!(agreement.final_charge(), dec("1.79"));
    }

    #[test]
    fn test_chainsaw_with_quarter_discount() {
        let agreement = checkout("CHNS", make_date(2015, 7, 2), 5, 25).unwrap();

        assert_eq!(agreement.due_date(), make_date(2015, 7, 7));
        assert_eq!(agreement.charge_days(), 3);
        assert_eq!(agreement.pre_discount_charge(), dec("4.47"));
        assert_eq!(agreement.discount_amount(), dec("1.12"));
        assert_eq!(agreement.final_charge(), dec("3.35"));
    }

    #[test]
    fn test_dewalt_jackhammer_over_labor_day() {
        let agreement = checkout("JAKD", make_date(2015, 9, 3), 6, 0).unwrap();

        assert_eq!(agreement.due_date(), make_date(2015, 9, 9));
        assert_eq!(agreement.charge_days(), 3);
        assert_eq!(agreement.pre_discount_charge(), dec("8.97"));
        assert_eq!(agreement.discount_amount(), Decimal::ZERO);
        assert_eq!(agreement.final_charge(), dec("8.97"));
    }

    #[test]
    fn test_ridgid_jackhammer_nine_days() {
        let agreement = checkout("JAKR", make_date(2015, 7, 2), 9, 0).unwrap();

        assert_eq!(agreement.due_date(), make_date(2015, 7, 11));
        assert_eq!(agreement.charge_days(), 5);
        assert_eq!(agreement.pre_discount_charge(), dec("14.95"));
        assert_eq!(agreement.final_charge(), dec("14.95"));
    }

    #[test]
    fn test_ridgid_jackhammer_half_off() {
        let agreement = checkout("JAKR", make_date(2020, 7, 2), 4, 50).unwrap();

        assert_eq!(agreement.due_date(), make_date(2020, 7, 6));
        assert_eq!(agreement.charge_days(), 1);
        assert_eq!(agreement.pre_discount_charge(), dec("2.99"));
        assert_eq!(agreement.discount_amount(), dec("1.50"));
        assert_eq!(agreement.final_charge(), dec("1.49"));
    }

    #[test]
    fn test_agreement_copies_policy_and_request() {
        let agreement = checkout("CHNS", make_date(2015, 7, 2), 5, 25).unwrap();

        assert_eq!(agreement.tool_code(), "CHNS");
        assert_eq!(agreement.tool_type(), "Chainsaw");
        assert_eq!(agreement.tool_brand(), "Stihl");
        assert_eq!(agreement.rental_days(), 5);
        assert_eq!(agreement.checkout_date(), make_date(2015, 7, 2));
        assert_eq!(agreement.daily_rental_charge(), dec("1.49"));
        assert!(agreement.weekday_charge());
        assert!(!agreement.weekend_charge());
        assert!(agreement.holiday_charge());
        assert_eq!(agreement.discount_percent(), dec("25"));
    }

    #[test]
    fn test_unknown_tool_is_not_found() {
        let result = checkout("XXXX", make_date(2015, 7, 2), 5, 0);
        match result {
            Err(RentalError::NotFound { tool_code }) => assert_eq!(tool_code, "XXXX"),
            other => panic!("Expected NotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_rate_is_invalid_state() {
        let mut tools = catalog();
        if let Some(policy) = tools.get_mut("LADW") {
            policy.daily_rental_charge = None;
        }
        let date = make_date(2020, 7, 2);
        let request = RentalRequest::new("LADW", 3, Decimal::ZERO, date);

        let result = build_agreement(&request, &resolver(tools), &FixedClock(date));
        match result {
            Err(RentalError::InvalidState { message }) => {
                assert_eq!(message, "Daily rental charge cannot be null for tool: LADW");
            }
            other => panic!("Expected InvalidState error, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_runs_before_lookup() {
        let lookups = Cell::new(0);
        let counting = |code: &str| -> RentalResult<ToolChargePolicy> {
            lookups.set(lookups.get() + 1);
            Err(RentalError::NotFound {
                tool_code: code.to_string(),
            })
        };
        let date = make_date(2020, 7, 2);
        let request = RentalRequest::new("LADW", 0, Decimal::ZERO, date);

        let result = build_agreement(&request, &counting, &FixedClock(date));
        assert!(matches!(result, Err(RentalError::InvalidInput { .. })));
        assert_eq!(lookups.get(), 0);
    }

    #[test]
    fn test_out_of_range_rental_fails_before_lookup() {
        let lookups = Cell::new(0);
        let counting = |code: &str| -> RentalResult<ToolChargePolicy> {
            lookups.set(lookups.get() + 1);
            Err(RentalError::NotFound {
                tool_code: code.to_string(),
            })
        };
        let date = make_date(2020, 7, 2);
        let request = RentalRequest::new("XXXX", 4_000_000_000, Decimal::ZERO, date);

        let result = build_agreement(&request, &counting, &FixedClock(date));
        match result {
            Err(RentalError::InvalidInput { message, .. }) => {
                assert_eq!(
                    message,
                    "Rental period extends past the supported calendar range"
                );
            }
            other => panic!("Expected InvalidInput error, got {:?}", other),
        }
        assert_eq!(lookups.get(), 0);
    }

    #[test]
    fn test_checkout_before_today_is_rejected() {
        let request = RentalRequest::new("LADW", 3, Decimal::ZERO, make_date(2020, 7, 2));
        let clock = FixedClock(make_date(2020, 7, 3));

        let result = build_agreement(&request, &resolver(catalog()), &clock);
        match result {
            Err(RentalError::InvalidInput { message, .. }) => {
                assert_eq!(message, "Checkout date cannot be in the past");
            }
            other => panic!("Expected InvalidInput error, got {:?}", other),
        }
    }

    #[test]
    fn test_resolver_errors_propagate_unchanged() {
        let failing = |_: &str| -> RentalResult<ToolChargePolicy> {
            Err(RentalError::InvalidState {
                message: "catalog unavailable".to_string(),
            })
        };
        let date = make_date(2020, 7, 2);
        let request = RentalRequest::new("LADW", 3, Decimal::ZERO, date);

        let result = build_agreement(&request, &failing, &FixedClock(date));
        match result {
            Err(RentalError::InvalidState { message }) => {
                assert_eq!(message, "catalog unavailable")
            }
            other => panic!("Expected InvalidState error, got {:?}", other),
        }
    }

    #[test]
    fn test_very_long_rental_builds_promptly() {
        let date = make_date(2020, 7, 2);
        let request = RentalRequest::new("JAKR", 90_000_000, Decimal::ZERO, date);
        let start = std::time::Instant::now();

        let agreement = build_agreement(&request, &resolver(catalog()), &FixedClock(date)).unwrap();

        assert!(start.elapsed() < std::time::Duration::from_secs(2));
        assert_eq!(agreement.rental_days(), 90_000_000);
        assert!(agreement.charge_days() < agreement.rental_days());
    }

    #[test]
    fn test_rebuilding_is_identical() {
        let first = checkout("LADW", make_date(2020, 7, 2), 3, 10).unwrap();
        let second = checkout("LADW", make_date(2020, 7, 2), 3, 10).unwrap();
        assert_eq!(first, second);
    }
}
