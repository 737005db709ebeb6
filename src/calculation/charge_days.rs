//! Chargeable day counting.
//!
//! Decides, per the tool's policy, which days of a rental period are
//! charged. The checkout day itself is free and the due day is charged, so
//! the period is `(checkout_date, due_date]`. Counting is closed form over
//! whole weeks and only visits the holiday dates inside the period.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::ToolChargePolicy;

use super::holiday::{holidays_in_year, is_holiday};

/// The weekday/weekend classification of a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// Monday through Friday.
    Weekday,
    /// Saturday or Sunday.
    Weekend,
}

/// Classifies a date as a weekday or weekend day.
///
/// ```
/// use tool_rental::calculation::{classify_day, DayKind};
/// use chrono::NaiveDate;
///
/// // 2015-07-04 is a Saturday
/// assert_eq!(classify_day(NaiveDate::from_ymd_opt(2015, 7, 4).unwrap()), DayKind::Weekend);
/// assert_eq!(classify_day(NaiveDate::from_ymd_opt(2015, 7, 6).unwrap()), DayKind::Weekday);
/// ```
pub fn classify_day(date: NaiveDate) -> DayKind {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => DayKind::Weekend,
        _ => DayKind::Weekday,
    }
}

/// Decides whether a single date is charged under `policy`.
///
/// `weekday_charge` is a master gate: when it is false no day is ever
/// charged, whatever the weekend and holiday flags say. With the gate open,
/// holidays need `holiday_charge` and weekend days need `weekend_charge`.
/// A weekend holiday needs both.
pub fn is_chargeable_day(policy: &ToolChargePolicy, date: NaiveDate) -> bool {
    if is_holiday(date) && !policy.holiday_charge {
        return false;
    }
    if classify_day(date) == DayKind::Weekend && !policy.weekend_charge {
        return false;
    }
    policy.weekday_charge
}

/// Counts the chargeable days after `checkout_date` up to and including `due_date`.
///
/// Returns zero when `due_date` is not after `checkout_date`.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::count_chargeable_days;
/// use tool_rental::models::ToolChargePolicy;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let jackhammer = ToolChargePolicy {
///     tool_code: "JAKR".to_string(),
///     tool_type: "Jackhammer".to_string(),
///     brand: "Ridgid".to_string(),
///     daily_rental_charge: Some(Decimal::new(299, 2)),
///     weekday_charge: true,
///     weekend_charge: false,
///     holiday_charge: false,
/// };
///
/// let checkout = NaiveDate::from_ymd_opt(2015, 7, 2).unwrap();
/// let due = NaiveDate::from_ymd_opt(2015, 7, 11).unwrap();
/// // Jul 3 (observed holiday) and the two weekends are skipped
/// assert_eq!(count_chargeable_days(&jackhammer, checkout, due), 5);
/// ```
pub fn count_chargeable_days(
    policy: &ToolChargePolicy,
    checkout_date: NaiveDate,
    due_date: NaiveDate,
) -> u32 {
    if !policy.weekday_charge || due_date <= checkout_date {
        return 0;
    }

    let total = (due_date - checkout_date).num_days();
    let weekend = weekend_days_after(checkout_date, total);
    let mut count = total - weekend;
    if policy.weekend_charge {
        count += weekend;
    }

    if !policy.holiday_charge {
        // Subtract holidays the weekday/weekend rules would have charged
        let charged_holidays = (checkout_date.year()..=due_date.year())
            .flat_map(holidays_in_year)
            .filter(|date| *date > checkout_date && *date <= due_date)
            .filter(|date| policy.weekend_charge || classify_day(*date) == DayKind::Weekday)
            .count() as i64;
        count -= charged_holidays;
    }

    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Number of Saturdays and Sundays among the `days` days after `start`.
fn weekend_days_after(start: NaiveDate, days: i64) -> i64 {
    let full_weeks = days / 7;
    let first = i64::from(start.weekday().num_days_from_monday());
    // Monday is 0, so indices 5 and 6 are the weekend
    let partial = (1..=days % 7)
        .filter(|offset| (first + offset) % 7 >= 5)
        .count() as i64;
    full_weeks * 2 + partial
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn make_date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn policy(weekday: bool, weekend: bool, holiday: bool) -> ToolChargePolicy {
        ToolChargePolicy {
            tool_code: "TEST".to_string(),
            tool_type: "Test".to_string(),
            brand: "Test".to_string(),
            daily_rental_charge: Some(Decimal::ONE),
            weekday_charge: weekday,
            weekend_charge: weekend,
            holiday_charge: holiday,
        }
    }

    #[test]
    fn test_checkout_day_is_never_charged() {
        // Thursday checkout, one day rental: only Friday counts
        let count = count_chargeable_days(
            &policy(true, true, true),
            make_date(2015, 6, 4),
            make_date(2015, 6, 5),
        );
        assert_eq!(count, 1);
    }

    #[test]
    fn test_all_flags_charge_every_day() {
        let count = count_chargeable_days(
            &policy(true, true, true),
            make_date(2020, 7, 2),
            make_date(2020, 7, 5),
        );
        assert_eq!(count, 3);
    }

    #[test]
    fn test_weekday_only_skips_weekends_and_observed_holiday() {
        let count = count_chargeable_days(
            &policy(true, false, false),
            make_date(2015, 7, 2),
            make_date(2015, 7, 11),
        );
        assert_eq!(count, 5);
    }

    #[test]
    fn test_chainsaw_charges_observed_holiday_but_not_weekend() {
        // Jul 3 Fri (observed, charged), Jul 4-5 weekend, Jul 6-7 weekdays
        let count = count_chargeable_days(
            &policy(true, false, true),
            make_date(2015, 7, 2),
            make_date(2015, 7, 7),
        );
        assert_eq!(count, 3);
    }

    #[test]
    fn test_weekend_holiday_needs_holiday_flag() {
        // Ladder: weekends charged, holidays not. 2020-07-04 is a Saturday holiday.
        let count = count_chargeable_days(
            &policy(true, true, false),
            make_date(2020, 7, 2),
            make_date(2020, 7, 5),
        );
        // Jul 3 (observed) and Jul 4 (holiday) excluded, Jul 5 Sunday charged
        assert_eq!(count, 1);
    }

    #[test]
    fn test_labor_day_excluded_without_holiday_flag() {
        // 2015-09-03 Thu to 2015-09-09 Wed, Labor Day Sep 7
        let count = count_chargeable_days(
            &policy(true, false, false),
            make_date(2015, 9, 3),
            make_date(2015, 9, 9),
        );
        assert_eq!(count, 3);
    }

    #[test]
    fn test_weekday_flag_is_master_gate() {
        let count = count_chargeable_days(
            &policy(false, true, true),
            make_date(2020, 7, 2),
            make_date(2020, 7, 12),
        );
        assert_eq!(count, 0);
    }

    #[test]
    fn test_due_date_not_after_checkout_counts_nothing() {
        let day = make_date(2020, 7, 2);
        assert_eq!(count_chargeable_days(&policy(true, true, true), day, day), 0);
        assert_eq!(
            count_chargeable_days(&policy(true, true, true), day, make_date(2020, 7, 1)),
            0
        );
    }

    #[test]
    fn test_walk_crosses_year_boundary() {
        // 2015-12-31 Thu through 2016-01-04 Mon: Fri and Mon are weekdays
        let count = count_chargeable_days(
            &policy(true, false, false),
            make_date(2015, 12, 31),
            make_date(2016, 1, 4),
        );
        assert_eq!(count, 2);
    }

    fn walk_count(policy: &ToolChargePolicy, checkout: NaiveDate, due: NaiveDate) -> u32 {
        checkout
            .iter_days()
            .skip(1)
            .take_while(|date| *date <= due)
            .filter(|date| is_chargeable_day(policy, *date))
            .count() as u32
    }

    #[test]
    fn test_count_matches_day_by_day_rule() {
        let flags = [true, false];
        let checkouts = [
            make_date(2015, 6, 29),
            make_date(2015, 7, 2),
            make_date(2020, 7, 1),
            make_date(2021, 7, 3),
            make_date(2024, 8, 30),
        ];
        for weekday in flags {
            for weekend in flags {
                for holiday in flags {
                    let policy = policy(weekday, weekend, holiday);
                    for checkout in checkouts {
                        for days in [1u64, 2, 3, 6, 7, 8, 13, 70, 400, 1500] {
                            let due = checkout + chrono::Days::new(days);
                            assert_eq!(
                                count_chargeable_days(&policy, checkout, due),
                                walk_count(&policy, checkout, due),
                                "flags ({}, {}, {}) from {} for {} days",
                                weekday,
                                weekend,
                                holiday,
                                checkout,
                                days
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_very_long_rental_counts_promptly() {
        let checkout = make_date(2020, 7, 2);
        let due = checkout + chrono::Days::new(90_000_000);
        let start = std::time::Instant::now();

        assert_eq!(
            count_chargeable_days(&policy(true, true, true), checkout, due),
            90_000_000
        );
        let weekday_only = count_chargeable_days(&policy(true, false, false), checkout, due);
        // About 5/7 of the period, less two weekday holidays a year
        assert!(weekday_only > 63_700_000 && weekday_only < 63_900_000);

        assert!(start.elapsed() < std::time::Duration::from_secs(2));
    }

    #[test]
    fn test_classify_day() {
        assert_eq!(classify_day(make_date(2026, 10, 17)), DayKind::Weekend);
        assert_eq!(classify_day(make_date(2026, 10, 18)), DayKind::Weekend);
        assert_eq!(classify_day(make_date(2026, 10, 19)), DayKind::Weekday);
    }
}
