//! Holiday observance rules.
//!
//! Only two U.S. holidays affect rental charges:
//! - Independence Day, July 4. When it falls on a Saturday it is observed on
//!   Friday July 3; when it falls on a Sunday it is observed on Monday July 5.
//! - Labor Day, the first Monday in September.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A holiday recognized by the charge rules.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::{holiday_name, Holiday};
/// use chrono::NaiveDate;
///
/// // 2015-09-07 is the first Monday of September
/// let labor_day = NaiveDate::from_ymd_opt(2015, 9, 7).unwrap();
/// assert_eq!(holiday_name(labor_day), Some(Holiday::LaborDay));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Holiday {
    /// July 4, or its observed Friday/Monday when July 4 is on a weekend.
    IndependenceDay,
    /// First Monday in September.
    LaborDay,
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Holiday::IndependenceDay => write!(f, "Independence Day"),
            Holiday::LaborDay => write!(f, "Labor Day"),
        }
    }
}

/// Returns which holiday, if any, is observed on `date`.
pub fn holiday_name(date: NaiveDate) -> Option<Holiday> {
    if is_independence_day(date) {
        Some(Holiday::IndependenceDay)
    } else if is_labor_day(date) {
        Some(Holiday::LaborDay)
    } else {
        None
    }
}

/// Determines whether `date` is an observed holiday.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::is_holiday;
/// use chrono::NaiveDate;
///
/// // July 4 2015 is a Saturday, so Friday July 3 is observed
/// assert!(is_holiday(NaiveDate::from_ymd_opt(2015, 7, 3).unwrap()));
/// assert!(is_holiday(NaiveDate::from_ymd_opt(2015, 7, 4).unwrap()));
/// assert!(!is_holiday(NaiveDate::from_ymd_opt(2015, 7, 6).unwrap()));
/// ```
pub fn is_holiday(date: NaiveDate) -> bool {
    holiday_name(date).is_some()
}

/// Returns every observed holiday date in `year`.
///
/// When July 4 falls on a weekend both July 4 and its observed weekday are
/// returned. Dates are not ordered.
pub fn holidays_in_year(year: i32) -> impl Iterator<Item = NaiveDate> {
    let july_4 = NaiveDate::from_ymd_opt(year, 7, 4);
    let observed = july_4.and_then(|date| match date.weekday() {
        Weekday::Sat => date.pred_opt(),
        Weekday::Sun => date.succ_opt(),
        _ => None,
    });
    let labor_day = NaiveDate::from_weekday_of_month_opt(year, 9, Weekday::Mon, 1);
    [july_4, observed, labor_day].into_iter().flatten()
}

fn is_independence_day(date: NaiveDate) -> bool {
    if date.month() != 7 {
        return false;
    }
    match date.day() {
        4 => true,
        3 => date.weekday() == Weekday::Fri,
        5 => date.weekday() == Weekday::Mon,
        _ => false,
    }
}

fn is_labor_day(date: NaiveDate) -> bool {
    date.month() == 9 && date.weekday() == Weekday::Mon && date.day() <= 7
}
