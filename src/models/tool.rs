//! Tool charge policy model.
//!
//! A [`ToolChargePolicy`] is the read-only view of one catalog entry: the
//! tool's identity together with its daily rate and the day-kind flags that
//! decide which rental days are charged.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The pricing policy for a single rentable tool.
///
/// Policies are handed out by value. An agreement built from a policy keeps
/// its own copy, so later catalog changes never alter an existing agreement.
///
/// # Example
///
/// ```
/// use tool_rental::models::ToolChargePolicy;
/// use rust_decimal::Decimal;
///
/// let ladder = ToolChargePolicy {
///     tool_code: "LADW".to_string(),
///     tool_type: "Ladder".to_string(),
///     brand: "Werner".to_string(),
///     daily_rental_charge: Some(Decimal::new(199, 2)),
///     weekday_charge: true,
///     weekend_charge: true,
///     holiday_charge: false,
/// };
/// assert!(ladder.weekend_charge);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolChargePolicy {
    /// Unique, immutable tool identifier (e.g., "LADW").
    pub tool_code: String,
    /// The kind of tool (e.g., "Ladder").
    pub tool_type: String,
    /// The tool's brand (e.g., "Werner").
    pub brand: String,
    /// The charge per chargeable day. `None` means the catalog entry is incomplete.
    pub daily_rental_charge: Option<Decimal>,
    /// Whether weekdays are charged. Gates every other flag.
    pub weekday_charge: bool,
    /// Whether Saturdays and Sundays are charged.
    pub weekend_charge: bool,
    /// Whether observed holidays are charged.
    pub holiday_charge: bool,
}
