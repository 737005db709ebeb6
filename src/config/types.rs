//! Catalog configuration types.
//!
//! [`CatalogFile`] and [`ToolEntry`] mirror the YAML layout; [`ToolCatalog`]
//! is the validated, queryable form.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::PolicyResolver;
use crate::error::{RentalError, RentalResult};
use crate::models::ToolChargePolicy;

/// Top-level structure of a catalog file.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogFile {
    /// Every rentable tool.
    #[serde(default)]
    pub tools: Vec<ToolEntry>,
}

/// One tool as written in the catalog file.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolEntry {
    /// Unique tool code.
    pub tool_code: String,
    /// The kind of tool.
    pub tool_type: String,
    /// The tool's brand.
    pub brand: String,
    /// Charge per chargeable day. May be absent in an incomplete entry.
    #[serde(default)]
    pub daily_rental_charge: Option<Decimal>,
    /// Whether weekdays are charged.
    #[serde(default = "default_weekday_charge")]
    pub weekday_charge: bool,
    /// Whether weekends are charged.
    #[serde(default)]
    pub weekend_charge: bool,
    /// Whether holidays are charged.
    #[serde(default)]
    pub holiday_charge: bool,
}

fn default_weekday_charge() -> bool {
    true
}

impl From<ToolEntry> for ToolChargePolicy {
    fn from(entry: ToolEntry) -> Self {
        ToolChargePolicy {
            tool_code: entry.tool_code,
            tool_type: entry.tool_type,
            brand: entry.brand,
            daily_rental_charge: entry.daily_rental_charge,
            weekday_charge: entry.weekday_charge,
            weekend_charge: entry.weekend_charge,
            holiday_charge: entry.holiday_charge,
        }
    }
}

/// The set of rentable tools, keyed by tool code.
#[derive(Debug, Clone, Default)]
pub struct ToolCatalog {
    policies: HashMap<String, ToolChargePolicy>,
}

impl ToolCatalog {
    /// Creates a catalog from a list of policies.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if two policies share a tool code or a
    /// tool code is blank.
    pub fn new(policies: Vec<ToolChargePolicy>) -> RentalResult<Self> {
        let mut by_code = HashMap::with_capacity(policies.len());
        for policy in policies {
            if policy.tool_code.trim().is_empty() {
                return Err(RentalError::InvalidState {
                    message: "Tool code cannot be empty in catalog".to_string(),
                });
            }
            if by_code.contains_key(&policy.tool_code) {
                return Err(RentalError::InvalidState {
                    message: format!("Duplicate tool code in catalog: {}", policy.tool_code),
                });
            }
            by_code.insert(policy.tool_code.clone(), policy);
        }
        Ok(Self { policies: by_code })
    }

    /// Returns the policy for `tool_code`, if present.
    pub fn get(&self, tool_code: &str) -> Option<&ToolChargePolicy> {
        self.policies.get(tool_code)
    }

    /// Returns every policy, ordered by tool code.
    pub fn policies(&self) -> Vec<&ToolChargePolicy> {
        let mut policies: Vec<&ToolChargePolicy> = self.policies.values().collect();
        policies.sort_by(|a, b| a.tool_code.cmp(&b.tool_code));
        policies
    }

    /// Number of tools in the catalog.
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    /// Whether the catalog has no tools.
    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

impl PolicyResolver for ToolCatalog {
    fn resolve(&self, tool_code: &str) -> RentalResult<ToolChargePolicy> {
        self.get(tool_code)
            .cloned()
            .ok_or_else(|| RentalError::NotFound {
                tool_code: tool_code.to_string(),
            })
    }
}
