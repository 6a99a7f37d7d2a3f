//! Rental and footfall models.
//!
//! A [`RentalRecord`] is one observation of a stall tender at a hawker centre
//! for a given trade type and month. [`FilterCriteria`] selects a subset of the
//! dataset by region and trade type.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The filter value meaning "no constraint".
///
/// Datasets containing this value as a region or trade type are rejected at
/// load time, so it never matches a real category.
pub const ALL_SENTINEL: &str = "All";

/// One row of the rental dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalRecord {
    /// Name of the hawker centre.
    pub hawker_centre: String,
    /// Trade type of the stall (e.g., "Cooked Food").
    pub trade_type: String,
    /// Region the centre is in.
    pub region: String,
    /// The month of the observation.
    pub month: NaiveDate,
    /// Winning tender bid for the stall (SGD per month).
    pub bid_amount: Decimal,
    /// Estimated visitors per day.
    pub footfall: u32,
}

/// A categorical filter: either every value, or exactly one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selection {
    /// No constraint.
    #[default]
    All,
    /// Only records whose field equals this value.
    Only(String),
}

impl Selection {
    /// Returns true if `value` passes this selection.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }

    /// The selection as it appears in a filter control.
    pub fn as_str(&self) -> &str {
        match self {
            Selection::All => ALL_SENTINEL,
            Selection::Only(value) => value,
        }
    }

    /// Returns true if this selection is the "All" sentinel.
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl From<String> for Selection {
    fn from(value: String) -> Self {
        if value == ALL_SENTINEL {
            Selection::All
        } else {
            Selection::Only(value)
        }
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        Selection::from(value.to_string())
    }
}

impl From<Selection> for String {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::All => ALL_SENTINEL.to_string(),
            Selection::Only(value) => value,
        }
    }
}

/// Region and trade type selections for the insights view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Region filter.
    pub region: Selection,
    /// Trade type filter.
    pub trade_type: Selection,
}

impl FilterCriteria {
    /// Creates criteria from two selections.
    pub fn new(region: impl Into<Selection>, trade_type: impl Into<Selection>) -> Self {
        Self {
            region: region.into(),
            trade_type: trade_type.into(),
        }
    }

    /// Returns true if `record` satisfies both selections.
    pub fn matches(&self, record: &RentalRecord) -> bool {
        self.region.accepts(&record.region) && self.trade_type.accepts(&record.trade_type)
    }
}
