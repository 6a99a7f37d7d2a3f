//! Revenue estimator models.
//!
//! This module defines the cost and revenue assumptions a stall operator enters,
//! and the [`FinancialResult`] the estimator derives from them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The stall location categories offered by the estimator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// A newly built housing estate.
    NewEstate,
    /// A mature housing estate.
    #[default]
    MatureEstate,
    /// The central business district.
    Cbd,
    /// A user-supplied rent.
    Custom,
}

/// Monthly cost assumptions for a stall.
///
/// All currency fields are monthly amounts in SGD and must be non-negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostAssumptions {
    /// Monthly stall rent.
    pub rent: Decimal,
    /// Number of days the stall opens per month (0 to 31).
    pub operating_days: u32,
    /// Monthly manpower cost.
    pub manpower: Decimal,
    /// Monthly cleaning fee.
    pub cleaning_fee: Decimal,
    /// Monthly Service & Conservancy Charges.
    pub scc_fee: Decimal,
    /// Monthly utilities.
    pub utilities: Decimal,
    /// Miscellaneous monthly fees.
    pub misc: Decimal,
}

impl Default for CostAssumptions {
    fn default() -> Self {
        Self {
            rent: Decimal::from(2500),
            operating_days: 26,
            manpower: Decimal::from(2000),
            cleaning_fee: Decimal::from(500),
            scc_fee: Decimal::from(175),
            utilities: Decimal::from(400),
            misc: Decimal::from(200),
        }
    }
}

/// Pricing and volume assumptions for a stall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueAssumptions {
    /// Price charged per item (at least $0.50).
    pub price_per_item: Decimal,
    /// Expected number of items sold per operating day.
    pub items_sold_per_day: u32,
}

impl Default for RevenueAssumptions {
    fn default() -> Self {
        Self {
            price_per_item: Decimal::new(500, 2),
            items_sold_per_day: 80,
        }
    }
}

/// Whether an estimate shows a profit, a loss or breaks even.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfitStatus {
    /// Net profit is above zero.
    Profit,
    /// Net profit is below zero.
    Loss,
    /// Net profit is exactly zero.
    BreakEven,
}

impl ProfitStatus {
    /// Classifies a net profit figure.
    ///
    /// ```
    /// use hawker_hub::models::ProfitStatus;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(ProfitStatus::from_net_profit(Decimal::ZERO), ProfitStatus::BreakEven);
    /// assert_eq!(ProfitStatus::from_net_profit(Decimal::ONE), ProfitStatus::Profit);
    /// ```
    pub fn from_net_profit(net_profit: Decimal) -> Self {
        if net_profit > Decimal::ZERO {
            ProfitStatus::Profit
        } else if net_profit < Decimal::ZERO {
            ProfitStatus::Loss
        } else {
            ProfitStatus::BreakEven
        }
    }
}

/// The monthly figures derived from a set of assumptions.
///
/// `net_profit` is always exactly `monthly_revenue - monthly_costs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialResult {
    /// Price per item x items per day x operating days.
    pub monthly_revenue: Decimal,
    /// Sum of all six cost fields.
    pub monthly_costs: Decimal,
    /// Revenue minus costs.
    pub net_profit: Decimal,
    /// Classification of `net_profit`.
    pub status: ProfitStatus,
}

/// A single line of the detailed cost breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostLine {
    /// Display label (e.g., "S&CC Fee").
    pub label: String,
    /// Monthly amount.
    pub amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_deserializes_snake_case() {
        let location: Location = serde_json::from_str("\"new_estate\"").unwrap();
        assert_eq!(location, Location::NewEstate);
        let location: Location = serde_json::from_str("\"cbd\"").unwrap();
        assert_eq!(location, Location::Cbd);
    }

    #[test]
    fn test_default_assumptions_match_form_defaults() {
        let cost = CostAssumptions::default();
        assert_eq!(cost.operating_days, 26);
        assert_eq!(cost.scc_fee, Decimal::from(175));

        let revenue = RevenueAssumptions::default();
        assert_eq!(revenue.price_per_item, Decimal::from(5));
        assert_eq!(revenue.items_sold_per_day, 80);
    }

    #[test]
    fn test_profit_status_classification() {
        assert_eq!(
            ProfitStatus::from_net_profit(Decimal::new(-1, 2)),
            ProfitStatus::Loss
        );
        assert_eq!(
            ProfitStatus::from_net_profit(Decimal::new(1, 2)),
            ProfitStatus::Profit
        );
        assert_eq!(
            ProfitStatus::from_net_profit(Decimal::ZERO),
            ProfitStatus::BreakEven
        );
    }

    #[test]
    fn test_profit_status_serializes_snake_case() {
        let json = serde_json::to_string(&ProfitStatus::BreakEven).unwrap();
        assert_eq!(json, "\"break_even\"");
    }
}
