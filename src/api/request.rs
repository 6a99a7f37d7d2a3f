//! Request types for the HawkerHub API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::HubResult;
use crate::estimator::rent_for_location;
use crate::models::{CostAssumptions, Location, RevenueAssumptions};

/// Request body for the `/estimate` endpoint.
///
/// Every field is optional; omitted fields take the estimator form defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateRequest {
    /// Stall location category.
    pub location: Location,
    /// Rent to use when `location` is `custom`.
    pub custom_rent: Option<Decimal>,
    /// Operating days per month.
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
    /// Price per item sold.
    pub price_per_item: Decimal,
    /// Items sold per operating day.
    pub items_sold_per_day: u32,
}

impl Default for EstimateRequest {
    fn default() -> Self {
        let cost = CostAssumptions::default();
        let revenue = RevenueAssumptions::default();
        Self {
            location: Location::default(),
            custom_rent: None,
            operating_days: cost.operating_days,
            manpower: cost.manpower,
            cleaning_fee: cost.cleaning_fee,
            scc_fee: cost.scc_fee,
            utilities: cost.utilities,
            misc: cost.misc,
            price_per_item: revenue.price_per_item,
            items_sold_per_day: revenue.items_sold_per_day,
        }
    }
}

impl EstimateRequest {
    /// Resolves the rent and splits the form into estimator inputs.
    pub fn into_assumptions(self) -> HubResult<(CostAssumptions, RevenueAssumptions)> {
        let rent = rent_for_location(self.location, self.custom_rent)?;
        let cost = CostAssumptions {
            rent,
            operating_days: self.operating_days,
            manpower: self.manpower,
            cleaning_fee: self.cleaning_fee,
            scc_fee: self.scc_fee,
            utilities: self.utilities,
            misc: self.misc,
        };
        let revenue = RevenueAssumptions {
            price_per_item: self.price_per_item,
            items_sold_per_day: self.items_sold_per_day,
        };
        Ok((cost, revenue))
    }
}
