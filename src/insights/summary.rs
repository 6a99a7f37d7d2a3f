//! Headline averages over the filtered dataset.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::format::group_thousands;

use super::aggregate::mean;
use super::dataset::FilteredDataset;

/// Average bid and footfall across the selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Mean bid amount (SGD).
    pub average_bid: Decimal,
    /// Mean daily footfall.
    pub average_footfall: Decimal,
    /// Number of records averaged.
    pub record_count: usize,
}

impl Summary {
    /// The average rent as shown on the dashboard, e.g. `$2,350`.
    pub fn average_bid_label(&self) -> String {
        format!("${}", group_thousands(self.average_bid, 0))
    }

    /// The average footfall as shown on the dashboard, e.g. `6,800 people/day`.
    pub fn average_footfall_label(&self) -> String {
        format!("{} people/day", group_thousands(self.average_footfall, 0))
    }
}

/// Averages bid amount and footfall, or `None` when nothing is selected or
/// the totals overflow.
pub fn summarize(filtered: &FilteredDataset<'_>) -> Option<Summary> {
    let records = filtered.records();
    let average_bid = mean(records.iter().map(|r| r.bid_amount))?;
    let average_footfall = mean(records.iter().map(|r| Decimal::from(r.footfall)))?;

    Some(Summary {
        average_bid,
        average_footfall,
        record_count: records.len(),
    })
}
