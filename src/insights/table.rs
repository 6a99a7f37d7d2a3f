//! Tabular view of the filtered dataset.

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;

use super::dataset::FilteredDataset;

/// A display row with the month rendered as `YYYY-MM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    /// Hawker centre name.
    pub hawker_centre: String,
    /// Trade type.
    pub trade_type: String,
    /// Region.
    pub region: String,
    /// Month as `YYYY-MM`.
    pub month: String,
    /// Bid amount.
    pub bid_amount: Decimal,
    /// Daily footfall.
    pub footfall: u32,
}

/// Lists the selection newest month first. Rows within the same month keep
/// their source order. Returns `None` when nothing is selected.
pub fn table_view(filtered: &FilteredDataset<'_>) -> Option<Vec<TableRow>> {
    if filtered.is_empty() {
        return None;
    }

    let mut records = filtered.records().to_vec();
    records.sort_by_key(|r| std::cmp::Reverse((r.month.year(), r.month.month())));

    Some(
        records
            .into_iter()
            .map(|r| TableRow {
                hawker_centre: r.hawker_centre.clone(),
                trade_type: r.trade_type.clone(),
                region: r.region.clone(),
                month: r.month.format("%Y-%m").to_string(),
                bid_amount: r.bid_amount,
                footfall: r.footfall,
            })
            .collect(),
    )
}
