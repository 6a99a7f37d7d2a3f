//! Bid trends for the highest-bid hawker centres.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashSet;

use crate::models::RentalRecord;

use super::aggregate::top_groups_by_mean;
use super::dataset::FilteredDataset;

/// How many centres the trend and footfall charts show.
pub const TOP_CENTRES: usize = 5;

/// A centre and its mean bid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CentreAverage {
    /// Hawker centre name.
    pub hawker_centre: String,
    /// Mean bid amount across the selection.
    pub average_bid: Decimal,
}

/// Time series input for the bid trend chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendView {
    /// The selected centres, highest mean bid first.
    pub top_centres: Vec<CentreAverage>,
    /// Every selected record belonging to those centres, in source order.
    pub rows: Vec<RentalRecord>,
    /// The most recent month among `rows`.
    pub latest_month: NaiveDate,
    /// `latest_month` rendered like "Mar 2024".
    pub latest_month_label: String,
}

/// Picks the [`TOP_CENTRES`] centres with the highest mean bid and keeps all
/// of their records. Returns `None` when nothing is selected or the bids are
/// too large to average.
pub fn rental_trend(filtered: &FilteredDataset<'_>) -> Option<TrendView> {
    let top = top_groups_by_mean(
        filtered.records(),
        |r| r.hawker_centre.clone(),
        |r| r.bid_amount,
        TOP_CENTRES,
    )?;
    if top.is_empty() {
        return None;
    }

    let selected: HashSet<&str> = top.iter().map(|(centre, _)| centre.as_str()).collect();
    let rows: Vec<RentalRecord> = filtered
        .records()
        .iter()
        .filter(|r| selected.contains(r.hawker_centre.as_str()))
        .map(|r| (*r).clone())
        .collect();

    let latest_month = rows.iter().map(|r| r.month).max()?;

    Some(TrendView {
        top_centres: top
            .into_iter()
            .map(|(hawker_centre, average_bid)| CentreAverage {
                hawker_centre,
                average_bid,
            })
            .collect(),
        rows,
        latest_month,
        latest_month_label: latest_month.format("%b %Y").to_string(),
    })
}
