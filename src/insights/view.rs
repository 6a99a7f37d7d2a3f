//! The assembled insights view for one filter selection.

use serde::Serialize;
use tracing::debug;

use crate::models::{FilterCriteria, Section};

use super::dataset::RentalDataset;
use super::filter::describe_filter;
use super::footfall::{footfall_ranking, FootfallRanking};
use super::summary::{summarize, Summary};
use super::table::{table_view, TableRow};
use super::trend::{rental_trend, TrendView};

const NO_SUMMARY: &str = "No data available for the selected filters.";
const NO_TREND: &str = "No trend data available for your selection.";
const NO_FOOTFALL: &str = "No footfall data available for your selection.";
const NO_TABLE: &str = "No data to display.";

/// Every insights stage for a single selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightsView {
    /// The selection the view was built for.
    pub criteria: FilterCriteria,
    /// The selection in words.
    pub filter_description: String,
    /// Number of records that passed the filter.
    pub matched_records: usize,
    /// Average bid and footfall.
    pub summary: Section<Summary>,
    /// Bid trend for the top centres.
    pub trend: Section<TrendView>,
    /// Busiest centres.
    pub footfall: Section<FootfallRanking>,
    /// Newest-first table.
    pub table: Section<Vec<TableRow>>,
}

/// Filters `dataset` and runs every aggregation stage.
///
/// Each stage reports its own "no data" state, so an empty selection never
/// fails.
pub fn build_insights(dataset: &RentalDataset, criteria: &FilterCriteria) -> InsightsView {
    let filtered = dataset.filter(criteria);
    debug!(
        region = criteria.region.as_str(),
        trade_type = criteria.trade_type.as_str(),
        matched = filtered.len(),
        total = dataset.len(),
        "Filtered rental dataset"
    );

    InsightsView {
        criteria: criteria.clone(),
        filter_description: describe_filter(criteria),
        matched_records: filtered.len(),
        summary: Section::from_option(summarize(&filtered), NO_SUMMARY),
        trend: Section::from_option(rental_trend(&filtered), NO_TREND),
        footfall: Section::from_option(footfall_ranking(&filtered), NO_FOOTFALL),
        table: Section::from_option(table_view(&filtered), NO_TABLE),
    }
}
