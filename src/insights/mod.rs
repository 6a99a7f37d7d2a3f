//! Rental and footfall insights.
//!
//! A small pipeline over the historical tender dataset:
//!
//! 1. load the CSV and normalise its headers ([`load_dataset`], [`read_dataset`])
//! 2. filter by region and trade type ([`RentalDataset::filter`])
//! 3. aggregate into summary figures, a bid trend, a footfall ranking and a table
//!
//! Every aggregation returns `None` for an empty selection instead of failing;
//! [`build_insights`] turns those into "no data" sections.

mod aggregate;
mod cache;
mod dataset;
mod filter;
mod footfall;
mod loader;
mod schema;
mod summary;
mod table;
mod trend;
mod view;

pub use cache::DatasetCache;
pub use dataset::{FilteredDataset, RentalDataset};
pub use filter::{describe_filter, FilterOptions};
pub use footfall::{footfall_ranking, CentreFootfall, FootfallRanking};
pub use loader::{load_dataset, read_dataset};
pub use schema::{normalize_column_name, normalize_headers, COLUMN_MAP};
pub use summary::{summarize, Summary};
pub use table::{table_view, TableRow};
pub use trend::{rental_trend, CentreAverage, TrendView, TOP_CENTRES};
pub use view::{build_insights, InsightsView};
