//! Revenue estimator.
//!
//! Turns a stall operator's location choice, cost assumptions and pricing into
//! monthly revenue, cost and profit figures.

mod location;
mod revenue;

pub use location::{rent_for_location, DEFAULT_CUSTOM_RENT, LOCATION_RENTS};
pub use revenue::{
    cost_breakdown, estimate, headline, validate_costs, validate_revenue, MAX_OPERATING_DAYS,
    MIN_PRICE_PER_ITEM,
};
