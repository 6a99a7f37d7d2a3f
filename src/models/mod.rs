//! Core data models for HawkerHub.
//!
//! This module contains the domain types shared by the revenue estimator,
//! the grant finder and the rental insights pipeline.

mod finance;
mod rental;
mod section;
mod survey;

pub use finance::{
    CostAssumptions, CostLine, FinancialResult, Location, ProfitStatus, RevenueAssumptions,
};
pub use rental::{FilterCriteria, RentalRecord, Selection, ALL_SENTINEL};
pub use section::Section;
pub use survey::{GrantMatch, SurveyResponse};
