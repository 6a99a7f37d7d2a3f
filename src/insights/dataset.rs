//! The loaded dataset and filtered projections of it.

use std::collections::BTreeSet;

use crate::models::{FilterCriteria, RentalRecord};

use super::filter::FilterOptions;

/// The full, immutable rental dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RentalDataset {
    records: Vec<RentalRecord>,
}

impl RentalDataset {
    /// Wraps parsed records, keeping their source order.
    pub fn new(records: Vec<RentalRecord>) -> Self {
        Self { records }
    }

    /// All records in source order.
    pub fn records(&self) -> &[RentalRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct regions, sorted.
    pub fn regions(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.region.as_str()))
    }

    /// Distinct trade types, sorted.
    pub fn trade_types(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.trade_type.as_str()))
    }

    /// The selectable filter values, each list starting with "All".
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::new(self.regions(), self.trade_types())
    }

    /// Derives the records matching `criteria`, preserving source order.
    ///
    /// ```
    /// use hawker_hub::insights::RentalDataset;
    /// use hawker_hub::models::FilterCriteria;
    ///
    /// let dataset = RentalDataset::default();
    /// assert!(dataset.filter(&FilterCriteria::default()).is_empty());
    /// ```
    pub fn filter(&self, criteria: &FilterCriteria) -> FilteredDataset<'_> {
        FilteredDataset {
            records: self.records.iter().filter(|r| criteria.matches(r)).collect(),
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// A read-only view of the records that passed a filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredDataset<'a> {
    records: Vec<&'a RentalRecord>,
}

impl<'a> FilteredDataset<'a> {
    /// Builds a view over arbitrary records.
    pub fn from_records(records: Vec<&'a RentalRecord>) -> Self {
        Self { records }
    }

    /// The matching records in source order.
    pub fn records(&self) -> &[&'a RentalRecord] {
        &self.records
    }

    /// Number of matching records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
