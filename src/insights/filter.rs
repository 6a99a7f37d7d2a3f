//! Filter option lists and the human-readable filter description.

use serde::Serialize;

use crate::models::{FilterCriteria, Selection, ALL_SENTINEL};

/// The values offered in the region and trade type selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// "All" followed by the sorted distinct regions.
    pub regions: Vec<String>,
    /// "All" followed by the sorted distinct trade types.
    pub trade_types: Vec<String>,
}

impl FilterOptions {
    pub(crate) fn new(regions: Vec<String>, trade_types: Vec<String>) -> Self {
        Self {
            regions: with_sentinel(regions),
            trade_types: with_sentinel(trade_types),
        }
    }
}

fn with_sentinel(values: Vec<String>) -> Vec<String> {
    std::iter::once(ALL_SENTINEL.to_string())
        .chain(values)
        .collect()
}

/// Describes the current selection in words.
///
/// ```
/// use hawker_hub::insights::describe_filter;
/// use hawker_hub::models::FilterCriteria;
///
/// let text = describe_filter(&FilterCriteria::new("East", "Drinks"));
/// assert_eq!(text, "Drinks trades in the East region");
/// ```
pub fn describe_filter(criteria: &FilterCriteria) -> String {
    match (&criteria.region, &criteria.trade_type) {
        (Selection::All, Selection::All) => "all trades across all regions".to_string(),
        (Selection::All, Selection::Only(trade)) => format!("{} trades across all regions", trade),
        (Selection::Only(region), Selection::All) => {
            format!("all trades in the {} region", region)
        }
        (Selection::Only(region), Selection::Only(trade)) => {
            format!("{} trades in the {} region", trade, region)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_every_combination() {
        assert_eq!(
            describe_filter(&FilterCriteria::default()),
            "all trades across all regions"
        );
        assert_eq!(
            describe_filter(&FilterCriteria::new(Selection::All, "Cooked Food")),
            "Cooked Food trades across all regions"
        );
        assert_eq!(
            describe_filter(&FilterCriteria::new("North", Selection::All)),
            "all trades in the North region"
        );
        assert_eq!(
            describe_filter(&FilterCriteria::new("North", "Drinks")),
            "Drinks trades in the North region"
        );
    }

    #[test]
    fn test_options_start_with_sentinel() {
        let options = FilterOptions::new(vec!["East".to_string()], vec![]);
        assert_eq!(options.regions, vec!["All", "East"]);
        assert_eq!(options.trade_types, vec!["All"]);
    }
}
