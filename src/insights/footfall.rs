//! Footfall ranking across hawker centres.

use rust_decimal::Decimal;
use serde::Serialize;

use super::aggregate::top_groups_by_mean;
use super::dataset::FilteredDataset;
use super::trend::TOP_CENTRES;

/// A centre's mean daily footfall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CentreFootfall {
    /// Hawker centre name.
    pub hawker_centre: String,
    /// Region the centre is in.
    pub region: String,
    /// Mean daily footfall across the selection.
    pub average_footfall: Decimal,
}

/// The busiest centres and the single busiest one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FootfallRanking {
    /// Up to five centres, busiest first.
    pub top: Vec<CentreFootfall>,
    /// The first entry of `top`.
    pub leader: CentreFootfall,
}

impl FootfallRanking {
    /// Headline sentence naming the busiest centre.
    pub fn headline(&self) -> String {
        format!(
            "{} has the highest average daily footfall: {} visitors/day.",
            self.leader.hawker_centre,
            crate::format::group_thousands(self.leader.average_footfall, 0)
        )
    }
}

/// Ranks (centre, region) groups by mean footfall. Returns `None` when
/// nothing is selected or a group cannot be averaged.
pub fn footfall_ranking(filtered: &FilteredDataset<'_>) -> Option<FootfallRanking> {
    let top: Vec<CentreFootfall> = top_groups_by_mean(
        filtered.records(),
        |r| (r.hawker_centre.clone(), r.region.clone()),
        |r| Decimal::from(r.footfall),
        TOP_CENTRES,
    )?
    .into_iter()
    .map(|((hawker_centre, region), average_footfall)| CentreFootfall {
        hawker_centre,
        region,
        average_footfall,
    })
    .collect();

    let leader = top.first()?.clone();
    Some(FootfallRanking { top, leader })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RentalRecord;
    use chrono::NaiveDate;

    fn record(centre: &str, region: &str, footfall: u32) -> RentalRecord {
        RentalRecord {
            hawker_centre: centre.to_string(),
            trade_type: "Cooked Food".to_string(),
            region: region.to_string(),
            month: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            bid_amount: Decimal::from(2000),
            footfall,
        }
    }

    #[test]
    fn test_ranking_orders_by_mean_footfall() {
        let rows = [
            record("Bedok", "East", 5000),
            record("Maxwell", "Central", 9000),
            record("Maxwell", "Central", 9400),
            record("Chomp Chomp", "North", 6500),
        ];
        let filtered = FilteredDataset::from_records(rows.iter().collect());
        let ranking = footfall_ranking(&filtered).unwrap();

        let names: Vec<&str> = ranking
            .top
            .iter()
            .map(|c| c.hawker_centre.as_str())
            .collect();
        assert_eq!(names, vec!["Maxwell", "Chomp Chomp", "Bedok"]);
        assert_eq!(ranking.leader.average_footfall, Decimal::from(9200));
        assert_eq!(ranking.leader.region, "Central");
        assert_eq!(
            ranking.headline(),
            "Maxwell has the highest average daily footfall: 9,200 visitors/day."
        );
    }

    #[test]
    fn test_same_centre_in_two_regions_ranks_separately() {
        let rows = [record("Market", "East", 100), record("Market", "West", 300)];
        let filtered = FilteredDataset::from_records(rows.iter().collect());
        let ranking = footfall_ranking(&filtered).unwrap();
        assert_eq!(ranking.top.len(), 2);
        assert_eq!(ranking.leader.region, "West");
    }

    #[test]
    fn test_ranking_caps_at_five() {
        let rows: Vec<RentalRecord> = (0..8)
            .map(|i| record(&format!("Centre {}", i), "North", 1000 + i))
            .collect();
        let filtered = FilteredDataset::from_records(rows.iter().collect());
        let ranking = footfall_ranking(&filtered).unwrap();
        assert_eq!(ranking.top.len(), TOP_CENTRES);
        assert_eq!(ranking.leader.hawker_centre, "Centre 7");
    }

    #[test]
    fn test_empty_selection_has_no_ranking() {
        let filtered = FilteredDataset::from_records(Vec::new());
        assert_eq!(footfall_ranking(&filtered), None);
    }
}
