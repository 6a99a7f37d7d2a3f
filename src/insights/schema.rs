//! Column name translation between the raw CSV and [`RentalRecord`] fields.
//!
//! [`RentalRecord`]: crate::models::RentalRecord

use csv::StringRecord;

use crate::error::{HubError, HubResult};

/// Raw CSV header to canonical field name.
pub const COLUMN_MAP: [(&str, &str); 6] = [
    ("Hawker Centre", "hawker_centre"),
    ("Trade Type", "trade_type"),
    ("Bid Amount", "bid_amount"),
    ("Region", "region"),
    ("Footfall Estimate", "footfall"),
    ("Month", "month"),
];

/// Maps a header to its canonical field name.
///
/// Accepts either the raw header or the canonical name itself, so
/// normalising twice gives the same result. Surrounding whitespace is ignored.
///
/// ```
/// use hawker_hub::insights::normalize_column_name;
///
/// assert_eq!(normalize_column_name("Footfall Estimate"), Some("footfall"));
/// assert_eq!(normalize_column_name("footfall"), Some("footfall"));
/// assert_eq!(normalize_column_name("Postal Code"), None);
/// ```
pub fn normalize_column_name(header: &str) -> Option<&'static str> {
    let header = header.trim();
    COLUMN_MAP
        .iter()
        .find(|(raw, canonical)| *raw == header || *canonical == header)
        .map(|(_, canonical)| *canonical)
}

/// Normalises a full header row. Unknown columns pass through unchanged.
pub fn normalize_headers<'a, I>(headers: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    headers
        .into_iter()
        .map(|h| match normalize_column_name(h) {
            Some(canonical) => canonical.to_string(),
            None => h.to_string(),
        })
        .collect()
}

/// Positions of each required field within a CSV record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ColumnIndex {
    pub hawker_centre: usize,
    pub trade_type: usize,
    pub bid_amount: usize,
    pub region: usize,
    pub footfall: usize,
    pub month: usize,
}

impl ColumnIndex {
    /// Locates every required column in `headers`, in any order.
    pub(crate) fn resolve(headers: &StringRecord, source: &str) -> HubResult<Self> {
        let normalized = normalize_headers(headers.iter());
        let find = |canonical: &str| -> HubResult<usize> {
            normalized
                .iter()
                .position(|h| h == canonical)
                .ok_or_else(|| HubError::MissingColumn {
                    path: source.to_string(),
                    column: COLUMN_MAP
                        .iter()
                        .find(|(_, c)| *c == canonical)
                        .map(|(raw, _)| raw.to_string())
                        .unwrap_or_else(|| canonical.to_string()),
                })
        };

        Ok(Self {
            hawker_centre: find("hawker_centre")?,
            trade_type: find("trade_type")?,
            bid_amount: find("bid_amount")?,
            region: find("region")?,
            footfall: find("footfall")?,
            month: find("month")?,
        })
    }
}
