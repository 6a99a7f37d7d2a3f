//! Rental dataset loading.
//!
//! Reads the tender CSV, resolves its columns through the header map and
//! parses every row into a [`RentalRecord`]. Any malformed row fails the
//! whole load; callers never see a partial dataset.

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

use crate::error::{HubError, HubResult};
use crate::models::{RentalRecord, ALL_SENTINEL};

use super::dataset::RentalDataset;
use super::schema::ColumnIndex;

/// Slash dates are read month first, falling back to day first when the
/// month-first reading is not a valid date.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d/%m/%Y"];

/// Largest accepted monthly bid. Keeps dataset sums well inside `Decimal` range.
const MAX_BID_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Loads the rental dataset from a CSV file.
///
/// # Errors
///
/// - `DatasetNotFound` if the file cannot be opened
/// - `DatasetParseError` if the file is not valid CSV
/// - `MissingColumn` if a required column is absent
/// - `InvalidRow` if a row's month, bid amount or footfall does not parse
///
/// # Example
///
/// ```no_run
/// use hawker_hub::insights::load_dataset;
///
/// let dataset = load_dataset("data/rental_data.csv")?;
/// println!("{} records", dataset.len());
/// # Ok::<(), hawker_hub::error::HubError>(())
/// ```
pub fn load_dataset<P: AsRef<Path>>(path: P) -> HubResult<RentalDataset> {
    let path = path.as_ref();
    let source = path.display().to_string();

    let file = File::open(path).map_err(|_| HubError::DatasetNotFound {
        path: source.clone(),
    })?;

    let dataset = read_dataset(file, &source)?;
    info!(path = %source, records = dataset.len(), "Loaded rental dataset");
    Ok(dataset)
}

/// Parses a rental dataset from any reader. `source` names it in errors.
pub fn read_dataset<R: Read>(reader: R, source: &str) -> HubResult<RentalDataset> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let parse_error = |e: csv::Error| HubError::DatasetParseError {
        path: source.to_string(),
        message: e.to_string(),
    };

    let headers = csv_reader.headers().map_err(parse_error)?.clone();
    let columns = ColumnIndex::resolve(&headers, source)?;

    let mut records = Vec::new();
    for (index, result) in csv_reader.records().enumerate() {
        let row = result.map_err(parse_error)?;
        // header is line 1
        let line = row
            .position()
            .map(|p| p.line())
            .unwrap_or(index as u64 + 2);
        records.push(parse_row(&row, &columns, line)?);
    }

    Ok(RentalDataset::new(records))
}

fn field<'r>(row: &'r StringRecord, position: usize, name: &str, line: u64) -> HubResult<&'r str> {
    row.get(position).ok_or_else(|| HubError::InvalidRow {
        line,
        field: name.to_string(),
        message: "value is missing".to_string(),
    })
}

fn invalid(line: u64, name: &str, message: String) -> HubError {
    HubError::InvalidRow {
        line,
        field: name.to_string(),
        message,
    }
}

fn category(row: &StringRecord, position: usize, name: &str, line: u64) -> HubResult<String> {
    let value = field(row, position, name, line)?;
    if value.is_empty() {
        return Err(invalid(line, name, "value is empty".to_string()));
    }
    if value == ALL_SENTINEL {
        return Err(invalid(
            line,
            name,
            format!("'{}' is reserved for the no-filter selection", ALL_SENTINEL),
        ));
    }
    Ok(value.to_string())
}

fn parse_row(row: &StringRecord, columns: &ColumnIndex, line: u64) -> HubResult<RentalRecord> {
    let hawker_centre = category(row, columns.hawker_centre, "hawker_centre", line)?;
    let trade_type = category(row, columns.trade_type, "trade_type", line)?;
    let region = category(row, columns.region, "region", line)?;

    let raw_month = field(row, columns.month, "month", line)?;
    let month = parse_month(raw_month)
        .ok_or_else(|| invalid(line, "month", format!("'{}' is not a date", raw_month)))?;

    let raw_bid = field(row, columns.bid_amount, "bid_amount", line)?;
    let bid_amount = parse_bid(raw_bid).map_err(|m| invalid(line, "bid_amount", m))?;

    let raw_footfall = field(row, columns.footfall, "footfall", line)?;
    let footfall = parse_footfall(raw_footfall).map_err(|m| invalid(line, "footfall", m))?;

    Ok(RentalRecord {
        hawker_centre,
        trade_type,
        region,
        month,
        bid_amount,
        footfall,
    })
}

/// Parses a month cell. A bare `YYYY-MM` is taken as the first of the month.
fn parse_month(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .or_else(|| NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d").ok())
}

fn parse_bid(raw: &str) -> Result<Decimal, String> {
    let cleaned: String = raw
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    let amount = Decimal::from_str(&cleaned).map_err(|_| format!("'{}' is not a number", raw))?;
    if amount < Decimal::ZERO {
        return Err(format!("'{}' is negative", raw));
    }
    if amount > MAX_BID_AMOUNT {
        return Err(format!("'{}' exceeds the largest bid of {}", raw, MAX_BID_AMOUNT));
    }
    Ok(amount)
}

fn parse_footfall(raw: &str) -> Result<u32, String> {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    cleaned
        .parse::<u32>()
        .map_err(|_| format!("'{}' is not a whole number of visitors", raw))
}
