//! CSV ingestion with per-column type inference.
//!
//! Every column is read as text first. Missing markers are normalized to
//! `None`, then the narrowest type that parses every remaining cell wins, in
//! the order bool, int64, float64, datetime, string.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};

use crate::dataset::{Column, ColumnValues, Dataset};
use crate::error::Result;

const MISSING_MARKERS: &[&str] = &[
    "", "na", "n/a", "nan", "null", "none", "nil", "#n/a", "<na>", "nat",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y"];

/// Options for reading delimited text.
#[derive(Debug, Clone)]
pub struct CsvOptions {
    pub delimiter: u8,
    /// When false, columns are named `column_0`, `column_1`, ...
    pub has_headers: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: true,
        }
    }
}

/// Read a CSV file into a dataset named after the file stem.
pub fn read_csv(path: &Path, options: &CsvOptions) -> Result<Dataset> {
    let file = File::open(path)?;
    let dataset = read_csv_from(file, options)?;
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(ToString::to_string);

    tracing::debug!(
        event = "csv_loaded",
        path = %path.display(),
        rows = dataset.height(),
        columns = dataset.width()
    );

    Ok(match name {
        Some(name) => dataset.with_name(name),
        None => dataset,
    })
}

/// Read CSV data from any reader into an unnamed dataset.
pub fn read_csv_from<R: Read>(reader: R, options: &CsvOptions) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(options.has_headers)
        .from_reader(reader);

    let mut headers: Vec<String> = if options.has_headers {
        reader.headers()?.iter().map(ToString::to_string).collect()
    } else {
        Vec::new()
    };

    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record?;
        while cells.len() < record.len() {
            cells.push(Vec::new());
        }
        for (index, column) in cells.iter_mut().enumerate() {
            column.push(record.get(index).and_then(normalize_cell));
        }
    }

    while headers.len() < cells.len() {
        headers.push(format!("column_{}", headers.len()));
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, raw)| Column::new(name, infer_values(raw)))
        .collect();

    Dataset::new(columns)
}

fn normalize_cell(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let lower = trimmed.to_lowercase();
    if MISSING_MARKERS.contains(&lower.as_str()) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Pick the narrowest column type that parses every non-missing cell.
pub fn infer_values(raw: Vec<Option<String>>) -> ColumnValues {
    if let Some(values) = parse_all(&raw, parse_bool) {
        return ColumnValues::Bool(values);
    }
    if let Some(values) = parse_all(&raw, |cell| cell.parse::<i64>().ok()) {
        return ColumnValues::Int64(values);
    }
    if let Some(values) = parse_all(&raw, parse_float) {
        return ColumnValues::Float64(values);
    }
    if let Some(values) = parse_all(&raw, parse_datetime) {
        return ColumnValues::Datetime(values);
    }
    ColumnValues::String(raw)
}

/// Parse every present cell; `None` when any cell fails or no cell is present.
fn parse_all<T>(
    raw: &[Option<String>],
    parse: impl Fn(&str) -> Option<T>,
) -> Option<Vec<Option<T>>> {
    if raw.iter().all(Option::is_none) {
        return None;
    }
    raw.iter()
        .map(|cell| match cell {
            Some(cell) => parse(cell).map(Some),
            None => Some(None),
        })
        .collect()
}

fn parse_bool(cell: &str) -> Option<bool> {
    match cell.to_lowercase().as_str() {
        "true" | "yes" => Some(true),
        "false" | "no" => Some(false),
        _ => None,
    }
}

fn parse_float(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn parse_datetime(cell: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(cell, format).ok())
        .or_else(|| {
            DATE_FORMATS.iter().find_map(|format| {
                NaiveDate::parse_from_str(cell, format)
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(raw: &[&str]) -> Vec<Option<String>> {
        raw.iter().map(|cell| normalize_cell(cell)).collect()
    }

    #[test]
    fn infers_integer_with_missing_markers() {
        let values = infer_values(cells(&["1", "NA", "3", ""]));
        assert_eq!(values, ColumnValues::Int64(vec![Some(1), None, Some(3), None]));
    }

    #[test]
    fn mixed_int_and_float_is_float() {
        let values = infer_values(cells(&["1", "2.5"]));
        assert_eq!(values, ColumnValues::Float64(vec![Some(1.0), Some(2.5)]));
    }

    #[test]
    fn parses_dates_at_midnight() {
        let values = infer_values(cells(&["2024-01-02", "2024-03-04 10:30:00"]));
        let ColumnValues::Datetime(values) = values else {
            panic!("expected datetime column");
        };
        assert_eq!(
            values[0].map(|value| value.to_string()),
            Some("2024-01-02 00:00:00".to_string())
        );
    }

    #[test]
    fn all_missing_column_stays_text() {
        let values = infer_values(cells(&["", "null"]));
        assert_eq!(values, ColumnValues::String(vec![None, None]));
    }

    #[test]
    fn words_are_text() {
        let values = infer_values(cells(&["yes", "maybe"]));
        assert_eq!(
            values,
            ColumnValues::String(vec![Some("yes".to_string()), Some("maybe".to_string())])
        );
    }
}
