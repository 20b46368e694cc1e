//! Parsers for the climate index overlay files (ONI and SST).
//!
//! Both files are whitespace-delimited text as published upstream. Rows or
//! cells that fail to parse are skipped; a degenerate file yields an empty
//! series rather than an error.

use crate::series::SeriesPoint;
use chrono::NaiveDate;
use log::warn;

/// Number of monthly columns following the year column in the ONI file.
pub const ONI_MONTHS_PER_ROW: usize = 12;

/// The SST overlay keeps January rows only, within this year window.
/// Preserved as-is from the source pipeline.
pub const SST_YEAR_MIN: i32 = 2004;
pub const SST_YEAR_MAX: i32 = 2024;
pub const SST_MONTH: u32 = 1;

/// Positional column of the NINO3 anomaly value in the SST file.
pub const SST_VALUE_COLUMN: usize = 5;

/// Parse the ONI index file: one row per year, first column the year,
/// followed by twelve monthly values. Each cell becomes a point dated the
/// first of its month.
pub fn parse_oni(body: &str) -> Vec<SeriesPoint> {
    let mut series = Vec::new();
    for line in body.trim().lines() {
        let mut columns = line.split_whitespace();
        let year: i32 = match columns.next().and_then(|s| s.parse().ok()) {
            Some(y) => y,
            None => {
                warn!("skipping ONI row with unparsable year: {line:?}");
                continue;
            }
        };
        for (index, cell) in columns.take(ONI_MONTHS_PER_ROW).enumerate() {
            let value: f64 = match cell.parse() {
                Ok(v) => v,
                Err(_) => continue,
            };
            if let Some(date) = NaiveDate::from_ymd_opt(year, index as u32 + 1, 1) {
                series.push(SeriesPoint::new(date, value));
            }
        }
    }
    series
}

/// Parse the SST anomaly file: positional columns with year in column 0,
/// month in column 1 (1-based) and the NINO3 anomaly in column 5. Only
/// January rows inside [SST_YEAR_MIN, SST_YEAR_MAX] are kept, dated
/// January 1 of their year.
pub fn parse_sst(body: &str) -> Vec<SeriesPoint> {
    let mut series = Vec::new();
    for line in body.trim().lines() {
        let columns: Vec<&str> = line.split_whitespace().collect();
        if columns.len() <= SST_VALUE_COLUMN {
            continue;
        }
        let year: i32 = match columns[0].parse() {
            Ok(y) => y,
            Err(_) => continue,
        };
        let month: u32 = match columns[1].parse() {
            Ok(m) => m,
            Err(_) => continue,
        };
        let value: f64 = match columns[SST_VALUE_COLUMN].parse() {
            Ok(v) => v,
            Err(_) => continue,
        };
        if (SST_YEAR_MIN..=SST_YEAR_MAX).contains(&year) && month == SST_MONTH {
            let date = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
            series.push(SeriesPoint::new(date, value));
        }
    }
    series
}
