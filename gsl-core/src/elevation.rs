//! Parser for the processed Great Salt Lake elevation file.
//!
//! Tab-delimited, two columns per line: `year<TAB>elevation-in-feet`.

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// One annual lake-elevation sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevationPoint {
    pub year: i32,
    pub feet: f64,
}

/// Parse the elevation file. Rows that fail to parse are skipped.
pub fn parse_elevation(body: &str) -> Vec<ElevationPoint> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b'\t')
        .flexible(true)
        .from_reader(body.trim().as_bytes());

    let mut points = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(_) => continue,
        };
        let year: i32 = match record.get(0).and_then(|s| s.trim().parse().ok()) {
            Some(y) => y,
            None => continue,
        };
        let feet: f64 = match record.get(1).and_then(|s| s.trim().parse().ok()) {
            Some(v) => v,
            None => continue,
        };
        points.push(ElevationPoint { year, feet });
    }
    points
}
