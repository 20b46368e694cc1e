use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single dated value in a plot-ready series.
///
/// Produced by aggregation and by the climate file parsers, consumed by
/// normalization and smoothing. Series are always in ascending date order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(date: NaiveDate, value: f64) -> SeriesPoint {
        SeriesPoint { date, value }
    }
}
