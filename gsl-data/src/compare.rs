//! Per-year monthly matrices for the year-vs-year comparison chart.

use chrono::Datelike;
use gsl_core::series::SeriesPoint;
use std::collections::BTreeMap;

/// Spread a monthly series into per-year rows of twelve slots, one per
/// calendar month. Months with no bucket stay 0.0, matching how the
/// comparison chart draws missing months.
pub fn by_year(series: &[SeriesPoint]) -> BTreeMap<i32, [f64; 12]> {
    let mut years: BTreeMap<i32, [f64; 12]> = BTreeMap::new();
    for point in series {
        let row = years.entry(point.date.year()).or_insert([0.0; 12]);
        row[point.date.month0() as usize] = point.value;
    }
    years
}

/// The monthly row for one year; an absent year compares as all zeros.
pub fn year_row(years: &BTreeMap<i32, [f64; 12]>, year: i32) -> [f64; 12] {
    years.get(&year).copied().unwrap_or([0.0; 12])
}
