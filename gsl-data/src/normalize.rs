//! Series normalization for cross-series visual comparison.
//!
//! Species counts and climate indices have wildly different units; both
//! get rescaled into a bounded range before they share a chart. The
//! normalizers are positional 1:1 maps: bucket count and order never
//! change.

use gsl_core::series::SeriesPoint;

/// Fallback divisor for an empty or all-zero series. Keeps the output
/// bounded instead of dividing by zero.
pub const DEGENERATE_DIVISOR: f64 = 1.0;

/// Min-max scale a non-negative series into [0, 1] by dividing by the
/// series maximum.
pub fn normalize(series: &[SeriesPoint]) -> Vec<SeriesPoint> {
    let max = series
        .iter()
        .map(|point| point.value)
        .fold(f64::NEG_INFINITY, f64::max);
    scale_by(series, max)
}

/// Scale a signed series into [-1, 1] by dividing by the maximum absolute
/// value, preserving sign and zero-centering (ONI-style indices).
pub fn normalize_signed(series: &[SeriesPoint]) -> Vec<SeriesPoint> {
    let max = series
        .iter()
        .map(|point| point.value.abs())
        .fold(f64::NEG_INFINITY, f64::max);
    scale_by(series, max)
}

fn scale_by(series: &[SeriesPoint], max: f64) -> Vec<SeriesPoint> {
    let divisor = if max > 0.0 { max } else { DEGENERATE_DIVISOR };
    series
        .iter()
        .map(|point| SeriesPoint::new(point.date, point.value / divisor))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{normalize, normalize_signed};
    use chrono::NaiveDate;
    use gsl_core::series::SeriesPoint;

    fn point(month: u32, value: f64) -> SeriesPoint {
        SeriesPoint::new(NaiveDate::from_ymd_opt(2004, month, 1).unwrap(), value)
    }

    #[test]
    fn test_normalize_scales_to_unit_range() {
        let series = vec![point(1, 2.0), point(2, 8.0), point(3, 4.0)];
        let normalized = normalize(&series);
        assert_eq!(normalized[0].value, 0.25);
        assert_eq!(normalized[1].value, 1.0);
        assert_eq!(normalized[2].value, 0.5);
        assert!(normalized.iter().all(|p| (0.0..=1.0).contains(&p.value)));
    }

    #[test]
    fn test_normalize_preserves_dates_and_length() {
        let series = vec![point(1, 3.0), point(2, 6.0)];
        let normalized = normalize(&series);
        assert_eq!(normalized.len(), series.len());
        assert_eq!(normalized[0].date, series[0].date);
        assert_eq!(normalized[1].date, series[1].date);
    }

    #[test]
    fn test_normalize_is_idempotent_at_unit_max() {
        let series = vec![point(1, 0.25), point(2, 1.0), point(3, 0.5)];
        let once = normalize(&series);
        let twice = normalize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_degenerate_series_falls_back_to_unit_divisor() {
        let series = vec![point(1, 0.0), point(2, 0.0)];
        let normalized = normalize(&series);
        assert_eq!(normalized[0].value, 0.0);
        assert_eq!(normalized[1].value, 0.0);
        assert!(normalize(&[]).is_empty());
    }

    #[test]
    fn test_normalize_signed_preserves_sign() {
        let series = vec![point(1, -2.0), point(2, 1.0), point(3, 0.0)];
        let normalized = normalize_signed(&series);
        assert_eq!(normalized[0].value, -1.0);
        assert_eq!(normalized[1].value, 0.5);
        assert_eq!(normalized[2].value, 0.0);
        assert!(normalized.iter().all(|p| (-1.0..=1.0).contains(&p.value)));
    }
}
