//! Linear interpolation over the annual elevation series.
//!
//! The elevation chart reads back an interpolated value for the fractional
//! year under the cursor; the samples themselves are one per year.

use gsl_core::elevation::ElevationPoint;

/// Linearly interpolate the elevation at a fractional `year`.
///
/// Input must be sorted by year. Returns `None` when `year` falls outside
/// the sampled range or fewer than two samples exist.
pub fn interpolate_at(points: &[ElevationPoint], year: f64) -> Option<f64> {
    if points.len() < 2 {
        return None;
    }
    if year < points[0].year as f64 || year > points[points.len() - 1].year as f64 {
        return None;
    }
    for pair in points.windows(2) {
        let (left, right) = (pair[0], pair[1]);
        if year <= right.year as f64 {
            let span = (right.year - left.year) as f64;
            if span == 0.0 {
                return Some(left.feet);
            }
            let t = (year - left.year as f64) / span;
            return Some(left.feet + t * (right.feet - left.feet));
        }
    }
    None
}
