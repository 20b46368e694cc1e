//! Centered moving average for trend overlays.

use gsl_core::series::SeriesPoint;

/// Default smoothing window for monthly series, in buckets.
pub const DEFAULT_WINDOW: usize = 30;

/// Centered moving average over `series` with the given window size.
///
/// Point `i` averages the half-open index range
/// `[max(0, i - window/2), min(n, i + window/2 + 1))`. At the boundaries
/// the window shrinks to the available samples; there is no padding and no
/// wraparound. Output has the same length and dates as the input.
pub fn smooth(series: &[SeriesPoint], window: usize) -> Vec<SeriesPoint> {
    let half = window / 2;
    series
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let start = i.saturating_sub(half);
            let end = (i + half + 1).min(series.len());
            let slice = &series[start..end];
            let mean = slice.iter().map(|p| p.value).sum::<f64>() / slice.len() as f64;
            SeriesPoint::new(point.date, mean)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::smooth;
    use chrono::NaiveDate;
    use gsl_core::series::SeriesPoint;

    fn series(values: &[f64]) -> Vec<SeriesPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let year = 2004 + (i / 12) as i32;
                let month = (i % 12) as u32 + 1;
                SeriesPoint::new(NaiveDate::from_ymd_opt(year, month, 1).unwrap(), value)
            })
            .collect()
    }

    #[test]
    fn test_preserves_length_and_dates() {
        let input = series(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let smoothed = smooth(&input, 3);
        assert_eq!(smoothed.len(), input.len());
        for (raw, out) in input.iter().zip(&smoothed) {
            assert_eq!(raw.date, out.date);
        }
    }

    #[test]
    fn test_centered_window() {
        let input = series(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let smoothed = smooth(&input, 3);
        // index 2 averages indices [1, 4)
        assert_eq!(smoothed[2].value, 3.0);
    }

    #[test]
    fn test_boundary_window_shrinks() {
        let input = series(&[2.0, 4.0, 6.0, 8.0]);
        let smoothed = smooth(&input, 3);
        // index 0 averages [0, 2) only
        assert_eq!(smoothed[0].value, 3.0);
        // last index averages [2, 4) only
        assert_eq!(smoothed[3].value, 7.0);
    }

    #[test]
    fn test_window_30_at_index_zero_uses_sixteen_samples() {
        let values: Vec<f64> = (0..40).map(|i| i as f64).collect();
        let input = series(&values);
        let smoothed = smooth(&input, 30);
        // [max(0, -15), 0 + 15 + 1) = [0, 16): mean of 0..=15
        let expected = (0..16).sum::<i64>() as f64 / 16.0;
        assert_eq!(smoothed[0].value, expected);
    }

    #[test]
    fn test_window_one_is_identity() {
        let input = series(&[3.0, 1.0, 4.0]);
        assert_eq!(smooth(&input, 1), input);
    }

    #[test]
    fn test_empty_series() {
        assert!(smooth(&[], 30).is_empty());
    }
}
