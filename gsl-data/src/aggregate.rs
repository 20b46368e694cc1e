//! Time-bucketed aggregation of observation records.

use gsl_core::month_key::MonthKey;
use gsl_core::observation::Observation;
use gsl_core::series::SeriesPoint;
use std::collections::BTreeMap;

/// Running sum and record count for one bucket. Buckets only exist once at
/// least one record has been folded in, so the mean never divides by zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Accumulator {
    pub total: f64,
    pub count: u64,
}

impl Accumulator {
    pub fn fold(&mut self, value: f64) {
        self.total += value;
        self.count += 1;
    }

    pub fn mean(&self) -> f64 {
        self.total / self.count as f64
    }
}

/// Bucketing granularity for aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Monthly,
    Yearly,
}

/// Average species counts per bucket at the requested granularity.
pub fn aggregate(observations: &[Observation], granularity: Granularity) -> Vec<SeriesPoint> {
    match granularity {
        Granularity::Monthly => aggregate_monthly(observations),
        Granularity::Yearly => aggregate_yearly(observations),
    }
}

/// Group observations into calendar-month buckets, keyed by `MonthKey`.
pub fn bucket_monthly(observations: &[Observation]) -> BTreeMap<MonthKey, Accumulator> {
    let mut buckets: BTreeMap<MonthKey, Accumulator> = BTreeMap::new();
    for obs in observations {
        buckets
            .entry(MonthKey::from_date(&obs.date))
            .or_default()
            .fold(obs.species_count as f64);
    }
    buckets
}

/// Average species counts per calendar month.
///
/// Output is key-sorted ascending; every downstream consumer (smoothing,
/// comparison matrices) indexes positionally and relies on that order.
pub fn aggregate_monthly(observations: &[Observation]) -> Vec<SeriesPoint> {
    bucket_monthly(observations)
        .iter()
        .map(|(key, acc)| SeriesPoint::new(key.first_day(), acc.mean()))
        .collect()
}

/// Average species counts per calendar year, dated January 1.
pub fn aggregate_yearly(observations: &[Observation]) -> Vec<SeriesPoint> {
    use chrono::Datelike;
    let mut buckets: BTreeMap<i32, Accumulator> = BTreeMap::new();
    for obs in observations {
        buckets
            .entry(obs.date.year())
            .or_default()
            .fold(obs.species_count as f64);
    }
    buckets
        .iter()
        .map(|(year, acc)| {
            let date = chrono::NaiveDate::from_ymd_opt(*year, 1, 1).unwrap();
            SeriesPoint::new(date, acc.mean())
        })
        .collect()
}

/// Drop points earlier than `start`, preserving order. The story begins at
/// January 2004 even though some datasets reach further back.
pub fn filter_from(series: &[SeriesPoint], start: chrono::NaiveDate) -> Vec<SeriesPoint> {
    series
        .iter()
        .filter(|point| point.date >= start)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{aggregate_monthly, bucket_monthly, filter_from};
    use chrono::NaiveDate;
    use gsl_core::observation::Observation;
    use gsl_core::series::SeriesPoint;

    fn obs(year: i32, month: u32, day: u32, count: u32) -> Observation {
        Observation {
            date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            species_count: count,
            coordinates: [-112.0, 40.7],
        }
    }

    #[test]
    fn test_counts_sum_to_input_size() {
        let observations = vec![
            obs(2004, 1, 3, 4),
            obs(2004, 1, 20, 8),
            obs(2004, 2, 1, 5),
            obs(2005, 1, 9, 2),
        ];
        let buckets = bucket_monthly(&observations);
        let total_count: u64 = buckets.values().map(|acc| acc.count).sum();
        assert_eq!(total_count, observations.len() as u64);
    }

    #[test]
    fn test_monthly_means() {
        let observations = vec![obs(2004, 1, 3, 4), obs(2004, 1, 20, 8), obs(2004, 2, 1, 5)];
        let series = aggregate_monthly(&observations);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2004, 1, 1).unwrap());
        assert_eq!(series[0].value, 6.0);
        assert_eq!(series[1].value, 5.0);
    }

    #[test]
    fn test_permutation_invariance() {
        let mut observations = vec![
            obs(2004, 3, 1, 10),
            obs(2004, 1, 5, 2),
            obs(2004, 3, 9, 20),
            obs(2004, 1, 28, 6),
        ];
        let forward = aggregate_monthly(&observations);
        observations.reverse();
        let backward = aggregate_monthly(&observations);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_output_is_date_sorted() {
        let observations = vec![obs(2010, 6, 1, 1), obs(2004, 1, 1, 1), obs(2007, 3, 1, 1)];
        let series = aggregate_monthly(&observations);
        assert!(series.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn test_filter_from() {
        let series = vec![
            SeriesPoint::new(NaiveDate::from_ymd_opt(2003, 11, 1).unwrap(), 1.0),
            SeriesPoint::new(NaiveDate::from_ymd_opt(2004, 1, 1).unwrap(), 2.0),
            SeriesPoint::new(NaiveDate::from_ymd_opt(2004, 2, 1).unwrap(), 3.0),
        ];
        let start = NaiveDate::from_ymd_opt(2004, 1, 1).unwrap();
        let filtered = filter_from(&series, start);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].value, 2.0);
    }

    #[test]
    fn test_yearly_granularity() {
        use super::{aggregate, Granularity};
        let observations = vec![obs(2004, 1, 3, 4), obs(2004, 7, 20, 8), obs(2005, 2, 1, 6)];
        let series = aggregate(&observations, Granularity::Yearly);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2004, 1, 1).unwrap());
        assert_eq!(series[0].value, 6.0);
        assert_eq!(series[1].value, 6.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate_monthly(&[]).is_empty());
    }
}
