use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Month names indexed by zero-based month, matching the slider labels.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar (year, month) bucket key. Months are zero-based (0 = January).
///
/// Keys order chronologically, which is what every downstream consumer
/// relies on: aggregated series are emitted key-sorted and indexed
/// positionally from then on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    /// Build a key from a zero-based month. Returns None for month >= 12.
    pub fn new(year: i32, month: u32) -> Option<MonthKey> {
        if month < 12 {
            Some(MonthKey { year, month })
        } else {
            None
        }
    }

    pub fn from_date(date: &NaiveDate) -> MonthKey {
        MonthKey {
            year: date.year(),
            month: date.month0(),
        }
    }

    /// The first calendar day of this month, used to date bucketed points.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1).unwrap()
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize]
    }

    /// Advance by `step` months, carrying overflow into the year.
    pub fn step_by_months(self, step: u32) -> MonthKey {
        let total = self.month + step;
        MonthKey {
            year: self.year + (total / 12) as i32,
            month: total % 12,
        }
    }
}

impl fmt::Display for MonthKey {
    /// Formats as "YYYY-MM" with a 1-based zero-padded month. This is the
    /// key format used by the monthly partition file names.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month + 1)
    }
}

/// A month range iterator that yields each month key from the start key
/// through the end key (inclusive).
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct MonthRange(pub MonthKey, pub MonthKey);

impl Iterator for MonthRange {
    type Item = MonthKey;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 <= self.1 {
            let next = self.0.step_by_months(1);
            Some(std::mem::replace(&mut self.0, next))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MonthKey, MonthRange};
    use chrono::NaiveDate;

    #[test]
    fn test_month_key_display() {
        let key = MonthKey::new(2004, 0).unwrap();
        assert_eq!(key.to_string(), "2004-01");
        let key = MonthKey::new(2023, 11).unwrap();
        assert_eq!(key.to_string(), "2023-12");
    }

    #[test]
    fn test_month_key_rejects_out_of_range() {
        assert!(MonthKey::new(2004, 12).is_none());
    }

    #[test]
    fn test_step_carries_into_year() {
        let key = MonthKey::new(2004, 10).unwrap();
        let next = key.step_by_months(2);
        assert_eq!(next, MonthKey::new(2005, 0).unwrap());
    }

    #[test]
    fn test_from_date_is_zero_based() {
        let date = NaiveDate::from_ymd_opt(2010, 3, 15).unwrap();
        let key = MonthKey::from_date(&date);
        assert_eq!(key, MonthKey::new(2010, 2).unwrap());
        assert_eq!(key.first_day(), NaiveDate::from_ymd_opt(2010, 3, 1).unwrap());
    }

    #[test]
    fn test_month_range_iteration() {
        let start = MonthKey::new(2004, 10).unwrap();
        let end = MonthKey::new(2005, 1).unwrap();
        let keys: Vec<MonthKey> = MonthRange(start, end).collect();
        assert_eq!(keys.len(), 4);
        assert_eq!(keys[0].to_string(), "2004-11");
        assert_eq!(keys[3].to_string(), "2005-02");
    }

    #[test]
    fn test_month_range_empty() {
        let start = MonthKey::new(2005, 0).unwrap();
        let end = MonthKey::new(2004, 11).unwrap();
        assert_eq!(MonthRange(start, end).count(), 0);
    }
}
