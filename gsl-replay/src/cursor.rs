use gsl_core::month_key::MonthKey;
use std::time::Duration;

/// First year of the observation datasets.
pub const START_YEAR: i32 = 2004;
/// Last year of the observation datasets.
pub const END_YEAR: i32 = 2023;
/// The replay advances two months per tick.
pub const MONTH_STEP: u32 = 2;
/// Delay between replay ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Replay parameters. The defaults reproduce the story's canonical run:
/// 2004 through 2023, every other month, one frame per 50 ms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayConfig {
    pub start_year: i32,
    pub end_year: i32,
    pub start_month: u32,
    pub month_step: u32,
    pub tick: Duration,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        ReplayConfig {
            start_year: START_YEAR,
            end_year: END_YEAR,
            start_month: 0,
            month_step: MONTH_STEP,
            tick: TICK_INTERVAL,
        }
    }
}

impl ReplayConfig {
    /// The sequence of month keys one full run visits.
    pub fn cursor(&self) -> MonthCursor {
        MonthCursor {
            next: MonthKey::new(self.start_year, self.start_month),
            end_year: self.end_year,
            step: self.month_step,
        }
    }
}

/// Iterator over a run's (year, month) visits. Month overflow carries into
/// the year; the run ends once the year passes `end_year`.
#[derive(Debug, Clone)]
pub struct MonthCursor {
    next: Option<MonthKey>,
    end_year: i32,
    step: u32,
}

impl Iterator for MonthCursor {
    type Item = MonthKey;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if current.year > self.end_year {
            return None;
        }
        self.next = Some(current.step_by_months(self.step));
        Some(current)
    }
}
