//! Observation-series commands: the normalized monthly chart series and
//! the year-vs-year comparison.

use chrono::NaiveDate;
use gsl_core::month_key::MONTH_NAMES;
use gsl_core::observation::Observation;
use gsl_core::series::SeriesPoint;
use gsl_data::aggregate::{aggregate_monthly, filter_from};
use gsl_data::compare::{by_year, year_row};
use gsl_data::normalize::normalize;
use gsl_data::smooth::smooth;
use log::info;
use serde_json::json;

/// The story's chart x-axis starts here even though some checklists
/// reach further back.
pub const SERIES_START: (i32, u32, u32) = (2004, 1, 1);

fn load_observations(input: &str) -> anyhow::Result<Vec<Observation>> {
    let body = std::fs::read_to_string(input)?;
    let observations = Observation::from_geojson_str(&body)?;
    info!("{} valid observations in {input}", observations.len());
    Ok(observations)
}

/// Monthly averaged, normalized series for one observation export.
///
/// Normalization runs over the full bucketed series before the start-date
/// filter, so the scale is anchored to the all-time maximum month.
fn build_series(observations: &[Observation]) -> Vec<SeriesPoint> {
    let (year, month, day) = SERIES_START;
    let start = NaiveDate::from_ymd_opt(year, month, day).unwrap();
    let series = normalize(&aggregate_monthly(observations));
    filter_from(&series, start)
}

/// Build the normalized monthly species series and write it out.
///
/// CSV columns are `date,value` plus a `trend` column when `smoothed` is
/// set; JSON output mirrors the same fields.
pub fn run_series(
    input: &str,
    output: &str,
    smoothed: bool,
    window: usize,
    json_output: bool,
) -> anyhow::Result<()> {
    let observations = load_observations(input)?;
    let series = build_series(&observations);
    let trend = if smoothed {
        Some(smooth(&series, window))
    } else {
        None
    };

    if json_output {
        let points: Vec<serde_json::Value> = series
            .iter()
            .enumerate()
            .map(|(i, point)| match &trend {
                Some(trend) => json!({
                    "date": point.date,
                    "value": point.value,
                    "trend": trend[i].value,
                }),
                None => json!({ "date": point.date, "value": point.value }),
            })
            .collect();
        std::fs::write(output, serde_json::to_string_pretty(&points)?)?;
    } else {
        let mut writer = csv::Writer::from_path(output)?;
        if smoothed {
            writer.write_record(["date", "value", "trend"])?;
        } else {
            writer.write_record(["date", "value"])?;
        }
        for (i, point) in series.iter().enumerate() {
            let date = point.date.to_string();
            let value = format!("{:.6}", point.value);
            match &trend {
                Some(trend) => {
                    writer.write_record([date, value, format!("{:.6}", trend[i].value)])?
                }
                None => writer.write_record([date, value])?,
            }
        }
        writer.flush()?;
    }

    info!(
        "Series complete. {} monthly buckets written to {output}",
        series.len()
    );
    Ok(())
}

/// Print the normalized monthly rows for two years side by side.
///
/// A year with no observations compares as an all-zero row, same as the
/// comparison chart draws it.
pub fn run_compare(input: &str, year1: i32, year2: i32) -> anyhow::Result<()> {
    let observations = load_observations(input)?;
    let years = by_year(&build_series(&observations));
    let row1 = year_row(&years, year1);
    let row2 = year_row(&years, year2);

    println!("month,{year1},{year2}");
    for (month, (a, b)) in row1.iter().zip(row2.iter()).enumerate() {
        println!("{},{a:.6},{b:.6}", MONTH_NAMES[month]);
    }
    Ok(())
}
