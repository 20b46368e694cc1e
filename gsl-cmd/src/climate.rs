//! Climate overlay commands: the ONI/SST index series and the lake
//! elevation series.

use gsl_core::climate::{parse_oni, parse_sst};
use gsl_core::elevation::parse_elevation;
use gsl_core::series::SeriesPoint;
use gsl_data::interpolation::interpolate_at;
use gsl_data::normalize::normalize_signed;
use log::{info, warn};

fn load_index(path: &str, parse: fn(&str) -> Vec<SeriesPoint>) -> Vec<SeriesPoint> {
    match std::fs::read_to_string(path) {
        Ok(body) => parse(&body),
        Err(e) => {
            // the overlay degrades to an empty series, the chart stays up
            warn!("failed to load {path}: {e}");
            Vec::new()
        }
    }
}

/// Parse and sign-normalize the climate overlay files into one CSV with
/// `series,date,value` rows. Either file may be absent.
pub fn run_climate(oni: Option<&str>, sst: Option<&str>, output: &str) -> anyhow::Result<()> {
    let oni_series = oni.map(|path| normalize_signed(&load_index(path, parse_oni)));
    let sst_series = sst.map(|path| normalize_signed(&load_index(path, parse_sst)));

    let mut writer = csv::Writer::from_path(output)?;
    writer.write_record(["series", "date", "value"])?;
    for (name, series) in [("oni", &oni_series), ("sst", &sst_series)] {
        let Some(series) = series else { continue };
        for point in series {
            writer.write_record([
                name.to_string(),
                point.date.to_string(),
                format!("{:.6}", point.value),
            ])?;
        }
    }
    writer.flush()?;

    info!(
        "Climate overlay complete. {} ONI + {} SST points written to {output}",
        oni_series.as_ref().map_or(0, Vec::len),
        sst_series.as_ref().map_or(0, Vec::len)
    );
    Ok(())
}

/// Parse the elevation file. With `--at`, print the interpolated elevation
/// for that fractional year; otherwise print the annual samples.
pub fn run_elevation(input: &str, at: Option<f64>) -> anyhow::Result<()> {
    let body = std::fs::read_to_string(input)?;
    let points = parse_elevation(&body);
    info!("{} elevation samples in {input}", points.len());

    match at {
        Some(year) => match interpolate_at(&points, year) {
            Some(feet) => println!("{year:.2},{feet:.2}"),
            None => anyhow::bail!("{year} is outside the sampled range"),
        },
        None => {
            println!("year,feet");
            for point in &points {
                println!("{},{:.2}", point.year, point.feet);
            }
        }
    }
    Ok(())
}
