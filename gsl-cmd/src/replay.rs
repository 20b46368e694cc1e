//! Full replay run against a logging frame sink.

use crate::fetch::{load_frames, DatasetSource};
use gsl_core::month_key::MonthKey;
use gsl_core::region::Species;
use gsl_replay::cursor::ReplayConfig;
use gsl_replay::frame::{Frame, FrameSink};
use gsl_replay::sequencer::Sequencer;
use log::info;
use std::sync::Arc;
use std::time::Duration;

/// Frame sink that logs one line per rendered frame.
struct LogSink;

impl FrameSink for LogSink {
    fn render(&mut self, key: MonthKey, frame: &Frame) {
        info!(
            "{} ({}): {} observations (MX {}, UT {}, AZ {})",
            key,
            key.month_name(),
            frame.len(),
            frame.mexico.len(),
            frame.utah.len(),
            frame.arizona.len()
        );
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        info!(
            "manual controls {}",
            if enabled { "enabled" } else { "disabled" }
        );
    }
}

/// Preload every frame the run will visit, then replay the animation.
pub async fn run_replay(root: &str, species: Species, tick_ms: u64) -> anyhow::Result<()> {
    let source = DatasetSource::from_root(root)?;
    let config = ReplayConfig {
        tick: Duration::from_millis(tick_ms),
        ..ReplayConfig::default()
    };

    info!(
        "Loading {:?} frames for {}..={}",
        species, config.start_year, config.end_year
    );
    let store = load_frames(&source, species, config.cursor()).await;
    info!("{} frames loaded", store.len());

    let mut sequencer = Sequencer::new(config, Arc::new(store));
    sequencer.replay(LogSink);
    sequencer.join().await;
    Ok(())
}
