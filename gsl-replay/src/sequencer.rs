use crate::cursor::ReplayConfig;
use crate::frame::{FrameSink, FrameStore};
use crate::state::AnimationState;
use gsl_core::month_key::MonthKey;
use log::{info, warn};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Drives timed replay over the frame store and arbitrates manual jumps.
///
/// Exactly one scheduled run can be live at a time: `replay` aborts the
/// previous task before spawning a new one. The shared [`AnimationState`]
/// is handed to whatever owns the manual controls.
pub struct Sequencer {
    config: ReplayConfig,
    state: Arc<AnimationState>,
    store: Arc<FrameStore>,
    task: Option<JoinHandle<()>>,
}

impl Sequencer {
    pub fn new(config: ReplayConfig, store: Arc<FrameStore>) -> Sequencer {
        Sequencer {
            config,
            state: Arc::new(AnimationState::default()),
            store,
            task: None,
        }
    }

    /// The shared animation flags, for the control surface to read.
    pub fn state(&self) -> Arc<AnimationState> {
        Arc::clone(&self.state)
    }

    /// Start a run from the configured start cursor.
    ///
    /// Any in-flight run is aborted first; skipping that step would leave
    /// two tick chains rendering into the same sink. Controls are disabled
    /// for the duration and re-enabled when the cursor is exhausted. A tick
    /// that observes the interaction flag exits without rescheduling.
    pub fn replay<S>(&mut self, mut sink: S)
    where
        S: FrameSink + Send + 'static,
    {
        if let Some(task) = self.task.take() {
            task.abort();
            info!("cancelled in-flight replay run");
        }

        let config = self.config;
        let state = Arc::clone(&self.state);
        let store = Arc::clone(&self.store);

        state.clear_interacted();
        state.set_running(true);

        self.task = Some(tokio::spawn(async move {
            sink.set_controls_enabled(false);
            for key in config.cursor() {
                tokio::time::sleep(config.tick).await;
                if state.interacted() {
                    info!("replay stopped by user interaction at {key}");
                    return;
                }
                sink.render(key, store.frame(&key));
            }
            state.set_running(false);
            sink.set_controls_enabled(true);
            info!("replay complete");
        }));
    }

    /// Manual jump to one (year, month) frame.
    ///
    /// Refused while a run is live so manual renders never race the
    /// animation's own. Returns whether the frame was rendered.
    pub fn jump_to(&self, year: i32, month: u32, sink: &mut dyn FrameSink) -> bool {
        if self.state.is_running() {
            warn!("ignoring manual jump to {year}-{:02}: replay running", month + 1);
            return false;
        }
        let Some(key) = MonthKey::new(year, month) else {
            warn!("ignoring manual jump: month {month} out of range");
            return false;
        };
        sink.render(key, self.store.frame(&key));
        true
    }

    /// Wait for the current run to finish or be cancelled.
    pub async fn join(&mut self) {
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}
