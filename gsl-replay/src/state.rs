use std::sync::atomic::{AtomicBool, Ordering};

/// Animation flags shared between the sequencer and the control surface.
///
/// Only the sequencer transitions `running`; control-side callers read it
/// to refuse manual jumps mid-run, and set `interacted` to stop the run at
/// the next tick boundary.
#[derive(Debug, Default)]
pub struct AnimationState {
    running: AtomicBool,
    interacted: AtomicBool,
}

impl AnimationState {
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub(crate) fn set_running(&self, running: bool) {
        self.running.store(running, Ordering::SeqCst);
    }

    /// Flag direct user input. The next scheduled tick is suppressed
    /// permanently for the current run; only a fresh replay resets this.
    pub fn mark_interacted(&self) {
        self.interacted.store(true, Ordering::SeqCst);
    }

    pub fn interacted(&self) -> bool {
        self.interacted.load(Ordering::SeqCst)
    }

    pub(crate) fn clear_interacted(&self) {
        self.interacted.store(false, Ordering::SeqCst);
    }
}
