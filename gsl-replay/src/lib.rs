//! Timed replay over the (year, month) observation domain.
//!
//! The sequencer walks a month cursor on a fixed cadence, handing each
//! frame to an injected [`frame::FrameSink`]. Runs are cancellable: a new
//! replay always aborts the previous scheduled task first, so two tick
//! chains can never overlap.

pub mod cursor;
pub mod frame;
pub mod sequencer;
pub mod state;
