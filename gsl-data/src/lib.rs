//! Series processing for observation and climate data.
//!
//! This crate turns raw parsed records into plot-ready series: bucketed
//! averages, min-max or signed normalization, centered moving averages,
//! and the per-year comparison matrices used by the year-vs-year chart.

pub mod aggregate;
pub mod compare;
pub mod interpolation;
pub mod normalize;
pub mod smooth;
