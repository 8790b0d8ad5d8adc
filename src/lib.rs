//! Worldboard - synthetic world-indicator panel and dashboard aggregation engine
//!
//! The generator produces a dense, reproducible (country, year) panel of
//! eight indicators from fixed per-region profiles; the aggregation
//! engine shapes the panel into the exact tables each dashboard widget
//! consumes.

pub mod aggregate;
pub mod core;
pub mod generator;
pub mod store;
