//! Systematic trend-following position-sizing engine for futures and CFDs.
//!
//! The engine is a pure function of its inputs plus the rolling statistics
//! it maintains: price observations go through an anomaly screen, feed a
//! blended fast/slow volatility estimate and a set of trading rules, and
//! the combined forecast is turned into a margin-capped notional exposure
//! and, past a deadband, a trade quantity. Data ingestion and order
//! execution belong to the caller.

pub mod config;
pub mod engine;
pub mod error;
pub mod forecast;
pub mod indicator;
pub mod model;
pub mod risk_target;
pub mod rules;
pub mod screen;
pub mod sizer;
pub mod util;
pub mod volatility;
