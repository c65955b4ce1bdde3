//! Renko brick construction and precursor signals over OHLCV candle streams.
//!
//! [`renko::RenkoChart`] turns candles into fixed-size price bricks, either in
//! one batch or incrementally as new candles arrive. [`renko::calculate_precursors`]
//! annotates a brick run with rolling volume ratios and direction-flip counts.

pub mod config;
pub mod data;
pub mod error;
pub mod indicator;
pub mod model;
pub mod output;
pub mod renko;

pub use error::RenkoError;
