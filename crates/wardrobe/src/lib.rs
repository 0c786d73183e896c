//! Wardrobe inventory and weather-aware outfit recommendation.
//!
//! The scoring engine in [`outfits::scoring`] is pure and synchronous; everything around it
//! (CSV import, repository seam, HTTP adapter) only exists to hand it well-formed inputs.

pub mod config;
pub mod error;
pub mod outfits;
pub mod telemetry;
