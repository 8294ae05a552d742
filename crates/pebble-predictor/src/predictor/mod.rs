//! Predictor facade.
//!
//! Validates the inputs, then runs disk state → classification →
//! integration → flux averaging independently at every radius.

mod facade;
mod grid;
mod result;


pub use facade::{Predictor, predict};
pub use grid::log_spaced_radii;
pub use result::PredictionResult;
