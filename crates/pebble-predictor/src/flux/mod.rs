//! Flux-averaging engine.
//!
//! Combines the moments of the pebble population with the local drift
//! velocity into the two predicted quantities: the flux-averaged Stokes
//! number and the radial pebble mass flux
//!
//! Ṁ = 2π r Σ_d v_r
//!
//! which is negative when pebbles drift toward the star.

mod averaging;


pub use averaging::{average_flux, growth_capped_velocity};
