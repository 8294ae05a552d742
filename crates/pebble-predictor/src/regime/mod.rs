//! Regime classifier and size-limit solver.
//!
//! Three processes cap how large pebbles can grow at a given radius:
//!
//! - **Fragmentation**: turbulent collision speeds exceed v_frag
//! - **Drift**: particles drift inward faster than they grow
//! - **Growth timescale**: the disk is too young for growth to have finished
//!
//! Each process yields a limiting Stokes number; the smallest one governs
//! the size distribution at that radius.
//!
//! # References
//!
//! - Birnstiel, Klahr & Ercolano (2012), A&A 539, A148
//! - Okuzumi et al. (2012), ApJ 752, 106
//! - Drążkowska et al. (2021), A&A 647, A15

mod classifier;
mod size_limit;
pub(crate) mod unbounded;

#[cfg(test)]
mod classifier_test;

pub use classifier::{
    Classification, classify, drift_limit, fragmentation_limit, growth_limit, growth_timescale,
    select_governing,
};
pub use size_limit::{Regime, SizeLimit};
