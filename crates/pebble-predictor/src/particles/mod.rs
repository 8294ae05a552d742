//! Pebble populations below the governing size limit.
//!
//! Below the limit, collisions keep the population close to a power law
//! dn/ds ∝ s^(-q). With Epstein drag St ∝ s, so the same law holds in
//! Stokes space, running from the monomers up to the limit.
//!
//! # Physics
//!
//! - q = 3.5: collisional cascade (Dohnanyi 1969), the MRN exponent;
//!   used for fragmentation- and growth-limited populations
//! - q = 2.5: top-heavy, where drift removes the largest grains before
//!   they can be ground down
//!
//! For q < 4 most mass sits in the largest particles, so the mass-weighted
//! Stokes number is close to the limit.

mod drift;
mod integrator;
mod size_distribution;


pub use drift::{drift_efficiency, radial_drift_velocity};
pub use integrator::{SizeDistributionMoment, integrate};
pub use size_distribution::StokesDistribution;
