//! Typed physical quantities for protoplanetary disk models.
//!
//! Every quantity is a newtype over `f64` with explicit `from_*` / `to_*`
//! conversions. Radii, stellar masses and ages use astronomical base units;
//! the local disk quantities that enter the pebble physics use CGS.

pub mod angular_velocity;
pub mod density;
pub mod length;
pub mod mass;
pub mod mass_rate;
pub mod surface_density;
pub mod temperature;
pub mod time;
pub mod velocity;

#[cfg(test)]
mod length_test;
#[cfg(test)]
mod mass_test;

pub use angular_velocity::AngularVelocity;
pub use density::Density;
pub use length::{AU_TO_CM, Length};
pub use mass::{EARTH_MASS_G, Mass, SOLAR_MASS_G};
pub use mass_rate::MassRate;
pub use surface_density::SurfaceDensity;
pub use temperature::Temperature;
pub use time::{SECONDS_PER_YEAR, Time};
pub use velocity::Velocity;
