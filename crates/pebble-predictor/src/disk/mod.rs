//! Disk state provider.
//!
//! Turns the caller's global [`DiskParameters`] into the [`LocalDiskState`]
//! at each radius: gas surface density, temperature, sound speed, scale
//! height, Keplerian frequency, turbulence, dust-to-gas ratio and the
//! pressure gradient parameter that drives radial drift.

pub mod constants;
mod disk_model;
mod local_state;
mod parameters;
mod power_law_disk;

#[cfg(test)]
mod disk_model_test;

pub use disk_model::DiskModel;
pub(crate) use local_state::check_radius;
pub use local_state::{LocalDiskState, compute_local_state};
pub use parameters::DiskParameters;
pub use power_law_disk::PowerLawDisk;
