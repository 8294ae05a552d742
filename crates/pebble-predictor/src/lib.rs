//! Semi-analytic pebble predictor for smooth protoplanetary disks.
//!
//! Given global disk parameters, predicts at each radius the flux-averaged
//! Stokes number of the pebbles and their radial mass flux, without running
//! a coagulation simulation. The model balances growth against
//! fragmentation and radial drift, assumes a power-law size distribution
//! below the governing limit, and averages the drift velocity over it.
//!
//! # Stages
//!
//! | Stage | Module | Entry point |
//! |-------|--------|-------------|
//! | Local disk state | [`disk`] | [`compute_local_state`] |
//! | Size limits | [`regime`] | [`classify`] |
//! | Size distribution | [`particles`] | [`integrate`] |
//! | Flux averaging | [`flux`] | [`average_flux`] |
//! | Facade | [`predictor`] | [`predict`], [`Predictor`] |
//!
//! # Example
//!
//! ```
//! use pebble_predictor::units::Length;
//! use pebble_predictor::{DiskParameters, Regime, log_spaced_radii, predict};
//!
//! let radii = log_spaced_radii(Length::from_au(1.0), Length::from_au(100.0), 5)?;
//! let results = predict(&DiskParameters::mmsn(), &radii)?;
//!
//! for result in &results {
//!     assert!(result.pebble_mass_flux.is_inward());
//!     assert!(result.stokes_number_flux_averaged > 0.0);
//! }
//! assert_eq!(results[0].governing_regime, Regime::Fragmentation);
//! # Ok::<(), pebble_predictor::PredictError>(())
//! ```
//!
//! # Features
//!
//! - `parallel` (default): evaluate radii on the rayon thread pool

pub mod config;
pub mod disk;
pub mod error;
pub mod flux;
pub mod particles;
pub mod predictor;
pub mod regime;

pub use units;

pub use config::ModelConstants;
pub use disk::{DiskModel, DiskParameters, LocalDiskState, PowerLawDisk, compute_local_state};
pub use error::{ErrorKind, PredictError, Result};
pub use flux::average_flux;
pub use particles::{SizeDistributionMoment, StokesDistribution, integrate};
pub use predictor::{PredictionResult, Predictor, log_spaced_radii, predict};
pub use regime::{Classification, Regime, SizeLimit, classify};
