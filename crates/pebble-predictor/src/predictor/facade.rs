use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use units::Length;

use crate::config::ModelConstants;
use crate::disk::{DiskParameters, check_radius, compute_local_state};
use crate::error::Result;
use crate::flux::average_flux;
use crate::particles::integrate;
use crate::predictor::PredictionResult;
use crate::regime::classify;

/// Pebble predictor for one disk.
///
/// # Example
/// ```
/// use pebble_predictor::units::{Length, Time};
/// use pebble_predictor::{DiskParameters, ModelConstants, Predictor};
///
/// let predictor = Predictor::new(DiskParameters::mmsn())
///     .with_constants(ModelConstants::default().with_disk_age(Time::from_myr(0.5)));
///
/// let results = predictor.predict(&[Length::from_au(5.0), Length::from_au(30.0)])?;
/// assert_eq!(results.len(), 2);
/// # Ok::<(), pebble_predictor::PredictError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Predictor {
    params: DiskParameters,
    constants: ModelConstants,
}

impl Predictor {
    pub fn new(params: DiskParameters) -> Self {
        Self {
            params,
            constants: ModelConstants::default(),
        }
    }

    pub fn with_constants(mut self, constants: ModelConstants) -> Self {
        self.constants = constants;
        self
    }

    pub fn params(&self) -> &DiskParameters {
        &self.params
    }

    pub fn constants(&self) -> &ModelConstants {
        &self.constants
    }

    /// Predict at every radius, in input order.
    ///
    /// All inputs are validated before anything is evaluated. The first
    /// failure in input order is returned, tagged with its radius index, and
    /// no partial results are produced.
    pub fn predict(&self, radii: &[Length]) -> Result<Vec<PredictionResult>> {
        self.validate(radii)?;
        debug!("predicting pebble flux at {} radii", radii.len());

        self.evaluate_all(radii).into_iter().collect()
    }

    /// Predict at a single radius.
    pub fn predict_at(&self, radius: Length) -> Result<PredictionResult> {
        self.params.validate()?;
        self.constants.validate()?;
        self.evaluate(radius)
    }

    fn validate(&self, radii: &[Length]) -> Result<()> {
        self.params.validate()?;
        self.constants.validate()?;

        for (index, &radius) in radii.iter().enumerate() {
            check_radius(radius).map_err(|err| err.at_radius(index, radius.to_au()))?;
        }
        Ok(())
    }

    #[cfg(feature = "parallel")]
    fn evaluate_all(&self, radii: &[Length]) -> Vec<Result<PredictionResult>> {
        radii
            .par_iter()
            .enumerate()
            .map(|(index, &radius)| self.evaluate_indexed(index, radius))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate_all(&self, radii: &[Length]) -> Vec<Result<PredictionResult>> {
        radii
            .iter()
            .enumerate()
            .map(|(index, &radius)| self.evaluate_indexed(index, radius))
            .collect()
    }

    fn evaluate_indexed(&self, index: usize, radius: Length) -> Result<PredictionResult> {
        self.evaluate(radius)
            .map_err(|err| err.at_radius(index, radius.to_au()))
    }

    fn evaluate(&self, radius: Length) -> Result<PredictionResult> {
        let local = compute_local_state(&self.params, radius, &self.constants)?;
        let classification = classify(&local, &self.params, &self.constants)?;
        let moment = integrate(&classification.governing, &local, &self.constants);
        let result = average_flux(&moment, &classification, &local, &self.constants);

        debug!(
            "{:.4} AU: St_F={:.4e}, Ṁ={:.4e} M⊕/Myr ({})",
            radius.to_au(),
            result.stokes_number_flux_averaged,
            result.pebble_flux_earth_masses_per_myr(),
            result.governing_regime
        );

        Ok(result)
    }
}

/// Predict the pebble Stokes number and flux of `params` at `radii` with
/// the default model constants.
pub fn predict(params: &DiskParameters, radii: &[Length]) -> Result<Vec<PredictionResult>> {
    Predictor::new(params.clone()).predict(radii)
}
