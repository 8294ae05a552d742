//! Tagged size limits and their ordering.

use std::fmt;

use serde::{Deserialize, Serialize};
use units::Length;

use crate::config::ModelConstants;
use crate::disk::LocalDiskState;

/// Physical process that limits particle growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Regime {
    /// Turbulent (or drift-induced) collisions shatter aggregates
    Fragmentation,
    /// Particles drift away before they can grow further
    Drift,
    /// Growth has not had time to reach either barrier
    GrowthTimescale,
}

impl Regime {
    /// All regimes in precedence order.
    pub const ALL: [Regime; 3] = [Regime::Fragmentation, Regime::Drift, Regime::GrowthTimescale];

    /// Lower wins when two limits tie.
    pub fn precedence(self) -> u8 {
        match self {
            Regime::Fragmentation => 0,
            Regime::Drift => 1,
            Regime::GrowthTimescale => 2,
        }
    }

    /// Serialized label.
    pub fn label(self) -> &'static str {
        match self {
            Regime::Fragmentation => "fragmentation",
            Regime::Drift => "drift",
            Regime::GrowthTimescale => "growthTimescale",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Largest Stokes number a process allows, tagged with the process.
///
/// An unbounded limit carries `f64::INFINITY`. JSON writes it as `null` and
/// reads `null` back as unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeLimit {
    pub regime: Regime,
    #[serde(with = "crate::regime::unbounded")]
    pub stokes_number: f64,
}

impl SizeLimit {
    pub fn new(regime: Regime, stokes_number: f64) -> Self {
        Self {
            regime,
            stokes_number,
        }
    }

    pub fn unbounded(regime: Regime) -> Self {
        Self::new(regime, f64::INFINITY)
    }

    pub fn is_bounded(&self) -> bool {
        self.stokes_number.is_finite()
    }

    /// Whether both limits are equal within relative `tolerance`.
    pub fn ties_with(&self, other: &SizeLimit, tolerance: f64) -> bool {
        let (a, b) = (self.stokes_number, other.stokes_number);
        if a == b {
            return true;
        }
        if !(a.is_finite() && b.is_finite()) {
            return false;
        }
        (a - b).abs() <= tolerance * a.abs().max(b.abs())
    }

    /// Grain radius matching this limit, Epstein drag in the midplane.
    pub fn particle_size(&self, local: &LocalDiskState, constants: &ModelConstants) -> Length {
        local.epstein_size(self.stokes_number, constants.material_density())
    }
}
