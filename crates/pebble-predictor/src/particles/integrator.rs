//! Moments of the pebble population behind a governing limit.

use log::{trace, warn};
use serde::{Deserialize, Serialize};

use crate::config::ModelConstants;
use crate::disk::LocalDiskState;
use crate::particles::{StokesDistribution, drift_efficiency};
use crate::regime::{Regime, SizeLimit};

/// Summary of the Stokes-number distribution at one radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeDistributionMoment {
    /// Regime that set the upper bound
    pub regime: Regime,
    /// Monomer Stokes number
    pub min_stokes_number: f64,
    /// Governing limit, floored at the monomers
    pub max_stokes_number: f64,
    /// Exponent q of dn/dSt ∝ St^(-q)
    pub exponent: f64,
    /// ⟨St⟩_m
    pub mass_weighted_stokes_number: f64,
    /// ⟨St⟩_F = ∫ St v(St) dm / ∫ v(St) dm
    pub flux_weighted_stokes_number: f64,
    /// ⟨2 St / (1 + St²)⟩_m, the fraction of the mass moving at full drift
    pub drift_efficiency: f64,
}

impl SizeDistributionMoment {
    /// The distribution these moments were taken from.
    pub fn distribution(&self) -> StokesDistribution {
        StokesDistribution::power_law(
            self.min_stokes_number,
            self.max_stokes_number,
            self.exponent,
        )
    }
}

/// Integrate the population from the monomers up to `governing`.
///
/// Drift-limited populations use the drift exponent, all others the
/// fragmentation exponent. An unbounded limit leaves only monomers.
pub fn integrate(
    governing: &SizeLimit,
    local: &LocalDiskState,
    constants: &ModelConstants,
) -> SizeDistributionMoment {
    let st_0 = local.monomer_stokes_number(constants);
    let exponent = match governing.regime {
        Regime::Drift => constants.drift_exponent,
        Regime::Fragmentation | Regime::GrowthTimescale => constants.fragmentation_exponent,
    };

    let mut st_max = governing.stokes_number.max(st_0);
    if !st_max.is_finite() {
        warn!(
            "unbounded {} limit at {:.4} AU, keeping monomers",
            governing.regime,
            local.radius.to_au()
        );
        st_max = st_0;
    }

    let distribution = StokesDistribution::power_law(st_0, st_max, exponent);
    let intervals = constants.simpson_intervals();

    let drift = distribution.mass_average(drift_efficiency, intervals);
    let flux_weighted = if drift > 0.0 {
        distribution.mass_average(|st| st * drift_efficiency(st), intervals) / drift
    } else {
        distribution.mass_weighted_mean()
    };

    let moment = SizeDistributionMoment {
        regime: governing.regime,
        min_stokes_number: st_0,
        max_stokes_number: distribution.max_stokes_number(),
        exponent,
        mass_weighted_stokes_number: distribution.mass_weighted_mean(),
        flux_weighted_stokes_number: flux_weighted,
        drift_efficiency: drift,
    };

    trace!(
        "moments at {:.4} AU: St_m={:.4e}, St_F={:.4e}, ε={:.4e}",
        local.radius.to_au(),
        moment.mass_weighted_stokes_number,
        moment.flux_weighted_stokes_number,
        moment.drift_efficiency
    );

    moment
}
