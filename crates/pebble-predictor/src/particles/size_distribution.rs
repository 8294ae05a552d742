//! Stokes-number distributions of a pebble population.
//!
//! # Variants
//!
//! - **PowerLaw**: dn/dSt ∝ St^(-q) between the monomers and the limit
//! - **Monodisperse**: every particle at one Stokes number
//!
//! Moments are mass-weighted: mass per unit St is ∝ St^(3-q). Integrals run
//! over u = ln(St / St_min), where the mass per unit u is ∝ e^((4-q) u).

/// Log-widths below this collapse to a single Stokes number.
pub const MIN_LOG_WIDTH: f64 = 1e-12;

/// Distribution of Stokes numbers in a pebble population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StokesDistribution {
    /// Power law dn/dSt ∝ St^(-q)
    PowerLaw {
        st_min: f64,
        st_max: f64,
        /// Exponent q
        exponent: f64,
    },

    /// All particles share one Stokes number.
    Monodisperse { stokes_number: f64 },
}

impl StokesDistribution {
    /// Power law from `st_min` to `st_max`.
    ///
    /// Falls back to a monodisperse population at `st_min` when the range is
    /// empty or narrower than [`MIN_LOG_WIDTH`] in ln St.
    pub fn power_law(st_min: f64, st_max: f64, exponent: f64) -> Self {
        if (st_max / st_min).ln() < MIN_LOG_WIDTH {
            Self::monodisperse(st_min)
        } else {
            Self::PowerLaw {
                st_min,
                st_max,
                exponent,
            }
        }
    }

    pub fn monodisperse(stokes_number: f64) -> Self {
        Self::Monodisperse { stokes_number }
    }

    pub fn is_monodisperse(&self) -> bool {
        matches!(self, Self::Monodisperse { .. })
    }

    pub fn min_stokes_number(&self) -> f64 {
        match self {
            Self::PowerLaw { st_min, .. } => *st_min,
            Self::Monodisperse { stokes_number } => *stokes_number,
        }
    }

    pub fn max_stokes_number(&self) -> f64 {
        match self {
            Self::PowerLaw { st_max, .. } => *st_max,
            Self::Monodisperse { stokes_number } => *stokes_number,
        }
    }

    /// Power-law exponent, `None` for a monodisperse population.
    pub fn exponent(&self) -> Option<f64> {
        match self {
            Self::PowerLaw { exponent, .. } => Some(*exponent),
            Self::Monodisperse { .. } => None,
        }
    }

    /// Width ln(St_max / St_min).
    pub fn log_width(&self) -> f64 {
        match self {
            Self::PowerLaw { st_min, st_max, .. } => (st_max / st_min).ln(),
            Self::Monodisperse { .. } => 0.0,
        }
    }

    /// Mass-weighted mean Stokes number, in closed form.
    ///
    /// ⟨St⟩_m = ∫ St^(4-q) dSt / ∫ St^(3-q) dSt
    ///        = St_min × L(5-q) / L(4-q),   L(p) = (e^(p w) - 1) / p
    ///
    /// with w the log-width. Each L(p) is scaled by e^(-p w) when p > 0, so
    /// wide distributions stay finite. `expm1` keeps this accurate as w → 0,
    /// where it converges to St_min.
    pub fn mass_weighted_mean(&self) -> f64 {
        match self {
            Self::PowerLaw {
                st_min,
                st_max,
                exponent,
            } => {
                let w = self.log_width();
                let (p_num, p_den) = (5.0 - exponent, 4.0 - exponent);
                // St_min × e^(w × (max(p_num, 0) - max(p_den, 0)))
                let base = if p_den >= 0.0 {
                    *st_max
                } else if p_num > 0.0 {
                    (st_min.ln() + p_num * w).exp()
                } else {
                    *st_min
                };
                base * scaled_log_moment(p_num, w) / scaled_log_moment(p_den, w)
            }
            Self::Monodisperse { stokes_number } => *stokes_number,
        }
    }

    /// Mass-weighted average of `f(St)`, composite Simpson over ln St.
    ///
    /// `intervals` must be even.
    pub fn mass_average<F>(&self, f: F, intervals: usize) -> f64
    where
        F: Fn(f64) -> f64,
    {
        match self {
            Self::PowerLaw {
                st_min, exponent, ..
            } => {
                let w = self.log_width();
                let p = 4.0 - exponent;
                // Shift the exponent so the largest weight is 1
                let shift = if p > 0.0 { w } else { 0.0 };
                let weight = |u: f64| (p * (u - shift)).exp();

                let numerator = simpson(intervals, w, |u| f(st_min * u.exp()) * weight(u));
                let denominator = simpson(intervals, w, weight);
                numerator / denominator
            }
            Self::Monodisperse { stokes_number } => f(*stokes_number),
        }
    }
}

/// ∫₀^w e^(p (u - s)) du, with s = w when p > 0 and s = 0 otherwise.
fn scaled_log_moment(p: f64, w: f64) -> f64 {
    if p.abs() < 1e-10 {
        w
    } else if p > 0.0 {
        -(-p * w).exp_m1() / p
    } else {
        (p * w).exp_m1() / p
    }
}

/// Composite Simpson rule for ∫₀^width g(u) du.
fn simpson<G>(intervals: usize, width: f64, g: G) -> f64
where
    G: Fn(f64) -> f64,
{
    let h = width / intervals as f64;
    let interior: f64 = (1..intervals)
        .map(|i| {
            let coefficient = if i % 2 == 1 { 4.0 } else { 2.0 };
            coefficient * g(i as f64 * h)
        })
        .sum();

    (g(0.0) + interior + g(width)) * h / 3.0
}
