use units::Length;

use crate::error::{PredictError, Result, require_positive};

/// `n` radii from `inner` to `outer`, evenly spaced in log r.
///
/// Both ends are included; `n = 1` yields just `inner`.
pub fn log_spaced_radii(inner: Length, outer: Length, n: usize) -> Result<Vec<Length>> {
    let r_in = require_positive("inner", inner.to_au())?;
    let r_out = require_positive("outer", outer.to_au())?;

    if n == 0 {
        return Err(PredictError::invalid("count", 0.0, "need at least one radius"));
    }
    if n == 1 {
        return Ok(vec![inner]);
    }
    if r_out <= r_in {
        return Err(PredictError::invalid(
            "outer",
            r_out,
            "must lie outside the inner radius",
        ));
    }

    let log_min = r_in.ln();
    let log_max = r_out.ln();
    let step = (log_max - log_min) / (n - 1) as f64;

    let radii = (0..n)
        .map(|i| match i {
            0 => inner,
            _ if i == n - 1 => outer,
            _ => Length::from_au((log_min + i as f64 * step).exp()),
        })
        .collect();

    Ok(radii)
}
