
use std::f64::consts::PI;
use crate::errors::*;
use crate::sample::Offset;

// 1 / (2 pi sigma^2): the density at the center.
#[inline]
fn prefactor(sigma: f64) -> f64 {
    1.0 / (2.0 * PI * sigma.powi(2))
}

/// Rejects sigmas that are not a usable standard deviation: zero, negative,
/// NaN, infinite, or so small that the center density overflows.
pub fn validate_sigma(sigma: f64) -> Result<()> {
    if !(sigma > 0.0) || !sigma.is_finite() || !prefactor(sigma).is_finite() {
        bail!(ErrorKind::InvalidSigma(sigma));
    }
    Ok(())
}

/// Isotropic 2D Gaussian density at `(x, y)`. Does not validate `sigma`.
pub fn gaussian(sigma: f64, x: f64, y: f64) -> f64
{
    let ss: f64 = sigma.powi(2);
    let exponent: f64 = (x.powi(2) + y.powi(2)) / (2.0 * ss);

    prefactor(sigma) * (-exponent).exp()
}

/// Evaluates the unnormalized 2D Gaussian at `offset`.
pub fn evaluate_density(sigma: f64, offset: Offset) -> Result<f64> {
    validate_sigma(sigma)?;
    Ok(gaussian(sigma, offset.dx as f64, offset.dy as f64))
}
