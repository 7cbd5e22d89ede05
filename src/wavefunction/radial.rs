//! Radial factor R_nl(r) of the hydrogen eigenfunctions.
//!
//! R(r) = N · exp(−r/(n a₀)) · ρ^l · L_{n−l−1}^{2l+1}(ρ),  ρ = 2r/(n a₀)
//! N = sqrt((2/(n a₀))³ · (n−l−1)! / (2n (n+l)!))

use crate::error::OrbitalError;
use crate::special::{laguerre, ln_factorial};
use super::quantum::{check_bohr_radius, check_radial};

/// Evaluate R_nl(r) for a0 > 0 and r ≥ 0.
pub fn radial_wavefunction(n: u32, l: u32, a0: f64, r: f64) -> Result<f64, OrbitalError> {
    check_radial(n, l)?;
    check_bohr_radius(a0)?;
    check_radius(r)?;
    Ok(radial_unchecked(n, l, a0, r))
}

/// Elementwise `radial_wavefunction` over a slice of radii.
pub fn radial_wavefunction_many(n: u32, l: u32, a0: f64, r: &[f64]) -> Result<Vec<f64>, OrbitalError> {
    check_radial(n, l)?;
    check_bohr_radius(a0)?;
    r.iter()
        .map(|&ri| {
            check_radius(ri)?;
            Ok(radial_unchecked(n, l, a0, ri))
        })
        .collect()
}

fn check_radius(r: f64) -> Result<(), OrbitalError> {
    if !(r.is_finite() && r >= 0.0) {
        return Err(OrbitalError::InvalidParameter { name: "r", value: r });
    }
    Ok(())
}

/// Log of the normalization constant N.
fn ln_normalization(n: u32, l: u32, a0: f64) -> f64 {
    let n_f = n as f64;
    0.5 * (3.0 * (2.0 / (n_f * a0)).ln() + ln_factorial(n - l - 1)
        - (2.0 * n_f).ln()
        - ln_factorial(n + l))
}

/// R_nl(r) without argument checks; callers guarantee valid (n, l), a0 > 0 and r ≥ 0.
pub(crate) fn radial_unchecked(n: u32, l: u32, a0: f64, r: f64) -> f64 {
    let x = r / (n as f64 * a0);
    if !x.is_finite() {
        return 0.0;
    }
    let rho = 2.0 * x;

    // ρ^l is folded into the exponent; s states keep ρ^0 = 1 at the nucleus
    let mut ln_envelope = ln_normalization(n, l, a0) - x;
    if l > 0 {
        if rho == 0.0 {
            return 0.0;
        }
        ln_envelope += l as f64 * rho.ln();
    }
    let envelope = ln_envelope.exp();
    // past this point the Laguerre factor may overflow while the product is zero
    if envelope == 0.0 {
        return 0.0;
    }
    envelope * laguerre(n - l - 1, (2 * l + 1) as f64, rho)
}
