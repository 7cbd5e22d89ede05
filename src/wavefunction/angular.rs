//! Complex spherical harmonics Y_l^m(θ, φ).
//!
//! Condon–Shortley phase convention, unit normalized over the sphere.

use std::f64::consts::PI;
use nalgebra::Complex;
use crate::error::OrbitalError;
use crate::special::{associated_legendre, ln_factorial};
use super::quantum::check_angular;

/// Evaluate Y_l^m(θ, φ) for |m| ≤ l.
pub fn spherical_harmonic(l: u32, m: i32, theta: f64, phi: f64) -> Result<Complex<f64>, OrbitalError> {
    check_angular(l, m)?;
    Ok(spherical_harmonic_unchecked(l, m, theta, phi))
}

pub(crate) fn spherical_harmonic_unchecked(l: u32, m: i32, theta: f64, phi: f64) -> Complex<f64> {
    let m_abs = m.unsigned_abs();
    let norm = ((2 * l + 1) as f64 / (4.0 * PI)).sqrt()
        * (0.5 * (ln_factorial(l - m_abs) - ln_factorial(l + m_abs))).exp();
    let legendre = associated_legendre(l, m_abs, theta.cos());
    let y = Complex::from_polar(norm * legendre, m_abs as f64 * phi);

    if m >= 0 {
        y
    } else if m_abs % 2 == 0 {
        y.conj()
    } else {
        -y.conj()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// ∫∫ |Y|² sinθ dθ dφ on a midpoint grid.
    fn sphere_norm(l: u32, m: i32) -> f64 {
        let n_theta = 200;
        let n_phi = 100;
        let d_theta = PI / n_theta as f64;
        let d_phi = 2.0 * PI / n_phi as f64;
        let mut sum = 0.0;
        for i in 0..n_theta {
            let theta = (i as f64 + 0.5) * d_theta;
            for j in 0..n_phi {
                let phi = -PI + (j as f64 + 0.5) * d_phi;
                let y = spherical_harmonic(l, m, theta, phi).unwrap();
                sum += y.norm_sqr() * theta.sin();
            }
        }
        sum * d_theta * d_phi
    }

    #[test]
    fn test_normalization() {
        for l in 0..=4u32 {
            for m in -(l as i32)..=(l as i32) {
                assert_relative_eq!(sphere_norm(l, m), 1.0, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn test_known_values() {
        let theta = 0.9_f64;
        let phi = -0.4_f64;

        let y00 = spherical_harmonic(0, 0, theta, phi).unwrap();
        assert_relative_eq!(y00.re, 1.0 / (4.0 * PI).sqrt(), epsilon = 1e-14);
        assert_relative_eq!(y00.im, 0.0, epsilon = 1e-14);

        let y10 = spherical_harmonic(1, 0, theta, phi).unwrap();
        assert_relative_eq!(y10.re, (3.0 / (4.0 * PI)).sqrt() * theta.cos(), epsilon = 1e-14);

        // Y_1^1 = −sqrt(3/8π) sinθ e^{iφ}
        let c = (3.0 / (8.0 * PI)).sqrt() * theta.sin();
        let y11 = spherical_harmonic(1, 1, theta, phi).unwrap();
        assert_relative_eq!(y11.re, -c * phi.cos(), epsilon = 1e-14);
        assert_relative_eq!(y11.im, -c * phi.sin(), epsilon = 1e-14);

        // Y_1^{-1} = +sqrt(3/8π) sinθ e^{−iφ}
        let y1m1 = spherical_harmonic(1, -1, theta, phi).unwrap();
        assert_relative_eq!(y1m1.re, c * phi.cos(), epsilon = 1e-14);
        assert_relative_eq!(y1m1.im, -c * phi.sin(), epsilon = 1e-14);
    }

    #[test]
    fn test_conjugate_symmetry() {
        let (theta, phi) = (1.3, 2.2);
        for m in 1..=3i32 {
            let pos = spherical_harmonic(3, m, theta, phi).unwrap();
            let neg = spherical_harmonic(3, -m, theta, phi).unwrap();
            let sign = if m % 2 == 0 { 1.0 } else { -1.0 };
            assert_relative_eq!(neg.re, sign * pos.re, epsilon = 1e-14);
            assert_relative_eq!(neg.im, -sign * pos.im, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_invalid_m() {
        assert!(matches!(spherical_harmonic(1, 2, 0.1, 0.1), Err(OrbitalError::InvalidQuantumNumbers(_))));
        assert!(spherical_harmonic(0, -1, 0.1, 0.1).is_err());
    }
}
