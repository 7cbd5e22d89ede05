//! Hydrogen orbital ψ_nlm = R_nl(r) · Y_l^m(θ, φ).

use nalgebra::{Complex, Vector3};
use crate::coords::{cartesian_to_spherical, Spherical};
use crate::error::OrbitalError;
use super::angular::spherical_harmonic_unchecked;
use super::quantum::{check_bohr_radius, QuantumNumbers};
use super::radial::radial_unchecked;
use super::traits::Wavefunction;

/// Bohr radius in atomic units.
pub const BOHR_RADIUS: f64 = 1.0;

/// A hydrogen orbital with fixed quantum numbers and Bohr radius.
///
/// Inputs are validated once in `new`, so evaluation itself cannot fail.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HydrogenOrbital {
    qn: QuantumNumbers,
    bohr_radius: f64,
}

impl HydrogenOrbital {
    pub fn new(qn: QuantumNumbers, bohr_radius: f64) -> Result<Self, OrbitalError> {
        check_bohr_radius(bohr_radius)?;
        Ok(Self { qn, bohr_radius })
    }

    /// Build from raw quantum numbers.
    pub fn from_numbers(n: u32, l: u32, m: i32, bohr_radius: f64) -> Result<Self, OrbitalError> {
        Self::new(QuantumNumbers::new(n, l, m)?, bohr_radius)
    }

    pub fn quantum_numbers(&self) -> QuantumNumbers {
        self.qn
    }

    pub fn bohr_radius(&self) -> f64 {
        self.bohr_radius
    }

    /// ψ at a point given in spherical coordinates.
    pub fn evaluate_spherical(&self, s: &Spherical) -> Complex<f64> {
        let radial = radial_unchecked(self.qn.n(), self.qn.l(), self.bohr_radius, s.r);
        spherical_harmonic_unchecked(self.qn.l(), self.qn.m(), s.theta, s.phi) * radial
    }

    /// |ψ|² at a point given in spherical coordinates.
    pub fn density_spherical(&self, s: &Spherical) -> f64 {
        self.evaluate_spherical(s).norm_sqr()
    }
}

impl Wavefunction for HydrogenOrbital {
    fn evaluate(&self, r: &Vector3<f64>) -> Complex<f64> {
        self.evaluate_spherical(&cartesian_to_spherical(r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::PI;

    #[test]
    fn test_1s_density() {
        let orbital = HydrogenOrbital::from_numbers(1, 0, 0, BOHR_RADIUS).unwrap();
        let r = Vector3::new(0.3, -0.4, 0.0);
        // |ψ_100|² = exp(−2r) / π
        assert_relative_eq!(orbital.density(&r), (-1.0_f64).exp() / PI, epsilon = 1e-14);
        assert_relative_eq!(orbital.density(&Vector3::zeros()), 1.0 / PI, epsilon = 1e-14);
    }

    #[test]
    fn test_1s_strictly_decreasing() {
        let orbital = HydrogenOrbital::from_numbers(1, 0, 0, BOHR_RADIUS).unwrap();
        let dir = Vector3::new(1.0, 2.0, -0.5).normalize();
        let densities: Vec<f64> = (0..200).map(|i| orbital.density(&(dir * (i as f64 * 0.05)))).collect();
        assert!(densities.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn test_2pz_nodal_plane() {
        let orbital = HydrogenOrbital::from_numbers(2, 1, 0, BOHR_RADIUS).unwrap();
        assert_relative_eq!(orbital.density(&Vector3::new(1.0, -2.0, 0.0)), 0.0, epsilon = 1e-25);
        assert_eq!(orbital.density(&Vector3::zeros()), 0.0);
        assert!(orbital.density(&Vector3::new(0.0, 0.0, 1.0)) > 0.0);
    }

    #[test]
    fn test_density_non_negative_and_periodic() {
        let mut rng = StdRng::seed_from_u64(7);
        for (n, l, m) in [(1, 0, 0), (2, 1, 1), (3, 2, -2), (4, 3, 1), (4, 1, -1)] {
            let orbital = HydrogenOrbital::from_numbers(n, l, m, BOHR_RADIUS).unwrap();
            for _ in 0..200 {
                let s = Spherical {
                    r: rng.gen_range(0.0..20.0),
                    theta: rng.gen_range(0.0..PI),
                    phi: rng.gen_range(-PI..PI),
                };
                let shifted = Spherical { phi: s.phi + 2.0 * PI, ..s };
                let d = orbital.density_spherical(&s);
                assert!(d >= 0.0);
                assert_relative_eq!(d, orbital.density_spherical(&shifted), max_relative = 1e-10, epsilon = 1e-300);
            }
        }
    }

    #[test]
    fn test_m_density_is_axially_symmetric() {
        // |Y_l^m|² does not depend on φ
        let orbital = HydrogenOrbital::from_numbers(3, 2, 1, BOHR_RADIUS).unwrap();
        let a = Vector3::new(1.0, 0.0, 0.5);
        let b = Vector3::new(0.0, -1.0, 0.5);
        assert_relative_eq!(orbital.density(&a), orbital.density(&b), epsilon = 1e-14);
    }

    #[test]
    fn test_invalid_orbital() {
        assert!(HydrogenOrbital::from_numbers(1, 1, 0, BOHR_RADIUS).is_err());
        assert!(HydrogenOrbital::from_numbers(1, 0, 0, -1.0).is_err());
    }
}
