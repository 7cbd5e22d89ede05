//! Starting point search for the Metropolis chain.
//!
//! Seeding inside a nodal surface would stall the walk, so candidates are drawn
//! uniformly from the cube [−1, 1]³ until one has non-negligible density.

use nalgebra::Vector3;
use rand::Rng;
use rand_distr::{Distribution, Uniform};
use crate::wavefunction::Wavefunction;

/// Minimum density a candidate must exceed to seed the chain.
pub const SEED_DENSITY_THRESHOLD: f64 = 1e-10;

/// Default number of candidates drawn before falling back.
pub const DEFAULT_SEED_TRIALS: usize = 1000;

/// Half side length of the candidate cube.
const SEED_CUBE_HALF_WIDTH: f64 = 1.0;

/// Seed used when no candidate qualifies.
pub const FALLBACK_SEED: [f64; 3] = [0.1, 0.1, 0.1];

/// Outcome of the seed search.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InitialPoint {
    pub point: Vector3<f64>,
    pub density: f64,
    /// Candidates drawn, including the accepted one.
    pub trials: usize,
    /// True when the trial budget ran out and `FALLBACK_SEED` was used.
    pub fallback: bool,
}

/// Find a point with density above `SEED_DENSITY_THRESHOLD`.
///
/// Never fails: after `max_trials` unsuccessful draws the fixed fallback point is
/// returned with `fallback` set, and a warning is logged.
pub fn find_initial_point<W, R>(wfn: &W, rng: &mut R, max_trials: usize) -> InitialPoint
where
    W: Wavefunction + ?Sized,
    R: Rng + ?Sized,
{
    let cube = Uniform::new_inclusive(-SEED_CUBE_HALF_WIDTH, SEED_CUBE_HALF_WIDTH);

    for trial in 1..=max_trials {
        let candidate = Vector3::new(cube.sample(rng), cube.sample(rng), cube.sample(rng));
        let density = wfn.density(&candidate);
        if density > SEED_DENSITY_THRESHOLD {
            log::debug!("seed found after {trial} trials at {candidate:?} (density {density:e})");
            return InitialPoint { point: candidate, density, trials: trial, fallback: false };
        }
    }

    let point = Vector3::from(FALLBACK_SEED);
    let density = wfn.density(&point);
    log::warn!(
        "no seed above density {SEED_DENSITY_THRESHOLD:e} in {max_trials} trials, \
         falling back to {FALLBACK_SEED:?} (density {density:e})"
    );
    InitialPoint { point, density, trials: max_trials, fallback: true }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wavefunction::{HydrogenOrbital, BOHR_RADIUS};
    use nalgebra::Complex;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Density that vanishes everywhere.
    struct Vanishing;

    impl Wavefunction for Vanishing {
        fn evaluate(&self, _r: &Vector3<f64>) -> Complex<f64> {
            Complex::new(0.0, 0.0)
        }
    }

    #[test]
    fn test_1s_seed_in_cube() {
        let orbital = HydrogenOrbital::from_numbers(1, 0, 0, BOHR_RADIUS).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let seed = find_initial_point(&orbital, &mut rng, DEFAULT_SEED_TRIALS);
        assert!(!seed.fallback);
        assert_eq!(seed.trials, 1);
        assert!(seed.density > SEED_DENSITY_THRESHOLD);
        assert!(seed.point.iter().all(|c| c.abs() <= 1.0));
        assert_eq!(seed.density, orbital.density(&seed.point));
    }

    #[test]
    fn test_fallback_when_budget_exhausted() {
        let mut rng = StdRng::seed_from_u64(1);
        let seed = find_initial_point(&Vanishing, &mut rng, 50);
        assert!(seed.fallback);
        assert_eq!(seed.trials, 50);
        assert_eq!(seed.point, Vector3::new(0.1, 0.1, 0.1));
        assert_eq!(seed.density, 0.0);
    }

    #[test]
    fn test_zero_trials_falls_back() {
        let orbital = HydrogenOrbital::from_numbers(2, 1, 1, BOHR_RADIUS).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let seed = find_initial_point(&orbital, &mut rng, 0);
        assert!(seed.fallback);
        assert_eq!(seed.point, Vector3::from(FALLBACK_SEED));
        assert!(seed.density > 0.0);
    }

    #[test]
    fn test_seed_skips_nodal_points() {
        // 3d orbitals are tiny near the nucleus; every returned seed must still clear the threshold
        let orbital = HydrogenOrbital::from_numbers(3, 2, 0, BOHR_RADIUS).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let seed = find_initial_point(&orbital, &mut rng, DEFAULT_SEED_TRIALS);
            assert!(seed.fallback || seed.density > SEED_DENSITY_THRESHOLD);
        }
    }
}
