//! Metropolis random walk over an orbital probability density.
//!
//! Symmetric uniform proposals in a cube of half-width `step_size`, so the
//! acceptance ratio reduces to the density ratio |ψ(new)|² / |ψ(old)|².
//! Rejected moves re-append the current point; the duplicates carry the
//! stationary weight.

use std::sync::atomic::{AtomicBool, Ordering};
use nalgebra::{DMatrix, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};
use crate::error::OrbitalError;
use crate::wavefunction::{HydrogenOrbital, Wavefunction};
use super::seed::{find_initial_point, InitialPoint, DEFAULT_SEED_TRIALS};

/// Parameters for a Metropolis run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MetropolisParams {
    /// Number of Metropolis steps; the chain holds one more point (the seed).
    pub num_samples: usize,
    /// Half-width of the per-axis uniform proposal.
    pub step_size: f64,
    /// Candidate budget for the seed search.
    pub max_seed_trials: usize,
}

impl Default for MetropolisParams {
    fn default() -> Self {
        Self {
            num_samples: 1000,
            step_size: 0.5,
            max_seed_trials: DEFAULT_SEED_TRIALS,
        }
    }
}

impl MetropolisParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set number of steps.
    pub fn with_num_samples(mut self, n: usize) -> Self {
        self.num_samples = n;
        self
    }

    /// Set proposal half-width.
    pub fn with_step_size(mut self, step: f64) -> Self {
        self.step_size = step;
        self
    }

    /// Set seed search budget.
    pub fn with_max_seed_trials(mut self, n: usize) -> Self {
        self.max_seed_trials = n;
        self
    }

    pub fn validate(&self) -> Result<(), OrbitalError> {
        check_step_size(self.step_size)
    }
}

fn check_step_size(step: f64) -> Result<(), OrbitalError> {
    // the proposal range [−step, step] must itself be finite
    if !(step >= 0.0 && (2.0 * step).is_finite()) {
        return Err(OrbitalError::InvalidParameter { name: "step_size", value: step });
    }
    Ok(())
}

/// Sequence of points produced by one chain.
#[derive(Clone, Debug)]
pub struct SampleChain {
    /// Seed followed by one point per step.
    pub points: Vec<Vector3<f64>>,
    /// Number of accepted proposals.
    pub accepted: usize,
    /// Seed search diagnostics.
    pub seed: InitialPoint,
    /// True if the run stopped early on a cancellation request.
    pub cancelled: bool,
}

impl SampleChain {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of Metropolis steps taken.
    pub fn steps(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    pub fn acceptance_rate(&self) -> f64 {
        match self.steps() {
            0 => 0.0,
            steps => self.accepted as f64 / steps as f64,
        }
    }

    /// Points as a (len × 3) matrix, one row per point.
    pub fn as_matrix(&self) -> DMatrix<f64> {
        DMatrix::from_fn(self.points.len(), 3, |i, j| self.points[i][j])
    }

    pub fn into_points(self) -> Vec<Vector3<f64>> {
        self.points
    }
}

/// State of a single walker.
pub struct MetropolisChain<W: Wavefunction> {
    wavefunction: W,
    proposal: Uniform<f64>,
    current: Vector3<f64>,
    current_density: f64,
}

impl<W: Wavefunction> MetropolisChain<W> {
    /// Seed a new chain with `find_initial_point`.
    pub fn seed<R: Rng + ?Sized>(
        wavefunction: W,
        step_size: f64,
        max_seed_trials: usize,
        rng: &mut R,
    ) -> Result<(Self, InitialPoint), OrbitalError> {
        check_step_size(step_size)?;
        Ok(Self::seed_checked(wavefunction, step_size, max_seed_trials, rng))
    }

    /// Seeding for a step size that already passed `check_step_size`.
    fn seed_checked<R: Rng + ?Sized>(
        wavefunction: W,
        step_size: f64,
        max_seed_trials: usize,
        rng: &mut R,
    ) -> (Self, InitialPoint) {
        let seed = find_initial_point(&wavefunction, rng, max_seed_trials);
        let chain = Self {
            wavefunction,
            proposal: Uniform::new_inclusive(-step_size, step_size),
            current: seed.point,
            current_density: seed.density,
        };
        (chain, seed)
    }

    /// Start a chain from an explicit state, with `density` taken as the current density.
    pub fn from_state(
        wavefunction: W,
        point: Vector3<f64>,
        density: f64,
        step_size: f64,
    ) -> Result<Self, OrbitalError> {
        check_step_size(step_size)?;
        Ok(Self {
            wavefunction,
            proposal: Uniform::new_inclusive(-step_size, step_size),
            current: point,
            current_density: density,
        })
    }

    pub fn current(&self) -> &Vector3<f64> {
        &self.current
    }

    pub fn current_density(&self) -> f64 {
        self.current_density
    }

    /// Perform one Metropolis step. Returns true if the proposal was accepted.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let proposal = self.current
            + Vector3::new(
                self.proposal.sample(rng),
                self.proposal.sample(rng),
                self.proposal.sample(rng),
            );
        let new_density = self.wavefunction.density(&proposal);

        // a zero-density state always moves on
        let ratio = if self.current_density == 0.0 {
            1.0
        } else {
            new_density / self.current_density
        };

        let accept = ratio >= 1.0 || rng.gen::<f64>() < ratio;
        log::trace!("proposal {proposal:?} ratio {ratio:.4e} accepted {accept}");
        if accept {
            self.current = proposal;
            self.current_density = new_density;
        }
        accept
    }
}

/// Metropolis sampler for a fixed wavefunction.
///
/// Holds no random state: every `run` seeds a fresh chain from the supplied
/// generator, so independent chains only need independent generators.
pub struct MetropolisSampler<W: Wavefunction> {
    wavefunction: W,
    params: MetropolisParams,
}

impl<W: Wavefunction> MetropolisSampler<W> {
    pub fn new(wavefunction: W, params: MetropolisParams) -> Result<Self, OrbitalError> {
        params.validate()?;
        Ok(Self { wavefunction, params })
    }

    pub fn params(&self) -> &MetropolisParams {
        &self.params
    }

    pub fn wavefunction(&self) -> &W {
        &self.wavefunction
    }

    /// Run the full chain: seed plus `num_samples` steps.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> SampleChain {
        self.run_inner(rng, None)
    }

    /// Like `run`, but checks `cancel` before every step and stops early once it is set.
    pub fn run_cancellable<R: Rng + ?Sized>(&self, rng: &mut R, cancel: &AtomicBool) -> SampleChain {
        self.run_inner(rng, Some(cancel))
    }

    fn run_inner<R: Rng + ?Sized>(&self, rng: &mut R, cancel: Option<&AtomicBool>) -> SampleChain {
        let params = &self.params;
        log::debug!(
            "metropolis run: {} steps, step size {}",
            params.num_samples,
            params.step_size
        );

        // step size was checked in `new`
        let (mut chain, seed) =
            MetropolisChain::seed_checked(&self.wavefunction, params.step_size, params.max_seed_trials, rng);

        let mut points = Vec::with_capacity(params.num_samples + 1);
        points.push(chain.current);
        let mut accepted = 0;
        let mut cancelled = false;

        for step in 0..params.num_samples {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                log::info!("metropolis run cancelled after {step} of {} steps", params.num_samples);
                cancelled = true;
                break;
            }
            if chain.step(rng) {
                accepted += 1;
            }
            points.push(chain.current);
        }

        let result = SampleChain { points, accepted, seed, cancelled };
        log::info!(
            "metropolis run finished: {} points, acceptance {:.2}%",
            result.len(),
            100.0 * result.acceptance_rate()
        );
        result
    }
}

/// Sample the (n, l, m) hydrogen orbital with `num_samples` Metropolis steps.
///
/// Returns `num_samples + 1` points (seed included). Invalid quantum numbers,
/// Bohr radius or step size are reported before any sampling happens.
pub fn metropolis_sampling<R: Rng + ?Sized>(
    n: u32,
    l: u32,
    m: i32,
    num_samples: usize,
    step_size: f64,
    bohr_radius: f64,
    rng: &mut R,
) -> Result<SampleChain, OrbitalError> {
    let orbital = HydrogenOrbital::from_numbers(n, l, m, bohr_radius)?;
    let params = MetropolisParams::new()
        .with_num_samples(num_samples)
        .with_step_size(step_size);
    let sampler = MetropolisSampler::new(orbital, params)?;
    Ok(sampler.run(rng))
}

/// `metropolis_sampling` with its own `StdRng` seeded from `seed`.
pub fn metropolis_sampling_seeded(
    n: u32,
    l: u32,
    m: i32,
    num_samples: usize,
    step_size: f64,
    bohr_radius: f64,
    seed: u64,
) -> Result<SampleChain, OrbitalError> {
    let mut rng = StdRng::seed_from_u64(seed);
    metropolis_sampling(n, l, m, num_samples, step_size, bohr_radius, &mut rng)
}
