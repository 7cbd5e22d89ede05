//! Sampling module - Metropolis sampling of orbital densities.

mod seed;
mod metropolis;
mod summary;

pub use seed::{find_initial_point, InitialPoint, DEFAULT_SEED_TRIALS, FALLBACK_SEED, SEED_DENSITY_THRESHOLD};
pub use metropolis::{
    metropolis_sampling, metropolis_sampling_seeded, MetropolisChain, MetropolisParams, MetropolisSampler,
    SampleChain,
};
pub use summary::{radial_histogram, ChainSummary, RadialHistogram, SUMMARY_RADIAL_BINS};
