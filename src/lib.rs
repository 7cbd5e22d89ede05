//! Hydrogen MC - Metropolis sampling of hydrogen orbital densities.
//!
//! This crate evaluates ψ_nlm for the hydrogen atom and draws point clouds
//! distributed as |ψ_nlm|² with a Metropolis random walk, for orbital visualization.

pub mod error;
pub mod coords;
pub mod special;
pub mod wavefunction;
pub mod sampling;
pub mod io;

// Re-export commonly used types at crate root
pub use error::OrbitalError;
pub use coords::{cartesian_to_spherical, spherical_to_cartesian, Spherical};
pub use wavefunction::{
    radial_wavefunction, radial_wavefunction_many, spherical_harmonic, HydrogenOrbital, QuantumNumbers,
    Wavefunction, BOHR_RADIUS, MAX_PRINCIPAL,
};
pub use sampling::{
    find_initial_point, metropolis_sampling, metropolis_sampling_seeded, radial_histogram, ChainSummary,
    InitialPoint, MetropolisChain, MetropolisParams, MetropolisSampler, RadialHistogram, SampleChain,
    DEFAULT_SEED_TRIALS, FALLBACK_SEED, SEED_DENSITY_THRESHOLD, SUMMARY_RADIAL_BINS,
};
pub use io::{parse_run_config, read_run_config, RunConfig};
