// Read a sampling run from a YAML file:
/*
orbital:
  n: 2
  l: 1
  m: 0
bohr_radius: 1.0
num_samples: 10000
step_size: 0.5
seed: 42
 */

use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::error::OrbitalError;
use crate::sampling::{MetropolisParams, DEFAULT_SEED_TRIALS};
use crate::wavefunction::{HydrogenOrbital, QuantumNumbers, BOHR_RADIUS};

/// One sampling run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub orbital: QuantumNumbers,
    #[serde(default = "default_bohr_radius")]
    pub bohr_radius: f64,
    #[serde(default = "default_num_samples")]
    pub num_samples: usize,
    #[serde(default = "default_step_size")]
    pub step_size: f64,
    #[serde(default = "default_seed_trials")]
    pub max_seed_trials: usize,
    /// RNG seed; a fresh entropy seed is used when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_bohr_radius() -> f64 {
    BOHR_RADIUS
}

fn default_num_samples() -> usize {
    MetropolisParams::default().num_samples
}

fn default_step_size() -> f64 {
    MetropolisParams::default().step_size
}

fn default_seed_trials() -> usize {
    DEFAULT_SEED_TRIALS
}

impl RunConfig {
    /// Build the orbital and sampler parameters, checking every field.
    pub fn validate(&self) -> Result<(HydrogenOrbital, MetropolisParams), OrbitalError> {
        let orbital = HydrogenOrbital::new(self.orbital, self.bohr_radius)?;
        let params = MetropolisParams::new()
            .with_num_samples(self.num_samples)
            .with_step_size(self.step_size)
            .with_max_seed_trials(self.max_seed_trials);
        params.validate()?;
        Ok((orbital, params))
    }
}

/// Parse a `RunConfig` from YAML text.
pub fn parse_run_config(yaml: &str) -> Result<RunConfig, OrbitalError> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Read a `RunConfig` from a YAML file.
pub fn read_run_config<P: AsRef<Path>>(filename: P) -> Result<RunConfig, OrbitalError> {
    let file = std::fs::File::open(filename)?;
    let reader = std::io::BufReader::new(file);
    Ok(serde_yaml::from_reader(reader)?)
}
