//! Error type shared by the evaluators, the sampler and the config reader.

use thiserror::Error;

/// Errors that can occur while building or sampling an orbital.
#[derive(Error, Debug)]
pub enum OrbitalError {
    #[error("invalid quantum numbers: {0}")]
    InvalidQuantumNumbers(String),
    #[error("principal quantum number n={n} is out of the supported range (n <= {max})")]
    OutOfRange { n: u32, max: u32 },
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Config(#[from] serde_yaml::Error),
}
