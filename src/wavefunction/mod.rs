//! Wavefunction module - hydrogen orbital evaluators.

mod traits;
mod quantum;
mod radial;
mod angular;
mod hydrogen;

pub use traits::Wavefunction;
pub use quantum::{QuantumNumbers, MAX_PRINCIPAL};
pub use radial::{radial_wavefunction, radial_wavefunction_many};
pub use angular::spherical_harmonic;
pub use hydrogen::{HydrogenOrbital, BOHR_RADIUS};
