//! Hydrogen quantum numbers (n, l, m).

use serde::{Deserialize, Serialize};
use crate::error::OrbitalError;

/// Largest principal quantum number the evaluators accept.
///
/// Factorials go through `ln_factorial`, but the Laguerre recurrence and the
/// ρ^l factor are evaluated directly and lose precision past this point.
pub const MAX_PRINCIPAL: u32 = 40;

/// Quantum numbers identifying a hydrogen orbital.
///
/// n ≥ 1, 0 ≤ l ≤ n−1, −l ≤ m ≤ l.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "RawQuantumNumbers")]
pub struct QuantumNumbers {
    n: u32,
    l: u32,
    m: i32,
}

#[derive(Deserialize)]
struct RawQuantumNumbers {
    n: u32,
    l: u32,
    m: i32,
}

impl TryFrom<RawQuantumNumbers> for QuantumNumbers {
    type Error = OrbitalError;

    fn try_from(raw: RawQuantumNumbers) -> Result<Self, Self::Error> {
        QuantumNumbers::new(raw.n, raw.l, raw.m)
    }
}

impl QuantumNumbers {
    pub fn new(n: u32, l: u32, m: i32) -> Result<Self, OrbitalError> {
        check_radial(n, l)?;
        check_angular(l, m)?;
        Ok(Self { n, l, m })
    }

    pub fn n(&self) -> u32 {
        self.n
    }

    pub fn l(&self) -> u32 {
        self.l
    }

    pub fn m(&self) -> i32 {
        self.m
    }
}

impl std::fmt::Display for QuantumNumbers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(n={}, l={}, m={})", self.n, self.l, self.m)
    }
}

pub(crate) fn check_radial(n: u32, l: u32) -> Result<(), OrbitalError> {
    if n == 0 || l >= n {
        return Err(OrbitalError::InvalidQuantumNumbers(format!(
            "n={n}, l={l}: need n >= 1 and 0 <= l <= n-1"
        )));
    }
    if n > MAX_PRINCIPAL {
        return Err(OrbitalError::OutOfRange { n, max: MAX_PRINCIPAL });
    }
    Ok(())
}

pub(crate) fn check_angular(l: u32, m: i32) -> Result<(), OrbitalError> {
    if m.unsigned_abs() > l {
        return Err(OrbitalError::InvalidQuantumNumbers(format!(
            "l={l}, m={m}: need -l <= m <= l"
        )));
    }
    Ok(())
}

pub(crate) fn check_bohr_radius(a0: f64) -> Result<(), OrbitalError> {
    if !(a0.is_finite() && a0 > 0.0) {
        return Err(OrbitalError::InvalidParameter { name: "bohr_radius", value: a0 });
    }
    Ok(())
}
