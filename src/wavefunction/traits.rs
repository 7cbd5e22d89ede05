//! Wave function traits for orbital sampling.

use nalgebra::{Complex, Vector3};

/// Single-particle wavefunction evaluated at a Cartesian point.
pub trait Wavefunction {
    /// Evaluate the complex amplitude ψ(r).
    fn evaluate(&self, r: &Vector3<f64>) -> Complex<f64>;

    /// Probability density |ψ(r)|².
    fn density(&self, r: &Vector3<f64>) -> f64 {
        self.evaluate(r).norm_sqr()
    }
}

impl<W: Wavefunction + ?Sized> Wavefunction for &W {
    fn evaluate(&self, r: &Vector3<f64>) -> Complex<f64> {
        (**self).evaluate(r)
    }

    fn density(&self, r: &Vector3<f64>) -> f64 {
        (**self).density(r)
    }
}
