//! Cartesian <-> spherical coordinate conversion.

use nalgebra::Vector3;

/// Spherical coordinates (r, θ, φ) with r ≥ 0, θ ∈ [0, π], φ ∈ (−π, π].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spherical {
    pub r: f64,
    pub theta: f64,
    pub phi: f64,
}

/// Convert a Cartesian point to spherical coordinates.
///
/// The origin maps to r = θ = φ = 0, where arccos/atan2 are otherwise undefined.
pub fn cartesian_to_spherical(p: &Vector3<f64>) -> Spherical {
    let r = p.norm();
    if r == 0.0 {
        return Spherical { r: 0.0, theta: 0.0, phi: 0.0 };
    }
    let theta = (p.z / r).clamp(-1.0, 1.0).acos();
    let phi = p.y.atan2(p.x);
    Spherical { r, theta, phi }
}

/// Convert spherical coordinates back to a Cartesian point.
pub fn spherical_to_cartesian(s: &Spherical) -> Vector3<f64> {
    let (sin_t, cos_t) = s.theta.sin_cos();
    let (sin_p, cos_p) = s.phi.sin_cos();
    Vector3::new(s.r * sin_t * cos_p, s.r * sin_t * sin_p, s.r * cos_t)
}
