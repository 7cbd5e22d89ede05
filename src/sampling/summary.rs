//! Summary statistics of a sample chain.

use nalgebra::Vector3;
use super::metropolis::SampleChain;

/// Radial histogram of the chain points.
#[derive(Clone, Debug)]
pub struct RadialHistogram {
    pub bin_width: f64,
    pub counts: Vec<usize>,
    /// Points with r ≥ r_max.
    pub overflow: usize,
}

impl RadialHistogram {
    /// Centre of the most populated bin, or `None` if every bin is empty.
    pub fn peak(&self) -> Option<f64> {
        let (idx, &count) = self
            .counts
            .iter()
            .enumerate()
            .max_by_key(|&(i, &c)| (c, std::cmp::Reverse(i)))?;
        (count > 0).then(|| (idx as f64 + 0.5) * self.bin_width)
    }
}

/// Histogram of |r| for the chain points over `bins` equal bins on [0, r_max).
pub fn radial_histogram(points: &[Vector3<f64>], bins: usize, r_max: f64) -> RadialHistogram {
    let bin_width = r_max / bins as f64;
    let mut counts = vec![0; bins];
    let mut overflow = 0;
    for p in points {
        let idx = (p.norm() / bin_width) as usize;
        match counts.get_mut(idx) {
            Some(c) => *c += 1,
            None => overflow += 1,
        }
    }
    RadialHistogram { bin_width, counts, overflow }
}

/// Bins used for `ChainSummary::radial_peak`.
pub const SUMMARY_RADIAL_BINS: usize = 50;

/// Aggregate statistics of a chain.
#[derive(Clone, Debug)]
pub struct ChainSummary {
    pub num_points: usize,
    pub mean: Vector3<f64>,
    pub mean_radius: f64,
    pub mean_radius_squared: f64,
    pub acceptance_rate: f64,
    pub seed_fallback: bool,
    /// Peak of a `SUMMARY_RADIAL_BINS`-bin radial histogram spanning [0, max |r|].
    pub radial_peak: Option<f64>,
}

impl ChainSummary {
    pub fn from_chain(chain: &SampleChain) -> Self {
        let n = chain.len().max(1) as f64;
        let mean = chain.points.iter().fold(Vector3::zeros(), |acc, p| acc + p) / n;
        let mean_radius = chain.points.iter().map(|p| p.norm()).sum::<f64>() / n;
        let mean_radius_squared = chain.points.iter().map(|p| p.norm_squared()).sum::<f64>() / n;
        let r_max = chain.points.iter().map(|p| p.norm()).fold(0.0, f64::max);
        // widen by one bin so the outermost point lands inside the range
        let bin_span = r_max.max(f64::MIN_POSITIVE) * (SUMMARY_RADIAL_BINS + 1) as f64 / SUMMARY_RADIAL_BINS as f64;
        let radial_peak = radial_histogram(&chain.points, SUMMARY_RADIAL_BINS, bin_span).peak();
        Self {
            num_points: chain.len(),
            mean,
            mean_radius,
            mean_radius_squared,
            acceptance_rate: chain.acceptance_rate(),
            seed_fallback: chain.seed.fallback,
            radial_peak,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::metropolis_sampling_seeded;
    use approx::assert_relative_eq;

    #[test]
    fn test_histogram_binning() {
        let points = vec![
            Vector3::new(0.1, 0.0, 0.0),
            Vector3::new(0.0, 0.7, 0.0),
            Vector3::new(0.0, 0.0, -0.8),
            Vector3::new(3.0, 0.0, 0.0),
        ];
        let hist = radial_histogram(&points, 4, 2.0);
        assert_eq!(hist.counts, vec![1, 2, 0, 0]);
        assert_eq!(hist.overflow, 1);
        assert_relative_eq!(hist.peak().unwrap(), 0.75);
    }

    #[test]
    fn test_empty_histogram_has_no_peak() {
        let hist = radial_histogram(&[], 5, 1.0);
        assert_eq!(hist.peak(), None);
    }

    #[test]
    fn test_summary_of_constant_chain() {
        let chain = metropolis_sampling_seeded(1, 0, 0, 20, 0.0, 1.0, 5).unwrap();
        let summary = ChainSummary::from_chain(&chain);
        assert_eq!(summary.num_points, 21);
        assert_relative_eq!((summary.mean - chain.seed.point).norm(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(summary.mean_radius, chain.seed.point.norm(), epsilon = 1e-12);
        assert!(!summary.seed_fallback);
        // every point sits in the same bin, whose centre is within half a bin of the radius
        let peak = summary.radial_peak.unwrap();
        let half_bin = 0.5 * chain.seed.point.norm() * 51.0 / 50.0 / SUMMARY_RADIAL_BINS as f64;
        assert!((peak - chain.seed.point.norm()).abs() <= half_bin + 1e-12);
    }

    #[test]
    fn test_summary_radial_peak_1s() {
        let chain = metropolis_sampling_seeded(1, 0, 0, 100_000, 1.0, 1.0, 77).unwrap();
        let summary = ChainSummary::from_chain(&chain);
        let peak = summary.radial_peak.unwrap();
        assert!((0.5..=1.6).contains(&peak), "radial peak at {peak}");
    }
}
