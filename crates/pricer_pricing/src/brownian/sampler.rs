//! Random walk sampling.

use tracing::debug;

use super::path::BrownianPath;
use crate::rng::PricerRng;

/// Distribution of the unit increment ε.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Increments {
    /// ε = +1 if a uniform draw exceeds 0.5, otherwise −1
    #[default]
    Rademacher,
    /// ε ~ N(0, 1)
    Gaussian,
}

impl Increments {
    /// Fills `buffer` with unit increments ε.
    fn fill(self, rng: &mut PricerRng, buffer: &mut [f64]) {
        match self {
            Increments::Rademacher => {
                for value in buffer.iter_mut() {
                    *value = rng.gen_sign();
                }
            }
            Increments::Gaussian => rng.fill_normal(buffer),
        }
    }

    /// Short human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Increments::Rademacher => "rademacher",
            Increments::Gaussian => "gaussian",
        }
    }
}

/// `n` evenly spaced points from `start` to `end`, both ends included.
///
/// `n = 1` yields `[start]`; `n = 0` yields an empty grid.
///
/// ```rust
/// use pricer_pricing::brownian::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(linspace(0.0, 1.0, 1), vec![0.0]);
/// assert!(linspace(0.0, 1.0, 0).is_empty());
/// ```
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|k| if k == n - 1 { end } else { start + step * k as f64 })
                .collect()
        }
    }
}

/// Samples one path of `step_count` points on [0, 1].
///
/// y[0] = 0 and y[k] = y[k−1] + ε_k·√(1/n) for k = 1..n.
pub fn sample_path(step_count: usize, rng: &mut PricerRng, increments: Increments) -> BrownianPath {
    let times = linspace(0.0, 1.0, step_count);
    let mut values = vec![0.0; step_count];

    if step_count > 1 {
        let scale = (1.0 / step_count as f64).sqrt();
        increments.fill(rng, &mut values[1..]);
        let mut level = 0.0;
        for value in values[1..].iter_mut() {
            level += *value * scale;
            *value = level;
        }
    }

    debug!(
        step_count,
        increments = increments.name(),
        "sampled Brownian path"
    );

    BrownianPath::new(step_count, times, values)
}

/// Samples one independent path per entry of `step_counts`, drawing from
/// `rng` in order.
pub fn sample_paths(step_counts: &[usize], rng: &mut PricerRng, increments: Increments) -> Vec<BrownianPath> {
    step_counts
        .iter()
        .map(|&step_count| sample_path(step_count, rng, increments))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace_endpoints() {
        let grid = linspace(0.0, 1.0, 1000);
        assert_eq!(grid.len(), 1000);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[999], 1.0);
        assert_relative_eq!(grid[1] - grid[0], 1.0 / 999.0, epsilon = 1e-15);
    }

    #[test]
    fn test_path_shape() {
        let mut rng = PricerRng::from_seed(42);
        for n in [2, 10, 25, 1000] {
            let path = sample_path(n, &mut rng, Increments::Rademacher);
            assert_eq!(path.len(), n);
            assert_eq!(path.times().len(), n);
            assert_eq!(path.values()[0], 0.0);
            assert_eq!(path.times()[0], 0.0);
            assert_eq!(path.times()[n - 1], 1.0);
        }
    }

    #[test]
    fn test_rademacher_steps_have_fixed_size() {
        let mut rng = PricerRng::from_seed(7);
        let n = 25;
        let path = sample_path(n, &mut rng, Increments::Rademacher);
        let scale = (1.0 / n as f64).sqrt();
        for w in path.values().windows(2) {
            assert_relative_eq!((w[1] - w[0]).abs(), scale, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_gaussian_steps_vary() {
        let mut rng = PricerRng::from_seed(7);
        let path = sample_path(100, &mut rng, Increments::Gaussian);
        let steps: Vec<f64> = path.values().windows(2).map(|w| w[1] - w[0]).collect();
        assert!(steps.iter().any(|s| (s.abs() - 0.1).abs() > 1e-6));
    }

    #[test]
    fn test_gaussian_path_matches_normal_draws() {
        let n = 50;
        let path = sample_path(n, &mut PricerRng::from_seed(11), Increments::Gaussian);

        let mut draws = vec![0.0; n - 1];
        PricerRng::from_seed(11).fill_normal(&mut draws);
        let scale = (1.0 / n as f64).sqrt();

        let mut level = 0.0;
        for (k, draw) in draws.iter().enumerate() {
            level += draw * scale;
            assert_relative_eq!(path.values()[k + 1], level, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_degenerate_step_counts() {
        let mut rng = PricerRng::from_seed(1);
        let empty = sample_path(0, &mut rng, Increments::Rademacher);
        assert!(empty.is_empty());
        assert!(empty.times().is_empty());

        let single = sample_path(1, &mut rng, Increments::Rademacher);
        assert_eq!(single.times(), &[0.0]);
        assert_eq!(single.values(), &[0.0]);
    }

    #[test]
    fn test_seed_reproducibility() {
        let a = sample_paths(&[10, 25, 1000], &mut PricerRng::from_seed(99), Increments::Rademacher);
        let b = sample_paths(&[10, 25, 1000], &mut PricerRng::from_seed(99), Increments::Rademacher);
        assert_eq!(a, b);

        let c = sample_paths(&[10, 25, 1000], &mut PricerRng::from_seed(100), Increments::Rademacher);
        assert_ne!(a, c);
    }

    #[test]
    fn test_paths_follow_input_order() {
        let mut rng = PricerRng::from_seed(3);
        let paths = sample_paths(&[1000, 10, 25], &mut rng, Increments::Gaussian);
        let counts: Vec<usize> = paths.iter().map(|p| p.step_count()).collect();
        assert_eq!(counts, vec![1000, 10, 25]);
    }
}
