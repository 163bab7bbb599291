//! Pseudo-random number generator wrapper.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Seeded pseudo-random number generator.
///
/// The same seed always yields the same sequence of draws.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::PricerRng;
///
/// let mut rng1 = PricerRng::from_seed(12345);
/// let mut rng2 = PricerRng::from_seed(12345);
/// assert_eq!(rng1.gen_uniform(), rng2.gen_uniform());
/// assert_eq!(rng1.seed(), 12345);
/// ```
#[derive(Clone, Debug)]
pub struct PricerRng {
    inner: StdRng,
    seed: u64,
}

impl PricerRng {
    /// Generator initialised from `seed`.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Generator with a seed drawn from the thread-local entropy source.
    ///
    /// The drawn seed is available through [`seed`](Self::seed) so the run
    /// can be reproduced later.
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    /// Seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform draw in [0, 1).
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Standard normal draw (Ziggurat, via `rand_distr`).
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// +1.0 when a uniform draw exceeds 0.5, otherwise −1.0.
    #[inline]
    pub fn gen_sign(&mut self) -> f64 {
        if self.gen_uniform() > 0.5 {
            1.0
        } else {
            -1.0
        }
    }

    /// Fills `buffer` with standard normal draws.
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.gen_normal();
        }
    }
}
