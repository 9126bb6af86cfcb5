//! Agent demand with per-path Gaussian noise.

use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};
use rand_pcg::Pcg64;

use crate::types::ModelParams;

/// Generates fundamentalist and chartist excess demand for one sample path.
///
/// Fundamentalists trade against misalignment: `-phi * (p - target)`.
/// Chartists extrapolate the last price change: `chi * (p - p_prev)`.
/// Both demands carry i.i.d. Gaussian noise; one PCG stream per path serves
/// both channels, so draws are independent across channels and across paths.
pub struct AgentDemand {
    phi: f64,
    chi: f64,
    sigma_f: f64,
    sigma_c: f64,
    /// Random number generator
    rng: Pcg64,
}

impl AgentDemand {
    /// Create a demand source for one path.
    pub fn new(params: &ModelParams, seed: u64) -> Self {
        Self {
            phi: params.phi,
            chi: params.chi,
            sigma_f: params.sigma_f,
            sigma_c: params.sigma_c,
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    /// Fundamentalist excess demand at the current price.
    #[inline]
    pub fn fundamentalist(&mut self, price: f64, target: f64) -> f64 {
        let z: f64 = StandardNormal.sample(&mut self.rng);
        -self.phi * (price - target) + self.sigma_f * z
    }

    /// Chartist excess demand given the last price change.
    #[inline]
    pub fn chartist(&mut self, price: f64, prev_price: f64) -> f64 {
        let z: f64 = StandardNormal.sample(&mut self.rng);
        self.chi * (price - prev_price) + self.sigma_c * z
    }
}
