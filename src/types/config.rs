//! Run and model parameter records.

use pyo3::prelude::*;

/// Switching-probability rule governing the population update.
#[pyclass(eq, eq_int)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbType {
    /// Discrete Choice Approximation: smooth logistic map on attractiveness.
    #[pyo3(name = "DCA")]
    Dca,
    /// Transition Probability Approximation: per-agent switching
    /// probabilities aggregated as a large-population expectation.
    #[pyo3(name = "TPA")]
    Tpa,
}

/// Global configuration for one ensemble run.
#[pyclass]
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Number of independent sample paths
    #[pyo3(get, set)]
    pub num_runs: u32,

    /// Number of discrete time steps per path
    #[pyo3(get, set)]
    pub periods: u32,

    /// Switching rule (DCA or TPA)
    #[pyo3(get, set)]
    pub prob_type: ProbType,

    /// Exogenous mean-reversion target for price (None = no reversion)
    #[pyo3(get, set)]
    pub rvmean: Option<f64>,

    /// Market depth / price impact factor (the "ml" slider)
    #[pyo3(get, set)]
    pub mu: f64,

    /// Switching intensity (the "ss" slider)
    #[pyo3(get, set)]
    pub beta: f64,

    /// Random seed for reproducibility (None = random)
    #[pyo3(get, set)]
    pub seed: Option<u64>,
}

#[pymethods]
impl RunConfig {
    #[new]
    #[pyo3(signature = (
        num_runs,
        periods,
        prob_type,
        rvmean = None,
        mu = 1.0,
        beta = 1.0,
        seed = None
    ))]
    pub fn new(
        num_runs: u32,
        periods: u32,
        prob_type: ProbType,
        rvmean: Option<f64>,
        mu: f64,
        beta: f64,
        seed: Option<u64>,
    ) -> Self {
        Self {
            num_runs,
            periods,
            prob_type,
            rvmean,
            mu,
            beta,
            seed,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "RunConfig(num_runs={}, periods={}, prob_type={:?}, rvmean={:?}, seed={:?})",
            self.num_runs, self.periods, self.prob_type, self.rvmean, self.seed
        )
    }
}

impl RunConfig {
    /// Fundamental price level the model reverts to.
    ///
    /// Price also starts here, so a run without mean reversion starts at 0.
    #[inline]
    pub fn target(&self) -> f64 {
        self.rvmean.unwrap_or(0.0)
    }
}

/// Franke-Westerhoff model parameters.
///
/// The dashboard sends 0 for any field the user left blank, so every field
/// defaults to 0.0 rather than being optional.
#[pyclass]
#[derive(Debug, Clone)]
pub struct ModelParams {
    /// Fundamentalist demand sensitivity to price misalignment
    #[pyo3(get, set)]
    pub phi: f64,

    /// Chartist demand sensitivity to the price trend
    #[pyo3(get, set)]
    pub chi: f64,

    /// Memory decay for performance-based fitness (EWMA)
    #[pyo3(get, set)]
    pub eta: f64,

    /// Weight on relative past performance in switching attractiveness
    #[pyo3(get, set)]
    pub alpha_w: f64,

    /// Fixed predisposition term in switching attractiveness
    #[pyo3(get, set)]
    pub alpha_o: f64,

    /// Aversion strength to large price misalignment
    #[pyo3(get, set)]
    pub alpha_p: f64,

    /// Fundamentalist demand noise standard deviation
    #[pyo3(get, set)]
    pub sigma_f: f64,

    /// Chartist demand noise standard deviation
    #[pyo3(get, set)]
    pub sigma_c: f64,
}

#[pymethods]
impl ModelParams {
    #[new]
    #[pyo3(signature = (
        phi = 0.0,
        chi = 0.0,
        eta = 0.0,
        alpha_w = 0.0,
        alpha_o = 0.0,
        alpha_p = 0.0,
        sigma_f = 0.0,
        sigma_c = 0.0
    ))]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        phi: f64,
        chi: f64,
        eta: f64,
        alpha_w: f64,
        alpha_o: f64,
        alpha_p: f64,
        sigma_f: f64,
        sigma_c: f64,
    ) -> Self {
        Self {
            phi,
            chi,
            eta,
            alpha_w,
            alpha_o,
            alpha_p,
            sigma_f,
            sigma_c,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "ModelParams(phi={}, chi={}, eta={}, alpha_w={}, alpha_o={}, alpha_p={}, sigma_f={}, sigma_c={})",
            self.phi,
            self.chi,
            self.eta,
            self.alpha_w,
            self.alpha_o,
            self.alpha_p,
            self.sigma_f,
            self.sigma_c
        )
    }
}

impl Default for ModelParams {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0)
    }
}
