//! Simulation result types.

use pyo3::prelude::*;

/// One simulated sample path.
#[pyclass]
#[derive(Debug, Clone)]
pub struct SimulationPath {
    /// Log price at each step
    #[pyo3(get)]
    pub prices: Vec<f64>,

    /// Chartist population fraction at each step, in [0, 1]
    #[pyo3(get)]
    pub chartist_fraction: Vec<f64>,
}

#[pymethods]
impl SimulationPath {
    fn __len__(&self) -> usize {
        self.prices.len()
    }

    fn __repr__(&self) -> String {
        format!("SimulationPath(periods={})", self.prices.len())
    }
}

/// Ensemble of sample paths from one invocation of the simulator.
///
/// Both channels are time-major with shape `(periods, num_runs)`: the outer
/// index is the time step, the inner index is the run. Index `i` refers to
/// the same sample path in both channels, which the dashboard relies on when
/// it selects runs by index (e.g. the top-5 most volatile paths).
#[pyclass]
#[derive(Debug, Clone)]
pub struct Ensemble {
    /// Seed actually used for this run
    #[pyo3(get)]
    pub seed: u64,

    /// Price-derived signal, shape (periods, num_runs)
    #[pyo3(get)]
    pub exog_signal: Vec<Vec<f64>>,

    /// Chartist fraction, shape (periods, num_runs)
    #[pyo3(get, name = "Nc")]
    pub nc: Vec<Vec<f64>>,
}

impl Ensemble {
    /// Assemble an ensemble from run-major paths, transposing to time-major.
    ///
    /// Every path must have exactly `periods` entries.
    pub fn from_paths(seed: u64, periods: usize, paths: &[SimulationPath]) -> Self {
        let num_runs = paths.len();
        let mut exog_signal = vec![vec![0.0; num_runs]; periods];
        let mut nc = vec![vec![0.0; num_runs]; periods];

        for (run, path) in paths.iter().enumerate() {
            for t in 0..periods {
                exog_signal[t][run] = path.prices[t];
                nc[t][run] = path.chartist_fraction[t];
            }
        }

        Self {
            seed,
            exog_signal,
            nc,
        }
    }
}

#[pymethods]
impl Ensemble {
    /// Shape of both channels: (periods, num_runs).
    pub fn shape(&self) -> (usize, usize) {
        let periods = self.exog_signal.len();
        let num_runs = self.exog_signal.first().map_or(0, |row| row.len());
        (periods, num_runs)
    }

    /// Run indices whose price series contains a non-finite value.
    ///
    /// Divergent paths are passed through unmodified rather than clamped;
    /// this is how a caller tells them apart from healthy ones.
    pub fn divergent_runs(&self) -> Vec<usize> {
        let (_, num_runs) = self.shape();
        (0..num_runs)
            .filter(|&run| self.exog_signal.iter().any(|row| !row[run].is_finite()))
            .collect()
    }

    fn __repr__(&self) -> String {
        let (periods, num_runs) = self.shape();
        format!(
            "Ensemble(seed={}, periods={}, num_runs={})",
            self.seed, periods, num_runs
        )
    }

    fn __len__(&self) -> usize {
        self.shape().1
    }
}
