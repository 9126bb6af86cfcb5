//! Franke-Westerhoff Market Simulation Engine in Rust
//!
//! Computational kernel for the Franke-Westerhoff explorer dashboard.
//! The Python UI hands over run and model parameter records; the engine
//! evolves price and chartist-fraction state for an ensemble of independent
//! stochastic paths in parallel and returns the aligned `exog_signal` / `Nc`
//! channels the dashboard plots.

pub mod model;
pub mod simulation;
pub mod types;

use std::sync::atomic::AtomicBool;

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::simulation::engine::{PathEngine, SimulationError};
use crate::simulation::runner;
use crate::types::{Ensemble, ModelParams, ProbType, RunConfig, SimulationPath};

fn to_py_err(e: SimulationError) -> PyErr {
    match e {
        SimulationError::InvalidParameter(_) => PyValueError::new_err(e.to_string()),
        _ => PyRuntimeError::new_err(e.to_string()),
    }
}

/// Run the full ensemble in parallel using the Rust engine.
///
/// # Arguments
/// * `config` - Global run configuration (paths, periods, switching rule)
/// * `params` - Franke-Westerhoff model parameters
/// * `n_workers` - Number of parallel workers (0 = auto-detect)
///
/// # Returns
/// Ensemble with `exog_signal` and `Nc` channels of shape (periods, num_runs)
#[pyfunction]
#[pyo3(signature = (config, params, n_workers = 0))]
fn run_ensemble(
    config: RunConfig,
    params: ModelParams,
    n_workers: usize,
) -> PyResult<Ensemble> {
    let n_workers = if n_workers == 0 { None } else { Some(n_workers) };
    runner::run_ensemble(&config, &params, n_workers).map_err(to_py_err)
}

/// Run a single sample path and return its series.
#[pyfunction]
#[pyo3(signature = (config, params, path_index = 0))]
fn run_path(config: RunConfig, params: ModelParams, path_index: u32) -> PyResult<SimulationPath> {
    runner::validate(&config, &params).map_err(to_py_err)?;

    let seed = config.seed.unwrap_or_else(rand::random);
    PathEngine::new(&config, &params)
        .run(seed.wrapping_add(path_index as u64), &AtomicBool::new(false))
        .map_err(to_py_err)
}

/// Python module definition
#[pymodule]
fn fw_sim_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(run_ensemble, m)?)?;
    m.add_function(wrap_pyfunction!(run_path, m)?)?;
    m.add_class::<ProbType>()?;
    m.add_class::<RunConfig>()?;
    m.add_class::<ModelParams>()?;
    m.add_class::<Ensemble>()?;
    m.add_class::<SimulationPath>()?;
    Ok(())
}
