//! Parallel ensemble runner using rayon.

use std::sync::atomic::AtomicBool;

use rayon::prelude::*;

use crate::simulation::engine::{PathEngine, SimulationError};
use crate::types::{Ensemble, ModelParams, RunConfig, SimulationPath};

/// Reject a configuration the simulator cannot run.
///
/// Validation happens before any simulation work so a bad configuration can
/// never produce a partial ensemble.
pub fn validate(config: &RunConfig, params: &ModelParams) -> Result<(), SimulationError> {
    if config.num_runs == 0 {
        return Err(SimulationError::InvalidParameter(
            "num_runs must be positive".to_string(),
        ));
    }
    if config.periods == 0 {
        return Err(SimulationError::InvalidParameter(
            "periods must be positive".to_string(),
        ));
    }
    if params.sigma_f < 0.0 {
        return Err(SimulationError::InvalidParameter(format!(
            "sigma_f must be non-negative, got {}",
            params.sigma_f
        )));
    }
    if params.sigma_c < 0.0 {
        return Err(SimulationError::InvalidParameter(format!(
            "sigma_c must be non-negative, got {}",
            params.sigma_c
        )));
    }
    Ok(())
}

/// Run the full ensemble in parallel.
pub fn run_ensemble(
    config: &RunConfig,
    params: &ModelParams,
    n_workers: Option<usize>,
) -> Result<Ensemble, SimulationError> {
    run_ensemble_with_cancel(config, params, n_workers, &AtomicBool::new(false))
}

/// Run the full ensemble in parallel with a cooperative cancellation flag.
///
/// Each of the `num_runs` paths is an independent unit of work: path `i`
/// gets its own PCG stream seeded `seed + i`, so the output is bit-identical
/// regardless of worker count or scheduling order. When the flag is raised
/// the whole run fails with `Cancelled` and partial results are discarded.
pub fn run_ensemble_with_cancel(
    config: &RunConfig,
    params: &ModelParams,
    n_workers: Option<usize>,
    cancel: &AtomicBool,
) -> Result<Ensemble, SimulationError> {
    validate(config, params)?;

    let seed = config.seed.unwrap_or_else(rand::random);

    // Bounded pool so a huge num_runs cannot oversubscribe the host
    let n_workers = n_workers.unwrap_or_else(|| rayon::current_num_threads().min(8));
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(n_workers)
        .build()
        .map_err(|e| SimulationError::ThreadPool(e.to_string()))?;

    let engine = PathEngine::new(config, params);

    let paths: Result<Vec<SimulationPath>, SimulationError> = pool.install(|| {
        (0..config.num_runs)
            .into_par_iter()
            .map(|run| engine.run(seed.wrapping_add(run as u64), cancel))
            .collect()
    });

    let paths = paths?;
    Ok(Ensemble::from_paths(seed, config.periods as usize, &paths))
}
