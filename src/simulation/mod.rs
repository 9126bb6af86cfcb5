//! Simulation engine and parallel runner.

pub mod engine;
pub mod runner;

pub use engine::{PathEngine, SimulationError};
pub use runner::{run_ensemble, run_ensemble_with_cancel};
