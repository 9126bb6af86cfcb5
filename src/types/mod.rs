//! Core types for the simulation engine.

pub mod config;
pub mod result;

pub use config::{ModelParams, ProbType, RunConfig};
pub use result::{Ensemble, SimulationPath};
