//! The two-population market model: agent demand, fitness, and switching.

pub mod demand;
pub mod fitness;
pub mod switching;

pub use demand::AgentDemand;
pub use fitness::StrategyFitness;
pub use switching::PopulationSwitch;
