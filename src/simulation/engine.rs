//! Single-path simulation engine.

use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;

use crate::model::{AgentDemand, PopulationSwitch, StrategyFitness};
use crate::types::{ModelParams, RunConfig, SimulationPath};

/// How often a running path polls the cancellation flag.
const CANCEL_POLL_INTERVAL: u32 = 1024;

/// Error type for simulation.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("simulation cancelled")]
    Cancelled,

    #[error("failed to create thread pool: {0}")]
    ThreadPool(String),
}

/// Runs the per-path recurrence of the two-population model.
///
/// Each step:
/// 1. Draw fundamentalist and chartist demand at the current price.
/// 2. Aggregate excess demand weighted by the population split and move the
///    price by `mu` times that demand.
/// 3. Credit last step's demands with the realized price change (EWMA
///    fitness), compute attractiveness, and update the chartist fraction
///    under the configured switching rule.
///
/// Price is never clamped; a diverging parameter set produces diverging
/// output the caller can inspect.
pub struct PathEngine<'a> {
    config: &'a RunConfig,
    params: &'a ModelParams,
}

impl<'a> PathEngine<'a> {
    pub fn new(config: &'a RunConfig, params: &'a ModelParams) -> Self {
        Self { config, params }
    }

    /// Run one sample path with its own seeded noise stream.
    pub fn run(
        &self,
        path_seed: u64,
        cancel: &AtomicBool,
    ) -> Result<SimulationPath, SimulationError> {
        let periods = self.config.periods as usize;
        let target = self.config.target();
        let mu = self.config.mu;

        let mut demand = AgentDemand::new(self.params, path_seed);
        let mut fitness = StrategyFitness::new(self.params.eta);
        let switch = PopulationSwitch::new(self.config, self.params);

        let mut prices = Vec::with_capacity(periods);
        let mut fractions = Vec::with_capacity(periods);

        // Price starts at the fundamental target; the trend term is zero at
        // the first step because prev_price starts equal to price.
        let mut price = target;
        let mut prev_price = price;
        let mut n = 0.5;
        let mut prev_demand_f = 0.0;
        let mut prev_demand_c = 0.0;

        for t in 0..self.config.periods {
            if t % CANCEL_POLL_INTERVAL == 0 && cancel.load(Ordering::Relaxed) {
                return Err(SimulationError::Cancelled);
            }

            let demand_f = demand.fundamentalist(price, target);
            let demand_c = demand.chartist(price, prev_price);

            let excess = n * demand_c + (1.0 - n) * demand_f;
            let next_price = price + mu * excess;

            fitness.update(prev_demand_f, prev_demand_c, next_price - price);
            let delta = switch.attractiveness(fitness.spread(), next_price);
            n = switch.update(n, delta);

            prices.push(next_price);
            fractions.push(n);

            prev_price = price;
            price = next_price;
            prev_demand_f = demand_f;
            prev_demand_c = demand_c;
        }

        Ok(SimulationPath {
            prices,
            chartist_fraction: fractions,
        })
    }
}
