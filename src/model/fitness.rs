//! Exponentially weighted strategy fitness.

/// Tracks realized performance of each strategy with EWMA memory.
///
/// `A_t = eta * A_{t-1} + (1 - eta) * profit_t`, where the realized profit
/// of a strategy is the demand it submitted last step times the price change
/// that demand earned.
#[derive(Debug, Clone)]
pub struct StrategyFitness {
    eta: f64,
    fundamentalist: f64,
    chartist: f64,
}

impl StrategyFitness {
    pub fn new(eta: f64) -> Self {
        Self {
            eta,
            fundamentalist: 0.0,
            chartist: 0.0,
        }
    }

    /// Credit the previous step's demands with the resulting price change.
    #[inline]
    pub fn update(&mut self, prev_demand_f: f64, prev_demand_c: f64, price_change: f64) {
        self.fundamentalist =
            self.eta * self.fundamentalist + (1.0 - self.eta) * prev_demand_f * price_change;
        self.chartist =
            self.eta * self.chartist + (1.0 - self.eta) * prev_demand_c * price_change;
    }

    /// Chartist fitness minus fundamentalist fitness.
    #[inline]
    pub fn spread(&self) -> f64 {
        self.chartist - self.fundamentalist
    }
}
