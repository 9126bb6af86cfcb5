//! Population switching between the two strategies.

use crate::types::{ModelParams, ProbType, RunConfig};

/// Updates the chartist population fraction from strategy attractiveness.
///
/// Attractiveness of chartism relative to fundamentalism:
/// `delta = alpha_w * (A_c - A_f) + alpha_o + alpha_p * penalty`, where the
/// penalty is `-(p - target)^2` when a mean-reversion target is configured.
/// Misalignment therefore pushes agents toward the fundamentalist strategy;
/// without a target the penalty channel is exactly zero, whatever `alpha_p`.
#[derive(Debug, Clone)]
pub struct PopulationSwitch {
    prob_type: ProbType,
    beta: f64,
    alpha_w: f64,
    alpha_o: f64,
    alpha_p: f64,
    rvmean: Option<f64>,
}

impl PopulationSwitch {
    pub fn new(config: &RunConfig, params: &ModelParams) -> Self {
        Self {
            prob_type: config.prob_type,
            beta: config.beta,
            alpha_w: params.alpha_w,
            alpha_o: params.alpha_o,
            alpha_p: params.alpha_p,
            rvmean: config.rvmean,
        }
    }

    /// Relative attractiveness of the chartist strategy.
    #[inline]
    pub fn attractiveness(&self, fitness_spread: f64, price: f64) -> f64 {
        let penalty = match self.rvmean {
            Some(target) => {
                let misalignment = price - target;
                -(misalignment * misalignment)
            }
            None => 0.0,
        };
        self.alpha_w * fitness_spread + self.alpha_o + self.alpha_p * penalty
    }

    /// Next chartist fraction given the current one and the attractiveness.
    ///
    /// Both rules keep the fraction in [0, 1]: DCA by the logistic form,
    /// TPA by clamping the expectation update.
    #[inline]
    pub fn update(&self, n: f64, delta: f64) -> f64 {
        match self.prob_type {
            ProbType::Dca => 1.0 / (1.0 + (-2.0 * self.beta * delta).exp()),
            ProbType::Tpa => {
                // Per-agent switching probabilities, aggregated as the
                // expectation over a large population.
                let p_fc = (self.beta * delta.exp()).min(1.0);
                let p_cf = (self.beta * (-delta).exp()).min(1.0);
                (n + (1.0 - n) * p_fc - n * p_cf).clamp(0.0, 1.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn switch(prob_type: ProbType, beta: f64, rvmean: Option<f64>) -> PopulationSwitch {
        let config = RunConfig::new(1, 1, prob_type, rvmean, 1.0, beta, None);
        let params = ModelParams {
            alpha_w: 2.0,
            alpha_o: 0.5,
            alpha_p: 1.0,
            ..ModelParams::default()
        };
        PopulationSwitch::new(&config, &params)
    }

    #[test]
    fn test_penalty_zero_without_target() {
        let s = switch(ProbType::Dca, 1.0, None);
        // Only alpha_w * spread + alpha_o survives
        assert_eq!(s.attractiveness(1.0, 100.0), 2.5);
    }

    #[test]
    fn test_penalty_grows_with_misalignment() {
        let s = switch(ProbType::Dca, 1.0, Some(5.0));
        let near = s.attractiveness(0.0, 5.5);
        let far = s.attractiveness(0.0, 8.0);
        assert!(far < near);
        assert_eq!(s.attractiveness(0.0, 5.0), 0.5);
    }

    #[test]
    fn test_dca_neutral_at_zero_delta() {
        let s = switch(ProbType::Dca, 1.0, None);
        assert_eq!(s.update(0.2, 0.0), 0.5);
    }

    #[test]
    fn test_dca_bounds_and_monotone() {
        let s = switch(ProbType::Dca, 1.0, None);
        let mut prev = 0.0;
        for i in -50..=50 {
            let n = s.update(0.5, i as f64 / 5.0);
            assert!((0.0..=1.0).contains(&n));
            assert!(n >= prev);
            prev = n;
        }
        // Sharpness saturates for extreme attractiveness
        assert!(s.update(0.5, 20.0) > 0.999);
        assert!(s.update(0.5, -20.0) < 0.001);
    }

    #[test]
    fn test_tpa_neutral_at_zero_delta() {
        let s = switch(ProbType::Tpa, 0.3, None);
        // p_fc == p_cf, flows balance at n = 0.5
        let n = s.update(0.5, 0.0);
        assert!((n - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_tpa_stays_in_unit_interval() {
        let s = switch(ProbType::Tpa, 2.0, None);
        for &n in &[0.0, 0.25, 0.5, 0.75, 1.0] {
            for i in -40..=40 {
                let next = s.update(n, i as f64 / 4.0);
                assert!((0.0..=1.0).contains(&next), "n={n} next={next}");
            }
        }
    }

    #[test]
    fn test_tpa_flows_toward_attractive_strategy() {
        let s = switch(ProbType::Tpa, 0.1, None);
        assert!(s.update(0.5, 1.0) > 0.5);
        assert!(s.update(0.5, -1.0) < 0.5);
    }
}
