use std::collections::HashMap;

use crate::error::{CostError, Result};
use crate::fluent::Fluent;

use super::LearningStrategy;

/// Incremental value update starting from an optimistic prior.
///
/// An unseen action starts at `initial_cost`, which counts as one pseudo
/// observation. Visit `n` moves the estimate toward the sample with step
/// `max(learning_rate, 1 / (n + 1))`: a plain sample average at first, then
/// a constant step that keeps tracking drifting costs.
#[derive(Clone, Debug, PartialEq)]
pub struct Reinforcement {
    initial_cost: f64,
    learning_rate: f64,
    visits: HashMap<Fluent, u32>,
}

impl Reinforcement {
    pub const DEFAULT_INITIAL_COST: f64 = 1.0;
    pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

    pub fn new(initial_cost: f64, learning_rate: f64) -> Result<Self> {
        if !initial_cost.is_finite() || initial_cost < 0.0 {
            return Err(CostError::Config(format!(
                "initial cost must be finite and non-negative, got {initial_cost}"
            )));
        }
        if !(learning_rate > 0.0 && learning_rate <= 1.0) {
            return Err(CostError::Config(format!(
                "learning rate must be in (0, 1], got {learning_rate}"
            )));
        }
        Ok(Self {
            initial_cost,
            learning_rate,
            visits: HashMap::new(),
        })
    }

    /// Observations folded in for `fluent` so far.
    pub fn visits(&self, fluent: &Fluent) -> u32 {
        self.visits.get(fluent).copied().unwrap_or(0)
    }
}

impl Default for Reinforcement {
    fn default() -> Self {
        Self {
            initial_cost: Self::DEFAULT_INITIAL_COST,
            learning_rate: Self::DEFAULT_LEARNING_RATE,
            visits: HashMap::new(),
        }
    }
}

impl LearningStrategy for Reinforcement {
    fn name(&self) -> &'static str {
        "reinforcement"
    }

    fn update(&mut self, fluent: &Fluent, current: Option<f64>, sample: f64) -> Option<f64> {
        let visits = self.visits.entry(fluent.clone()).or_insert(0);
        *visits = visits.saturating_add(1);

        let step = self.learning_rate.max(1.0 / (f64::from(*visits) + 1.0));
        let estimate = current.unwrap_or(self.initial_cost);
        Some(estimate + step * (sample - estimate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_average_then_constant_step() {
        let mut strategy = Reinforcement::new(0.0, 0.25).unwrap();
        let fluent = Fluent::new("goto", ["roomA"]);

        // Prior 0 and sample 10 average to 5.
        let v1 = strategy.update(&fluent, None, 10.0).unwrap();
        assert_eq!(v1, 5.0);

        // Step 1/3: 5 + (8 - 5) / 3 = 6.
        let v2 = strategy.update(&fluent, Some(v1), 8.0).unwrap();
        assert!((v2 - 6.0).abs() < 1e-12);

        // Step max(0.25, 1/4) = 0.25.
        let v3 = strategy.update(&fluent, Some(v2), 10.0).unwrap();
        assert!((v3 - 7.0).abs() < 1e-12);

        // Step stays at the learning rate from here on.
        let v4 = strategy.update(&fluent, Some(v3), 11.0).unwrap();
        assert!((v4 - 8.0).abs() < 1e-12);
        assert_eq!(strategy.visits(&fluent), 4);
    }

    #[test]
    fn test_prior_counts_as_one_observation() {
        let fluent = Fluent::new("goto", ["roomA"]);

        let mut strategy = Reinforcement::new(0.0, 0.1).unwrap();
        assert_eq!(strategy.update(&fluent, None, 10.0), Some(5.0));

        // A cost already in the table replaces the configured prior.
        let mut strategy = Reinforcement::new(0.0, 0.1).unwrap();
        assert_eq!(strategy.update(&fluent, Some(20.0), 10.0), Some(15.0));
    }

    #[test]
    fn test_visits_are_per_fluent() {
        let mut strategy = Reinforcement::default();
        let a = Fluent::new("goto", ["roomA"]);
        let b = Fluent::new("goto", ["roomB"]);

        strategy.update(&a, None, 3.0);
        strategy.update(&a, Some(2.0), 3.0);
        strategy.update(&b, None, 3.0);

        assert_eq!(strategy.visits(&a), 2);
        assert_eq!(strategy.visits(&b), 1);
    }

    #[test]
    fn test_parameter_validation() {
        assert!(Reinforcement::new(-1.0, 0.1).is_err());
        assert!(Reinforcement::new(1.0, 0.0).is_err());
        assert!(Reinforcement::new(1.0, 1.1).is_err());
    }
}
