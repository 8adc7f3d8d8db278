//! The component that owns a cost table and its learning strategy.

use std::path::Path;

use crate::config::LearnerConfig;
use crate::error::Result;
use crate::fluent::Fluent;
use crate::output::WriteMode;
use crate::script::{self, ScriptSummary};
use crate::strategy::LearningStrategy;
use crate::table::CostTable;
use crate::values;

/// Learns action costs from execution samples and exports them.
///
/// The learner is the single writer of its [`CostTable`]. It is not
/// synchronized; callers that sample from several threads must wrap it in
/// their own lock.
#[derive(Debug)]
pub struct CostLearner {
    table: CostTable,
    strategy: Box<dyn LearningStrategy>,
    write_mode: WriteMode,
}

impl CostLearner {
    pub fn new(strategy: Box<dyn LearningStrategy>) -> Self {
        Self {
            table: CostTable::new(),
            strategy,
            write_mode: WriteMode::Atomic,
        }
    }

    pub fn from_config(config: &LearnerConfig) -> Result<Self> {
        let learner = Self::new(config.strategy.build()?).with_write_mode(config.write_mode());
        tracing::debug!(
            "Cost learner configured: strategy={}, write_mode={:?}",
            learner.strategy.name(),
            learner.write_mode
        );
        Ok(learner)
    }

    #[must_use]
    pub fn with_write_mode(mut self, mode: WriteMode) -> Self {
        self.write_mode = mode;
        self
    }

    pub fn table(&self) -> &CostTable {
        &self.table
    }

    pub fn cost(&self, fluent: &Fluent) -> Option<f64> {
        self.table.get(fluent)
    }

    pub fn strategy(&self) -> &dyn LearningStrategy {
        self.strategy.as_ref()
    }

    /// Folds one observed execution cost into the table.
    ///
    /// Returns `true` if the table changed. Non-finite or negative samples,
    /// samples the strategy declines, and fluents whose arity conflicts with
    /// the table are rejected.
    pub fn add_sample(&mut self, fluent: &Fluent, cost: f64) -> bool {
        if !cost.is_finite() || cost < 0.0 {
            tracing::warn!("Rejected cost sample {} for {}", cost, fluent);
            return false;
        }

        let current = self.table.get(fluent);
        let Some(updated) = self.strategy.update(fluent, current, cost) else {
            tracing::debug!("{} strategy ignored sample for {}", self.strategy.name(), fluent);
            return false;
        };

        match self.table.insert(fluent.clone(), updated) {
            Ok(_) => {
                tracing::debug!(
                    "Updated cost of {}: {:?} -> {} (sample {})",
                    fluent,
                    current,
                    updated,
                    cost
                );
                true
            }
            Err(e) => {
                tracing::warn!("Rejected cost sample for {}: {}", fluent, e);
                false
            }
        }
    }

    /// Loads a YAML values file into the table. See [`values::load_values`].
    pub fn initialize_costs_from_values_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        values::load_values(path.as_ref(), &mut self.table)
    }

    /// Writes the table as a YAML values file.
    pub fn write_values_file(&self, path: impl AsRef<Path>) -> Result<()> {
        values::save_values(&self.table, path.as_ref(), self.write_mode)
    }

    /// Writes the Lua cost script for the ASP solver.
    pub fn write_lua_file(&self, path: impl AsRef<Path>) -> Result<ScriptSummary> {
        script::save_script(&self.table, path.as_ref(), self.write_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{FixedCost, MovingAverage};

    #[test]
    fn test_add_sample_applies_strategy() {
        let mut learner = CostLearner::new(Box::new(MovingAverage::new(0.5).unwrap()));
        let fluent = Fluent::new("goto", ["roomA"]);

        assert!(learner.add_sample(&fluent, 4.0));
        assert!(learner.add_sample(&fluent, 8.0));
        assert_eq!(learner.cost(&fluent), Some(6.0));
    }

    #[test]
    fn test_add_sample_rejections() {
        let mut learner = CostLearner::new(Box::new(FixedCost::default()));
        let fluent = Fluent::new("goto", ["roomA"]);

        assert!(!learner.add_sample(&fluent, f64::NAN));
        assert!(!learner.add_sample(&fluent, -3.0));
        assert!(learner.table().is_empty());

        assert!(learner.add_sample(&fluent, 9.0));
        assert!(!learner.add_sample(&fluent, 9.0));
        assert_eq!(learner.cost(&fluent), Some(1.0));

        let wrong_arity = Fluent::new("goto", ["roomA", "2"]);
        assert!(!learner.add_sample(&wrong_arity, 2.0));
        assert_eq!(learner.table().len(), 1);
    }

    #[test]
    fn test_from_config() {
        let config = LearnerConfig {
            atomic_writes: false,
            ..LearnerConfig::default()
        };
        let learner = CostLearner::from_config(&config).unwrap();

        assert_eq!(learner.strategy().name(), "moving-average");
        assert_eq!(learner.write_mode, WriteMode::Direct);
    }
}
