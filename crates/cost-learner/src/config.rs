//! Learner configuration from the environment or a TOML file.

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{CostError, Result};
use crate::output::WriteMode;
use crate::strategy::{FixedCost, LearningStrategy, MovingAverage, Reinforcement};

/// Which learning strategy to build, with its parameters.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum StrategyConfig {
    Fixed {
        #[serde(default = "default_fixed_cost")]
        cost: f64,
    },
    MovingAverage {
        #[serde(default = "default_alpha")]
        alpha: f64,
    },
    Reinforcement {
        #[serde(default = "default_initial_cost")]
        initial_cost: f64,
        #[serde(default = "default_learning_rate")]
        learning_rate: f64,
    },
}

impl StrategyConfig {
    /// Builds the configured strategy, validating its parameters.
    pub fn build(&self) -> Result<Box<dyn LearningStrategy>> {
        let strategy: Box<dyn LearningStrategy> = match *self {
            Self::Fixed { cost } => Box::new(FixedCost::new(cost)?),
            Self::MovingAverage { alpha } => Box::new(MovingAverage::new(alpha)?),
            Self::Reinforcement {
                initial_cost,
                learning_rate,
            } => Box::new(Reinforcement::new(initial_cost, learning_rate)?),
        };
        Ok(strategy)
    }
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self::MovingAverage {
            alpha: MovingAverage::DEFAULT_ALPHA,
        }
    }
}

/// Configuration for a [`CostLearner`](crate::CostLearner).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LearnerConfig {
    pub strategy: StrategyConfig,
    /// Write exported files through a temporary file and rename.
    pub atomic_writes: bool,
}

impl Default for LearnerConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyConfig::default(),
            atomic_writes: true,
        }
    }
}

impl LearnerConfig {
    pub fn write_mode(&self) -> WriteMode {
        WriteMode::from_atomic(self.atomic_writes)
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `COST_LEARNER_STRATEGY` - `fixed`, `moving-average` or `reinforcement` (default: moving-average)
    /// - `COST_LEARNER_FIXED_COST` - Cost assigned by the fixed strategy (default: 1.0)
    /// - `COST_LEARNER_ALPHA` - Moving average weight of new samples (default: 0.5)
    /// - `COST_LEARNER_INITIAL_COST` - Reinforcement prior (default: 1.0)
    /// - `COST_LEARNER_LEARNING_RATE` - Reinforcement minimum step (default: 0.1)
    /// - `COST_LEARNER_ATOMIC_WRITES` - Write via temp file and rename (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        match env::var("COST_LEARNER_STRATEGY").ok().as_deref() {
            Some("fixed") => {
                config.strategy = StrategyConfig::Fixed {
                    cost: read_env("COST_LEARNER_FIXED_COST").unwrap_or_else(default_fixed_cost),
                };
            }
            Some("moving-average") | None => {
                config.strategy = StrategyConfig::MovingAverage {
                    alpha: read_env("COST_LEARNER_ALPHA").unwrap_or_else(default_alpha),
                };
            }
            Some("reinforcement") => {
                config.strategy = StrategyConfig::Reinforcement {
                    initial_cost: read_env("COST_LEARNER_INITIAL_COST")
                        .unwrap_or_else(default_initial_cost),
                    learning_rate: read_env("COST_LEARNER_LEARNING_RATE")
                        .unwrap_or_else(default_learning_rate),
                };
            }
            Some(other) => {
                tracing::warn!(
                    "Unknown COST_LEARNER_STRATEGY '{}', using {:?}",
                    other,
                    config.strategy
                );
            }
        }

        if let Some(atomic) = read_env::<bool>("COST_LEARNER_ATOMIC_WRITES") {
            config.atomic_writes = atomic;
        }

        config
    }

    /// Load configuration from a TOML file.
    ///
    /// ```toml
    /// atomic_writes = false
    ///
    /// [strategy]
    /// kind = "reinforcement"
    /// learning_rate = 0.2
    /// ```
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| CostError::io(path, e))?;
        toml::from_str(&content).map_err(|e| CostError::parse(path, e))
    }
}

fn default_fixed_cost() -> f64 {
    FixedCost::DEFAULT_COST
}

fn default_alpha() -> f64 {
    MovingAverage::DEFAULT_ALPHA
}

fn default_initial_cost() -> f64 {
    Reinforcement::DEFAULT_INITIAL_COST
}

fn default_learning_rate() -> f64 {
    Reinforcement::DEFAULT_LEARNING_RATE
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = LearnerConfig::default();
        assert_eq!(config.strategy, StrategyConfig::MovingAverage { alpha: 0.5 });
        assert_eq!(config.write_mode(), WriteMode::Atomic);
        assert_eq!(config.strategy.build().unwrap().name(), "moving-average");
    }

    #[test]
    fn test_load_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("learner.toml");
        fs::write(
            &path,
            "atomic_writes = false\n\n[strategy]\nkind = \"reinforcement\"\nlearning_rate = 0.2\n",
        )
        .unwrap();

        let config = LearnerConfig::load(&path).unwrap();
        assert_eq!(config.write_mode(), WriteMode::Direct);
        assert_eq!(
            config.strategy,
            StrategyConfig::Reinforcement {
                initial_cost: 1.0,
                learning_rate: 0.2
            }
        );
        assert_eq!(config.strategy.build().unwrap().name(), "reinforcement");
    }

    #[test]
    fn test_load_partial_toml_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("learner.toml");
        fs::write(&path, "[strategy]\nkind = \"fixed\"\n").unwrap();

        let config = LearnerConfig::load(&path).unwrap();
        assert!(config.atomic_writes);
        assert_eq!(config.strategy, StrategyConfig::Fixed { cost: 1.0 });
    }

    #[test]
    fn test_load_rejects_unknown_kind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("learner.toml");
        fs::write(&path, "[strategy]\nkind = \"bandit\"\n").unwrap();

        assert!(matches!(
            LearnerConfig::load(&path),
            Err(CostError::Parse { .. })
        ));
    }

    #[test]
    fn test_build_validates_parameters() {
        let config = StrategyConfig::MovingAverage { alpha: 2.0 };
        assert!(matches!(config.build(), Err(CostError::Config(_))));
    }
}
