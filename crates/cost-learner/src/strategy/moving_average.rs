use crate::error::{CostError, Result};
use crate::fluent::Fluent;

use super::LearningStrategy;

/// Exponential moving average over observed costs.
///
/// The first observation is stored as-is; each later one moves the stored
/// cost by `alpha` of the difference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MovingAverage {
    alpha: f64,
}

impl MovingAverage {
    pub const DEFAULT_ALPHA: f64 = 0.5;

    /// `alpha` must lie in `(0, 1]`; `1` keeps only the latest observation.
    pub fn new(alpha: f64) -> Result<Self> {
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(CostError::Config(format!(
                "moving average alpha must be in (0, 1], got {alpha}"
            )));
        }
        Ok(Self { alpha })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Default for MovingAverage {
    fn default() -> Self {
        Self {
            alpha: Self::DEFAULT_ALPHA,
        }
    }
}

impl LearningStrategy for MovingAverage {
    fn name(&self) -> &'static str {
        "moving-average"
    }

    fn update(&mut self, _fluent: &Fluent, current: Option<f64>, sample: f64) -> Option<f64> {
        Some(match current {
            Some(old) => old + self.alpha * (sample - old),
            None => sample,
        })
    }
}
