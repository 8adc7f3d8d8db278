use crate::error::{CostError, Result};
use crate::fluent::Fluent;

use super::LearningStrategy;

/// Assigns one constant cost to every action the first time it is seen.
///
/// Later observations of the same action are ignored, which makes this the
/// baseline for comparing learned costs against uniform ones.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedCost {
    cost: f64,
}

impl FixedCost {
    pub const DEFAULT_COST: f64 = 1.0;

    pub fn new(cost: f64) -> Result<Self> {
        if !cost.is_finite() || cost < 0.0 {
            return Err(CostError::Config(format!(
                "fixed cost must be finite and non-negative, got {cost}"
            )));
        }
        Ok(Self { cost })
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }
}

impl Default for FixedCost {
    fn default() -> Self {
        Self {
            cost: Self::DEFAULT_COST,
        }
    }
}

impl LearningStrategy for FixedCost {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn update(&mut self, _fluent: &Fluent, current: Option<f64>, _sample: f64) -> Option<f64> {
        match current {
            Some(_) => None,
            None => Some(self.cost),
        }
    }
}
