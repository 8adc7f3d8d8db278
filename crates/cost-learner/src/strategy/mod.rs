//! Learning strategies that fold observed execution costs into the table.
//!
//! A [`LearningStrategy`] decides what cost a fluent should carry after a new
//! observation. The strategy is chosen when the [`CostLearner`] is built:
//!
//! - [`FixedCost`]: every action seen gets one configured cost
//! - [`MovingAverage`]: exponential moving average of observations
//! - [`Reinforcement`]: optimistic prior, step size decaying with visits
//!
//! [`CostLearner`]: crate::CostLearner

mod fixed;
mod moving_average;
mod reinforcement;

use std::fmt;

pub use fixed::FixedCost;
pub use moving_average::MovingAverage;
pub use reinforcement::Reinforcement;

use crate::fluent::Fluent;

/// Update rule applied by [`CostLearner::add_sample`](crate::CostLearner::add_sample).
pub trait LearningStrategy: Send + Sync + fmt::Debug {
    /// Short identifier used in logs and configuration.
    fn name(&self) -> &'static str;

    /// Returns the new cost for `fluent`, or `None` to leave the table as is.
    ///
    /// `current` is the cost stored before this observation, if any. `sample`
    /// is always finite and non-negative.
    fn update(&mut self, fluent: &Fluent, current: Option<f64>, sample: f64) -> Option<f64>;
}
