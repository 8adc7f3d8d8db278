//! Learned execution costs for ground planner actions.
//!
//! This crate keeps a table of costs per ground action ([`Fluent`]) and
//! exports it for an ASP planning toolchain in two forms:
//! - a YAML values file, the human-editable record of the table
//! - a Lua cost script, one `<action>_cost` function per action name that
//!   the solver calls while optimizing plans
//!
//! Modules are organized by responsibility:
//! - [`fluent`] and [`table`] hold the data model
//! - [`values`] reads and writes values files
//! - [`script`] generates the Lua cost script
//! - [`strategy`] provides the update rules behind [`CostLearner::add_sample`]
//! - [`learner`] owns a table plus a strategy and wires the exports together
//! - [`config`] builds a learner from the environment or a TOML file
pub mod config;
pub mod error;
pub mod fluent;
pub mod learner;
pub mod output;
pub mod script;
pub mod strategy;
pub mod table;
pub mod values;

pub use config::{LearnerConfig, StrategyConfig};
pub use error::{CostError, Result};
pub use fluent::Fluent;
pub use learner::CostLearner;
pub use output::WriteMode;
pub use script::{DEFAULT_COST, ScriptSummary, ValueProfile, render_script, save_script};
pub use strategy::{FixedCost, LearningStrategy, MovingAverage, Reinforcement};
pub use table::CostTable;
pub use values::{ValueRecord, load_values, render_values, save_values};
