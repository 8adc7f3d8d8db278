//! Ordered mapping from ground actions to learned costs.

use std::collections::BTreeMap;

use crate::error::{CostError, Result};
use crate::fluent::Fluent;

/// Learned cost per ground action.
///
/// Entries are kept in [`Fluent`] order. Every action name has a single
/// parameter arity: the first insertion for a name fixes it and later
/// insertions with a different arity are rejected. Action names must be Lua
/// identifiers, since each one names a function in the cost script.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CostTable {
    costs: BTreeMap<Fluent, f64>,
    arities: BTreeMap<String, usize>,
}

impl CostTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the cost for `fluent`.
    ///
    /// Returns the previous cost, if any.
    pub fn insert(&mut self, fluent: Fluent, cost: f64) -> Result<Option<f64>> {
        if !is_lua_identifier(fluent.name()) {
            return Err(CostError::InvalidFluent(format!(
                "action name '{}' is not a Lua identifier",
                fluent.name()
            )));
        }

        match self.arities.get(fluent.name()) {
            Some(&expected) if expected != fluent.arity() => {
                return Err(CostError::ArityMismatch {
                    name: fluent.name().to_string(),
                    expected,
                    found: fluent.arity(),
                });
            }
            Some(_) => {}
            None => {
                self.arities.insert(fluent.name().to_string(), fluent.arity());
            }
        }

        Ok(self.costs.insert(fluent, cost))
    }

    /// Exact-match lookup.
    pub fn get(&self, fluent: &Fluent) -> Option<f64> {
        self.costs.get(fluent).copied()
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&Fluent, f64)> + '_ {
        self.costs.iter().map(|(fluent, cost)| (fluent, *cost))
    }

    /// Distinct action names in sorted order.
    pub fn action_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.arities.keys().map(String::as_str)
    }

    /// Parameter arity recorded for `name`.
    pub fn arity(&self, name: &str) -> Option<usize> {
        self.arities.get(name).copied()
    }

    /// All fluents sharing the action name `name`, in key order.
    pub fn fluents_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Fluent> + 'a {
        let start = Fluent::new(name, Vec::<String>::new());
        self.costs
            .range(start..)
            .map(|(fluent, _)| fluent)
            .take_while(move |fluent| fluent.name() == name)
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`. Appending `_cost` never yields a Lua keyword.
fn is_lua_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
