//! Per-position value sets observed for one action name.

use std::collections::BTreeSet;

use crate::table::CostTable;

/// Distinct parameter values seen at each position of an action.
///
/// Built only from values that actually occur in the table, so branch
/// generation never enumerates a parameter domain.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValueProfile {
    positions: Vec<BTreeSet<String>>,
}

impl ValueProfile {
    /// Scans every fluent named `name` in `table`.
    pub fn build(table: &CostTable, name: &str) -> Self {
        let arity = table.arity(name).unwrap_or(0);
        let mut positions = vec![BTreeSet::new(); arity];

        for fluent in table.fluents_named(name) {
            for (set, value) in positions.iter_mut().zip(fluent.params()) {
                if !set.contains(value) {
                    set.insert(value.clone());
                }
            }
        }

        Self { positions }
    }

    pub fn arity(&self) -> usize {
        self.positions.len()
    }

    /// Sorted values observed at `position`.
    pub fn values(&self, position: usize) -> impl Iterator<Item = &str> + '_ {
        self.positions
            .get(position)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Number of leaf branches the nested dispatch will contain.
    pub fn combinations(&self) -> usize {
        if self.positions.is_empty() {
            return 0;
        }
        self.positions.iter().map(BTreeSet::len).product()
    }
}
