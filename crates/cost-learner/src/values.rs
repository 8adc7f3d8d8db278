//! YAML values file: the human-editable persisted form of a [`CostTable`].
//!
//! # File Format
//!
//! A sequence of records, one per table entry:
//!
//! ```text
//!  - name: goto
//!    cost: 2.4
//!    vars: [roomA]
//! ```
//!
//! Parameter tokens are written bare, so `load(save(table)) == table` holds
//! for tokens that YAML reads back as plain strings, such as identifiers.
//! Costs keep full `f64` precision, unlike the rounded values in the Lua
//! cost script.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{CostError, Result};
use crate::fluent::Fluent;
use crate::output::{WriteMode, write_file};
use crate::table::CostTable;

/// One record of a values file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValueRecord {
    pub name: String,
    pub cost: f64,
    pub vars: Vec<String>,
}

impl ValueRecord {
    pub fn fluent(&self) -> Fluent {
        Fluent::new(self.name.as_str(), self.vars.iter().map(String::as_str))
    }
}

/// Parses values file contents. A blank document is an empty record list.
pub fn parse_values(content: &str, path: &Path) -> Result<Vec<ValueRecord>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_yaml::from_str(content).map_err(|e| CostError::parse(path, e))
}

/// Loads a values file into `table`, overwriting costs for keys it names.
///
/// The load is all-or-nothing: records are applied to a copy of the table,
/// and `table` is only replaced once every record has been accepted.
/// Returns the number of records read.
pub fn load_values(path: &Path, table: &mut CostTable) -> Result<usize> {
    let content = fs::read_to_string(path).map_err(|e| CostError::io(path, e))?;
    let records = parse_values(&content, path)?;

    let mut staged = table.clone();
    for record in &records {
        staged.insert(record.fluent(), record.cost)?;
    }
    *table = staged;

    tracing::info!(
        "Loaded {} cost records from {} ({} entries in table)",
        records.len(),
        path.display(),
        table.len()
    );

    Ok(records.len())
}

/// Renders `table` in values file format, in key order.
pub fn render_values(table: &CostTable) -> String {
    if table.is_empty() {
        return "[]\n".to_string();
    }

    let mut out = String::new();
    for (fluent, cost) in table.iter() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, " - name: {}", fluent.name());
        let _ = writeln!(out, "   cost: {}", format_cost(cost));
        let _ = writeln!(out, "   vars: [{}]", fluent.params().join(", "));
    }
    out
}

/// Writes `table` to `path`, replacing the file if it exists.
pub fn save_values(table: &CostTable, path: &Path, mode: WriteMode) -> Result<()> {
    write_file(path, &render_values(table), mode)?;
    tracing::info!("Saved {} cost records to {}", table.len(), path.display());
    Ok(())
}

/// Shortest representation that reads back as the same `f64`.
fn format_cost(cost: f64) -> String {
    if cost.is_nan() {
        ".nan".to_string()
    } else if cost.is_infinite() {
        let literal = if cost > 0.0 { ".inf" } else { "-.inf" };
        literal.to_string()
    } else {
        format!("{cost:?}")
    }
}
