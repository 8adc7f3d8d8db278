//! Lua cost script generation.
//!
//! The ASP solver evaluates action costs by calling one Lua function per
//! action name. For every action in the [`CostTable`] this module emits
//! `<action>_cost(v0, v1, ...)`, a nested dispatch over the parameter
//! positions that returns the learned cost (rounded to an integer) for the
//! exact combination, or [`DEFAULT_COST`] for anything never observed.
//!
//! Only values observed at each position get a branch. Combinations built
//! from observed values but never observed together still get a leaf; it
//! returns the default and carries a comment marking it unreachable.
//!
//! ```text
//! #begin_lua
//!
//! function goto_cost(v0)
//!     local s0 = tostring(v0)
//!     if s0 == "roomA" then return 2 end
//!     if s0 == "roomB" then return 5 end
//!     return 1 -- default for any action not seen previously
//! end
//!
//! #end_lua.
//! ```

mod emit;
mod profile;

use std::fmt::{self, Write};
use std::path::Path;

pub use profile::ValueProfile;

use crate::error::Result;
use crate::output::{WriteMode, write_file};
use crate::table::CostTable;

/// Cost returned for combinations absent from the table.
pub const DEFAULT_COST: i64 = 1;

/// Opening marker of an embedded Lua block.
pub const SCRIPT_BEGIN: &str = "#begin_lua";

/// Closing marker of an embedded Lua block.
pub const SCRIPT_END: &str = "#end_lua.";

const INDENT: &str = "\t";

/// Totals over all procedures of a generated script.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    /// One per distinct action name.
    pub procedures: usize,
    /// Leaf branches, each returning a cost.
    pub branches: usize,
    /// Leaves for combinations absent from the table.
    pub unobserved: usize,
}

/// Lua function name for `action`.
pub fn procedure_name(action: &str) -> String {
    format!("{action}_cost")
}

/// Writes the full script for `table` into `out`.
pub fn write_script<W: Write>(
    table: &CostTable,
    out: &mut W,
) -> std::result::Result<ScriptSummary, fmt::Error> {
    writeln!(out, "{SCRIPT_BEGIN}")?;
    writeln!(out)?;

    let mut summary = ScriptSummary::default();
    for name in table.action_names() {
        let stats = emit::emit_procedure(out, table, name)?;
        writeln!(out)?;

        summary.procedures += 1;
        summary.branches += stats.branches;
        summary.unobserved += stats.unobserved;
    }

    writeln!(out, "{SCRIPT_END}")?;
    Ok(summary)
}

/// Renders the script for `table` into a string.
pub fn render_script(table: &CostTable) -> (String, ScriptSummary) {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let summary = write_script(table, &mut out).unwrap_or_default();
    (out, summary)
}

/// Generates the script for `table` and writes it to `path`.
pub fn save_script(table: &CostTable, path: &Path, mode: WriteMode) -> Result<ScriptSummary> {
    let (script, summary) = render_script(table);
    write_file(path, &script, mode)?;

    tracing::info!(
        "Wrote cost script {} ({} procedures, {} branches, {} unobserved combinations)",
        path.display(),
        summary.procedures,
        summary.branches,
        summary.unobserved
    );

    Ok(summary)
}
