//! Recursive emission of one `<action>_cost` procedure.

use std::fmt::{self, Write};

use super::profile::ValueProfile;
use super::{DEFAULT_COST, INDENT};
use crate::fluent::Fluent;
use crate::table::CostTable;

/// Branch counts for one emitted procedure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct ProcedureStats {
    pub branches: usize,
    pub unobserved: usize,
}

pub(crate) fn emit_procedure<W: Write>(
    out: &mut W,
    table: &CostTable,
    name: &str,
) -> Result<ProcedureStats, fmt::Error> {
    let profile = ValueProfile::build(table, name);
    let arity = profile.arity();
    let args = (0..arity)
        .map(|i| format!("v{i}"))
        .collect::<Vec<_>>()
        .join(", ");

    writeln!(out, "function {}({args})", super::procedure_name(name))?;

    let mut stats = ProcedureStats::default();
    if arity == 0 {
        // A Lua block may not continue after `return`, so there is no default.
        let cost = table
            .get(&Fluent::new(name, Vec::<String>::new()))
            .map_or(DEFAULT_COST, round_cost);
        writeln!(out, "{INDENT}return {cost}")?;
        stats.branches = 1;
    } else {
        for i in 0..arity {
            writeln!(out, "{INDENT}local s{i} = tostring(v{i})")?;
        }

        stats.branches = profile.combinations();
        let mut fixed = Vec::with_capacity(arity);
        emit_branches(out, table, name, &profile, &mut fixed, &mut stats)?;

        writeln!(
            out,
            "{INDENT}return {DEFAULT_COST} -- default for any action not seen previously"
        )?;
    }
    writeln!(out, "end")?;

    Ok(stats)
}

/// Emits the branches for position `fixed.len()`, with every earlier
/// position pinned to the values in `fixed`.
fn emit_branches<'p, W: Write>(
    out: &mut W,
    table: &CostTable,
    name: &str,
    profile: &'p ValueProfile,
    fixed: &mut Vec<&'p str>,
    stats: &mut ProcedureStats,
) -> fmt::Result {
    let position = fixed.len();
    let indent = INDENT.repeat(position + 1);
    let last = position + 1 == profile.arity();

    for value in profile.values(position) {
        let literal = lua_string(value);
        fixed.push(value);

        if last {
            let fluent = Fluent::new(name, fixed.iter().copied());
            match table.get(&fluent) {
                Some(cost) => writeln!(
                    out,
                    "{indent}if s{position} == {literal} then return {} end",
                    round_cost(cost)
                )?,
                None => {
                    stats.unobserved += 1;
                    writeln!(
                        out,
                        "{indent}if s{position} == {literal} then return {DEFAULT_COST} end \
                         -- combination never observed, unreachable"
                    )?
                }
            }
        } else {
            writeln!(out, "{indent}if s{position} == {literal} then")?;
            emit_branches(out, table, name, profile, fixed, stats)?;
            writeln!(out, "{indent}end")?;
        }

        fixed.pop();
    }

    Ok(())
}

/// Rounds half away from zero. NaN maps to the default cost; infinities
/// saturate.
pub(crate) fn round_cost(cost: f64) -> i64 {
    if cost.is_nan() {
        DEFAULT_COST
    } else {
        cost.round() as i64
    }
}

/// Double-quoted Lua string literal.
pub(crate) fn lua_string(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '\\' => literal.push_str("\\\\"),
            '"' => literal.push_str("\\\""),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            c if c.is_ascii_control() => {
                let _ = write!(literal, "\\{:03}", c as u32);
            }
            c => literal.push(c),
        }
    }
    literal.push('"');
    literal
}
