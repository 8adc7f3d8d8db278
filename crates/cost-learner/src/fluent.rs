//! Ground action identity used as the cost table key.

use std::fmt;
use std::str::FromStr;

use crate::error::CostError;

/// An action name plus its ordered parameter values.
///
/// Ordering is lexicographic on the name, then on the parameter sequence.
/// The cost table iterates in this order, so it also fixes the order of
/// records in values files and of branches in generated scripts.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fluent {
    name: String,
    params: Vec<String>,
}

impl Fluent {
    pub fn new<N, I, P>(name: N, params: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            name: name.into(),
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl fmt::Display for Fluent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.params.is_empty() {
            write!(f, "({})", self.params.join(","))?;
        }
        Ok(())
    }
}

/// Parses the planner's textual form, e.g. `goto(l3_414,1)` or `noop`.
impl FromStr for Fluent {
    type Err = CostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || CostError::InvalidFluent(s.to_string());

        let (name, params) = match s.split_once('(') {
            None => (s, Vec::new()),
            Some((name, rest)) => {
                let inner = rest.strip_suffix(')').ok_or_else(invalid)?;
                let params = if inner.trim().is_empty() {
                    Vec::new()
                } else {
                    inner
                        .split(',')
                        .map(|p| {
                            let p = p.trim();
                            if p.is_empty() || p.contains(['(', ')']) {
                                Err(invalid())
                            } else {
                                Ok(p.to_string())
                            }
                        })
                        .collect::<Result<Vec<_>, _>>()?
                };
                (name.trim(), params)
            }
        };

        if name.is_empty() || name.contains(char::is_whitespace) || name.contains(')') {
            return Err(invalid());
        }

        Ok(Self::new(name, params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_name_then_params() {
        let mut fluents = vec![
            Fluent::new("goto", ["roomB"]),
            Fluent::new("approach", ["d3_414"]),
            Fluent::new("goto", ["roomA"]),
        ];
        fluents.sort();

        assert_eq!(fluents[0].name(), "approach");
        assert_eq!(fluents[1].params(), ["roomA"]);
        assert_eq!(fluents[2].params(), ["roomB"]);
    }

    #[test]
    fn test_equality_requires_full_parameter_match() {
        assert_eq!(Fluent::new("goto", ["a", "b"]), Fluent::new("goto", ["a", "b"]));
        assert_ne!(Fluent::new("goto", ["a", "b"]), Fluent::new("goto", ["b", "a"]));
        assert_ne!(Fluent::new("goto", ["a"]), Fluent::new("goto", ["a", "b"]));
    }

    #[test]
    fn test_display_and_parse() {
        let fluent: Fluent = "approach(d3_414, 1)".parse().unwrap();
        assert_eq!(fluent, Fluent::new("approach", ["d3_414", "1"]));
        assert_eq!(fluent.to_string(), "approach(d3_414,1)");

        let noop: Fluent = "noop".parse().unwrap();
        assert_eq!(noop.arity(), 0);
        assert_eq!(noop.to_string(), "noop");
        assert_eq!("noop()".parse::<Fluent>().unwrap(), noop);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["", "goto(a", "goto(a,,b)", "(a)", "go to(a)", "f(g(a))"] {
            assert!(
                matches!(input.parse::<Fluent>(), Err(CostError::InvalidFluent(_))),
                "expected {input:?} to be rejected"
            );
        }
    }
}
