use std::{collections::HashSet, fmt};

use serde::{Deserialize, Serialize};

use crate::context::Expression;

/// Bound used by range predicates for an open end.
pub const UNBOUNDED: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PredicateType {
    Eq,
    NotEq,
    In,
    NotIn,
    Range,
    RegexpLike,
    TextMatch,
    JsonMatch,
    IsNull,
    IsNotNull,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Predicate {
    Eq { lhs: Expression, value: String },
    NotEq { lhs: Expression, value: String },
    In { lhs: Expression, values: Vec<String> },
    NotIn { lhs: Expression, values: Vec<String> },
    Range {
        lhs: Expression,
        lower_inclusive: bool,
        lower: String,
        upper_inclusive: bool,
        upper: String,
    },
    RegexpLike { lhs: Expression, pattern: String },
    TextMatch { lhs: Expression, query: String },
    JsonMatch { lhs: Expression, filter: String },
    IsNull { lhs: Expression },
    IsNotNull { lhs: Expression },
}

impl Predicate {
    pub fn range(lhs: Expression, lower_inclusive: bool, lower: &str, upper_inclusive: bool, upper: &str) -> Self {
        Predicate::Range {
            lhs,
            lower_inclusive,
            lower: lower.to_string(),
            upper_inclusive,
            upper: upper.to_string(),
        }
    }

    pub fn lhs(&self) -> &Expression {
        match self {
            Predicate::Eq { lhs, .. }
            | Predicate::NotEq { lhs, .. }
            | Predicate::In { lhs, .. }
            | Predicate::NotIn { lhs, .. }
            | Predicate::Range { lhs, .. }
            | Predicate::RegexpLike { lhs, .. }
            | Predicate::TextMatch { lhs, .. }
            | Predicate::JsonMatch { lhs, .. }
            | Predicate::IsNull { lhs }
            | Predicate::IsNotNull { lhs } => lhs,
        }
    }

    pub fn predicate_type(&self) -> PredicateType {
        match self {
            Predicate::Eq { .. } => PredicateType::Eq,
            Predicate::NotEq { .. } => PredicateType::NotEq,
            Predicate::In { .. } => PredicateType::In,
            Predicate::NotIn { .. } => PredicateType::NotIn,
            Predicate::Range { .. } => PredicateType::Range,
            Predicate::RegexpLike { .. } => PredicateType::RegexpLike,
            Predicate::TextMatch { .. } => PredicateType::TextMatch,
            Predicate::JsonMatch { .. } => PredicateType::JsonMatch,
            Predicate::IsNull { .. } => PredicateType::IsNull,
            Predicate::IsNotNull { .. } => PredicateType::IsNotNull,
        }
    }

    pub fn collect_columns(&self, columns: &mut HashSet<String>) {
        self.lhs().collect_columns(columns);
    }
}

fn write_values(f: &mut fmt::Formatter<'_>, values: &[String]) -> fmt::Result {
    f.write_str("(")?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "'{}'", value)?;
    }
    f.write_str(")")
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Eq { lhs, value } => write!(f, "{} = '{}'", lhs, value),
            Predicate::NotEq { lhs, value } => write!(f, "{} != '{}'", lhs, value),
            Predicate::In { lhs, values } => {
                write!(f, "{} IN ", lhs)?;
                write_values(f, values)
            }
            Predicate::NotIn { lhs, values } => {
                write!(f, "{} NOT IN ", lhs)?;
                write_values(f, values)
            }
            Predicate::Range { lhs, lower_inclusive, lower, upper_inclusive, upper } => write!(
                f,
                "{} IN RANGE {}{},{}{}",
                lhs,
                if *lower_inclusive { '[' } else { '(' },
                lower,
                upper,
                if *upper_inclusive { ']' } else { ')' },
            ),
            Predicate::RegexpLike { lhs, pattern } => write!(f, "regexp_like({},'{}')", lhs, pattern),
            Predicate::TextMatch { lhs, query } => write!(f, "{} TEXT_MATCH '{}'", lhs, query),
            Predicate::JsonMatch { lhs, filter } => write!(f, "json_match({},'{}')", lhs, filter),
            Predicate::IsNull { lhs } => write!(f, "{} IS NULL", lhs),
            Predicate::IsNotNull { lhs } => write!(f, "{} IS NOT NULL", lhs),
        }
    }
}
