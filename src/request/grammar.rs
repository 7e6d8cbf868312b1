use std::fmt;

use serde::{Deserialize, Serialize};

/// Front-end grammar a request was compiled from. Only the parsers branch
/// on it; conversion is grammar-agnostic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grammar {
    /// Legacy query language.
    Pql,
    #[default]
    Sql,
}

impl Grammar {
    pub fn supports_alias(&self) -> bool {
        matches!(self, Grammar::Sql)
    }

    pub fn supports_having(&self) -> bool {
        matches!(self, Grammar::Sql)
    }

    pub fn supports_top(&self) -> bool {
        matches!(self, Grammar::Pql)
    }

    /// `SELECT DISTINCT a, b` rather than `SELECT DISTINCT(a, b)`.
    pub fn distinct_is_keyword(&self) -> bool {
        matches!(self, Grammar::Sql)
    }

    /// Double-quoted text is an identifier in SQL and a string literal in PQL.
    pub fn double_quote_is_identifier(&self) -> bool {
        matches!(self, Grammar::Sql)
    }

    /// PQL folds `a AND b AND c` into one node, SQL nests binary nodes.
    pub fn flattens_boolean_chains(&self) -> bool {
        matches!(self, Grammar::Pql)
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grammar::Pql => f.write_str("PQL"),
            Grammar::Sql => f.write_str("SQL"),
        }
    }
}
