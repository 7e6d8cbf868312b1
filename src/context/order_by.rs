use std::fmt;

use serde::{Deserialize, Serialize};

use crate::context::Expression;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderByExpression {
    expression: Expression,
    ascending: bool,
}

impl OrderByExpression {
    pub fn new(expression: Expression, ascending: bool) -> Self {
        Self { expression, ascending }
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn is_asc(&self) -> bool {
        self.ascending
    }
}

impl fmt::Display for OrderByExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.expression, if self.ascending { "ASC" } else { "DESC" })
    }
}
