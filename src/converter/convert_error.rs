use thiserror::Error;

use crate::context::ContextError;

/// Every error here is deterministic: the same request fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("unsupported filter operator '{operator}' in {node}")]
    UnsupportedFilterOperator { operator: String, node: String },
    #[error("expected a filter but found '{node}'")]
    UnexpectedFilterNode { node: String },
    #[error("filter operator '{operator}' used as an expression in {node}")]
    FilterInExpression { operator: String, node: String },
    #[error("{operator} expects {expected} operand(s), got {got} in {node}")]
    InvalidOperandCount { operator: &'static str, expected: &'static str, got: usize, node: String },
    #[error("{operator} expects a literal value but found '{operand}' in {node}")]
    NonLiteralOperand { operator: &'static str, operand: String, node: String },
    #[error("alias '{0}' is declared more than once")]
    DuplicateAlias(String),
    #[error(transparent)]
    Context(#[from] ContextError),
}
