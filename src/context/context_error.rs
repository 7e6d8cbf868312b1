use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("query must select at least one expression")]
    EmptySelectList,
    #[error("limit must be non-negative, got {0}")]
    NegativeLimit(i64),
    #[error("offset must be non-negative, got {0}")]
    NegativeOffset(i64),
    #[error("HAVING clause requires a GROUP BY clause")]
    HavingWithoutGroupBy,
    #[error("{operator} filter requires at least 2 children, got {children}")]
    DegenerateBooleanFilter { operator: &'static str, children: usize },
    #[error("alias '{alias}' is still referenced in {clause} after alias substitution")]
    UnresolvedAlias { alias: String, clause: &'static str },
}
