/// Clause currently being parsed. Clauses only move forward.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub enum Phase {
    #[default]
    Projection = 0,
    Collections = 1,
    Criteria = 2,
    Aggregates = 3,
    Having = 4,
    OrderBy = 5,
    LimitAndOffset = 6,
    Options = 7,
    EOF = 8,
}
