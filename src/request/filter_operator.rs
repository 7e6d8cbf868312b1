#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOperator {
    And,
    Or,
    Not,
    Equals,
    NotEquals,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Between,
    In,
    NotIn,
    RegexpLike,
    TextMatch,
    JsonMatch,
    IsNull,
    IsNotNull,
}

const ALL: [FilterOperator; 17] = [
    FilterOperator::And,
    FilterOperator::Or,
    FilterOperator::Not,
    FilterOperator::Equals,
    FilterOperator::NotEquals,
    FilterOperator::GreaterThan,
    FilterOperator::GreaterThanOrEqual,
    FilterOperator::LessThan,
    FilterOperator::LessThanOrEqual,
    FilterOperator::Between,
    FilterOperator::In,
    FilterOperator::NotIn,
    FilterOperator::RegexpLike,
    FilterOperator::TextMatch,
    FilterOperator::JsonMatch,
    FilterOperator::IsNull,
    FilterOperator::IsNotNull,
];

impl FilterOperator {
    pub fn name(&self) -> &'static str {
        match self {
            FilterOperator::And => "AND",
            FilterOperator::Or => "OR",
            FilterOperator::Not => "NOT",
            FilterOperator::Equals => "EQUALS",
            FilterOperator::NotEquals => "NOT_EQUALS",
            FilterOperator::GreaterThan => "GREATER_THAN",
            FilterOperator::GreaterThanOrEqual => "GREATER_THAN_OR_EQUAL",
            FilterOperator::LessThan => "LESS_THAN",
            FilterOperator::LessThanOrEqual => "LESS_THAN_OR_EQUAL",
            FilterOperator::Between => "BETWEEN",
            FilterOperator::In => "IN",
            FilterOperator::NotIn => "NOT_IN",
            FilterOperator::RegexpLike => "REGEXP_LIKE",
            FilterOperator::TextMatch => "TEXT_MATCH",
            FilterOperator::JsonMatch => "JSON_MATCH",
            FilterOperator::IsNull => "IS_NULL",
            FilterOperator::IsNotNull => "IS_NOT_NULL",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ALL.iter().copied().find(|op| op.name().eq_ignore_ascii_case(name))
    }

    /// Operator seen from the other side: `5 < foo` is `foo > 5`.
    pub fn flipped(&self) -> Self {
        match self {
            FilterOperator::GreaterThan => FilterOperator::LessThan,
            FilterOperator::GreaterThanOrEqual => FilterOperator::LessThanOrEqual,
            FilterOperator::LessThan => FilterOperator::GreaterThan,
            FilterOperator::LessThanOrEqual => FilterOperator::GreaterThanOrEqual,
            other => *other,
        }
    }
}
