use std::fmt;

/// Literal exactly as a front-end lexed it. Numbers and booleans keep their
/// source text (`1.0`, `007`, `TRUE`); string literals keep their
/// doubled-quote escapes and the converter collapses them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RawLiteral {
    String(String),
    Number(String),
    Bool(String),
}

impl RawLiteral {
    pub fn text(&self) -> &str {
        match self {
            RawLiteral::String(text) | RawLiteral::Number(text) | RawLiteral::Bool(text) => text,
        }
    }

    /// Integer value of a number literal written without fraction or exponent.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            RawLiteral::Number(text) => text.parse::<i64>().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for RawLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Node shape shared by both front-ends. Filters are calls whose operator is
/// one of the [`FilterOperator`](crate::request::FilterOperator) names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RawExpr {
    Identifier(String),
    Literal(RawLiteral),
    Function { operator: String, operands: Vec<RawExpr> },
}

impl RawExpr {
    pub fn identifier(name: &str) -> Self {
        RawExpr::Identifier(name.to_string())
    }

    pub fn string(value: &str) -> Self {
        RawExpr::Literal(RawLiteral::String(value.to_string()))
    }

    pub fn number(text: &str) -> Self {
        RawExpr::Literal(RawLiteral::Number(text.to_string()))
    }

    pub fn long(value: i64) -> Self {
        RawExpr::Literal(RawLiteral::Number(value.to_string()))
    }

    pub fn call(operator: &str, operands: Vec<RawExpr>) -> Self {
        RawExpr::Function { operator: operator.to_string(), operands }
    }

    pub fn function_name(&self) -> Option<&str> {
        match self {
            RawExpr::Function { operator, .. } => Some(operator),
            _ => None,
        }
    }
}

impl fmt::Display for RawExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawExpr::Identifier(name) => f.write_str(name),
            RawExpr::Literal(RawLiteral::String(s)) => write!(f, "'{}'", s),
            RawExpr::Literal(literal) => write!(f, "{}", literal),
            RawExpr::Function { operator, operands } => {
                write!(f, "{}(", operator)?;
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", operand)?;
                }
                f.write_str(")")
            }
        }
    }
}
