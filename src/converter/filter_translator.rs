use crate::{
    context::{Expression, Filter, FunctionContext, Predicate, UNBOUNDED},
    converter::{AliasTable, ConvertError, ExpressionTranslator, literal_value},
    request::{FilterOperator, RawExpr},
};

/// Transform applied to both sides of a column-to-column comparison.
pub const MINUS: &str = "minus";

/// Maps a raw filter tree onto [`Filter`], one node per raw node.
pub struct FilterTranslator<'a> {
    expressions: &'a ExpressionTranslator<'a>,
    aliases: &'a AliasTable,
}

impl<'a> FilterTranslator<'a> {
    pub fn new(expressions: &'a ExpressionTranslator<'a>, aliases: &'a AliasTable) -> Self {
        Self { expressions, aliases }
    }

    /// Canonical expression for a raw operand, aliases substituted.
    pub fn expression(&self, raw: &RawExpr) -> Result<Expression, ConvertError> {
        Ok(self.aliases.substitute(self.expressions.translate(raw)?))
    }

    pub fn translate(&self, raw: &RawExpr) -> Result<Filter, ConvertError> {
        let RawExpr::Function { operator, operands } = raw else {
            return Err(ConvertError::UnexpectedFilterNode { node: raw.to_string() });
        };
        let Some(op) = FilterOperator::from_name(operator) else {
            return Err(ConvertError::UnsupportedFilterOperator { operator: operator.clone(), node: raw.to_string() });
        };

        match op {
            FilterOperator::And | FilterOperator::Or => {
                arity(op, operands, raw, operands.len() >= 2, "at least 2")?;
                let children = operands.iter().map(|o| self.translate(o)).collect::<Result<Vec<_>, _>>()?;
                let filter = if op == FilterOperator::And { Filter::and(children) } else { Filter::or(children) };
                Ok(filter?)
            }
            FilterOperator::Not => {
                arity(op, operands, raw, operands.len() == 1, "1")?;
                Ok(Filter::not(self.translate(&operands[0])?))
            }
            FilterOperator::Equals
            | FilterOperator::NotEquals
            | FilterOperator::GreaterThan
            | FilterOperator::GreaterThanOrEqual
            | FilterOperator::LessThan
            | FilterOperator::LessThanOrEqual => {
                arity(op, operands, raw, operands.len() == 2, "2")?;
                let (lhs, value, op) = self.comparison_sides(op, &operands[0], &operands[1], raw)?;
                let predicate = match op {
                    FilterOperator::Equals => Predicate::Eq { lhs, value },
                    FilterOperator::NotEquals => Predicate::NotEq { lhs, value },
                    FilterOperator::GreaterThan => Predicate::range(lhs, false, &value, false, UNBOUNDED),
                    FilterOperator::GreaterThanOrEqual => Predicate::range(lhs, true, &value, false, UNBOUNDED),
                    FilterOperator::LessThan => Predicate::range(lhs, false, UNBOUNDED, false, &value),
                    // LESS_THAN_OR_EQUAL
                    _ => Predicate::range(lhs, false, UNBOUNDED, true, &value),
                };
                Ok(Filter::predicate(predicate))
            }
            FilterOperator::Between => {
                arity(op, operands, raw, operands.len() == 3, "3")?;
                let lhs = self.expression(&operands[0])?;
                let lower = literal_operand(op, &operands[1], raw)?;
                let upper = literal_operand(op, &operands[2], raw)?;
                Ok(Filter::predicate(Predicate::range(lhs, true, &lower, true, &upper)))
            }
            FilterOperator::In | FilterOperator::NotIn => {
                arity(op, operands, raw, operands.len() >= 2, "at least 2")?;
                let lhs = self.expression(&operands[0])?;
                let values = operands[1..]
                    .iter()
                    .map(|o| literal_operand(op, o, raw))
                    .collect::<Result<Vec<_>, _>>()?;
                let predicate = if op == FilterOperator::In {
                    Predicate::In { lhs, values }
                } else {
                    Predicate::NotIn { lhs, values }
                };
                Ok(Filter::predicate(predicate))
            }
            FilterOperator::RegexpLike | FilterOperator::TextMatch | FilterOperator::JsonMatch => {
                arity(op, operands, raw, operands.len() == 2, "2")?;
                let lhs = self.expression(&operands[0])?;
                let text = literal_operand(op, &operands[1], raw)?;
                let predicate = match op {
                    FilterOperator::RegexpLike => Predicate::RegexpLike { lhs, pattern: text },
                    FilterOperator::TextMatch => Predicate::TextMatch { lhs, query: text },
                    _ => Predicate::JsonMatch { lhs, filter: text },
                };
                Ok(Filter::predicate(predicate))
            }
            FilterOperator::IsNull | FilterOperator::IsNotNull => {
                arity(op, operands, raw, operands.len() == 1, "1")?;
                let lhs = self.expression(&operands[0])?;
                let predicate = if op == FilterOperator::IsNull {
                    Predicate::IsNull { lhs }
                } else {
                    Predicate::IsNotNull { lhs }
                };
                Ok(Filter::predicate(predicate))
            }
        }
    }

    /// Normalizes a comparison so the column side is on the left and the
    /// value on the right. `expr op expr` becomes `minus(lhs,rhs) op 0`.
    fn comparison_sides(
        &self,
        op: FilterOperator,
        left: &RawExpr,
        right: &RawExpr,
        node: &RawExpr,
    ) -> Result<(Expression, String, FilterOperator), ConvertError> {
        match (left, right) {
            (RawExpr::Literal(_), RawExpr::Literal(_)) => {
                Err(ConvertError::UnexpectedFilterNode { node: node.to_string() })
            }
            (_, RawExpr::Literal(value)) => Ok((self.expression(left)?, literal_value(value), op)),
            (RawExpr::Literal(value), _) => Ok((self.expression(right)?, literal_value(value), op.flipped())),
            _ => {
                let difference = FunctionContext::transform(MINUS, vec![self.expression(left)?, self.expression(right)?]);
                Ok((Expression::for_function(difference), "0".to_string(), op))
            }
        }
    }
}

fn arity(
    op: FilterOperator,
    operands: &[RawExpr],
    node: &RawExpr,
    valid: bool,
    expected: &'static str,
) -> Result<(), ConvertError> {
    if valid {
        return Ok(());
    }
    Err(ConvertError::InvalidOperandCount {
        operator: op.name(),
        expected,
        got: operands.len(),
        node: node.to_string(),
    })
}

fn literal_operand(op: FilterOperator, operand: &RawExpr, node: &RawExpr) -> Result<String, ConvertError> {
    match operand {
        RawExpr::Literal(literal) => Ok(literal_value(literal)),
        other => Err(ConvertError::NonLiteralOperand {
            operator: op.name(),
            operand: other.to_string(),
            node: node.to_string(),
        }),
    }
}
