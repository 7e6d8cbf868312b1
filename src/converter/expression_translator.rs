use crate::{
    context::{Expression, FunctionContext},
    converter::ConvertError,
    functions::FunctionRegistry,
    request::{FilterOperator, RawExpr, RawLiteral},
};

/// Maps raw expression nodes onto the canonical expression model.
pub struct ExpressionTranslator<'a> {
    registry: &'a FunctionRegistry,
}

impl<'a> ExpressionTranslator<'a> {
    pub fn new(registry: &'a FunctionRegistry) -> Self {
        Self { registry }
    }

    pub fn translate(&self, raw: &RawExpr) -> Result<Expression, ConvertError> {
        match raw {
            RawExpr::Identifier(name) => Ok(Expression::for_identifier(name)),
            RawExpr::Literal(literal) => Ok(Expression::for_literal(&literal_value(literal))),
            RawExpr::Function { operator, operands } => {
                if FilterOperator::from_name(operator).is_some() {
                    return Err(ConvertError::FilterInExpression { operator: operator.clone(), node: raw.to_string() });
                }
                let arguments = operands.iter().map(|o| self.translate(o)).collect::<Result<Vec<_>, _>>()?;
                Ok(Expression::for_function(FunctionContext::new(
                    self.registry.function_type(operator),
                    operator,
                    arguments,
                )))
            }
        }
    }
}

/// Text of a literal, with doubled single quotes collapsed once.
pub fn literal_value(literal: &RawLiteral) -> String {
    match literal {
        RawLiteral::String(text) => unescape_quotes(text),
        other => other.text().to_string(),
    }
}

pub fn unescape_quotes(text: &str) -> String {
    text.replace("''", "'")
}

#[cfg(test)]
mod tests {
    use crate::{
        context::{Expression, FunctionType},
        converter::{ConvertError, ExpressionTranslator, unescape_quotes},
        functions::FunctionRegistry,
        request::RawExpr,
    };

    #[test]
    pub fn test_translate_nested_functions() {
        let translator = ExpressionTranslator::new(FunctionRegistry::global());
        let raw = RawExpr::call(
            "SUM",
            vec![RawExpr::call("ADD", vec![RawExpr::identifier("foo"), RawExpr::long(123)])],
        );

        let expr = translator.translate(&raw).expect("Failed to translate");

        assert_eq!(expr.to_string(), "sum(add(foo,'123'))");
        let function = expr.function().expect("Expected a function");
        assert_eq!(function.function_type(), FunctionType::Aggregation);
        assert_eq!(function.arguments()[0].function().map(|f| f.function_type()), Some(FunctionType::Transform));
    }

    #[test]
    pub fn test_each_argument_unescaped_once() {
        let translator = ExpressionTranslator::new(FunctionRegistry::global());
        let raw = RawExpr::call(
            "DISTINCTCOUNTTHETASKETCH",
            vec![
                RawExpr::identifier("foo"),
                RawExpr::string("bar=''a''"),
                RawExpr::string("bar=''a'' AND bar=''b''"),
            ],
        );

        let expr = translator.translate(&raw).expect("Failed to translate");
        let arguments = expr.function().expect("Expected a function").arguments();

        assert_eq!(arguments[1], Expression::for_literal("bar='a'"));
        assert_eq!(arguments[2], Expression::for_literal("bar='a' AND bar='b'"));
    }

    #[test]
    pub fn test_unescape_quotes() {
        assert_eq!(unescape_quotes("it''s"), "it's");
        assert_eq!(unescape_quotes("''''"), "''");
        assert_eq!(unescape_quotes("plain"), "plain");
    }

    #[test]
    pub fn test_number_and_bool_literals() {
        let translator = ExpressionTranslator::new(FunctionRegistry::global());

        assert_eq!(translator.translate(&RawExpr::long(-7)).unwrap(), Expression::for_literal("-7"));
        assert_eq!(translator.translate(&RawExpr::number("2.50")).unwrap(), Expression::for_literal("2.50"));
        assert_eq!(translator.translate(&RawExpr::number("1e3")).unwrap(), Expression::for_literal("1e3"));
    }

    #[test]
    pub fn test_filter_operator_in_expression() {
        let translator = ExpressionTranslator::new(FunctionRegistry::global());
        let raw = RawExpr::call("EQUALS", vec![RawExpr::identifier("foo"), RawExpr::long(1)]);

        let result = translator.translate(&raw);

        assert!(matches!(result, Err(ConvertError::FilterInExpression { .. })));
    }
}
