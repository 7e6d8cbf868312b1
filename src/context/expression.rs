use std::{collections::HashSet, fmt};

use serde::{Deserialize, Serialize};

/// Token used for `SELECT *` and `COUNT(*)`; never reported as a column.
pub const WILDCARD: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FunctionType {
    Aggregation,
    Transform,
}

/// A function call node. The name is always stored lower-cased so that the
/// two front-end grammars (which disagree on casing) produce equal trees.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FunctionContext {
    function_type: FunctionType,
    function_name: String,
    arguments: Vec<Expression>,
}

impl FunctionContext {
    pub fn new(function_type: FunctionType, function_name: &str, arguments: Vec<Expression>) -> Self {
        Self {
            function_type,
            function_name: function_name.to_ascii_lowercase(),
            arguments,
        }
    }

    pub fn aggregation(function_name: &str, arguments: Vec<Expression>) -> Self {
        Self::new(FunctionType::Aggregation, function_name, arguments)
    }

    pub fn transform(function_name: &str, arguments: Vec<Expression>) -> Self {
        Self::new(FunctionType::Transform, function_name, arguments)
    }

    pub fn function_type(&self) -> FunctionType {
        self.function_type
    }

    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    pub fn arguments(&self) -> &[Expression] {
        &self.arguments
    }

    pub fn is_aggregation(&self) -> bool {
        self.function_type == FunctionType::Aggregation
    }

    pub fn collect_columns(&self, columns: &mut HashSet<String>) {
        for argument in &self.arguments {
            argument.collect_columns(columns);
        }
    }
}

impl fmt::Display for FunctionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.function_name)?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", argument)?;
        }
        f.write_str(")")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Expression {
    Identifier(String),
    Literal(String),
    Function(FunctionContext),
}

impl Expression {
    pub fn for_identifier(name: &str) -> Self {
        Expression::Identifier(name.to_string())
    }

    pub fn for_literal(text: &str) -> Self {
        Expression::Literal(text.to_string())
    }

    pub fn for_function(function: FunctionContext) -> Self {
        Expression::Function(function)
    }

    pub fn wildcard() -> Self {
        Expression::Identifier(WILDCARD.to_string())
    }

    pub fn identifier(&self) -> Option<&str> {
        match self {
            Expression::Identifier(name) => Some(name),
            _ => None,
        }
    }

    pub fn literal(&self) -> Option<&str> {
        match self {
            Expression::Literal(text) => Some(text),
            _ => None,
        }
    }

    pub fn function(&self) -> Option<&FunctionContext> {
        match self {
            Expression::Function(function) => Some(function),
            _ => None,
        }
    }

    /// True when this node, or any node below it, is an aggregation call.
    pub fn contains_aggregation(&self) -> bool {
        match self {
            Expression::Function(function) => {
                function.is_aggregation() || function.arguments.iter().any(Self::contains_aggregation)
            }
            _ => false,
        }
    }

    /// True when an identifier named `name` occurs anywhere in the tree.
    pub fn references_identifier(&self, name: &str) -> bool {
        match self {
            Expression::Identifier(identifier) => identifier == name,
            Expression::Literal(_) => false,
            Expression::Function(function) => function.arguments.iter().any(|a| a.references_identifier(name)),
        }
    }

    /// Adds every identifier below this node to `columns`, skipping `*`.
    pub fn collect_columns(&self, columns: &mut HashSet<String>) {
        match self {
            Expression::Identifier(name) if name != WILDCARD => {
                columns.insert(name.clone());
            }
            Expression::Function(function) => function.collect_columns(columns),
            _ => {}
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(name) => f.write_str(name),
            Expression::Literal(text) => write!(f, "'{}'", text),
            Expression::Function(function) => write!(f, "{}", function),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::context::{Expression, FunctionContext, FunctionType};

    fn add(args: Vec<Expression>) -> Expression {
        Expression::for_function(FunctionContext::transform("ADD", args))
    }

    #[test]
    pub fn test_identifier_display() {
        assert_eq!(Expression::for_identifier("foo").to_string(), "foo");
        assert_eq!(Expression::wildcard().to_string(), "*");
    }

    #[test]
    pub fn test_literal_display_is_quoted() {
        assert_eq!(Expression::for_literal("123").to_string(), "'123'");
        assert_eq!(Expression::for_literal("bar='a'").to_string(), "'bar='a''");
    }

    #[test]
    pub fn test_function_display_has_no_spaces() {
        let expr = add(vec![
            Expression::for_identifier("foo"),
            add(vec![Expression::for_identifier("bar"), Expression::for_literal("123")]),
        ]);

        assert_eq!(expr.to_string(), "add(foo,add(bar,'123'))");
    }

    #[test]
    pub fn test_function_name_is_lower_cased() {
        let function = FunctionContext::new(FunctionType::Aggregation, "DistinctCountThetaSketch", vec![]);

        assert_eq!(function.function_name(), "distinctcountthetasketch");
        assert_eq!(
            FunctionContext::aggregation("SUM", vec![Expression::for_identifier("foo")]),
            FunctionContext::aggregation("sum", vec![Expression::for_identifier("foo")])
        );
    }

    #[test]
    pub fn test_structural_equality_is_order_sensitive() {
        let left = add(vec![Expression::for_identifier("foo"), Expression::for_identifier("bar")]);
        let right = add(vec![Expression::for_identifier("bar"), Expression::for_identifier("foo")]);

        assert_ne!(left, right);
        assert_eq!(left, add(vec![Expression::for_identifier("foo"), Expression::for_identifier("bar")]));
    }

    #[test]
    pub fn test_identifier_and_literal_with_same_text_differ() {
        assert_ne!(Expression::for_identifier("foo"), Expression::for_literal("foo"));
    }

    #[test]
    pub fn test_contains_aggregation() {
        let sum = Expression::for_function(FunctionContext::aggregation(
            "sum",
            vec![add(vec![Expression::for_identifier("foo"), Expression::for_identifier("bar")])],
        ));

        assert!(sum.contains_aggregation());
        assert!(add(vec![sum.clone(), Expression::for_literal("1")]).contains_aggregation());
        assert!(!add(vec![Expression::for_identifier("foo")]).contains_aggregation());
        assert!(!Expression::for_identifier("foo").contains_aggregation());
    }

    #[test]
    pub fn test_collect_columns_skips_wildcard_and_literals() {
        let expr = Expression::for_function(FunctionContext::aggregation(
            "count",
            vec![Expression::wildcard()],
        ));
        let mut columns = HashSet::new();
        expr.collect_columns(&mut columns);
        assert!(columns.is_empty());

        add(vec![Expression::for_identifier("foo"), Expression::for_literal("bar")]).collect_columns(&mut columns);
        assert_eq!(columns, HashSet::from(["foo".to_string()]));
    }

    #[test]
    pub fn test_references_identifier() {
        let expr = add(vec![Expression::for_identifier("foo"), Expression::for_literal("bar")]);

        assert!(expr.references_identifier("foo"));
        assert!(!expr.references_identifier("bar"));
    }
}
