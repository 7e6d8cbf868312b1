use std::collections::HashSet;

use crate::context::QueryContext;

pub struct QueryContextUtils;

impl QueryContextUtils {
    /// Every column referenced by the query (select, filter, group-by,
    /// order-by and having), without the `*` token.
    pub fn get_all_columns(context: &QueryContext) -> HashSet<String> {
        let mut columns = HashSet::new();

        for expression in context.select_expressions() {
            expression.collect_columns(&mut columns);
        }
        if let Some(filter) = context.filter() {
            filter.collect_columns(&mut columns);
        }
        for expression in context.group_by_expressions().unwrap_or_default() {
            expression.collect_columns(&mut columns);
        }
        for order_by in context.order_by_expressions().unwrap_or_default() {
            order_by.expression().collect_columns(&mut columns);
        }
        if let Some(having) = context.having_filter() {
            having.collect_columns(&mut columns);
        }

        columns
    }

    pub fn is_aggregation_query(context: &QueryContext) -> bool {
        context.group_by_expressions().is_some()
            || context.select_expressions().iter().any(|e| e.contains_aggregation())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::context::{
        Expression, Filter, FunctionContext, OrderByExpression, Predicate, QueryContext, QueryContextUtils,
    };

    #[test]
    pub fn test_wildcard_only_has_no_columns() {
        let context = QueryContext::builder()
            .select_expressions(vec![Expression::wildcard()])
            .build()
            .expect("Failed to build query context");

        assert!(QueryContextUtils::get_all_columns(&context).is_empty());
        assert!(!QueryContextUtils::is_aggregation_query(&context));
    }

    #[test]
    pub fn test_columns_from_every_clause() {
        let context = QueryContext::builder()
            .select_expressions(vec![Expression::for_function(FunctionContext::aggregation(
                "max",
                vec![Expression::for_identifier("a")],
            ))])
            .filter(Some(Filter::predicate(Predicate::IsNull { lhs: Expression::for_identifier("b") })))
            .group_by_expressions(Some(vec![Expression::for_identifier("c")]))
            .order_by_expressions(Some(vec![OrderByExpression::new(Expression::for_identifier("d"), true)]))
            .having_filter(Some(Filter::predicate(Predicate::Eq {
                lhs: Expression::for_identifier("e"),
                value: "1".into(),
            })))
            .build()
            .expect("Failed to build query context");

        let expected: HashSet<String> = ["a", "b", "c", "d", "e"].iter().map(|c| c.to_string()).collect();
        assert_eq!(QueryContextUtils::get_all_columns(&context), expected);
    }

    #[test]
    pub fn test_group_by_without_aggregation_is_aggregation_query() {
        let context = QueryContext::builder()
            .select_expressions(vec![Expression::for_identifier("bar")])
            .group_by_expressions(Some(vec![Expression::for_identifier("bar")]))
            .build()
            .expect("Failed to build query context");

        assert!(QueryContextUtils::is_aggregation_query(&context));
    }

    #[test]
    pub fn test_nested_aggregation_is_detected() {
        let sum = Expression::for_function(FunctionContext::aggregation("sum", vec![Expression::for_identifier("a")]));
        let context = QueryContext::builder()
            .select_expressions(vec![Expression::for_function(FunctionContext::transform(
                "add",
                vec![sum, Expression::for_literal("1")],
            ))])
            .build()
            .expect("Failed to build query context");

        assert!(QueryContextUtils::is_aggregation_query(&context));
    }

    #[test]
    pub fn test_transform_only_is_not_aggregation_query() {
        let context = QueryContext::builder()
            .select_expressions(vec![Expression::for_function(FunctionContext::transform(
                "add",
                vec![Expression::for_identifier("a"), Expression::for_identifier("b")],
            ))])
            .build()
            .expect("Failed to build query context");

        assert!(!QueryContextUtils::is_aggregation_query(&context));
    }
}
