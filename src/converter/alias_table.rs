use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::{
    context::{Expression, FunctionContext},
    converter::ConvertError,
    request::SelectItem,
};

/// Aliases declared in one select list, keyed by alias name.
///
/// An alias whose name is also used as a column somewhere in the select list
/// is dropped: the name keeps denoting the column everywhere in the query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AliasTable {
    aliases: IndexMap<String, Expression>,
}

impl AliasTable {
    /// `expressions[i]` is the canonical form of `items[i]`.
    pub fn build(items: &[SelectItem], expressions: &[Expression]) -> Result<Self, ConvertError> {
        let mut columns = HashSet::new();
        for expression in expressions {
            expression.collect_columns(&mut columns);
        }

        let mut declared = HashSet::new();
        let mut aliases = IndexMap::new();
        for (item, expression) in items.iter().zip(expressions) {
            let Some(alias) = &item.alias else {
                continue;
            };
            if !declared.insert(alias.as_str()) {
                return Err(ConvertError::DuplicateAlias(alias.clone()));
            }
            if columns.contains(alias) {
                debug!(alias = %alias, "alias shadowed by a selected column, not substituted");
                continue;
            }
            aliases.insert(alias.clone(), expression.clone());
        }

        Ok(Self { aliases })
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    pub fn resolve(&self, name: &str) -> Option<&Expression> {
        self.aliases.get(name)
    }

    /// Replaces alias identifiers with their targets, depth first. Targets
    /// are inserted as-is and not visited again.
    pub fn substitute(&self, expression: Expression) -> Expression {
        if self.aliases.is_empty() {
            return expression;
        }

        match expression {
            Expression::Identifier(name) => match self.resolve(&name) {
                Some(target) => {
                    trace!(alias = %name, target = %target, "substituted alias");
                    target.clone()
                }
                None => Expression::Identifier(name),
            },
            Expression::Function(function) => {
                let arguments = function.arguments().iter().cloned().map(|a| self.substitute(a)).collect();
                Expression::for_function(FunctionContext::new(
                    function.function_type(),
                    function.function_name(),
                    arguments,
                ))
            }
            literal => literal,
        }
    }

    pub fn into_map(self) -> IndexMap<String, Expression> {
        self.aliases
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        context::{Expression, FunctionContext},
        converter::{AliasTable, ConvertError},
        request::{RawExpr, SelectItem},
    };

    fn sum_foo() -> Expression {
        Expression::for_function(FunctionContext::aggregation("sum", vec![Expression::for_identifier("foo")]))
    }

    #[test]
    pub fn test_build_and_substitute() {
        let items = vec![
            SelectItem::aliased(RawExpr::call("SUM", vec![RawExpr::identifier("foo")]), "a"),
            SelectItem::aliased(RawExpr::identifier("bar"), "b"),
        ];
        let expressions = vec![sum_foo(), Expression::for_identifier("bar")];

        let table = AliasTable::build(&items, &expressions).expect("Failed to build alias table");

        assert_eq!(table.resolve("a"), Some(&sum_foo()));
        assert_eq!(table.substitute(Expression::for_identifier("b")), Expression::for_identifier("bar"));

        let nested = Expression::for_function(FunctionContext::transform(
            "add",
            vec![Expression::for_identifier("a"), Expression::for_literal("a")],
        ));
        assert_eq!(table.substitute(nested).to_string(), "add(sum(foo),'a')");
    }

    #[test]
    pub fn test_duplicate_alias() {
        let items = vec![
            SelectItem::aliased(RawExpr::identifier("foo"), "x"),
            SelectItem::aliased(RawExpr::identifier("bar"), "x"),
        ];
        let expressions = vec![Expression::for_identifier("foo"), Expression::for_identifier("bar")];

        let result = AliasTable::build(&items, &expressions);

        assert_eq!(result, Err(ConvertError::DuplicateAlias("x".into())));
    }

    #[test]
    pub fn test_alias_shadowed_by_selected_column() {
        let items = vec![
            SelectItem::aliased(RawExpr::identifier("foo"), "bar"),
            SelectItem::new(RawExpr::identifier("bar")),
        ];
        let expressions = vec![Expression::for_identifier("foo"), Expression::for_identifier("bar")];

        let table = AliasTable::build(&items, &expressions).expect("Failed to build alias table");

        assert!(table.is_empty());
        assert_eq!(table.substitute(Expression::for_identifier("bar")), Expression::for_identifier("bar"));
    }

    #[test]
    pub fn test_alias_named_after_its_own_column() {
        let items = vec![SelectItem::aliased(RawExpr::call("sum", vec![RawExpr::identifier("foo")]), "foo")];

        let table = AliasTable::build(&items, &[sum_foo()]).expect("Failed to build alias table");

        assert!(table.resolve("foo").is_none());
    }
}
