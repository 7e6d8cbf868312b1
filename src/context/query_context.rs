use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::context::{ContextError, Expression, Filter, OrderByExpression};

pub const DEFAULT_LIMIT: i64 = 10;
pub const DEFAULT_OFFSET: i64 = 0;

/// Canonical, grammar-agnostic form of one query.
///
/// Built once through [`QueryContextBuilder`], which checks the cross-field
/// invariants; there is no way to change a context afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryContext {
    table_name: String,
    select_expressions: Vec<Expression>,
    alias_map: IndexMap<String, Expression>,
    filter: Option<Filter>,
    group_by_expressions: Option<Vec<Expression>>,
    order_by_expressions: Option<Vec<OrderByExpression>>,
    having_filter: Option<Filter>,
    limit: usize,
    offset: usize,
    query_options: IndexMap<String, String>,
}

impl QueryContext {
    pub fn builder() -> QueryContextBuilder {
        QueryContextBuilder::default()
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn select_expressions(&self) -> &[Expression] {
        &self.select_expressions
    }

    pub fn alias_map(&self) -> &IndexMap<String, Expression> {
        &self.alias_map
    }

    /// Reverse alias lookup: the first declared alias whose target equals `expression`.
    pub fn get_alias(&self, expression: &Expression) -> Option<&str> {
        self.alias_map
            .iter()
            .find(|(_, target)| *target == expression)
            .map(|(alias, _)| alias.as_str())
    }

    pub fn filter(&self) -> Option<&Filter> {
        self.filter.as_ref()
    }

    pub fn group_by_expressions(&self) -> Option<&[Expression]> {
        self.group_by_expressions.as_deref()
    }

    pub fn order_by_expressions(&self) -> Option<&[OrderByExpression]> {
        self.order_by_expressions.as_deref()
    }

    pub fn having_filter(&self) -> Option<&Filter> {
        self.having_filter.as_ref()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn query_options(&self) -> &IndexMap<String, String> {
        &self.query_options
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items.iter().map(|item| item.to_string()).collect::<Vec<_>>().join(", ")
}

impl fmt::Display for QueryContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filter = self.filter.as_ref().map_or("None".to_string(), |filter| filter.to_string());
        let group = self.group_by_expressions.as_deref().map_or("None".to_string(), |g| format!("[{}]", join(g)));
        let order = self.order_by_expressions.as_deref().map_or("None".to_string(), |o| format!("[{}]", join(o)));
        let having = self.having_filter.as_ref().map_or("None".to_string(), |having| having.to_string());
        let aliases = self.alias_map.iter().map(|(alias, expr)| format!("{}={}", alias, expr)).collect::<Vec<_>>();

        write!(
            f,
            "QueryContext(table={}, select=[{}], filter={}, group_by={}, having={}, order_by={}, limit={}, offset={}, aliases=[{}])",
            self.table_name,
            join(&self.select_expressions),
            filter,
            group,
            having,
            order,
            self.limit,
            self.offset,
            aliases.join(", "),
        )
    }
}

#[derive(Debug, Clone)]
pub struct QueryContextBuilder {
    table_name: String,
    select_expressions: Vec<Expression>,
    alias_map: IndexMap<String, Expression>,
    filter: Option<Filter>,
    group_by_expressions: Option<Vec<Expression>>,
    order_by_expressions: Option<Vec<OrderByExpression>>,
    having_filter: Option<Filter>,
    limit: i64,
    offset: i64,
    query_options: IndexMap<String, String>,
}

impl Default for QueryContextBuilder {
    fn default() -> Self {
        Self {
            table_name: String::new(),
            select_expressions: vec![],
            alias_map: IndexMap::new(),
            filter: None,
            group_by_expressions: None,
            order_by_expressions: None,
            having_filter: None,
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
            query_options: IndexMap::new(),
        }
    }
}

impl QueryContextBuilder {
    pub fn table_name(mut self, table_name: &str) -> Self { self.table_name = table_name.to_string(); self }
    pub fn select_expressions(mut self, expressions: Vec<Expression>) -> Self { self.select_expressions = expressions; self }
    pub fn alias_map(mut self, alias_map: IndexMap<String, Expression>) -> Self { self.alias_map = alias_map; self }
    pub fn filter(mut self, filter: Option<Filter>) -> Self { self.filter = filter; self }
    pub fn having_filter(mut self, having: Option<Filter>) -> Self { self.having_filter = having; self }
    pub fn limit(mut self, limit: i64) -> Self { self.limit = limit; self }
    pub fn offset(mut self, offset: i64) -> Self { self.offset = offset; self }
    pub fn query_options(mut self, options: IndexMap<String, String>) -> Self { self.query_options = options; self }

    /// An empty list is stored as "no GROUP BY".
    pub fn group_by_expressions(mut self, expressions: Option<Vec<Expression>>) -> Self {
        self.group_by_expressions = expressions.filter(|e| !e.is_empty());
        self
    }

    /// An empty list is stored as "no ORDER BY".
    pub fn order_by_expressions(mut self, expressions: Option<Vec<OrderByExpression>>) -> Self {
        self.order_by_expressions = expressions.filter(|e| !e.is_empty());
        self
    }

    pub fn build(self) -> Result<QueryContext, ContextError> {
        if self.select_expressions.is_empty() {
            return Err(ContextError::EmptySelectList);
        }
        if self.limit < 0 {
            return Err(ContextError::NegativeLimit(self.limit));
        }
        if self.offset < 0 {
            return Err(ContextError::NegativeOffset(self.offset));
        }
        if self.having_filter.is_some() && self.group_by_expressions.is_none() {
            return Err(ContextError::HavingWithoutGroupBy);
        }
        if let Some(filter) = &self.filter {
            filter.validate()?;
        }
        if let Some(having) = &self.having_filter {
            having.validate()?;
        }
        self.check_alias_closure()?;

        Ok(QueryContext {
            table_name: self.table_name,
            select_expressions: self.select_expressions,
            alias_map: self.alias_map,
            filter: self.filter,
            group_by_expressions: self.group_by_expressions,
            order_by_expressions: self.order_by_expressions,
            having_filter: self.having_filter,
            limit: self.limit as usize,
            offset: self.offset as usize,
            query_options: self.query_options,
        })
    }

    fn check_alias_closure(&self) -> Result<(), ContextError> {
        for alias in self.alias_map.keys() {
            let unresolved = |clause: &'static str| ContextError::UnresolvedAlias { alias: alias.clone(), clause };

            if self.select_expressions.iter().any(|e| e.references_identifier(alias)) {
                return Err(unresolved("SELECT"));
            }
            if self.filter.as_ref().is_some_and(|f| filter_references(f, alias)) {
                return Err(unresolved("WHERE"));
            }
            if self.group_by_expressions.iter().flatten().any(|e| e.references_identifier(alias)) {
                return Err(unresolved("GROUP BY"));
            }
            if self.order_by_expressions.iter().flatten().any(|o| o.expression().references_identifier(alias)) {
                return Err(unresolved("ORDER BY"));
            }
            if self.having_filter.as_ref().is_some_and(|f| filter_references(f, alias)) {
                return Err(unresolved("HAVING"));
            }
        }
        Ok(())
    }
}

fn filter_references(filter: &Filter, name: &str) -> bool {
    match filter {
        Filter::Predicate(predicate) => predicate.lhs().references_identifier(name),
        _ => filter.children().iter().any(|child| filter_references(child, name)),
    }
}
