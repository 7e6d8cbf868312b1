use indexmap::IndexMap;

use crate::request::{Grammar, RawExpr};

#[derive(Debug, Clone, PartialEq)]
pub struct SelectItem {
    pub expression: RawExpr,
    pub alias: Option<String>,
}

impl SelectItem {
    pub fn new(expression: RawExpr) -> Self {
        Self { expression, alias: None }
    }

    pub fn aliased(expression: RawExpr, alias: &str) -> Self {
        Self { expression, alias: Some(alias.to_string()) }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByItem {
    pub expression: RawExpr,
    pub ascending: bool,
}

impl OrderByItem {
    pub fn new(expression: RawExpr, ascending: bool) -> Self {
        Self { expression, ascending }
    }
}

/// Raw parsed request handed over by a front-end compiler.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BrokerRequest {
    pub source: Grammar,
    pub table_name: String,
    pub select_items: Vec<SelectItem>,
    /// Lone `*` select list.
    pub select_star: bool,
    pub distinct: bool,
    pub filter: Option<RawExpr>,
    pub group_by: Option<Vec<RawExpr>>,
    pub having: Option<RawExpr>,
    pub order_by: Option<Vec<OrderByItem>>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    /// Legacy `TOP n`; only the PQL front-end sets it.
    pub top: Option<i64>,
    pub query_options: IndexMap<String, String>,
}

impl BrokerRequest {
    pub fn new(source: Grammar, table_name: &str) -> Self {
        Self {
            source,
            table_name: table_name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_select(mut self, item: SelectItem) -> Self { self.select_items.push(item); self }
    pub fn with_select_star(mut self) -> Self { self.select_star = true; self }
    pub fn with_distinct(mut self) -> Self { self.distinct = true; self }
    pub fn with_filter(mut self, filter: RawExpr) -> Self { self.filter = Some(filter); self }
    pub fn with_group_by(mut self, expressions: Vec<RawExpr>) -> Self { self.group_by = Some(expressions); self }
    pub fn with_having(mut self, having: RawExpr) -> Self { self.having = Some(having); self }
    pub fn with_order_by(mut self, items: Vec<OrderByItem>) -> Self { self.order_by = Some(items); self }
    pub fn with_limit(mut self, limit: i64) -> Self { self.limit = Some(limit); self }
    pub fn with_offset(mut self, offset: i64) -> Self { self.offset = Some(offset); self }
    pub fn with_top(mut self, top: i64) -> Self { self.top = Some(top); self }

    pub fn with_option(mut self, key: &str, value: &str) -> Self {
        self.query_options.insert(key.to_string(), value.to_string());
        self
    }
}
