use tracing::trace;

use crate::{
    functions::FunctionRegistry,
    parser::{ast::Query, ParseError, QueryCompiler, QueryParser},
    request::{BrokerRequest, Grammar, RawExpr, RawLiteral},
};

/// Legacy PQL front-end: `TOP n`, `SELECT DISTINCT(a, b)`, `"text"` string
/// literals, flattened AND/OR chains, and no aliases or HAVING.
#[derive(Debug, Clone, Copy, Default)]
pub struct PqlCompiler;

impl PqlCompiler {
    pub fn new() -> Self {
        Self
    }

    /// PQL names the aggregated column with a string literal as often as
    /// with an identifier: `SUM('foo')` means `SUM(foo)`.
    fn literal_columns(expression: RawExpr, registry: &FunctionRegistry) -> RawExpr {
        match expression {
            RawExpr::Function { operator, operands } => {
                let aggregation = registry.is_aggregation(&operator);
                let operands = operands
                    .into_iter()
                    .enumerate()
                    .map(|(i, operand)| match operand {
                        RawExpr::Literal(RawLiteral::String(name)) if aggregation && i == 0 => RawExpr::Identifier(name),
                        other => Self::literal_columns(other, registry),
                    })
                    .collect();
                RawExpr::Function { operator, operands }
            }
            other => other,
        }
    }
}

impl QueryCompiler for PqlCompiler {
    fn grammar(&self) -> Grammar {
        Grammar::Pql
    }

    fn compile_to_broker_request(&self, query: &str) -> Result<BrokerRequest, ParseError> {
        let mut parser = QueryParser::new(query, Grammar::Pql);
        let mut request = Query::parse(&mut parser)?;

        let registry = FunctionRegistry::global();
        for item in request.select_items.iter_mut() {
            item.expression = Self::literal_columns(item.expression.clone(), registry);
        }
        for expression in request.group_by.iter_mut().flatten() {
            *expression = Self::literal_columns(expression.clone(), registry);
        }
        for item in request.order_by.iter_mut().flatten() {
            item.expression = Self::literal_columns(item.expression.clone(), registry);
        }

        trace!(table = %request.table_name, "compiled PQL query");
        Ok(request)
    }
}
