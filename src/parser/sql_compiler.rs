use tracing::trace;

use crate::{
    parser::{ast::Query, ParseError, QueryCompiler, QueryParser},
    request::{BrokerRequest, Grammar},
};

/// SQL front-end: aliases, HAVING, `SELECT DISTINCT a, b` and `"quoted"`
/// identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlCompiler;

impl SqlCompiler {
    pub fn new() -> Self {
        Self
    }
}

impl QueryCompiler for SqlCompiler {
    fn grammar(&self) -> Grammar {
        Grammar::Sql
    }

    fn compile_to_broker_request(&self, query: &str) -> Result<BrokerRequest, ParseError> {
        let mut parser = QueryParser::new(query, Grammar::Sql);
        let request = Query::parse(&mut parser)?;

        trace!(table = %request.table_name, "compiled SQL query");
        Ok(request)
    }
}
