use crate::{parser::ParseError, request::{BrokerRequest, Grammar}};

/// Front-end that turns query text into a [`BrokerRequest`].
pub trait QueryCompiler: Send + Sync {
    fn grammar(&self) -> Grammar;

    fn compile_to_broker_request(&self, query: &str) -> Result<BrokerRequest, ParseError>;
}
