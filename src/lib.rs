pub mod config;
pub use config::{ConfigError, ConverterConfig};

pub mod context;
pub use context::{Expression, Filter, FunctionContext, FunctionType, OrderByExpression, Predicate, QueryContext, QueryContextUtils};

pub mod converter;
pub use converter::{convert, BrokerRequestConverter, ConvertError};

pub mod functions;
pub use functions::FunctionRegistry;

pub mod parser;
pub use parser::{ParseError, PqlCompiler, QueryCompiler, SqlCompiler};

pub mod request;
pub use request::{BrokerRequest, Grammar, RawExpr};
