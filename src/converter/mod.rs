pub mod convert_error;
pub use convert_error::*;

pub mod alias_table;
pub use alias_table::*;

pub mod expression_translator;
pub use expression_translator::*;

pub mod filter_translator;
pub use filter_translator::*;

pub mod limit_resolver;
pub use limit_resolver::*;

pub mod broker_request_converter;
pub use broker_request_converter::*;
