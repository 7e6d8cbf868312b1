pub mod literal_parsers;
pub use literal_parsers::*;

pub mod identifier;
pub use identifier::*;

pub mod args_parser;
pub use args_parser::*;

pub mod scalar_expr;
pub use scalar_expr::*;

pub mod operators;
pub use operators::*;

pub mod predicate;
pub use predicate::*;

pub mod projection;
pub use projection::*;

pub mod collection;
pub use collection::*;

pub mod where_parser;
pub use where_parser::*;

pub mod group_by;
pub use group_by::*;

pub mod having_parser;
pub use having_parser::*;

pub mod order_by;
pub use order_by::*;

pub mod limit_offset_parser;
pub use limit_offset_parser::*;

pub mod options_parser;
pub use options_parser::*;

pub mod query;
pub use query::*;
