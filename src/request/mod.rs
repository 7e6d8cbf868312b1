pub mod grammar;
pub use grammar::*;

pub mod raw_expr;
pub use raw_expr::*;

pub mod filter_operator;
pub use filter_operator::*;

pub mod broker_request;
pub use broker_request::*;
