pub mod expression;
pub use expression::*;

pub mod order_by;
pub use order_by::*;

pub mod predicate;
pub use predicate::*;

pub mod filter;
pub use filter::*;

pub mod context_error;
pub use context_error::*;

pub mod query_context;
pub use query_context::*;

pub mod utils;
pub use utils::*;
