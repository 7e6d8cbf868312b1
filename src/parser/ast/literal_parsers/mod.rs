pub mod string_parser;
pub use string_parser::StringParser;

pub mod number_parser;
pub use number_parser::NumberParser;

pub mod bool_parser;
pub use bool_parser::BoolParser;
