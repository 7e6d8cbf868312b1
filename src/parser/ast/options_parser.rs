use indexmap::IndexMap;

use crate::{
    parser::{ast::{IdentifierParser, ScalarExprParser}, ParseError, QueryParser},
    request::RawExpr,
};

pub struct OptionsParser;

impl OptionsParser {
    /// `OPTION(key=value, ...)`, possibly repeated. Later keys overwrite
    /// earlier ones.
    pub fn parse(parser: &mut QueryParser) -> Result<IndexMap<String, String>, ParseError> {
        let mut options = IndexMap::new();

        while !parser.check_next_phase() {
            if !parser.comparers.option.compare(parser) {
                return ParseError::new("Invalid option", parser.position, parser).err();
            }
            parser.jump(parser.comparers.option.matched_length(parser));
            parser.expect_char('(', "Expected '(' after OPTION")?;

            loop {
                parser.next_non_whitespace();
                let key = IdentifierParser::parse(parser)?;
                parser.expect_char('=', "Expected '=' in OPTION")?;
                parser.next_non_whitespace();
                let pivot = parser.position;
                let value = match ScalarExprParser::parse(parser)? {
                    RawExpr::Identifier(value) => value,
                    RawExpr::Literal(literal) => literal.to_string(),
                    _ => return ParseError::new("Invalid option value", pivot, parser).err(),
                };
                options.insert(key, value);

                parser.next_non_whitespace();
                if parser.current() != ',' {
                    break;
                }
                parser.next();
            }
            parser.expect_char(')', "Expected ')' after OPTION")?;
        }

        Ok(options)
    }
}
