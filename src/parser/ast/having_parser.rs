use crate::{
    parser::{ast::PredicateParser, ParseError, QueryParser},
    request::RawExpr,
};

pub struct HavingParser;

impl HavingParser {
    pub fn parse(parser: &mut QueryParser) -> Result<RawExpr, ParseError> {
        if !parser.comparers.having.compare(parser) {
            return ParseError::new("Invalid having", parser.position, parser).err();
        }
        if !parser.grammar.supports_having() {
            let message = format!("HAVING is not supported in {}", parser.grammar);
            return ParseError::new(&message, parser.position, parser).err();
        }
        parser.jump(parser.comparers.having.matched_length(parser));

        let filter = PredicateParser::parse(parser)?;
        parser.expect_next_phase("HAVING")?;

        Ok(filter)
    }
}
