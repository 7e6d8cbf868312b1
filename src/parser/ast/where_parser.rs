use crate::{
    parser::{ast::PredicateParser, ParseError, QueryParser},
    request::RawExpr,
};

pub struct WhereParser;

impl WhereParser {
    pub fn parse(parser: &mut QueryParser) -> Result<RawExpr, ParseError> {
        if !parser.comparers.r#where.compare(parser) {
            return ParseError::new("Invalid where", parser.position, parser).err();
        }
        parser.jump(parser.comparers.r#where.matched_length(parser));

        let filter = PredicateParser::parse(parser)?;
        parser.expect_next_phase("WHERE")?;

        Ok(filter)
    }
}
