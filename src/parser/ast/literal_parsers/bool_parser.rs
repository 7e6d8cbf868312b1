use crate::parser::{ParseError, QueryParser};

pub struct BoolParser;

impl BoolParser {
    pub fn is_bool(parser: &QueryParser) -> bool {
        parser.comparers.b_true.compare(parser) || parser.comparers.b_false.compare(parser)
    }

    /// `TRUE` / `FALSE` in any case, returned as written.
    pub fn parse(parser: &mut QueryParser) -> Result<String, ParseError> {
        let pivot = parser.position;
        if parser.comparers.b_true.compare(parser) {
            parser.jump(parser.comparers.b_true.matched_length(parser));
            return Ok(parser.text_from_pivot(pivot))
        }
        if parser.comparers.b_false.compare(parser) {
            parser.jump(parser.comparers.b_false.matched_length(parser));
            return Ok(parser.text_from_pivot(pivot))
        }

        Err(ParseError::new("Invalid boolean", parser.position, parser))
    }
}
