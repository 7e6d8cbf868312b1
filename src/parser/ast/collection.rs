use crate::parser::{ast::{IdentifierParser, StringParser}, ParseError, QueryParser};

pub struct CollectionParser;

impl CollectionParser {
    pub fn parse(parser: &mut QueryParser) -> Result<String, ParseError> {
        if !parser.comparers.from.compare(parser) {
            return ParseError::new("Invalid from", parser.position, parser).err();
        }
        parser.jump(parser.comparers.from.matched_length(parser));
        parser.next_non_whitespace();

        let name = match parser.current() {
            '"' if parser.grammar.double_quote_is_identifier() => StringParser::parse(parser)?,
            _ => IdentifierParser::parse(parser)?,
        };
        parser.expect_next_phase("FROM")?;

        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use crate::{parser::{ast::CollectionParser, Phase, QueryParser}, request::Grammar};

    fn parse(text: &str, grammar: Grammar) -> (String, Phase) {
        let mut parser = QueryParser::new(text, grammar);
        parser.check_next_phase();
        let name = CollectionParser::parse(&mut parser).expect("Failed to parse collection");
        (name, parser.phase)
    }

    #[test]
    pub fn test_collection() {
        assert_eq!(parse("FROM testTable", Grammar::Sql), ("testTable".to_string(), Phase::EOF));
        assert_eq!(parse("FROM testTable WHERE a = 1", Grammar::Sql), ("testTable".to_string(), Phase::Criteria));
    }

    #[test]
    pub fn test_collection_quoted() {
        assert_eq!(parse("FROM \"my table\"", Grammar::Sql).0, "my table");
    }

    #[test]
    pub fn test_collection_trailing_garbage() {
        let mut parser = QueryParser::new("FROM testTable t", Grammar::Sql);
        parser.check_next_phase();

        let err = CollectionParser::parse(&mut parser).expect_err("Expected an error");

        assert_eq!(err.message, "Unexpected token after FROM");
    }
}
