use crate::parser::{ParseError, QueryParser};

pub struct StringParser;

impl StringParser {
    pub fn is_string_delimiter(parser: &QueryParser) -> bool {
        parser.current() == '\'' || parser.current() == '"'
    }

    /// Text between the quotes. A doubled quote stands for one quote char and
    /// is kept doubled in the result.
    pub fn parse(parser: &mut QueryParser) -> Result<String, ParseError> {
        let quote = parser.current();
        let mut pivot = parser.position;

        if !StringParser::is_string_delimiter(parser) {
            return Err(ParseError::new("Invalid string value", pivot, parser));
        }
        parser.next();
        pivot = parser.position;

        loop {
            if parser.eof() {
                return Err(ParseError::new("Unterminated string", pivot, parser));
            }
            if parser.current() == quote {
                if parser.peek(1) != quote {
                    break;
                }
                parser.next();
            }
            parser.next();
        }

        let text = parser.text_from_pivot(pivot);
        parser.next();

        Ok(text)
    }
}

#[cfg(test)]
pub mod tests {
    use crate::{parser::{ast::StringParser, QueryParser}, request::Grammar};

    #[test]
    pub fn test_string_parser() {
        let text = "'potato' AND";

        let mut parser = QueryParser::new(text, Grammar::Sql);

        let result = StringParser::parse(&mut parser).expect("Failed to parse string");

        assert_eq!(result, "potato");
        assert_eq!(parser.current(), ' ');
    }

    #[test]
    pub fn test_string_parser_keeps_doubled_quotes() {
        let text = "'bar=''a'' AND bar=''b'''";

        let mut parser = QueryParser::new(text, Grammar::Sql);

        let result = StringParser::parse(&mut parser).expect("Failed to parse string");

        assert_eq!(result, "bar=''a'' AND bar=''b''");
        assert!(parser.eof());
    }

    #[test]
    pub fn test_string_parser_double_quotes() {
        let text = "\"start\tend\"";

        let mut parser = QueryParser::new(text, Grammar::Pql);

        let result = StringParser::parse(&mut parser).expect("Failed to parse string");

        assert_eq!(result, "start\tend");
    }

    #[test]
    pub fn test_string_parser_empty() {
        let mut parser = QueryParser::new("''", Grammar::Sql);

        assert_eq!(StringParser::parse(&mut parser).expect("Failed to parse string"), "");
    }

    #[test]
    pub fn test_string_parser_unterminated() {
        let text = "'lets break";

        let mut parser = QueryParser::new(text, Grammar::Sql);

        let err = StringParser::parse(&mut parser).expect_err("Expected an error");

        assert_eq!(err.message, "Unterminated string");
        assert_eq!(err.start, 1);
        assert_eq!(err.end, 11);
    }
}
