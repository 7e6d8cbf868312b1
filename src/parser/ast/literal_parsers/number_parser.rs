use crate::{
    parser::{ParseError, QueryParser},
    request::RawLiteral,
};

pub struct NumberParser;

impl NumberParser {
    pub fn is_number(parser: &QueryParser) -> bool {
        let current = parser.current();
        if current.is_ascii_digit() {
            return true;
        }
        let next = parser.peek(1);
        match current {
            '+' | '-' => next.is_ascii_digit() || (next == '.' && parser.peek(2).is_ascii_digit()),
            '.' => next.is_ascii_digit(),
            _ => false,
        }
    }

    fn skip_digits(parser: &mut QueryParser) {
        while parser.current().is_ascii_digit() {
            parser.next();
        }
    }

    /// Number literal kept as written. The text is checked for shape only;
    /// its value is never computed here.
    pub fn parse(parser: &mut QueryParser) -> Result<RawLiteral, ParseError> {
        let pivot = parser.position;

        if !NumberParser::is_number(parser) {
            return Err(ParseError::new("Invalid number value", pivot, parser));
        }

        if parser.current() == '+' || parser.current() == '-' {
            parser.next();
        }
        Self::skip_digits(parser);
        if parser.current() == '.' {
            parser.next();
            Self::skip_digits(parser);
        }
        if matches!(parser.current(), 'e' | 'E') {
            parser.next();
            if parser.current() == '+' || parser.current() == '-' {
                parser.next();
            }
            if !parser.current().is_ascii_digit() {
                return Err(ParseError::new("Invalid number exponent", pivot, parser));
            }
            Self::skip_digits(parser);
        }

        let current = parser.current();
        if current.is_alphanumeric() || current == '_' || current == '.' {
            return Err(ParseError::new("Invalid number value", pivot, parser));
        }

        Ok(RawLiteral::Number(parser.text_from_pivot(pivot)))
    }
}

#[cfg(test)]
pub mod tests {
    use crate::{parser::{ast::NumberParser, QueryParser}, request::{Grammar, RawLiteral}};

    fn parse(text: &str) -> RawLiteral {
        let mut parser = QueryParser::new(text, Grammar::Sql);
        NumberParser::parse(&mut parser).expect("Failed to parse number")
    }

    fn number(text: &str) -> RawLiteral {
        RawLiteral::Number(text.to_string())
    }

    #[test]
    pub fn test_number_parser_int() {
        assert_eq!(parse("32"), number("32"));
        assert_eq!(parse("+32"), number("+32"));
        assert_eq!(parse("-32,"), number("-32"));
        assert_eq!(parse("007"), number("007"));
    }

    #[test]
    pub fn test_number_parser_float_text_is_verbatim() {
        assert_eq!(parse("1.0)"), number("1.0"));
        assert_eq!(parse("10.50"), number("10.50"));
        assert_eq!(parse("-.25"), number("-.25"));
        assert_eq!(parse("1e3"), number("1e3"));
        assert_eq!(parse("2.5E-4 "), number("2.5E-4"));
    }

    #[test]
    pub fn test_number_parser_stops_at_delimiter() {
        let mut parser = QueryParser::new("123 AND", Grammar::Sql);

        NumberParser::parse(&mut parser).expect("Failed to parse number");

        assert_eq!(parser.position, 3);
    }

    #[test]
    pub fn test_number_parser_invalid() {
        let mut parser = QueryParser::new("12abc", Grammar::Sql);

        let err = NumberParser::parse(&mut parser).expect_err("Expected an error");

        assert_eq!(err.message, "Invalid number value");
        assert_eq!(err.start, 0);

        let mut parser = QueryParser::new("1e+", Grammar::Sql);
        let err = NumberParser::parse(&mut parser).expect_err("Expected an error");
        assert_eq!(err.message, "Invalid number exponent");
    }

    #[test]
    pub fn test_number_beyond_i64_is_kept() {
        assert_eq!(parse("99999999999999999999"), number("99999999999999999999"));
    }
}
