use crate::parser::{ParseError, QueryParser};

pub struct IdentifierParser;

impl IdentifierParser {
    pub fn is_identifier_start(parser: &QueryParser) -> bool {
        let current = parser.current();
        current.is_alphabetic() || current == '_' || current == '$'
    }

    pub fn is_identifier_char(ch: char) -> bool {
        ch.is_alphanumeric() || ch == '_' || ch == '.' || ch == '$'
    }

    /// Column, table, alias or function name: letters, digits, `_`, `.` and `$`.
    pub fn parse(parser: &mut QueryParser) -> Result<String, ParseError> {
        let pivot = parser.position;

        if !IdentifierParser::is_identifier_start(parser) {
            return ParseError::new("Invalid identifier", pivot, parser).err();
        }

        while !parser.eof() && IdentifierParser::is_identifier_char(parser.current()) {
            parser.next();
        }

        Ok(parser.text_from_pivot(pivot))
    }
}

#[cfg(test)]
mod tests {
    use crate::{parser::{ast::IdentifierParser, QueryParser}, request::Grammar};

    #[test]
    pub fn test_identifier() {
        let mut parser = QueryParser::new("column, other", Grammar::Sql);

        let result = IdentifierParser::parse(&mut parser).expect("Failed to parse identifier");

        assert_eq!(result, "column");
        assert_eq!(parser.current(), ',');
    }

    #[test]
    pub fn test_identifier_with_dots_and_dollar() {
        let mut parser = QueryParser::new("$doc.field_1(", Grammar::Sql);

        let result = IdentifierParser::parse(&mut parser).expect("Failed to parse identifier");

        assert_eq!(result, "$doc.field_1");
        assert_eq!(parser.current(), '(');
    }

    #[test]
    pub fn test_identifier_invalid_start() {
        let mut parser = QueryParser::new("1column", Grammar::Sql);

        assert!(IdentifierParser::parse(&mut parser).is_err());
    }
}
