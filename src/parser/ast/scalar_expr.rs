use crate::{
    context::WILDCARD,
    parser::{ast::{ArgsParser, BoolParser, IdentifierParser, NumberParser, StringParser}, ParseError, QueryParser},
    request::{RawExpr, RawLiteral},
};

/// Parses one scalar: `*`, a literal, an identifier or a function call.
pub struct ScalarExprParser;

impl ScalarExprParser {
    pub fn parse(parser: &mut QueryParser) -> Result<RawExpr, ParseError> {
        parser.next_non_whitespace();

        if parser.eof() {
            return ParseError::new("Invalid scalar value", parser.position, parser).err();
        }

        if parser.current() == '*' {
            parser.next();
            return Ok(RawExpr::identifier(WILDCARD));
        }
        if parser.current() == '"' {
            let text = StringParser::parse(parser)?;
            return match parser.grammar.double_quote_is_identifier() {
                true => Ok(RawExpr::Identifier(text)),
                false => Ok(RawExpr::Literal(RawLiteral::String(text))),
            };
        }
        if StringParser::is_string_delimiter(parser) {
            return StringParser::parse(parser)
                .map(|text| RawExpr::Literal(RawLiteral::String(text)));
        }
        if NumberParser::is_number(parser) {
            return NumberParser::parse(parser)
                .map(RawExpr::Literal);
        }
        if BoolParser::is_bool(parser) {
            return BoolParser::parse(parser)
                .map(|value| RawExpr::Literal(RawLiteral::Bool(value)));
        }

        let name = IdentifierParser::parse(parser)?;
        if ArgsParser::is_args_start(parser) {
            let operands = ArgsParser::parse(parser)?;
            return Ok(RawExpr::Function { operator: name, operands });
        }

        Ok(RawExpr::Identifier(name))
    }
}
