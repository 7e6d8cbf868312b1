use crate::{
    parser::{ast::ScalarExprParser, ParseError, QueryParser},
    request::RawExpr,
};

/// `LIMIT`, `OFFSET` and legacy `TOP` values as written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LimitClause {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub top: Option<i64>,
}

pub struct LimitAndOffsetParser;

impl LimitAndOffsetParser {
    fn parse_integer(parser: &mut QueryParser, message: &str) -> Result<i64, ParseError> {
        parser.next_non_whitespace();
        let pivot = parser.position;
        match ScalarExprParser::parse(parser)? {
            RawExpr::Literal(literal) => match literal.as_integer() {
                Some(value) => Ok(value),
                None => ParseError::new(message, pivot, parser).err(),
            },
            _ => ParseError::new(message, pivot, parser).err(),
        }
    }

    fn duplicated(parser: &QueryParser, keyword: &str, pivot: usize) -> ParseError {
        ParseError::new(&format!("Duplicate {}", keyword), pivot, parser)
    }

    /// Accepts the clauses in any order. `LIMIT a, b` reads as offset `a`
    /// and limit `b`.
    pub fn parse(parser: &mut QueryParser) -> Result<LimitClause, ParseError> {
        let mut clause = LimitClause::default();

        while !parser.check_next_phase() {
            let pivot = parser.position;
            if parser.comparers.limit.compare(parser) {
                if clause.limit.is_some() {
                    return Err(Self::duplicated(parser, "LIMIT", pivot));
                }
                parser.jump(parser.comparers.limit.matched_length(parser));
                let first = Self::parse_integer(parser, "Invalid limit")?;
                parser.next_non_whitespace();
                if parser.current() == ',' {
                    if clause.offset.is_some() {
                        return Err(Self::duplicated(parser, "OFFSET", pivot));
                    }
                    parser.next();
                    clause.offset = Some(first);
                    clause.limit = Some(Self::parse_integer(parser, "Invalid limit")?);
                } else {
                    clause.limit = Some(first);
                }
            } else if parser.comparers.offset.compare(parser) {
                if clause.offset.is_some() {
                    return Err(Self::duplicated(parser, "OFFSET", pivot));
                }
                parser.jump(parser.comparers.offset.matched_length(parser));
                clause.offset = Some(Self::parse_integer(parser, "Invalid offset")?);
            } else if parser.comparers.top.compare(parser) {
                if !parser.grammar.supports_top() {
                    let message = format!("TOP is not supported in {}", parser.grammar);
                    return ParseError::new(&message, pivot, parser).err();
                }
                if clause.top.is_some() {
                    return Err(Self::duplicated(parser, "TOP", pivot));
                }
                parser.jump(parser.comparers.top.matched_length(parser));
                clause.top = Some(Self::parse_integer(parser, "Invalid top")?);
            } else {
                return ParseError::new("Invalid limit or offset", pivot, parser).err();
            }
        }

        Ok(clause)
    }
}
