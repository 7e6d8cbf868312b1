use crate::{
    context::WILDCARD,
    functions::DISTINCT,
    parser::{ast::{IdentifierParser, ScalarExprParser, StringParser}, ParseError, QueryParser},
    request::{RawExpr, SelectItem},
};

/// Select list as written, after the lone `*` and PQL `DISTINCT(...)` forms
/// have been recognised.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projection {
    pub items: Vec<SelectItem>,
    pub star: bool,
    pub distinct: bool,
}

pub struct ProjectionParser;

impl ProjectionParser {
    pub fn parse(parser: &mut QueryParser) -> Result<Projection, ParseError> {
        if !parser.comparers.select.compare(parser) {
            return ParseError::new("Invalid select", parser.position, parser).err();
        }
        parser.jump(parser.comparers.select.matched_length(parser));
        parser.next_non_whitespace();
        let pivot = parser.position;

        let mut projection = Projection::default();
        if parser.grammar.distinct_is_keyword() && parser.comparers.distinct.compare(parser) {
            parser.jump(parser.comparers.distinct.matched_length(parser));
            projection.distinct = true;
        }

        let mut can_consume = true;
        while !parser.check_next_phase() {
            if parser.current() == ',' {
                if can_consume {
                    return ParseError::new("Invalid select item", parser.position, parser).err();
                }
                can_consume = true;
                parser.next();
                continue;
            }
            if !can_consume {
                return ParseError::new("Invalid select item", parser.position, parser).err();
            }
            projection.items.push(Self::parse_item(parser)?);
            can_consume = false;
        }

        if can_consume {
            return ParseError::new("Empty select list", pivot, parser).err();
        }

        Self::desugar(parser, projection, pivot)
    }

    fn parse_item(parser: &mut QueryParser) -> Result<SelectItem, ParseError> {
        let expression = ScalarExprParser::parse(parser)?;
        parser.next_non_whitespace();

        if !parser.comparers.alias.compare(parser) {
            return Ok(SelectItem::new(expression));
        }
        if !parser.grammar.supports_alias() {
            let message = format!("Aliases are not supported in {}", parser.grammar);
            return ParseError::new(&message, parser.position, parser).err();
        }
        parser.jump(parser.comparers.alias.matched_length(parser));
        parser.next_non_whitespace();

        let alias = match parser.current() {
            '"' => StringParser::parse(parser)?,
            _ => IdentifierParser::parse(parser)?,
        };

        Ok(SelectItem::aliased(expression, &alias))
    }

    fn desugar(parser: &QueryParser, mut projection: Projection, pivot: usize) -> Result<Projection, ParseError> {
        let wildcard = RawExpr::identifier(WILDCARD);
        if projection.items.iter().any(|item| item.expression == wildcard) {
            if projection.items.len() > 1 || projection.items[0].alias.is_some() {
                return ParseError::new("'*' must be the only select item", pivot, parser).err();
            }
            projection.items.clear();
            projection.star = true;
            return Ok(projection);
        }

        if !parser.grammar.distinct_is_keyword() && projection.items.len() == 1 {
            let is_distinct = projection.items[0]
                .expression
                .function_name()
                .is_some_and(|name| name.eq_ignore_ascii_case(DISTINCT));
            if is_distinct {
                if let Some(SelectItem { expression: RawExpr::Function { operands, .. }, .. }) = projection.items.pop() {
                    projection.items = operands.into_iter().map(SelectItem::new).collect();
                    projection.distinct = true;
                }
            }
        }

        Ok(projection)
    }
}
