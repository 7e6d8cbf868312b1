use crate::{
    parser::{ast::ScalarExprParser, ParseError, QueryParser},
    request::RawExpr,
};

pub struct GroupBy;

impl GroupBy {
    pub fn parse(parser: &mut QueryParser) -> Result<Vec<RawExpr>, ParseError> {
        if !parser.comparers.group_by.compare(parser) {
            return ParseError::new("Invalid group by", parser.position, parser).err();
        }
        parser.jump(parser.comparers.group_by.matched_length(parser));

        let mut groups: Vec<RawExpr> = vec![];
        let mut can_consume = true;
        while !parser.check_next_phase() {
            if parser.current() == ',' {
                if can_consume {
                    return ParseError::new("Invalid group by", parser.position, parser).err();
                }
                can_consume = true;
                parser.next();
                continue;
            }
            if !can_consume {
                return ParseError::new("Invalid group by", parser.position, parser).err();
            }
            groups.push(ScalarExprParser::parse(parser)?);
            can_consume = false;
        }

        if can_consume {
            return ParseError::new("Invalid group by", parser.position, parser).err();
        }

        Ok(groups)
    }
}
