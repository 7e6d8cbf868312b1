use crate::{
    parser::{ast::ScalarExprParser, ParseError, QueryParser},
    request::OrderByItem,
};

pub struct OrderBy;

impl OrderBy {
    pub fn parse_single(parser: &mut QueryParser) -> Result<OrderByItem, ParseError> {
        let expression = ScalarExprParser::parse(parser)?;
        parser.next_non_whitespace();

        if parser.comparers.asc.compare(parser) {
            parser.jump(parser.comparers.asc.matched_length(parser));
            return Ok(OrderByItem::new(expression, true));
        }

        if parser.comparers.desc.compare(parser) {
            parser.jump(parser.comparers.desc.matched_length(parser));
            return Ok(OrderByItem::new(expression, false));
        }

        Ok(OrderByItem::new(expression, true))
    }

    pub fn parse(parser: &mut QueryParser) -> Result<Vec<OrderByItem>, ParseError> {
        if !parser.comparers.order_by.compare(parser) {
            return ParseError::new("Invalid order by", parser.position, parser).err();
        }
        parser.jump(parser.comparers.order_by.matched_length(parser));

        let mut orders: Vec<OrderByItem> = vec![];
        let mut can_consume = true;
        while !parser.check_next_phase() {
            if parser.current() == ',' {
                if can_consume {
                    return ParseError::new("Invalid order by", parser.position, parser).err();
                }
                can_consume = true;
                parser.next();
                continue;
            }
            if !can_consume {
                return ParseError::new("Invalid order by", parser.position, parser).err();
            }
            orders.push(Self::parse_single(parser)?);
            can_consume = false;
        }

        if can_consume {
            return ParseError::new("Invalid order by", parser.position, parser).err();
        }

        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        parser::{ast::OrderBy, Phase, QueryParser},
        request::{Grammar, OrderByItem, RawExpr},
    };

    #[test]
    pub fn test_order_by_single() {
        let mut parser = QueryParser::new("tableA.columnA", Grammar::Sql);

        let result = OrderBy::parse_single(&mut parser).expect("Failed to parse order by");

        assert_eq!(result, OrderByItem::new(RawExpr::identifier("tableA.columnA"), true));
    }

    #[test]
    pub fn test_order_by_directions() {
        let text = "ORDER BY bar ASC, foo DESC, SUB(456, foobar) LIMIT 30, 20";

        let mut parser = QueryParser::new(text, Grammar::Sql);
        parser.check_next_phase();

        let result = OrderBy::parse(&mut parser).expect("Failed to parse order by");

        assert_eq!(result.len(), 3);
        assert!(result[0].ascending);
        assert!(!result[1].ascending);
        assert!(result[2].ascending);
        assert_eq!(result[2].expression.function_name(), Some("SUB"));
        assert_eq!(parser.phase, Phase::LimitAndOffset);
    }

    #[test]
    pub fn test_order_by_desc_at_eof() {
        let mut parser = QueryParser::new("ORDER BY foo desc", Grammar::Sql);
        parser.check_next_phase();

        let result = OrderBy::parse(&mut parser).expect("Failed to parse order by");

        assert!(!result[0].ascending);
        assert_eq!(parser.phase, Phase::EOF);
    }

    #[test]
    pub fn test_order_by_wrong() {
        for text in ["ORDER BY", "ORDER BY foo,", "ORDER BY foo DESC bar"] {
            let mut parser = QueryParser::new(text, Grammar::Sql);
            parser.check_next_phase();
            assert!(OrderBy::parse(&mut parser).is_err(), "{}", text);
        }
    }
}
