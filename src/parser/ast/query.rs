use crate::{
    parser::{
        ast::{CollectionParser, GroupBy, HavingParser, LimitAndOffsetParser, OptionsParser, OrderBy, ProjectionParser, WhereParser},
        ParseError, Phase, QueryParser,
    },
    request::BrokerRequest,
};

/// Drives the clause parsers phase by phase into one [`BrokerRequest`].
pub struct Query;

impl Query {
    pub fn parse(parser: &mut QueryParser) -> Result<BrokerRequest, ParseError> {
        parser.next_non_whitespace();

        let mut request = BrokerRequest::new(parser.grammar, "");

        while parser.phase != Phase::EOF {
            match parser.phase {
                Phase::Projection => {
                    let projection = ProjectionParser::parse(parser)?;
                    request.select_items = projection.items;
                    request.select_star = projection.star;
                    request.distinct = projection.distinct;
                },
                Phase::Collections => request.table_name = CollectionParser::parse(parser)?,
                Phase::Criteria => request.filter = Some(WhereParser::parse(parser)?),
                Phase::Aggregates => request.group_by = Some(GroupBy::parse(parser)?),
                Phase::Having => request.having = Some(HavingParser::parse(parser)?),
                Phase::OrderBy => request.order_by = Some(OrderBy::parse(parser)?),
                Phase::LimitAndOffset => {
                    let clause = LimitAndOffsetParser::parse(parser)?;
                    request.limit = clause.limit;
                    request.offset = clause.offset;
                    request.top = clause.top;
                },
                Phase::Options => request.query_options = OptionsParser::parse(parser)?,
                Phase::EOF => break,
            }
        }

        if request.table_name.is_empty() {
            return ParseError::new("Missing FROM clause", parser.position, parser).err();
        }

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        parser::{ast::Query, QueryParser},
        request::{Grammar, OrderByItem, RawExpr},
    };

    #[test]
    pub fn test_query() {
        let text = r#"
SELECT SUM(foo) AS a, bar AS b
FROM testTable
WHERE b IN (5, 10, 15) AND foo > 3
GROUP BY b
HAVING SUM(foo) > 10
ORDER BY a DESC
LIMIT 60, 20
OPTION(timeoutMs=100)
        "#;

        let mut parser = QueryParser::new(text, Grammar::Sql);
        let request = Query::parse(&mut parser).expect("Failed to parse query");

        assert_eq!(request.table_name, "testTable");
        assert_eq!(request.select_items.len(), 2);
        assert_eq!(request.filter.as_ref().and_then(|f| f.function_name()), Some("AND"));
        assert_eq!(request.group_by, Some(vec![RawExpr::identifier("b")]));
        assert!(request.having.is_some());
        assert_eq!(request.order_by, Some(vec![OrderByItem::new(RawExpr::identifier("a"), false)]));
        assert_eq!(request.offset, Some(60));
        assert_eq!(request.limit, Some(20));
        assert_eq!(request.query_options.get("timeoutMs").map(String::as_str), Some("100"));
    }

    #[test]
    pub fn test_query_two_word_keywords_with_wide_spacing() {
        let text = "SELECT foo FROM testTable GROUP  BY foo ORDER\n  BY foo DESC";

        let mut parser = QueryParser::new(text, Grammar::Sql);
        let request = Query::parse(&mut parser).expect("Failed to parse query");

        assert_eq!(request.group_by, Some(vec![RawExpr::identifier("foo")]));
        assert_eq!(request.order_by, Some(vec![OrderByItem::new(RawExpr::identifier("foo"), false)]));
    }

    #[test]
    pub fn test_query_minimal() {
        let mut parser = QueryParser::new("select * from testTable", Grammar::Pql);
        let request = Query::parse(&mut parser).expect("Failed to parse query");

        assert!(request.select_star);
        assert_eq!(request.source, Grammar::Pql);
        assert!(request.filter.is_none());
        assert!(request.group_by.is_none());
        assert!(request.limit.is_none());
    }

    #[test]
    pub fn test_query_errors() {
        let cases = [
            "SELECT foo",
            "UPDATE testTable",
            "SELECT foo FROM testTable WHERE",
            "SELECT foo FROM testTable LIMIT 1 WHERE foo = 1",
            "SELECT foo FROM testTable ORDER BY foo GROUP BY foo",
        ];

        for text in cases {
            let mut parser = QueryParser::new(text, Grammar::Sql);
            assert!(Query::parse(&mut parser).is_err(), "{}", text);
        }
    }
}
