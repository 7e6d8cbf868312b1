use crate::{parser::QueryParser, request::FilterOperator};

pub struct ComparatorOp;

impl ComparatorOp {
    /// Consumes a comparison operator under the cursor. Two-char operators
    /// are tried first.
    pub fn check(parser: &mut QueryParser) -> Option<FilterOperator> {
        if parser.comparers.greater_than_or_equal.compare(parser) {
            parser.jump(parser.comparers.greater_than_or_equal.matched_length(parser));
            return Some(FilterOperator::GreaterThanOrEqual);
        }

        if parser.comparers.less_than_or_equal.compare(parser) {
            parser.jump(parser.comparers.less_than_or_equal.matched_length(parser));
            return Some(FilterOperator::LessThanOrEqual);
        }

        if parser.comparers.not_equal_b.compare(parser) || parser.comparers.not_equal_c.compare(parser) {
            parser.jump(parser.comparers.not_equal_b.matched_length(parser));
            return Some(FilterOperator::NotEquals);
        }

        if parser.comparers.greater_than.compare(parser) {
            parser.jump(parser.comparers.greater_than.matched_length(parser));
            return Some(FilterOperator::GreaterThan);
        }

        if parser.comparers.less_than.compare(parser) {
            parser.jump(parser.comparers.less_than.matched_length(parser));
            return Some(FilterOperator::LessThan);
        }

        if parser.comparers.equal.compare(parser) {
            parser.jump(parser.comparers.equal.matched_length(parser));
            return Some(FilterOperator::Equals);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use crate::{parser::{ast::ComparatorOp, QueryParser}, request::{FilterOperator, Grammar}};

    #[test]
    pub fn test_comparators() {
        let cases = [
            ("= 1", FilterOperator::Equals),
            ("<> 1", FilterOperator::NotEquals),
            ("!= 1", FilterOperator::NotEquals),
            ("< 1", FilterOperator::LessThan),
            ("<= 1", FilterOperator::LessThanOrEqual),
            ("> 1", FilterOperator::GreaterThan),
            (">=1", FilterOperator::GreaterThanOrEqual),
        ];

        for (text, expected) in cases {
            let mut parser = QueryParser::new(text, Grammar::Sql);
            assert_eq!(ComparatorOp::check(&mut parser), Some(expected), "{}", text);
            assert_eq!(parser.current(), if text == ">=1" { '1' } else { ' ' });
        }
    }

    #[test]
    pub fn test_not_a_comparator() {
        let mut parser = QueryParser::new("IN (1)", Grammar::Sql);

        assert_eq!(ComparatorOp::check(&mut parser), None);
        assert_eq!(parser.position, 0);
    }
}
