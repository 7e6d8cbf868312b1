use crate::{
    parser::{ast::{ArgsParser, ComparatorOp, ScalarExprParser}, ParseError, QueryParser},
    request::{FilterOperator, RawExpr},
};

/// Parses a boolean filter into a raw filter tree.
///
/// `OR` binds looser than `AND`, which binds looser than `NOT`. Chains of the
/// same connective are one n-ary node in PQL and left-nested binary nodes in
/// SQL.
pub struct PredicateParser;

impl PredicateParser {
    pub fn parse(parser: &mut QueryParser) -> Result<RawExpr, ParseError> {
        Self::parse_or(parser)
    }

    fn parse_or(parser: &mut QueryParser) -> Result<RawExpr, ParseError> {
        let mut children = vec![Self::parse_and(parser)?];
        loop {
            parser.next_non_whitespace();
            if !parser.comparers.or.compare(parser) {
                break;
            }
            parser.jump(parser.comparers.or.matched_length(parser));
            children.push(Self::parse_and(parser)?);
        }

        Ok(Self::combine(parser, FilterOperator::Or, children))
    }

    fn parse_and(parser: &mut QueryParser) -> Result<RawExpr, ParseError> {
        let mut children = vec![Self::parse_not(parser)?];
        loop {
            parser.next_non_whitespace();
            if !parser.comparers.and.compare(parser) {
                break;
            }
            parser.jump(parser.comparers.and.matched_length(parser));
            children.push(Self::parse_not(parser)?);
        }

        Ok(Self::combine(parser, FilterOperator::And, children))
    }

    fn parse_not(parser: &mut QueryParser) -> Result<RawExpr, ParseError> {
        parser.next_non_whitespace();
        if parser.comparers.not.compare(parser) {
            parser.jump(parser.comparers.not.matched_length(parser));
            let child = Self::parse_not(parser)?;
            return Ok(RawExpr::call(FilterOperator::Not.name(), vec![child]));
        }

        Self::parse_primary(parser)
    }

    fn parse_primary(parser: &mut QueryParser) -> Result<RawExpr, ParseError> {
        parser.next_non_whitespace();
        if parser.current() != '(' {
            return Self::parse_single(parser);
        }

        parser.next();
        let inner = Self::parse_or(parser)?;
        parser.expect_char(')', "Missing closing parenthesis")?;

        Ok(inner)
    }

    fn combine(parser: &QueryParser, op: FilterOperator, children: Vec<RawExpr>) -> RawExpr {
        if children.len() > 1 && parser.grammar.flattens_boolean_chains() {
            return RawExpr::call(op.name(), children);
        }

        children
            .into_iter()
            .reduce(|left, right| RawExpr::call(op.name(), vec![left, right]))
            .unwrap_or_else(|| RawExpr::call(op.name(), vec![]))
    }

    /// One comparison or predicate with its left-hand scalar.
    pub fn parse_single(parser: &mut QueryParser) -> Result<RawExpr, ParseError> {
        let pivot = parser.position;
        let left = ScalarExprParser::parse(parser)?;

        parser.next_non_whitespace();

        if let Some(op) = ComparatorOp::check(parser) {
            let right = ScalarExprParser::parse(parser)?;
            return Ok(RawExpr::call(op.name(), vec![left, right]));
        }

        if parser.comparers.not_between.compare(parser) {
            parser.jump(parser.comparers.not_between.matched_length(parser));
            let between = Self::parse_between(parser, left)?;
            return Ok(RawExpr::call(FilterOperator::Not.name(), vec![between]));
        }

        if parser.comparers.between.compare(parser) {
            parser.jump(parser.comparers.between.matched_length(parser));
            return Self::parse_between(parser, left);
        }

        if parser.comparers.not_in.compare(parser) {
            parser.jump(parser.comparers.not_in.matched_length(parser));
            return Self::parse_in(parser, FilterOperator::NotIn, left);
        }

        if parser.comparers.r#in.compare(parser) {
            parser.jump(parser.comparers.r#in.matched_length(parser));
            return Self::parse_in(parser, FilterOperator::In, left);
        }

        if parser.comparers.is_not_null.compare(parser) {
            parser.jump(parser.comparers.is_not_null.matched_length(parser));
            return Ok(RawExpr::call(FilterOperator::IsNotNull.name(), vec![left]));
        }

        if parser.comparers.is_null.compare(parser) {
            parser.jump(parser.comparers.is_null.matched_length(parser));
            return Ok(RawExpr::call(FilterOperator::IsNull.name(), vec![left]));
        }

        if parser.comparers.not_like.compare(parser) {
            parser.jump(parser.comparers.not_like.matched_length(parser));
            let pattern = ScalarExprParser::parse(parser)?;
            let like = RawExpr::call("LIKE", vec![left, pattern]);
            return Ok(RawExpr::call(FilterOperator::Not.name(), vec![like]));
        }

        if parser.comparers.like.compare(parser) {
            parser.jump(parser.comparers.like.matched_length(parser));
            let pattern = ScalarExprParser::parse(parser)?;
            return Ok(RawExpr::call("LIKE", vec![left, pattern]));
        }

        // TEXT_MATCH(col, 'q') and friends stand alone.
        if let RawExpr::Function { .. } = left {
            return Ok(left);
        }

        ParseError::new("Invalid predicate", pivot, parser).err()
    }

    fn parse_between(parser: &mut QueryParser, left: RawExpr) -> Result<RawExpr, ParseError> {
        let lower = ScalarExprParser::parse(parser)?;
        parser.next_non_whitespace();
        if !parser.comparers.and.compare(parser) {
            return ParseError::new("Expected AND in BETWEEN", parser.position, parser).err();
        }
        parser.jump(parser.comparers.and.matched_length(parser));
        let upper = ScalarExprParser::parse(parser)?;

        Ok(RawExpr::call(FilterOperator::Between.name(), vec![left, lower, upper]))
    }

    fn parse_in(parser: &mut QueryParser, op: FilterOperator, left: RawExpr) -> Result<RawExpr, ParseError> {
        parser.next_non_whitespace();
        let pivot = parser.position;
        let values = ArgsParser::parse(parser)?;
        if values.is_empty() {
            return ParseError::new("Empty IN list", pivot, parser).err();
        }

        let mut operands = vec![left];
        operands.extend(values);
        Ok(RawExpr::call(op.name(), operands))
    }
}
