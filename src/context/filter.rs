use std::{collections::HashSet, fmt};

use serde::{Deserialize, Serialize};

use crate::context::{ContextError, Predicate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterType {
    And,
    Or,
    Not,
    Predicate,
}

/// Boolean filter tree. AND/OR nodes always hold at least two children when
/// built through [`Filter::and`] / [`Filter::or`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Filter {
    And(Vec<Filter>),
    Or(Vec<Filter>),
    Not(Box<Filter>),
    Predicate(Predicate),
}

impl Filter {
    pub fn and(children: Vec<Filter>) -> Result<Self, ContextError> {
        if children.len() < 2 {
            return Err(ContextError::DegenerateBooleanFilter { operator: "AND", children: children.len() });
        }
        Ok(Filter::And(children))
    }

    pub fn or(children: Vec<Filter>) -> Result<Self, ContextError> {
        if children.len() < 2 {
            return Err(ContextError::DegenerateBooleanFilter { operator: "OR", children: children.len() });
        }
        Ok(Filter::Or(children))
    }

    pub fn not(child: Filter) -> Self {
        Filter::Not(Box::new(child))
    }

    pub fn predicate(predicate: Predicate) -> Self {
        Filter::Predicate(predicate)
    }

    pub fn filter_type(&self) -> FilterType {
        match self {
            Filter::And(_) => FilterType::And,
            Filter::Or(_) => FilterType::Or,
            Filter::Not(_) => FilterType::Not,
            Filter::Predicate(_) => FilterType::Predicate,
        }
    }

    /// Direct children; a NOT node has exactly one, a predicate none.
    pub fn children(&self) -> &[Filter] {
        match self {
            Filter::And(children) | Filter::Or(children) => children,
            Filter::Not(child) => std::slice::from_ref(child.as_ref()),
            Filter::Predicate(_) => &[],
        }
    }

    pub fn get_predicate(&self) -> Option<&Predicate> {
        match self {
            Filter::Predicate(predicate) => Some(predicate),
            _ => None,
        }
    }

    pub fn collect_columns(&self, columns: &mut HashSet<String>) {
        match self {
            Filter::Predicate(predicate) => predicate.collect_columns(columns),
            _ => self.children().iter().for_each(|child| child.collect_columns(columns)),
        }
    }

    /// Re-checks the arity of every boolean node in the tree.
    pub fn validate(&self) -> Result<(), ContextError> {
        match self {
            Filter::And(children) if children.len() < 2 => {
                Err(ContextError::DegenerateBooleanFilter { operator: "AND", children: children.len() })
            }
            Filter::Or(children) if children.len() < 2 => {
                Err(ContextError::DegenerateBooleanFilter { operator: "OR", children: children.len() })
            }
            Filter::Predicate(_) => Ok(()),
            _ => self.children().iter().try_for_each(Filter::validate),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, children: &[Filter], separator: &str) -> fmt::Result {
    f.write_str("(")?;
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{}", child)?;
    }
    f.write_str(")")
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::And(children) => write_joined(f, children, " AND "),
            Filter::Or(children) => write_joined(f, children, " OR "),
            Filter::Not(child) => write!(f, "(NOT {})", child),
            Filter::Predicate(predicate) => write!(f, "{}", predicate),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::context::{ContextError, Expression, Filter, FilterType, FunctionContext, Predicate, UNBOUNDED};

    fn gt_15() -> Filter {
        Filter::predicate(Predicate::range(Expression::for_identifier("foo"), false, "15", false, UNBOUNDED))
    }

    fn between() -> Filter {
        let div = Expression::for_function(FunctionContext::transform(
            "div",
            vec![Expression::for_identifier("bar"), Expression::for_identifier("foo")],
        ));
        Filter::predicate(Predicate::range(div, true, "10", true, "20"))
    }

    fn text_match() -> Filter {
        Filter::predicate(Predicate::TextMatch { lhs: Expression::for_identifier("foobar"), query: "potato".into() })
    }

    #[test]
    pub fn test_nested_display() {
        let filter = Filter::and(vec![gt_15(), Filter::or(vec![between(), text_match()]).unwrap()]).unwrap();

        assert_eq!(
            filter.to_string(),
            "(foo IN RANGE (15,*) AND (div(bar,foo) IN RANGE [10,20] OR foobar TEXT_MATCH 'potato'))"
        );
        assert_eq!(filter.filter_type(), FilterType::And);
        assert_eq!(filter.children().len(), 2);
        assert_eq!(filter.children()[1].filter_type(), FilterType::Or);
    }

    #[test]
    pub fn test_degenerate_boolean_nodes_are_rejected() {
        assert_eq!(
            Filter::and(vec![gt_15()]),
            Err(ContextError::DegenerateBooleanFilter { operator: "AND", children: 1 })
        );
        assert_eq!(
            Filter::or(vec![]),
            Err(ContextError::DegenerateBooleanFilter { operator: "OR", children: 0 })
        );
    }

    #[test]
    pub fn test_validate_walks_nested_nodes() {
        let filter = Filter::not(Filter::Or(vec![gt_15()]));

        assert!(filter.validate().is_err());
        assert!(Filter::not(gt_15()).validate().is_ok());
    }

    #[test]
    pub fn test_nested_and_is_not_flattened() {
        let inner = Filter::and(vec![gt_15(), text_match()]).unwrap();
        let outer = Filter::and(vec![inner, between()]).unwrap();

        assert_eq!(
            outer.to_string(),
            "((foo IN RANGE (15,*) AND foobar TEXT_MATCH 'potato') AND div(bar,foo) IN RANGE [10,20])"
        );
    }

    #[test]
    pub fn test_not_display_and_children() {
        let filter = Filter::not(text_match());

        assert_eq!(filter.to_string(), "(NOT foobar TEXT_MATCH 'potato')");
        assert_eq!(filter.children(), &[text_match()]);
        assert!(filter.get_predicate().is_none());
    }

    #[test]
    pub fn test_collect_columns() {
        let filter = Filter::and(vec![gt_15(), Filter::or(vec![between(), text_match()]).unwrap()]).unwrap();
        let mut columns = HashSet::new();
        filter.collect_columns(&mut columns);

        assert_eq!(columns, HashSet::from(["foo".to_string(), "bar".to_string(), "foobar".to_string()]));
    }
}
