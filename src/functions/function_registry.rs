use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::context::FunctionType;

/// Aggregation a DISTINCT select list is folded into.
pub const DISTINCT: &str = "distinct";

const AGGREGATION_FUNCTIONS: &[&str] = &[
    "count",
    "min",
    "max",
    "sum",
    "avg",
    "mode",
    "minmaxrange",
    "distinctcount",
    "distinctcountbitmap",
    "segmentpartitioneddistinctcount",
    "distinctcounthll",
    "distinctcountrawhll",
    "fasthll",
    "distinctcountthetasketch",
    "distinctcountrawthetasketch",
    "percentile",
    "percentileest",
    "percentilerawest",
    "percentiletdigest",
    "percentilerawtdigest",
    "idset",
    "countmv",
    "minmv",
    "maxmv",
    "summv",
    "avgmv",
    "minmaxrangemv",
    "distinctcountmv",
    "distinctcountbitmapmv",
    "distinctcounthllmv",
    "distinctcountrawhllmv",
    "percentilemv",
    "percentileestmv",
    "percentiletdigestmv",
    "distinct",
];

/// `percentile95`, `percentileest50mv`, ...
static PERCENTILE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^percentile(est|rawest|tdigest|rawtdigest)?\d+(mv)?$").expect("valid percentile pattern")
});

static DEFAULT_REGISTRY: Lazy<FunctionRegistry> = Lazy::new(FunctionRegistry::new);

/// Case-insensitive lookup of aggregation function names.
#[derive(Debug, Clone)]
pub struct FunctionRegistry {
    aggregations: HashSet<String>,
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self {
            aggregations: AGGREGATION_FUNCTIONS.iter().map(|name| name.to_string()).collect(),
        }
    }

    /// Process-wide registry with the built-in aggregations only.
    pub fn global() -> &'static FunctionRegistry {
        &DEFAULT_REGISTRY
    }

    pub fn register_aggregation(&mut self, name: &str) {
        self.aggregations.insert(name.to_ascii_lowercase());
    }

    pub fn with_aggregations<'a>(mut self, names: impl IntoIterator<Item = &'a String>) -> Self {
        for name in names {
            self.register_aggregation(name);
        }
        self
    }

    pub fn is_aggregation(&self, name: &str) -> bool {
        let name = name.to_ascii_lowercase();
        self.aggregations.contains(&name) || PERCENTILE_PATTERN.is_match(&name)
    }

    pub fn function_type(&self, name: &str) -> FunctionType {
        if self.is_aggregation(name) {
            FunctionType::Aggregation
        } else {
            FunctionType::Transform
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{context::FunctionType, functions::FunctionRegistry};

    #[test]
    pub fn test_builtin_aggregations_any_case() {
        let registry = FunctionRegistry::global();

        assert!(registry.is_aggregation("COUNT"));
        assert!(registry.is_aggregation("Sum"));
        assert!(registry.is_aggregation("DISTINCTCOUNTTHETASKETCH"));
        assert!(registry.is_aggregation("distinct"));
        assert_eq!(registry.function_type("max"), FunctionType::Aggregation);
    }

    #[test]
    pub fn test_transforms() {
        let registry = FunctionRegistry::global();

        assert!(!registry.is_aggregation("add"));
        assert!(!registry.is_aggregation("DIV"));
        assert_eq!(registry.function_type("sub"), FunctionType::Transform);
    }

    #[test]
    pub fn test_percentile_family() {
        let registry = FunctionRegistry::global();

        assert!(registry.is_aggregation("PERCENTILE95"));
        assert!(registry.is_aggregation("percentileest50"));
        assert!(registry.is_aggregation("percentiletdigest99mv"));
        assert!(!registry.is_aggregation("percentilex"));
    }

    #[test]
    pub fn test_registered_aggregation() {
        let extra = vec!["LastWithTime".to_string()];
        let registry = FunctionRegistry::new().with_aggregations(&extra);

        assert!(registry.is_aggregation("lastwithtime"));
        assert!(!FunctionRegistry::global().is_aggregation("lastwithtime"));
        assert_eq!(registry.function_type("LASTWITHTIME"), FunctionType::Aggregation);
    }
}
