use once_cell::sync::Lazy;
use tracing::debug;

use crate::{
    config::ConverterConfig,
    context::{ContextError, Expression, FunctionContext, OrderByExpression, QueryContext},
    converter::{AliasTable, ConvertError, ExpressionTranslator, FilterTranslator, LimitResolver},
    functions::{DISTINCT, FunctionRegistry},
    request::BrokerRequest,
};

static DEFAULT_CONVERTER: Lazy<BrokerRequestConverter> = Lazy::new(BrokerRequestConverter::default);

/// Converts with the default configuration.
pub fn convert(request: &BrokerRequest) -> Result<QueryContext, ConvertError> {
    DEFAULT_CONVERTER.convert(request)
}

/// Turns a [`BrokerRequest`] from either grammar into a [`QueryContext`].
///
/// Stateless between calls; one converter may be shared across threads.
#[derive(Debug, Clone)]
pub struct BrokerRequestConverter {
    config: ConverterConfig,
    registry: FunctionRegistry,
}

impl Default for BrokerRequestConverter {
    fn default() -> Self {
        Self::new(ConverterConfig::default())
    }
}

impl BrokerRequestConverter {
    pub fn new(config: ConverterConfig) -> Self {
        let registry = FunctionRegistry::new().with_aggregations(&config.aggregation_functions);
        Self { config, registry }
    }

    pub fn convert(&self, request: &BrokerRequest) -> Result<QueryContext, ConvertError> {
        debug!(
            grammar = %request.source,
            table = %request.table_name,
            select_items = request.select_items.len(),
            "converting broker request"
        );

        let translator = ExpressionTranslator::new(&self.registry);
        let selected = request
            .select_items
            .iter()
            .map(|item| translator.translate(&item.expression))
            .collect::<Result<Vec<_>, _>>()?;
        let aliases = AliasTable::build(&request.select_items, &selected)?;

        let select_expressions = self.select_expressions(request, selected, &aliases)?;

        let filters = FilterTranslator::new(&translator, &aliases);
        let filter = request.filter.as_ref().map(|raw| filters.translate(raw)).transpose()?;
        let group_by_expressions = request
            .group_by
            .as_ref()
            .map(|raws| raws.iter().map(|raw| filters.expression(raw)).collect::<Result<Vec<_>, _>>())
            .transpose()?;
        let order_by_expressions = request
            .order_by
            .as_ref()
            .map(|items| {
                items
                    .iter()
                    .map(|item| Ok(OrderByExpression::new(filters.expression(&item.expression)?, item.ascending)))
                    .collect::<Result<Vec<_>, ConvertError>>()
            })
            .transpose()?;
        let having_filter = request.having.as_ref().map(|raw| filters.translate(raw)).transpose()?;

        let (limit, offset) = LimitResolver::resolve(request, &self.config);

        let context = QueryContext::builder()
            .table_name(&request.table_name)
            .select_expressions(select_expressions)
            .alias_map(aliases.into_map())
            .filter(filter)
            .group_by_expressions(group_by_expressions)
            .order_by_expressions(order_by_expressions)
            .having_filter(having_filter)
            .limit(limit)
            .offset(offset)
            .query_options(request.query_options.clone())
            .build()?;

        debug!(context = %context, "converted broker request");
        Ok(context)
    }

    /// Applies the select list rules in order: lone `*`, DISTINCT folding,
    /// then aggregation projection.
    fn select_expressions(
        &self,
        request: &BrokerRequest,
        selected: Vec<Expression>,
        aliases: &AliasTable,
    ) -> Result<Vec<Expression>, ConvertError> {
        let expressions = if request.select_star {
            vec![Expression::wildcard()]
        } else {
            selected.into_iter().map(|expression| aliases.substitute(expression)).collect::<Vec<_>>()
        };
        if expressions.is_empty() {
            return Err(ContextError::EmptySelectList.into());
        }

        if request.distinct {
            return Ok(vec![Expression::for_function(FunctionContext::aggregation(DISTINCT, expressions))]);
        }
        if expressions.iter().any(Expression::contains_aggregation) {
            return Ok(expressions.into_iter().filter(Expression::contains_aggregation).collect());
        }
        Ok(expressions)
    }
}
