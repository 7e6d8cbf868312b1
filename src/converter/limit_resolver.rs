use tracing::trace;

use crate::{config::ConverterConfig, request::BrokerRequest};

/// Reconciles legacy `TOP` with `LIMIT`.
///
/// TOP wins when LIMIT is absent or zero. A non-zero LIMIT wins otherwise.
/// Neither present falls back to the configured default.
pub struct LimitResolver;

impl LimitResolver {
    pub fn resolve(request: &BrokerRequest, config: &ConverterConfig) -> (i64, i64) {
        let limit = match (request.top, request.limit) {
            (Some(top), None | Some(0)) => top,
            (_, Some(limit)) => limit,
            (None, None) => config.default_limit,
        };
        let offset = request.offset.unwrap_or(config.default_offset);

        trace!(top = ?request.top, requested = ?request.limit, limit, offset, "resolved limit");
        (limit, offset)
    }
}
