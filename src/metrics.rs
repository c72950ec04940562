//! Query counters, optionally exported to Prometheus.
//!
//! Counters are no-ops until [`init_metrics`] installs a recorder.

use crate::error::{CatalogError, Result};
use std::net::SocketAddr;
use tracing::info;

pub const QUERIES_TOTAL: &str = "book_catalog_queries_total";
pub const QUERY_ERRORS_TOTAL: &str = "book_catalog_query_errors_total";

/// Install the Prometheus exporter listening on `addr`
pub fn init_metrics(addr: &str) -> Result<()> {
    let addr: SocketAddr = addr
        .parse()
        .map_err(|_| CatalogError::InvalidAddress(addr.to_string()))?;

    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| CatalogError::Config(format!("Prometheus exporter install failed: {e}")))?;

    ::metrics::describe_counter!(QUERIES_TOTAL, "GraphQL queries executed");
    ::metrics::describe_counter!(QUERY_ERRORS_TOTAL, "GraphQL queries that returned errors");
    info!("Prometheus exporter listening on http://{}/metrics", addr);
    Ok(())
}

pub fn record_query(ok: bool) {
    ::metrics::counter!(QUERIES_TOTAL).increment(1);
    if !ok {
        ::metrics::counter!(QUERY_ERRORS_TOTAL).increment(1);
    }
}
