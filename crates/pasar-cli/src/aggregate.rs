//! `aggregate` command: one-shot run of the product aggregation.

use std::time::Duration;

use pasar_core::AppConfig;
use pasar_vendors::{aggregate, AggregateOptions, HttpVendorFeed};
use serde_json::{json, Value};

/// Fetches every configured feed and renders the `/api/products` body.
///
/// # Errors
///
/// Returns an error only if the HTTP client cannot be built. Vendor
/// failures degrade to empty contributions.
pub(crate) async fn run_aggregate(config: &AppConfig, sample: bool) -> anyhow::Result<Value> {
    let feed = HttpVendorFeed::from_config(config)?;
    let result = aggregate(
        &feed,
        AggregateOptions {
            fetch_timeout: Duration::from_secs(config.fetch_timeout_secs),
            vendor_c_sample: sample,
        },
    )
    .await;

    Ok(json!({
        "success": true,
        "count": result.products.len(),
        "data": result.products,
        "sources": result.sources,
    }))
}
