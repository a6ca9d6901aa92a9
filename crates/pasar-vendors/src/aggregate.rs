//! Fetch orchestration: gather every vendor's collection and integrate it.
//!
//! Vendor failures never fail an aggregation. A feed that errors, times out,
//! or is not configured contributes an empty collection and is logged.

use std::time::Duration;

use pasar_core::{CanonicalProduct, Vendor};
use serde::Serialize;
use serde_json::Value;

use crate::error::FetchError;
use crate::feed::VendorFeed;
use crate::fixtures::vendor_c_sample;
use crate::integrate::integrate;

#[derive(Debug, Clone, Copy)]
pub struct AggregateOptions {
    /// Upper bound on each vendor fetch, retries included.
    pub fetch_timeout: Duration,
    /// Use the built-in Vendor C sample instead of fetching Vendor C.
    pub vendor_c_sample: bool,
}

/// Raw record counts per vendor, before normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceCounts {
    pub vendor_a: usize,
    pub vendor_b: usize,
    pub vendor_c: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedProducts {
    pub products: Vec<CanonicalProduct>,
    pub sources: SourceCounts,
}

/// Fetches all vendor collections concurrently and integrates them.
///
/// The fetches are polled together on the calling task, so dropping the
/// returned future cancels any that are still in flight.
pub async fn aggregate<F>(feed: &F, options: AggregateOptions) -> AggregatedProducts
where
    F: VendorFeed + ?Sized,
{
    let vendor_c = async {
        if options.vendor_c_sample {
            vendor_c_sample()
        } else {
            fetch_or_empty(feed, Vendor::C, options.fetch_timeout).await
        }
    };

    let (raw_a, raw_b, raw_c) = tokio::join!(
        fetch_or_empty(feed, Vendor::A, options.fetch_timeout),
        fetch_or_empty(feed, Vendor::B, options.fetch_timeout),
        vendor_c,
    );

    let sources = SourceCounts {
        vendor_a: raw_a.len(),
        vendor_b: raw_b.len(),
        vendor_c: raw_c.len(),
    };
    let products = integrate(&raw_a, &raw_b, &raw_c);

    tracing::info!(
        vendor_a = sources.vendor_a,
        vendor_b = sources.vendor_b,
        vendor_c = sources.vendor_c,
        total = products.len(),
        sample = options.vendor_c_sample,
        "vendor aggregation complete"
    );

    AggregatedProducts { products, sources }
}

async fn fetch_or_empty<F>(feed: &F, vendor: Vendor, limit: Duration) -> Vec<Value>
where
    F: VendorFeed + ?Sized,
{
    match tokio::time::timeout(limit, feed.fetch_raw(vendor)).await {
        Ok(Ok(records)) => {
            tracing::debug!(%vendor, records = records.len(), "vendor feed fetched");
            records
        }
        Ok(Err(FetchError::NotConfigured { .. })) => {
            tracing::debug!(%vendor, "vendor feed not configured, skipping");
            Vec::new()
        }
        Ok(Err(e)) => {
            tracing::warn!(%vendor, error = %e, "vendor feed failed, continuing without it");
            Vec::new()
        }
        Err(_) => {
            tracing::warn!(
                %vendor,
                timeout_ms = u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
                "vendor feed timed out, continuing without it"
            );
            Vec::new()
        }
    }
}
