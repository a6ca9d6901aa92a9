use std::panic::AssertUnwindSafe;

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use futures::FutureExt;
use pasar_core::CanonicalProduct;
use pasar_vendors::{aggregate, AggregateOptions, SourceCounts};
use serde::Serialize;

use crate::middleware::{panic_message, RequestId};

use super::{ApiError, AppState};

/// Whether the query string opts in to the built-in Vendor C sample.
///
/// Any `test=true` (any case) or `test=1` pair enables it. Repeated keys and
/// unrelated parameters are ignored.
fn wants_sample(params: &[(String, String)]) -> bool {
    params
        .iter()
        .any(|(k, v)| k == "test" && (v.eq_ignore_ascii_case("true") || v == "1"))
}

#[derive(Debug, Serialize)]
pub(super) struct ProductsBody {
    success: bool,
    data: Vec<CanonicalProduct>,
    count: usize,
    sources: SourceCounts,
}

pub(super) async fn list_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<ProductsBody>, ApiError> {
    let options = AggregateOptions {
        fetch_timeout: state.fetch_timeout,
        vendor_c_sample: wants_sample(&params),
    };

    let aggregated = AssertUnwindSafe(aggregate(state.feed.as_ref(), options))
        .catch_unwind()
        .await
        .map_err(|panic| {
            let detail = panic_message(panic.as_ref());
            tracing::error!(request_id = %req_id.0, error = %detail, "product aggregation failed");
            ApiError::internal("Error normalizing vendor data").with_detail(detail)
        })?;

    Ok(Json(ProductsBody {
        success: true,
        count: aggregated.products.len(),
        data: aggregated.products,
        sources: aggregated.sources,
    }))
}
