use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path},
    http::Uri,
    Extension, Json,
};
use pasar_core::{CanonicalProduct, UnknownVendor, Vendor};
use pasar_vendors::normalize_payload;
use serde::Serialize;
use serde_json::Value;

use crate::middleware::RequestId;

use super::ApiError;

#[derive(Debug, Serialize)]
pub(super) struct NormalizeBody {
    success: bool,
    data: Vec<CanonicalProduct>,
    count: usize,
    /// Canonical lowercase vendor slug.
    source: &'static str,
}

/// `POST /api/normalize/{vendor_type}`.
///
/// The vendor type is validated before the body is looked at, so an unknown
/// vendor is a 400 whatever the body holds. A segment that does not decode
/// to UTF-8 is treated as an unknown vendor too.
pub(super) async fn normalize_vendor(
    path: Result<Path<String>, PathRejection>,
    uri: Uri,
    Extension(req_id): Extension<RequestId>,
    body: Bytes,
) -> Result<Json<NormalizeBody>, ApiError> {
    let vendor_type = match path {
        Ok(Path(vendor_type)) => vendor_type,
        Err(rejection) => {
            tracing::debug!(request_id = %req_id.0, error = %rejection.body_text(), "undecodable vendor segment");
            let raw = uri.path().rsplit('/').next().unwrap_or_default();
            return Err(ApiError::bad_request(UnknownVendor(raw.to_owned()).to_string()));
        }
    };

    let vendor: Vendor = vendor_type
        .parse()
        .map_err(|e: UnknownVendor| ApiError::bad_request(e.to_string()))?;

    let payload: Value = serde_json::from_slice(&body).map_err(|e| {
        ApiError::bad_request("Invalid JSON in request body").with_detail(e.to_string())
    })?;

    let data = normalize_payload(vendor, &payload).map_err(|e| {
        tracing::warn!(request_id = %req_id.0, %vendor, error = %e, "normalize request rejected");
        ApiError::internal(format!("Error normalizing {} data", vendor.slug())).with_detail(e.to_string())
    })?;

    tracing::debug!(request_id = %req_id.0, %vendor, count = data.len(), "normalized vendor payload");

    Ok(Json(NormalizeBody {
        success: true,
        count: data.len(),
        data,
        source: vendor.slug(),
    }))
}
