mod health;
mod normalize;
mod products;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use pasar_vendors::VendorFeed;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::middleware::{panic_response, request_id};

#[derive(Clone)]
pub struct AppState {
    pub feed: Arc<dyn VendorFeed>,
    /// Per-vendor fetch budget for `/api/products`.
    pub fetch_timeout: Duration,
    /// Include panic messages in 500 bodies.
    pub expose_error_detail: bool,
}

/// Failure envelope: `{"success": false, "message": ..., "error": ...}`.
///
/// `error` is omitted when there is no detail to report.
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    status: StatusCode,
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            success: false,
            message: message.into(),
            error: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.error = Some(detail.into());
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self)).into_response()
    }
}

/// Methods advertised on every response, not only on preflights.
const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

/// Any-origin CORS. The layer also answers every `OPTIONS` request with an
/// empty `200`, on matched and unmatched paths alike.
fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
}

async fn method_not_allowed() -> ApiError {
    ApiError::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

async fn route_not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "Route not found")
}

pub fn build_app(state: AppState) -> Router {
    let expose_detail = state.expose_error_detail;

    Router::new()
        .route("/health", get(health::health).fallback(method_not_allowed))
        .route(
            "/api/health",
            get(health::health).fallback(method_not_allowed),
        )
        .route(
            "/api/products",
            get(products::list_products).fallback(method_not_allowed),
        )
        .route(
            "/api/normalize/{vendor_type}",
            post(normalize::normalize_vendor).fallback(method_not_allowed),
        )
        .fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::ACCESS_CONTROL_ALLOW_METHODS,
                    HeaderValue::from_static(ALLOWED_METHODS),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::ACCESS_CONTROL_ALLOW_HEADERS,
                    HeaderValue::from_static("Content-Type"),
                ))
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id))
                .layer(CatchPanicLayer::custom(
                    move |panic: Box<dyn std::any::Any + Send + 'static>| {
                        panic_response(panic, expose_detail)
                    },
                )),
        )
        .with_state(state)
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
