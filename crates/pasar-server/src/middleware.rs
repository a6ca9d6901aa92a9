use std::any::Any;

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::api::ApiError;

/// Newtype wrapping a request ID string, stored as a request extension.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Axum middleware that extracts or generates a request ID.
///
/// If the incoming request has an `x-request-id` header, that value is used.
/// Otherwise a new `UUIDv4` is generated. The ID is:
/// - Inserted into request extensions as [`RequestId`]
/// - Set on the response as the `x-request-id` header
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    req.extensions_mut().insert(RequestId(id.clone()));

    let mut res = next.run(req).await;

    if let Ok(val) = HeaderValue::from_str(&id) {
        res.headers_mut().insert("x-request-id", val);
    }

    res
}

/// Renders a handler panic as the generic 500 envelope.
///
/// The panic message is included only when `expose_detail` is set.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>, expose_detail: bool) -> Response {
    let message = panic_message(panic.as_ref());
    tracing::error!(panic = %message, "request handler panicked");

    let mut error = ApiError::internal("Something went wrong!");
    if expose_detail {
        error = error.with_detail(message);
    }
    error.into_response()
}

/// Best-effort text of a panic payload.
pub fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn panic_message_reads_str_and_string_payloads() {
        let static_str: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(static_str.as_ref()), "boom");

        let owned: Box<dyn Any + Send> = Box::new(String::from("kaboom"));
        assert_eq!(panic_message(owned.as_ref()), "kaboom");

        let other: Box<dyn Any + Send> = Box::new(42_u8);
        assert_eq!(panic_message(other.as_ref()), "unknown panic");
    }

    #[test]
    fn panic_response_is_internal_error() {
        let response = panic_response(Box::new("boom"), false);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
