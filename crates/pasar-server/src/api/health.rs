use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

pub(super) const SERVICE_MESSAGE: &str = "Banyuwangi Marketplace Integration Service is running";

#[derive(Debug, Serialize)]
pub(super) struct HealthBody {
    status: &'static str,
    message: &'static str,
    timestamp: String,
}

pub(super) async fn health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "OK",
        message: SERVICE_MESSAGE,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
