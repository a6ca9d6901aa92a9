//! `normalize` command: raw vendor JSON in, canonical products out.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use pasar_core::Vendor;
use pasar_vendors::normalize_payload;
use serde_json::{json, Value};

/// Reads the raw payload from `path`, or from stdin when `None`.
pub(crate) fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read stdin")?;
            Ok(raw)
        }
    }
}

/// Normalizes `raw` and wraps the result in the same envelope the HTTP
/// normalize endpoint returns.
///
/// # Errors
///
/// Returns an error if `raw` is not JSON or is not a JSON array.
pub(crate) fn normalize_document(vendor: Vendor, raw: &str) -> anyhow::Result<Value> {
    let payload: Value = serde_json::from_str(raw).context("input is not valid JSON")?;
    let data = normalize_payload(vendor, &payload)?;
    tracing::debug!(%vendor, count = data.len(), "normalized input");

    Ok(json!({
        "success": true,
        "count": data.len(),
        "data": data,
        "source": vendor.slug(),
    }))
}
