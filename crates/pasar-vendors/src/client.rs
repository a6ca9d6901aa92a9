//! HTTP client for vendor product feeds.

use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::FetchError;
use crate::fields::json_type_name;
use crate::retry::retry_with_backoff;

/// Connect phase budget, independent of the overall request timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Fetches a vendor's raw product collection as loosely-typed JSON.
///
/// A feed answers `GET <url>` with a JSON array of records. Non-2xx
/// statuses, bodies that do not parse, and bodies that are not arrays are
/// all typed errors; the caller decides whether to degrade.
///
/// Transient errors (network failures, 429, 5xx) are retried with
/// exponential back-off up to `max_retries` additional attempts.
#[derive(Debug, Clone)]
pub struct VendorClient {
    client: Client,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl VendorClient {
    /// Creates a client with the given per-request timeout, `User-Agent`, and
    /// retry policy. `max_retries = 0` disables retries.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            max_retries,
            backoff_base_ms,
        })
    }

    /// Retrieves the JSON array served at `url`.
    ///
    /// # Errors
    ///
    /// - [`FetchError::InvalidUrl`] if `url` does not parse (not retried).
    /// - [`FetchError::UnexpectedStatus`] for a non-2xx answer (429 and 5xx retried).
    /// - [`FetchError::Http`] for network or TLS failures after all retries.
    /// - [`FetchError::Deserialize`] if the body is not JSON.
    /// - [`FetchError::NotACollection`] if the body is JSON but not an array.
    pub async fn fetch_collection(&self, url: &str) -> Result<Vec<Value>, FetchError> {
        let url = parse_feed_url(url)?;

        retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            let url = url.clone();
            async move {
                let response = self
                    .client
                    .get(url.clone())
                    .header(reqwest::header::ACCEPT, "application/json")
                    .send()
                    .await?;
                let status = response.status();

                if !status.is_success() {
                    return Err(FetchError::UnexpectedStatus {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }

                let body = response.text().await?;
                let parsed = serde_json::from_str::<Value>(&body).map_err(|e| {
                    FetchError::Deserialize {
                        context: format!("product feed from {url}"),
                        source: e,
                    }
                })?;

                match parsed {
                    Value::Array(records) => Ok(records),
                    other => Err(FetchError::NotACollection {
                        url: url.to_string(),
                        found: json_type_name(&other),
                    }),
                }
            }
        })
        .await
    }
}

/// Parses a configured feed URL, accepting only `http` and `https`.
fn parse_feed_url(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw).map_err(|e| FetchError::InvalidUrl {
        url: raw.to_owned(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::InvalidUrl {
            url: raw.to_owned(),
            reason: format!("unsupported scheme \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
