use pasar_core::Vendor;
use thiserror::Error;

/// Failures while retrieving a raw vendor collection.
///
/// None of these reach an aggregation caller: the orchestrator substitutes an
/// empty collection and logs the error.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("expected a JSON array from {url}, got {found}")]
    NotACollection { url: String, found: &'static str },

    #[error("no feed URL configured for {vendor}")]
    NotConfigured { vendor: Vendor },

    #[error("invalid feed URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Structural failure of a normalization request.
///
/// Individual record defects never produce an error; only a payload that is
/// not a collection at all does.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("expected a JSON array of {vendor} records, got {found}")]
    NotAnArray { vendor: Vendor, found: &'static str },
}
