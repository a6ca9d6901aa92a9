use std::net::SocketAddr;

use crate::vendor::Vendor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Upstream feed URLs, one per vendor. `None` means the vendor has no live
/// feed and contributes nothing to an aggregation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct VendorEndpoints {
    pub vendor_a: Option<String>,
    pub vendor_b: Option<String>,
    pub vendor_c: Option<String>,
}

impl VendorEndpoints {
    #[must_use]
    pub fn get(&self, vendor: Vendor) -> Option<&str> {
        match vendor {
            Vendor::A => self.vendor_a.as_deref(),
            Vendor::B => self.vendor_b.as_deref(),
            Vendor::C => self.vendor_c.as_deref(),
        }
    }
}

/// Drops the query string, which is where feed tokens usually live.
fn redact_url(url: &str) -> String {
    match url.split_once('?') {
        Some((base, _)) => format!("{base}?[redacted]"),
        None => url.to_owned(),
    }
}

impl std::fmt::Debug for VendorEndpoints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VendorEndpoints")
            .field("vendor_a", &self.vendor_a.as_deref().map(redact_url))
            .field("vendor_b", &self.vendor_b.as_deref().map(redact_url))
            .field("vendor_c", &self.vendor_c.as_deref().map(redact_url))
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub endpoints: VendorEndpoints,
    /// Upper bound on a single vendor fetch, retries included.
    pub fetch_timeout_secs: u64,
    pub fetch_user_agent: String,
    pub fetch_max_retries: u32,
    pub fetch_retry_backoff_ms: u64,
}

impl AppConfig {
    /// Internal error details are only shown to callers during local development.
    #[must_use]
    pub fn exposes_error_detail(&self) -> bool {
        self.env == Environment::Development
    }
}
