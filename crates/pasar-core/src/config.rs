use crate::app_config::{AppConfig, Environment, VendorEndpoints};
use crate::ConfigError;

pub const DEFAULT_VENDOR_A_URL: &str = "https://intero-warung-xybu.vercel.app/api/warung";
pub const DEFAULT_VENDOR_B_URL: &str = "https://dino-clothes.vercel.app/products";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    // An explicitly empty URL disables the feed.
    let endpoint = |var: &str, default: Option<&str>| -> Option<String> {
        match lookup(var) {
            Ok(raw) => Some(raw.trim().to_owned()).filter(|s| !s.is_empty()),
            Err(_) => default.map(str::to_owned),
        }
    };

    let env = parse_environment(&or_default("PASAR_ENV", "development"));

    let bind_addr = match lookup("PASAR_BIND_ADDR") {
        Ok(raw) => raw
            .parse::<SocketAddr>()
            .map_err(|e| invalid("PASAR_BIND_ADDR", e.to_string()))?,
        Err(_) => {
            let port = or_default("PORT", "3000")
                .parse::<u16>()
                .map_err(|e| invalid("PORT", e.to_string()))?;
            SocketAddr::from(([0, 0, 0, 0], port))
        }
    };

    let log_level = or_default("PASAR_LOG_LEVEL", "info");

    let endpoints = VendorEndpoints {
        vendor_a: endpoint("PASAR_VENDOR_A_URL", Some(DEFAULT_VENDOR_A_URL)),
        vendor_b: endpoint("PASAR_VENDOR_B_URL", Some(DEFAULT_VENDOR_B_URL)),
        vendor_c: endpoint("PASAR_VENDOR_C_URL", None),
    };

    let fetch_timeout_secs = parse_u64("PASAR_FETCH_TIMEOUT_SECS", "10")?;
    if fetch_timeout_secs == 0 {
        return Err(invalid(
            "PASAR_FETCH_TIMEOUT_SECS",
            "must be greater than zero".to_string(),
        ));
    }
    let fetch_user_agent = or_default(
        "PASAR_FETCH_USER_AGENT",
        "pasar/0.1 (marketplace-integration)",
    );
    let fetch_max_retries = parse_u32("PASAR_FETCH_MAX_RETRIES", "0")?;
    let fetch_retry_backoff_ms = parse_u64("PASAR_FETCH_RETRY_BACKOFF_MS", "250")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        endpoints,
        fetch_timeout_secs,
        fetch_user_agent,
        fetch_max_retries,
        fetch_retry_backoff_ms,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
