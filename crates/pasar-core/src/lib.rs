pub mod app_config;
pub mod config;
pub mod products;
pub mod vendor;

use thiserror::Error;

pub use app_config::{AppConfig, Environment, VendorEndpoints};
pub use config::{load_app_config, load_app_config_from_env};
pub use products::{CanonicalProduct, ProductStatus};
pub use vendor::{UnknownVendor, Vendor};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
