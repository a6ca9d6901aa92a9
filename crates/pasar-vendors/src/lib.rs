pub mod aggregate;
pub mod client;
pub mod error;
pub mod feed;
pub mod fields;
pub mod fixtures;
pub mod integrate;
pub mod normalize;
mod retry;
pub mod types;

pub use aggregate::{aggregate, AggregateOptions, AggregatedProducts, SourceCounts};
pub use client::VendorClient;
pub use error::{FetchError, NormalizeError};
pub use feed::{HttpVendorFeed, VendorFeed};
pub use integrate::integrate;
pub use normalize::{normalize_payload, normalize_record, normalize_records};
