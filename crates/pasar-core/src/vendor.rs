//! The closed set of upstream vendor feeds.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identity of an upstream vendor feed.
///
/// Each vendor has a fixed raw schema and rule set; the variant selects which
/// adapter handles a payload and is stamped on every record it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Vendor {
    /// Legacy warung system: string-typed fields, automatic 10% markdown.
    #[serde(rename = "Vendor A")]
    A,
    /// Modern clothing distro with a clean, typed schema.
    #[serde(rename = "Vendor B")]
    B,
    /// Restaurant feed with nested pricing/details objects and tax-exclusive prices.
    #[serde(rename = "Vendor C")]
    C,
}

/// Returned when a vendor slug does not name one of the known feeds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown vendor type: {0}")]
pub struct UnknownVendor(pub String);

impl Vendor {
    /// All vendors in integration order.
    pub const ALL: [Self; 3] = [Self::A, Self::B, Self::C];

    /// URL/CLI slug, e.g. `"vendor_a"`.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::A => "vendor_a",
            Self::B => "vendor_b",
            Self::C => "vendor_c",
        }
    }
}

impl std::fmt::Display for Vendor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Vendor {
    type Err = UnknownVendor;

    /// Parses a slug case-insensitively (`"VENDOR_B"` → [`Vendor::B`]).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVendor(s.to_owned()))
    }
}
