use serde::{Deserialize, Serialize};

use crate::vendor::Vendor;

/// A vendor listing mapped into the marketplace's unified product shape.
///
/// The JSON keys follow the marketplace frontend contract (`nama`,
/// `harga_final`, `sumber`), which predates this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalProduct {
    /// Vendor-side identifier, always rendered as a string (`501` → `"501"`).
    pub id: String,
    /// Display name, possibly carrying a vendor-specific label suffix.
    #[serde(rename = "nama")]
    pub name: String,
    /// Price in whole rupiah after vendor business rules (discount, tax).
    #[serde(rename = "harga_final")]
    pub final_price: u64,
    pub status: ProductStatus,
    /// Feed the record was normalized from. Set once by the adapter.
    #[serde(rename = "sumber")]
    pub source: Vendor,
}

/// Stock state of a canonical listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductStatus {
    #[serde(rename = "Tersedia")]
    Available,
    #[serde(rename = "Habis")]
    OutOfStock,
}

impl ProductStatus {
    /// Maps an "is in stock" predicate onto the two listing states.
    #[must_use]
    pub const fn from_in_stock(in_stock: bool) -> Self {
        if in_stock {
            Self::Available
        } else {
            Self::OutOfStock
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "Tersedia",
            Self::OutOfStock => "Habis",
        }
    }
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
