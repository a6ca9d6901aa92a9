//! Raw record shapes for the three vendor feeds.
//!
//! ## Observed shapes
//!
//! ### Vendor A (warung, legacy)
//! Every field is a string, including the price:
//! `{"kd_produk": "A001", "nm_brg": "Kopi Bubuk 100g", "hrg": "15000", "ket_stok": "ada"}`.
//! `ket_stok` is `"ada"` when in stock and `"habis"` otherwise. `hrg` is
//! occasionally missing.
//!
//! ### Vendor B (distro, modern)
//! Properly typed: `{"sku": "TSHIRT-001", "productName": "Kaos Ijen Crater",
//! "price": 75000, "isAvailable": true}`. The live feed serves the same keys
//! lowercased (`productname`, `isavailable`), so both spellings are read.
//!
//! ### Vendor C (resto, nested)
//! Prices are split from tax, and descriptive fields are nested:
//! `{"id": 501, "details": {"name": "Nasi Tempong", "category": "Food"},
//! "pricing": {"base_price": 20000, "tax": 2000}, "stock": 50}`.
//! Keys sometimes arrive padded with whitespace (`" base_price "`), and names
//! carry stray surrounding spaces.
//!
//! The views below are extracted with [`crate::fields`] so that extraction
//! never fails. Business rules (discounts, tax, labels) live in
//! [`crate::normalize`].

use serde_json::Value;

use crate::fields::{coerce_int, coerce_number, coerce_string, field, is_truthy};

/// A Vendor A record with every field read as the string the feed intends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarungItem {
    /// `kd_produk`.
    pub product_code: String,
    /// `nm_brg`.
    pub name: String,
    /// `hrg`, still unparsed. Empty when missing.
    pub price: String,
    /// `ket_stok`. Empty when missing.
    pub stock_note: String,
}

impl WarungItem {
    #[must_use]
    pub fn from_json(record: &Value) -> Self {
        Self {
            product_code: coerce_string(field(record, &["kd_produk"])),
            name: coerce_string(field(record, &["nm_brg"])),
            price: coerce_string(field(record, &["hrg"])),
            stock_note: coerce_string(field(record, &["ket_stok"])),
        }
    }
}

/// A Vendor B record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistroItem {
    pub sku: String,
    pub product_name: String,
    /// Whole-unit price as sent; may be negative if the feed is broken.
    pub price: i64,
    pub is_available: bool,
}

impl DistroItem {
    #[must_use]
    pub fn from_json(record: &Value) -> Self {
        Self {
            sku: coerce_string(field(record, &["sku"])),
            product_name: coerce_string(field(record, &["productName", "productname"])),
            price: coerce_int(field(record, &["price"])),
            is_available: is_truthy(field(record, &["isAvailable", "isavailable"])),
        }
    }
}

/// A Vendor C record, flattened out of its `pricing`/`details` objects.
#[derive(Debug, Clone, PartialEq)]
pub struct RestoItem {
    pub id: String,
    pub pricing: RestoPricing,
    pub details: RestoDetails,
    /// Units on hand. `None` when missing or not numeric.
    pub stock: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RestoPricing {
    pub base_price: f64,
    pub tax: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoDetails {
    /// Raw name, untrimmed.
    pub name: String,
    pub category: String,
}

impl RestoItem {
    #[must_use]
    pub fn from_json(record: &Value) -> Self {
        let pricing = field(record, &["pricing"]);
        let details = field(record, &["details"]);

        Self {
            id: coerce_string(field(record, &["id"])),
            pricing: RestoPricing {
                base_price: coerce_number(nested(pricing, "base_price")).unwrap_or(0.0),
                tax: coerce_number(nested(pricing, "tax")).unwrap_or(0.0),
            },
            details: RestoDetails {
                name: coerce_string(nested(details, "name")),
                category: coerce_string(nested(details, "category")),
            },
            stock: coerce_number(field(record, &["stock"])),
        }
    }
}

fn nested<'a>(object: Option<&'a Value>, key: &str) -> Option<&'a Value> {
    object.and_then(|o| field(o, &[key]))
}
