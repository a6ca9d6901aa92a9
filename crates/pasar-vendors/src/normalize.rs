//! Normalization from raw vendor records to [`pasar_core::CanonicalProduct`].
//!
//! Field extraction is delegated to [`crate::types`]; this module applies
//! each vendor's business rules. Every adapter is total: malformed input
//! degrades to defaults instead of failing.

use pasar_core::{CanonicalProduct, ProductStatus, Vendor};
use serde_json::Value;

use crate::error::NormalizeError;
use crate::fields::{json_type_name, non_negative, parse_leading_int};
use crate::types::{DistroItem, RestoItem, WarungItem};

/// `ket_stok` token Vendor A uses for "in stock".
const WARUNG_IN_STOCK: &str = "ada";

/// Suffix appended to Vendor C food items.
const RECOMMENDED_SUFFIX: &str = " (Recommended)";

/// Normalizes a Vendor A record.
///
/// The legacy price string is parsed as a leading integer and marked down by
/// 10%, rounding down (`"15000"` → `13500`).
#[must_use]
pub fn normalize_warung(record: &Value) -> CanonicalProduct {
    let item = WarungItem::from_json(record);

    let list_price = non_negative(parse_leading_int(&item.price).unwrap_or(0));
    // floor(price * 0.9) == price - ceil(price / 10), without overflow.
    let final_price = list_price - (list_price / 10 + u64::from(list_price % 10 != 0));

    CanonicalProduct {
        id: item.product_code,
        name: item.name,
        final_price,
        status: ProductStatus::from_in_stock(item.stock_note == WARUNG_IN_STOCK),
        source: Vendor::A,
    }
}

/// Normalizes a Vendor B record. Fields map one-to-one.
#[must_use]
pub fn normalize_distro(record: &Value) -> CanonicalProduct {
    let item = DistroItem::from_json(record);

    CanonicalProduct {
        id: item.sku,
        name: item.product_name,
        final_price: non_negative(item.price),
        status: ProductStatus::from_in_stock(item.is_available),
        source: Vendor::B,
    }
}

/// Normalizes a Vendor C record.
///
/// The final price is base price plus tax, truncated. Food items get a
/// `" (Recommended)"` suffix on their trimmed name. Only a strictly positive
/// stock count is available.
#[must_use]
pub fn normalize_resto(record: &Value) -> CanonicalProduct {
    let item = RestoItem::from_json(record);

    let mut name = item.details.name.trim().to_owned();
    if item.details.category.trim().eq_ignore_ascii_case("food") {
        name.push_str(RECOMMENDED_SUFFIX);
    }

    CanonicalProduct {
        id: item.id,
        name,
        final_price: whole_price(item.pricing.base_price + item.pricing.tax),
        status: ProductStatus::from_in_stock(item.stock.is_some_and(|s| s > 0.0)),
        source: Vendor::C,
    }
}

/// Truncates a fractional amount to whole currency units, clamping at zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_price(amount: f64) -> u64 {
    if amount.is_finite() && amount > 0.0 {
        // Saturates at u64::MAX.
        amount.trunc() as u64
    } else {
        0
    }
}

/// Normalizes one record with the adapter for `vendor`.
#[must_use]
pub fn normalize_record(vendor: Vendor, record: &Value) -> CanonicalProduct {
    match vendor {
        Vendor::A => normalize_warung(record),
        Vendor::B => normalize_distro(record),
        Vendor::C => normalize_resto(record),
    }
}

/// Normalizes a collection of records, preserving order and length.
#[must_use]
pub fn normalize_records(vendor: Vendor, records: &[Value]) -> Vec<CanonicalProduct> {
    records
        .iter()
        .map(|record| normalize_record(vendor, record))
        .collect()
}

/// Normalizes a raw JSON payload that is expected to be a record array.
///
/// # Errors
///
/// Returns [`NormalizeError::NotAnArray`] if `payload` is not a JSON array.
pub fn normalize_payload(
    vendor: Vendor,
    payload: &Value,
) -> Result<Vec<CanonicalProduct>, NormalizeError> {
    match payload {
        Value::Array(records) => Ok(normalize_records(vendor, records)),
        other => Err(NormalizeError::NotAnArray {
            vendor,
            found: json_type_name(other),
        }),
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
