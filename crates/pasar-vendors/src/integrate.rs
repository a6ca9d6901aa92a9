use pasar_core::{CanonicalProduct, Vendor};
use serde_json::Value;

use crate::normalize::normalize_records;

/// Normalizes all three vendor collections into one list.
///
/// Output order is every Vendor A product, then Vendor B, then Vendor C,
/// each group in its input order. The result length is the sum of the input
/// lengths; no de-duplication is attempted across vendors.
#[must_use]
pub fn integrate(raw_a: &[Value], raw_b: &[Value], raw_c: &[Value]) -> Vec<CanonicalProduct> {
    let mut products = Vec::with_capacity(raw_a.len() + raw_b.len() + raw_c.len());
    for (vendor, records) in [(Vendor::A, raw_a), (Vendor::B, raw_b), (Vendor::C, raw_c)] {
        products.extend(normalize_records(vendor, records));
    }
    products
}
