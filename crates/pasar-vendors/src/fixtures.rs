//! Built-in sample data.
//!
//! Vendor C has no live feed yet. Aggregation callers can opt in to this
//! sample so the nested-record path is visible end to end.

use serde_json::{json, Value};

/// The Vendor C sample collection: one food item, in stock.
#[must_use]
pub fn vendor_c_sample() -> Vec<Value> {
    vec![json!({
        "id": 501,
        "details": {
            "name": "Nasi Tempong",
            "category": "Food"
        },
        "pricing": {
            "base_price": 20000,
            "tax": 2000
        },
        "stock": 50
    })]
}
