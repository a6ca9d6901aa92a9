//! Tolerant field access over loosely-typed vendor JSON.
//!
//! Vendor payloads are not trusted to match their documented shape: any field
//! may be missing, `null`, or carry a different JSON type than expected, and
//! some feeds pad their key names with whitespace. Every helper here is total.
//! Absent or unusable values collapse to the same defaults a falsy value gets
//! in the feeds' own tooling (`""`, `0`, `false`).

use serde_json::Value;

/// Looks up the first present key from `keys` on a JSON object.
///
/// Exact matches are tried first, in priority order. If none hits, any key
/// that equals a candidate after trimming whitespace is accepted, so
/// `" base_price "` resolves for `"base_price"`. Non-objects have no fields.
#[must_use]
pub fn field<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let map = record.as_object()?;

    keys.iter().find_map(|key| map.get(*key)).or_else(|| {
        keys.iter()
            .find_map(|key| map.iter().find(|(k, _)| k.trim() == *key).map(|(_, v)| v))
    })
}

/// Renders a scalar as a string.
///
/// Strings pass through and non-zero numbers use their JSON decimal form.
/// `true` becomes `"true"`. Everything falsy or structured (`null`, `false`,
/// `0`, arrays, objects) becomes `""`.
#[must_use]
pub fn coerce_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) if n.as_f64().is_some_and(|f| f != 0.0) => n.to_string(),
        Some(Value::Bool(true)) => "true".to_owned(),
        _ => String::new(),
    }
}

/// Reads a number, accepting numeric strings (`"2000"`, `" 12.5 "`).
///
/// Returns `None` for anything that is not a finite number.
#[must_use]
pub fn coerce_number(value: Option<&Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|f| f.is_finite())
}

/// Reads an integer the way legacy feeds write prices.
///
/// Strings go through [`parse_leading_int`]; numbers are truncated toward
/// zero. Anything else, or a string with no leading digits, is `0`.
#[must_use]
pub fn coerce_int(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::String(s)) => parse_leading_int(s).unwrap_or(0),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|u| i64::try_from(u).unwrap_or(i64::MAX)))
            .unwrap_or_else(|| n.as_f64().map_or(0, truncate_f64)),
        _ => 0,
    }
}

/// Parses the leading base-10 integer of `s`.
///
/// Leading whitespace and a single sign are accepted; parsing stops at the
/// first non-digit, so `"15000abc"` is `15000` and `"12.5"` is `12`. Returns
/// `None` when no digit follows. Values beyond `i64` saturate.
#[must_use]
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let trimmed = s.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut seen_digit = false;
    let mut acc: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen_digit = true;
        let digit = i64::from(b - b'0');
        acc = acc.saturating_mul(10).saturating_add(digit);
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { acc.saturating_neg() } else { acc })
}

/// Loose truthiness: `true`, non-zero numbers, non-empty strings, and any
/// array or object are truthy.
#[must_use]
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

/// Clamps a signed amount into a non-negative price.
#[must_use]
pub fn non_negative(amount: i64) -> u64 {
    u64::try_from(amount).unwrap_or(0)
}

/// Short name of a JSON value's type, for error messages.
#[must_use]
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[allow(clippy::cast_possible_truncation)]
fn truncate_f64(f: f64) -> i64 {
    // `as` saturates at the i64 bounds and maps NaN to 0.
    f.trunc() as i64
}
