use serde_json::Value;

use super::scalar;

/// Fields that carry the answer, in priority order.
const PRIORITY_KEYS: [&str; 5] = [
    "monthly_payment",
    "rate",
    "total_interest",
    "total_paid",
    "path",
];

/// Print just the key answer value from the output.
///
/// Looks for well-known result fields (inside the `result` envelope or the
/// `totals` block when present), then falls back to the first field.
pub fn print_minimal(value: &Value) {
    let target = value
        .as_object()
        .and_then(|m| m.get("result").or_else(|| m.get("summary")).or_else(|| m.get("totals")))
        .unwrap_or(value);

    // The analysis envelope nests its headline figures one level deeper.
    let target = target.get("summary").unwrap_or(target);

    if let Value::Object(map) = target {
        for key in PRIORITY_KEYS {
            if let Some(val) = map.get(key).filter(|v| !v.is_null()) {
                println!("{}", scalar(val));
                return;
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, scalar(val));
            return;
        }
    }

    println!("{}", scalar(target));
}
