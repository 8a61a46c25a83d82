use serde_json::Value;

use super::scalar;

/// Print just the key answer value: the breakdown total.
pub fn print_minimal(value: &Value) {
    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Some(total) = result.get("total") {
        println!("{}", scalar(total));
        return;
    }

    // Not a breakdown: fall back to the first field
    if let Value::Object(map) = result {
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, scalar(val));
            return;
        }
    }

    println!("{}", scalar(result));
}
