use serde_json::Value;

use renewal_fees_core::{format_fee_breakdown, FeeBreakdown};

/// Print the human-readable fee statement for a breakdown envelope.
pub fn print_text(value: &Value) {
    let breakdown = value
        .get("result")
        .cloned()
        .and_then(|result| serde_json::from_value::<FeeBreakdown>(result).ok());

    match breakdown {
        Some(breakdown) => {
            println!("{}", format_fee_breakdown(&breakdown));

            if let Some(Value::Array(warnings)) = value.get("warnings") {
                for w in warnings {
                    if let Value::String(s) = w {
                        println!("Note: {}", s);
                    }
                }
            }
        }
        None => {
            // Not a breakdown envelope: fall back to pretty JSON
            super::json::print_json(value);
        }
    }
}
