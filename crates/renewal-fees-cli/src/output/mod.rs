pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;
pub mod text;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
        OutputFormat::Text => text::print_text(value),
    }
}

/// Flatten a fee-breakdown result into (category, item, amount) rows in
/// statement order: base fee, additional fees, penalties, discounts, total.
/// Returns None when the value is not a breakdown envelope.
pub(crate) fn breakdown_rows(value: &Value) -> Option<Vec<(String, String, String)>> {
    let result = value.get("result")?.as_object()?;
    let base_fee = result.get("base_fee")?;
    let total = result.get("total")?;

    let mut rows = vec![(
        "base".to_string(),
        "Base fee".to_string(),
        scalar(base_fee),
    )];

    for (category, key) in [
        ("additional", "additional_fees"),
        ("penalty", "penalties"),
        ("discount", "discounts"),
    ] {
        if let Some(Value::Array(lines)) = result.get(key) {
            for line in lines {
                let description = line
                    .get("description")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                let amount = line.get("amount").map(scalar).unwrap_or_default();
                rows.push((category.to_string(), description.to_string(), amount));
            }
        }
    }

    rows.push(("total".to_string(), "Total".to_string(), scalar(total)));
    Some(rows)
}

pub(crate) fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
