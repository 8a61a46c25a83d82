use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{breakdown_rows, scalar};

/// Format a fee-breakdown envelope as a table using the tabled crate.
pub fn print_table(value: &Value) {
    match breakdown_rows(value) {
        Some(rows) => {
            let mut builder = Builder::default();
            builder.push_record(["Category", "Item", "Amount"]);
            for (category, item, amount) in &rows {
                builder.push_record([category.as_str(), item.as_str(), amount.as_str()]);
            }
            println!("{}", Table::from(builder));

            if let Some(Value::Array(warnings)) = value.get("warnings") {
                if !warnings.is_empty() {
                    println!("\nWarnings:");
                    for w in warnings {
                        if let Value::String(s) = w {
                            println!("  - {}", s);
                        }
                    }
                }
            }

            if let Some(Value::String(meth)) = value.get("methodology") {
                println!("\nMethodology: {}", meth);
            }
        }
        None => print_flat_object(value),
    }
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &scalar(val)]);
        }
        println!("{}", Table::from(builder));
    } else {
        println!("{}", value);
    }
}
