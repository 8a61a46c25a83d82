use serde_json::Value;
use std::io;

use super::{breakdown_rows, scalar};

/// Write a fee-breakdown envelope as CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match breakdown_rows(value) {
        Some(rows) => {
            let _ = wtr.write_record(["category", "item", "amount"]);
            for (category, item, amount) in &rows {
                let _ = wtr.write_record([category, item, amount]);
            }
        }
        None => {
            // Not a breakdown envelope: fall back to field/value pairs
            if let Value::Object(map) = value {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in map {
                    let _ = wtr.write_record([key.as_str(), &scalar(val)]);
                }
            } else {
                let _ = wtr.write_record([&scalar(value)]);
            }
        }
    }

    let _ = wtr.flush();
}
