use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::scalar;

/// Format output as tables using the tabled crate.
///
/// Scalar fields go into a Field/Value table; arrays of records (schedule,
/// quotes, chart points) each get their own titled table.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => match map.get("result") {
            Some(Value::Object(result)) => {
                print_object(result);
                print_envelope_notes(map);
            }
            _ => print_object(map),
        },
        Value::Array(arr) => print_records(arr),
        _ => println!("{}", scalar(value)),
    }
}

fn print_object(map: &Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    let mut nested = Vec::new();

    for (key, val) in map {
        match val {
            Value::Array(arr) if arr.iter().all(Value::is_object) && !arr.is_empty() => {
                nested.push((key, arr));
            }
            Value::Object(inner) => {
                for (inner_key, inner_val) in inner {
                    builder.push_record([format!("{key}.{inner_key}"), scalar(inner_val)]);
                }
            }
            _ => builder.push_record([key.clone(), scalar(val)]),
        }
    }

    println!("{}", Table::from(builder));
    for (key, arr) in nested {
        println!("\n{}:", key);
        print_records(arr);
    }
}

fn print_records(arr: &[Value]) {
    let Some(Value::Object(first)) = arr.first() else {
        if arr.is_empty() {
            println!("(empty)");
        }
        for item in arr {
            println!("{}", scalar(item));
        }
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(headers.clone());
    for item in arr {
        if let Value::Object(map) = item {
            builder.push_record(
                headers
                    .iter()
                    .map(|h| map.get(h).map(scalar).unwrap_or_default()),
            );
        }
    }
    println!("{}", Table::from(builder));
}

fn print_envelope_notes(envelope: &Map<String, Value>) {
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}
