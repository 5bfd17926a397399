use serde_json::{Map, Value};
use std::io;

use super::scalar;

/// Write output as CSV to stdout.
///
/// Arrays of records (schedule rows, quotes, chart points) become one row
/// per record; objects become two-column field/value CSV.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let written = match value {
        Value::Array(arr) => write_records(&mut wtr, arr),
        Value::Object(map) => match (map.get("results"), map.get("result")) {
            (Some(Value::Array(rows)), _) => write_records(&mut wtr, rows),
            (_, Some(Value::Object(result))) => write_fields(&mut wtr, result),
            _ => write_fields(&mut wtr, map),
        },
        _ => wtr.write_record([scalar(value)]),
    };

    if let Err(e) = written.and_then(|_| wtr.flush().map_err(csv::Error::from)) {
        eprintln!("CSV output error: {}", e);
    }
}

fn write_fields<W: io::Write>(wtr: &mut csv::Writer<W>, map: &Map<String, Value>) -> csv::Result<()> {
    wtr.write_record(["field", "value"])?;
    for (key, val) in map {
        wtr.write_record([key.as_str(), &scalar(val)])?;
    }
    Ok(())
}

fn write_records<W: io::Write>(wtr: &mut csv::Writer<W>, arr: &[Value]) -> csv::Result<()> {
    let Some(Value::Object(first)) = arr.first() else {
        for item in arr {
            wtr.write_record([scalar(item)])?;
        }
        return Ok(());
    };

    let headers: Vec<&str> = first.keys().map(String::as_str).collect();
    wtr.write_record(&headers)?;
    for item in arr {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(*h).map(scalar).unwrap_or_default())
                .collect();
            wtr.write_record(&row)?;
        }
    }
    Ok(())
}
