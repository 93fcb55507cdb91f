use serde_json::Value;
use std::io;
use tabled::{builder::Builder, Table};

use crate::OutputFormat;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Table => print_table(value),
        OutputFormat::Csv => print_csv(value),
        OutputFormat::Minimal => print_minimal(value),
    }
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}

fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            let mut nested: Vec<(&str, &Vec<Value>)> = Vec::new();
            for (key, val) in map {
                // Arrays of records (the schedule, ledger rows) get their
                // own table below the scalar section.
                if let Value::Array(rows) = val {
                    if rows.first().map_or(false, |row| row.is_object()) {
                        nested.push((key.as_str(), rows));
                        continue;
                    }
                }
                builder.push_record([key.as_str(), &scalar(val)]);
            }
            println!("{}", Table::from(builder));

            for (key, rows) in nested {
                println!("\n{}:", key);
                print_rows(rows);
            }
        }
        Value::Array(rows) => print_rows(rows),
        _ => println!("{}", value),
    }
}

fn print_rows(rows: &[Value]) {
    if rows.is_empty() {
        println!("(empty)");
        return;
    }

    let Some(Value::Object(first)) = rows.first() else {
        for row in rows {
            println!("{}", scalar(row));
        }
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(&headers);
    for row in rows {
        if let Value::Object(map) = row {
            let record: Vec<String> = headers
                .iter()
                .map(|h| map.get(h.as_str()).map(scalar).unwrap_or_default())
                .collect();
            builder.push_record(record);
        }
    }
    println!("{}", Table::from(builder));
}

fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) => {
            let _ = wtr.write_record(["field", "value"]);
            for (key, val) in map {
                let _ = wtr.write_record([key.as_str(), &csv_value(val)]);
            }
        }
        Value::Array(rows) => write_rows_csv(&mut wtr, rows),
        _ => {
            let _ = wtr.write_record([&csv_value(value)]);
        }
    }

    let _ = wtr.flush();
}

fn write_rows_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, rows: &[Value]) {
    if rows.is_empty() {
        return;
    }

    if let Some(Value::Object(first)) = rows.first() {
        let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
        let _ = wtr.write_record(&headers);

        for row in rows {
            if let Value::Object(map) = row {
                let record: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(*h).map(csv_value).unwrap_or_default())
                    .collect();
                let _ = wtr.write_record(&record);
            }
        }
    } else {
        for row in rows {
            let _ = wtr.write_record([&csv_value(row)]);
        }
    }
}

/// Print just the key answer value from the output.
///
/// Heuristic: well-known result fields in priority order, then the first
/// field of the object.
fn print_minimal(value: &Value) {
    let priority_keys = [
        "emi_amount",
        "total_receivable",
        "accrued_interest",
        "principal_portion",
        "score",
        "status",
        "total_collected",
    ];

    if let Value::Object(map) = value {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", scalar(val));
                    return;
                }
            }
        }
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, scalar(val));
            return;
        }
    }

    println!("{}", scalar(value));
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}

fn csv_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        other => scalar(other),
    }
}
