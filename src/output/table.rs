//! Table output formatting

use serde_json::Value;
use tabled::{
    Table, Tabled,
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Format rows as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// Format one JSON object as a two-column FIELD / VALUE table
pub fn format_record(record: &Value) -> String {
    let mut builder = Builder::default();
    builder.push_record(["FIELD", "VALUE"]);

    match record {
        Value::Object(map) => {
            for (key, value) in map {
                builder.push_record([key.clone(), render_value(value)]);
            }
        }
        other => builder.push_record(["value".to_string(), render_value(other)]),
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
