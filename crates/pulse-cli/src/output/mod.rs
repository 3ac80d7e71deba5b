use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print pre-built rows as an aligned table, keeping the caller's column order.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        println!("(no rows)");
        return;
    }
    println!("{}", table::render(headers, rows, table_options()));
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Key/value view of a response object. Nested values print as compact JSON.
fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let rows = match serde_json::to_value(value)? {
        Value::Object(map) => map
            .into_iter()
            .map(|(key, value)| vec![key, cell(&value)])
            .collect::<Vec<_>>(),
        Value::Array(items) if items.is_empty() => return Ok(String::from("(no rows)")),
        other => vec![vec![String::from("value"), cell(&other)]],
    };
    Ok(table::render(&["key", "value"], &rows, table_options()))
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
