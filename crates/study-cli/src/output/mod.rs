use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Columns that lead a table when present; the rest follow alphabetically.
const LEADING_COLUMNS: [&str; 4] = ["id", "title", "filename", "username"];

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_table(&serde_json::to_value(value)?)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn options() -> table::TableOptions {
    let terminal = ui::terminal();
    table::TableOptions {
        max_width: terminal.width,
        color: terminal.color,
    }
}

fn render_table(value: &Value) -> String {
    match value {
        Value::Array(items) => render_rows(items),
        Value::Object(map) => {
            let rows = ordered_keys(map.keys())
                .into_iter()
                .map(|key| vec![key.clone(), cell(&map[&key])])
                .collect::<Vec<_>>();
            table::render(&["key", "value"], &rows, options())
        }
        scalar => cell(scalar),
    }
}

fn render_rows(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(none)");
    }

    let objects = items.iter().filter_map(Value::as_object).collect::<Vec<&Map<String, Value>>>();
    if objects.len() != items.len() {
        let rows = items.iter().map(|item| vec![cell(item)]).collect::<Vec<_>>();
        return table::render(&["value"], &rows, options());
    }

    let headers = ordered_keys(objects.iter().copied().flat_map(Map::keys));
    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = objects
        .iter()
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render(&header_refs, &rows, options())
}

fn ordered_keys<'a>(keys: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut leading = Vec::new();
    let mut rest = Vec::new();
    for key in keys {
        if leading.contains(key) || rest.contains(key) {
            continue;
        }
        if LEADING_COLUMNS.contains(&key.as_str()) {
            leading.push(key.clone());
        } else {
            rest.push(key.clone());
        }
    }
    leading.sort_by_key(|key| LEADING_COLUMNS.iter().position(|c| c == key));
    rest.sort();
    leading.extend(rest);
    leading
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.is_empty() => String::from("-"),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
