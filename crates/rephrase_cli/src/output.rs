//! Terminal output helpers. Styled text for humans, one JSON object per line for machines.
//!
//! Uses:
//! - `console` for colors (respects NO_COLOR, auto-disables when piped)
//! - `comfy-table` for structured data
//! - `indicatif` for spinners

use std::sync::atomic::{AtomicBool, Ordering};

use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::cli::OutputFormat;

// ── Global format flag ─────────────────────────────────────────────

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(format: OutputFormat) {
    if matches!(format, OutputFormat::Json) {
        JSON_MODE.store(true, Ordering::Relaxed);
    }
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

// ── JSON envelope ──────────────────────────────────────────────────

#[derive(Serialize)]
struct Msg<'a> {
    level: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a JsonValue>,
}

fn to_json_line(level: &str, message: &str, data: Option<&JsonValue>) -> String {
    let msg = Msg {
        level,
        message,
        data,
    };
    serde_json::to_string(&msg).unwrap_or_else(|_| {
        serde_json::json!({ "level": level, "message": message }).to_string()
    })
}

fn emit_json(level: &str, message: &str, data: Option<&JsonValue>) {
    println!("{}", to_json_line(level, message, data));
}

// ── Public helpers ─────────────────────────────────────────────────

pub fn header(text: &str) {
    if is_json() {
        emit_json("info", text, None);
    } else {
        println!("{}", style(text).bold().cyan());
    }
}

pub fn success(text: &str) {
    if is_json() {
        emit_json("success", text, None);
    } else {
        println!("{} {}", style("✓").green(), style(text).bright());
    }
}

pub fn error(text: &str) {
    if is_json() {
        eprintln!("{}", to_json_line("error", text, None));
    } else {
        eprintln!("{} {}", style("✗").red(), style(text).bright());
    }
}

/// Warnings go to stderr so piped text output stays clean.
pub fn warning(text: &str) {
    if is_json() {
        eprintln!("{}", to_json_line("warning", text, None));
    } else {
        eprintln!("{} {}", style("!").yellow(), style(text).bright());
    }
}

pub fn dim(text: &str) {
    if is_json() {
        emit_json("info", text, None);
    } else {
        println!("{}", style(text).dim());
    }
}

/// Print a titled block of verbatim text (prompts, model replies).
pub fn block(title: &str, text: &str) {
    if is_json() {
        let data = serde_json::json!({ "text": text });
        emit_json("block", title, Some(&data));
    } else {
        println!("{}", style(format!("── {title} ──")).bold().cyan());
        println!("{text}");
    }
}

/// Emit a serializable value: the JSON envelope in json mode, pretty JSON otherwise.
pub fn data<T: Serialize>(label: &str, value: &T) {
    let json_val = serde_json::to_value(value).unwrap_or(JsonValue::Null);
    if is_json() {
        emit_json("data", label, Some(&json_val));
    } else {
        let formatted =
            serde_json::to_string_pretty(&json_val).unwrap_or_else(|_| format!("{label}: <?>"));
        println!("{formatted}");
    }
}

/// Print a key-value pair with styled key.
pub fn kv(key: &str, value: &str) {
    if is_json() {
        let data = serde_json::json!({ key: value });
        emit_json("info", key, Some(&data));
    } else {
        println!("  {} {}", style(key).cyan().bold(), value);
    }
}

// ── Tables ─────────────────────────────────────────────────────────

pub fn table(columns: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(columns.iter().map(|col| {
            Cell::new(col)
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold)
        }));
    table
}

pub fn table_row(table: &mut Table, first: &str, rest: &[String]) {
    let mut cells = vec![Cell::new(first).fg(Color::Green)];
    cells.extend(rest.iter().map(Cell::new));
    table.add_row(cells);
}

/// Print a table; json mode emits `items` instead.
pub fn table_print<T: Serialize>(table: &Table, items: &[T]) {
    if is_json() {
        let data = serde_json::json!({ "items": items });
        emit_json("list", "", Some(&data));
    } else {
        println!("{table}");
    }
}

// ── Spinners ───────────────────────────────────────────────────────

/// Spinner on stderr; hidden in json mode.
pub fn spinner(message: &str) -> ProgressBar {
    if is_json() {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(template) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(template);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

pub fn spinner_success(spinner: &ProgressBar, message: &str) {
    spinner.finish_and_clear();
    if is_json() {
        emit_json("success", message, None);
    } else {
        eprintln!("{} {}", style("✓").green(), message);
    }
}

pub fn spinner_error(spinner: &ProgressBar, message: &str) {
    spinner.finish_and_clear();
    if !is_json() {
        eprintln!("{} {}", style("✗").red(), message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_line_shape() {
        let data = serde_json::json!({ "k": 1 });
        let line = to_json_line("data", "label", Some(&data));
        let parsed: JsonValue = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["level"], "data");
        assert_eq!(parsed["message"], "label");
        assert_eq!(parsed["data"]["k"], 1);
    }

    #[test]
    fn test_json_line_omits_missing_data() {
        let line = to_json_line("info", "quote \" inside", None);
        let parsed: JsonValue = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["message"], "quote \" inside");
        assert!(parsed.get("data").is_none());
    }
}
