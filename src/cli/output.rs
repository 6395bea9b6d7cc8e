//! Output formatting utilities for the CLI.

use comfy_table::{presets, Attribute, Cell, ContentArrangement, Table};
use serde::Serialize;

pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;
    fn to_json(&self) -> serde_json::Value;
}

pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}

/// Print a command failure and exit with status 1.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let body = serde_json::json!({ "error": format!("{err:#}") });
        eprintln!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1)
}

/// Table with the shared CLI look and a bold header row.
pub fn table_with_header(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|header| Cell::new(header).add_attribute(Attribute::Bold)),
        );
    table
}

/// Join sub-breed names for display, `-` when there are none.
pub fn join_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_or_dash() {
        assert_eq!(join_or_dash(&[]), "-");
        assert_eq!(
            join_or_dash(&["afghan".to_string(), "basset".to_string()]),
            "afghan, basset"
        );
    }

    #[test]
    fn test_table_with_header_renders_headers() {
        let rendered = table_with_header(&["BREED", "COUNT"]).to_string();
        assert!(rendered.contains("BREED"));
        assert!(rendered.contains("COUNT"));
    }
}
