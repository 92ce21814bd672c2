//! Display framework for CLI output formatting.

pub mod table;

use serde::Serialize;

pub use table::list_table;

/// Trait for types that can be rendered as human-readable or JSON output.
pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Dispatch output based on JSON mode flag.
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&result.to_json()).unwrap_or_default()
        );
    } else {
        println!("{}", result.to_human());
    }
}

/// Color a decision action for terminal display.
pub fn colorize_action(action: &str) -> String {
    let styled = match action {
        "promote" => console::style(action).green().bold(),
        "defer" => console::style(action).yellow(),
        "skip" => console::style(action).dim(),
        _ => console::style(action),
    };
    styled.to_string()
}
