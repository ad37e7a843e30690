//! Terminal styles.
//!
//! Renderers ask for a style by semantic name (what the text *is*), never by
//! color. `console` drops the escape codes when stdout is not a terminal.

use console::Style;

pub mod names {
    pub const HEADER: &str = "header";
    pub const SUMMARY: &str = "summary";
    pub const DISABLED: &str = "disabled";
    pub const KEY: &str = "key";
    pub const MUTED: &str = "muted";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
}

pub fn style(name: &str) -> Style {
    match name {
        names::HEADER => Style::new().bold().yellow(),
        names::SUMMARY => Style::new(),
        names::DISABLED => Style::new().dim(),
        names::KEY => Style::new().cyan(),
        names::MUTED => Style::new().color256(245),
        names::SUCCESS => Style::new().green(),
        names::WARNING => Style::new().yellow().bold(),
        _ => Style::new(),
    }
}

/// Apply the named style to `text`.
pub fn paint(name: &str, text: &str) -> String {
    style(name).apply_to(text).to_string()
}
