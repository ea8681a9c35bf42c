//! Usage text rendering.
//!
//! Consumes option metadata only; nothing here affects scanning.

mod wrap;

use serde::{Deserialize, Serialize};

use crate::args::{FlagOption, Kind};

pub use wrap::{wrap, DEFAULT_WIDTH};

/// Settings for [`render_usage`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageConfig {
    /// Column at which descriptions wrap (default: 80).
    #[serde(default = "default_width")]
    pub width: usize,
    /// Prepended to every description line (default: eight spaces).
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Program name for the header line; no header when empty.
    #[serde(default)]
    pub program: String,
}

fn default_width() -> usize {
    DEFAULT_WIDTH
}

fn default_prefix() -> String {
    " ".repeat(8)
}

impl Default for UsageConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            prefix: default_prefix(),
            program: String::new(),
        }
    }
}

/// Render one entry per option, in the order given.
pub fn render_usage<'a, I>(options: I, config: &UsageConfig) -> String
where
    I: IntoIterator<Item = &'a FlagOption>,
{
    let mut out = String::new();
    if !config.program.is_empty() {
        out.push_str(&format!("Usage of {}:\n", config.program));
    }

    for option in options {
        out.push_str(&flag_line(option));
        out.push('\n');

        let mut description = option.description().to_string();
        if !option.default_is_zero() {
            let default = match option.kind() {
                Kind::String => format!("\"{}\"", option.default_text()),
                _ => option.default_text(),
            };
            description.push_str(&format!(" (default: {default})"));
        }
        for line in wrap(&description, config.width, &config.prefix) {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

fn flag_line(option: &FlagOption) -> String {
    let mut line = match (option.short(), option.long()) {
        (Some(short), Some(long)) => format!("  -{short}, --{long}"),
        (Some(short), None) => format!("  -{short}"),
        (None, Some(long)) => format!("      --{long}"),
        (None, None) => String::from("  "),
    };
    if let Some(tag) = option.kind().value_tag() {
        line.push(' ');
        line.push_str(tag);
    }
    line
}
