//! Rendering primitives for CLI output.

use super::context::UiContext;
use super::mode::OutputMode;
use super::theme::{colors, styled, Badge};

/// Render a header line for a command.
///
/// Pretty mode: "Roster · command (context)"
/// Plain mode: "roster command"
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    match ctx.mode {
        OutputMode::Pretty => {
            let title = styled("Roster", colors::BRIGHT, ctx.color);
            match context {
                Some(c) => format!("{} \u{00B7} {} ({})", title, command, c),
                None => format!("{} \u{00B7} {}", title, command),
            }
        }
        OutputMode::Plain => format!("roster {}", command),
        OutputMode::Json => String::new(),
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let colored = styled(kind.text(), kind.style(), ctx.color);
    if message.is_empty() {
        colored
    } else {
        format!("{} {}", colored, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), colors::DIM, ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", colors::DIM, ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}
