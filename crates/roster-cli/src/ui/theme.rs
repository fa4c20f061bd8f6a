//! Badge tokens and ANSI styling.

/// Color definitions using ANSI escape codes.
pub mod colors {
    /// Dim text (for labels, metadata)
    pub const DIM: &str = "\x1b[2m";
    /// Bright/bold text (for values)
    pub const BRIGHT: &str = "\x1b[1m";
    /// Green (success)
    pub const GREEN: &str = "\x1b[32m";
    /// Red (error)
    pub const RED: &str = "\x1b[31m";
    /// Cyan (info)
    pub const CYAN: &str = "\x1b[36m";
    /// Reset all styles
    pub const RESET: &str = "\x1b[0m";
}

/// Wrap `text` in an ANSI style when color is enabled.
pub fn styled(text: &str, style: &str, color: bool) -> String {
    if color {
        format!("{}{}{}", style, text, colors::RESET)
    } else {
        text.to_string()
    }
}

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Err,
    Info,
}

impl Badge {
    /// Badge text for display (e.g., "[OK]").
    pub fn text(&self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Err => "[ERR]",
            Self::Info => "[INFO]",
        }
    }

    /// ANSI style for this badge.
    pub fn style(&self) -> &'static str {
        match self {
            Self::Ok => colors::GREEN,
            Self::Err => colors::RED,
            Self::Info => colors::CYAN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_text() {
        assert_eq!(Badge::Ok.text(), "[OK]");
        assert_eq!(Badge::Err.text(), "[ERR]");
        assert_eq!(Badge::Info.text(), "[INFO]");
    }

    #[test]
    fn test_styled_passes_through_without_color() {
        assert_eq!(styled("x", colors::GREEN, false), "x");
        assert!(styled("x", colors::GREEN, true).contains("\x1b[32m"));
    }
}
