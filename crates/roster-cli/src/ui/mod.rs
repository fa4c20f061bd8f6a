//! UI primitives for the Roster CLI.
//!
//! - **Context**: environment detection (TTY, width, color)
//! - **Mode**: output mode resolution (json, plain, pretty)
//! - **Theme**: badge tokens and ANSI styling
//! - **Render**: headers, badges, key-value lines, hints

mod context;
mod mode;
pub mod render;
pub mod theme;

// Re-export core types at module level
pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

// Re-export commonly used render functions
pub use render::{badge, header, hint, kv};
