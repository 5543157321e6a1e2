//! Visual preview of a configuration: inline style mapping and HTML output.
//!
//! This module is split into:
//! - `preview`: configuration to inline presentation properties and markup
//! - `html`: self-contained preview page (preview_page)

mod html;
mod preview;

pub use html::preview_page;
pub use preview::{InlineStyle, Preview};

/// Escape text for HTML bodies and double-quoted attributes.
pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
