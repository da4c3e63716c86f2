//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Bold`**, **`Italic`**, **`Strike`**: symmetric marks (`''`, `'''`, `%%`)
//! - **`Note`**: `OPEN = "(("`, `CLOSE = "))"`
//! - **`LinkSyntax`**: `OPEN = "[["`, `CLOSE = "]]"`, `LABEL = ">"`
//! - **`PluginCall`**: `&name(args){body};`
//! - **`Comment`**: `//` at the start of a line
//!
//! The parser calls these constants; it never hardcodes `[[` or `''`.

pub mod emphasis;
pub mod link;
pub mod plugin_call;

pub use emphasis::{Bold, Italic, Note, Strike};
pub use link::LinkSyntax;
pub use plugin_call::PluginCall;

/// Line comment marker, recognised only at the start of a line.
pub struct Comment;

impl Comment {
    pub const PREFIX: &'static str = "//";
}
