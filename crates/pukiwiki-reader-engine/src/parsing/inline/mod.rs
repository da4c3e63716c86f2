//! # Inline Parsing
//!
//! The expression grammar: markup that occurs within a line of text.
//!
//! ## Modules
//!
//! - **`types`**: `Expression` enum (Plain, Bold, Italic, Strike, Note, Link, Plugin, Composite)
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`parser`**: `parse_line()` / `parse_inline_until()` entry points with one parser per construct
//! - **`render`**: HTML rendering and markup serialization of expressions
//!
//! ## Dispatch
//!
//! At each position the parser looks ahead for `''`, `'''`, `%%`, `((`, `[[` or
//! `&name`; anything else accumulates into the running plain-text buffer.
//! A construct's content is parsed recursively until its closing delimiter,
//! which is passed down as a stop predicate. An unclosed construct is a parse
//! error, never silently turned back into text.

pub mod kinds;
pub mod parser;
pub mod render;
pub mod types;

pub use parser::{StopAt, parse_inline_until, parse_line};
pub use types::{Expression, InlinePlugin, Link};
