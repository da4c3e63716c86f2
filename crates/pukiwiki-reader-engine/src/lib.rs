//! PukiWiki markup to HTML.
//!
//! ```no_run
//! use pukiwiki_reader_engine::{Document, WikiConfig};
//!
//! let doc = Document::parse("* Hello [#top]\n\nSome ''bold'' text.\n")?;
//! let html = doc.render(&WikiConfig::default())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod io;
pub mod parsing;
pub mod plugins;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use config::WikiConfig;
pub use document::{Document, PageSource};
pub use error::{DocumentError, IncludeError, IoError, ParseError, RenderError};
pub use parsing::{
    blocks::{Statement, StatementParser},
    inline::Expression,
};
pub use plugins::{Plugin, PluginRegistry};
pub use render::{RenderContext, WikiNode};
