use std::path::PathBuf;

use crate::plugins::PluginRegistry;

/// Settings consumed by rendering.
///
/// Borrowed immutably for the whole of a render; with `Plugin: Send + Sync`
/// a finished config can be shared across threads behind an `Arc`.
#[derive(Debug)]
pub struct WikiConfig {
    pub plugins: PluginRegistry,
    /// Render newlines inside text as `<br/>` followed by a newline.
    pub convert_line_break: bool,
    /// Directory `#include` resolves page names against. Falls back to the
    /// including document's own directory.
    pub source_root: Option<PathBuf>,
    /// Maximum `#include` nesting; `None` leaves it unbounded.
    pub include_depth_limit: Option<usize>,
}

impl Default for WikiConfig {
    /// The built-in plugins with line-break conversion off.
    fn default() -> Self {
        Self {
            plugins: PluginRegistry::with_builtins(),
            convert_line_break: false,
            source_root: None,
            include_depth_limit: None,
        }
    }
}
