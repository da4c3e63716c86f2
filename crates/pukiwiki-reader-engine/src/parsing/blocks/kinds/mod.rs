//! # Block Kinds
//!
//! Block-specific types that own their line-start markers and delimiters.
//!
//! - **`HeadingSyntax`**: `*` run, optional `[#anchor]`
//! - **`ListSyntax`**: `+` (ordered) / `-` (unordered) runs
//! - **`QuoteSyntax`**: `>` runs, `<` closes
//! - **`TableSyntax`**: `|` cells, `|>|` / `|~|` spans, row-role tokens
//! - **`ParagraphSyntax`**: `~` and `LEFT:` / `RIGHT:` / `CENTER:`
//! - **`BlockPluginSyntax`**: `#name(args)` with an optional `{{` ... `}}` body
//! - **`Separator`**, **`Preformatted`**, **`Title`**, **`StatementPrefix`**

pub mod block_plugin;
pub mod heading;
pub mod list;
pub mod paragraph;
pub mod quote;
pub mod table;

pub use block_plugin::BlockPluginSyntax;
pub use heading::HeadingSyntax;
pub use list::ListSyntax;
pub use paragraph::ParagraphSyntax;
pub use quote::QuoteSyntax;
pub use table::TableSyntax;

/// Horizontal rule: three or more `-` at the start of a line.
pub struct Separator;

impl Separator {
    pub const MARK: char = '-';
    pub const MIN_LENGTH: usize = 3;
}

/// Preformatted text: lines indented by a single space.
pub struct Preformatted;

impl Preformatted {
    pub const INDENT: char = ' ';
}

/// `TITLE:` line naming the document.
pub struct Title;

impl Title {
    pub const PREFIX: &'static str = "TITLE:";
}

/// Characters that may open a block when found at the start of a line.
///
/// A paragraph stops before a line starting with one of these, and a list
/// parses such a line as a nested block.
pub struct StatementPrefix;

impl StatementPrefix {
    pub const CHARS: [char; 10] = ['#', '*', '+', '-', ':', ' ', '|', '>', '<', '~'];

    pub fn is_prefix(c: Option<char>) -> bool {
        c.is_some_and(|c| Self::CHARS.contains(&c))
    }
}
