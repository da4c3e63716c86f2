//! # Block Parsing
//!
//! The statement grammar: markup units that occupy whole lines.
//!
//! ## Modules
//!
//! - **`types`**: `Statement` enum and the heading / list / quote / paragraph / plugin nodes
//! - **`table`**: `Table`, `Cell` and `TableCellFormat`, with span resolution helpers
//! - **`kinds`**: Block-specific types with owned markers and delimiters
//! - **`parser`**: `StatementParser`, one recursive-descent method per construct
//! - **`render`**: HTML rendering and markup serialization of statements
//!
//! ## Dispatch
//!
//! After skipping blank and `//` comment lines, the first character of a line
//! selects the construct: `#` block plugin, `*` heading, `---` separator,
//! `+` / `-` list, a space preformatted text, `|` table, `>` quote, and a
//! paragraph for anything else. Lists and quotes nest by marker run length
//! and recurse into the dispatcher for their content.
//!
//! ## Key Invariants
//!
//! - Heading levels are 1 to 3; list and quote levels are at least 1
//! - Every table row has the column count of the table's first row
//! - A `|~|` hole only ever changes the `row_span` of a cell in an earlier row

pub mod kinds;
pub mod parser;
pub mod render;
pub mod table;
pub mod types;

pub use parser::StatementParser;
pub use table::{Cell, Row, Table, TableCellFormat};
pub use types::{Alignment, BlockPlugin, Heading, List, Paragraph, Quote, Statement};
