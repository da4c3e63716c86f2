pub mod blocks;
pub mod cursor;
pub mod inline;

use crate::error::ParseError;

use blocks::{Statement, StatementParser};

#[derive(Debug)]
pub struct ParsedDoc {
    pub statements: Vec<Statement>,
    /// Text of the first top-level `TITLE:` line.
    pub title: Option<String>,
}

/// Parses a whole page.
///
/// Line endings are normalized to `\n` and a final newline is added when
/// missing, so the last line needs no special casing in the grammar.
pub fn parse_document(text: &str) -> Result<ParsedDoc, ParseError> {
    let mut normalized = text.replace("\r\n", "\n");
    if !normalized.ends_with('\n') {
        normalized.push('\n');
    }

    let (statements, title) = StatementParser::new(&normalized).parse_all()?;
    Ok(ParsedDoc { statements, title })
}
