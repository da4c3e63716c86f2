use crate::{error::ParseError, parsing::inline::Expression};

use super::{kinds::HeadingSyntax, table::Table};

/// A parsed block node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Heading(Heading),
    List(List),
    Quote(Quote),
    Table(Table),
    Paragraph(Paragraph),
    /// Lines with their one-space indent removed, joined by `\n`.
    Preformatted(String),
    /// `---` or longer; the dash count is kept for serialization.
    Separator { length: usize },
    Plugin(BlockPlugin),
    /// Bare inline content, as found directly after a list marker.
    Inline(Expression),
    /// Blocks rendered back to back, e.g. a list item's text followed by a nested block.
    Composite(Vec<Statement>),
}

/// Text alignment selected by a `LEFT:` / `RIGHT:` / `CENTER:` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
    Center,
}

impl Alignment {
    pub const ALL: [Alignment; 3] = [Alignment::Left, Alignment::Right, Alignment::Center];

    /// The markup keyword, without its trailing `:`.
    pub fn keyword(self) -> &'static str {
        match self {
            Alignment::Left => "LEFT",
            Alignment::Right => "RIGHT",
            Alignment::Center => "CENTER",
        }
    }

    /// The CSS `text-align` value.
    pub fn css(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Right => "right",
            Alignment::Center => "center",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.keyword() == keyword)
    }
}

/// `*`, `**` or `***` heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    level: usize,
    pub content: Expression,
    pub anchor: Option<String>,
}

impl Heading {
    /// Fails with [`ParseError::InvalidStructure`] unless `level` is 1 to 3.
    pub fn new(level: usize, content: Expression, anchor: Option<String>) -> Result<Self, ParseError> {
        if !(1..=HeadingSyntax::MAX_LEVEL).contains(&level) {
            return Err(ParseError::InvalidStructure(format!(
                "heading level {level} is outside 1..={}",
                HeadingSyntax::MAX_LEVEL
            )));
        }
        Ok(Self {
            level,
            content,
            anchor,
        })
    }

    pub fn level(&self) -> usize {
        self.level
    }
}

/// An ordered (`+`) or unordered (`-`) list at one nesting level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    level: usize,
    pub ordered: bool,
    /// One statement per `<li>`.
    pub items: Vec<Statement>,
}

impl List {
    pub fn new(level: usize, ordered: bool, items: Vec<Statement>) -> Result<Self, ParseError> {
        if level == 0 {
            return Err(ParseError::InvalidStructure(
                "list nesting level must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            level,
            ordered,
            items,
        })
    }

    pub fn level(&self) -> usize {
        self.level
    }
}

/// A `>` quote at one nesting level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    level: usize,
    pub content: Vec<Statement>,
}

impl Quote {
    pub fn new(level: usize, content: Vec<Statement>) -> Result<Self, ParseError> {
        if level == 0 {
            return Err(ParseError::InvalidStructure(
                "quote nesting level must be at least 1".to_string(),
            ));
        }
        Ok(Self { level, content })
    }

    pub fn level(&self) -> usize {
        self.level
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub alignment: Option<Alignment>,
    /// Lines joined by `Plain("\n")` nodes.
    pub content: Expression,
}

/// `#name(args){{ body }}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockPlugin {
    pub name: String,
    pub args: Option<Vec<String>>,
    /// Raw text between the `{{` and `}}` lines, never parsed.
    pub body: Option<String>,
}
