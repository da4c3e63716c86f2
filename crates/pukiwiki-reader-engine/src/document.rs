use std::path::{Path, PathBuf};

use crate::{
    config::WikiConfig,
    error::{DocumentError, ParseError, RenderError},
    io,
    parsing::{
        blocks::{Heading, Statement, kinds::Title},
        parse_document,
    },
    render::{RenderContext, WikiNode},
};

/// Where a document was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSource {
    pub path: PathBuf,
    pub page_name: String,
}

/// A parsed page: its top-level statements plus title and origin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub statements: Vec<Statement>,
    /// From the page's `TITLE:` line.
    pub title: Option<String>,
    /// Set when loaded with [`Document::from_file`]; used to resolve `#include`.
    pub source: Option<PageSource>,
}

impl Document {
    /// Parse page text with no file identity.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let parsed = parse_document(text)?;
        Ok(Self {
            statements: parsed.statements,
            title: parsed.title,
            source: None,
        })
    }

    /// Read and parse a page file.
    ///
    /// The page name comes from the hex-encoded file name; files not named
    /// that way use their file stem instead.
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        let text = io::read_file(path)?;
        let page_name = io::page_name_for_file(path).unwrap_or_else(|_| {
            log::debug!("{} is not a page file name, using its stem", path.display());
            path.file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default()
        });

        let mut document = Self::parse(&text)?;
        document.source = Some(PageSource {
            path: path.to_path_buf(),
            page_name,
        });
        Ok(document)
    }

    /// The `TITLE:` text, else the page name.
    pub fn display_title(&self) -> Option<&str> {
        self.title
            .as_deref()
            .or_else(|| self.source.as_ref().map(|s| s.page_name.as_str()))
    }

    /// Directory of the file the document was read from.
    pub fn source_dir(&self) -> Option<&Path> {
        self.source.as_ref().and_then(|s| s.path.parent())
    }

    /// Top-level headings in document order.
    pub fn headings(&self) -> impl Iterator<Item = &Heading> {
        self.statements.iter().filter_map(|s| match s {
            Statement::Heading(heading) => Some(heading),
            _ => None,
        })
    }

    pub fn render(&self, config: &WikiConfig) -> Result<String, RenderError> {
        self.render_in(&RenderContext::new(config, self))
    }

    /// Renders with an existing context, e.g. one nested for `#include`.
    pub fn render_in(&self, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        let fragments = self
            .statements
            .iter()
            .map(|s| s.render(ctx))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(fragments.join("\n"))
    }

    /// Markup that parses back to an equal document.
    pub fn serialize(&self) -> String {
        let mut blocks = vec![];
        if let Some(title) = &self.title {
            blocks.push(format!("{}{title}", Title::PREFIX));
        }
        blocks.extend(self.statements.iter().map(WikiNode::serialize));
        blocks.join("\n\n")
    }
}
