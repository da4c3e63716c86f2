use std::path::PathBuf;

use thiserror::Error;

/// Failure while turning markup into a node tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A required literal was not found at the cursor.
    #[error(
        "unexpected {found} at line {line}, column {column}, {} expected",
        expected.join(" or ")
    )]
    TokenExpected {
        found: String,
        expected: Vec<String>,
        line: usize,
        column: usize,
    },
    /// A node could not be built because it would violate one of its invariants.
    #[error("invalid structure: {0}")]
    InvalidStructure(String),
}

/// Failure while turning a node tree into HTML.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No registered plugin matched the name, or the matching plugin declined.
    #[error("plugin {name} not found")]
    UnresolvedPlugin { name: String },
    #[error("include failed: {0}")]
    Include(#[from] IncludeError),
}

/// Failure of the `#include` plugin to produce the included page.
#[derive(Debug, Error)]
pub enum IncludeError {
    #[error(
        "cannot include from a document with no file name; configure a source root or load the document from a file"
    )]
    NoSourceLocation,
    #[error("include requires a page name argument")]
    MissingPageName,
    #[error("include depth limit of {limit} exceeded")]
    DepthExceeded { limit: usize },
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("included page failed to parse: {0}")]
    Parse(#[from] ParseError),
}

/// Failure reading a page file from disk.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Not a page file name: {0}")]
    InvalidFileName(PathBuf),
}

/// Failure loading a document from a file.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl From<DocumentError> for IncludeError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::Io(err) => IncludeError::Io(err),
            DocumentError::Parse(err) => IncludeError::Parse(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_expected_message_lists_alternatives() {
        let err = ParseError::TokenExpected {
            found: "NEWLINE".into(),
            expected: vec![">".into(), "]]".into()],
            line: 3,
            column: 7,
        };
        assert_eq!(
            err.to_string(),
            "unexpected NEWLINE at line 3, column 7, > or ]] expected"
        );
    }

    #[test]
    fn unresolved_plugin_names_the_plugin() {
        let err = RenderError::UnresolvedPlugin {
            name: "nope".into(),
        };
        assert_eq!(err.to_string(), "plugin nope not found");
    }
}
