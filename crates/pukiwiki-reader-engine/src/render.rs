//! # Render / Serialize Protocol
//!
//! Every node of the tree can be turned into an HTML fragment given a
//! [`RenderContext`], and back into markup. Serialization is structural: re-parsing
//! the serialized text reproduces an equal tree, not necessarily the same bytes.

use crate::{config::WikiConfig, document::Document, error::RenderError};

/// Read-only state shared by every node during one render pass.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: &'a WikiConfig,
    /// The document whose tree is being rendered.
    pub document: &'a Document,
    /// How many `#include` levels deep this render is.
    pub include_depth: usize,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a WikiConfig, document: &'a Document) -> Self {
        Self {
            config,
            document,
            include_depth: 0,
        }
    }

    /// A context for rendering `document` as included from this one.
    pub fn nested(&self, document: &'a Document) -> Self {
        Self {
            config: self.config,
            document,
            include_depth: self.include_depth + 1,
        }
    }
}

/// A node of the markup tree.
pub trait WikiNode {
    /// Renders the node to an HTML fragment.
    fn render(&self, ctx: &RenderContext<'_>) -> Result<String, RenderError>;

    /// Renders the node back to markup.
    fn serialize(&self) -> String;
}

impl<T: WikiNode> WikiNode for [T] {
    /// Concatenates each child's HTML with no separator.
    fn render(&self, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        self.iter().map(|node| node.render(ctx)).collect()
    }

    fn serialize(&self) -> String {
        self.iter().map(WikiNode::serialize).collect()
    }
}
