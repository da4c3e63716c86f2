use crate::{
    error::RenderError,
    render::{RenderContext, WikiNode},
};

use super::{
    kinds::{
        BlockPluginSyntax, HeadingSyntax, ListSyntax, ParagraphSyntax, Preformatted, QuoteSyntax,
        Separator,
    },
    types::{BlockPlugin, Heading, List, Paragraph, Quote, Statement},
};

impl WikiNode for Statement {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        match self {
            Statement::Heading(heading) => heading.render(ctx),
            Statement::List(list) => list.render(ctx),
            Statement::Quote(quote) => quote.render(ctx),
            Statement::Table(table) => table.render(ctx),
            Statement::Paragraph(paragraph) => paragraph.render(ctx),
            Statement::Preformatted(text) => Ok(format!("<pre>{text}</pre>")),
            Statement::Separator { .. } => Ok("<hr/>".to_string()),
            Statement::Plugin(plugin) => plugin.render(ctx),
            Statement::Inline(expression) => expression.render(ctx),
            Statement::Composite(children) => children.render(ctx),
        }
    }

    fn serialize(&self) -> String {
        match self {
            Statement::Heading(heading) => heading.serialize(),
            Statement::List(list) => list.serialize(),
            Statement::Quote(quote) => quote.serialize(),
            Statement::Table(table) => table.serialize(),
            Statement::Paragraph(paragraph) => paragraph.serialize(),
            Statement::Preformatted(text) => text
                .split('\n')
                .map(|line| format!("{}{line}", Preformatted::INDENT))
                .collect::<Vec<_>>()
                .join("\n"),
            Statement::Separator { length } => {
                Separator::MARK.to_string().repeat((*length).max(Separator::MIN_LENGTH))
            }
            Statement::Plugin(plugin) => plugin.serialize(),
            Statement::Inline(expression) => expression.serialize(),
            // HTML concatenates, but each child block needs its own line.
            Statement::Composite(children) => children
                .iter()
                .map(WikiNode::serialize)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

impl WikiNode for Heading {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        let level = self.level();
        let id = self
            .anchor
            .as_ref()
            .map(|a| format!(" id=\"{a}\""))
            .unwrap_or_default();
        Ok(format!("<h{level}{id}>{}</h{level}>", self.content.render(ctx)?))
    }

    fn serialize(&self) -> String {
        let mut out = HeadingSyntax::MARK.to_string().repeat(self.level());
        out.push(' ');
        out.push_str(&self.content.serialize());
        if let Some(anchor) = &self.anchor {
            out.push_str(&format!(
                " {}{}{anchor}{}",
                HeadingSyntax::ANCHOR_OPEN,
                HeadingSyntax::ANCHOR_PREFIX,
                HeadingSyntax::ANCHOR_CLOSE
            ));
        }
        out
    }
}

impl WikiNode for List {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        let tag = if self.ordered { "ol" } else { "ul" };
        let mut out = format!("<{tag}>");
        for item in &self.items {
            out.push_str("<li>");
            out.push_str(&item.render(ctx)?);
            out.push_str("</li>");
        }
        out.push_str(&format!("</{tag}>"));
        Ok(out)
    }

    /// One item per line group. Anything but inline text after a marker is
    /// written on the lines below it, where the list parser picks it up as a
    /// nested block.
    fn serialize(&self) -> String {
        let marker = ListSyntax::marker(self.ordered).to_string().repeat(self.level());
        self.items
            .iter()
            .map(|item| match item {
                Statement::List(nested) => nested.serialize(),
                Statement::Inline(text) => format!("{marker} {}", text.serialize()),
                Statement::Paragraph(paragraph) => {
                    format!("{marker} {}", paragraph.serialize_forced())
                }
                Statement::Composite(parts) => match parts.as_slice() {
                    [Statement::Inline(text), block] => {
                        format!("{marker} {}\n{}", text.serialize(), serialize_nested(block))
                    }
                    _ => format!("{marker}\n{}", item.serialize()),
                },
                block => format!("{marker}\n{}", serialize_nested(block)),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A block written on its own line inside a list item.
fn serialize_nested(block: &Statement) -> String {
    match block {
        Statement::Paragraph(paragraph) => paragraph.serialize_forced(),
        other => other.serialize(),
    }
}

impl WikiNode for Quote {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        let children = self
            .content
            .iter()
            .map(|child| child.render(ctx))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(format!("<blockquote>{}</blockquote>", children.join("\n")))
    }

    /// Each child's first line gets the marker; later lines continue lazily.
    fn serialize(&self) -> String {
        let marker = QuoteSyntax::OPEN.to_string().repeat(self.level());
        self.content
            .iter()
            .map(|child| match child {
                Statement::Quote(nested) => nested.serialize(),
                other => format!("{marker} {}", other.serialize()),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Paragraph {
    /// Markup that always reads back as a paragraph, even inside a list.
    pub fn serialize_forced(&self) -> String {
        match self.alignment {
            Some(_) => self.serialize(),
            None => format!("{}{}", ParagraphSyntax::FORCE, self.content.serialize()),
        }
    }
}

impl WikiNode for Paragraph {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        let style = self
            .alignment
            .map(|a| format!(" style=\"text-align:{}\"", a.css()))
            .unwrap_or_default();
        Ok(format!("<p{style}>{}</p>", self.content.render(ctx)?))
    }

    fn serialize(&self) -> String {
        let content = self.content.serialize();
        match self.alignment {
            Some(alignment) => format!("{}:{content}", alignment.keyword()),
            None if ParagraphSyntax::needs_force(&content) => {
                format!("{}{content}", ParagraphSyntax::FORCE)
            }
            None => content,
        }
    }
}

impl WikiNode for BlockPlugin {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        ctx.config
            .plugins
            .render_block(&self.name, ctx, self.args.as_deref(), self.body.as_deref())
    }

    fn serialize(&self) -> String {
        let mut out = format!("{}{}", BlockPluginSyntax::PREFIX, self.name);
        if let Some(args) = &self.args {
            out.push_str(BlockPluginSyntax::ARGS_OPEN);
            out.push_str(&args.join(","));
            out.push_str(BlockPluginSyntax::ARGS_CLOSE);
        }
        if let Some(body) = &self.body {
            out.push_str(BlockPluginSyntax::BODY_OPEN);
            out.push_str(body);
            out.push_str(BlockPluginSyntax::BODY_CLOSE);
        }
        out
    }
}
