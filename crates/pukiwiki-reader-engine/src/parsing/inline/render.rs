use crate::{
    error::RenderError,
    render::{RenderContext, WikiNode},
};

use super::{
    kinds::{Bold, Italic, LinkSyntax, Note, PluginCall, Strike},
    types::{Expression, InlinePlugin, Link},
};

/// Escapes `<` and `>` only; `&` and quotes pass through so that entities
/// written in the source survive.
pub fn escape_angle_brackets(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

impl WikiNode for Expression {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        Ok(match self {
            Expression::Plain(text) => {
                let escaped = escape_angle_brackets(text);
                if ctx.config.convert_line_break {
                    escaped.replace('\n', "<br/>\n")
                } else {
                    escaped
                }
            }
            Expression::Bold(child) => format!("<b>{}</b>", child.render(ctx)?),
            Expression::Italic(child) => format!("<i>{}</i>", child.render(ctx)?),
            Expression::Strike(child) => format!("<s>{}</s>", child.render(ctx)?),
            Expression::Note(_) => Note::MARKER.to_string(),
            Expression::Link(link) => link.render(ctx)?,
            Expression::Plugin(call) => call.render(ctx)?,
            Expression::Composite(children) => children.render(ctx)?,
        })
    }

    fn serialize(&self) -> String {
        match self {
            Expression::Plain(text) => text.clone(),
            Expression::Bold(child) => format!("{0}{1}{0}", Bold::MARK, child.serialize()),
            Expression::Italic(child) => format!("{0}{1}{0}", Italic::MARK, child.serialize()),
            Expression::Strike(child) => format!("{0}{1}{0}", Strike::MARK, child.serialize()),
            Expression::Note(child) => format!("{}{}{}", Note::OPEN, child.serialize(), Note::CLOSE),
            Expression::Link(link) => link.serialize(),
            Expression::Plugin(call) => call.serialize(),
            Expression::Composite(children) => children.serialize(),
        }
    }
}

impl WikiNode for Link {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        let anchor = self
            .anchor
            .as_ref()
            .map(|a| format!("{}{a}", LinkSyntax::ANCHOR))
            .unwrap_or_default();
        Ok(format!(
            "<a href=\"{}{anchor}\">{}</a>",
            self.target,
            self.content.render(ctx)?
        ))
    }

    /// Always written in the explicit `[[label>target]]` form.
    fn serialize(&self) -> String {
        format!(
            "{}{}{}{}{}",
            LinkSyntax::OPEN,
            self.content.serialize(),
            LinkSyntax::LABEL,
            self.raw_target(),
            LinkSyntax::CLOSE
        )
    }
}

impl WikiNode for InlinePlugin {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        let content = self
            .content
            .as_ref()
            .map(|c| c.render(ctx))
            .transpose()?;
        ctx.config.plugins.render_inline(
            &self.name,
            ctx,
            self.args.as_deref(),
            content.as_deref(),
        )
    }

    fn serialize(&self) -> String {
        let mut out = format!("{}{}", PluginCall::PREFIX, self.name);
        if let Some(args) = &self.args {
            out.push_str(PluginCall::ARGS_OPEN);
            out.push_str(&args.join(&PluginCall::ARG_SEPARATOR.to_string()));
            out.push_str(PluginCall::ARGS_CLOSE);
        }
        if let Some(content) = &self.content {
            out.push_str(PluginCall::BODY_OPEN);
            out.push_str(&content.serialize());
            out.push_str(PluginCall::BODY_CLOSE);
        }
        out.push_str(PluginCall::TERMINATOR);
        out
    }
}
