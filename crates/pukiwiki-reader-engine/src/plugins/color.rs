use crate::{error::RenderError, render::RenderContext};

use super::Plugin;

/// `&color(fg[,bg]){text};`
#[derive(Debug, Clone, Copy)]
pub struct ColorPlugin;

impl Plugin for ColorPlugin {
    fn matches(&self, name: &str) -> bool {
        name == "color"
    }

    fn render_inline(
        &self,
        _name: &str,
        _ctx: &RenderContext<'_>,
        args: Option<&[String]>,
        content: Option<&str>,
    ) -> Result<Option<String>, RenderError> {
        let Some([foreground, rest @ ..]) = args else {
            return Ok(None);
        };
        let mut style = format!("color:{foreground};");
        if let Some(background) = rest.first() {
            style.push_str(&format!("background-color:{background};"));
        }
        Ok(Some(format!(
            "<span style=\"{style}\">{}</span>",
            content.unwrap_or_default()
        )))
    }
}
