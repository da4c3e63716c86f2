use crate::{error::RenderError, render::RenderContext};

use super::Plugin;

const EMOTICONS: [&str; 8] = [
    "heart", "smile", "bigsmile", "huh", "oh", "wink", "sad", "worried",
];

/// Small built-ins: rules, breaks, entities, and calls that render to nothing.
#[derive(Debug, Clone, Copy)]
pub struct DefaultsPlugin;

impl Plugin for DefaultsPlugin {
    fn matches(&self, name: &str) -> bool {
        matches!(name, "norelated" | "freeze" | "hr" | "br" | "amp" | "clear")
            || EMOTICONS.contains(&name)
            || name.starts_with('#')
    }

    fn render_block(
        &self,
        name: &str,
        _ctx: &RenderContext<'_>,
        _args: Option<&[String]>,
        _body: Option<&str>,
    ) -> Result<Option<String>, RenderError> {
        Ok(match name {
            "hr" => Some("<hr/>".to_string()),
            "br" => Some("<br/>".to_string()),
            "clear" => Some("<span style=\"clear:both;\"></span>".to_string()),
            "norelated" | "freeze" => Some(String::new()),
            _ => None,
        })
    }

    fn render_inline(
        &self,
        name: &str,
        _ctx: &RenderContext<'_>,
        _args: Option<&[String]>,
        _content: Option<&str>,
    ) -> Result<Option<String>, RenderError> {
        Ok(match name {
            "br" => Some("<br/>".to_string()),
            "amp" => Some("&amp;".to_string()),
            name if EMOTICONS.contains(&name) => Some(String::new()),
            // `&#x2665;` arrives with the name `#x2665`.
            name if name.starts_with('#') => Some(format!("&{name};")),
            _ => None,
        })
    }
}
