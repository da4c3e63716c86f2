use crate::{
    error::RenderError,
    render::{RenderContext, WikiNode},
};

use super::Plugin;

/// `#contents`: a nested list of links to the document's top-level headings.
#[derive(Debug, Clone, Copy)]
pub struct ContentsPlugin;

impl Plugin for ContentsPlugin {
    fn matches(&self, name: &str) -> bool {
        name == "contents"
    }

    /// Each step down in heading level opens a `<ul>` inside the open item,
    /// each step up closes one.
    fn render_block(
        &self,
        _name: &str,
        ctx: &RenderContext<'_>,
        _args: Option<&[String]>,
        _body: Option<&str>,
    ) -> Result<Option<String>, RenderError> {
        let mut lines = vec!["<ul>".to_string()];
        let mut current = 1;
        let mut first = true;

        for heading in ctx.document.headings() {
            let level = heading.level();
            if level > current {
                lines.extend((current..level).map(|_| "<ul>".to_string()));
            } else if level < current {
                lines.push("</li>".to_string());
                for _ in level..current {
                    lines.push("</ul>".to_string());
                    lines.push("</li>".to_string());
                }
            } else if !first {
                lines.push("</li>".to_string());
            }
            first = false;

            lines.push("<li>".to_string());
            lines.push(format!(
                "<a href=\"#{}\">{}</a>",
                heading.anchor.as_deref().unwrap_or_default(),
                heading.content.render(ctx)?
            ));
            current = level;
        }

        if !first {
            lines.push("</li>".to_string());
        }
        for _ in 1..current {
            lines.push("</ul>".to_string());
            lines.push("</li>".to_string());
        }
        lines.push("</ul>".to_string());

        Ok(Some(lines.join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::WikiConfig, document::Document};
    use pretty_assertions::assert_eq;

    fn render(text: &str) -> String {
        Document::parse(text)
            .unwrap()
            .render(&WikiConfig::default())
            .unwrap()
    }

    #[test]
    fn nests_by_heading_level() {
        let html = render("#contents\n* A [#a]\n** B [#b]\n* ''C'' [#c]\n");
        let toc = html.split("\n<h1").next().unwrap();
        assert_eq!(
            toc,
            [
                "<ul>",
                "<li>",
                r##"<a href="#a">A</a>"##,
                "<ul>",
                "<li>",
                r##"<a href="#b">B</a>"##,
                "</li>",
                "</ul>",
                "</li>",
                "<li>",
                r##"<a href="#c"><b>C</b></a>"##,
                "</li>",
                "</ul>",
            ]
            .join("\n")
        );
    }

    #[test]
    fn open_levels_are_closed_at_the_end() {
        let html = render("#contents\n* A\n*** C\n");
        let toc = html.split("\n<h1").next().unwrap();
        assert!(toc.ends_with("</li>\n</ul>\n</li>\n</ul>\n</li>\n</ul>"), "{toc}");
        assert!(toc.contains(r##"<a href="#">A</a>"##));
    }

    #[test]
    fn no_headings_gives_an_empty_list() {
        assert_eq!(render("#contents\n"), "<ul>\n</ul>");
    }
}
