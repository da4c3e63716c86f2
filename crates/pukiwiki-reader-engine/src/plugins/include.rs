use crate::{
    document::Document,
    error::{IncludeError, RenderError},
    io,
    render::RenderContext,
};

use super::Plugin;

/// `#include(PageName)`: parses another page and renders it in place.
///
/// The page is looked up under the configured source root, or next to the
/// including document's file. Nesting is bounded only by
/// `include_depth_limit`, so a page that includes itself needs a limit.
#[derive(Debug, Clone, Copy)]
pub struct IncludePlugin;

impl Plugin for IncludePlugin {
    fn matches(&self, name: &str) -> bool {
        name == "include"
    }

    fn render_block(
        &self,
        _name: &str,
        ctx: &RenderContext<'_>,
        args: Option<&[String]>,
        _body: Option<&str>,
    ) -> Result<Option<String>, RenderError> {
        let page = args
            .and_then(<[String]>::first)
            .filter(|page| !page.is_empty())
            .ok_or(IncludeError::MissingPageName)?;

        if let Some(limit) = ctx.config.include_depth_limit
            && ctx.include_depth >= limit
        {
            return Err(IncludeError::DepthExceeded { limit }.into());
        }

        let root = ctx
            .config
            .source_root
            .clone()
            .or_else(|| ctx.document.source_dir().map(ToOwned::to_owned))
            .ok_or(IncludeError::NoSourceLocation)?;

        let path = io::page_path(page, &root);
        log::debug!(
            "including {page} from {} at depth {}",
            path.display(),
            ctx.include_depth + 1
        );
        let included = Document::from_file(&path).map_err(IncludeError::from)?;
        Ok(Some(included.render_in(&ctx.nested(&included))?))
    }
}
