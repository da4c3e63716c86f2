//! # Plugins
//!
//! `#name(args)` block calls and `&name(args){content};` inline calls are
//! resolved at render time against an ordered [`PluginRegistry`]. The first
//! plugin whose [`Plugin::matches`] accepts the name handles the call; if it
//! declines by returning `None` the call is unresolved, even when a later
//! plugin would have matched.

use std::fmt;

use crate::{error::RenderError, render::RenderContext};

pub mod color;
pub mod contents;
pub mod defaults;
pub mod include;

pub use color::ColorPlugin;
pub use contents::ContentsPlugin;
pub use defaults::DefaultsPlugin;
pub use include::IncludePlugin;

/// A named handler for plugin calls.
pub trait Plugin: fmt::Debug + Send + Sync {
    fn matches(&self, name: &str) -> bool;

    /// Renders `#name(args){{ body }}`.
    fn render_block(
        &self,
        _name: &str,
        _ctx: &RenderContext<'_>,
        _args: Option<&[String]>,
        _body: Option<&str>,
    ) -> Result<Option<String>, RenderError> {
        Ok(None)
    }

    /// Renders `&name(args){content};`, where `content` is already HTML.
    fn render_inline(
        &self,
        _name: &str,
        _ctx: &RenderContext<'_>,
        _args: Option<&[String]>,
        _content: Option<&str>,
    ) -> Result<Option<String>, RenderError> {
        Ok(None)
    }
}

#[derive(Debug, Default)]
pub struct PluginRegistry {
    plugins: Vec<Box<dyn Plugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Color, contents, defaults and include, in that order.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry
            .register(ColorPlugin)
            .register(ContentsPlugin)
            .register(DefaultsPlugin)
            .register(IncludePlugin);
        registry
    }

    /// Appends a plugin; earlier registrations take precedence.
    pub fn register(&mut self, plugin: impl Plugin + 'static) -> &mut Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// The first registered plugin matching `name`.
    pub fn find(&self, name: &str) -> Option<&dyn Plugin> {
        self.plugins
            .iter()
            .find(|p| p.matches(name))
            .map(|p| p.as_ref())
    }

    pub fn render_block(
        &self,
        name: &str,
        ctx: &RenderContext<'_>,
        args: Option<&[String]>,
        body: Option<&str>,
    ) -> Result<String, RenderError> {
        let plugin = self.find(name).ok_or_else(|| unresolved(name))?;
        log::debug!("block plugin {name} handled by {plugin:?}");
        plugin
            .render_block(name, ctx, args, body)?
            .ok_or_else(|| unresolved(name))
    }

    pub fn render_inline(
        &self,
        name: &str,
        ctx: &RenderContext<'_>,
        args: Option<&[String]>,
        content: Option<&str>,
    ) -> Result<String, RenderError> {
        let plugin = self.find(name).ok_or_else(|| unresolved(name))?;
        log::debug!("inline plugin {name} handled by {plugin:?}");
        plugin
            .render_inline(name, ctx, args, content)?
            .ok_or_else(|| unresolved(name))
    }
}

fn unresolved(name: &str) -> RenderError {
    RenderError::UnresolvedPlugin {
        name: name.to_string(),
    }
}
