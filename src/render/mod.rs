//! Component renderer.
//!
//! Resolves a template path against the components root, decodes the caller's
//! [`PropBag`] inside the template and returns the produced markup. Nothing is
//! shared between calls: each render starts from a fresh bag and a fresh
//! output buffer.
//!
//! # Example
//!
//! ```rust
//! use nexus_ui::render::{PropBag, Renderer, TemplateSet};
//!
//! let renderer = Renderer::new(TemplateSet::builtin());
//! let html = renderer
//!     .render_component("buttons/button", &PropBag::new().with("label", "Join"))
//!     .unwrap();
//! assert!(html.contains("Join"));
//! ```

mod props;

use std::collections::BTreeMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::error::RenderError;
use crate::markup::{Markup, el};

pub use props::PropBag;

/// A component template: decodes its props and builds markup.
pub type TemplateFn = fn(&PropBag) -> Markup;

/// Template paths mapped to their functions.
#[derive(Clone, Default)]
pub struct TemplateSet {
    templates: BTreeMap<String, TemplateFn>,
}

impl fmt::Debug for TemplateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateSet")
            .field("template_count", &self.templates.len())
            .finish()
    }
}

impl TemplateSet {
    /// An empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every component shipped with the library.
    #[must_use]
    pub fn builtin() -> Self {
        let mut set = Self::new();
        crate::components::register_all(&mut set);
        set
    }

    /// Register a template. The path is normalized the same way lookups are.
    ///
    /// # Panics
    ///
    /// Panics when the path is not a valid template path; registration happens
    /// with literal paths at startup.
    pub fn register(&mut self, path: &str, template: TemplateFn) -> &mut Self {
        let resolved = resolve_path(path)
            .unwrap_or_else(|e| panic!("cannot register template {path:?}: {e}"));
        self.templates.insert(resolved, template);
        self
    }

    /// Builder-style [`register`](Self::register).
    #[must_use]
    pub fn with(mut self, path: &str, template: TemplateFn) -> Self {
        self.register(path, template);
        self
    }

    /// Drop a template, returning whether it was present.
    pub fn remove(&mut self, path: &str) -> bool {
        resolve_path(path).is_ok_and(|resolved| self.templates.remove(&resolved).is_some())
    }

    /// Whether a template exists under `path`.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        resolve_path(path).is_ok_and(|resolved| self.templates.contains_key(&resolved))
    }

    /// Registered paths in sorted order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    fn lookup(&self, path: &str) -> Result<(String, TemplateFn), RenderError> {
        let resolved = resolve_path(path)?;
        match self.templates.get(&resolved) {
            Some(template) => Ok((resolved, *template)),
            None => Err(RenderError::TemplateNotFound { path: resolved }),
        }
    }
}

/// Normalize a template path relative to the components root.
///
/// Leading `./` and `/` are dropped, as is a trailing `.php` or `.html`
/// extension. Empty paths and any `..` segment are rejected.
pub fn resolve_path(path: &str) -> Result<String, RenderError> {
    let invalid = || RenderError::InvalidPath {
        path: path.to_string(),
    };

    let mut trimmed = path.trim();
    while let Some(rest) = trimmed.strip_prefix("./") {
        trimmed = rest;
    }
    let trimmed = trimmed.trim_start_matches('/');
    let trimmed = trimmed
        .strip_suffix(".php")
        .or_else(|| trimmed.strip_suffix(".html"))
        .unwrap_or(trimmed);

    if trimmed.is_empty() {
        return Err(invalid());
    }

    let mut segments = Vec::new();
    for segment in trimmed.split('/') {
        match segment {
            "" | "." => {}
            ".." => return Err(invalid()),
            other => segments.push(other),
        }
    }

    if segments.is_empty() {
        return Err(invalid());
    }
    Ok(segments.join("/"))
}

/// Renders components from a shared [`TemplateSet`].
#[derive(Debug, Clone)]
pub struct Renderer {
    templates: Arc<TemplateSet>,
}

impl Renderer {
    #[must_use]
    pub fn new(templates: TemplateSet) -> Self {
        Self {
            templates: Arc::new(templates),
        }
    }

    /// The templates this renderer resolves against.
    #[must_use]
    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    /// Render a component into its own buffer.
    pub fn render_component(&self, path: &str, props: &PropBag) -> Result<String, RenderError> {
        let mut buffer = String::new();
        self.emit_component(&mut buffer, path, props)?;
        Ok(buffer)
    }

    /// Render a component straight into the caller's output.
    ///
    /// Nothing is written when the template cannot be resolved or panics.
    pub fn emit_component<W: fmt::Write>(
        &self,
        out: &mut W,
        path: &str,
        props: &PropBag,
    ) -> Result<(), RenderError> {
        let markup = self.render_markup(path, props)?;
        // Writes into in-memory sinks do not fail; a failing sink is the
        // caller's concern and only truncates its own output.
        let _ = markup.render_into(out);
        Ok(())
    }

    /// Render a component as a markup node.
    pub fn render_markup(&self, path: &str, props: &PropBag) -> Result<Markup, RenderError> {
        let (resolved, template) = self.templates.lookup(path)?;

        match panic::catch_unwind(AssertUnwindSafe(|| template(props))) {
            Ok(markup) => {
                metrics::counter!("components_rendered_total").increment(1);
                Ok(markup)
            }
            Err(_) => Err(RenderError::TemplatePanicked { path: resolved }),
        }
    }

    /// Render a component, or a visible placeholder when that fails.
    ///
    /// Failures are logged as warnings and counted; the placeholder text is
    /// chosen by the caller.
    pub fn render_or_placeholder(&self, path: &str, props: &PropBag, placeholder: &str) -> Markup {
        match self.render_markup(path, props) {
            Ok(markup) => markup,
            Err(e) => {
                tracing::warn!(
                    name: "render.failed",
                    template = %path,
                    reason = e.reason(),
                    error = %e,
                    "Component could not be rendered"
                );
                metrics::counter!("components_render_failures_total", "reason" => e.reason())
                    .increment(1);
                placeholder_block(placeholder)
            }
        }
    }
}

/// The visible block shown instead of a component that failed to render.
pub fn placeholder_block(message: &str) -> Markup {
    el("div")
        .class("component-placeholder")
        .attr("role", "note")
        .text(message)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn echo_keys(props: &PropBag) -> Markup {
        let keys: Vec<&str> = props.keys().collect();
        Markup::text(keys.join(","))
    }

    fn boom(_: &PropBag) -> Markup {
        panic!("template exploded");
    }

    fn test_renderer() -> Renderer {
        Renderer::new(
            TemplateSet::new()
                .with("test/a", echo_keys)
                .with("test/b", echo_keys)
                .with("test/boom", boom),
        )
    }

    #[test]
    fn resolve_path_normalizes() {
        assert_eq!(resolve_path("buttons/button").unwrap(), "buttons/button");
        assert_eq!(resolve_path("./buttons/button.php").unwrap(), "buttons/button");
        assert_eq!(resolve_path("/media//avatar.html").unwrap(), "media/avatar");
    }

    #[test]
    fn resolve_path_rejects_traversal() {
        assert!(matches!(
            resolve_path("../secrets"),
            Err(RenderError::InvalidPath { .. })
        ));
        assert!(matches!(resolve_path(""), Err(RenderError::InvalidPath { .. })));
        assert!(matches!(resolve_path("./"), Err(RenderError::InvalidPath { .. })));
    }

    #[test]
    fn missing_template_is_an_error() {
        let err = test_renderer()
            .render_component("test/missing", &PropBag::new())
            .unwrap_err();
        assert_eq!(
            err,
            RenderError::TemplateNotFound {
                path: "test/missing".into()
            }
        );
    }

    #[test]
    fn props_do_not_leak_between_calls() {
        let renderer = test_renderer();
        let first = renderer
            .render_component("test/a", &PropBag::from(json!({"x": 1})))
            .unwrap();
        let second = renderer
            .render_component("test/b", &PropBag::from(json!({"y": 2})))
            .unwrap();
        assert_eq!(first, "x");
        assert_eq!(second, "y");
    }

    #[test]
    fn emit_writes_into_caller_buffer() {
        let mut page = String::from("<main>");
        test_renderer()
            .emit_component(&mut page, "test/a", &PropBag::new().with("k", true))
            .unwrap();
        page.push_str("</main>");
        assert_eq!(page, "<main>k</main>");
    }

    #[test]
    fn panicking_template_is_contained() {
        let renderer = test_renderer();
        let err = renderer
            .render_component("test/boom", &PropBag::new())
            .unwrap_err();
        assert_eq!(err.reason(), "panicked");

        let fallback = renderer.render_or_placeholder("test/boom", &PropBag::new(), "Preview failed");
        assert!(fallback.to_string().contains("Preview failed"));
    }

    #[test]
    fn template_set_contains_and_remove() {
        let mut set = TemplateSet::new().with("cards/card.php", echo_keys);
        assert!(set.contains("cards/card"));
        assert!(set.remove("./cards/card"));
        assert!(!set.contains("cards/card"));
        assert!(set.is_empty());
    }
}
