//! Typed markup tree.
//!
//! Components build [`Markup`] values instead of concatenating strings. The
//! tree is serialized in one pass, and every piece of user-provided text goes
//! through [`escape_html`], every class list through [`build_class_list`] and
//! every attribute map through [`build_attributes`].
//!
//! # Example
//!
//! ```rust
//! use nexus_ui::markup::{el, Markup};
//!
//! let link: Markup = el("a")
//!     .class("btn")
//!     .class_if(true, "btn--primary")
//!     .attr("href", "/volunteering")
//!     .text("Browse <all>")
//!     .into();
//!
//! assert_eq!(
//!     link.to_string(),
//!     r#"<a class="btn btn--primary" href="/volunteering">Browse &lt;all&gt;</a>"#
//! );
//! ```

mod escape;

use std::borrow::Cow;
use std::fmt;

pub use escape::{AttrValue, build_attributes, build_class_list, escape_html};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// A node in the markup tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Markup {
    /// An element with attributes and children.
    Element(Element),
    /// Text content, escaped on output.
    Text(String),
    /// Trusted HTML emitted verbatim.
    Raw(String),
    /// A sequence of sibling nodes without a wrapper.
    Fragment(Vec<Markup>),
}

impl Markup {
    /// An empty fragment.
    #[must_use]
    pub fn empty() -> Self {
        Self::Fragment(Vec::new())
    }

    /// Escaped text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Trusted HTML node.
    pub fn raw(html: impl Into<String>) -> Self {
        Self::Raw(html.into())
    }

    /// Whether this node renders nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Element(_) => false,
            Self::Text(text) | Self::Raw(text) => text.is_empty(),
            Self::Fragment(nodes) => nodes.iter().all(Self::is_empty),
        }
    }

    /// Serialize into any `fmt::Write` sink.
    pub fn render_into<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        match self {
            Self::Element(element) => element.render_into(out),
            Self::Text(text) => out.write_str(&escape_html(Some(text))),
            Self::Raw(html) => out.write_str(html),
            Self::Fragment(nodes) => {
                for node in nodes {
                    node.render_into(out)?;
                }
                Ok(())
            }
        }
    }

    /// Serialize into a fresh string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_into(f)
    }
}

impl From<Element> for Markup {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<Vec<Markup>> for Markup {
    fn from(nodes: Vec<Markup>) -> Self {
        Self::Fragment(nodes)
    }
}

impl From<Option<Markup>> for Markup {
    fn from(node: Option<Markup>) -> Self {
        node.unwrap_or_else(Self::empty)
    }
}

impl FromIterator<Markup> for Markup {
    fn from_iter<I: IntoIterator<Item = Markup>>(iter: I) -> Self {
        Self::Fragment(iter.into_iter().collect())
    }
}

/// An HTML element under construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: Cow<'static, str>,
    classes: Vec<String>,
    attributes: Vec<(Cow<'static, str>, AttrValue)>,
    children: Vec<Markup>,
}

/// Start building an element.
pub fn el(tag: impl Into<Cow<'static, str>>) -> Element {
    Element {
        tag: tag.into(),
        classes: Vec::new(),
        attributes: Vec::new(),
        children: Vec::new(),
    }
}

/// Font Awesome icon (`<i class="fa-solid fa-{name}">`), hidden from screen readers.
pub fn icon(name: &str) -> Markup {
    if name.is_empty() {
        return Markup::empty();
    }
    el("i")
        .class("fa-solid")
        .class(format!("fa-{name}"))
        .attr("aria-hidden", "true")
        .into()
}

impl Element {
    /// Add one or more space separated classes.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Add a class only when `condition` holds.
    #[must_use]
    pub fn class_if(self, condition: bool, class: impl Into<String>) -> Self {
        if condition { self.class(class) } else { self }
    }

    /// Add an attribute. Later duplicates are emitted as given.
    #[must_use]
    pub fn attr(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<AttrValue>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Boolean attribute.
    #[must_use]
    pub fn flag(self, key: impl Into<Cow<'static, str>>, on: bool) -> Self {
        self.attr(key, AttrValue::Bool(on))
    }

    /// Attribute that is omitted when the value is empty.
    #[must_use]
    pub fn attr_nonempty(self, key: impl Into<Cow<'static, str>>, value: &str) -> Self {
        if value.is_empty() {
            self
        } else {
            self.attr(key, value)
        }
    }

    /// Append a child node.
    #[must_use]
    pub fn child(mut self, child: impl Into<Markup>) -> Self {
        let child = child.into();
        if !matches!(&child, Markup::Fragment(nodes) if nodes.is_empty()) {
            self.children.push(child);
        }
        self
    }

    /// Append several children.
    #[must_use]
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Markup>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append escaped text.
    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Markup::Text(text.into()))
    }

    /// Append trusted HTML.
    #[must_use]
    pub fn raw(self, html: impl Into<String>) -> Self {
        self.child(Markup::Raw(html.into()))
    }

    fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_ref())
    }

    fn render_into<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        out.write_char('<')?;
        out.write_str(&self.tag)?;

        let classes = build_class_list(self.classes.iter().map(Some));
        if !classes.is_empty() {
            write!(out, " class=\"{}\"", escape_html(Some(&classes)))?;
        }

        let attributes = build_attributes(self.attributes.iter().map(|(k, v)| (k.as_ref(), v)));
        if !attributes.is_empty() {
            out.write_char(' ')?;
            out.write_str(&attributes)?;
        }
        out.write_char('>')?;

        if self.is_void() {
            return Ok(());
        }

        for child in &self.children {
            child.render_into(out)?;
        }
        write!(out, "</{}>", self.tag)
    }
}

/// A complete HTML document.
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Wrap an `<html>` element.
    #[must_use]
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// Serialize with the doctype preamble.
    #[must_use]
    pub fn render(&self) -> String {
        format!("<!DOCTYPE html>\n{}", Markup::Element(self.root.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn void_elements_have_no_closing_tag() {
        let input: Markup = el("input")
            .attr("type", "text")
            .flag("required", true)
            .flag("disabled", false)
            .into();
        assert_eq!(input.to_string(), r#"<input type="text" required>"#);
    }

    #[test]
    fn nested_children_render_in_order() {
        let list: Markup = el("ul")
            .children(["one", "two"].map(|item| el("li").text(item)))
            .into();
        assert_eq!(list.to_string(), "<ul><li>one</li><li>two</li></ul>");
    }

    #[test]
    fn raw_content_is_not_escaped() {
        let wrapper: Markup = el("div").raw("<p>kept</p>").text("<p>escaped</p>").into();
        assert_eq!(
            wrapper.to_string(),
            "<div><p>kept</p>&lt;p&gt;escaped&lt;/p&gt;</div>"
        );
    }

    #[test]
    fn empty_classes_are_skipped() {
        let div: Markup = el("div").class("card").class("").class_if(false, "x").into();
        assert_eq!(div.to_string(), r#"<div class="card"></div>"#);
    }

    #[test]
    fn fragment_emptiness() {
        assert!(Markup::empty().is_empty());
        assert!(Markup::Fragment(vec![Markup::text("")]).is_empty());
        assert!(!Markup::from(el("br")).is_empty());
    }

    #[test]
    fn document_has_doctype() {
        let doc = Document::new(el("html").attr("lang", "en"));
        assert_eq!(doc.render(), "<!DOCTYPE html>\n<html lang=\"en\"></html>");
    }

    #[test]
    fn icon_helper_skips_empty_names() {
        assert!(icon("").is_empty());
        assert_eq!(
            icon("star").to_string(),
            r#"<i class="fa-solid fa-star" aria-hidden="true"></i>"#
        );
    }
}
