//! HTML escaping and attribute serialization helpers.
//!
//! These are the only places where raw values become markup text. The
//! [`Markup`](super::Markup) serializer routes every text node, class list
//! and attribute through them.

use std::fmt::Write as _;

/// Value of a single HTML attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Boolean attribute: `true` emits the bare key, `false` omits it.
    Bool(bool),
    /// Regular `key="value"` attribute.
    Text(String),
    /// Absent value; the attribute is omitted.
    Null,
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

macro_rules! attr_from_display {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AttrValue {
                fn from(value: $ty) -> Self {
                    Self::Text(value.to_string())
                }
            }
        )*
    };
}

attr_from_display!(u8, u16, u32, u64, usize, i32, i64, f64);

/// Escape a value for use in HTML text or a quoted attribute.
///
/// `None` becomes the empty string. `&`, `<`, `>`, `"` and `'` are replaced
/// by entities; every other character (including multi-byte UTF-8) passes
/// through untouched.
pub fn escape_html(value: Option<&str>) -> String {
    let Some(value) = value else {
        return String::new();
    };

    let mut out = String::with_capacity(value.len());
    push_escaped(&mut out, value);
    out
}

/// Append the escaped form of `value` to `out`.
pub(crate) fn push_escaped(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
}

/// Join the non-empty class names with single spaces, keeping their order.
///
/// ```rust
/// use nexus_ui::markup::build_class_list;
///
/// let classes = build_class_list([Some("a"), Some(""), None, Some("b"), None]);
/// assert_eq!(classes, "a b");
/// ```
pub fn build_class_list<I, S>(classes: I) -> String
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for class in classes.into_iter().flatten() {
        let class = class.as_ref().trim();
        if class.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(class);
    }
    out
}

/// Serialize attributes in iteration order.
///
/// `Bool(true)` emits the escaped key alone, `Bool(false)` and `Null` are
/// skipped, anything else becomes `key="escaped value"`.
pub fn build_attributes<'a, I>(attributes: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a AttrValue)>,
{
    let mut out = String::new();
    for (key, value) in attributes {
        let piece = match value {
            AttrValue::Bool(false) | AttrValue::Null => continue,
            AttrValue::Bool(true) => escape_html(Some(key)),
            AttrValue::Text(text) => {
                let mut piece = escape_html(Some(key));
                // Writing into a String cannot fail.
                let _ = write!(piece, "=\"{}\"", escape_html(Some(text)));
                piece
            }
        };
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&piece);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_none_is_empty() {
        assert_eq!(escape_html(None), "");
    }

    #[test]
    fn escape_replaces_special_characters() {
        let escaped = escape_html(Some(r#"<a href="x">Tom & 'Jerry'</a>"#));
        assert_eq!(
            escaped,
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#039;Jerry&#039;&lt;/a&gt;"
        );
        for forbidden in ['<', '>', '"', '\''] {
            assert!(!escaped.contains(forbidden));
        }
    }

    #[test]
    fn escape_leaves_plain_text_alone() {
        let plain = "Community garden, 10am - bring gloves";
        assert_eq!(escape_html(Some(plain)), plain);
        assert_eq!(escape_html(Some(&escape_html(Some(plain)))), plain);
    }

    #[test]
    fn escape_keeps_multibyte_characters() {
        assert_eq!(escape_html(Some("Café <Dublin> ☘")), "Café &lt;Dublin&gt; ☘");
    }

    #[test]
    fn class_list_drops_empty_entries() {
        assert_eq!(
            build_class_list([Some("a"), Some(""), None, Some("b"), None]),
            "a b"
        );
        assert_eq!(build_class_list::<_, &str>([None, None]), "");
    }

    #[test]
    fn class_list_accepts_conditional_entries() {
        let active = true;
        let disabled = false;
        let classes = build_class_list([
            Some("btn"),
            active.then_some("btn--active"),
            disabled.then_some("btn--disabled"),
        ]);
        assert_eq!(classes, "btn btn--active");
    }

    #[test]
    fn attributes_follow_insertion_order() {
        let attrs = [
            ("disabled", AttrValue::Bool(true)),
            ("hidden", AttrValue::Bool(false)),
            ("title", AttrValue::Text("x\"y".into())),
        ];
        let rendered = build_attributes(attrs.iter().map(|(k, v)| (*k, v)));
        assert_eq!(rendered, r#"disabled title="x&quot;y""#);
    }

    #[test]
    fn attributes_skip_null_values() {
        let attrs = [
            ("id", AttrValue::from("main")),
            ("aria-label", AttrValue::from(None::<&str>)),
            ("data-count", AttrValue::from(3_u32)),
        ];
        let rendered = build_attributes(attrs.iter().map(|(k, v)| (*k, v)));
        assert_eq!(rendered, r#"id="main" data-count="3""#);
    }
}
