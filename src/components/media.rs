//! Media components: avatars, badges, icons, images and code blocks.

use serde::Deserialize;

use crate::markup::{Markup, el, icon as fa_icon};
use crate::render::{PropBag, TemplateSet};

/// Presence shown as a dot on an avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Online,
    Away,
    Offline,
}

impl Presence {
    fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Away => "away",
            Self::Offline => "offline",
        }
    }
}

/// Props for `media/avatar`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AvatarProps {
    pub image: String,
    /// Used for initials and alt text.
    pub name: String,
    /// Diameter in pixels.
    pub size: u32,
    pub show_ring: bool,
    pub status: Option<Presence>,
}

impl Default for AvatarProps {
    fn default() -> Self {
        Self {
            image: String::new(),
            name: "User".into(),
            size: 40,
            show_ring: false,
            status: None,
        }
    }
}

/// First letters of up to two words, upper-cased.
#[must_use]
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

pub fn avatar(props: &AvatarProps) -> Markup {
    let size = props.size.max(8);
    let face = if props.image.is_empty() {
        el("span")
            .class("nexus-avatar__initials")
            .attr("aria-hidden", "true")
            .text(initials(&props.name))
    } else {
        el("img")
            .class("nexus-avatar__image")
            .attr("src", props.image.as_str())
            .attr("alt", props.name.as_str())
            .attr("loading", "lazy")
            .attr("width", size)
            .attr("height", size)
    };

    el("span")
        .class("nexus-avatar")
        .class_if(props.show_ring, "nexus-avatar--ring")
        .attr("style", format!("width: {size}px; height: {size}px"))
        .attr("title", props.name.as_str())
        .child(face)
        .child(props.status.map(|status| {
            Markup::from(
                el("span")
                    .class("nexus-avatar__status")
                    .class(format!("nexus-avatar__status--{}", status.as_str()))
                    .attr("aria-label", status.as_str()),
            )
        }))
        .into()
}

/// Person shown in an avatar stack.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StackUser {
    pub name: String,
    pub avatar: String,
}

/// Props for `media/avatar-stack`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AvatarStackProps {
    pub users: Vec<StackUser>,
    pub max: usize,
    pub size: u32,
}

impl Default for AvatarStackProps {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            max: 3,
            size: 32,
        }
    }
}

pub fn avatar_stack(props: &AvatarStackProps) -> Markup {
    let shown = props.max.max(1).min(props.users.len());
    let overflow = props.users.len() - shown;

    el("div")
        .class("nexus-avatar-stack")
        .children(props.users.iter().take(shown).map(|user| {
            avatar(&AvatarProps {
                image: user.avatar.clone(),
                name: user.name.clone(),
                size: props.size,
                show_ring: true,
                status: None,
            })
        }))
        .child((overflow > 0).then(|| {
            Markup::from(
                el("span")
                    .class("nexus-avatar-stack__more")
                    .attr(
                        "style",
                        format!("width: {0}px; height: {0}px", props.size),
                    )
                    .text(format!("+{overflow}")),
            )
        }))
        .into()
}

/// Badge colour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    #[default]
    Primary,
    Success,
    Warning,
    Danger,
    Info,
    Muted,
}

impl BadgeVariant {
    pub const ALL: [Self; 6] = [
        Self::Primary,
        Self::Success,
        Self::Warning,
        Self::Danger,
        Self::Info,
        Self::Muted,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Info => "info",
            Self::Muted => "muted",
        }
    }
}

/// Props for `media/badge`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BadgeProps {
    pub text: String,
    pub variant: BadgeVariant,
    pub icon: String,
    pub pill: bool,
}

pub fn badge(props: &BadgeProps) -> Markup {
    el("span")
        .class("nexus-badge")
        .class(format!("nexus-badge--{}", props.variant.as_str()))
        .class_if(props.pill, "nexus-badge--pill")
        .child(fa_icon(&props.icon))
        .text(props.text.as_str())
        .into()
}

/// Props for `media/icon`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IconProps {
    /// Icon name without the `fa-` prefix.
    pub name: String,
    /// `xs`, `sm`, `md`, `lg` or `xl`.
    pub size: String,
    /// A colour variant name or any CSS colour.
    pub color: String,
    /// `solid`, `regular` or `brands`.
    #[serde(rename = "type")]
    pub style: String,
}

impl Default for IconProps {
    fn default() -> Self {
        Self {
            name: String::new(),
            size: "md".into(),
            color: String::new(),
            style: "solid".into(),
        }
    }
}

const COLOR_VARIANTS: &[&str] = &["primary", "success", "warning", "danger", "info", "muted"];

pub fn icon(props: &IconProps) -> Markup {
    if props.name.is_empty() {
        return Markup::empty();
    }
    let named_color = COLOR_VARIANTS.contains(&props.color.as_str());
    let element = el("i")
        .class(format!("fa-{}", props.style))
        .class(format!("fa-{}", props.name))
        .class("nexus-icon")
        .class(format!("nexus-icon--{}", props.size))
        .class_if(named_color, format!("nexus-icon--{}", props.color))
        .attr("aria-hidden", "true");
    if named_color || props.color.is_empty() {
        element.into()
    } else {
        element
            .attr("style", format!("color: {}", props.color))
            .into()
    }
}

/// Props for `media/image`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageProps {
    pub src: String,
    pub alt: String,
    /// `16/9`, `4/3`, `1/1`, or empty for the natural ratio.
    pub aspect_ratio: String,
    pub lazy: bool,
}

impl Default for ImageProps {
    fn default() -> Self {
        Self {
            src: String::new(),
            alt: String::new(),
            aspect_ratio: String::new(),
            lazy: true,
        }
    }
}

pub fn image(props: &ImageProps) -> Markup {
    let frame = el("figure")
        .class("nexus-image")
        .class_if(props.src.is_empty(), "nexus-image--empty");
    let frame = if props.aspect_ratio.is_empty() {
        frame
    } else {
        frame.attr("style", format!("aspect-ratio: {}", props.aspect_ratio))
    };

    if props.src.is_empty() {
        return frame
            .child(el("span").class("nexus-image__fallback").child(fa_icon("image")))
            .into();
    }

    frame
        .child(
            el("img")
                .class("nexus-image__img")
                .attr("src", props.src.as_str())
                .attr("alt", props.alt.as_str())
                .attr("loading", if props.lazy { "lazy" } else { "eager" })
                .attr("onerror", "this.parentElement.classList.add('nexus-image--empty')"),
        )
        .into()
}

/// Props for `media/code-block`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodeBlockProps {
    pub code: String,
    pub language: String,
    /// Title or filename shown above the code.
    pub title: String,
    pub show_line_numbers: bool,
    pub show_copy: bool,
    pub wrap: bool,
}

impl Default for CodeBlockProps {
    fn default() -> Self {
        Self {
            code: String::new(),
            language: "text".into(),
            title: String::new(),
            show_line_numbers: true,
            show_copy: true,
            wrap: false,
        }
    }
}

pub fn code_block(props: &CodeBlockProps) -> Markup {
    let code = props.code.trim_end_matches('\n');
    let header = (!props.title.is_empty() || props.show_copy).then(|| {
        Markup::from(
            el("div")
                .class("nexus-code-block__header")
                .child(
                    el("span")
                        .class("nexus-code-block__title")
                        .text(if props.title.is_empty() {
                            props.language.as_str()
                        } else {
                            props.title.as_str()
                        }),
                )
                .child(props.show_copy.then(|| {
                    super::interactive::copy_button(&super::interactive::CopyButtonProps {
                        text: code.to_string(),
                        ..super::interactive::CopyButtonProps::default()
                    })
                })),
        )
    });

    let body = if props.show_line_numbers {
        el("code")
            .class(format!("language-{}", props.language))
            .children(
                code.split('\n')
                    .map(|line| el("span").class("nexus-code-block__line").text(line)),
            )
    } else {
        el("code")
            .class(format!("language-{}", props.language))
            .text(code)
    };

    el("div")
        .class("nexus-code-block")
        .class_if(props.show_line_numbers, "nexus-code-block--numbered")
        .class_if(props.wrap, "nexus-code-block--wrap")
        .child(header)
        .child(el("pre").class("nexus-code-block__pre").child(body))
        .into()
}

pub(super) fn register(set: &mut TemplateSet) {
    set.register("media/avatar", |bag: &PropBag| avatar(&bag.decode()))
        .register("media/avatar-stack", |bag: &PropBag| avatar_stack(&bag.decode()))
        .register("media/badge", |bag: &PropBag| badge(&bag.decode()))
        .register("media/icon", |bag: &PropBag| icon(&bag.decode()))
        .register("media/image", |bag: &PropBag| image(&bag.decode()))
        .register("media/code-block", |bag: &PropBag| code_block(&bag.decode()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn initials_use_two_words_at_most() {
        assert_eq!(initials("jane smith"), "JS");
        assert_eq!(initials("Mary Ann Evans"), "MA");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials("   "), "?");
    }

    #[test]
    fn avatar_falls_back_to_initials() {
        let props: AvatarProps =
            PropBag::from(json!({"name": "Jane Smith", "size": 48, "status": "online"})).decode();
        let html = avatar(&props).to_string();
        assert!(html.contains(">JS</span>"));
        assert!(html.contains("width: 48px; height: 48px"));
        assert!(html.contains("nexus-avatar__status--online"));
    }

    #[test]
    fn avatar_with_image_uses_name_as_alt() {
        let props = AvatarProps {
            image: "/img/jane.png".into(),
            name: "Jane".into(),
            ..AvatarProps::default()
        };
        let html = avatar(&props).to_string();
        assert!(html.contains("src=\"/img/jane.png\""));
        assert!(html.contains("alt=\"Jane\""));
        assert!(!html.contains("nexus-avatar__initials"));
    }

    #[test]
    fn stack_shows_overflow_count() {
        let props: AvatarStackProps = PropBag::from(json!({
            "users": [{"name": "A"}, {"name": "B"}, {"name": "C"}, {"name": "D"}, {"name": "E"}],
            "max": 3
        }))
        .decode();
        let html = avatar_stack(&props).to_string();
        assert_eq!(html.matches("class=\"nexus-avatar nexus-avatar--ring\"").count(), 3);
        assert!(html.contains(">+2</span>"));
    }

    #[test]
    fn badge_variants_and_pill() {
        let props: BadgeProps =
            PropBag::from(json!({"text": "New", "variant": "success", "pill": true})).decode();
        assert_eq!(
            badge(&props).to_string(),
            "<span class=\"nexus-badge nexus-badge--success nexus-badge--pill\">New</span>"
        );
    }

    #[test]
    fn icon_with_custom_color_uses_style() {
        let props = IconProps {
            name: "star".into(),
            color: "#f5a623".into(),
            ..IconProps::default()
        };
        let html = icon(&props).to_string();
        assert!(html.contains("style=\"color: #f5a623\""));

        let props = IconProps {
            name: "star".into(),
            color: "warning".into(),
            ..IconProps::default()
        };
        assert!(icon(&props).to_string().contains("nexus-icon--warning"));
    }

    #[test]
    fn code_block_escapes_and_numbers_lines() {
        let props = CodeBlockProps {
            code: "<b>one</b>\ntwo\n".into(),
            language: "html".into(),
            show_copy: false,
            ..CodeBlockProps::default()
        };
        let html = code_block(&props).to_string();
        assert_eq!(html.matches("nexus-code-block__line").count(), 2);
        assert!(html.contains("&lt;b&gt;one&lt;/b&gt;"));
    }
}
