//! Layout components.

use serde::Deserialize;

use super::buttons::{ButtonProps, button};
use crate::markup::{Markup, el, icon};
use crate::render::{PropBag, TemplateSet};

/// Small pill shown above a hero title.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HeroBadge {
    pub icon: String,
    pub text: String,
}

/// Props for `layout/hero`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroProps {
    pub title: String,
    pub subtitle: String,
    pub icon: String,
    pub badge: Option<HeroBadge>,
    pub buttons: Vec<ButtonProps>,
    /// `default`, `centered` or `compact`.
    pub variant: String,
    pub class: String,
}

impl Default for HeroProps {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            icon: String::new(),
            badge: None,
            buttons: Vec::new(),
            variant: "default".into(),
            class: String::new(),
        }
    }
}

pub fn hero(props: &HeroProps) -> Markup {
    let badge = props
        .badge
        .as_ref()
        .filter(|b| !b.text.is_empty())
        .map(|b| {
            Markup::from(
                el("span")
                    .class("nexus-hero__badge")
                    .child(icon(&b.icon))
                    .text(b.text.as_str()),
            )
        });

    let icon_block = (!props.icon.is_empty())
        .then(|| Markup::from(el("div").class("nexus-hero__icon").child(icon(&props.icon))));

    let actions = (!props.buttons.is_empty()).then(|| {
        Markup::from(
            el("div")
                .class("nexus-hero__actions")
                .children(props.buttons.iter().map(button)),
        )
    });

    el("section")
        .class("nexus-hero")
        .class(format!("nexus-hero--{}", props.variant))
        .class(props.class.as_str())
        .child(
            el("div")
                .class("nexus-hero__inner")
                .child(badge)
                .child(icon_block)
                .child(el("h1").class("nexus-hero__title").text(props.title.as_str()))
                .child((!props.subtitle.is_empty()).then(|| {
                    Markup::from(el("p").class("nexus-hero__subtitle").text(props.subtitle.as_str()))
                }))
                .child(actions),
        )
        .into()
}

/// Props for `layout/section`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectionProps {
    pub title: String,
    pub subtitle: String,
    pub icon: String,
    pub actions: Vec<ButtonProps>,
    /// Section body HTML.
    pub content: String,
    /// `default`, `card` or `flat`.
    pub variant: String,
}

impl Default for SectionProps {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            icon: String::new(),
            actions: Vec::new(),
            content: String::new(),
            variant: "default".into(),
        }
    }
}

pub fn section(props: &SectionProps) -> Markup {
    let has_header = !props.title.is_empty() || !props.actions.is_empty();
    let header = has_header.then(|| {
        Markup::from(
            el("header")
                .class("nexus-section__header")
                .child(
                    el("div")
                        .class("nexus-section__heading")
                        .child(
                            el("h2")
                                .class("nexus-section__title")
                                .child(icon(&props.icon))
                                .text(props.title.as_str()),
                        )
                        .child((!props.subtitle.is_empty()).then(|| {
                            Markup::from(
                                el("p")
                                    .class("nexus-section__subtitle")
                                    .text(props.subtitle.as_str()),
                            )
                        })),
                )
                .child((!props.actions.is_empty()).then(|| {
                    Markup::from(
                        el("div").class("nexus-section__actions").children(
                            props.actions.iter().map(|a| {
                                button(&ButtonProps {
                                    size: super::Size::Sm,
                                    ..a.clone()
                                })
                            }),
                        ),
                    )
                })),
        )
    });

    el("section")
        .class("nexus-section")
        .class(format!("nexus-section--{}", props.variant))
        .child(header)
        .child(el("div").class("nexus-section__body").raw(props.content.as_str()))
        .into()
}

/// Props for `layout/container`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContainerProps {
    /// `sm`, `md`, `lg`, `xl` or `full`.
    pub size: String,
    pub class: String,
    /// Inner HTML.
    pub slot: String,
}

impl Default for ContainerProps {
    fn default() -> Self {
        Self {
            size: "lg".into(),
            class: String::new(),
            slot: String::new(),
        }
    }
}

pub fn container(props: &ContainerProps) -> Markup {
    el("div")
        .class("nexus-container")
        .class(format!("nexus-container--{}", props.size))
        .class(props.class.as_str())
        .raw(props.slot.as_str())
        .into()
}

/// Props for `layout/grid`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridProps {
    /// Column count, clamped to 1..=6.
    pub cols: i64,
    pub gap: String,
    /// Item contents (HTML).
    pub items: Vec<String>,
}

impl Default for GridProps {
    fn default() -> Self {
        Self {
            cols: 3,
            gap: "md".into(),
            items: Vec::new(),
        }
    }
}

pub fn grid(props: &GridProps) -> Markup {
    let cols = props.cols.clamp(1, 6);
    el("div")
        .class("nexus-grid")
        .class(format!("nexus-grid--cols-{cols}"))
        .class(format!("nexus-grid--gap-{}", props.gap))
        .children(
            props
                .items
                .iter()
                .map(|item| el("div").class("nexus-grid__item").raw(item.as_str())),
        )
        .into()
}

/// Props for `layout/sidebar-layout`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SidebarLayoutProps {
    pub sidebar_content: String,
    pub main_content: String,
    /// `left` or `right`.
    pub sidebar_position: String,
    pub sidebar_width: String,
}

impl Default for SidebarLayoutProps {
    fn default() -> Self {
        Self {
            sidebar_content: String::new(),
            main_content: String::new(),
            sidebar_position: "left".into(),
            sidebar_width: "300px".into(),
        }
    }
}

pub fn sidebar_layout(props: &SidebarLayoutProps) -> Markup {
    let right = props.sidebar_position == "right";
    let sidebar = el("aside")
        .class("nexus-sidebar-layout__sidebar")
        .raw(props.sidebar_content.as_str());
    let main = el("div")
        .class("nexus-sidebar-layout__main")
        .raw(props.main_content.as_str());

    let layout = el("div")
        .class("nexus-sidebar-layout")
        .class_if(right, "nexus-sidebar-layout--right")
        .attr(
            "style",
            format!("--sidebar-width: {}", props.sidebar_width),
        );
    if right {
        layout.child(main).child(sidebar).into()
    } else {
        layout.child(sidebar).child(main).into()
    }
}

pub(super) fn register(set: &mut TemplateSet) {
    set.register("layout/hero", |bag: &PropBag| hero(&bag.decode()))
        .register("layout/section", |bag: &PropBag| section(&bag.decode()))
        .register("layout/container", |bag: &PropBag| container(&bag.decode()))
        .register("layout/grid", |bag: &PropBag| grid(&bag.decode()))
        .register("layout/sidebar-layout", |bag: &PropBag| {
            sidebar_layout(&bag.decode())
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hero_renders_badge_and_buttons() {
        let props: HeroProps = PropBag::from(json!({
            "title": "Volunteer Opportunities",
            "subtitle": "Make a difference",
            "badge": {"icon": "heart", "text": "Community"},
            "buttons": [{"label": "Browse", "href": "/volunteering"}],
            "variant": "centered"
        }))
        .decode();
        let html = hero(&props).to_string();
        assert!(html.contains("nexus-hero--centered"));
        assert!(html.contains("Community"));
        assert!(html.contains("<h1 class=\"nexus-hero__title\">Volunteer Opportunities</h1>"));
        assert!(html.contains("href=\"/volunteering\""));
    }

    #[test]
    fn hero_without_subtitle_omits_paragraph() {
        let html = hero(&HeroProps::default()).to_string();
        assert!(!html.contains("nexus-hero__subtitle"));
        assert!(html.contains("nexus-hero--default"));
    }

    #[test]
    fn grid_clamps_columns() {
        let props = GridProps {
            cols: 12,
            items: vec!["a".into()],
            ..GridProps::default()
        };
        assert!(grid(&props).to_string().contains("nexus-grid--cols-6"));

        let props = GridProps {
            cols: 0,
            ..GridProps::default()
        };
        assert!(grid(&props).to_string().contains("nexus-grid--cols-1"));
    }

    #[test]
    fn container_emits_slot_verbatim() {
        let props: ContainerProps =
            PropBag::from(json!({"size": "md", "slot": "<div class=\"demo\">x</div>"})).decode();
        assert_eq!(
            container(&props).to_string(),
            "<div class=\"nexus-container nexus-container--md\"><div class=\"demo\">x</div></div>"
        );
    }

    #[test]
    fn sidebar_on_the_right_comes_last() {
        let props = SidebarLayoutProps {
            sidebar_content: "S".into(),
            main_content: "M".into(),
            sidebar_position: "right".into(),
            ..SidebarLayoutProps::default()
        };
        let html = sidebar_layout(&props).to_string();
        let main_at = html.find(">M<").unwrap();
        let side_at = html.find(">S<").unwrap();
        assert!(main_at < side_at);
    }
}
