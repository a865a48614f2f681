//! Buttons: button, icon button, button group and floating action button.

use serde::Deserialize;

use super::Size;
use crate::markup::{Element, Markup, el, icon};
use crate::render::PropBag;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Primary action button.
    #[default]
    Primary,
    /// Secondary action button.
    Secondary,
    /// Bordered, transparent background.
    Outline,
    /// Subtle ghost button.
    Ghost,
    /// Destructive action button.
    Danger,
}

impl ButtonVariant {
    /// All variants in display order.
    pub const ALL: [Self; 5] = [
        Self::Primary,
        Self::Secondary,
        Self::Outline,
        Self::Ghost,
        Self::Danger,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Danger => "danger",
        }
    }
}

/// Where the icon sits relative to the label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconPosition {
    #[default]
    Left,
    Right,
}

/// Props for `buttons/button`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonProps {
    pub label: String,
    pub variant: ButtonVariant,
    pub size: Size,
    pub icon: String,
    pub icon_position: IconPosition,
    /// Renders an `<a>` when set.
    pub href: String,
    pub disabled: bool,
    pub loading: bool,
    pub full_width: bool,
    /// `type` attribute for `<button>`; defaults to `button`.
    #[serde(rename = "type")]
    pub button_type: String,
    pub class: String,
    pub id: String,
}

impl ButtonProps {
    /// A plain button with the given label.
    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }
}

/// Render a button.
///
/// A button with `href` becomes a link; a loading button is always disabled.
pub fn button(props: &ButtonProps) -> Markup {
    let disabled = props.disabled || props.loading;

    let leading = if props.loading {
        el("span")
            .class("nexus-btn__spinner")
            .attr("aria-hidden", "true")
            .into()
    } else if props.icon_position == IconPosition::Left {
        icon(&props.icon)
    } else {
        Markup::empty()
    };
    let trailing = if !props.loading && props.icon_position == IconPosition::Right {
        icon(&props.icon)
    } else {
        Markup::empty()
    };

    let base = if props.href.is_empty() {
        let button_type = if props.button_type.is_empty() {
            "button"
        } else {
            props.button_type.as_str()
        };
        el("button").attr("type", button_type).flag("disabled", disabled)
    } else if disabled {
        el("a")
            .attr("aria-disabled", "true")
            .attr("tabindex", "-1")
    } else {
        el("a").attr("href", props.href.as_str())
    };

    with_button_classes(base, props, disabled)
        .attr_nonempty("id", &props.id)
        .flag("aria-busy", props.loading)
        .child(leading)
        .child(
            el("span")
                .class("nexus-btn__label")
                .text(props.label.as_str()),
        )
        .child(trailing)
        .into()
}

fn with_button_classes(element: Element, props: &ButtonProps, disabled: bool) -> Element {
    element
        .class("nexus-btn")
        .class(format!("nexus-btn--{}", props.variant.as_str()))
        .class(format!("nexus-btn--{}", props.size.as_str()))
        .class_if(props.full_width, "nexus-btn--block")
        .class_if(props.loading, "nexus-btn--loading")
        .class_if(disabled, "nexus-btn--disabled")
        .class(props.class.as_str())
}

/// Props for `buttons/icon-button`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IconButtonProps {
    pub icon: String,
    /// Tooltip and accessible label.
    pub label: String,
    pub variant: String,
    pub size: Size,
}

impl Default for IconButtonProps {
    fn default() -> Self {
        Self {
            icon: String::new(),
            label: String::new(),
            variant: "default".into(),
            size: Size::Md,
        }
    }
}

pub fn icon_button(props: &IconButtonProps) -> Markup {
    el("button")
        .attr("type", "button")
        .class("nexus-icon-btn")
        .class(format!("nexus-icon-btn--{}", props.variant))
        .class(format!("nexus-icon-btn--{}", props.size.as_str()))
        .attr_nonempty("aria-label", &props.label)
        .attr_nonempty("title", &props.label)
        .child(icon(&props.icon))
        .into()
}

/// Props for `buttons/button-group`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonGroupProps {
    pub buttons: Vec<ButtonProps>,
    pub size: Size,
    pub vertical: bool,
}

pub fn button_group(props: &ButtonGroupProps) -> Markup {
    el("div")
        .class("nexus-btn-group")
        .class_if(props.vertical, "nexus-btn-group--vertical")
        .attr("role", "group")
        .children(props.buttons.iter().map(|b| {
            button(&ButtonProps {
                size: props.size,
                ..b.clone()
            })
        }))
        .into()
}

/// Props for `buttons/fab`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FabProps {
    pub icon: String,
    pub label: String,
    pub position: String,
    pub variant: ButtonVariant,
    pub href: String,
}

impl Default for FabProps {
    fn default() -> Self {
        Self {
            icon: "plus".into(),
            label: String::new(),
            position: "bottom-right".into(),
            variant: ButtonVariant::Primary,
            href: String::new(),
        }
    }
}

pub fn fab(props: &FabProps) -> Markup {
    let base = if props.href.is_empty() {
        el("button").attr("type", "button")
    } else {
        el("a").attr("href", props.href.as_str())
    };
    base.class("nexus-fab")
        .class(format!("nexus-fab--{}", props.position))
        .class(format!("nexus-fab--{}", props.variant.as_str()))
        .attr_nonempty("aria-label", &props.label)
        .attr_nonempty("title", &props.label)
        .child(icon(&props.icon))
        .into()
}

pub(super) fn register(set: &mut crate::render::TemplateSet) {
    set.register("buttons/button", |bag: &PropBag| button(&bag.decode()))
        .register("buttons/icon-button", |bag: &PropBag| icon_button(&bag.decode()))
        .register("buttons/button-group", |bag: &PropBag| button_group(&bag.decode()))
        .register("buttons/fab", |bag: &PropBag| fab(&bag.decode()));
}
