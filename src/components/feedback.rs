//! Feedback components: alerts, empty states, modals, toasts and loaders.

use serde::Deserialize;

use super::{Link, Size};
use crate::markup::{Markup, el, icon};
use crate::render::{PropBag, TemplateSet};

/// Alert severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl AlertType {
    pub const ALL: [Self; 4] = [Self::Info, Self::Success, Self::Warning, Self::Danger];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    /// Icon used when the caller does not pick one.
    #[must_use]
    pub fn default_icon(self) -> &'static str {
        match self {
            Self::Info => "circle-info",
            Self::Success => "circle-check",
            Self::Warning => "triangle-exclamation",
            Self::Danger => "circle-exclamation",
        }
    }
}

/// Props for `feedback/alert`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlertProps {
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub message: String,
    pub title: String,
    pub dismissible: bool,
    pub icon: String,
}

impl Default for AlertProps {
    fn default() -> Self {
        Self {
            alert_type: AlertType::Info,
            message: String::new(),
            title: String::new(),
            dismissible: true,
            icon: String::new(),
        }
    }
}

pub fn alert(props: &AlertProps) -> Markup {
    let icon_name = if props.icon.is_empty() {
        props.alert_type.default_icon()
    } else {
        props.icon.as_str()
    };
    let role = if props.alert_type == AlertType::Danger {
        "alert"
    } else {
        "status"
    };

    let title = (!props.title.is_empty()).then(|| {
        Markup::from(el("strong").class("nexus-alert__title").text(props.title.as_str()))
    });
    let dismiss = props.dismissible.then(|| {
        Markup::from(
            el("button")
                .attr("type", "button")
                .class("nexus-alert__dismiss")
                .attr("aria-label", "Dismiss")
                .attr("onclick", "this.closest('.nexus-alert').remove()")
                .child(icon("xmark")),
        )
    });

    el("div")
        .class("nexus-alert")
        .class(format!("nexus-alert--{}", props.alert_type.as_str()))
        .attr("role", role)
        .child(el("span").class("nexus-alert__icon").child(icon(icon_name)))
        .child(
            el("div")
                .class("nexus-alert__content")
                .child(title)
                .child(el("p").class("nexus-alert__message").text(props.message.as_str())),
        )
        .child(dismiss)
        .into()
}

/// Props for `feedback/empty-state`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmptyStateProps {
    /// Font Awesome name, or an emoji shown as text.
    pub icon: String,
    pub title: String,
    pub message: String,
    pub action: Option<Link>,
}

pub fn empty_state(props: &EmptyStateProps) -> Markup {
    let visual = if props.icon.is_empty() {
        icon("magnifying-glass")
    } else if props.icon.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        icon(&props.icon)
    } else {
        Markup::text(props.icon.as_str())
    };

    let action = props.action.as_ref().filter(|a| !a.label.is_empty()).map(|a| {
        super::buttons::button(&super::buttons::ButtonProps {
            href: a.href.clone(),
            icon: a.icon.clone(),
            ..super::buttons::ButtonProps::labelled(a.label.as_str())
        })
    });

    el("div")
        .class("nexus-empty-state")
        .child(el("div").class("nexus-empty-state__icon").child(visual))
        .child(
            (!props.title.is_empty())
                .then(|| Markup::from(el("h3").class("nexus-empty-state__title").text(props.title.as_str()))),
        )
        .child(
            (!props.message.is_empty())
                .then(|| Markup::from(el("p").class("nexus-empty-state__message").text(props.message.as_str()))),
        )
        .child(action)
        .into()
}

/// Props for `feedback/modal`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModalProps {
    pub id: String,
    pub title: String,
    /// Body HTML.
    pub content: String,
    /// Footer HTML.
    pub footer: String,
    pub size: String,
}

impl Default for ModalProps {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            content: String::new(),
            footer: String::new(),
            size: "md".into(),
        }
    }
}

pub fn modal(props: &ModalProps) -> Markup {
    let id = if props.id.is_empty() {
        "nexus-modal"
    } else {
        props.id.as_str()
    };
    let title_id = format!("{id}-title");

    el("div")
        .class("nexus-modal")
        .class(format!("nexus-modal--{}", props.size))
        .attr("id", id)
        .attr("role", "dialog")
        .attr("aria-modal", "true")
        .attr("aria-labelledby", title_id.clone())
        .attr("hidden", true)
        .child(el("div").class("nexus-modal__backdrop").attr("data-modal-close", id))
        .child(
            el("div")
                .class("nexus-modal__dialog")
                .child(
                    el("header")
                        .class("nexus-modal__header")
                        .child(el("h2").class("nexus-modal__title").attr("id", title_id).text(props.title.as_str()))
                        .child(
                            el("button")
                                .attr("type", "button")
                                .class("nexus-modal__close")
                                .attr("aria-label", "Close")
                                .attr("data-modal-close", id)
                                .child(icon("xmark")),
                        ),
                )
                .child(el("div").class("nexus-modal__body").raw(props.content.as_str()))
                .child(
                    (!props.footer.is_empty()).then(|| {
                        Markup::from(el("footer").class("nexus-modal__footer").raw(props.footer.as_str()))
                    }),
                ),
        )
        .into()
}

/// Props for `feedback/toast`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToastProps {
    pub position: String,
}

impl Default for ToastProps {
    fn default() -> Self {
        Self {
            position: "top-right".into(),
        }
    }
}

/// Client-side toast helper installed alongside the container.
pub const TOAST_SCRIPT: &str = r"
window.showToast = window.showToast || function (message, type) {
    const container = document.getElementById('nexus-toast-container');
    if (!container) { return; }
    const toast = document.createElement('div');
    toast.className = 'nexus-toast nexus-toast--' + (type || 'info');
    toast.setAttribute('role', 'status');
    toast.textContent = message;
    container.appendChild(toast);
    setTimeout(function () { toast.classList.add('nexus-toast--leaving'); }, 3000);
    setTimeout(function () { toast.remove(); }, 3400);
};";

pub fn toast(props: &ToastProps) -> Markup {
    Markup::Fragment(vec![
        el("div")
            .class("nexus-toast-container")
            .class(format!("nexus-toast-container--{}", props.position))
            .attr("id", "nexus-toast-container")
            .attr("aria-live", "polite")
            .into(),
        el("script").raw(TOAST_SCRIPT).into(),
    ])
}

/// Props for `feedback/skeleton`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkeletonProps {
    #[serde(rename = "type")]
    pub kind: String,
    pub count: u32,
    pub animated: bool,
}

impl Default for SkeletonProps {
    fn default() -> Self {
        Self {
            kind: "text".into(),
            count: 1,
            animated: true,
        }
    }
}

pub fn skeleton(props: &SkeletonProps) -> Markup {
    let count = props.count.clamp(1, 20);
    el("div")
        .class("nexus-skeleton-group")
        .attr("aria-busy", "true")
        .attr("aria-label", "Loading")
        .children((0..count).map(|_| {
            el("div")
                .class("nexus-skeleton")
                .class(format!("nexus-skeleton--{}", props.kind))
                .class_if(props.animated, "nexus-skeleton--animated")
        }))
        .into()
}

/// Props for `feedback/loading-spinner`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoadingSpinnerProps {
    pub variant: String,
    pub size: Size,
    pub message: String,
}

impl Default for LoadingSpinnerProps {
    fn default() -> Self {
        Self {
            variant: "spinner".into(),
            size: Size::Md,
            message: String::new(),
        }
    }
}

pub fn loading_spinner(props: &LoadingSpinnerProps) -> Markup {
    let dots = if props.variant == "dots" { 3 } else { 0 };
    el("div")
        .class("nexus-loader")
        .class(format!("nexus-loader--{}", props.variant))
        .class(format!("nexus-loader--{}", props.size.as_str()))
        .attr("role", "status")
        .child(
            el("span")
                .class("nexus-loader__indicator")
                .attr("aria-hidden", "true")
                .children((0..dots).map(|_| el("span").class("nexus-loader__dot"))),
        )
        .child(if props.message.is_empty() {
            el("span").class("sr-only").text("Loading")
        } else {
            el("span").class("nexus-loader__message").text(props.message.as_str())
        })
        .into()
}

pub(super) fn register(set: &mut TemplateSet) {
    set.register("feedback/alert", |bag: &PropBag| alert(&bag.decode()))
        .register("feedback/empty-state", |bag: &PropBag| empty_state(&bag.decode()))
        .register("feedback/modal", |bag: &PropBag| modal(&bag.decode()))
        .register("feedback/toast", |bag: &PropBag| toast(&bag.decode()))
        .register("feedback/skeleton", |bag: &PropBag| skeleton(&bag.decode()))
        .register("feedback/loading-spinner", |bag: &PropBag| {
            loading_spinner(&bag.decode())
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn alert_picks_icon_from_type() {
        let props: AlertProps =
            PropBag::from(json!({"type": "warning", "message": "Careful"})).decode();
        let html = alert(&props).to_string();
        assert!(html.contains("nexus-alert--warning"));
        assert!(html.contains("fa-triangle-exclamation"));
        assert!(html.contains("nexus-alert__dismiss"));
    }

    #[test]
    fn alert_escapes_message() {
        let props = AlertProps {
            message: "<script>alert(1)</script>".into(),
            dismissible: false,
            ..AlertProps::default()
        };
        let html = alert(&props).to_string();
        assert!(!html.contains("<script>"));
        assert!(!html.contains("nexus-alert__dismiss"));
    }

    #[test]
    fn empty_state_renders_action_button() {
        let props: EmptyStateProps = PropBag::from(json!({
            "title": "No results found",
            "message": "Try adjusting your search criteria.",
            "action": {"label": "Clear Search", "href": "#"}
        }))
        .decode();
        let html = empty_state(&props).to_string();
        assert!(html.contains("No results found"));
        assert!(html.contains("Clear Search"));
        assert!(html.contains("href=\"#\""));
    }

    #[test]
    fn empty_state_shows_emoji_as_text() {
        let props = EmptyStateProps {
            icon: "🌱".into(),
            ..EmptyStateProps::default()
        };
        assert!(empty_state(&props).to_string().contains("🌱"));
    }

    #[test]
    fn skeleton_count_is_clamped() {
        let props = SkeletonProps {
            count: 500,
            ..SkeletonProps::default()
        };
        let html = skeleton(&props).to_string();
        assert_eq!(html.matches("nexus-skeleton nexus-skeleton--text").count(), 20);
    }

    #[test]
    fn modal_body_is_trusted_html() {
        let props = ModalProps {
            id: "confirm".into(),
            title: "Delete?".into(),
            content: "<p>Gone for good.</p>".into(),
            ..ModalProps::default()
        };
        let html = modal(&props).to_string();
        assert!(html.contains("<p>Gone for good.</p>"));
        assert!(html.contains("aria-labelledby=\"confirm-title\""));
    }
}
