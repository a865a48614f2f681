//! Social components.

use serde::Deserialize;

use crate::markup::{Markup, el, icon};
use crate::render::{PropBag, TemplateSet};

/// A notification row as stored by the notifications feed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Notification {
    pub id: i64,
    /// `like`, `comment`, `follow`, `message`, `event`, `badge`, ...
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    /// Already formatted for display.
    pub time: String,
    pub read: bool,
    pub link: String,
}

/// Props for `social/notification-item`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationItemProps {
    pub notification: Notification,
    pub unread: bool,
}

fn notification_icon(kind: &str) -> &'static str {
    match kind {
        "like" => "heart",
        "comment" => "comment",
        "follow" | "connection" => "user-plus",
        "message" => "envelope",
        "event" => "calendar",
        "badge" | "achievement" => "award",
        "volunteer" | "volunteering" => "hand-holding-heart",
        _ => "bell",
    }
}

pub fn notification_item(props: &NotificationItemProps) -> Markup {
    let n = &props.notification;
    let unread = props.unread || !n.read;
    let kind = if n.kind.is_empty() { "general" } else { n.kind.as_str() };

    let body = el("div")
        .class("nexus-notification__body")
        .child(el("p").class("nexus-notification__message").text(n.message.as_str()))
        .child((!n.time.is_empty()).then(|| {
            Markup::from(el("time").class("nexus-notification__time").text(n.time.as_str()))
        }));
    let body = if n.link.is_empty() {
        Markup::from(body)
    } else {
        el("a")
            .class("nexus-notification__link")
            .attr("href", n.link.as_str())
            .child(body)
            .into()
    };

    el("div")
        .class("nexus-notification")
        .class(format!("nexus-notification--{kind}"))
        .class_if(unread, "nexus-notification--unread")
        .attr("data-notification-id", (n.id > 0).then_some(n.id))
        .child(
            el("span")
                .class("nexus-notification__icon")
                .child(icon(notification_icon(&n.kind))),
        )
        .child(body)
        .child(unread.then(|| {
            Markup::from(
                el("span")
                    .class("nexus-notification__dot")
                    .attr("aria-label", "Unread"),
            )
        }))
        .into()
}

pub(super) fn register(set: &mut TemplateSet) {
    set.register("social/notification-item", |bag: &PropBag| {
        notification_item(&bag.decode())
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unread_like_notification() {
        let props: NotificationItemProps = PropBag::from(json!({
            "notification": {"type": "like", "message": "John liked your post", "time": "5 min ago", "read": false},
            "unread": true
        }))
        .decode();
        let html = notification_item(&props).to_string();
        assert!(html.contains("fa-heart"));
        assert!(html.contains("nexus-notification--unread"));
        assert!(html.contains("John liked your post"));
    }

    #[test]
    fn read_notification_with_link() {
        let props = NotificationItemProps {
            notification: Notification {
                id: 7,
                kind: "message".into(),
                message: "New message".into(),
                read: true,
                link: "/messages/7".into(),
                ..Notification::default()
            },
            unread: false,
        };
        let html = notification_item(&props).to_string();
        assert!(!html.contains("nexus-notification--unread"));
        assert!(html.contains("href=\"/messages/7\""));
        assert!(html.contains("data-notification-id=\"7\""));
    }
}
