//! Cards.

use serde::Deserialize;

use super::media::{AvatarProps, avatar};
use crate::markup::{Markup, el, icon};
use crate::render::{PropBag, TemplateSet};

/// Props for `cards/card`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardProps {
    /// Header HTML.
    pub header: String,
    /// Body HTML.
    pub body: String,
    /// Footer HTML.
    pub footer: String,
    /// `default`, `glass` or `elevated`.
    pub variant: String,
    pub href: String,
}

impl Default for CardProps {
    fn default() -> Self {
        Self {
            header: String::new(),
            body: String::new(),
            footer: String::new(),
            variant: "glass".into(),
            href: String::new(),
        }
    }
}

pub fn card(props: &CardProps) -> Markup {
    let root = if props.href.is_empty() {
        el("div")
    } else {
        el("a").attr("href", props.href.as_str())
    };

    root.class("nexus-card")
        .class(format!("nexus-card--{}", props.variant))
        .class_if(!props.href.is_empty(), "nexus-card--link")
        .child((!props.header.is_empty()).then(|| {
            Markup::from(el("div").class("nexus-card__header").raw(props.header.as_str()))
        }))
        .child(el("div").class("nexus-card__body").raw(props.body.as_str()))
        .child((!props.footer.is_empty()).then(|| {
            Markup::from(el("div").class("nexus-card__footer").raw(props.footer.as_str()))
        }))
        .into()
}

/// Direction of a trend indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

pub(super) fn trend_indicator(trend: Option<Trend>, value: &str, class: &str) -> Markup {
    let Some(trend) = trend else {
        return Markup::empty();
    };
    let (modifier, icon_name) = match trend {
        Trend::Up => ("up", "arrow-trend-up"),
        Trend::Down => ("down", "arrow-trend-down"),
    };
    el("span")
        .class(class.to_string())
        .class(format!("{class}--{modifier}"))
        .child(icon(icon_name))
        .text(value)
        .into()
}

/// Props for `cards/stat-card`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatCardProps {
    pub label: String,
    pub value: String,
    pub icon: String,
    pub trend: Option<Trend>,
    pub trend_value: String,
}

impl Default for StatCardProps {
    fn default() -> Self {
        Self {
            label: String::new(),
            value: "0".into(),
            icon: String::new(),
            trend: None,
            trend_value: String::new(),
        }
    }
}

pub fn stat_card(props: &StatCardProps) -> Markup {
    el("div")
        .class("nexus-stat-card")
        .child((!props.icon.is_empty()).then(|| {
            Markup::from(el("div").class("nexus-stat-card__icon").child(icon(&props.icon)))
        }))
        .child(
            el("div")
                .class("nexus-stat-card__content")
                .child(el("div").class("nexus-stat-card__value").text(props.value.as_str()))
                .child(el("div").class("nexus-stat-card__label").text(props.label.as_str()))
                .child(trend_indicator(
                    props.trend,
                    &props.trend_value,
                    "nexus-stat-card__trend",
                )),
        )
        .into()
}

/// Opportunity shown by a volunteer card.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OpportunitySummary {
    pub id: i64,
    pub title: String,
    pub organization: String,
    pub location: String,
    pub description: String,
    pub hours_needed: Option<f64>,
    pub is_remote: bool,
    /// Link target; the card is not clickable without one.
    pub url: String,
}

/// Props for `cards/volunteer-card`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VolunteerCardProps {
    pub opportunity: OpportunitySummary,
    pub show_org: bool,
}

impl Default for VolunteerCardProps {
    fn default() -> Self {
        Self {
            opportunity: OpportunitySummary::default(),
            show_org: true,
        }
    }
}

const DESCRIPTION_PREVIEW_CHARS: usize = 120;

fn preview(text: &str) -> String {
    if text.chars().count() <= DESCRIPTION_PREVIEW_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    format!("{}…", cut.trim_end())
}

pub fn volunteer_card(props: &VolunteerCardProps) -> Markup {
    let opp = &props.opportunity;
    let location = if opp.is_remote || opp.location.is_empty() {
        "Remote"
    } else {
        opp.location.as_str()
    };

    let title = if opp.url.is_empty() {
        el("h3").class("nexus-volunteer-card__title").text(opp.title.as_str())
    } else {
        el("h3").class("nexus-volunteer-card__title").child(
            el("a")
                .attr("href", opp.url.as_str())
                .text(opp.title.as_str()),
        )
    };

    let org = (props.show_org && !opp.organization.is_empty()).then(|| {
        Markup::from(
            el("p")
                .class("nexus-volunteer-card__org")
                .child(icon("building"))
                .text(opp.organization.as_str()),
        )
    });

    let hours = opp.hours_needed.map(|h| {
        Markup::from(
            el("span")
                .class("nexus-volunteer-card__meta-item")
                .child(icon("clock"))
                .text(format!("{} hours", super::format_number(h))),
        )
    });

    el("article")
        .class("nexus-volunteer-card")
        .attr("data-opportunity-id", opp.id)
        .child(title)
        .child(org)
        .child((!opp.description.is_empty()).then(|| {
            Markup::from(
                el("p")
                    .class("nexus-volunteer-card__description")
                    .text(preview(&opp.description)),
            )
        }))
        .child(
            el("div")
                .class("nexus-volunteer-card__meta")
                .child(
                    el("span")
                        .class("nexus-volunteer-card__meta-item")
                        .child(icon("location-dot"))
                        .text(location),
                )
                .child(hours),
        )
        .into()
}

/// Post shown by the compact post card.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PostSummary {
    pub id: i64,
    pub content: String,
    pub author_name: String,
    pub author_avatar: String,
    pub likes: i64,
    pub comments: i64,
    /// Already formatted for display.
    pub created_at: String,
}

/// Props for `cards/post-card`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostCardProps {
    pub post: PostSummary,
    pub show_actions: bool,
}

impl Default for PostCardProps {
    fn default() -> Self {
        Self {
            post: PostSummary::default(),
            show_actions: true,
        }
    }
}

pub fn post_card(props: &PostCardProps) -> Markup {
    let post = &props.post;
    let author = (!post.author_name.is_empty()).then(|| {
        Markup::from(
            el("div")
                .class("nexus-post-card__author")
                .child(avatar(&AvatarProps {
                    image: post.author_avatar.clone(),
                    name: post.author_name.clone(),
                    size: 32,
                    ..AvatarProps::default()
                }))
                .child(el("strong").text(post.author_name.as_str())),
        )
    });

    let actions = props.show_actions.then(|| {
        Markup::from(
            el("footer")
                .class("nexus-post-card__actions")
                .child(
                    el("span")
                        .class("nexus-post-card__stat")
                        .child(icon("heart"))
                        .text(post.likes.to_string()),
                )
                .child(
                    el("span")
                        .class("nexus-post-card__stat")
                        .child(icon("comment"))
                        .text(post.comments.to_string()),
                ),
        )
    });

    el("article")
        .class("nexus-post-card")
        .attr("data-post-id", post.id)
        .child(author)
        .child(el("p").class("nexus-post-card__content").text(post.content.as_str()))
        .child((!post.created_at.is_empty()).then(|| {
            Markup::from(el("time").class("nexus-post-card__time").text(post.created_at.as_str()))
        }))
        .child(actions)
        .into()
}

pub(super) fn register(set: &mut TemplateSet) {
    set.register("cards/card", |bag: &PropBag| card(&bag.decode()))
        .register("cards/stat-card", |bag: &PropBag| stat_card(&bag.decode()))
        .register("cards/volunteer-card", |bag: &PropBag| volunteer_card(&bag.decode()))
        .register("cards/post-card", |bag: &PropBag| post_card(&bag.decode()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn card_with_href_is_a_link() {
        let props = CardProps {
            body: "Body".into(),
            href: "/x".into(),
            ..CardProps::default()
        };
        let html = card(&props).to_string();
        assert!(html.starts_with("<a class=\"nexus-card nexus-card--glass nexus-card--link\" href=\"/x\">"));
        assert!(!html.contains("nexus-card__header"));
    }

    #[test]
    fn stat_card_shows_trend() {
        let props: StatCardProps = PropBag::from(json!({
            "label": "Total Users", "value": "1,234", "icon": "users",
            "trend": "up", "trendValue": "+12%"
        }))
        .decode();
        let html = stat_card(&props).to_string();
        assert!(html.contains("nexus-stat-card__trend--up"));
        assert!(html.contains("+12%"));
    }

    #[test]
    fn stat_card_without_trend() {
        let html = stat_card(&StatCardProps::default()).to_string();
        assert!(!html.contains("nexus-stat-card__trend"));
        assert!(html.contains(">0<"));
    }

    #[test]
    fn volunteer_card_defaults_location_to_remote() {
        let props: VolunteerCardProps = PropBag::from(json!({
            "opportunity": {"id": 1, "title": "Food Bank Helper", "organization": "Local Charity", "hours_needed": 4}
        }))
        .decode();
        let html = volunteer_card(&props).to_string();
        assert!(html.contains("Remote"));
        assert!(html.contains("Local Charity"));
        assert!(html.contains("4 hours"));
    }

    #[test]
    fn volunteer_card_can_hide_org() {
        let props = VolunteerCardProps {
            opportunity: OpportunitySummary {
                title: "Litter pick".into(),
                organization: "Green Team".into(),
                ..OpportunitySummary::default()
            },
            show_org: false,
        };
        assert!(!volunteer_card(&props).to_string().contains("Green Team"));
    }

    #[test]
    fn long_descriptions_are_shortened() {
        let long = "word ".repeat(60);
        let short = preview(&long);
        assert!(short.ends_with('…'));
        assert!(short.chars().count() <= DESCRIPTION_PREVIEW_CHARS + 1);
    }

    #[test]
    fn post_card_counts() {
        let props: PostCardProps = PropBag::from(json!({
            "post": {"id": 1, "content": "Great community event today!", "likes": 42, "comments": 8}
        }))
        .decode();
        let html = post_card(&props).to_string();
        assert!(html.contains("42"));
        assert!(html.contains("Great community event today!"));
        assert!(html.contains("nexus-post-card__actions"));
    }
}
