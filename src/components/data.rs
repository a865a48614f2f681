//! Data display components.

use serde::Deserialize;
use serde_json::Value;

use super::cards::{Trend, trend_indicator};
use super::media::{AvatarProps, avatar};
use super::{Size, format_number, value_text};
use crate::markup::{Markup, el, icon};
use crate::render::{PropBag, TemplateSet};

/// Props for `data/progress-bar`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressBarProps {
    /// Clamped to 0..=100.
    pub percent: f64,
    pub label: String,
    pub show_percent: bool,
    /// `primary`, `success`, `warning` or `danger`.
    pub color: String,
    pub size: Size,
    pub striped: bool,
    pub animated: bool,
}

impl Default for ProgressBarProps {
    fn default() -> Self {
        Self {
            percent: 0.0,
            label: String::new(),
            show_percent: true,
            color: "primary".into(),
            size: Size::Md,
            striped: false,
            animated: false,
        }
    }
}

/// Clamp a percentage into 0..=100; NaN reads as 0.
#[must_use]
pub fn clamp_percent(percent: f64) -> f64 {
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}

pub fn progress_bar(props: &ProgressBarProps) -> Markup {
    let percent = clamp_percent(props.percent);
    let shown = format!("{}%", format_number(percent.round()));

    let header = (!props.label.is_empty() || props.show_percent).then(|| {
        Markup::from(
            el("div")
                .class("nexus-progress__header")
                .child(
                    (!props.label.is_empty())
                        .then(|| Markup::from(el("span").class("nexus-progress__label").text(props.label.as_str()))),
                )
                .child(
                    props
                        .show_percent
                        .then(|| Markup::from(el("span").class("nexus-progress__value").text(shown.clone()))),
                ),
        )
    });

    el("div")
        .class("nexus-progress")
        .class(format!("nexus-progress--{}", props.size.as_str()))
        .child(header)
        .child(
            el("div")
                .class("nexus-progress__track")
                .attr("role", "progressbar")
                .attr("aria-valuenow", format_number(percent))
                .attr("aria-valuemin", "0")
                .attr("aria-valuemax", "100")
                .attr_nonempty("aria-label", &props.label)
                .child(
                    el("div")
                        .class("nexus-progress__fill")
                        .class(format!("nexus-progress__fill--{}", props.color))
                        .class_if(props.striped, "nexus-progress__fill--striped")
                        .class_if(props.striped && props.animated, "nexus-progress__fill--animated")
                        .attr("style", format!("width: {}%", format_number(percent))),
                ),
        )
        .into()
}

/// Props for `data/stat`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatProps {
    pub value: String,
    pub label: String,
    pub icon: String,
    pub trend: Option<Trend>,
    pub trend_value: String,
}

impl Default for StatProps {
    fn default() -> Self {
        Self {
            value: "0".into(),
            label: String::new(),
            icon: String::new(),
            trend: None,
            trend_value: String::new(),
        }
    }
}

pub fn stat(props: &StatProps) -> Markup {
    el("div")
        .class("nexus-stat")
        .child(
            el("div")
                .class("nexus-stat__value")
                .child(icon(&props.icon))
                .text(props.value.as_str()),
        )
        .child(el("div").class("nexus-stat__label").text(props.label.as_str()))
        .child(trend_indicator(props.trend, &props.trend_value, "nexus-stat__trend"))
        .into()
}

/// One leaderboard row.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Ranked {
    pub id: i64,
    pub name: String,
    pub avatar: String,
    pub score: f64,
}

/// Props for `data/leaderboard`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LeaderboardProps {
    pub users: Vec<Ranked>,
    /// Unit shown after each score.
    pub metric: String,
    pub highlight_user_id: Option<i64>,
    pub limit: usize,
}

impl Default for LeaderboardProps {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            metric: "points".into(),
            highlight_user_id: None,
            limit: 10,
        }
    }
}

pub fn leaderboard(props: &LeaderboardProps) -> Markup {
    let rows = props.users.iter().take(props.limit).enumerate().map(|(i, user)| {
        let rank = i + 1;
        let medal = match rank {
            1 => "gold",
            2 => "silver",
            3 => "bronze",
            _ => "",
        };
        el("li")
            .class("nexus-leaderboard__row")
            .class_if(
                props.highlight_user_id == Some(user.id),
                "nexus-leaderboard__row--highlight",
            )
            .child(
                el("span")
                    .class("nexus-leaderboard__rank")
                    .class_if(!medal.is_empty(), format!("nexus-leaderboard__rank--{medal}"))
                    .text(rank.to_string()),
            )
            .child(avatar(&AvatarProps {
                image: user.avatar.clone(),
                name: user.name.clone(),
                size: 32,
                ..AvatarProps::default()
            }))
            .child(el("span").class("nexus-leaderboard__name").text(user.name.as_str()))
            .child(
                el("span")
                    .class("nexus-leaderboard__score")
                    .text(format!("{} {}", format_number(user.score), props.metric)),
            )
    });

    el("ol")
        .class("nexus-leaderboard")
        .children(rows)
        .into()
}

/// A column header: a bare label or a `{key, label}` pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Header {
    Label(String),
    Keyed { key: String, label: String },
}

impl Header {
    fn label(&self) -> &str {
        match self {
            Self::Label(label) | Self::Keyed { label, .. } => label,
        }
    }
}

/// Props for `data/table`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableProps {
    pub headers: Vec<Header>,
    /// Each row is a list of cells or an object keyed by header key.
    pub rows: Vec<Value>,
    /// `default`, `striped` or `bordered`.
    pub variant: String,
    pub hoverable: bool,
    pub compact: bool,
}

impl Default for TableProps {
    fn default() -> Self {
        Self {
            headers: Vec::new(),
            rows: Vec::new(),
            variant: "default".into(),
            hoverable: true,
            compact: false,
        }
    }
}

fn row_cells(headers: &[Header], row: &Value) -> Vec<String> {
    match row {
        Value::Array(cells) => cells.iter().map(value_text).collect(),
        Value::Object(fields) => {
            if headers.iter().any(|h| matches!(h, Header::Keyed { .. })) {
                headers
                    .iter()
                    .map(|h| match h {
                        Header::Keyed { key, .. } => fields.get(key).map(value_text).unwrap_or_default(),
                        Header::Label(_) => String::new(),
                    })
                    .collect()
            } else {
                fields.values().map(value_text).collect()
            }
        }
        other => vec![value_text(other)],
    }
}

pub fn table(props: &TableProps) -> Markup {
    let head = (!props.headers.is_empty()).then(|| {
        Markup::from(
            el("thead").child(
                el("tr").children(
                    props
                        .headers
                        .iter()
                        .map(|h| el("th").attr("scope", "col").text(h.label())),
                ),
            ),
        )
    });

    el("div")
        .class("nexus-table-wrap")
        .child(
            el("table")
                .class("nexus-table")
                .class(format!("nexus-table--{}", props.variant))
                .class_if(props.hoverable, "nexus-table--hover")
                .class_if(props.compact, "nexus-table--compact")
                .child(head)
                .child(el("tbody").children(props.rows.iter().map(|row| {
                    el("tr").children(
                        row_cells(&props.headers, row)
                            .into_iter()
                            .map(|cell| el("td").text(cell)),
                    )
                }))),
        )
        .into()
}

/// One list entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListItem {
    pub label: String,
    pub description: String,
    pub icon: String,
    pub href: String,
    pub meta: String,
}

/// Props for `data/list`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListProps {
    pub items: Vec<ListItem>,
    /// `default`, `divided` or `compact`.
    pub variant: String,
    pub hoverable: bool,
}

impl Default for ListProps {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            variant: "default".into(),
            hoverable: true,
        }
    }
}

pub fn list(props: &ListProps) -> Markup {
    el("ul")
        .class("nexus-list")
        .class(format!("nexus-list--{}", props.variant))
        .class_if(props.hoverable, "nexus-list--hover")
        .children(props.items.iter().map(|item| {
            let text = el("span")
                .class("nexus-list__text")
                .child(el("span").class("nexus-list__label").text(item.label.as_str()))
                .child((!item.description.is_empty()).then(|| {
                    Markup::from(
                        el("small")
                            .class("nexus-list__description")
                            .text(item.description.as_str()),
                    )
                }));
            let body = if item.href.is_empty() {
                el("div").class("nexus-list__body")
            } else {
                el("a").class("nexus-list__body").attr("href", item.href.as_str())
            };
            el("li").class("nexus-list__item").child(
                body.child(icon(&item.icon))
                    .child(text)
                    .child((!item.meta.is_empty()).then(|| {
                        Markup::from(el("span").class("nexus-list__meta").text(item.meta.as_str()))
                    })),
            )
        }))
        .into()
}

/// Props for `data/timeline-item`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimelineItemProps {
    pub icon: String,
    pub title: String,
    pub content: String,
    pub time: String,
    /// `default`, `success` or `warning`.
    pub variant: String,
}

impl Default for TimelineItemProps {
    fn default() -> Self {
        Self {
            icon: String::new(),
            title: String::new(),
            content: String::new(),
            time: String::new(),
            variant: "default".into(),
        }
    }
}

pub fn timeline_item(props: &TimelineItemProps) -> Markup {
    el("div")
        .class("nexus-timeline-item")
        .class(format!("nexus-timeline-item--{}", props.variant))
        .child(
            el("span")
                .class("nexus-timeline-item__marker")
                .child(icon(if props.icon.is_empty() { "circle" } else { props.icon.as_str() })),
        )
        .child(
            el("div")
                .class("nexus-timeline-item__body")
                .child(el("strong").class("nexus-timeline-item__title").text(props.title.as_str()))
                .child((!props.content.is_empty()).then(|| {
                    Markup::from(el("p").class("nexus-timeline-item__content").text(props.content.as_str()))
                }))
                .child((!props.time.is_empty()).then(|| {
                    Markup::from(el("time").class("nexus-timeline-item__time").text(props.time.as_str()))
                })),
        )
        .into()
}

pub(super) fn register(set: &mut TemplateSet) {
    set.register("data/progress-bar", |bag: &PropBag| progress_bar(&bag.decode()))
        .register("data/stat", |bag: &PropBag| stat(&bag.decode()))
        .register("data/leaderboard", |bag: &PropBag| leaderboard(&bag.decode()))
        .register("data/table", |bag: &PropBag| table(&bag.decode()))
        .register("data/list", |bag: &PropBag| list(&bag.decode()))
        .register("data/timeline-item", |bag: &PropBag| timeline_item(&bag.decode()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn progress_is_clamped() {
        assert_eq!(clamp_percent(150.0), 100.0);
        assert_eq!(clamp_percent(-3.0), 0.0);
        assert_eq!(clamp_percent(f64::NAN), 0.0);

        let props = ProgressBarProps {
            percent: 150.0,
            ..ProgressBarProps::default()
        };
        let html = progress_bar(&props).to_string();
        assert!(html.contains("width: 100%"));
        assert!(html.contains(">100%</span>"));
    }

    #[test]
    fn progress_accepts_integer_percent() {
        let props: ProgressBarProps =
            PropBag::from(json!({"percent": 65, "label": "Progress"})).decode();
        let html = progress_bar(&props).to_string();
        assert!(html.contains("aria-valuenow=\"65\""));
        assert!(html.contains("Progress"));
    }

    #[test]
    fn table_maps_object_rows_by_header_key() {
        let props: TableProps = PropBag::from(json!({
            "headers": [
                {"key": "name", "label": "Name"},
                {"key": "role", "label": "Role"}
            ],
            "rows": [
                {"role": "Admin", "name": "John", "email": "john@example.com"}
            ],
            "variant": "striped"
        }))
        .decode();
        let html = table(&props).to_string();
        assert!(html.contains("<th scope=\"col\">Name</th><th scope=\"col\">Role</th>"));
        assert!(html.contains("<tr><td>John</td><td>Admin</td></tr>"));
        assert!(!html.contains("john@example.com"));
    }

    #[test]
    fn table_accepts_plain_headers_and_array_rows() {
        let props: TableProps = PropBag::from(json!({
            "headers": ["Shift", "Spots"],
            "rows": [["Morning", 4], ["Evening", null]]
        }))
        .decode();
        let html = table(&props).to_string();
        assert!(html.contains("<td>Morning</td><td>4</td>"));
        assert!(html.contains("<td>Evening</td><td></td>"));
    }

    #[test]
    fn leaderboard_respects_limit_and_highlight() {
        let props: LeaderboardProps = PropBag::from(json!({
            "users": [
                {"id": 1, "name": "Ana", "score": 980},
                {"id": 2, "name": "Ben", "score": 870},
                {"id": 3, "name": "Cy", "score": 600}
            ],
            "limit": 2,
            "highlightUserId": 2
        }))
        .decode();
        let html = leaderboard(&props).to_string();
        assert!(!html.contains("Cy"));
        assert!(html.contains("nexus-leaderboard__row--highlight"));
        assert!(html.contains("980 points"));
        assert!(html.contains("nexus-leaderboard__rank--gold"));
    }

    #[test]
    fn timeline_item_defaults_marker_icon() {
        let html = timeline_item(&TimelineItemProps {
            title: "Task completed".into(),
            variant: "success".into(),
            ..TimelineItemProps::default()
        })
        .to_string();
        assert!(html.contains("fa-circle"));
        assert!(html.contains("nexus-timeline-item--success"));
    }
}
