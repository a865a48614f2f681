//! Navigation components.

use std::ops::RangeInclusive;

use serde::Deserialize;

use super::Size;
use crate::markup::{Markup, el, icon};
use crate::render::{PropBag, TemplateSet};

/// One breadcrumb step; the step without `href` is the current page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Crumb {
    pub label: String,
    pub href: String,
}

/// Props for `navigation/breadcrumb`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BreadcrumbProps {
    pub items: Vec<Crumb>,
    pub separator: String,
    pub class: String,
}

impl Default for BreadcrumbProps {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            separator: "/".into(),
            class: String::new(),
        }
    }
}

pub fn breadcrumb(props: &BreadcrumbProps) -> Markup {
    let last = props.items.len().saturating_sub(1);
    let items = props.items.iter().enumerate().map(|(i, item)| {
        let current = i == last || item.href.is_empty();
        let label = if current {
            el("span")
                .class("nexus-breadcrumb__current")
                .attr("aria-current", "page")
                .text(item.label.as_str())
        } else {
            el("a")
                .class("nexus-breadcrumb__link")
                .attr("href", item.href.as_str())
                .text(item.label.as_str())
        };
        let separator = (i < last).then(|| {
            Markup::from(
                el("span")
                    .class("nexus-breadcrumb__separator")
                    .attr("aria-hidden", "true")
                    .text(props.separator.as_str()),
            )
        });
        el("li")
            .class("nexus-breadcrumb__item")
            .child(label)
            .child(separator)
    });

    el("nav")
        .class("nexus-breadcrumb")
        .class(props.class.as_str())
        .attr("aria-label", "Breadcrumb")
        .child(el("ol").class("nexus-breadcrumb__list").children(items))
        .into()
}

/// A tab, pill or filter entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub count: Option<i64>,
    pub href: String,
}

impl NavItem {
    fn count_badge(&self, class: &'static str) -> Markup {
        self.count
            .map(|n| Markup::from(el("span").class(class).text(n.to_string())))
            .into()
    }
}

/// Props for `navigation/tabs`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TabsProps {
    pub tabs: Vec<NavItem>,
    /// Defaults to the first tab.
    pub active_tab: String,
    /// `default`, `pills` or `underline`.
    pub variant: String,
}

impl Default for TabsProps {
    fn default() -> Self {
        Self {
            tabs: Vec::new(),
            active_tab: String::new(),
            variant: "default".into(),
        }
    }
}

pub fn tabs(props: &TabsProps) -> Markup {
    let active = if props.active_tab.is_empty() {
        props.tabs.first().map_or("", |t| t.id.as_str())
    } else {
        props.active_tab.as_str()
    };

    el("div")
        .class("nexus-tabs")
        .class(format!("nexus-tabs--{}", props.variant))
        .attr("role", "tablist")
        .children(props.tabs.iter().map(|tab| {
            let selected = tab.id == active;
            el("button")
                .attr("type", "button")
                .class("nexus-tabs__tab")
                .class_if(selected, "nexus-tabs__tab--active")
                .attr("role", "tab")
                .attr("aria-selected", if selected { "true" } else { "false" })
                .attr("data-tab", tab.id.as_str())
                .child(icon(&tab.icon))
                .child(el("span").text(tab.label.as_str()))
                .child(tab.count_badge("nexus-tabs__count"))
        }))
        .into()
}

/// Props for `navigation/pills`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PillsProps {
    pub items: Vec<NavItem>,
    pub active: String,
    pub size: Size,
}

pub fn pills(props: &PillsProps) -> Markup {
    el("div")
        .class("nexus-pills")
        .class(format!("nexus-pills--{}", props.size.as_str()))
        .children(props.items.iter().map(|item| {
            let base = if item.href.is_empty() {
                el("button").attr("type", "button")
            } else {
                el("a").attr("href", item.href.as_str())
            };
            base.class("nexus-pill")
                .class_if(item.id == props.active, "nexus-pill--active")
                .attr("data-pill", item.id.as_str())
                .child(icon(&item.icon))
                .text(item.label.as_str())
        }))
        .into()
}

/// Props for `navigation/pagination`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaginationProps {
    pub current_page: i64,
    pub total_pages: i64,
    /// Prefix the page number is appended to.
    pub base_url: String,
    pub max_visible: i64,
}

impl Default for PaginationProps {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            base_url: "?page=".into(),
            max_visible: 5,
        }
    }
}

/// Pages shown around `current`: at most `max_visible`, centred when possible.
#[must_use]
pub fn page_window(current: i64, total: i64, max_visible: i64) -> RangeInclusive<i64> {
    let total = total.max(1);
    let current = current.clamp(1, total);
    let visible = max_visible.clamp(1, total);

    let mut start = current - visible / 2;
    start = start.clamp(1, total - visible + 1);
    start..=start + visible - 1
}

pub fn pagination(props: &PaginationProps) -> Markup {
    if props.total_pages <= 1 {
        return Markup::empty();
    }
    let total = props.total_pages;
    let current = props.current_page.clamp(1, total);
    let href = |page: i64| format!("{}{page}", props.base_url);

    let edge = |page: i64, label: &'static str, icon_name: &str, enabled: bool| {
        if enabled {
            el("a")
                .class("nexus-pagination__edge")
                .attr("href", href(page))
                .attr("aria-label", label)
                .child(icon(icon_name))
        } else {
            el("span")
                .class("nexus-pagination__edge")
                .class("nexus-pagination__edge--disabled")
                .attr("aria-hidden", "true")
                .child(icon(icon_name))
        }
    };

    let pages = page_window(current, total, props.max_visible).map(|page| {
        if page == current {
            el("span")
                .class("nexus-pagination__page")
                .class("nexus-pagination__page--active")
                .attr("aria-current", "page")
                .text(page.to_string())
        } else {
            el("a")
                .class("nexus-pagination__page")
                .attr("href", href(page))
                .text(page.to_string())
        }
    });

    el("nav")
        .class("nexus-pagination")
        .attr("aria-label", "Pagination")
        .child(edge(current - 1, "Previous page", "chevron-left", current > 1))
        .children(pages)
        .child(edge(current + 1, "Next page", "chevron-right", current < total))
        .into()
}

/// Props for `navigation/filter-bar`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterBarProps {
    pub filters: Vec<NavItem>,
    pub active: String,
    pub show_search: bool,
}

pub fn filter_bar(props: &FilterBarProps) -> Markup {
    let search = props.show_search.then(|| {
        super::forms::search_input(&super::forms::SearchInputProps {
            auto_submit: false,
            ..super::forms::SearchInputProps::default()
        })
    });

    el("div")
        .class("nexus-filter-bar")
        .child(
            el("div")
                .class("nexus-filter-bar__filters")
                .children(props.filters.iter().map(|filter| {
                    el("button")
                        .attr("type", "button")
                        .class("nexus-filter-bar__filter")
                        .class_if(filter.id == props.active, "nexus-filter-bar__filter--active")
                        .attr("data-filter", filter.id.as_str())
                        .child(icon(&filter.icon))
                        .child(el("span").text(filter.label.as_str()))
                        .child(filter.count_badge("nexus-filter-bar__count"))
                })),
        )
        .child(search)
        .into()
}

pub(super) fn register(set: &mut TemplateSet) {
    set.register("navigation/breadcrumb", |bag: &PropBag| breadcrumb(&bag.decode()))
        .register("navigation/tabs", |bag: &PropBag| tabs(&bag.decode()))
        .register("navigation/pills", |bag: &PropBag| pills(&bag.decode()))
        .register("navigation/pagination", |bag: &PropBag| pagination(&bag.decode()))
        .register("navigation/filter-bar", |bag: &PropBag| filter_bar(&bag.decode()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn window_is_centred_on_current_page() {
        assert_eq!(page_window(3, 10, 5), 1..=5);
        assert_eq!(page_window(6, 10, 5), 4..=8);
        assert_eq!(page_window(10, 10, 5), 6..=10);
        assert_eq!(page_window(2, 3, 5), 1..=3);
    }

    #[test]
    fn window_tolerates_bad_input() {
        assert_eq!(page_window(-4, 10, 5), 1..=5);
        assert_eq!(page_window(99, 10, 0), 10..=10);
        assert_eq!(page_window(1, 0, 5), 1..=1);
    }

    #[test]
    fn pagination_shows_at_most_max_visible_pages() {
        let props: PaginationProps = PropBag::from(json!({
            "currentPage": 3, "totalPages": 10, "baseUrl": "#page=", "maxVisible": 5
        }))
        .decode();
        let html = pagination(&props).to_string();
        assert_eq!(html.matches("nexus-pagination__page").count(), 5 + 1);
        assert!(html.contains("aria-current=\"page\">3</span>"));
        assert!(html.contains("href=\"#page=2\""));
    }

    #[test]
    fn single_page_renders_nothing() {
        assert!(pagination(&PaginationProps::default()).is_empty());
    }

    #[test]
    fn breadcrumb_marks_last_item_current() {
        let props: BreadcrumbProps = PropBag::from(json!({
            "items": [
                {"label": "Home", "href": "/"},
                {"label": "Volunteering", "href": "/volunteering"},
                {"label": "Beach Cleanup"}
            ]
        }))
        .decode();
        let html = breadcrumb(&props).to_string();
        assert!(html.contains("aria-current=\"page\">Beach Cleanup</span>"));
        assert_eq!(html.matches("nexus-breadcrumb__separator").count(), 2);
    }

    #[test]
    fn tabs_default_to_first_tab() {
        let props: TabsProps = PropBag::from(json!({
            "tabs": [{"id": "a", "label": "A"}, {"id": "b", "label": "B", "count": 4}]
        }))
        .decode();
        let html = tabs(&props).to_string();
        assert_eq!(html.matches("nexus-tabs__tab--active").count(), 1);
        assert!(html.contains(
            "<button class=\"nexus-tabs__tab nexus-tabs__tab--active\" type=\"button\" \
             role=\"tab\" aria-selected=\"true\" data-tab=\"a\">"
        ));
        assert!(html.contains("<span class=\"nexus-tabs__count\">4</span>"));
    }

    #[test]
    fn filter_bar_marks_active_filter() {
        let props = FilterBarProps {
            filters: vec![
                NavItem {
                    id: "all".into(),
                    label: "All".into(),
                    count: Some(42),
                    ..NavItem::default()
                },
                NavItem {
                    id: "offers".into(),
                    label: "Offers".into(),
                    ..NavItem::default()
                },
            ],
            active: "offers".into(),
            show_search: true,
        };
        let html = filter_bar(&props).to_string();
        assert_eq!(html.matches("nexus-filter-bar__filter--active").count(), 1);
        assert!(html.contains("nexus-search-input"));
    }
}
