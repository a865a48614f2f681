//! Component documentation browser at `/components`.
//!
//! The page is recomputed from the query on every request: a welcome
//! overview, one component's detail view, or a not-found notice.

use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use super::samples::sample_props;
use crate::AppState;
use crate::components::buttons::ButtonVariant;
use crate::components::cards::{StatCardProps, stat_card};
use crate::components::feedback::AlertType;
use crate::components::media::{BadgeVariant, CodeBlockProps, code_block};
use crate::components::ucfirst;
use crate::markup::{Element, Markup, el, icon};
use crate::pages::shell::PageShell;
use crate::registry::{CategoryDescriptor, ComponentDescriptor, Registry};
use crate::render::{PropBag, Renderer};

const NOT_FOUND_MESSAGE: &str = "Component not found. Please select a component from the sidebar.";
const AVATAR_SIZES: [u32; 5] = [24, 32, 40, 48, 64];

const QUICK_START: &str = r#"use nexus_ui::render::{PropBag, Renderer, TemplateSet};

let renderer = Renderer::new(TemplateSet::builtin());
let props = PropBag::new()
    .with("label", "Join the project")
    .with("variant", "primary")
    .with("icon", "arrow-right");

let html = renderer.render_component("buttons/button", &props)?;"#;

pub const STORYBOOK_CSS: &str = r"
:root { --sb-sidebar: 280px; --sb-accent: #4f46e5; --sb-border: #e5e7eb; --sb-muted: #6b7280; }
body.storybook-body { margin: 0; font-family: system-ui, -apple-system, 'Segoe UI', sans-serif; background: #f9fafb; color: #111827; }
.storybook { display: flex; min-height: 100vh; }
.storybook__sidebar { width: var(--sb-sidebar); flex-shrink: 0; background: #fff; border-right: 1px solid var(--sb-border);
    position: sticky; top: 0; height: 100vh; overflow-y: auto; }
.storybook__logo { padding: 20px; border-bottom: 1px solid var(--sb-border); }
.storybook__logo h1 { font-size: 1.1rem; margin: 0; display: flex; gap: 8px; align-items: center; }
.storybook__logo span { font-size: .75rem; color: var(--sb-muted); }
.storybook__search { padding: 12px 20px; }
.storybook__search input { width: 100%; box-sizing: border-box; padding: 8px 12px; border: 1px solid var(--sb-border); border-radius: 8px; }
.storybook__welcome-link, .storybook__component-item { display: flex; align-items: center; gap: 8px; padding: 6px 20px;
    color: inherit; text-decoration: none; font-size: .9rem; }
.storybook__welcome-link--active, .storybook__component-item--active { background: #eef2ff; color: var(--sb-accent); font-weight: 600; }
.storybook__category-toggle { width: 100%; display: flex; align-items: center; gap: 8px; padding: 10px 20px; border: 0;
    background: none; font-weight: 600; cursor: pointer; text-align: left; }
.storybook__category-count { margin-left: auto; font-size: .75rem; color: var(--sb-muted); }
.storybook__category--collapsed .storybook__component-list { display: none; }
.storybook__component-list { list-style: none; margin: 0; padding: 0; }
.storybook__component-item .nexus-badge { margin-left: auto; }
.storybook__main { flex: 1; padding: 32px 48px; max-width: 1100px; }
.storybook__breadcrumb { font-size: .85rem; color: var(--sb-muted); margin-bottom: 16px; }
.storybook__breadcrumb a { color: var(--sb-accent); text-decoration: none; }
.storybook__header h1 { margin: 0 0 8px; }
.storybook__path { font-family: ui-monospace, monospace; font-size: .8rem; background: #f3f4f6; padding: 2px 6px; border-radius: 4px; }
.storybook__canvas, .storybook__section { background: #fff; border: 1px solid var(--sb-border); border-radius: 12px; margin-top: 24px; }
.storybook__section { padding: 20px 24px; }
.storybook__tabs { display: flex; border-bottom: 1px solid var(--sb-border); }
.storybook__tab { padding: 12px 20px; border: 0; background: none; cursor: pointer; color: var(--sb-muted); }
.storybook__tab--active { color: var(--sb-accent); border-bottom: 2px solid var(--sb-accent); }
.storybook__panel { padding: 32px; }
.preview-section__placeholder { padding: 24px; text-align: center; color: #b91c1c; background: #fef2f2; border-radius: 8px; }
.storybook__props { width: 100%; border-collapse: collapse; font-size: .9rem; }
.storybook__props th, .storybook__props td { text-align: left; padding: 8px; border-bottom: 1px solid var(--sb-border); }
.storybook__usage-tag { display: inline-block; margin: 0 6px 6px 0; padding: 2px 10px; border-radius: 999px; background: #eef2ff; color: var(--sb-accent); font-size: .8rem; }
.storybook__variants { display: flex; flex-wrap: wrap; gap: 24px; align-items: flex-end; }
.storybook__variant { display: flex; flex-direction: column; align-items: center; gap: 8px; }
.storybook__variants--stacked { flex-direction: column; align-items: stretch; }
.storybook__variant-label { font-size: .75rem; color: var(--sb-muted); }
.storybook__stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 16px; margin: 24px 0; }
.storybook__category-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 16px; }
.storybook__category-card { display: block; padding: 20px; background: #fff; border: 1px solid var(--sb-border); border-radius: 12px; color: inherit; text-decoration: none; }
.storybook__category-card:hover { border-color: var(--sb-accent); }
.storybook__not-found { padding: 48px; text-align: center; color: var(--sb-muted); }";

pub const STORYBOOK_SCRIPT: &str = r"
function toggleCategory(button) {
    const category = button.closest('.storybook__category');
    const collapsed = category.classList.toggle('storybook__category--collapsed');
    button.setAttribute('aria-expanded', collapsed ? 'false' : 'true');
}

function showTab(name, button) {
    document.querySelectorAll('.storybook__tab').forEach(function (tab) {
        tab.classList.toggle('storybook__tab--active', tab === button);
        tab.setAttribute('aria-selected', tab === button ? 'true' : 'false');
    });
    document.querySelectorAll('.storybook__panel').forEach(function (panel) {
        panel.hidden = panel.id !== 'panel-' + name;
    });
}

function filterComponents(term) {
    const needle = term.trim().toLowerCase();
    document.querySelectorAll('.storybook__category').forEach(function (category) {
        let visible = 0;
        category.querySelectorAll('.storybook__component-item').forEach(function (item) {
            const match = !needle || item.dataset.name.indexOf(needle) !== -1;
            item.parentElement.hidden = !match;
            if (match) { visible++; }
        });
        category.hidden = visible === 0;
        if (needle && visible > 0) { category.classList.remove('storybook__category--collapsed'); }
    });
}";

/// Query parameters of the documentation page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocsQuery {
    pub category: Option<String>,
    pub component: Option<String>,
}

/// What the documentation page shows for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocsState {
    Welcome,
    Detail {
        category: &'static CategoryDescriptor,
        component: &'static ComponentDescriptor,
    },
    NotFound,
}

impl DocsState {
    /// Welcome unless both a category and a component are named; then the
    /// matching entry, or `NotFound`.
    #[must_use]
    pub fn resolve(registry: &Registry, query: &DocsQuery) -> Self {
        let param = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_owned)
        };

        match (param(&query.category), param(&query.component)) {
            (None, _) | (_, None) => Self::Welcome,
            (Some(category), _) if category == "welcome" => Self::Welcome,
            (Some(category_id), Some(component_id)) => registry
                .category(&category_id)
                .and_then(|category| {
                    category
                        .component(&component_id)
                        .map(|component| Self::Detail {
                            category,
                            component,
                        })
                })
                .unwrap_or(Self::NotFound),
        }
    }
}

pub async fn docs_page(
    State(state): State<AppState>,
    Query(query): Query<DocsQuery>,
) -> Html<String> {
    Html(render_docs(state.registry, &state.renderer, &query))
}

/// The full documentation page for a query.
#[must_use]
pub fn render_docs(registry: &Registry, renderer: &Renderer, query: &DocsQuery) -> String {
    let docs = DocsState::resolve(registry, query);

    let (title, main) = match docs {
        DocsState::Welcome => ("Component Library".to_string(), welcome(registry)),
        DocsState::Detail {
            category,
            component,
        } => (
            format!("{} - Component Library", component.name),
            detail(renderer, category, component),
        ),
        DocsState::NotFound => {
            tracing::info!(
                name: "storybook.not_found",
                category = query.category.as_deref().unwrap_or_default(),
                component = query.component.as_deref().unwrap_or_default(),
                "Unknown component requested"
            );
            ("Component not found".to_string(), not_found())
        }
    };

    let body = el("div")
        .class("storybook")
        .child(sidebar(registry, docs))
        .child(el("main").class("storybook__main").child(main));

    PageShell::new(title)
        .body_class("storybook-body")
        .style(STORYBOOK_CSS)
        .script(STORYBOOK_SCRIPT)
        .render(body)
}

fn component_href(category: &CategoryDescriptor, component: &ComponentDescriptor) -> String {
    format!("?category={}&component={}", category.id, component.id)
}

// =============================================================================
// Sidebar
// =============================================================================

fn sidebar(registry: &Registry, docs: DocsState) -> Markup {
    let active = match docs {
        DocsState::Detail {
            category,
            component,
        } => Some((category.id, component.id)),
        _ => None,
    };

    let categories = registry.categories().iter().map(|category| {
        let items = category.components.iter().map(|component| {
            let is_active = active == Some((category.id, component.id));
            el("li").child(
                el("a")
                    .class("storybook__component-item")
                    .class_if(is_active, "storybook__component-item--active")
                    .attr("href", component_href(category, component))
                    .attr("data-name", component.name.to_lowercase())
                    .attr("aria-current", is_active.then_some("page"))
                    .child(el("span").text(component.name))
                    .child(sidebar_badge(component)),
            )
        });

        el("div")
            .class("storybook__category")
            .attr("data-category", category.id)
            .child(
                el("button")
                    .attr("type", "button")
                    .class("storybook__category-toggle")
                    .attr("onclick", "toggleCategory(this)")
                    .attr("aria-expanded", "true")
                    .child(icon(category.icon))
                    .child(el("span").text(category.label))
                    .child(
                        el("span")
                            .class("storybook__category-count")
                            .text(category.components.len().to_string()),
                    ),
            )
            .child(el("ul").class("storybook__component-list").children(items))
    });

    el("aside")
        .class("storybook__sidebar")
        .attr("aria-label", "Components")
        .child(
            el("div")
                .class("storybook__logo")
                .child(el("h1").child(icon("cubes")).text("Component Library"))
                .child(el("span").text("v1.0.0 - Modern Theme")),
        )
        .child(
            el("div").class("storybook__search").child(
                el("input")
                    .attr("type", "search")
                    .attr("id", "componentSearch")
                    .attr("placeholder", "Search components...")
                    .attr("aria-label", "Search components")
                    .attr("oninput", "filterComponents(this.value)"),
            ),
        )
        .child(
            el("nav")
                .class("storybook__nav")
                .child(
                    el("a")
                        .class("storybook__welcome-link")
                        .class_if(docs == DocsState::Welcome, "storybook__welcome-link--active")
                        .attr("href", "?category=welcome")
                        .child(icon("house"))
                        .child(el("span").text("Welcome")),
                )
                .children(categories),
        )
        .into()
}

fn sidebar_badge(component: &ComponentDescriptor) -> Markup {
    if component.is_shared() {
        el("span")
            .class("nexus-badge nexus-badge--info nexus-badge--pill")
            .attr("title", "Shared component")
            .child(icon("folder"))
            .text("Shared")
            .into()
    } else if component.shows_usage_badge() {
        el("span")
            .class("nexus-badge nexus-badge--muted nexus-badge--pill")
            .attr("title", format!("Used on {} pages", component.usage_count()))
            .text(component.usage_count().to_string())
            .into()
    } else {
        Markup::empty()
    }
}

// =============================================================================
// Welcome
// =============================================================================

fn welcome(registry: &Registry) -> Markup {
    let stat = |label: &str, value: String, icon_name: &str| {
        stat_card(&StatCardProps {
            label: label.into(),
            value,
            icon: icon_name.into(),
            ..StatCardProps::default()
        })
    };

    let category_cards = registry.categories().iter().filter_map(|category| {
        let first = category.components.first()?;
        Some(
            el("a")
                .class("storybook__category-card")
                .attr("href", component_href(category, first))
                .child(icon(category.icon))
                .child(el("h3").text(category.label))
                .child(el("p").text(format!(
                    "{} components",
                    category.components.len()
                ))),
        )
    });

    Markup::Fragment(vec![
        el("header")
            .class("storybook__header")
            .child(el("h1").text("Project NEXUS Component Library"))
            .child(el("p").text(
                "Reusable, accessible building blocks for every page of the platform. \
                 Pick a component from the sidebar to see a live preview, its props and variants.",
            ))
            .into(),
        el("div")
            .class("storybook__stats")
            .child(stat(
                "Components",
                registry.count_components(None).to_string(),
                "cubes",
            ))
            .child(stat(
                "Categories",
                registry.category_count().to_string(),
                "layer-group",
            ))
            .child(stat("Documented", "100%".into(), "book"))
            .child(stat("WCAG Grade", "A".into(), "universal-access"))
            .into(),
        el("section")
            .class("storybook__section")
            .child(el("h2").text("Quick Start"))
            .child(el("p").text(
                "Render any component by its template path with a bag of props. \
                 Props you leave out fall back to the component defaults.",
            ))
            .child(code_block(&CodeBlockProps {
                code: QUICK_START.into(),
                language: "rust".into(),
                title: "main.rs".into(),
                show_copy: true,
                ..CodeBlockProps::default()
            }))
            .into(),
        el("section")
            .class("storybook__section")
            .child(el("h2").text("Categories"))
            .child(el("div").class("storybook__category-grid").children(category_cards))
            .into(),
    ])
}

// =============================================================================
// Detail
// =============================================================================

fn detail(
    renderer: &Renderer,
    category: &CategoryDescriptor,
    component: &ComponentDescriptor,
) -> Markup {
    let breadcrumb = el("nav")
        .class("storybook__breadcrumb")
        .attr("aria-label", "Breadcrumb")
        .child(el("a").attr("href", "?category=welcome").text("Components"))
        .text(" / ")
        .child(el("span").text(category.label))
        .text(" / ")
        .child(el("span").attr("aria-current", "page").text(component.name));

    let header = el("header")
        .class("storybook__header")
        .child(el("h1").text(component.name))
        .child(el("p").text(component.description))
        .child(el("code").class("storybook__path").text(component.template_path));

    Markup::Fragment(vec![
        breadcrumb.into(),
        header.into(),
        canvas(renderer, component).into(),
        props_table(component).into(),
        usage(component),
        variants(renderer, component),
    ])
}

fn preview(renderer: &Renderer, component: &ComponentDescriptor) -> Markup {
    match renderer.render_markup(component.template_path, &sample_props(component.id)) {
        Ok(markup) => markup,
        Err(e) => {
            tracing::warn!(
                name: "storybook.preview_failed",
                template = component.template_path,
                reason = e.reason(),
                "Component preview unavailable"
            );
            metrics::counter!("components_render_failures_total", "reason" => e.reason())
                .increment(1);
            el("div")
                .class("preview-section__placeholder")
                .child(icon("triangle-exclamation"))
                .text(" Component file not found")
                .into()
        }
    }
}

/// The invocation shown in the Code tab: one assignment per prop, then the
/// render call.
#[must_use]
pub fn code_sample(component: &ComponentDescriptor) -> String {
    let mut code = format!("// {}\n", component.name);
    for prop in component.props {
        code.push_str(&format!("{} = {};\n", prop.name, prop.default));
    }
    if !component.props.is_empty() {
        code.push('\n');
    }
    code.push_str(&format!(
        "renderer.render_component(\"{}\", &props)?;",
        component.template_path
    ));
    code
}

fn canvas(renderer: &Renderer, component: &ComponentDescriptor) -> Element {
    let tab = |name: &str, label: &str, active: bool| {
        el("button")
            .attr("type", "button")
            .attr("role", "tab")
            .class("storybook__tab")
            .class_if(active, "storybook__tab--active")
            .attr("aria-selected", if active { "true" } else { "false" })
            .attr("onclick", format!("showTab('{name}', this)"))
            .text(label.to_string())
    };

    el("section")
        .class("storybook__canvas")
        .child(
            el("div")
                .class("storybook__tabs")
                .attr("role", "tablist")
                .child(tab("preview", "Preview", true))
                .child(tab("code", "Code", false)),
        )
        .child(
            el("div")
                .class("storybook__panel")
                .attr("id", "panel-preview")
                .attr("role", "tabpanel")
                .child(el("div").class("preview-section").child(preview(renderer, component))),
        )
        .child(
            el("div")
                .class("storybook__panel")
                .attr("id", "panel-code")
                .attr("role", "tabpanel")
                .flag("hidden", true)
                .child(code_block(&CodeBlockProps {
                    code: code_sample(component),
                    language: "rust".into(),
                    show_copy: true,
                    ..CodeBlockProps::default()
                })),
        )
}

fn props_table(component: &ComponentDescriptor) -> Element {
    let section = el("section")
        .class("storybook__section")
        .child(el("h2").text("Props"));

    if component.props.is_empty() {
        return section.child(el("p").text("This component takes no props."));
    }

    let rows = component.props.iter().map(|prop| {
        el("tr")
            .child(el("td").child(el("code").text(prop.name)))
            .child(el("td").child(el("code").text(prop.ty)))
            .child(el("td").child(el("code").text(prop.default)))
            .child(el("td").text(prop.description))
    });

    section.child(
        el("table")
            .class("storybook__props")
            .child(
                el("thead").child(
                    el("tr")
                        .child(el("th").attr("scope", "col").text("Name"))
                        .child(el("th").attr("scope", "col").text("Type"))
                        .child(el("th").attr("scope", "col").text("Default"))
                        .child(el("th").attr("scope", "col").text("Description")),
                ),
            )
            .child(el("tbody").children(rows)),
    )
}

fn usage(component: &ComponentDescriptor) -> Markup {
    if component.used_on.is_empty() {
        return Markup::empty();
    }
    let heading = match component.usage_count() {
        1 => "Used on 1 page".to_string(),
        n => format!("Used on {n} pages"),
    };
    el("section")
        .class("storybook__section")
        .child(el("h2").text(heading))
        .child(el("div").children(
            component
                .used_on
                .iter()
                .map(|page| el("span").class("storybook__usage-tag").text(*page)),
        ))
        .into()
}

fn variant(renderer: &Renderer, path: &str, props: &PropBag, label: &str) -> Element {
    el("div")
        .class("storybook__variant")
        .child(renderer.render_or_placeholder(path, props, "Component file not found"))
        .child(el("div").class("storybook__variant-label").text(label.to_string()))
}

fn variants(renderer: &Renderer, component: &ComponentDescriptor) -> Markup {
    let path = component.template_path;
    let (items, stacked): (Vec<Element>, bool) = match component.id {
        "button" => (
            ButtonVariant::ALL
                .iter()
                .map(|v| {
                    let label = ucfirst(v.as_str());
                    let props = PropBag::new()
                        .with("label", label.as_str())
                        .with("variant", v.as_str());
                    variant(renderer, path, &props, v.as_str())
                })
                .collect(),
            false,
        ),
        "alert" => (
            AlertType::ALL
                .iter()
                .map(|t| {
                    let props = PropBag::new()
                        .with("type", t.as_str())
                        .with("message", format!("{} message", ucfirst(t.as_str())))
                        .with("dismissible", false);
                    variant(renderer, path, &props, t.as_str())
                })
                .collect(),
            true,
        ),
        "badge" => (
            BadgeVariant::ALL
                .iter()
                .map(|v| {
                    let props = PropBag::new()
                        .with("text", ucfirst(v.as_str()))
                        .with("variant", v.as_str());
                    variant(renderer, path, &props, v.as_str())
                })
                .collect(),
            false,
        ),
        "avatar" => (
            AVATAR_SIZES
                .iter()
                .map(|size| {
                    let props = PropBag::new().with("name", "User").with("size", *size);
                    variant(renderer, path, &props, &format!("{size}px"))
                })
                .collect(),
            false,
        ),
        _ => return Markup::empty(),
    };

    el("section")
        .class("storybook__section")
        .child(el("h2").text("Variants"))
        .child(
            el("div")
                .class("storybook__variants")
                .class_if(stacked, "storybook__variants--stacked")
                .children(items),
        )
        .into()
}

fn not_found() -> Markup {
    el("div")
        .class("storybook__not-found")
        .attr("role", "status")
        .child(icon("circle-question"))
        .child(el("p").text(NOT_FOUND_MESSAGE))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TemplateSet;

    fn query(category: Option<&str>, component: Option<&str>) -> DocsQuery {
        DocsQuery {
            category: category.map(str::to_owned),
            component: component.map(str::to_owned),
        }
    }

    fn page(category: Option<&str>, component: Option<&str>) -> String {
        let renderer = Renderer::new(TemplateSet::builtin());
        render_docs(Registry::builtin(), &renderer, &query(category, component))
    }

    #[test]
    fn resolve_defaults_to_welcome() {
        let registry = Registry::builtin();
        assert_eq!(DocsState::resolve(registry, &query(None, None)), DocsState::Welcome);
        assert_eq!(
            DocsState::resolve(registry, &query(Some("welcome"), Some("button"))),
            DocsState::Welcome
        );
        assert_eq!(
            DocsState::resolve(registry, &query(Some("buttons"), Some(""))),
            DocsState::Welcome
        );
    }

    #[test]
    fn resolve_detail_and_not_found() {
        let registry = Registry::builtin();
        match DocsState::resolve(registry, &query(Some("buttons"), Some("button"))) {
            DocsState::Detail {
                category,
                component,
            } => {
                assert_eq!(category.id, "buttons");
                assert_eq!(component.template_path, "buttons/button");
            }
            other => panic!("expected detail, got {other:?}"),
        }
        assert_eq!(
            DocsState::resolve(registry, &query(Some("buttons"), Some("nope"))),
            DocsState::NotFound
        );
        assert_eq!(
            DocsState::resolve(registry, &query(Some("nope"), Some("button"))),
            DocsState::NotFound
        );
    }

    #[test]
    fn welcome_shows_registry_stats() {
        let html = page(None, None);
        let registry = Registry::builtin();
        assert!(html.contains(&format!(
            "<div class=\"nexus-stat-card__value\">{}</div>",
            registry.count_components(None)
        )));
        assert!(html.contains(&format!(
            "<div class=\"nexus-stat-card__value\">{}</div>",
            registry.category_count()
        )));
        assert!(html.contains("Quick Start"));
        assert!(html.contains("render_component"));
        assert!(html.contains("storybook__welcome-link storybook__welcome-link--active"));
    }

    #[test]
    fn detail_page_has_breadcrumb_tabs_and_props() {
        let html = page(Some("buttons"), Some("button"));
        assert!(html.contains("<a href=\"?category=welcome\">Components</a> / <span>Buttons</span>"));
        assert!(html.contains("id=\"panel-preview\""));
        assert!(html.contains("id=\"panel-code\""));
        assert!(html.contains("Click Me"));
        assert!(html.contains("<th scope=\"col\">Default</th>"));
        assert!(html.contains("storybook__component-item storybook__component-item--active"));
    }

    #[test]
    fn button_variants_cover_every_style() {
        let html = page(Some("buttons"), Some("button"));
        for v in ButtonVariant::ALL {
            assert!(html.contains(&format!("nexus-btn--{}", v.as_str())));
        }
        assert!(html.contains("Variants"));
    }

    #[test]
    fn avatar_variants_are_sized() {
        let html = page(Some("media"), Some("avatar"));
        for size in AVATAR_SIZES {
            assert!(html.contains(&format!(">{size}px</div>")));
        }
    }

    #[test]
    fn missing_template_renders_placeholder() {
        let renderer = Renderer::new(TemplateSet::new());
        let html = render_docs(
            Registry::builtin(),
            &renderer,
            &query(Some("buttons"), Some("button")),
        );
        assert!(html.contains("preview-section__placeholder"));
        assert!(html.contains("Component file not found"));
    }

    #[test]
    fn unknown_component_keeps_sidebar() {
        let html = page(Some("buttons"), Some("does-not-exist"));
        assert!(html.contains(NOT_FOUND_MESSAGE));
        assert!(html.contains("storybook__sidebar"));
        assert!(!html.contains(
            "class=\"storybook__component-item storybook__component-item--active\""
        ));
    }

    #[test]
    fn breadcrumb_names_category_and_component() {
        let html = page(Some("layout"), Some("hero"));
        assert!(html.contains(
            "<a href=\"?category=welcome\">Components</a> / <span>Layout</span> / \
             <span aria-current=\"page\">Hero</span>"
        ));
    }

    #[test]
    fn code_sample_lists_props_then_call() {
        let component = Registry::builtin()
            .component("buttons", "button")
            .unwrap();
        let code = code_sample(component);
        let first = component.props.first().unwrap();
        assert!(code.contains(&format!("{} = {};\n", first.name, first.default)));
        assert!(code.ends_with("renderer.render_component(\"buttons/button\", &props)?;"));
    }

    #[test]
    fn shared_components_get_a_badge() {
        let html = page(None, None);
        assert!(html.contains("title=\"Shared component\""));
    }
}
