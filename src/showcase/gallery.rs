//! Every catalog entry on one page, at `/components/showcase`.

use axum::{extract::State, response::Html};

use super::samples::sample_props;
use crate::AppState;
use crate::markup::{Element, Markup, el, icon};
use crate::pages::shell::PageShell;
use crate::registry::{CategoryDescriptor, ComponentDescriptor, Registry};
use crate::render::Renderer;

const GALLERY_CSS: &str = r"
body.showcase-body { margin: 0; font-family: system-ui, -apple-system, 'Segoe UI', sans-serif; background: #f3f4f6; color: #111827; }
.showcase { max-width: 1280px; margin: 0 auto; padding: 32px 24px 64px; }
.showcase__header { text-align: center; margin-bottom: 32px; }
.showcase__stats { display: flex; justify-content: center; gap: 32px; margin-top: 16px; }
.showcase__stat strong { display: block; font-size: 1.8rem; color: #4f46e5; }
.showcase__toc { display: flex; flex-wrap: wrap; gap: 8px; justify-content: center; margin-bottom: 40px; }
.showcase__toc a { padding: 6px 14px; border-radius: 999px; background: #fff; border: 1px solid #e5e7eb; color: inherit; text-decoration: none; font-size: .85rem; }
.showcase__toc small { color: #6b7280; margin-left: 4px; }
.showcase__category { margin-bottom: 48px; scroll-margin-top: 16px; }
.showcase__category h2 { display: flex; gap: 10px; align-items: center; }
.showcase__grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(340px, 1fr)); gap: 20px; }
.showcase__card { background: #fff; border: 1px solid #e5e7eb; border-radius: 12px; overflow: hidden; }
.showcase__card-header { padding: 12px 16px; border-bottom: 1px solid #e5e7eb; }
.showcase__card-header h3 { margin: 0; font-size: 1rem; }
.showcase__card-header code { font-size: .75rem; color: #6b7280; }
.showcase__preview { padding: 20px; overflow-x: auto; }
.component-placeholder { padding: 16px; border: 1px dashed #fca5a5; border-radius: 8px; background: #fef2f2; color: #b91c1c; font-size: .85rem; }";

pub async fn showcase_page(State(state): State<AppState>) -> Html<String> {
    Html(render_showcase(state.registry, &state.renderer))
}

/// The full gallery page.
#[must_use]
pub fn render_showcase(registry: &Registry, renderer: &Renderer) -> String {
    let available = registry
        .entries()
        .filter(|(_, c)| renderer.templates().contains(c.template_path))
        .count();

    let stat = |value: usize, label: &str| {
        el("div")
            .class("showcase__stat")
            .child(el("strong").text(value.to_string()))
            .child(el("span").text(label.to_string()))
    };

    let header = el("header")
        .class("showcase__header")
        .child(el("h1").text("Component Showcase"))
        .child(el("p").text("Every component in the library, rendered with sample props."))
        .child(
            el("div")
                .class("showcase__stats")
                .child(stat(registry.count_components(None), "Components"))
                .child(stat(registry.category_count(), "Categories"))
                .child(stat(available, "Rendered")),
        );

    let toc = el("nav")
        .class("showcase__toc")
        .attr("aria-label", "Categories")
        .children(registry.categories().iter().map(|category| {
            el("a")
                .attr("href", format!("#cat-{}", category.id))
                .text(category.label)
                .child(el("small").text(format!("({})", category.components.len())))
        }));

    let body = el("div")
        .class("showcase")
        .child(header)
        .child(toc)
        .children(
            registry
                .categories()
                .iter()
                .map(|category| category_section(renderer, category)),
        );

    PageShell::new("Component Showcase")
        .body_class("showcase-body")
        .style(GALLERY_CSS)
        .render(body)
}

fn category_section(renderer: &Renderer, category: &CategoryDescriptor) -> Element {
    el("section")
        .class("showcase__category")
        .attr("id", format!("cat-{}", category.id))
        .child(
            el("h2")
                .child(icon(category.icon))
                .text(category.label)
                .child(el("small").text(format!("{} components", category.components.len()))),
        )
        .child(
            el("div").class("showcase__grid").children(
                category
                    .components
                    .iter()
                    .map(|component| component_card(renderer, component)),
            ),
        )
}

/// One entry's preview. Failures stay inside the card.
fn preview(renderer: &Renderer, component: &ComponentDescriptor) -> Markup {
    let placeholder = if renderer.templates().contains(component.template_path) {
        "Preview failed".to_string()
    } else {
        format!("File not found: {}", component.template_path)
    };
    renderer.render_or_placeholder(
        component.template_path,
        &sample_props(component.id),
        &placeholder,
    )
}

fn component_card(renderer: &Renderer, component: &ComponentDescriptor) -> Element {
    el("article")
        .class("showcase__card")
        .attr("id", format!("component-{}", component.id))
        .child(
            el("div")
                .class("showcase__card-header")
                .child(el("h3").text(component.name))
                .child(el("code").text(component.template_path)),
        )
        .child(el("div").class("showcase__preview").child(preview(renderer, component)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{PropBag, TemplateSet};

    fn explode(_: &PropBag) -> Markup {
        panic!("broken template");
    }

    #[test]
    fn every_entry_gets_a_card() {
        let registry = Registry::builtin();
        let html = render_showcase(registry, &Renderer::new(TemplateSet::builtin()));
        assert_eq!(
            html.matches("class=\"showcase__card\"").count(),
            registry.count_components(None)
        );
        for category in registry.categories() {
            assert!(html.contains(&format!("href=\"#cat-{}\"", category.id)));
            assert!(html.contains(&format!("id=\"cat-{}\"", category.id)));
        }
    }

    #[test]
    fn missing_templates_stay_inside_their_card() {
        let html = render_showcase(Registry::builtin(), &Renderer::new(TemplateSet::builtin()));
        assert!(html.contains("File not found: cards/listing-card"));
        assert!(!html.contains("File not found: buttons/button"));
        assert!(html.contains("Click Me"));
    }

    #[test]
    fn panicking_template_renders_failure_block() {
        let templates = TemplateSet::builtin().with("buttons/button", explode);
        let registry = Registry::builtin();
        let html = render_showcase(registry, &Renderer::new(templates));
        assert!(html.contains("Preview failed"));
        assert_eq!(
            html.matches("class=\"showcase__card\"").count(),
            registry.count_components(None)
        );
    }
}
