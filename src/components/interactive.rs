//! Interactive widgets.

use serde::Deserialize;

use super::Size;
use crate::markup::{Markup, el, icon};
use crate::render::{PropBag, TemplateSet};

/// One accordion section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AccordionItem {
    pub id: String,
    pub title: String,
    /// Section HTML.
    pub content: String,
    pub icon: String,
    pub expanded: bool,
}

/// Props for `interactive/accordion`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccordionProps {
    pub items: Vec<AccordionItem>,
    pub allow_multiple: bool,
    /// `default`, `bordered` or `separated`.
    pub variant: String,
}

impl Default for AccordionProps {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            allow_multiple: false,
            variant: "default".into(),
        }
    }
}

const ACCORDION_SCRIPT: &str = "(function(root){\
root.querySelectorAll('.nexus-accordion__trigger').forEach(function(btn){\
btn.addEventListener('click',function(){\
var open=btn.getAttribute('aria-expanded')==='true';\
if(root.dataset.multiple!=='true'){root.querySelectorAll('.nexus-accordion__trigger').forEach(function(o){\
o.setAttribute('aria-expanded','false');document.getElementById(o.getAttribute('aria-controls')).hidden=true;});}\
btn.setAttribute('aria-expanded',open?'false':'true');\
document.getElementById(btn.getAttribute('aria-controls')).hidden=open;});});\
})(document.currentScript.parentElement);";

pub fn accordion(props: &AccordionProps) -> Markup {
    // A single-open accordion keeps only the first expanded section open.
    let mut opened = false;
    let sections: Vec<_> = props
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let id = if item.id.is_empty() {
                format!("accordion-{}", i + 1)
            } else {
                item.id.clone()
            };
            let expanded = item.expanded && (props.allow_multiple || !opened);
            opened |= expanded;
            let panel_id = format!("{id}-panel");

            el("div")
                .class("nexus-accordion__item")
                .child(
                    el("h3").class("nexus-accordion__heading").child(
                        el("button")
                            .attr("type", "button")
                            .class("nexus-accordion__trigger")
                            .attr("id", id.clone())
                            .attr("aria-expanded", if expanded { "true" } else { "false" })
                            .attr("aria-controls", panel_id.clone())
                            .child(icon(&item.icon))
                            .child(el("span").text(item.title.as_str()))
                            .child(
                                el("span")
                                    .class("nexus-accordion__chevron")
                                    .child(icon("chevron-down")),
                            ),
                    ),
                )
                .child(
                    el("div")
                        .class("nexus-accordion__panel")
                        .attr("id", panel_id)
                        .attr("role", "region")
                        .attr("aria-labelledby", id)
                        .flag("hidden", !expanded)
                        .raw(item.content.as_str()),
                )
        })
        .collect();

    el("div")
        .class("nexus-accordion")
        .class(format!("nexus-accordion--{}", props.variant))
        .attr("data-multiple", if props.allow_multiple { "true" } else { "false" })
        .children(sections)
        .child(el("script").raw(ACCORDION_SCRIPT))
        .into()
}

/// Props for `interactive/tooltip`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TooltipProps {
    pub content: String,
    /// `top`, `bottom`, `left` or `right`.
    pub position: String,
    /// Trigger HTML.
    pub trigger: String,
}

impl Default for TooltipProps {
    fn default() -> Self {
        Self {
            content: String::new(),
            position: "top".into(),
            trigger: String::new(),
        }
    }
}

pub fn tooltip(props: &TooltipProps) -> Markup {
    el("span")
        .class("nexus-tooltip")
        .class(format!("nexus-tooltip--{}", props.position))
        .attr("tabindex", "0")
        .child(el("span").class("nexus-tooltip__trigger").raw(props.trigger.as_str()))
        .child(
            el("span")
                .class("nexus-tooltip__bubble")
                .attr("role", "tooltip")
                .text(props.content.as_str()),
        )
        .into()
}

/// Props for `interactive/copy-button`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CopyButtonProps {
    pub text: String,
    pub label: String,
    pub success_label: String,
}

impl Default for CopyButtonProps {
    fn default() -> Self {
        Self {
            text: String::new(),
            label: "Copy".into(),
            success_label: "Copied!".into(),
        }
    }
}

const COPY_HANDLER: &str = "var b=this,l=b.querySelector('.nexus-copy-btn__label'),o=l.textContent;\
navigator.clipboard.writeText(b.dataset.copy).then(function(){\
l.textContent=b.dataset.success;b.classList.add('nexus-copy-btn--done');\
setTimeout(function(){l.textContent=o;b.classList.remove('nexus-copy-btn--done');},2000);});";

pub fn copy_button(props: &CopyButtonProps) -> Markup {
    el("button")
        .attr("type", "button")
        .class("nexus-copy-btn")
        .attr("data-copy", props.text.as_str())
        .attr("data-success", props.success_label.as_str())
        .attr("onclick", COPY_HANDLER)
        .child(icon("copy"))
        .child(el("span").class("nexus-copy-btn__label").text(props.label.as_str()))
        .into()
}

/// Props for `interactive/star-rating`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StarRatingProps {
    /// Clamped to 0..=5.
    pub value: f64,
    pub readonly: bool,
    pub size: Size,
    /// Form field name for the editable variant.
    pub name: String,
}

/// Highest rating.
pub const MAX_STARS: u8 = 5;

#[must_use]
pub fn clamp_rating(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, f64::from(MAX_STARS))
    }
}

pub fn star_rating(props: &StarRatingProps) -> Markup {
    let value = clamp_rating(props.value);
    let label = format!("{} out of {MAX_STARS} stars", super::format_number(value));

    let stars = (1..=MAX_STARS).map(|n| {
        let n_f = f64::from(n);
        let (state, icon_name) = if value >= n_f {
            ("full", "star")
        } else if value > n_f - 1.0 {
            ("half", "star-half-stroke")
        } else {
            ("empty", "star")
        };
        let star = if props.readonly {
            el("span").attr("aria-hidden", "true")
        } else {
            el("button")
                .attr("type", "button")
                .attr("data-value", n)
                .attr("aria-label", format!("Rate {n}"))
        };
        star.class("nexus-stars__star")
            .class(format!("nexus-stars__star--{state}"))
            .child(icon(icon_name))
    });

    let hidden = (!props.readonly && !props.name.is_empty()).then(|| {
        Markup::from(
            el("input")
                .attr("type", "hidden")
                .attr("name", props.name.as_str())
                .attr("value", super::format_number(value)),
        )
    });

    el("div")
        .class("nexus-stars")
        .class(format!("nexus-stars--{}", props.size.as_str()))
        .class_if(props.readonly, "nexus-stars--readonly")
        .attr("role", if props.readonly { "img" } else { "group" })
        .attr("aria-label", label)
        .children(stars)
        .child(hidden)
        .into()
}

pub(super) fn register(set: &mut TemplateSet) {
    set.register("interactive/accordion", |bag: &PropBag| accordion(&bag.decode()))
        .register("interactive/tooltip", |bag: &PropBag| tooltip(&bag.decode()))
        .register("interactive/copy-button", |bag: &PropBag| copy_button(&bag.decode()))
        .register("interactive/star-rating", |bag: &PropBag| star_rating(&bag.decode()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_open_accordion_keeps_first_expanded() {
        let props: AccordionProps = PropBag::from(json!({
            "items": [
                {"id": "a", "title": "A", "content": "<p>a</p>", "expanded": true},
                {"id": "b", "title": "B", "content": "b", "expanded": true}
            ]
        }))
        .decode();
        let html = accordion(&props).to_string();
        assert_eq!(html.matches("aria-expanded=\"true\"").count(), 1);
        assert!(html.contains("<p>a</p>"));
    }

    #[test]
    fn multi_open_accordion_honours_each_item() {
        let props: AccordionProps = PropBag::from(json!({
            "allowMultiple": true,
            "items": [
                {"title": "A", "expanded": true},
                {"title": "B", "expanded": true}
            ]
        }))
        .decode();
        let html = accordion(&props).to_string();
        assert_eq!(html.matches("aria-expanded=\"true\"").count(), 2);
        assert!(html.contains("id=\"accordion-2\""));
    }

    #[test]
    fn rating_is_clamped_to_five() {
        assert_eq!(clamp_rating(9.0), 5.0);
        assert_eq!(clamp_rating(-1.0), 0.0);

        let props = StarRatingProps {
            value: 9.0,
            readonly: true,
            ..StarRatingProps::default()
        };
        let html = star_rating(&props).to_string();
        assert_eq!(html.matches("nexus-stars__star--full").count(), 5);
        assert!(html.contains("aria-label=\"5 out of 5 stars\""));
    }

    #[test]
    fn half_star_for_fractional_rating() {
        let props: StarRatingProps = PropBag::from(json!({"value": 3.5})).decode();
        let html = star_rating(&props).to_string();
        assert_eq!(html.matches("nexus-stars__star--full").count(), 3);
        assert_eq!(html.matches("nexus-stars__star--half").count(), 1);
        assert!(html.contains("data-value=\"1\""));
    }

    #[test]
    fn copy_button_carries_text() {
        let html = copy_button(&CopyButtonProps {
            text: "a \"quoted\" value".into(),
            ..CopyButtonProps::default()
        })
        .to_string();
        assert!(html.contains("data-copy=\"a &quot;quoted&quot; value\""));
        assert!(html.contains("data-success=\"Copied!\""));
    }

    #[test]
    fn tooltip_escapes_content_but_not_trigger() {
        let html = tooltip(&TooltipProps {
            content: "<b>hi</b>".into(),
            trigger: "<button>Hover me</button>".into(),
            ..TooltipProps::default()
        })
        .to_string();
        assert!(html.contains("<button>Hover me</button>"));
        assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;"));
    }
}
