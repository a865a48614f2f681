//! Form controls.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::Size;
use crate::markup::{Element, Markup, el, icon};
use crate::render::{PropBag, TemplateSet};

/// Props for `forms/input`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InputProps {
    pub name: String,
    #[serde(rename = "type")]
    pub input_type: String,
    pub value: String,
    pub placeholder: String,
    pub icon: String,
    pub disabled: bool,
    pub required: bool,
    pub label: String,
    pub error: String,
}

impl Default for InputProps {
    fn default() -> Self {
        Self {
            name: String::new(),
            input_type: "text".into(),
            value: String::new(),
            placeholder: String::new(),
            icon: String::new(),
            disabled: false,
            required: false,
            label: String::new(),
            error: String::new(),
        }
    }
}

fn field_label(name: &str, label: &str, required: bool) -> Markup {
    if label.is_empty() {
        return Markup::empty();
    }
    el("label")
        .class("nexus-field__label")
        .attr_nonempty("for", name)
        .text(label)
        .child(required.then(|| {
            Markup::from(
                el("span")
                    .class("nexus-field__required")
                    .attr("aria-hidden", "true")
                    .text("*"),
            )
        }))
        .into()
}

fn field_error(name: &str, error: &str) -> Markup {
    if error.is_empty() {
        return Markup::empty();
    }
    el("p")
        .class("nexus-field__error")
        .attr_nonempty("id", &error_id(name))
        .attr("role", "alert")
        .text(error)
        .into()
}

fn error_id(name: &str) -> String {
    if name.is_empty() {
        String::new()
    } else {
        format!("{name}-error")
    }
}

pub fn input(props: &InputProps) -> Markup {
    let has_error = !props.error.is_empty();
    let described_by = if has_error {
        error_id(&props.name)
    } else {
        String::new()
    };
    let control = el("input")
        .class("nexus-input")
        .class_if(!props.icon.is_empty(), "nexus-input--with-icon")
        .class_if(has_error, "nexus-input--error")
        .attr("type", props.input_type.as_str())
        .attr_nonempty("name", &props.name)
        .attr_nonempty("id", &props.name)
        .attr_nonempty("value", &props.value)
        .attr_nonempty("placeholder", &props.placeholder)
        .flag("disabled", props.disabled)
        .flag("required", props.required)
        .flag("aria-invalid", has_error)
        .attr_nonempty("aria-describedby", &described_by);

    el("div")
        .class("nexus-field")
        .child(field_label(&props.name, &props.label, props.required))
        .child(
            el("div")
                .class("nexus-input-wrap")
                .child((!props.icon.is_empty()).then(|| {
                    Markup::from(el("span").class("nexus-input-wrap__icon").child(icon(&props.icon)))
                }))
                .child(control),
        )
        .child(field_error(&props.name, &props.error))
        .into()
}

/// Props for `forms/textarea`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextareaProps {
    pub name: String,
    pub value: String,
    pub placeholder: String,
    pub rows: u32,
    pub auto_resize: bool,
}

impl Default for TextareaProps {
    fn default() -> Self {
        Self {
            name: String::new(),
            value: String::new(),
            placeholder: String::new(),
            rows: 3,
            auto_resize: false,
        }
    }
}

pub fn textarea(props: &TextareaProps) -> Markup {
    el("textarea")
        .class("nexus-textarea")
        .class_if(props.auto_resize, "nexus-textarea--auto")
        .attr_nonempty("name", &props.name)
        .attr_nonempty("id", &props.name)
        .attr("rows", props.rows.max(1))
        .attr_nonempty("placeholder", &props.placeholder)
        .attr_nonempty(
            "oninput",
            if props.auto_resize {
                "this.style.height='auto';this.style.height=this.scrollHeight+'px'"
            } else {
                ""
            },
        )
        .text(props.value.as_str())
        .into()
}

/// A value/label choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

/// Select options: either a `value => label` map or a list of choices.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Options {
    List(Vec<Choice>),
    Map(BTreeMap<String, String>),
}

impl Default for Options {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl Options {
    /// Choices in display order.
    #[must_use]
    pub fn choices(&self) -> Vec<Choice> {
        match self {
            Self::List(list) => list.clone(),
            Self::Map(map) => map
                .iter()
                .map(|(value, label)| Choice {
                    value: value.clone(),
                    label: label.clone(),
                })
                .collect(),
        }
    }
}

/// Props for `forms/select`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectProps {
    pub name: String,
    pub options: Options,
    pub selected: String,
    pub placeholder: String,
}

pub fn select(props: &SelectProps) -> Markup {
    let placeholder = (!props.placeholder.is_empty()).then(|| {
        Markup::from(
            el("option")
                .attr("value", "")
                .flag("disabled", true)
                .flag("selected", props.selected.is_empty())
                .text(props.placeholder.as_str()),
        )
    });

    el("select")
        .class("nexus-select")
        .attr_nonempty("name", &props.name)
        .attr_nonempty("id", &props.name)
        .child(placeholder)
        .children(props.options.choices().into_iter().map(|choice| {
            el("option")
                .flag("selected", choice.value == props.selected)
                .attr("value", choice.value)
                .text(choice.label)
        }))
        .into()
}

/// Props for `forms/checkbox`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckboxProps {
    pub name: String,
    pub label: String,
    pub description: String,
    pub checked: bool,
}

pub fn checkbox(props: &CheckboxProps) -> Markup {
    el("label")
        .class("nexus-checkbox")
        .child(
            el("input")
                .attr("type", "checkbox")
                .class("nexus-checkbox__input")
                .attr_nonempty("name", &props.name)
                .flag("checked", props.checked),
        )
        .child(
            el("span")
                .class("nexus-checkbox__text")
                .child(el("span").class("nexus-checkbox__label").text(props.label.as_str()))
                .child((!props.description.is_empty()).then(|| {
                    Markup::from(
                        el("small")
                            .class("nexus-checkbox__description")
                            .text(props.description.as_str()),
                    )
                })),
        )
        .into()
}

/// Props for `forms/radio`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RadioProps {
    pub name: String,
    pub options: Options,
    pub selected: String,
}

pub fn radio(props: &RadioProps) -> Markup {
    el("div")
        .class("nexus-radio-group")
        .attr("role", "radiogroup")
        .children(props.options.choices().into_iter().map(|choice| {
            el("label")
                .class("nexus-radio")
                .child(
                    el("input")
                        .attr("type", "radio")
                        .class("nexus-radio__input")
                        .attr_nonempty("name", &props.name)
                        .flag("checked", choice.value == props.selected)
                        .attr("value", choice.value),
                )
                .child(el("span").class("nexus-radio__label").text(choice.label))
        }))
        .into()
}

/// Props for `forms/toggle-switch`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToggleSwitchProps {
    pub name: String,
    pub label: String,
    pub checked: bool,
    pub size: Size,
}

pub fn toggle_switch(props: &ToggleSwitchProps) -> Markup {
    el("label")
        .class("nexus-toggle")
        .class(format!("nexus-toggle--{}", props.size.as_str()))
        .child(
            el("input")
                .attr("type", "checkbox")
                .class("nexus-toggle__input")
                .attr("role", "switch")
                .attr_nonempty("name", &props.name)
                .flag("checked", props.checked),
        )
        .child(el("span").class("nexus-toggle__track").attr("aria-hidden", "true"))
        .child((!props.label.is_empty()).then(|| {
            Markup::from(el("span").class("nexus-toggle__label").text(props.label.as_str()))
        }))
        .into()
}

/// Props for `forms/form-group`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormGroupProps {
    pub label: String,
    pub name: String,
    pub error: String,
    pub help: String,
    pub required: bool,
    /// Field HTML.
    pub content: String,
}

pub fn form_group(props: &FormGroupProps) -> Markup {
    el("div")
        .class("nexus-form-group")
        .class_if(!props.error.is_empty(), "nexus-form-group--error")
        .child(field_label(&props.name, &props.label, props.required))
        .child(el("div").class("nexus-form-group__control").raw(props.content.as_str()))
        .child((!props.help.is_empty()).then(|| {
            Markup::from(el("p").class("nexus-form-group__help").text(props.help.as_str()))
        }))
        .child(field_error(&props.name, &props.error))
        .into()
}

/// Props for `forms/range-slider`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RangeSliderProps {
    pub name: String,
    pub label: String,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub show_value: bool,
    /// `primary`, `success`, `warning` or `danger`.
    pub color: String,
}

impl Default for RangeSliderProps {
    fn default() -> Self {
        Self {
            name: String::new(),
            label: String::new(),
            value: 50.0,
            min: 0.0,
            max: 100.0,
            step: 1.0,
            show_value: true,
            color: "primary".into(),
        }
    }
}

pub fn range_slider(props: &RangeSliderProps) -> Markup {
    let (min, max) = if props.min <= props.max {
        (props.min, props.max)
    } else {
        (props.max, props.min)
    };
    let value = props.value.clamp(min, max);
    let value_text = super::format_number(value);
    let output_id = format!("{}-value", props.name);

    let header = (!props.label.is_empty() || props.show_value).then(|| {
        Markup::from(
            el("div")
                .class("nexus-range__header")
                .child(field_label(&props.name, &props.label, false))
                .child(props.show_value.then(|| {
                    Markup::from(
                        el("output")
                            .class("nexus-range__value")
                            .attr("id", output_id.clone())
                            .text(value_text.clone()),
                    )
                })),
        )
    });

    let slider: Element = el("input")
        .attr("type", "range")
        .class("nexus-range__input")
        .class(format!("nexus-range__input--{}", props.color))
        .attr_nonempty("name", &props.name)
        .attr_nonempty("id", &props.name)
        .attr("min", super::format_number(min))
        .attr("max", super::format_number(max))
        .attr("step", super::format_number(props.step))
        .attr("value", value_text);
    let slider = if props.show_value {
        slider.attr(
            "oninput",
            format!("document.getElementById('{output_id}').textContent=this.value"),
        )
    } else {
        slider
    };

    el("div")
        .class("nexus-range")
        .child(header)
        .child(slider)
        .into()
}

/// Props for `forms/search-input`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchInputProps {
    pub name: String,
    pub value: String,
    pub placeholder: String,
    /// Submit the enclosing form on Enter.
    pub auto_submit: bool,
}

impl Default for SearchInputProps {
    fn default() -> Self {
        Self {
            name: "q".into(),
            value: String::new(),
            placeholder: "Search...".into(),
            auto_submit: true,
        }
    }
}

pub fn search_input(props: &SearchInputProps) -> Markup {
    let input = el("input")
        .attr("type", "search")
        .class("nexus-search-input__field")
        .attr_nonempty("name", &props.name)
        .attr_nonempty("value", &props.value)
        .attr_nonempty("placeholder", &props.placeholder)
        .attr("aria-label", if props.placeholder.is_empty() { "Search" } else { props.placeholder.as_str() });
    let input = if props.auto_submit {
        input.attr(
            "onkeydown",
            "if(event.key==='Enter'&&this.form){event.preventDefault();this.form.submit();}",
        )
    } else {
        input
    };

    el("div")
        .class("nexus-search-input")
        .attr("role", "search")
        .child(el("span").class("nexus-search-input__icon").child(icon("magnifying-glass")))
        .child(input)
        .into()
}

pub(super) fn register(set: &mut TemplateSet) {
    set.register("forms/input", |bag: &PropBag| input(&bag.decode()))
        .register("forms/textarea", |bag: &PropBag| textarea(&bag.decode()))
        .register("forms/select", |bag: &PropBag| select(&bag.decode()))
        .register("forms/checkbox", |bag: &PropBag| checkbox(&bag.decode()))
        .register("forms/radio", |bag: &PropBag| radio(&bag.decode()))
        .register("forms/toggle-switch", |bag: &PropBag| toggle_switch(&bag.decode()))
        .register("forms/form-group", |bag: &PropBag| form_group(&bag.decode()))
        .register("forms/range-slider", |bag: &PropBag| range_slider(&bag.decode()))
        .register("forms/search-input", |bag: &PropBag| search_input(&bag.decode()));
}
