//! The component library.
//!
//! Every component is a pure function from a typed props record to
//! [`Markup`](crate::markup::Markup). Props records use camelCase keys and
//! `#[serde(default)]`, so a [`PropBag`](crate::render::PropBag) with any subset
//! of keys decodes into a complete record with documented defaults.
//!
//! # Components
//!
//! - [`layout`]: hero, section, container, grid, sidebar layout
//! - [`navigation`]: breadcrumb, tabs, pills, pagination, filter bar
//! - [`cards`]: base card, stat card, volunteer card, post card
//! - [`forms`]: inputs, selects, toggles, sliders, search
//! - [`buttons`]: button, icon button, button group, FAB
//! - [`feedback`]: alert, empty state, modal, toast, skeleton, spinner
//! - [`media`]: avatar, avatar stack, badge, icon, image, code block
//! - [`data`]: progress bar, stat, leaderboard, table, list, timeline item
//! - [`interactive`]: accordion, tooltip, copy button, star rating
//! - [`social`]: notification item
//! - [`shared`]: the reusable feed post card
//! - [`nexus`]: score radar chart

pub mod buttons;
pub mod cards;
pub mod data;
pub mod feedback;
pub mod forms;
pub mod interactive;
pub mod layout;
pub mod media;
pub mod navigation;
pub mod nexus;
pub mod shared;
pub mod social;

use serde::Deserialize;
use serde_json::Value;

use crate::render::TemplateSet;

/// Register every implemented template.
pub(crate) fn register_all(set: &mut TemplateSet) {
    buttons::register(set);
    cards::register(set);
    data::register(set);
    feedback::register(set);
    forms::register(set);
    interactive::register(set);
    layout::register(set);
    media::register(set);
    navigation::register(set);
    nexus::register(set);
    shared::register(set);
    social::register(set);
}

/// Common three-step size scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

impl Size {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

/// A labelled link, used by empty states, sections and breadcrumbs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Link {
    pub label: String,
    pub href: String,
    pub icon: String,
}

/// Upper-case the first character.
pub(crate) fn ucfirst(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Plain-text form of a loosely typed JSON value.
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => (if *b { "Yes" } else { "No" }).to_string(),
        other => other.to_string(),
    }
}

/// Format a number without trailing `.0`.
pub(crate) fn format_number(value: f64) -> String {
    // Round first so 6.96 reads "7"; adding 0.0 folds -0.0 into 0.0.
    let rounded = (value * 10.0).round() / 10.0 + 0.0;
    if rounded.fract() == 0.0 && rounded.abs() < 1e15 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}
