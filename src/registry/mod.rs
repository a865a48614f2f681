//! Component registry.
//!
//! A static, ordered table of categories and the components documented in
//! each. The documentation page, the showcase and the JSON API all read from
//! the same [`Registry`]; nothing mutates it after startup.

mod catalog;

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;

use crate::render::TemplateSet;

/// A component with this many `used_on` tags or more gets a usage badge.
pub const USAGE_BADGE_THRESHOLD: usize = 3;

/// One documented prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PropDescriptor {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub ty: &'static str,
    /// Default as displayed, e.g. `'md'`, `[]` or `false`.
    pub default: &'static str,
    pub description: &'static str,
}

/// One documented component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    /// Template path relative to the components root.
    pub template_path: &'static str,
    pub description: &'static str,
    pub props: &'static [PropDescriptor],
    /// Pages using the component. Free-form tags.
    pub used_on: &'static [&'static str],
}

impl ComponentDescriptor {
    /// Whether the template lives under `shared/`.
    #[must_use]
    pub fn is_shared(&self) -> bool {
        self.template_path.starts_with("shared/")
    }

    #[must_use]
    pub fn usage_count(&self) -> usize {
        self.used_on.len()
    }

    #[must_use]
    pub fn shows_usage_badge(&self) -> bool {
        self.usage_count() >= USAGE_BADGE_THRESHOLD
    }
}

/// One category of components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    /// Font Awesome icon name.
    pub icon: &'static str,
    pub components: &'static [ComponentDescriptor],
}

impl CategoryDescriptor {
    #[must_use]
    pub fn component(&self, id: &str) -> Option<&'static ComponentDescriptor> {
        self.components.iter().find(|c| c.id == id)
    }
}

/// A consistency problem found in a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryIssue {
    /// Two categories share an id.
    DuplicateCategory { category: &'static str },
    /// Two components in one category share an id.
    DuplicateComponent {
        category: &'static str,
        component: &'static str,
    },
    /// A `used_on` tag is empty or blank.
    EmptyUsageTag {
        category: &'static str,
        component: &'static str,
    },
    /// No template is registered for the component's path.
    MissingTemplate {
        category: &'static str,
        component: &'static str,
        template_path: &'static str,
    },
}

impl fmt::Display for RegistryIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCategory { category } => {
                write!(f, "duplicate category id {category:?}")
            }
            Self::DuplicateComponent {
                category,
                component,
            } => write!(f, "duplicate component id {component:?} in {category:?}"),
            Self::EmptyUsageTag {
                category,
                component,
            } => write!(f, "empty used_on tag on {category}/{component}"),
            Self::MissingTemplate {
                category,
                component,
                template_path,
            } => write!(
                f,
                "{category}/{component} has no template at {template_path:?}"
            ),
        }
    }
}

/// Ordered catalog of component categories.
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    categories: &'static [CategoryDescriptor],
}

static BUILTIN: LazyLock<Registry> = LazyLock::new(|| Registry::new(catalog::CATEGORIES));

impl Registry {
    /// Wrap a static category table.
    #[must_use]
    pub const fn new(categories: &'static [CategoryDescriptor]) -> Self {
        Self { categories }
    }

    /// The process-wide built-in catalog.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Categories in display order.
    #[must_use]
    pub fn categories(&self) -> &'static [CategoryDescriptor] {
        self.categories
    }

    #[must_use]
    pub fn category(&self, id: &str) -> Option<&'static CategoryDescriptor> {
        self.categories.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn component(
        &self,
        category_id: &str,
        component_id: &str,
    ) -> Option<&'static ComponentDescriptor> {
        self.category(category_id)?.component(component_id)
    }

    /// Components in one category, or in all of them when `category_id` is `None`.
    ///
    /// An unknown category counts as zero.
    #[must_use]
    pub fn count_components(&self, category_id: Option<&str>) -> usize {
        match category_id {
            Some(id) => self.category(id).map_or(0, |c| c.components.len()),
            None => self.categories.iter().map(|c| c.components.len()).sum(),
        }
    }

    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Every component with its category, in display order.
    pub fn entries(
        &self,
    ) -> impl Iterator<Item = (&'static CategoryDescriptor, &'static ComponentDescriptor)> {
        self.categories
            .iter()
            .flat_map(|category| category.components.iter().map(move |c| (category, c)))
    }

    /// Check the table against itself and against the available templates.
    #[must_use]
    pub fn validate(&self, templates: &TemplateSet) -> Vec<RegistryIssue> {
        let mut issues = Vec::new();
        let mut category_ids = HashSet::new();

        for category in self.categories {
            if !category_ids.insert(category.id) {
                issues.push(RegistryIssue::DuplicateCategory {
                    category: category.id,
                });
            }

            let mut component_ids = HashSet::new();
            for component in category.components {
                if !component_ids.insert(component.id) {
                    issues.push(RegistryIssue::DuplicateComponent {
                        category: category.id,
                        component: component.id,
                    });
                }
                if component.used_on.iter().any(|tag| tag.trim().is_empty()) {
                    issues.push(RegistryIssue::EmptyUsageTag {
                        category: category.id,
                        component: component.id,
                    });
                }
                if !templates.contains(component.template_path) {
                    issues.push(RegistryIssue::MissingTemplate {
                        category: category.id,
                        component: component.id,
                        template_path: component.template_path,
                    });
                }
            }
        }

        issues
    }

    /// Validate and log every issue as a warning. Never fails.
    pub fn log_issues(&self, templates: &TemplateSet) -> usize {
        let issues = self.validate(templates);
        for issue in &issues {
            tracing::warn!(name: "registry.issue", issue = %issue, "Component registry issue");
        }
        if !issues.is_empty() {
            tracing::info!(
                name: "registry.validated",
                issues = issues.len(),
                components = self.count_components(None),
                "Component registry validated with issues"
            );
        }
        issues.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::Markup;
    use crate::render::PropBag;

    fn blank(_: &PropBag) -> Markup {
        Markup::empty()
    }

    static DUPLICATED: &[CategoryDescriptor] = &[
        CategoryDescriptor {
            id: "cards",
            label: "Cards",
            icon: "square",
            components: &[
                ComponentDescriptor {
                    id: "card",
                    name: "Card",
                    template_path: "cards/card",
                    description: "",
                    props: &[],
                    used_on: &["feed", " "],
                },
                ComponentDescriptor {
                    id: "card",
                    name: "Card again",
                    template_path: "cards/card",
                    description: "",
                    props: &[],
                    used_on: &[],
                },
            ],
        },
        CategoryDescriptor {
            id: "cards",
            label: "More cards",
            icon: "square",
            components: &[],
        },
    ];

    #[test]
    fn builtin_catalog_shape() {
        let registry = Registry::builtin();
        assert_eq!(registry.category_count(), 12);
        assert_eq!(registry.count_components(None), 77);
        assert_eq!(registry.count_components(Some("layout")), 5);
        assert_eq!(registry.count_components(Some("nope")), 0);

        let ids: Vec<_> = registry.categories().iter().map(|c| c.id).collect();
        assert_eq!(ids.first(), Some(&"layout"));
        assert_eq!(ids.last(), Some(&"nexus"));
    }

    #[test]
    fn lookups_are_total() {
        let registry = Registry::builtin();
        let button = registry.component("buttons", "button").unwrap();
        assert_eq!(button.template_path, "buttons/button");
        assert!(registry.component("buttons", "missing").is_none());
        assert!(registry.component("missing", "button").is_none());
        assert!(registry.category("").is_none());
    }

    #[test]
    fn both_post_cards_are_kept() {
        let registry = Registry::builtin();
        let cards = registry.component("cards", "post-card").unwrap();
        let shared = registry.component("shared", "post-card").unwrap();
        assert_ne!(cards.template_path, shared.template_path);
        assert!(shared.is_shared());
        assert!(!cards.is_shared());
    }

    #[test]
    fn usage_badge_threshold() {
        let registry = Registry::builtin();
        let toggle = registry.component("forms", "toggle-switch").unwrap();
        assert_eq!(toggle.usage_count(), 4);
        assert!(toggle.shows_usage_badge());
        let timeline = registry.component("data", "timeline-item").unwrap();
        assert!(timeline.shows_usage_badge());
        let notification = registry.component("social", "notification-item").unwrap();
        assert!(!notification.shows_usage_badge());
    }

    #[test]
    fn entries_follow_display_order() {
        let registry = Registry::builtin();
        let (category, first) = registry.entries().next().unwrap();
        assert_eq!((category.id, first.id), ("layout", "hero"));
        assert_eq!(registry.entries().count(), 77);
    }

    #[test]
    fn validate_reports_every_kind_of_issue() {
        let registry = Registry::new(DUPLICATED);
        let templates = TemplateSet::new().with("cards/other", blank);
        let issues = registry.validate(&templates);

        assert!(issues.contains(&RegistryIssue::DuplicateCategory { category: "cards" }));
        assert!(issues.contains(&RegistryIssue::DuplicateComponent {
            category: "cards",
            component: "card"
        }));
        assert!(issues.contains(&RegistryIssue::EmptyUsageTag {
            category: "cards",
            component: "card"
        }));
        assert!(issues.contains(&RegistryIssue::MissingTemplate {
            category: "cards",
            component: "card",
            template_path: "cards/card"
        }));
    }

    #[test]
    fn builtin_validation_only_reports_unimplemented_templates() {
        let registry = Registry::builtin();
        let issues = registry.validate(&TemplateSet::builtin());
        assert!(!issues.is_empty());
        assert!(
            issues
                .iter()
                .all(|issue| matches!(issue, RegistryIssue::MissingTemplate { .. }))
        );
        assert!(issues.contains(&RegistryIssue::MissingTemplate {
            category: "cards",
            component: "listing-card",
            template_path: "cards/listing-card"
        }));
        assert!(!issues.iter().any(|issue| matches!(
            issue,
            RegistryIssue::MissingTemplate { component: "button", .. }
        )));
    }
}
