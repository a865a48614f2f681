//! Nexus UI
//!
//! A typed component library for the Nexus community platform, the
//! documentation site that browses it, and the volunteering pages built on it.
//!
//! # Architecture
//!
//! - **Markup**: components build an escaped-by-construction tree
//! - **Renderer**: template paths resolve to component functions fed by prop bags
//! - **Registry**: static catalog of categories, components and their props
//! - **Server**: Axum routes for the storybook, the gallery and tenant pages
//!
//! # Modules
//!
//! - [`markup`]: markup tree and escaping helpers
//! - [`render`]: template set, renderer and prop bags
//! - [`components`]: the component library
//! - [`registry`]: component catalog and its validation
//! - [`showcase`]: storybook, gallery and registry API
//! - [`pages`]: document shells and volunteering pages
//! - [`volunteering`]: volunteering records and their data source
//! - [`security`]: request identity, authentication and rate limiting

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::unused_async)]

pub mod components;
pub mod config;
pub mod error;
pub mod markup;
pub mod pages;
pub mod registry;
pub mod render;
pub mod security;
pub mod server;
pub mod showcase;
pub mod volunteering;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::registry::Registry;
use crate::render::{Renderer, TemplateSet};
use crate::security::rate_limit::AppRateLimiter;
use crate::volunteering::VolunteeringSource;

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Global configuration.
    pub config: Arc<AppConfig>,
    /// Component catalog browsed by the storybook.
    pub registry: &'static Registry,
    /// Renderer over the built-in templates.
    pub renderer: Renderer,
    /// Volunteering records for the tenant pages.
    pub volunteering: Arc<dyn VolunteeringSource>,
    /// Global rate limiter.
    pub rate_limiter: Arc<AppRateLimiter>,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>, volunteering: Arc<dyn VolunteeringSource>) -> Self {
        let rate_limiter = Arc::new(AppRateLimiter::new(
            config.resilience.requests_per_second,
            config.resilience.burst_size,
        ));
        Self {
            config,
            registry: Registry::builtin(),
            renderer: Renderer::new(TemplateSet::builtin()),
            volunteering,
            rate_limiter,
        }
    }
}
