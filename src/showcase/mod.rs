//! The component documentation site.
//!
//! - [`storybook`]: one component at a time, with props and variants
//! - [`gallery`]: every component on one page
//! - [`api`]: the registry as JSON
//! - [`samples`]: curated preview props

pub mod api;
pub mod gallery;
pub mod samples;
pub mod storybook;

use axum::{Router, routing::get};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/components", get(storybook::docs_page))
        .route("/components/showcase", get(gallery::showcase_page))
        .route("/api/components", get(api::list_components))
        .route(
            "/api/components/{category}/{component}",
            get(api::component_detail),
        )
}
