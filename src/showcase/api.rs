//! Read-only JSON view of the component registry.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;

use crate::AppState;
use crate::registry::CategoryDescriptor;

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub categories: &'static [CategoryDescriptor],
    pub total_components: usize,
}

pub async fn list_components(State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        categories: state.registry.categories(),
        total_components: state.registry.count_components(None),
    })
}

pub async fn component_detail(
    State(state): State<AppState>,
    Path((category, component)): Path<(String, String)>,
) -> Response {
    match state.registry.component(&category, &component) {
        Some(descriptor) => Json(descriptor).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "component not found" })),
        )
            .into_response(),
    }
}
