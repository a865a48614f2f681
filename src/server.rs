use axum::{
    Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Duration;

use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use tracing::info;

use crate::AppState;
use crate::config::AppConfig;
use crate::pages;
use crate::security;
use crate::showcase;
use crate::volunteering::InMemoryVolunteering;

/// Effectively unbounded, so the timeout layer can stay in place when disabled.
const DISABLED_TIMEOUT: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Answer 408 when the rest of the stack takes longer than `limit`.
async fn request_timeout(State(limit): State<Duration>, req: Request, next: Next) -> Response {
    match tokio::time::timeout(limit, next.run(req)).await {
        Ok(res) => res,
        Err(_) => (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response(),
    }
}

/// Build the full application router.
///
/// Tenant pages live under the tenant base path; the storybook, the gallery,
/// the registry API and the assets are served from the root.
pub fn build_router(state: AppState) -> Router {
    let config = Arc::clone(&state.config);
    let base_path = config.tenant.normalized_base_path();

    let tenant_pages = pages::volunteering::router();
    let app = if base_path.is_empty() {
        showcase::router().merge(tenant_pages)
    } else {
        showcase::router().nest(&base_path, tenant_pages)
    };

    let timeout_duration = if config.resilience.timeout_disabled {
        DISABLED_TIMEOUT
    } else {
        Duration::from_secs(config.resilience.request_timeout_secs)
    };

    app.nest_service("/assets", ServeDir::new(&config.assets.dir))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            security::middleware::auth_middleware,
        ))
        .layer(axum::middleware::from_fn_with_state(
            timeout_duration,
            request_timeout,
        ))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            security::rate_limit::rate_limit_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    info!(
        name: "tenant.config.loaded",
        tenant_id = config.tenant.id,
        tenant = %config.tenant.name,
        base_path = %config.tenant.normalized_base_path(),
        features = ?config.tenant.features,
        "Tenant configuration loaded"
    );

    let volunteering = Arc::new(InMemoryVolunteering::demo(config.tenant.id));
    let state = AppState::new(Arc::clone(&config), volunteering);
    state.registry.log_issues(state.renderer.templates());

    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use axum_test::TestServer;

    fn slow_app(limit: Duration) -> TestServer {
        let app = Router::new()
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    "done"
                }),
            )
            .route("/fast", get(|| async { "done" }))
            .layer(axum::middleware::from_fn_with_state(limit, request_timeout));
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn slow_requests_time_out() {
        let server = slow_app(Duration::from_millis(50));

        let response = server.get("/slow").await;
        response.assert_status(StatusCode::REQUEST_TIMEOUT);
        assert_eq!(response.text(), "Request timed out");

        server.get("/fast").await.assert_status_ok();
    }

    #[tokio::test]
    async fn disabled_timeout_lets_requests_finish() {
        let server = slow_app(DISABLED_TIMEOUT);
        assert_eq!(server.get("/fast").await.text(), "done");
    }
}
