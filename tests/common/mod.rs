#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use jsonwebtoken::{EncodingKey, Header, encode};
use nexus_ui::AppState;
use nexus_ui::config::{
    AppConfig, AssetsConfig, ResilienceConfig, SecurityConfig, ServerConfig, TenantConfig,
};
use nexus_ui::security::claims::UserClaims;
use nexus_ui::server::build_router;
use nexus_ui::volunteering::InMemoryVolunteering;

pub const SECRET: &str = "test-secret";

pub fn config(base_path: &str, features: &[&str]) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            port: 0,
            host: "127.0.0.1".into(),
        },
        tenant: TenantConfig {
            id: 1,
            name: "Test Community".into(),
            base_path: base_path.into(),
            features: features.iter().map(ToString::to_string).collect(),
        },
        security: SecurityConfig {
            jwt_required: false,
            jwt_secret: SECRET.into(),
        },
        resilience: ResilienceConfig {
            rate_limit_enabled: false,
            timeout_disabled: false,
            requests_per_second: 5.0,
            burst_size: 10,
            request_timeout_secs: 30,
        },
        assets: AssetsConfig {
            dir: "assets".into(),
        },
    }
}

pub fn server_with(config: AppConfig) -> TestServer {
    server_with_source(config, InMemoryVolunteering::demo(1))
}

pub fn server_with_source(config: AppConfig, source: InMemoryVolunteering) -> TestServer {
    let state = AppState::new(Arc::new(config), Arc::new(source));
    TestServer::new(build_router(state)).expect("Failed to start test server")
}

pub fn server() -> TestServer {
    server_with(config("", &["volunteering"]))
}

/// A signed bearer token for a demo user.
pub fn token(user_id: i64) -> String {
    let claims = UserClaims {
        sub: user_id.to_string(),
        name: None,
        exp: 4_102_444_800, // 2100-01-01
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .expect("Failed to sign token")
}
