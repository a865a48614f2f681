//! Layered configuration.
//!
//! Precedence, lowest first: built-in defaults, the config file, `NEXUS_`
//! prefixed environment variables (`NEXUS_SERVER__PORT=8000`), then CLI flags
//! and their environment fallbacks.

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Require JWT authentication
    #[arg(long, env = "JWT_REQUIRED")]
    pub jwt_required: Option<bool>,

    /// Enable rate limiting
    #[arg(long, env = "RATE_LIMIT_ENABLED")]
    pub rate_limit_enabled: Option<bool>,

    /// Disable timeout middleware
    #[arg(long, env = "TIMEOUT_DISABLED")]
    pub timeout_disabled: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub tenant: TenantConfig,
    pub security: SecurityConfig,
    pub resilience: ResilienceConfig,
    pub assets: AssetsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

/// The community served by this process.
#[derive(Debug, Deserialize, Clone)]
pub struct TenantConfig {
    pub id: i64,
    pub name: String,
    /// Prefix for every tenant page, e.g. `/hub`. Empty serves from the root.
    pub base_path: String,
    /// Enabled modules, e.g. `volunteering`.
    pub features: Vec<String>,
}

impl TenantConfig {
    /// `base_path` with a leading slash and no trailing slash; empty for the root.
    #[must_use]
    pub fn normalized_base_path(&self) -> String {
        let trimmed = self.base_path.trim().trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SecurityConfig {
    pub jwt_required: bool,
    pub jwt_secret: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResilienceConfig {
    pub rate_limit_enabled: bool,
    pub timeout_disabled: bool,
    pub requests_per_second: f32,
    pub burst_size: u32,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssetsConfig {
    /// Directory served under `/assets`.
    pub dir: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        // 1. Defaults
        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("tenant.id", 1)?
            .set_default("tenant.name", "Project NEXUS")?
            .set_default("tenant.base_path", "")?
            .set_default("tenant.features", vec!["volunteering"])?
            .set_default("security.jwt_required", false)?
            .set_default("security.jwt_secret", "change-me")?
            .set_default("resilience.rate_limit_enabled", true)?
            .set_default("resilience.timeout_disabled", false)?
            .set_default("resilience.requests_per_second", 5.0)?
            .set_default("resilience.burst_size", 10)?
            .set_default("resilience.request_timeout_secs", 30)?
            .set_default("assets.dir", "assets")?;

        // 2. Config file: the named one is required, ./config.{yaml,toml} is not
        builder = match &cli.config {
            Some(path) => builder.add_source(File::with_name(path).required(true)),
            None => builder.add_source(File::with_name("config").required(false)),
        };

        // 3. Environment, e.g. NEXUS_TENANT__FEATURES=volunteering,wallet
        builder = builder.add_source(
            Environment::with_prefix("NEXUS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("tenant.features"),
        );

        // 4. CLI flags (clap already folded in their env fallbacks)
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", port)?;
        }
        if let Some(required) = cli.jwt_required {
            builder = builder.set_override("security.jwt_required", required)?;
        }
        if let Some(rl) = cli.rate_limit_enabled {
            builder = builder.set_override("resilience.rate_limit_enabled", rl)?;
        }
        if let Some(td) = cli.timeout_disabled {
            builder = builder.set_override("resilience.timeout_disabled", td)?;
        }

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tenant(base_path: &str) -> TenantConfig {
        TenantConfig {
            id: 1,
            name: "Test".into(),
            base_path: base_path.into(),
            features: Vec::new(),
        }
    }

    #[test]
    fn base_path_is_normalized() {
        assert_eq!(tenant("").normalized_base_path(), "");
        assert_eq!(tenant("/").normalized_base_path(), "");
        assert_eq!(tenant("hub/").normalized_base_path(), "/hub");
        assert_eq!(tenant("/hub").normalized_base_path(), "/hub");
    }
}
