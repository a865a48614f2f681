use nexus_ui::config::AppConfig;
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        for key in [
            "NEXUS_SERVER__PORT",
            "NEXUS_TENANT__BASE_PATH",
            "NEXUS_TENANT__FEATURES",
            "NEXUS_SECURITY__JWT_REQUIRED",
            "CONFIG_FILE",
            "PORT",
            "JWT_REQUIRED",
            "RATE_LIMIT_ENABLED",
            "TIMEOUT_DISABLED",
        ] {
            env::remove_var(key);
        }
    }
}

fn load(args: &[&str]) -> AppConfig {
    let mut argv = vec!["nexus-ui"];
    argv.extend_from_slice(args);
    AppConfig::load_from_args(argv).expect("Failed to load config")
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = load(&[]);
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.tenant.id, 1);
    assert_eq!(config.tenant.normalized_base_path(), "");
    assert_eq!(config.tenant.features, vec!["volunteering".to_string()]);
    assert!(!config.security.jwt_required);
    assert!(config.resilience.rate_limit_enabled);
    assert_eq!(config.resilience.request_timeout_secs, 30);
    assert_eq!(config.assets.dir, "assets");
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("NEXUS_SERVER__PORT", "9090");
        env::set_var("NEXUS_TENANT__BASE_PATH", "/hub");
        env::set_var("NEXUS_TENANT__FEATURES", "volunteering,wallet");
    }

    let config = load(&[]);
    clear_env_vars();

    assert_eq!(config.server.port, 9090);
    assert_eq!(config.tenant.normalized_base_path(), "/hub");
    assert_eq!(
        config.tenant.features,
        vec!["volunteering".to_string(), "wallet".to_string()]
    );
}

#[test]
#[serial]
fn test_cli_beats_env() {
    clear_env_vars();
    unsafe {
        env::set_var("NEXUS_SERVER__PORT", "9090");
    }

    let config = load(&["--port", "4040", "--jwt-required", "true"]);
    clear_env_vars();

    assert_eq!(config.server.port, 4040);
    assert!(config.security.jwt_required);
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp config");
    writeln!(
        file,
        "server:\n  port: 7070\ntenant:\n  name: Riverside\n  features: []"
    )
    .expect("Failed to write temp config");

    let path = file.path().to_string_lossy().to_string();
    let config = load(&["--config", &path]);

    assert_eq!(config.server.port, 7070);
    assert_eq!(config.tenant.name, "Riverside");
    assert!(config.tenant.features.is_empty());
}

#[test]
#[serial]
fn test_missing_named_file_fails() {
    clear_env_vars();

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("absent.yaml").to_string_lossy().to_string();
    let result = AppConfig::load_from_args(["nexus-ui", "--config", path.as_str()]);
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_cwd_config_fallback() {
    clear_env_vars();

    let cwd_path = "config.yaml";
    fs::write(cwd_path, "server:\n  port: 6060\n").expect("Failed to write ./config.yaml");

    let result = AppConfig::load_from_args(["nexus-ui"]);
    fs::remove_file(cwd_path).expect("Failed to remove ./config.yaml");

    assert_eq!(result.expect("Failed to load config").server.port, 6060);
}
