use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_paths_match_route_table() {
    let config = AuthConfig::default();
    assert_eq!(config.login_path, "/login");
    assert_eq!(config.home_path, "/");
    assert_eq!(config.api_base, "");
    assert_eq!(config.storage_key, "storefront_session_token");
}

#[test]
fn endpoint_is_same_origin_by_default() {
    let config = AuthConfig::default();
    assert_eq!(config.endpoint("login"), "/api/auth/login");
    assert_eq!(config.endpoint("session"), "/api/auth/session");
}

// =============================================================
// Overrides
// =============================================================

#[test]
fn overrides_replace_defaults() {
    let config = AuthConfig::from_overrides(Some("https://api.example.com/"), Some("/entrar"), Some("/inicio"));
    assert_eq!(config.api_base, "https://api.example.com");
    assert_eq!(config.login_path, "/entrar");
    assert_eq!(config.home_path, "/inicio");
    assert_eq!(config.endpoint("logout"), "https://api.example.com/api/auth/logout");
}

#[test]
fn blank_path_overrides_fall_back_to_defaults() {
    let config = AuthConfig::from_overrides(None, Some("  "), Some(""));
    assert_eq!(config, AuthConfig::default());
}
