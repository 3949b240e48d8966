use super::*;

#[test]
fn resolve_prefers_stored_override() {
    assert_eq!(
        resolve_base_url(Some("https://tunnel.example/"), Some("https://build.example")),
        "https://tunnel.example"
    );
}

#[test]
fn resolve_falls_back_to_build_time_then_default() {
    assert_eq!(resolve_base_url(None, Some("https://build.example//")), "https://build.example");
    assert_eq!(resolve_base_url(Some("   "), None), DEFAULT_API_URL);
    assert_eq!(resolve_base_url(None, None), DEFAULT_API_URL);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn api_base_url_has_no_trailing_slash() {
    assert!(!api_base_url().ends_with('/'));
}
