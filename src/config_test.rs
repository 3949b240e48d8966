use super::*;

#[test]
fn parse_port_defaults_when_absent_or_blank() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("")), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("   ")), Ok(DEFAULT_PORT));
}

#[test]
fn parse_port_accepts_valid_values() {
    assert_eq!(parse_port(Some("8080")), Ok(8080));
    assert_eq!(parse_port(Some(" 3001 ")), Ok(3001));
}

#[test]
fn parse_port_rejects_garbage_and_overflow() {
    for raw in ["http", "-1", "70000"] {
        match parse_port(Some(raw)) {
            Err(ConfigError::InvalidPort { value, .. }) => assert_eq!(value, raw),
            other => panic!("expected InvalidPort for {raw}, got {other:?}"),
        }
    }
}

#[test]
fn non_blank_trims_and_drops_empty() {
    assert_eq!(non_blank(None), None);
    assert_eq!(non_blank(Some("  ".to_owned())), None);
    assert_eq!(non_blank(Some(" site ".to_owned())), Some("site".to_owned()));
}

#[test]
fn apply_overrides_addr_and_site_root() {
    let config = HostConfig { port: 4100, site_root: Some("dist".to_owned()) };
    let options = config.apply(LeptosOptions::builder().output_name("financial-analyst").build());

    assert_eq!(options.site_addr.port(), 4100);
    assert_eq!(options.site_root.as_ref(), "dist");
}

#[test]
fn apply_keeps_site_root_without_override() {
    let base = LeptosOptions::builder().output_name("financial-analyst").build();
    let original_root = base.site_root.clone();
    let config = HostConfig { port: DEFAULT_PORT, site_root: None };

    let options = config.apply(base);
    assert_eq!(options.site_root, original_root);
    assert_eq!(options.site_addr, config.addr());
}

#[test]
fn config_error_messages() {
    let err = ConfigError::InvalidPort { value: "x".to_owned(), reason: "bad".to_owned() };
    assert_eq!(err.to_string(), "invalid PORT 'x': bad");
    assert_eq!(ConfigError::Leptos("missing".to_owned()).to_string(), "leptos configuration: missing");
}
