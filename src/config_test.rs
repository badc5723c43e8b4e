use super::*;

#[test]
fn parse_port_defaults_when_absent() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_accepts_override() {
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
    assert_eq!(parse_port(Some(" 8080 ")).unwrap(), 8080);
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("not-a-port")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(raw) if raw == "not-a-port"));
}

#[test]
fn parse_port_rejects_out_of_range() {
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn parse_bool_recognizes_truthy_and_falsy_spellings() {
    for raw in ["1", "true", "YES", " on "] {
        assert_eq!(parse_bool(raw), Some(true), "raw = {raw:?}");
    }
    for raw in ["0", "false", "No", "off"] {
        assert_eq!(parse_bool(raw), Some(false), "raw = {raw:?}");
    }
}

#[test]
fn parse_bool_rejects_unknown_spellings() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

#[test]
fn default_assets_dir_points_into_crate() {
    assert!(default_assets_dir().ends_with("assets"));
}
