use umeme::error::UmemeError;

#[test]
fn error_constructors() {
    assert!(matches!(UmemeError::config("x"), UmemeError::Config { .. }));
    assert!(matches!(UmemeError::io("x"), UmemeError::Io { .. }));
    assert!(matches!(UmemeError::web("x"), UmemeError::Web { .. }));
    assert!(matches!(
        UmemeError::serialization("x"),
        UmemeError::Serialization { .. }
    ));
    assert!(matches!(
        UmemeError::validation("f", "m"),
        UmemeError::Validation { .. }
    ));
}

#[test]
fn conversions_from_library_errors() {
    let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("a: [").unwrap_err();
    assert!(matches!(
        UmemeError::from(yaml_err),
        UmemeError::Serialization { .. }
    ));

    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert!(matches!(
        UmemeError::from(json_err),
        UmemeError::Serialization { .. }
    ));
}

#[test]
fn display_messages() {
    let e = UmemeError::validation("field", "bad");
    let s = format!("{}", e);
    assert!(s.contains("Validation error"));
    assert_eq!(format!("{}", UmemeError::web("bind")), "Web server error: bind");
}
