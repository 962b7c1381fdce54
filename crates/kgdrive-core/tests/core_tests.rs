//! Tests for kgdrive-core: input/record types, errors, config loading

use kgdrive_core::*;
use std::io::Write;

// ===========================================================================
// InputText
// ===========================================================================

#[test]
fn input_text_default_is_nlp_sentence() {
    let text = InputText::default();
    assert_eq!(
        text.as_str(),
        "Natural language processing (NLP) is a subfield of computer science."
    );
    assert!(!text.is_empty());
}

#[test]
fn input_text_empty_is_invalid() {
    let err = InputText::new("").unwrap_err();
    assert!(err.to_string().contains("invalid input"));
}

#[test]
fn input_text_deserialize_validates() {
    let ok: InputText = serde_json::from_str(r#""hello""#).unwrap();
    assert_eq!(ok.as_str(), "hello");
    assert!(serde_json::from_str::<InputText>(r#""   ""#).is_err());
}

// ===========================================================================
// ResultRecord
// ===========================================================================

#[test]
fn result_record_is_transparent_json() {
    let r = ResultRecord::new(serde_json::json!({"nodes": 3, "edges": 2}));
    let json = serde_json::to_string(&r).unwrap();
    assert_eq!(json, r#"{"edges":2,"nodes":3}"#);
    let back: ResultRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, r);
}

#[test]
fn result_record_display() {
    assert_eq!(ResultRecord::from("plain text").to_string(), "plain text");
    assert_eq!(ResultRecord::new(serde_json::json!(42)).to_string(), "42");
    assert_eq!(ResultRecord::new(serde_json::Value::Null).to_string(), "null");
}

// ===========================================================================
// Operation / Error
// ===========================================================================

#[test]
fn operation_display_and_serde() {
    assert_eq!(Operation::Add.to_string(), "add");
    assert_eq!(Operation::Cognify.to_string(), "cognify");
    assert_eq!(serde_json::to_string(&Operation::Cognify).unwrap(), r#""cognify""#);
}

#[test]
fn external_error_names_operation() {
    let err = Error::external(Operation::Add, "connection refused");
    assert_eq!(err.to_string(), "add failed: connection refused");
    assert_eq!(err.operation(), Some(Operation::Add));
    assert_eq!(Error::AlreadyRun.operation(), None);
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
    let err: Error = io.into();
    assert!(matches!(err, Error::IoError(_)));
}

// ===========================================================================
// Config
// ===========================================================================

#[test]
fn config_defaults() {
    let c = KgdriveConfig::default();
    assert_eq!(c.graph.base_url, "http://localhost:8000");
    assert_eq!(c.graph.dataset, "main_dataset");
    assert_eq!(c.driver.record_log_repeat, 2);
    assert_eq!(c.driver.text, DEFAULT_INPUT_TEXT);
    assert_eq!(c.logging.filter, "kgdrive=info");
    assert!(!c.logging.json);
}

#[test]
fn config_partial_toml_keeps_defaults() {
    let c = KgdriveConfig::from_toml(
        r#"
        [graph]
        base_url = "http://kg.internal:9000"

        [driver]
        record_log_repeat = 1
        "#,
    )
    .unwrap();
    assert_eq!(c.graph.base_url, "http://kg.internal:9000");
    assert_eq!(c.graph.dataset, "main_dataset");
    assert_eq!(c.driver.record_log_repeat, 1);
    assert_eq!(c.driver.text, DEFAULT_INPUT_TEXT);
}

#[test]
fn config_toml_roundtrip() {
    let mut c = KgdriveConfig::default();
    c.graph.dataset = "papers".into();
    let back = KgdriveConfig::from_toml(&c.to_toml()).unwrap();
    assert_eq!(back, c);
}

#[test]
fn config_load_missing_file_uses_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let c = KgdriveConfig::load(&tmp.path().join("absent.toml")).unwrap();
    assert_eq!(c, KgdriveConfig::default());
}

#[test]
fn config_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[driver]\ntext = \"Graphs have edges.\"").unwrap();
    let c = KgdriveConfig::load(file.path()).unwrap();
    assert_eq!(c.input_text().unwrap().as_str(), "Graphs have edges.");
}

#[test]
fn config_load_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[graph\nbase_url = ").unwrap();
    let err = KgdriveConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, Error::ConfigError(_)));
}

#[test]
fn config_empty_text_fails_validation() {
    let c = KgdriveConfig::from_toml("[driver]\ntext = \"\"").unwrap();
    assert!(matches!(c.input_text(), Err(Error::InvalidInput(_))));
}

#[test]
fn config_api_key_from_file_wins() {
    let mut c = KgdriveConfig::default();
    c.graph.api_key = Some("from-file".into());
    assert_eq!(c.api_key().as_deref(), Some("from-file"));
}

// Both env cases share one test so parallel tests never race on the variable.
#[test]
fn config_api_key_falls_back_to_env() {
    std::env::set_var(config::API_KEY_ENV, "from-env");

    let unset = KgdriveConfig::default();
    assert_eq!(unset.api_key().as_deref(), Some("from-env"));

    let mut empty = KgdriveConfig::default();
    empty.graph.api_key = Some(String::new());
    assert_eq!(empty.api_key().as_deref(), Some("from-env"));

    std::env::set_var(config::API_KEY_ENV, "");
    assert_eq!(unset.api_key(), None);

    std::env::remove_var(config::API_KEY_ENV);
    assert_eq!(empty.api_key(), None);
}

#[test]
fn expand_tilde_leaves_absolute_paths() {
    assert_eq!(
        config::expand_tilde("/etc/kgdrive.toml"),
        std::path::PathBuf::from("/etc/kgdrive.toml")
    );
}
