//! End-to-end runs of the fieldcheck binary

use crate::common::{self, CANONICAL_RECORD, VALID_RECORD};

use tempfile::TempDir;

#[test]
fn test_validate_valid_record_exits_zero() {
    let tmp = TempDir::new().unwrap();
    common::write_file(tmp.path(), "ok.json", VALID_RECORD);

    let output = common::run_fieldcheck(tmp.path(), &["validate", "ok.json"]).unwrap();
    let stdout = common::stdout(&output);

    assert!(output.status.success(), "stderr: {}", common::stderr(&output));
    assert!(stdout.contains("✓ ok.json#0"));
    assert!(stdout.contains("1 record: 1 valid, 0 invalid"));
}

#[test]
fn test_validate_canonical_record_reports_name() {
    let tmp = TempDir::new().unwrap();
    common::write_file(tmp.path(), "user.json", CANONICAL_RECORD);

    let output = common::run_fieldcheck(tmp.path(), &["validate", "user.json"]).unwrap();
    let stdout = common::stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("✗ user.json#0"));
    assert!(stdout.contains("invalid_name"));
    assert!(!stdout.contains("invalid_secret"));
    assert!(!stdout.contains("invalid_contact_address"));
}

#[test]
fn test_validate_yaml_list_as_json() {
    let tmp = TempDir::new().unwrap();
    common::write_file(
        tmp.path(),
        "people.yaml",
        r#"
- id: 1
  name: Alice
  age: 30
  password: "123456789"
  email: alice@example.com
- id: 0
  name: B
  age: 0
  password: short
  email: not-an-email
"#,
    );

    let output =
        common::run_fieldcheck(tmp.path(), &["validate", "people.yaml", "--format", "json"])
            .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["summary"]["records"], 2);
    assert_eq!(value["summary"]["valid"], 1);
    let kinds: Vec<&str> = value["records"][1]["violations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["kind"].as_str().unwrap())
        .collect();
    assert_eq!(
        kinds,
        vec![
            "invalid_identifier",
            "invalid_name",
            "invalid_age",
            "invalid_secret",
            "invalid_contact_address"
        ]
    );
}

#[test]
fn test_validate_compare_with_baseline() {
    let tmp = TempDir::new().unwrap();
    common::write_file(tmp.path(), "user.json", CANONICAL_RECORD);

    let output = common::run_fieldcheck(
        tmp.path(),
        &["validate", "user.json", "--compare", "--format", "json"],
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(value["summary"]["mismatches"], 0);
    assert!(!common::stderr(&output).contains("baseline reported"));
}

#[test]
fn test_quiet_hides_valid_records() {
    let tmp = TempDir::new().unwrap();
    common::write_file(tmp.path(), "ok.json", VALID_RECORD);
    common::write_file(tmp.path(), "bad.json", CANONICAL_RECORD);

    let output =
        common::run_fieldcheck(tmp.path(), &["--quiet", "validate", "ok.json", "bad.json"])
            .unwrap();
    let stdout = common::stdout(&output);

    assert!(!stdout.contains("ok.json#0"));
    assert!(stdout.contains("bad.json#0"));
}

#[test]
fn test_missing_file_is_an_error() {
    let tmp = TempDir::new().unwrap();

    let output = common::run_fieldcheck(tmp.path(), &["validate", "missing.json"]).unwrap();

    assert!(!output.status.success());
    assert!(common::stderr(&output).contains("missing.json"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    common::write_file(tmp.path(), "broken.json", "{ not json");

    let output = common::run_fieldcheck(tmp.path(), &["validate", "broken.json"]).unwrap();

    assert!(!output.status.success());
    assert!(common::stderr(&output).contains("broken.json"));
}

#[test]
fn test_schema_command_prints_schema() {
    let tmp = TempDir::new().unwrap();

    let output = common::run_fieldcheck(tmp.path(), &["schema"]).unwrap();
    assert!(output.status.success());

    let schema: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(schema["properties"]["name"]["minLength"], 2);
    assert_eq!(schema["properties"]["password"]["maxLength"], 100);
}

#[test]
fn test_version_command() {
    let tmp = TempDir::new().unwrap();

    let output = common::run_fieldcheck(tmp.path(), &["version", "--verbose"]).unwrap();
    let stdout = common::stdout(&output);

    assert!(output.status.success());
    assert!(stdout.starts_with("fieldcheck "));
    assert!(stdout.contains("commit:"));
}

#[test]
fn test_completion_command() {
    let tmp = TempDir::new().unwrap();

    let output = common::run_fieldcheck(tmp.path(), &["completion", "bash"]).unwrap();

    assert!(output.status.success());
    assert!(common::stdout(&output).contains("fieldcheck"));
}

#[test]
fn test_validate_yaml_with_unquoted_numbers() {
    let tmp = TempDir::new().unwrap();
    common::write_file(
        tmp.path(),
        "user.yaml",
        "id: 1\nname: \"\"\nage: 30\npassword: 123456789\nemail: user@mail.ru\n",
    );

    let output = common::run_fieldcheck(tmp.path(), &["validate", "user.yaml"]).unwrap();
    let stdout = common::stdout(&output);

    assert_eq!(output.status.code(), Some(1), "stderr: {}", common::stderr(&output));
    assert!(stdout.contains("invalid_name"));
    assert!(!stdout.contains("invalid_secret"));
}

#[test]
fn test_bad_field_type_names_field() {
    let tmp = TempDir::new().unwrap();
    common::write_file(tmp.path(), "user.yaml", "id: 1\nname: [a, b]\n");

    let output = common::run_fieldcheck(tmp.path(), &["validate", "user.yaml"]).unwrap();

    assert!(!output.status.success());
    assert!(common::stderr(&output).contains("`name`"));
}
