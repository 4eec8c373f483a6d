use std::fs;

use debug_print::string_table::{LoadError, StringTable, ALL_KEYS};
use tempfile::tempdir;

#[test]
fn test_built_in_defaults_are_present() {
    let table = StringTable::new();
    assert_eq!(table.get("value"), "value");
    assert_eq!(table.get("variable"), "variable");
    assert_eq!(table.get("pairSeparator"), ": ");
    assert!(table.get("separator").ends_with('\n'));
}

#[test]
fn test_unknown_key_is_echoed_back() {
    let table = StringTable::new();
    assert_eq!(table.get("no_such_key"), "no_such_key");
}

// The echo-key policy silently masks typos, so the real guard is here: every
// key the library looks up must have a built-in entry.
#[test]
fn test_every_known_key_has_a_built_in_label() {
    let table = StringTable::new();
    for key in ALL_KEYS {
        assert!(table.contains(key), "missing built-in label for key {key:?}");
    }
}

#[test]
fn test_load_overrides_only_present_keys() {
    let dir = tempdir().expect("create temp dir");
    fs::write(
        dir.path().join("ja.json"),
        r#"{ "value": "値 ", "variable": "変数" }"#,
    )
    .expect("write resource");

    let mut table = StringTable::new();
    table.load_language("ja", dir.path()).expect("load resource");

    assert_eq!(table.get("value"), "値 ");
    assert_eq!(table.get("variable"), "変数");
    // Keys absent from the resource keep their built-in values.
    assert_eq!(table.get("pairSeparator"), ": ");
    assert_eq!(table.get("errorDialogTitle"), "Debug Message");
}

#[test]
fn test_missing_resource_is_an_io_error_and_table_survives() {
    let dir = tempdir().expect("create temp dir");
    let mut table = StringTable::new();

    let result = table.load_language("de", dir.path());
    assert!(matches!(result, Err(LoadError::Io(_))));
    assert_eq!(table.get("value"), "value");
}

#[test]
fn test_malformed_resource_is_a_parse_error_and_table_survives() {
    let dir = tempdir().expect("create temp dir");
    fs::write(dir.path().join("fr.json"), "this is not json").expect("write resource");

    let mut table = StringTable::new();
    let result = table.load_language("fr", dir.path());
    assert!(matches!(result, Err(LoadError::Parse(_))));
    assert_eq!(table.get("value"), "value");
}

#[test]
fn test_set_replaces_a_single_label() {
    let mut table = StringTable::new();
    table.set("value", "Wert");
    assert_eq!(table.get("value"), "Wert");
    assert_eq!(table.get("variable"), "variable");
}

#[test]
fn test_reset_restores_built_ins() {
    let mut table = StringTable::new();
    table.set("value", "Wert");
    table.reset();
    assert_eq!(table.get("value"), "value");
}

#[test]
fn test_resource_may_introduce_new_keys() {
    let dir = tempdir().expect("create temp dir");
    fs::write(dir.path().join("en.json"), r#"{ "extraLabel": "extra" }"#)
        .expect("write resource");

    let mut table = StringTable::new();
    table.load_language("en", dir.path()).expect("load resource");
    assert_eq!(table.get("extraLabel"), "extra");
}
