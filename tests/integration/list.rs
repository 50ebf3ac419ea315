use predicates::prelude::*;

use crate::common::{HextauiCommand, initialized_with_ui_registry};

#[test]
fn test_list_table() {
    let env = initialized_with_ui_registry();

    env.hextaui()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("ColorPicker"))
        .stdout(predicate::str::contains("(requires Button, Input)"))
        .stdout(predicate::str::contains("6 component(s)"));
}

#[test]
fn test_list_json_is_sorted() {
    let env = initialized_with_ui_registry();

    let output = env.hextaui().args(["list", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let listings: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> =
        listings.as_array().unwrap().iter().map(|l| l["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Avatar", "Button", "ColorPicker", "Input", "Modal", "Tooltip"]);
    assert_eq!(listings[3]["requires"], serde_json::json!([]));
}

#[test]
fn test_list_yaml_with_search() {
    let env = initialized_with_ui_registry();

    env.hextaui()
        .args(["ls", "--format", "yaml", "--search", "modal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name: Modal"))
        .stdout(predicate::str::contains("Button").and(predicate::str::contains("Tooltip").not()));
}

#[test]
fn test_list_search_without_match() {
    let env = initialized_with_ui_registry();

    env.hextaui()
        .args(["list", "--search", "carousel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No components match \"carousel\""));
}

#[test]
fn test_list_rejects_unknown_format() {
    let env = initialized_with_ui_registry();
    env.hextaui().args(["list", "--format", "xml"]).assert().failure();
}

/// Without a config file the built-in catalog is listed
#[test]
fn test_list_builtin_registry() {
    let env = hextaui_cli::test_utils::TestEnvironment::new().unwrap();

    env.hextaui()
        .args(["list", "--search", "picker"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ColorPicker"))
        .stdout(predicate::str::contains("DatePicker"));
}
