use predicates::prelude::*;
use std::fs;

use crate::common::{HextauiCommand, initialized_with_ui_registry};
use hextaui_cli::test_utils::{RegistryFixture, TestEnvironment};

#[test]
fn test_validate_configured_registry() {
    let env = initialized_with_ui_registry();

    env.hextaui()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("6 components, registry is valid"));
}

#[test]
fn test_validate_builtin_registry() {
    let env = TestEnvironment::new().unwrap();
    env.hextaui().arg("validate").assert().success().stdout(predicate::str::contains("✓"));
}

#[test]
fn test_validate_reports_cycles_as_warnings() {
    let env = TestEnvironment::new().unwrap();
    env.install_registry(&RegistryFixture::cyclic()).unwrap();

    env.hextaui()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Requirement cycle: Alpha -> Beta"));
}

#[test]
fn test_validate_broken_registry_file() {
    let env = TestEnvironment::new().unwrap();
    let path = env.temp_dir.path().join("broken.toml");
    fs::write(
        &path,
        r#"[[components]]
name = "Modal"
dependencies = ["Not A Package"]
requires = ["Button"]

[[components]]
name = "Modal"

[[components.files]]
path = "modal.tsx"
url = "modal.tsx"
"#,
    )
    .unwrap();

    env.hextaui()
        .args(["validate", path.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗"))
        .stdout(predicate::str::contains("Button"))
        .stderr(predicate::str::contains("Registry validation failed"));
}

#[test]
fn test_validate_unparseable_registry() {
    let env = TestEnvironment::new().unwrap();
    let path = env.temp_dir.path().join("garbage.toml");
    fs::write(&path, "[[components]\nname = ").unwrap();

    env.hextaui()
        .args(["validate", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid registry syntax"));
}
