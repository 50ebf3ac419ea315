use predicates::prelude::*;
use std::fs;

use crate::common::{HextauiCommand, initialized_with_ui_registry};
use hextaui_cli::test_utils::{RegistryFixture, TestEnvironment};

/// Requirements are installed alongside the requested component
#[test]
fn test_add_installs_required_components() {
    let env = initialized_with_ui_registry();

    env.hextaui()
        .args(["add", "colorpicker", "--skip-deps"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Adding ColorPicker"))
        .stdout(predicate::str::contains("Also adding required components: Button, Input"));

    for file in ["button.tsx", "input.tsx", "color-picker.tsx"] {
        assert!(env.component_path(file).exists(), "{file} was not written");
    }
    assert_eq!(
        fs::read_to_string(env.component_path("input.tsx")).unwrap(),
        "// Input from registry\n"
    );
    assert!(!env.component_path("modal.tsx").exists());
}

/// Shared requirements are downloaded once
#[test]
fn test_add_multiple_with_shared_requirement() {
    let env = initialized_with_ui_registry();

    env.hextaui()
        .args(["add", "Modal", "ColorPicker", "--skip-deps"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Adding Modal, ColorPicker"))
        .stdout(predicate::str::contains("Also adding required components: Button, Input"))
        .stdout(predicate::str::contains("Added 4 component(s)"));
}

/// Dry run prints the plan and the package command without writing anything
#[test]
fn test_add_dry_run() {
    let env = initialized_with_ui_registry();

    env.hextaui()
        .args(["add", "modal", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("src/components/ui/button.tsx"))
        .stdout(predicate::str::contains("src/components/ui/modal.tsx"))
        .stdout(predicate::str::contains(
            "Would run: npm install @radix-ui/react-slot @radix-ui/react-dialog",
        ));

    assert!(!env.component_path("button.tsx").exists());
    assert!(!env.component_path("modal.tsx").exists());
}

/// Packages already in package.json are not installed again
#[test]
fn test_add_dry_run_skips_declared_packages() {
    let env = initialized_with_ui_registry();
    env.write_package_json(r#"{"dependencies": {"@radix-ui/react-slot": "^1.0.0"}}"#).unwrap();
    fs::write(env.project_path("pnpm-lock.yaml"), "").unwrap();

    env.hextaui()
        .args(["add", "Modal", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: pnpm add @radix-ui/react-dialog"));
}

/// Unknown names fail before anything is downloaded, with suggestions
#[test]
fn test_add_unknown_component() {
    let env = initialized_with_ui_registry();

    env.hextaui()
        .args(["add", "Buton", "Modal"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown component(s): Buton"))
        .stderr(predicate::str::contains("Did you mean: Button?"));

    assert!(!env.component_path("modal.tsx").exists());
}

/// A registry entry requiring a missing component aborts the whole add
#[test]
fn test_add_with_dangling_requirement() {
    let env = TestEnvironment::initialized().unwrap();
    env.install_registry(&RegistryFixture::ui().component("Form", &["Button", "Missing"], &[]))
        .unwrap();

    env.hextaui()
        .args(["add", "Form", "--skip-deps"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Component \"Missing\" not found"));

    assert!(!env.component_path("button.tsx").exists());
}

/// Cyclic requirements still install every member once
#[test]
fn test_add_cyclic_components() {
    let env = TestEnvironment::initialized().unwrap();
    env.install_registry(&RegistryFixture::cyclic()).unwrap();

    env.hextaui()
        .args(["add", "alpha", "--skip-deps"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Also adding required components: Beta"));

    assert!(env.component_path("alpha.tsx").exists());
    assert!(env.component_path("beta.tsx").exists());
}

#[test]
fn test_add_requires_init() {
    let env = TestEnvironment::new().unwrap();
    env.install_registry(&RegistryFixture::ui()).unwrap();

    env.hextaui()
        .args(["add", "Button"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"))
        .stderr(predicate::str::contains("hextaui init"));
}

/// Running from a subdirectory installs into the project root
#[test]
fn test_add_from_subdirectory() {
    let env = initialized_with_ui_registry();
    let nested = env.project_path("src/app");
    fs::create_dir_all(&nested).unwrap();

    env.hextaui()
        .current_dir(&nested)
        .args(["add", "tooltip", "--skip-deps"])
        .assert()
        .success();

    assert!(env.component_path("tooltip.tsx").exists());
    assert!(!nested.join("src").exists());
}

/// Existing files are kept unless --overwrite is given
#[test]
fn test_add_existing_files() {
    let env = initialized_with_ui_registry();
    fs::write(env.component_path("button.tsx"), "// mine").unwrap();

    env.hextaui()
        .args(["add", "Button", "--skip-deps"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Button (already present)"))
        .stdout(predicate::str::contains("--overwrite"));
    assert_eq!(fs::read_to_string(env.component_path("button.tsx")).unwrap(), "// mine");

    env.hextaui().args(["add", "Button", "--skip-deps", "--overwrite"]).assert().success();
    assert_eq!(
        fs::read_to_string(env.component_path("button.tsx")).unwrap(),
        "// Button from registry\n"
    );
}

/// --skip-deps prints the command to run by hand
#[test]
fn test_add_skip_deps_prints_manual_command() {
    let env = initialized_with_ui_registry();

    env.hextaui()
        .args(["add", "avatar", "--skip-deps"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "npm install @radix-ui/react-tooltip @radix-ui/react-avatar",
        ));
}
