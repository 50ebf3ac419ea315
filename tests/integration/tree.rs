use predicates::prelude::*;

use crate::common::{HextauiCommand, initialized_with_ui_registry};

#[test]
fn test_tree_shows_requirements_and_order() {
    let env = initialized_with_ui_registry();

    env.hextaui()
        .args(["tree", "colorpicker"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "ColorPicker\n├── Button\n└── Input\n\nInstall order: Button, Input, ColorPicker\n",
        ));
}

#[test]
fn test_tree_inverted() {
    let env = initialized_with_ui_registry();

    env.hextaui()
        .args(["tree", "Button", "--invert"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Button\n├── Modal\n└── ColorPicker\n"));
}

#[test]
fn test_tree_unknown_component() {
    let env = initialized_with_ui_registry();

    env.hextaui()
        .args(["tree", "Tooltp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Did you mean: Tooltip?"));
}

/// The built-in catalog: Avatar pulls in Tooltip
#[test]
fn test_tree_builtin_avatar() {
    let env = hextaui_cli::test_utils::TestEnvironment::new().unwrap();

    env.hextaui()
        .args(["tree", "avatar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Install order: Tooltip, Avatar"));
}
