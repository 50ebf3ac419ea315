use predicates::prelude::*;
use std::fs;

use crate::common::HextauiCommand;
use hextaui_cli::project::{Framework, ProjectMarker};
use hextaui_cli::test_utils::TestEnvironment;

#[test]
fn test_init_scaffolds_project() {
    let env = TestEnvironment::new().unwrap();

    env.hextaui()
        .args(["init", "--skip-deps"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HextaUI is ready"))
        .stdout(predicate::str::contains("src/lib/utils.ts"));

    let utils = fs::read_to_string(env.project_path("src/lib/utils.ts")).unwrap();
    assert!(utils.contains("export function cn"));
    let color_utils = fs::read_to_string(env.project_path("src/lib/color-utils.ts")).unwrap();
    assert!(color_utils.contains("export"));
    assert!(env.project_path("src/components/ui").is_dir());

    let marker = ProjectMarker::load(&env.project_dir).unwrap().unwrap();
    assert!(marker.initialized);
    assert_eq!(marker.framework, Framework::NextJs);
}

#[test]
fn test_init_vite_prints_setup_notes() {
    let env = TestEnvironment::new().unwrap();

    env.hextaui()
        .args(["init", "--framework", "vite", "--skip-deps"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vite + React"))
        .stdout(predicate::str::contains("vite.config"));
}

#[test]
fn test_init_twice() {
    let env = TestEnvironment::new().unwrap();
    env.hextaui().args(["init", "--skip-deps"]).assert().success();

    env.hextaui()
        .args(["init", "--skip-deps"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"))
        .stderr(predicate::str::contains("--force"));

    env.hextaui().args(["init", "--skip-deps", "--force"]).assert().success();
}

#[test]
fn test_init_then_add() {
    let env = TestEnvironment::new().unwrap();
    env.install_registry(&hextaui_cli::test_utils::RegistryFixture::ui()).unwrap();

    env.hextaui().args(["init", "--skip-deps"]).assert().success();
    env.hextaui().args(["add", "Modal", "--skip-deps"]).assert().success();

    assert!(env.component_path("modal.tsx").exists());
    assert!(env.component_path("button.tsx").exists());
}
