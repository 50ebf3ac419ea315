//! Shared helpers for running the `hextaui` binary in tests.

use assert_cmd::Command;
use hextaui_cli::test_utils::{RegistryFixture, TestEnvironment};

/// Build `hextaui` commands bound to a [`TestEnvironment`].
pub trait HextauiCommand {
    /// The binary, run in the project directory with the environment's config,
    /// colors off and progress indicators hidden.
    fn hextaui(&self) -> Command;
}

impl HextauiCommand for TestEnvironment {
    fn hextaui(&self) -> Command {
        let mut cmd = Command::cargo_bin("hextaui").unwrap();
        cmd.current_dir(&self.project_dir)
            .env("HEXTAUI_CONFIG", &self.config_path)
            .env("HEXTAUI_NO_PROGRESS", "1")
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }
}

/// An initialized project backed by the miniature UI registry.
pub fn initialized_with_ui_registry() -> TestEnvironment {
    let env = TestEnvironment::initialized().unwrap();
    env.install_registry(&RegistryFixture::ui()).unwrap();
    env
}
