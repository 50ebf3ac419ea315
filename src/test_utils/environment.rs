//! Temporary project and component source for tests.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::fixtures::RegistryFixture;
use crate::config::GlobalConfig;
use crate::project::{Framework, ProjectMarker};

/// A project directory, a directory of component sources, and a global
/// config pointing at a registry that serves those sources via `file://`.
pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub project_dir: PathBuf,
    pub source_dir: PathBuf,
    pub config_path: PathBuf,
}

impl TestEnvironment {
    /// A project with a bare `package.json`, not initialized.
    pub fn new() -> Result<Self> {
        super::init_test_logging(None);

        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().join("project");
        let source_dir = temp_dir.path().join("source");
        let config_path = temp_dir.path().join("config.toml");

        fs::create_dir_all(&project_dir)?;
        fs::create_dir_all(&source_dir)?;

        let env = Self {
            temp_dir,
            project_dir,
            source_dir,
            config_path,
        };
        env.write_package_json(r#"{"name": "test-app", "dependencies": {}}"#)?;
        Ok(env)
    }

    /// A project that looks like `hextaui init --framework nextjs` ran.
    pub fn initialized() -> Result<Self> {
        let env = Self::new()?;
        fs::create_dir_all(env.project_path("src/components/ui"))?;
        fs::create_dir_all(env.project_path("src/lib"))?;
        fs::write(env.project_path("src/lib/utils.ts"), "export {};\n")?;
        fs::write(env.project_path("src/lib/color-utils.ts"), "export {};\n")?;
        ProjectMarker::new(Framework::NextJs).save(&env.project_dir)?;
        Ok(env)
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_dir.join(relative)
    }

    /// Path of an installed component file.
    pub fn component_path(&self, file: &str) -> PathBuf {
        self.project_dir.join("src/components/ui").join(file)
    }

    pub fn write_package_json(&self, content: &str) -> Result<()> {
        fs::write(self.project_path("package.json"), content)
            .context("Failed to write package.json")
    }

    /// Base URL serving `source_dir`.
    pub fn source_url(&self) -> String {
        format!("file://{}/", self.source_dir.display())
    }

    /// Write source files for every component of `fixture`, its registry
    /// TOML, and a global config selecting that registry.
    pub fn install_registry(&self, fixture: &RegistryFixture) -> Result<PathBuf> {
        for component in &fixture.components {
            for file in &component.files {
                write_file(
                    &self.source_dir.join(&file.url),
                    &format!("// {} from registry\n", component.name),
                )?;
            }
        }

        let registry_path = self.temp_dir.path().join("registry.toml");
        fs::write(&registry_path, fixture.to_toml(&self.source_url()))?;

        let config = format!("registry = \"{}\"\n", registry_path.display());
        fs::write(&self.config_path, config)?;
        Ok(registry_path)
    }

    /// The config [`install_registry`](Self::install_registry) writes, in memory.
    pub fn global_config(&self) -> GlobalConfig {
        GlobalConfig {
            registry: Some(self.temp_dir.path().join("registry.toml").display().to_string()),
            ..GlobalConfig::default()
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
