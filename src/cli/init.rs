//! Set up HextaUI in an existing front-end project.
//!
//! `init` finds the nearest `package.json`, creates the components and
//! utilities directories, writes `utils.ts` and `color-utils.ts`, installs the
//! framework's base packages and finally writes the `.hextaui` marker that
//! `add` checks for.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::start_dir;
use crate::config::GlobalConfig;
use crate::core::HextaError;
use crate::package_manager::{PackageManager, install_packages};
use crate::project::{Framework, Project, ProjectMarker, check_missing_packages, find_project_root};
use crate::utils::fs::display_relative;
use crate::utils::{atomic_write, ensure_dir, spinner_with_message};

const UTILS_TEMPLATE: &str = include_str!("../../templates/utils.ts");
const COLOR_UTILS_TEMPLATE: &str = include_str!("../../templates/color-utils.ts");

#[derive(Args)]
pub struct InitCommand {
    /// Directory inside the project (defaults to the current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Framework used by the project
    #[arg(short, long, value_enum, default_value_t = Framework::NextJs)]
    framework: Framework,

    /// Re-initialize and rewrite the utility files
    #[arg(long)]
    force: bool,

    /// Do not install npm packages
    #[arg(long)]
    skip_deps: bool,
}

impl InitCommand {
    /// Initialize `root` without `--force`, as `add --init` does.
    pub(crate) fn for_project(root: PathBuf, framework: Framework, skip_deps: bool) -> Self {
        Self {
            path: Some(root),
            framework,
            force: false,
            skip_deps,
        }
    }

    pub async fn execute(self, global: &GlobalConfig) -> Result<()> {
        let root = find_project_root(&start_dir(self.path.clone())?)?;

        if !self.force && ProjectMarker::load(&root)?.is_some() {
            return Err(HextaError::AlreadyInitialized {
                path: root.display().to_string(),
            }
            .into());
        }

        let project = Project::new(root, self.framework);
        println!("Initializing HextaUI for {}", self.framework.to_string().cyan());

        scaffold(&project, self.force)?;

        if self.skip_deps {
            println!("{} Skipped dependency installation", "-".yellow());
        } else {
            install_base_packages(&project, global.package_manager_for(&project.root)).await;
        }

        ProjectMarker::new(self.framework).save(&project.root)?;

        println!("{} HextaUI is ready", "✓".green());
        println!("  Components: {}", display_relative(&project.components_dir(), &project.root));
        println!("  Utilities:  {}", display_relative(&project.utils_dir(), &project.root));
        if let Some(notes) = self.framework.setup_notes() {
            println!("\n{}", "Finish setup manually:".bold());
            for line in notes.lines() {
                println!("  {line}");
            }
        }
        println!("\nNext: {}", "hextaui add button".cyan());
        Ok(())
    }
}

/// Create the directories and utility files.
///
/// Existing utility files are only replaced when `force` is set.
fn scaffold(project: &Project, force: bool) -> Result<()> {
    ensure_dir(&project.components_dir())?;
    let utils_dir = project.utils_dir();
    ensure_dir(&utils_dir)?;

    for (name, template) in [("utils.ts", UTILS_TEMPLATE), ("color-utils.ts", COLOR_UTILS_TEMPLATE)]
    {
        let path = utils_dir.join(name);
        if path.exists() && !force {
            tracing::info!("Keeping existing {}", path.display());
            continue;
        }
        atomic_write(&path, template.as_bytes())?;
        println!("{} Created {}", "+".cyan(), display_relative(&path, &project.root));
    }
    Ok(())
}

/// Install the framework's base packages that `package.json` lacks.
///
/// Failures are reported with the command to run by hand; they do not abort
/// initialization.
async fn install_base_packages(project: &Project, manager: PackageManager) {
    let config = project.framework.config();
    let groups = [(config.required_dependencies, false), (config.required_dev_dependencies, true)];

    for (packages, dev) in groups {
        let required: Vec<String> = packages.iter().map(|p| (*p).to_string()).collect();
        let status = check_missing_packages(&required, &project.root);
        if status.all_installed() {
            continue;
        }

        let spinner = spinner_with_message(format!("Installing {}", status.missing.join(", ")));
        match install_packages(&project.root, manager, &status.missing, dev).await {
            Ok(used) => {
                spinner.finish_and_clear();
                println!("{} Installed {} with {used}", "✓".green(), status.missing.join(", "));
            }
            Err(e) => {
                spinner.finish_and_clear();
                tracing::warn!("Package installation failed: {e:#}");
                println!(
                    "{} Could not install packages. Run manually:\n  {}",
                    "!".yellow(),
                    manager.manual_install_hint(&status.missing, dev)
                );
            }
        }
    }
}
