//! Add components to an initialized project.
//!
//! The command maps user input onto registry names (ignoring case), resolves
//! every transitive requirement, downloads the files in dependency-first
//! order and installs whichever npm packages `package.json` does not declare
//! yet.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::init::InitCommand;
use super::start_dir;
use crate::config::GlobalConfig;
use crate::installer::{DependencySummary, HttpFetcher, InstallReport, Installer, aggregate_dependencies};
use crate::package_manager::{PackageManager, install_packages};
use crate::project::{
    Framework, PackageStatus, Project, ProjectMarker, check_missing_packages, find_project_root,
};
use crate::registry::FileKind;
use crate::resolver::{Resolution, resolve};
use crate::utils::fs::display_relative;
use crate::utils::{ProgressBar, spinner_with_message};

#[derive(Args)]
pub struct AddCommand {
    /// Components to add (case-insensitive)
    #[arg(required = true, value_name = "NAMES")]
    components: Vec<String>,

    /// Directory inside the project (defaults to the current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Show what would be installed without changing anything
    #[arg(long)]
    dry_run: bool,

    /// Do not install npm packages
    #[arg(long)]
    skip_deps: bool,

    /// Replace component files that already exist
    #[arg(long)]
    overwrite: bool,

    /// Run `init` for FRAMEWORK first if the project is not initialized
    #[arg(long, value_enum, value_name = "FRAMEWORK")]
    init: Option<Framework>,
}

impl AddCommand {
    pub async fn execute(self, global: &GlobalConfig) -> Result<()> {
        let root = find_project_root(&start_dir(self.path.clone())?)?;
        if let Some(framework) = self.init
            && ProjectMarker::load(&root)?.is_none()
        {
            InitCommand::for_project(root.clone(), framework, self.skip_deps)
                .execute(global)
                .await?;
        }
        let project = Project::open(root)?;
        let registry = global.load_registry()?;

        let names = registry.require_names(&self.components)?;
        let resolution = resolve(&registry, &names)?;
        tracing::debug!("Resolved install order: {:?}", resolution.names());

        print_resolution(&resolution);

        let dependencies = aggregate_dependencies(&resolution.total);
        let packages = check_missing_packages(&dependencies.packages, &project.root);
        let manager = global.package_manager_for(&project.root);

        if self.dry_run {
            print_plan(&project, &resolution, &dependencies, &packages, manager);
            return Ok(());
        }

        let fetcher = HttpFetcher::new(global.request_timeout())?;
        let progress = ProgressBar::new_spinner();
        progress.set_message(format!("Downloading {} component(s)", resolution.total.len()));

        let report = Installer::new(&fetcher, registry.base_url.as_deref())
            .max_parallel(global.max_parallel_downloads)
            .overwrite(self.overwrite)
            .install(&resolution.total, &project.components_dir(), Some(&progress))
            .await;
        progress.finish_and_clear();
        let report = report?;

        print_report(&report);
        self.install_dependencies(&project, manager, &dependencies, &packages).await;

        println!(
            "\n{} Added {} component(s) to {}",
            "✓".green(),
            resolution.total.len(),
            display_relative(&project.components_dir(), &project.root)
        );
        Ok(())
    }

    async fn install_dependencies(
        &self,
        project: &Project,
        manager: PackageManager,
        dependencies: &DependencySummary,
        packages: &PackageStatus,
    ) {
        if dependencies.packages.is_empty() {
            return;
        }
        if !packages.existing.is_empty() {
            println!("{} Already installed: {}", "✓".green(), packages.existing.join(", "));
        }
        if packages.all_installed() {
            return;
        }

        if self.skip_deps {
            println!(
                "{} Skipped installing {}. Run manually:\n  {}",
                "-".yellow(),
                packages.missing.join(", "),
                manager.manual_install_hint(&packages.missing, false)
            );
            return;
        }

        let spinner =
            spinner_with_message(format!("Installing {}", packages.missing.join(", ")));
        let result = install_packages(&project.root, manager, &packages.missing, false).await;
        spinner.finish_and_clear();

        match result {
            Ok(used) => {
                println!("{} Installed {} with {used}", "✓".green(), packages.missing.join(", "));
            }
            Err(e) => {
                tracing::warn!("Package installation failed: {e:#}");
                println!(
                    "{} Could not install packages. Run manually:\n  {}",
                    "!".yellow(),
                    manager.manual_install_hint(&packages.missing, false)
                );
            }
        }
    }
}

fn print_resolution(resolution: &Resolution<'_>) {
    println!("Adding {}", resolution.requested.join(", ").cyan());
    if !resolution.required.is_empty() {
        println!("Also adding required components: {}", resolution.required.join(", ").cyan());
    }
}

fn print_plan(
    project: &Project,
    resolution: &Resolution<'_>,
    dependencies: &DependencySummary,
    packages: &PackageStatus,
    manager: PackageManager,
) {
    println!("\n{}", "Dry run: nothing will be written".bold());
    let target = display_relative(&project.components_dir(), &project.root);

    for component in &resolution.total {
        println!("  {} {}", "+".cyan(), component.name);
        for file in &component.files {
            let suffix = if file.kind == FileKind::Folder { "/" } else { "" };
            println!("      {target}/{}{suffix}", file.path);
        }
    }

    if !dependencies.by_component.is_empty() {
        println!("\nnpm packages:");
        for (component, needed) in &dependencies.by_component {
            println!("  {component}: {}", needed.join(", "));
        }
    }
    if !packages.missing.is_empty() {
        println!("\nWould run: {}", manager.manual_install_hint(&packages.missing, false));
    }
}

fn print_report(report: &InstallReport) {
    for component in &report.components {
        if component.written.is_empty() && !component.skipped.is_empty() {
            println!("{} {} (already present)", "-".yellow(), component.name);
            continue;
        }
        println!("{} {}", "+".cyan(), component.name);
        for path in &component.skipped {
            tracing::info!("Kept existing {}", path.display());
        }
    }
    if report.files_skipped() > 0 {
        println!(
            "{} file(s) already existed and were kept; use --overwrite to replace them",
            report.files_skipped()
        );
    }
}
