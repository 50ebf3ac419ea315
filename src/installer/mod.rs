//! Downloading resolved components into a project.
//!
//! Installation happens in two phases:
//!
//! 1. **Fetch**: every file of every component is downloaded, up to
//!    `max_parallel_downloads` at a time. `buffered` keeps results in the
//!    order they were planned, so nothing depends on completion order.
//! 2. **Write**: once every download succeeded, files are written with
//!    [`atomic_write`] in the resolution's `total` order (requirements first).
//!
//! A failed download aborts before anything touches the project.
//!
//! npm dependencies are collected separately by [`aggregate_dependencies`].

mod fetch;


pub use fetch::{Fetcher, FolderEntry, HttpFetcher};

use anyhow::Result;
use futures::stream::{self, StreamExt, TryStreamExt};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_MAX_PARALLEL_DOWNLOADS;
use crate::registry::{Component, FileKind};
use crate::utils::progress::ProgressBar;
use crate::utils::{atomic_write, safe_join};

/// One file scheduled for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub component: String,
    pub url: String,
    /// Destination relative to the components directory.
    pub relative: PathBuf,
    pub destination: PathBuf,
}

/// What happened to one component's files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentInstall {
    pub name: String,
    pub written: Vec<PathBuf>,
    /// Files left alone because they already existed.
    pub skipped: Vec<PathBuf>,
}

/// Outcome of [`Installer::install`], one entry per component in install order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub components: Vec<ComponentInstall>,
}

impl InstallReport {
    #[must_use]
    pub fn files_written(&self) -> usize {
        self.components.iter().map(|c| c.written.len()).sum()
    }

    #[must_use]
    pub fn files_skipped(&self) -> usize {
        self.components.iter().map(|c| c.skipped.len()).sum()
    }
}

/// Downloads component files through a [`Fetcher`].
pub struct Installer<'a, F> {
    fetcher: &'a F,
    base_url: Option<&'a str>,
    max_parallel: usize,
    overwrite: bool,
}

impl<'a, F: Fetcher> Installer<'a, F> {
    pub const fn new(fetcher: &'a F, base_url: Option<&'a str>) -> Self {
        Self {
            fetcher,
            base_url,
            max_parallel: DEFAULT_MAX_PARALLEL_DOWNLOADS,
            overwrite: false,
        }
    }

    #[must_use]
    pub const fn max_parallel(mut self, max_parallel: usize) -> Self {
        self.max_parallel = if max_parallel == 0 { 1 } else { max_parallel };
        self
    }

    /// Replace files that already exist instead of skipping them.
    #[must_use]
    pub const fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Expand every component's file manifest into concrete downloads.
    ///
    /// Folder entries are listed through the fetcher. Destinations are checked
    /// to stay inside `components_dir`.
    pub async fn plan(
        &self,
        components: &[&Component],
        components_dir: &Path,
    ) -> Result<Vec<PlannedFile>> {
        let mut planned = Vec::new();

        for component in components {
            for file in &component.files {
                let url = file.resolve_url(self.base_url);
                match file.kind {
                    FileKind::File => {
                        let destination = safe_join(components_dir, &file.path)?;
                        planned.push(PlannedFile {
                            component: component.name.clone(),
                            url,
                            relative: PathBuf::from(&file.path),
                            destination,
                        });
                    }
                    FileKind::Folder => {
                        let folder = safe_join(components_dir, &file.path)?;
                        let entries = self.fetcher.list_folder(&url).await?;
                        for entry in entries.into_iter().filter(FolderEntry::is_file) {
                            let Some(download_url) = entry.download_url else {
                                tracing::warn!(
                                    "Skipping {} in {}: no download URL",
                                    entry.name,
                                    file.path
                                );
                                continue;
                            };
                            planned.push(PlannedFile {
                                component: component.name.clone(),
                                url: download_url,
                                relative: Path::new(&file.path).join(&entry.name),
                                destination: safe_join(&folder, &entry.name)?,
                            });
                        }
                    }
                }
            }
        }

        Ok(planned)
    }

    /// Download and write every file of `components` under `components_dir`.
    ///
    /// `components` should be a resolution's `total`, so requirements are
    /// written before the components that use them.
    pub async fn install(
        &self,
        components: &[&Component],
        components_dir: &Path,
        progress: Option<&ProgressBar>,
    ) -> Result<InstallReport> {
        let planned = self.plan(components, components_dir).await?;

        let (existing, to_fetch): (Vec<_>, Vec<_>) = planned
            .into_iter()
            .partition(|file| !self.overwrite && file.destination.exists());

        tracing::debug!(
            "Downloading {} file(s), skipping {} existing, {} at a time",
            to_fetch.len(),
            existing.len(),
            self.max_parallel
        );

        let fetcher = self.fetcher;
        let contents: Vec<String> = stream::iter(to_fetch.iter().map(|file| async move {
            let content = fetcher.fetch_text(&file.url).await?;
            if let Some(pb) = progress {
                pb.inc(1);
            }
            Ok::<_, anyhow::Error>(content)
        }))
        .buffered(self.max_parallel)
        .try_collect()
        .await?;

        for (file, content) in to_fetch.iter().zip(&contents) {
            atomic_write(&file.destination, content.as_bytes())?;
            tracing::debug!("Wrote {}", file.destination.display());
        }

        let mut report = InstallReport {
            components: components
                .iter()
                .map(|c| ComponentInstall {
                    name: c.name.clone(),
                    ..ComponentInstall::default()
                })
                .collect(),
        };
        let slot = |report: &InstallReport, name: &str| {
            report.components.iter().position(|c| c.name == name)
        };
        for file in to_fetch {
            if let Some(index) = slot(&report, &file.component) {
                report.components[index].written.push(file.relative);
            }
        }
        for file in existing {
            if let Some(index) = slot(&report, &file.component) {
                report.components[index].skipped.push(file.relative);
            }
        }

        Ok(report)
    }
}

/// npm packages needed by a set of components.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySummary {
    /// Every package once, in first-seen order.
    pub packages: Vec<String>,
    /// Packages per component, for components that declare any.
    pub by_component: Vec<(String, Vec<String>)>,
}

/// Union the npm `dependencies` of `components`.
#[must_use]
pub fn aggregate_dependencies(components: &[&Component]) -> DependencySummary {
    let mut seen = HashSet::new();
    let mut summary = DependencySummary::default();

    for component in components {
        if component.dependencies.is_empty() {
            continue;
        }
        for package in &component.dependencies {
            if seen.insert(package.as_str()) {
                summary.packages.push(package.clone());
            }
        }
        summary.by_component.push((component.name.clone(), component.dependencies.clone()));
    }

    summary
}
