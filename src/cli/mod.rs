//! Command-line interface for HextaUI.
//!
//! Each subcommand lives in its own module with its own clap argument struct
//! and an `execute` method.
//!
//! # Available Commands
//!
//! - `init` - scaffold a project: utility files, base dependencies, marker
//! - `add` - resolve components and their requirements, download them, and
//!   install their npm dependencies
//! - `list` (`ls`) - show the registry
//! - `tree` - show what a component pulls in, or what pulls it in
//! - `validate` - check the registry for integrity problems
//!
//! # Basic Workflow
//!
//! ```bash
//! hextaui init --framework vite
//! hextaui add modal color-picker
//! hextaui tree ColorPicker
//! ```
//!
//! # Global Options
//!
//! - `--verbose` - debug logging
//! - `--quiet` - errors only
//! - `--no-progress` - disable spinners and progress bars
//! - `--config` - path to a global config file
//!
//! `RUST_LOG`, when set, overrides the level picked by `--verbose`/`--quiet`.
//! Logs go to stderr so command output on stdout stays machine-readable.

mod add;
mod init;
mod list;
mod tree;
mod validate;


use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::{GlobalConfig, expand_path};
use crate::constants::{CONFIG_ENV, NO_PROGRESS_ENV};

/// Settings derived from the global flags.
///
/// Kept separate from [`Cli`] so tests can execute commands without touching
/// the process environment.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: Option<String>,

    /// Disable progress indicators.
    pub no_progress: bool,

    /// Global config file chosen with `--config`.
    pub config_path: Option<String>,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Export the flags that deeper layers read from the environment.
    pub fn apply_to_env(&self) {
        // SAFETY: called once from the main thread before any tasks spawn.
        if self.no_progress {
            unsafe { std::env::set_var(NO_PROGRESS_ENV, "1") };
        }
        if let Some(path) = &self.config_path {
            unsafe { std::env::set_var(CONFIG_ENV, path) };
        }
    }
}

/// Install the tracing subscriber, writing to stderr.
///
/// Calling it more than once is harmless; later calls are ignored.
pub fn init_logging(level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.unwrap_or("off")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

#[derive(Parser)]
#[command(
    name = "hextaui",
    about = "Add HextaUI components to your project",
    version,
    long_about = "HextaUI copies ready-made React components into your project, together with the components they build on and the npm packages they need."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the global config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Disable progress bars and spinners
    #[arg(long, global = true)]
    no_progress: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Set up HextaUI in the current project
    Init(init::InitCommand),

    /// Add components and everything they require
    Add(add::AddCommand),

    /// List available components
    #[command(visible_alias = "ls")]
    List(list::ListCommand),

    /// Show a component's requirement tree
    Tree(tree::TreeCommand),

    /// Check the component registry for problems
    Validate(validate::ValidateCommand),
}

impl Cli {
    /// Build the configuration from the global flags, set up logging,
    /// export the configuration, and run.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        init_logging(config.log_level.as_deref());
        config.apply_to_env();
        self.execute_with_config(config).await
    }

    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };

        CliConfig {
            log_level: Some(log_level.to_string()),
            no_progress: self.no_progress,
            config_path: self.config.clone(),
        }
    }

    /// Run the selected command with an explicit configuration.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        let global =
            GlobalConfig::load_with_optional(config.config_path.as_deref().map(expand_path))
                .await?;

        match self.command {
            Commands::Init(cmd) => cmd.execute(&global).await,
            Commands::Add(cmd) => cmd.execute(&global).await,
            Commands::List(cmd) => cmd.execute(&global),
            Commands::Tree(cmd) => cmd.execute(&global),
            Commands::Validate(cmd) => cmd.execute(&global),
        }
    }
}

/// Resolve `--path`, defaulting to the current directory.
fn start_dir(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => Ok(std::env::current_dir()?),
    }
}
