//! Check a component registry for integrity problems.
//!
//! Errors (duplicate names, requirements that point nowhere, components
//! without files, malformed npm package names, unsafe destination paths) make
//! the command fail. Requirement cycles only produce a warning: installation
//! tolerates them.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::config::{GlobalConfig, expand_path};
use crate::core::HextaError;
use crate::registry::{Registry, RegistryIssue};
use crate::resolver::graph::RequirementGraph;

#[derive(Args)]
pub struct ValidateCommand {
    /// Registry file to check (defaults to the configured registry)
    #[arg(value_name = "FILE")]
    registry: Option<String>,
}

/// Findings of one validation run.
#[derive(Debug, Default)]
struct Findings {
    issues: Vec<RegistryIssue>,
    cycles: Vec<Vec<String>>,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalConfig) -> Result<()> {
        let registry = match &self.registry {
            Some(path) => Registry::load(&expand_path(path))?,
            None => global.load_registry()?,
        };

        let findings = inspect(&registry);

        for cycle in &findings.cycles {
            println!("{} Requirement cycle: {}", "!".yellow(), cycle.join(" -> "));
        }
        for issue in &findings.issues {
            println!("{} {issue}", "✗".red());
        }

        if !findings.issues.is_empty() {
            return Err(HextaError::RegistryValidationError {
                reason: format!("{} problem(s) found", findings.issues.len()),
            }
            .into());
        }

        println!("{} {} components, registry is valid", "✓".green(), registry.len());
        Ok(())
    }
}

fn inspect(registry: &Registry) -> Findings {
    let graph = RequirementGraph::from_registry(registry);
    Findings {
        issues: registry.check(),
        cycles: graph
            .cycles()
            .into_iter()
            .map(|cycle| cycle.into_iter().map(str::to_string).collect())
            .collect(),
    }
}
