//! Show what a component pulls in, or with `--invert`, what pulls it in.
//!
//! ```text
//! $ hextaui tree ColorPicker
//! ColorPicker
//! ├── Button
//! └── Input
//!
//! Install order: Button, Input, ColorPicker
//! ```
//!
//! A component seen earlier in the tree is marked `(*)` and not expanded again.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::config::GlobalConfig;
use crate::registry::Registry;
use crate::resolver::graph::RequirementGraph;
use crate::resolver::resolve;

#[derive(Args)]
pub struct TreeCommand {
    /// Component to inspect (case-insensitive)
    name: String,

    /// Show components that require NAME instead
    #[arg(short, long)]
    invert: bool,

    /// Maximum depth to display
    #[arg(short, long)]
    depth: Option<usize>,
}

impl TreeCommand {
    pub fn execute(self, global: &GlobalConfig) -> Result<()> {
        let registry = global.load_registry()?;
        print!("{}", self.render(&registry)?);
        Ok(())
    }

    fn render(&self, registry: &Registry) -> Result<String> {
        let names = registry.require_names(std::slice::from_ref(&self.name))?;
        let name = &names[0];

        let graph = RequirementGraph::from_registry(registry);
        let mut out = graph.render_tree(name, self.invert, self.depth);

        if !self.invert {
            match resolve(registry, &names) {
                Ok(resolution) => out.push_str(&format!(
                    "\n{} {}\n",
                    "Install order:".bold(),
                    resolution.names().join(", ")
                )),
                Err(e) => out.push_str(&format!("\n{} {e}\n", "Cannot be installed:".red())),
            }
        }
        Ok(out)
    }
}
