//! List the components available in the registry.

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use serde::Serialize;

use crate::config::GlobalConfig;
use crate::registry::{Component, Registry};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

#[derive(Args)]
pub struct ListCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Only show components whose name or description contains TEXT
    #[arg(short, long, value_name = "TEXT")]
    search: Option<String>,
}

/// One row of `hextaui list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentListing {
    pub name: String,
    pub description: String,
    pub requires: Vec<String>,
    pub dependencies: Vec<String>,
}

impl From<&Component> for ComponentListing {
    fn from(component: &Component) -> Self {
        Self {
            name: component.name.clone(),
            description: component.description.clone(),
            requires: component.requires.clone(),
            dependencies: component.dependencies.clone(),
        }
    }
}

impl ListCommand {
    pub fn execute(self, global: &GlobalConfig) -> Result<()> {
        let registry = global.load_registry()?;
        let listings = collect(&registry, self.search.as_deref());

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&listings)?),
            OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&listings)?),
            OutputFormat::Table => print_table(&listings, self.search.as_deref()),
        }
        Ok(())
    }
}

/// Components matching `search`, sorted by name ignoring case.
fn collect(registry: &Registry, search: Option<&str>) -> Vec<ComponentListing> {
    let needle = search.map(str::to_lowercase);
    let mut listings: Vec<ComponentListing> = registry
        .components
        .iter()
        .filter(|c| match &needle {
            Some(needle) => {
                c.name.to_lowercase().contains(needle)
                    || c.description.to_lowercase().contains(needle)
            }
            None => true,
        })
        .map(ComponentListing::from)
        .collect();
    listings.sort_by_key(|l| l.name.to_lowercase());
    listings
}

fn print_table(listings: &[ComponentListing], search: Option<&str>) {
    if listings.is_empty() {
        match search {
            Some(text) => println!("No components match \"{text}\""),
            None => println!("The registry is empty"),
        }
        return;
    }

    let width = listings.iter().map(|l| l.name.len()).max().unwrap_or(0);
    for listing in listings {
        print!("{}  {}", format!("{:<width$}", listing.name).cyan(), listing.description);
        if !listing.requires.is_empty() {
            print!(" {}", format!("(requires {})", listing.requires.join(", ")).dimmed());
        }
        println!();
    }
    println!("\n{} component(s)", listings.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        Registry::new(vec![
            Component::new("Modal", "Dialog overlay").with_requires(["Button"]),
            Component::new("button", "Clickable"),
            Component::new("Avatar", "User picture").with_requires(["Tooltip"]),
            Component::new("Tooltip", "Hover hint"),
        ])
    }

    #[test]
    fn test_collect_sorts_case_insensitively() {
        let names: Vec<_> = collect(&registry(), None).into_iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["Avatar", "button", "Modal", "Tooltip"]);
    }

    #[test]
    fn test_collect_searches_name_and_description() {
        let by_name: Vec<_> = collect(&registry(), Some("MOD")).into_iter().map(|l| l.name).collect();
        assert_eq!(by_name, vec!["Modal"]);

        let by_description: Vec<_> =
            collect(&registry(), Some("hint")).into_iter().map(|l| l.name).collect();
        assert_eq!(by_description, vec!["Tooltip"]);

        assert!(collect(&registry(), Some("nothing")).is_empty());
    }

    #[test]
    fn test_listing_serializes_requirements() {
        let listings = collect(&registry(), Some("avatar"));
        let json = serde_json::to_value(&listings).unwrap();
        assert_eq!(json[0]["requires"], serde_json::json!(["Tooltip"]));
    }

    #[test]
    fn test_list_builtin_registry() {
        let cmd = ListCommand {
            format: OutputFormat::Json,
            search: Some("picker".to_string()),
        };
        cmd.execute(&GlobalConfig::default()).unwrap();
    }
}
