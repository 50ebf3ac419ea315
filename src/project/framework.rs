//! Supported front-end frameworks and where HextaUI puts files in each.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Front-end framework of the consuming project.
///
/// Chosen explicitly with `hextaui init --framework` and stored in the
/// project marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    #[default]
    #[value(name = "nextjs")]
    NextJs,
    Vite,
    Astro,
    Unknown,
}

/// Per-framework layout and base packages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkConfig {
    pub display_name: &'static str,
    /// Components directory, relative to the project root.
    pub components_path: &'static str,
    /// Directory for `utils.ts` and `color-utils.ts`, relative to the project root.
    pub utils_path: &'static str,
    pub required_dependencies: &'static [&'static str],
    pub required_dev_dependencies: &'static [&'static str],
}

const BASE_DEPENDENCIES: &[&str] = &["clsx", "tailwind-merge"];

impl Framework {
    #[must_use]
    pub const fn config(self) -> FrameworkConfig {
        let (display_name, dev_dependencies): (&'static str, &'static [&'static str]) = match self {
            Self::NextJs => ("Next.js", &[]),
            Self::Vite => ("Vite + React", &[]),
            Self::Astro => ("Astro", &["@astrojs/react", "@astrojs/tailwind"]),
            Self::Unknown => ("Unknown Framework", &[]),
        };

        FrameworkConfig {
            display_name,
            components_path: "src/components/ui",
            utils_path: "src/lib",
            required_dependencies: BASE_DEPENDENCIES,
            required_dev_dependencies: dev_dependencies,
        }
    }

    /// Extra manual setup the user has to do after `init`, if any.
    #[must_use]
    pub const fn setup_notes(self) -> Option<&'static str> {
        match self {
            Self::Vite => Some(
                "Add an \"@\" alias to vite.config: resolve.alias = { \"@\": path.resolve(__dirname, \"./src\") }\n\
                 Set compilerOptions.baseUrl = \".\" and paths = { \"@/*\": [\"./src/*\"] } in tsconfig.json",
            ),
            Self::Astro => Some(
                "Enable the react() and tailwind({ applyBaseStyles: false }) integrations in astro.config\n\
                 Set compilerOptions.baseUrl = \".\" and paths = { \"@/*\": [\"./src/*\"] } in tsconfig.json",
            ),
            Self::NextJs | Self::Unknown => None,
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config().display_name)
    }
}
