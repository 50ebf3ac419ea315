//! Registry fixtures.

use crate::registry::{Component, Registry};

/// A small registry, usable in memory or written out as TOML.
#[derive(Debug, Clone, Default)]
pub struct RegistryFixture {
    pub components: Vec<Component>,
}

/// `ColorPicker` -> `color-picker.tsx`
fn file_name(component: &str) -> String {
    let mut out = String::new();
    for (i, ch) in component.chars().enumerate() {
        if ch.is_ascii_uppercase() && i > 0 {
            out.push('-');
        }
        if ch == ' ' {
            out.push('-');
            continue;
        }
        out.push(ch.to_ascii_lowercase());
    }
    out.replace("--", "-") + ".tsx"
}

impl RegistryFixture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a component with a single file named after it.
    #[must_use]
    pub fn component(mut self, name: &str, requires: &[&str], dependencies: &[&str]) -> Self {
        let file = file_name(name);
        self.components.push(
            Component::new(name, format!("{name} component"))
                .with_file(file.clone(), file)
                .with_requires(requires.iter().copied())
                .with_dependencies(dependencies.iter().copied()),
        );
        self
    }

    /// The shape of the real catalog in miniature.
    ///
    /// `Modal` requires `Button`, `ColorPicker` requires `Button` and `Input`,
    /// `Avatar` requires `Tooltip`.
    #[must_use]
    pub fn ui() -> Self {
        Self::new()
            .component("Button", &[], &["@radix-ui/react-slot"])
            .component("Input", &[], &[])
            .component("Tooltip", &[], &["@radix-ui/react-tooltip"])
            .component("Modal", &["Button"], &["@radix-ui/react-dialog"])
            .component("ColorPicker", &["Button", "Input"], &[])
            .component("Avatar", &["Tooltip"], &["@radix-ui/react-avatar"])
    }

    /// Two components that require each other.
    #[must_use]
    pub fn cyclic() -> Self {
        Self::new().component("Alpha", &["Beta"], &[]).component("Beta", &["Alpha"], &[])
    }

    #[must_use]
    pub fn registry(&self) -> Registry {
        Registry::new(self.components.clone())
    }

    /// Render as registry TOML with relative file URLs under `base_url`.
    #[must_use]
    pub fn to_toml(&self, base_url: &str) -> String {
        let quoted = |items: &[String]| {
            items.iter().map(|i| format!("\"{i}\"")).collect::<Vec<_>>().join(", ")
        };

        let mut out = format!("base_url = \"{base_url}\"\n");
        for component in &self.components {
            out.push_str(&format!(
                "\n[[components]]\nname = \"{}\"\ndescription = \"{}\"\n",
                component.name, component.description
            ));
            if !component.dependencies.is_empty() {
                out.push_str(&format!("dependencies = [{}]\n", quoted(&component.dependencies)));
            }
            if !component.requires.is_empty() {
                out.push_str(&format!("requires = [{}]\n", quoted(&component.requires)));
            }
            for file in &component.files {
                out.push_str(&format!(
                    "\n[[components.files]]\npath = \"{}\"\nurl = \"{}\"\n",
                    file.path, file.url
                ));
            }
        }
        out
    }
}
