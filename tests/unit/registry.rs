use hextaui_cli::core::HextaError;
use hextaui_cli::registry::{FileKind, Registry, RegistryIssue};
use hextaui_cli::test_utils::RegistryFixture;

#[test]
fn test_builtin_registry_is_consistent() {
    let registry = Registry::builtin().unwrap();
    assert!(registry.check().is_empty(), "{:?}", registry.check());
    assert!(registry.base_url.as_deref().is_some_and(|url| url.starts_with("https://")));

    for component in &registry.components {
        assert!(!component.description.is_empty(), "{} has no description", component.name);
        for file in &component.files {
            let url = file.resolve_url(registry.base_url.as_deref());
            assert!(url.starts_with("https://"), "{}: {url}", component.name);
            if file.kind == FileKind::File {
                assert!(file.path.ends_with(".tsx") || file.path.ends_with(".ts"), "{}", file.path);
            }
        }
    }
}

#[test]
fn test_builtin_names_are_case_insensitively_unique() {
    let registry = Registry::builtin().unwrap();
    for name in registry.names() {
        let found = registry.find(&name.to_uppercase()).unwrap();
        assert_eq!(found.name, name);
    }
}

#[test]
fn test_validate_names_maps_user_input() {
    let registry = RegistryFixture::ui().registry();

    let validation = registry.validate_names(&["MODAL", "colorpicker", "nope", "Modal"]);
    assert_eq!(validation.valid, vec!["Modal", "ColorPicker"]);
    assert_eq!(validation.invalid, vec!["nope"]);
}

#[test]
fn test_require_names_collects_suggestions() {
    let registry = RegistryFixture::ui().registry();

    match registry.require_names(&["Buttn", "Tooltp"]) {
        Err(HextaError::UnknownComponents {
            names,
            suggestions,
        }) => {
            assert_eq!(names, vec!["Buttn", "Tooltp"]);
            assert_eq!(suggestions, vec!["Button", "Tooltip"]);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_fixture_registry_problems_are_reported() {
    let mut registry = RegistryFixture::ui().component("Form", &["Missing"], &["Bad Name"]).registry();
    registry.components.push(registry.components[0].clone());

    let issues = registry.check();
    assert!(issues.contains(&RegistryIssue::DuplicateName {
        name: "Button".to_string()
    }));
    assert!(issues.contains(&RegistryIssue::UnknownRequirement {
        component: "Form".to_string(),
        requirement: "Missing".to_string()
    }));
    assert!(issues.contains(&RegistryIssue::InvalidPackageName {
        component: "Form".to_string(),
        package: "Bad Name".to_string()
    }));
    assert!(registry.validate().is_err());
}
