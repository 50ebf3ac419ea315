use std::collections::HashSet;

use hextaui_cli::core::HextaError;
use hextaui_cli::registry::{Component, Registry};
use hextaui_cli::resolver::graph::RequirementGraph;
use hextaui_cli::resolver::resolve;
use hextaui_cli::test_utils::RegistryFixture;

/// Position of each name in `order`.
fn positions<'a>(order: &[&'a str]) -> std::collections::HashMap<&'a str, usize> {
    order.iter().enumerate().map(|(i, name)| (*name, i)).collect()
}

/// Every built-in component resolves, with requirements before dependents.
#[test]
fn test_every_builtin_component_resolves_dependency_first() {
    let registry = Registry::builtin().unwrap();
    let graph = RequirementGraph::from_registry(&registry);
    assert!(graph.cycles().is_empty(), "built-in catalog has a requirement cycle");

    for name in registry.names() {
        let resolution = resolve(&registry, &[name]).unwrap();
        let order = resolution.names();
        let index = positions(&order);

        assert_eq!(order.last(), Some(&name));
        assert_eq!(index.len(), order.len(), "{name}: duplicate in {order:?}");
        for component in &resolution.total {
            for requirement in &component.requires {
                assert!(
                    index[requirement.as_str()] < index[component.name.as_str()],
                    "{name}: {requirement} must precede {}",
                    component.name
                );
            }
        }
    }
}

/// Resolving everything at once yields the whole catalog exactly once.
#[test]
fn test_resolve_entire_builtin_catalog() {
    let registry = Registry::builtin().unwrap();
    let all: Vec<&str> = registry.names().collect();

    let resolution = resolve(&registry, &all).unwrap();
    assert_eq!(resolution.total.len(), registry.len());
    assert!(resolution.required.is_empty());
    assert_eq!(resolution.requested.len(), registry.len());
}

#[test]
fn test_builtin_known_requirements() {
    let registry = Registry::builtin().unwrap();

    assert_eq!(resolve(&registry, &["Avatar"]).unwrap().names(), vec!["Tooltip", "Avatar"]);
    assert_eq!(
        resolve(&registry, &["ColorPicker"]).unwrap().names(),
        vec!["Button", "Input", "ColorPicker"]
    );
    assert_eq!(resolve(&registry, &["Modal"]).unwrap().required, vec!["Button"]);
}

/// `total` is always `requested` plus `required`, with no overlap.
#[test]
fn test_partition_of_total() {
    let registry = RegistryFixture::ui().registry();
    let requests: &[&[&str]] = &[
        &["Modal"],
        &["Modal", "ColorPicker"],
        &["Button", "Modal"],
        &["Avatar", "Avatar", "Input"],
        &[],
    ];

    for request in requests {
        let resolution = resolve(&registry, request).unwrap();
        let requested: HashSet<&str> = resolution.requested.iter().map(String::as_str).collect();
        let required: HashSet<&str> = resolution.required.iter().map(String::as_str).collect();
        let total: HashSet<&str> = resolution.names().into_iter().collect();

        assert!(requested.is_disjoint(&required), "{request:?}");
        assert_eq!(&requested | &required, total, "{request:?}");
        assert_eq!(total.len(), resolution.total.len(), "{request:?}");
    }
}

/// Requesting a requirement explicitly moves it from `required` to `requested`.
#[test]
fn test_explicit_request_is_not_reported_as_required() {
    let registry = RegistryFixture::ui().registry();

    let resolution = resolve(&registry, &["Button", "Modal"]).unwrap();
    assert_eq!(resolution.requested, vec!["Button", "Modal"]);
    assert!(resolution.required.is_empty());
    assert_eq!(resolution.names(), vec!["Button", "Modal"]);
}

#[test]
fn test_unknown_names_fail_without_partial_result() {
    let registry = RegistryFixture::ui().registry();

    let err = resolve(&registry, &["Modal", "Carousel"]).unwrap_err();
    assert!(matches!(err, HextaError::ComponentNotFound { ref name } if name == "Carousel"));

    // Resolution matches exactly; case folding happens in the registry.
    assert!(resolve(&registry, &["modal"]).is_err());
    let names = registry.require_names(&["modal"]).unwrap();
    assert_eq!(resolve(&registry, &names).unwrap().names(), vec!["Button", "Modal"]);
}

#[test]
fn test_cycles_terminate() {
    let registry = RegistryFixture::cyclic().registry();

    let resolution = resolve(&registry, &["Alpha"]).unwrap();
    assert_eq!(resolution.names(), vec!["Beta", "Alpha"]);

    let both = resolve(&registry, &["Beta", "Alpha"]).unwrap();
    assert_eq!(both.total.len(), 2);
    assert!(both.required.is_empty());
}

/// Repeated resolution gives identical results.
#[test]
fn test_resolution_is_deterministic() {
    let registry = Registry::new(vec![
        Component::new("A", "").with_requires(["B", "C"]),
        Component::new("B", "").with_requires(["D"]),
        Component::new("C", "").with_requires(["D", "B"]),
        Component::new("D", ""),
    ]);

    let first = resolve(&registry, &["A"]).unwrap();
    assert_eq!(first.names(), vec!["D", "B", "C", "A"]);
    for _ in 0..10 {
        assert_eq!(resolve(&registry, &["A"]).unwrap(), first);
    }
}
