//! Registry-wide requirement graph.
//!
//! [`resolve`](super::resolve) only walks the part of the registry reachable from
//! a request. This module builds the whole requirement graph with `petgraph`
//! so the CLI can inspect the registry itself: `hextaui validate` reports
//! requirement cycles (as warnings, since the resolver tolerates them) and
//! `hextaui tree` renders what a component pulls in or what pulls it in.
//!
//! Edges point from a component to each component it requires. Requirements
//! that name unknown components are skipped here; they are reported by
//! [`Registry::check`](crate::registry::Registry::check).
//!
//! # Tree output
//!
//! ```text
//! ColorPicker
//! ├── Button
//! └── Input
//! ```
//!
//! A node already printed elsewhere in the same tree is marked with `(*)` and
//! not expanded again.

use petgraph::Direction;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet};

use crate::registry::Registry;

pub struct RequirementGraph<'a> {
    graph: DiGraph<&'a str, ()>,
    node_map: HashMap<&'a str, NodeIndex>,
}

impl<'a> RequirementGraph<'a> {
    pub fn from_registry(registry: &'a Registry) -> Self {
        let mut graph = DiGraph::new();
        let mut node_map = HashMap::new();

        for component in &registry.components {
            node_map
                .entry(component.name.as_str())
                .or_insert_with(|| graph.add_node(component.name.as_str()));
        }

        for component in &registry.components {
            let from = node_map[component.name.as_str()];
            for requirement in &component.requires {
                if let Some(&to) = node_map.get(requirement.as_str())
                    && !graph.contains_edge(from, to)
                {
                    graph.add_edge(from, to, ());
                }
            }
        }

        Self {
            graph,
            node_map,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.node_map.contains_key(name)
    }

    /// Every requirement cycle, as the names of its members.
    ///
    /// Members are listed in registry order and cycles are sorted by their
    /// first member, so output is stable. A component that requires itself
    /// is a cycle of one.
    pub fn cycles(&self) -> Vec<Vec<&'a str>> {
        let mut cycles: Vec<Vec<NodeIndex>> = tarjan_scc(&self.graph)
            .into_iter()
            .filter(|scc| scc.len() > 1 || self.graph.contains_edge(scc[0], scc[0]))
            .collect();

        for cycle in &mut cycles {
            cycle.sort_unstable();
        }
        cycles.sort_unstable_by_key(|cycle| cycle[0]);

        cycles
            .into_iter()
            .map(|cycle| cycle.into_iter().map(|idx| self.graph[idx]).collect())
            .collect()
    }

    /// Components that directly require `name`, in registry order.
    pub fn dependents(&self, name: &str) -> Vec<&'a str> {
        self.neighbors_sorted(name, Direction::Incoming)
    }

    /// Components `name` directly requires, in declaration order.
    pub fn requirements(&self, name: &str) -> Vec<&'a str> {
        let Some(&idx) = self.node_map.get(name) else {
            return Vec::new();
        };
        // petgraph yields outgoing neighbors newest edge first
        let mut names: Vec<&'a str> = self
            .graph
            .neighbors_directed(idx, Direction::Outgoing)
            .map(|n| self.graph[n])
            .collect();
        names.reverse();
        names
    }

    fn neighbors_sorted(&self, name: &str, direction: Direction) -> Vec<&'a str> {
        let Some(&idx) = self.node_map.get(name) else {
            return Vec::new();
        };
        let mut neighbors: Vec<NodeIndex> = self.graph.neighbors_directed(idx, direction).collect();
        neighbors.sort_unstable();
        neighbors.into_iter().map(|n| self.graph[n]).collect()
    }

    /// Render the requirement tree rooted at `root`.
    ///
    /// With `invert`, the tree shows dependents instead of requirements.
    /// `max_depth` limits how many levels below the root are printed.
    pub fn render_tree(&self, root: &str, invert: bool, max_depth: Option<usize>) -> String {
        let mut out = String::new();
        out.push_str(root);
        out.push('\n');

        let mut visited = HashSet::new();
        visited.insert(root.to_string());
        self.render_children(root, "", invert, 1, max_depth, &mut visited, &mut out);
        out
    }

    #[allow(clippy::too_many_arguments)]
    fn render_children(
        &self,
        name: &str,
        prefix: &str,
        invert: bool,
        depth: usize,
        max_depth: Option<usize>,
        visited: &mut HashSet<String>,
        out: &mut String,
    ) {
        if max_depth.is_some_and(|max| depth > max) {
            return;
        }

        let children = if invert {
            self.dependents(name)
        } else {
            self.requirements(name)
        };

        for (i, child) in children.iter().enumerate() {
            let is_last = i == children.len() - 1;
            let connector = if is_last { "└── " } else { "├── " };

            if visited.insert((*child).to_string()) {
                out.push_str(&format!("{prefix}{connector}{child}\n"));
                let child_prefix = if is_last {
                    format!("{prefix}    ")
                } else {
                    format!("{prefix}│   ")
                };
                self.render_children(child, &child_prefix, invert, depth + 1, max_depth, visited, out);
            } else {
                out.push_str(&format!("{prefix}{connector}{child} (*)\n"));
            }
        }
    }
}
