//! Module graph built on petgraph::StableDiGraph

use crate::model::*;
use crate::registry::Registry;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use std::collections::HashMap;

/// Dependency graph between registered modules.
///
/// Node weights are artifact names. Edges point from a module to one of its
/// dependencies and carry no payload.
pub struct Graph {
    inner: StableDiGraph<String, ()>,
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("node_count", &self.inner.node_count())
            .field("edge_count", &self.inner.edge_count())
            .finish()
    }
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            inner: StableDiGraph::new(),
        }
    }

    /// Build the graph for every module in the registry.
    ///
    /// Each module becomes one node named after its artifact. A declared
    /// dependency becomes a link only when it resolves to a registered module;
    /// unresolved dependencies are dropped.
    pub fn from_registry(registry: &Registry) -> Self {
        let mut graph = Graph::new();
        let mut indices: HashMap<&ModuleId, NodeIndex> = HashMap::with_capacity(registry.len());

        for module in registry.modules() {
            let idx = graph.add_node(module.id.artifact.clone());
            indices.insert(&module.id, idx);
        }

        for module in registry.modules() {
            let source = indices[&module.id];
            for dependency in &module.dependencies {
                match registry.get(dependency) {
                    Some(target) => {
                        graph.add_edge(source, indices[&target.id]);
                    }
                    None => {
                        tracing::trace!("Unresolved dependency {} of {}", dependency, module.id);
                    }
                }
            }
        }

        graph
    }

    /// Add a node. Returns its index.
    pub fn add_node(&mut self, name: String) -> NodeIndex {
        self.inner.add_node(name)
    }

    /// Add an edge from `source` to `target`.
    pub fn add_edge(&mut self, source: NodeIndex, target: NodeIndex) {
        self.inner.add_edge(source, target, ());
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Flatten into node and link lists, both in insertion order.
    pub fn to_content(&self) -> GraphContent {
        let nodes = self
            .inner
            .node_indices()
            .map(|idx| GraphNode::new(self.inner[idx].clone()))
            .collect();

        let links = self
            .inner
            .edge_indices()
            .filter_map(|idx| self.inner.edge_endpoints(idx))
            .map(|(source, target)| {
                GraphLink::new(self.inner[source].clone(), self.inner[target].clone())
            })
            .collect();

        GraphContent { nodes, links }
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
