//! Core data structures for the module graph

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Coordinates of a build module.
///
/// Two ids are equal when group and artifact match. The version is carried
/// along for reporting but never compared.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleId {
    pub group: Option<String>,
    pub artifact: String,
    pub version: Option<String>,
}

impl ModuleId {
    pub fn new(group: Option<&str>, artifact: &str, version: Option<&str>) -> Self {
        ModuleId {
            group: group.map(str::to_string),
            artifact: artifact.to_string(),
            version: version.map(str::to_string),
        }
    }
}

impl PartialEq for ModuleId {
    fn eq(&self, other: &Self) -> bool {
        self.group == other.group && self.artifact == other.artifact
    }
}

impl Eq for ModuleId {}

impl Hash for ModuleId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.group.hash(state);
        self.artifact.hash(state);
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.group.as_deref().unwrap_or("?"),
            self.artifact,
            self.version.as_deref().unwrap_or("?")
        )
    }
}

/// A parsed module and the dependencies it declares, in declaration order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Module {
    pub id: ModuleId,
    pub dependencies: Vec<ModuleId>,
}

impl Module {
    pub fn new(id: ModuleId, dependencies: Vec<ModuleId>) -> Self {
        Module { id, dependencies }
    }
}

/// A node of the exported graph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphNode {
    pub name: String,
    /// Always 1.
    pub component: u32,
}

impl GraphNode {
    pub fn new(name: impl Into<String>) -> Self {
        GraphNode {
            name: name.into(),
            component: 1,
        }
    }
}

/// A directed edge of the exported graph, from the depending module to its dependency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
    /// Always 1.
    pub value: u32,
}

impl GraphLink {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        GraphLink {
            source: source.into(),
            target: target.into(),
            value: 1,
        }
    }
}

/// Flat node/link view of the graph, as consumed by the visualizer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GraphContent {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}
