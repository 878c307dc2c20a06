//! Declarative description of a data-flow diagram
//!
//! A [`Diagram`] is built by the caller (in code or from a TOML description
//! file) and consumed once by the layout engine and the document renderer.
//! Positions are never part of the description; they are assigned by
//! [`crate::layout::compute`].

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a diagram description file
#[derive(Error, Debug)]
pub enum DiagramFileError {
    #[error("Failed to read diagram description: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse diagram description TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Identifier of a node (entity, process, or store)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Which fixed column an entity occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// An external actor supplying or consuming data
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Entity {
    pub id: NodeId,
    pub label: String,
    pub side: Side,
}

impl Entity {
    pub fn new(id: impl Into<String>, label: impl Into<String>, side: Side) -> Self {
        Self {
            id: NodeId::new(id),
            label: label.into(),
            side,
        }
    }
}

/// A data store attached to exactly one process
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Store {
    pub id: NodeId,
    pub label: String,
}

impl Store {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(id),
            label: label.into(),
        }
    }
}

/// A unit of work, optionally reading and writing one store
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Process {
    pub id: NodeId,
    pub label: String,
    #[serde(default)]
    pub store: Option<Store>,
}

impl Process {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(id),
            label: label.into(),
            store: None,
        }
    }

    /// Attach a data store to this process
    pub fn with_store(mut self, store: Store) -> Self {
        self.store = Some(store);
        self
    }
}

/// A labeled, directed connector between two node identities
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Flow {
    #[serde(alias = "src")]
    pub source: NodeId,
    pub target: NodeId,
    #[serde(default)]
    pub label: String,
    /// Drawn as a dashed line (store access)
    #[serde(default)]
    pub dashed: bool,
    /// Drawn as a curved line (notifications)
    #[serde(default)]
    pub curved: bool,
}

impl Flow {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            source: NodeId::new(source),
            target: NodeId::new(target),
            label: label.into(),
            dashed: false,
            curved: false,
        }
    }

    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }

    pub fn curved(mut self) -> Self {
        self.curved = true;
        self
    }
}

fn default_level() -> u8 {
    2
}

/// A complete data-flow diagram description
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Diagram {
    /// Short name used for the diagram element's id and display name
    pub name: String,
    /// DFD decomposition level
    #[serde(default = "default_level")]
    pub level: u8,
    /// Text of the title block
    #[serde(default)]
    pub title: String,
    /// Preferred output file name, used by the CLI
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub processes: Vec<Process>,
    #[serde(default)]
    pub flows: Vec<Flow>,
}

impl Diagram {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: default_level(),
            title: String::new(),
            output: None,
            entities: vec![],
            processes: vec![],
            flows: vec![],
        }
    }

    /// Load a diagram description from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, DiagramFileError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load a diagram description from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, DiagramFileError> {
        Ok(toml::from_str(content)?)
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.entities.push(entity);
        self
    }

    pub fn with_process(mut self, process: Process) -> Self {
        self.processes.push(process);
        self
    }

    pub fn with_flow(mut self, flow: Flow) -> Self {
        self.flows.push(flow);
        self
    }

    /// Id of the `diagram` element, e.g. `dfd2-jadwal`
    pub fn diagram_id(&self) -> String {
        format!("dfd{}-{}", self.level, self.name.to_lowercase())
    }

    /// Display name of the `diagram` element, e.g. `DFD Level 2 - Jadwal`
    pub fn display_name(&self) -> String {
        format!("DFD Level {} - {}", self.level, self.name)
    }

    /// All stores in process order
    pub fn stores(&self) -> impl Iterator<Item = (&Process, &Store)> {
        self.processes
            .iter()
            .filter_map(|p| p.store.as_ref().map(|s| (p, s)))
    }

    /// Ids of every declared node: entities, then processes each followed by its store
    pub fn node_ids(&self) -> Vec<&NodeId> {
        let mut ids: Vec<&NodeId> = self.entities.iter().map(|e| &e.id).collect();
        for process in &self.processes {
            ids.push(&process.id);
            if let Some(store) = &process.store {
                ids.push(&store.id);
            }
        }
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagram_identity() {
        let diagram = Diagram::new("Jadwal");
        assert_eq!(diagram.diagram_id(), "dfd2-jadwal");
        assert_eq!(diagram.display_name(), "DFD Level 2 - Jadwal");

        let level1 = Diagram::new("Overview").with_level(1);
        assert_eq!(level1.diagram_id(), "dfd1-overview");
    }

    #[test]
    fn test_node_ids_order() {
        let diagram = Diagram::new("d")
            .with_entity(Entity::new("admin", "Admin", Side::Left))
            .with_process(Process::new("p1", "One").with_store(Store::new("ds1", "D1")))
            .with_process(Process::new("p2", "Two"));

        let ids: Vec<&str> = diagram.node_ids().iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["admin", "p1", "ds1", "p2"]);
    }

    #[test]
    fn test_parse_toml_description() {
        let toml_str = r#"
name = "Kegiatan"
title = "Manajemen Kegiatan"
output = "kegiatan.drawio"

[[entities]]
id = "admin"
label = "Admin"
side = "left"

[[processes]]
id = "p41"
label = "4.1\nBuat Kegiatan"
store = { id = "ds4a", label = "D4 | Activity" }

[[processes]]
id = "p42"
label = "4.2"

[[flows]]
src = "admin"
target = "p41"
label = "input kegiatan"
curved = true
"#;
        let diagram = Diagram::from_toml_str(toml_str).expect("Should parse");
        assert_eq!(diagram.level, 2);
        assert_eq!(diagram.output.as_deref(), Some("kegiatan.drawio"));
        assert_eq!(diagram.entities[0].side, Side::Left);
        assert_eq!(diagram.processes[0].label, "4.1\nBuat Kegiatan");
        assert_eq!(
            diagram.processes[0].store,
            Some(Store::new("ds4a", "D4 | Activity"))
        );
        assert!(diagram.processes[1].store.is_none());
        assert_eq!(diagram.flows[0].source, NodeId::new("admin"));
        assert!(diagram.flows[0].curved);
        assert!(!diagram.flows[0].dashed);
    }

    #[test]
    fn test_invalid_side_rejected() {
        let toml_str = r#"
name = "x"
[[entities]]
id = "a"
label = "A"
side = "top"
"#;
        assert!(Diagram::from_toml_str(toml_str).is_err());
    }
}
