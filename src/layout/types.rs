//! Core types for the layout engine

use std::collections::HashMap;

use crate::model::NodeId;

/// A bounding box representing the spatial extent of a node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// The role of a node, which selects its shape style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Entity,
    Process,
    Store,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Entity => "entity",
            Role::Process => "process",
            Role::Store => "store",
        }
    }
}

/// Layout information for a single node
#[derive(Debug, Clone, PartialEq)]
pub struct NodeLayout {
    pub id: NodeId,
    pub label: String,
    pub role: Role,
    pub bounds: BoundingBox,
}

/// Layout information for the title block
#[derive(Debug, Clone, PartialEq)]
pub struct TitleLayout {
    pub text: String,
    pub bounds: BoundingBox,
}

/// Where a connector came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectorKind {
    /// Declared by the caller
    Flow,
    /// Synthesized between a process and its store
    StoreAccess,
}

/// A connector between two node identities
///
/// Connectors carry no coordinates; the consuming editor routes them.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorLayout {
    pub source: NodeId,
    pub target: NodeId,
    pub label: String,
    pub kind: ConnectorKind,
    pub dashed: bool,
    pub curved: bool,
}

impl ConnectorLayout {
    /// Cell id derived from the endpoints, e.g. `flow_admin_p1` or `conn_ds1_p1`
    pub fn cell_id(&self) -> String {
        let prefix = match self.kind {
            ConnectorKind::Flow => "flow",
            ConnectorKind::StoreAccess => "conn",
        };
        format!("{}_{}_{}", prefix, self.source, self.target)
    }
}

/// The complete result of layout computation
#[derive(Debug, Clone)]
pub struct LayoutResult {
    /// Title block
    pub title: TitleLayout,
    /// Nodes in document order
    pub nodes: Vec<NodeLayout>,
    /// Node index into `nodes` by identifier (last declaration wins)
    pub index: HashMap<String, usize>,
    /// Connectors in document order
    pub connectors: Vec<ConnectorLayout>,
}

impl LayoutResult {
    /// Create an empty layout result with the given title block
    pub fn new(title: TitleLayout) -> Self {
        Self {
            title,
            nodes: vec![],
            index: HashMap::new(),
            connectors: vec![],
        }
    }

    /// Add a node to the layout
    pub fn add_node(&mut self, node: NodeLayout) {
        self.index.insert(node.id.0.clone(), self.nodes.len());
        self.nodes.push(node);
    }

    /// Get a node by name string
    pub fn get_node_by_name(&self, name: &str) -> Option<&NodeLayout> {
        self.index.get(name).map(|&i| &self.nodes[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title() -> TitleLayout {
        TitleLayout {
            text: "t".to_string(),
            bounds: BoundingBox::new(600.0, 50.0, 600.0, 40.0),
        }
    }

    #[test]
    fn test_connector_cell_id() {
        let mut conn = ConnectorLayout {
            source: NodeId::new("admin"),
            target: NodeId::new("p1"),
            label: String::new(),
            kind: ConnectorKind::Flow,
            dashed: false,
            curved: false,
        };
        assert_eq!(conn.cell_id(), "flow_admin_p1");
        conn.kind = ConnectorKind::StoreAccess;
        assert_eq!(conn.cell_id(), "conn_admin_p1");
    }

    #[test]
    fn test_layout_result_index() {
        let mut result = LayoutResult::new(title());
        result.add_node(NodeLayout {
            id: NodeId::new("p1"),
            label: "P".to_string(),
            role: Role::Process,
            bounds: BoundingBox::new(500.0, 300.0, 130.0, 100.0),
        });
        result.add_node(NodeLayout {
            id: NodeId::new("p1"),
            label: "P again".to_string(),
            role: Role::Process,
            bounds: BoundingBox::new(850.0, 300.0, 130.0, 100.0),
        });

        assert_eq!(result.nodes.len(), 2);
        assert_eq!(result.get_node_by_name("p1").map(|n| n.bounds.x), Some(850.0));
        assert!(result.get_node_by_name("missing").is_none());
    }
}
