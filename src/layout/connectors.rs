//! Connector synthesis
//!
//! Builds the connector list for a diagram: two dashed store-access
//! connectors for every process that owns a store, then the declared flows.
//! Connectors are keyed by their cell id, so a later connector with the same
//! `(kind, source, target)` replaces an earlier one in place.

use indexmap::IndexMap;
use log::{trace, warn};

use crate::model::{Diagram, Flow, NodeId, Process, Store};

use super::types::{ConnectorKind, ConnectorLayout, LayoutResult};

/// The store→process and process→store connectors for one store
pub fn store_access_connectors(process: &Process, store: &Store) -> [ConnectorLayout; 2] {
    let access = |source: &NodeId, target: &NodeId| ConnectorLayout {
        source: source.clone(),
        target: target.clone(),
        label: String::new(),
        kind: ConnectorKind::StoreAccess,
        dashed: true,
        curved: false,
    };
    [
        access(&store.id, &process.id),
        access(&process.id, &store.id),
    ]
}

/// Connector for a declared flow
pub fn flow_connector(flow: &Flow) -> ConnectorLayout {
    ConnectorLayout {
        source: flow.source.clone(),
        target: flow.target.clone(),
        label: flow.label.clone(),
        kind: ConnectorKind::Flow,
        dashed: flow.dashed,
        curved: flow.curved,
    }
}

/// Every connector of a diagram in document order, duplicates collapsed
pub fn collect_connectors(diagram: &Diagram) -> Vec<ConnectorLayout> {
    let synthesized = diagram
        .stores()
        .flat_map(|(process, store)| store_access_connectors(process, store));
    let declared = diagram.flows.iter().map(flow_connector);

    let mut by_cell: IndexMap<String, ConnectorLayout> = IndexMap::new();
    for connector in synthesized.chain(declared) {
        let cell_id = connector.cell_id();
        if let Some(previous) = by_cell.insert(cell_id, connector) {
            warn!(
                from = previous.source.as_str(),
                to = previous.target.as_str(),
                dropped_label = previous.label.as_str();
                "Connector identity collision; the later declaration wins"
            );
        }
    }

    trace!(count = by_cell.len(); "Collected connectors");
    by_cell.into_values().collect()
}

/// Attach the diagram's connectors to a computed layout
pub fn attach_connectors(result: &mut LayoutResult, diagram: &Diagram) {
    result.connectors = collect_connectors(diagram);
}
