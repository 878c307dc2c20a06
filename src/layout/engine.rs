//! Layout computation engine
//!
//! Placement is index-driven and deterministic; there is no iterative
//! relaxation and no overlap resolution beyond what the formulas guarantee.
//!
//! - Entities sit in one of two fixed columns chosen by their side. Within a
//!   column, `y = row_start_y + (i * entity_row_height) % entity_band_height`
//!   where `i` counts entities on that side, so positions repeat once a side
//!   holds more than [`LayoutConfig::entity_rows_per_band`] entities.
//! - Processes fill a grid row by row, `process_columns` wide.
//! - A store shares its process's x and sits `store_offset_y` above it.
//! - The title block has fixed bounds.

use log::{debug, trace, warn};

use crate::model::{Diagram, Entity, Process, Side, Store};

use super::config::LayoutConfig;
use super::error::LayoutError;
use super::types::*;

/// Compute positions for every node of a diagram
///
/// Connectors are not part of this step; see [`super::attach_connectors`].
pub fn compute(diagram: &Diagram, config: &LayoutConfig) -> Result<LayoutResult, LayoutError> {
    check_config(config)?;

    let mut result = LayoutResult::new(title_layout(&diagram.title, config));

    let mut left_index = 0;
    let mut right_index = 0;
    for entity in &diagram.entities {
        let index = match entity.side {
            Side::Left => &mut left_index,
            Side::Right => &mut right_index,
        };
        result.add_node(place_entity(entity, *index, config));
        *index += 1;
    }

    for (index, process) in diagram.processes.iter().enumerate() {
        let node = place_process(process, index, config);
        let store = process
            .store
            .as_ref()
            .map(|store| place_store(store, &node.bounds, config));
        result.add_node(node);
        if let Some(store) = store {
            result.add_node(store);
        }
    }

    debug!(
        diagram = diagram.name.as_str(),
        nodes = result.nodes.len();
        "Layout computed"
    );
    Ok(result)
}

fn check_config(config: &LayoutConfig) -> Result<(), LayoutError> {
    if config.process_columns == 0 {
        return Err(LayoutError::invalid_config(
            "process_columns must be at least 1",
        ));
    }
    if !(config.entity_band_height > 0.0 && config.entity_band_height.is_finite()) {
        return Err(LayoutError::invalid_config(format!(
            "entity_band_height must be positive and finite, got {}",
            config.entity_band_height
        )));
    }
    if !config.entity_row_height.is_finite() {
        return Err(LayoutError::invalid_config(format!(
            "entity_row_height must be finite, got {}",
            config.entity_row_height
        )));
    }
    if !config.process_grid_is_clear() {
        warn!(
            column_gap = config.process_column_gap,
            row_gap = config.process_row_gap;
            "Process grid spacing is smaller than a process and its store; nodes may overlap"
        );
    }
    Ok(())
}

fn title_layout(text: &str, config: &LayoutConfig) -> TitleLayout {
    let (x, y) = config.title_position;
    let (width, height) = config.title_size;
    TitleLayout {
        text: text.to_string(),
        bounds: BoundingBox::new(x, y, width, height),
    }
}

/// Place an entity given its index among entities on the same side
fn place_entity(entity: &Entity, side_index: usize, config: &LayoutConfig) -> NodeLayout {
    let x = match entity.side {
        Side::Left => config.left_x,
        Side::Right => config.right_x,
    };
    let y = config.row_start_y
        + (side_index as f64 * config.entity_row_height).rem_euclid(config.entity_band_height);
    let (width, height) = config.entity_size;

    trace!(id = entity.id.as_str(), x = x, y = y; "Placed entity");
    NodeLayout {
        id: entity.id.clone(),
        label: entity.label.clone(),
        role: Role::Entity,
        bounds: BoundingBox::new(x, y, width, height),
    }
}

/// Place a process at its grid cell; `process_columns` is checked by [`compute`]
fn place_process(process: &Process, index: usize, config: &LayoutConfig) -> NodeLayout {
    let column = index % config.process_columns;
    let row = index / config.process_columns;
    let x = config.process_start_x + column as f64 * config.process_column_gap;
    let y = config.row_start_y + row as f64 * config.process_row_gap;
    let (width, height) = config.process_size;

    trace!(id = process.id.as_str(), column = column, row = row; "Placed process");
    NodeLayout {
        id: process.id.clone(),
        label: process.label.clone(),
        role: Role::Process,
        bounds: BoundingBox::new(x, y, width, height),
    }
}

/// Place a store relative to its owning process
fn place_store(store: &Store, process: &BoundingBox, config: &LayoutConfig) -> NodeLayout {
    let (width, height) = config.store_size;
    NodeLayout {
        id: store.id.clone(),
        label: store.label.clone(),
        role: Role::Store,
        bounds: BoundingBox::new(
            process.x,
            process.y + config.store_offset_y,
            width,
            height,
        ),
    }
}
