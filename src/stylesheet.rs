//! Style strings for draw.io cells
//!
//! Each node role maps to one fixed style template, and connectors share a
//! base style extended by the `dashed` and `curved` fragments. The `[styles]`
//! table of a render configuration restyles a diagram without touching the
//! layout.

use serde::Deserialize;

use crate::layout::Role;

pub const ENTITY_STYLE: &str = "rounded=0;whiteSpace=wrap;html=1;fillColor=#fff2cc;strokeColor=#d6b656;strokeWidth=2;fontSize=13;fontStyle=1;";
pub const PROCESS_STYLE: &str =
    "ellipse;whiteSpace=wrap;html=1;fillColor=#dae8fc;strokeColor=#6c8ebf;strokeWidth=2;fontSize=12;";
pub const STORE_STYLE: &str = "shape=partialRectangle;whiteSpace=wrap;html=1;left=0;right=0;fillColor=#f5f5f5;strokeColor=#666666;fontSize=12;";
pub const TITLE_STYLE: &str = "text;html=1;strokeColor=none;fillColor=none;align=center;verticalAlign=middle;whiteSpace=wrap;rounded=0;fontSize=20;fontStyle=1;";
pub const FLOW_STYLE: &str = "endArrow=classic;html=1;strokeWidth=1.5;";
pub const DASHED_FRAGMENT: &str = "dashed=1;";
pub const CURVED_FRAGMENT: &str = "curved=1;";

/// Style templates for every kind of cell
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Stylesheet {
    pub entity: String,
    pub process: String,
    pub store: String,
    pub title: String,
    /// Base style shared by every connector
    pub flow: String,
    pub dashed: String,
    pub curved: String,
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self {
            entity: ENTITY_STYLE.to_string(),
            process: PROCESS_STYLE.to_string(),
            store: STORE_STYLE.to_string(),
            title: TITLE_STYLE.to_string(),
            flow: FLOW_STYLE.to_string(),
            dashed: DASHED_FRAGMENT.to_string(),
            curved: CURVED_FRAGMENT.to_string(),
        }
    }
}

impl Stylesheet {
    /// Style template for a node role
    pub fn node_style(&self, role: Role) -> &str {
        match role {
            Role::Entity => &self.entity,
            Role::Process => &self.process,
            Role::Store => &self.store,
        }
    }

    /// Connector style: base, then `dashed`, then `curved`
    pub fn connector_style(&self, dashed: bool, curved: bool) -> String {
        let mut style = self.flow.clone();
        if dashed {
            style.push_str(&self.dashed);
        }
        if curved {
            style.push_str(&self.curved);
        }
        style
    }
}
