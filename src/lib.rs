//! DFD Illustrator - data-flow diagram layout and draw.io generation
//!
//! This library lays out a declarative data-flow diagram (entities,
//! processes with optional data stores, and flows) on a fixed grid and
//! renders it as a draw.io `mxfile` document.
//!
//! # Example
//!
//! ```rust
//! use dfd_illustrator::{render, Diagram, Entity, Flow, Process, Side};
//!
//! let diagram = Diagram::new("Orders")
//!     .with_title("Order handling")
//!     .with_entity(Entity::new("customer", "Customer", Side::Left))
//!     .with_process(Process::new("p1", "1.0\nTake order"))
//!     .with_flow(Flow::new("customer", "p1", "order"));
//!
//! let doc = render(&diagram).unwrap();
//! assert!(doc.starts_with("<mxfile"));
//! assert!(doc.contains(r#"id="flow_customer_p1""#));
//! ```

pub mod config;
pub mod layout;
pub mod model;
pub mod renderer;
pub mod stylesheet;

pub use config::{load_config, parse_config, ConfigError};
pub use layout::{LayoutConfig, LayoutError, LayoutResult};
pub use model::{Diagram, DiagramFileError, Entity, Flow, NodeId, Process, Side, Store};
pub use renderer::{render_drawio, render_drawio_with_stylesheet, DocumentConfig};

use log::{debug, trace};
use thiserror::Error;

// Re-export Stylesheet for public API
pub use stylesheet::Stylesheet;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error during layout or strict validation
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Layout configuration
    pub layout: LayoutConfig,
    /// Document output configuration
    pub document: DocumentConfig,
    /// Cell styles
    pub stylesheet: Stylesheet,
    /// Reject duplicate ids, dangling endpoints and duplicate flows
    pub strict: bool,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the document configuration
    pub fn with_document(mut self, config: DocumentConfig) -> Self {
        self.document = config;
        self
    }

    /// Set the stylesheet
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Enable or disable strict validation
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Render a diagram to a draw.io document with default configuration
///
/// This is the main entry point for the library. It computes the layout,
/// synthesizes the store-access connectors, and generates the document.
pub fn render(diagram: &Diagram) -> Result<String, RenderError> {
    render_with_config(diagram, &RenderConfig::default())
}

/// Render a diagram to a draw.io document with custom configuration
///
/// # Example
///
/// ```rust
/// use dfd_illustrator::{render_with_config, Diagram, LayoutConfig, Process, RenderConfig};
///
/// let config = RenderConfig::new()
///     .with_layout(LayoutConfig::default().with_process_columns(2));
/// let diagram = Diagram::new("Grid")
///     .with_process(Process::new("a", "A"))
///     .with_process(Process::new("b", "B"))
///     .with_process(Process::new("c", "C"));
///
/// let doc = render_with_config(&diagram, &config).unwrap();
/// assert!(doc.contains(r#"<mxGeometry x="500" y="550" width="130" height="100" as="geometry" />"#));
/// ```
pub fn render_with_config(diagram: &Diagram, config: &RenderConfig) -> Result<String, RenderError> {
    if config.strict {
        layout::validate_references(diagram)?;
        trace!(diagram = diagram.name.as_str(); "Strict validation passed");
    }

    // Place nodes
    let mut result = layout::compute(diagram, &config.layout)?;

    // Store-access connectors and declared flows
    layout::attach_connectors(&mut result, diagram);

    debug!(
        diagram = diagram.name.as_str(),
        connectors = result.connectors.len();
        "Connectors attached"
    );

    Ok(render_drawio_with_stylesheet(
        diagram,
        &result,
        &config.document,
        &config.stylesheet,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Diagram {
        Diagram::new("Scenario")
            .with_title("Scenario")
            .with_entity(Entity::new("admin", "Admin", Side::Left))
            .with_entity(Entity::new("user", "User", Side::Right))
            .with_process(Process::new("p1", "Process"))
            .with_flow(Flow::new("admin", "p1", "x"))
    }

    #[test]
    fn test_render_scenario() {
        let doc = render(&scenario()).unwrap();
        assert_eq!(doc.matches(r#"vertex="1""#).count(), 4);
        assert_eq!(doc.matches(r#"edge="1""#).count(), 1);
        assert!(doc.contains(r#"<mxCell id="flow_admin_p1" value="x""#));
    }

    #[test]
    fn test_render_dangling_reference_is_not_an_error() {
        let diagram = scenario().with_flow(Flow::new("p1", "ghost", "lost"));
        let doc = render(&diagram).unwrap();
        assert!(doc.contains(r#"target="ghost""#));
    }

    #[test]
    fn test_strict_rejects_dangling_reference() {
        let diagram = scenario().with_flow(Flow::new("p1", "ghost", "lost"));
        let config = RenderConfig::new().with_strict(true);
        let err = render_with_config(&diagram, &config).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Layout(LayoutError::UndefinedIdentifier { .. })
        ));
    }

    #[test]
    fn test_strict_error_names_close_identifiers() {
        let diagram = Diagram::new("Near")
            .with_entity(Entity::new("admin", "Admin", Side::Left))
            .with_process(Process::new("p21", "2.1"))
            .with_flow(Flow::new("admin", "p22", "x"));
        let config = RenderConfig::new().with_strict(true);
        let err = render_with_config(&diagram, &config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "layout error: undefined identifier 'p22' in flow admin -> p22, did you mean: p21?"
        );
    }

    #[test]
    fn test_invalid_layout_config_surfaces() {
        let config =
            RenderConfig::new().with_layout(LayoutConfig::default().with_process_columns(0));
        assert!(render_with_config(&scenario(), &config).is_err());
    }

    #[test]
    fn test_custom_stylesheet_applied() {
        let stylesheet = Stylesheet {
            process: "ellipse;fillColor=#000000;".to_string(),
            ..Stylesheet::default()
        };
        let config = RenderConfig::new().with_stylesheet(stylesheet);
        let doc = render_with_config(&scenario(), &config).unwrap();
        assert!(doc.contains(r##"style="ellipse;fillColor=#000000;""##));
    }
}
