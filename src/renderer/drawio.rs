//! draw.io document generation from layout results

use log::{debug, trace};

use crate::layout::{BoundingBox, ConnectorLayout, LayoutResult, NodeLayout};
use crate::model::Diagram;
use crate::stylesheet::Stylesheet;

use super::DocumentConfig;

/// Depth of content cells below `mxfile > diagram > mxGraphModel > root`
const CELL_INDENT: usize = 4;

/// Build a draw.io document incrementally
pub struct DrawioBuilder {
    config: DocumentConfig,
    cells: Vec<String>,
}

impl DrawioBuilder {
    /// Create a new builder with the two anchor cells in place
    pub fn new(config: DocumentConfig) -> Self {
        let mut builder = Self {
            config,
            cells: vec![],
        };
        builder.push_line(CELL_INDENT, r#"<mxCell id="0" />"#);
        builder.push_line(CELL_INDENT, r#"<mxCell id="1" parent="0" />"#);
        builder
    }

    fn indent_str(&self, depth: usize) -> String {
        if self.config.pretty_print {
            "  ".repeat(depth)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn push_line(&mut self, depth: usize, line: &str) {
        let line = format!("{}{}", self.indent_str(depth), line);
        self.cells.push(line);
    }

    /// Add a shape cell with absolute geometry
    pub fn add_vertex(&mut self, id: &str, value: &str, style: &str, bounds: &BoundingBox) {
        self.push_line(
            CELL_INDENT,
            &format!(
                r#"<mxCell id="{}" value="{}" style="{}" vertex="1" parent="1">"#,
                escape_attr(id),
                escape_attr(value),
                escape_attr(style)
            ),
        );
        self.push_line(
            CELL_INDENT + 1,
            &format!(
                r#"<mxGeometry x="{}" y="{}" width="{}" height="{}" as="geometry" />"#,
                bounds.x, bounds.y, bounds.width, bounds.height
            ),
        );
        self.push_line(CELL_INDENT, "</mxCell>");
    }

    /// Add a connector cell; the editor computes its route
    pub fn add_edge(&mut self, id: &str, value: &str, style: &str, source: &str, target: &str) {
        self.push_line(
            CELL_INDENT,
            &format!(
                r#"<mxCell id="{}" value="{}" style="{}" edge="1" parent="1" source="{}" target="{}">"#,
                escape_attr(id),
                escape_attr(value),
                escape_attr(style),
                escape_attr(source),
                escape_attr(target)
            ),
        );
        self.push_line(
            CELL_INDENT + 1,
            r#"<mxGeometry relative="1" as="geometry" />"#,
        );
        self.push_line(CELL_INDENT, "</mxCell>");
    }

    /// Build the final document string
    pub fn build(self, diagram_id: &str, diagram_name: &str) -> String {
        let nl = self.newline();
        let c = &self.config;
        let flag = |on: bool| if on { "1" } else { "0" };

        let mut doc = String::new();
        doc.push_str(&format!(
            r#"<mxfile host="{}" agent="{}" version="{}" type="{}">"#,
            escape_attr(&c.host),
            escape_attr(&c.agent),
            escape_attr(&c.version),
            escape_attr(&c.file_type)
        ));
        doc.push_str(nl);

        doc.push_str(&self.indent_str(1));
        doc.push_str(&format!(
            r#"<diagram id="{}" name="{}">"#,
            escape_attr(diagram_id),
            escape_attr(diagram_name)
        ));
        doc.push_str(nl);

        doc.push_str(&self.indent_str(2));
        doc.push_str(&format!(
            r#"<mxGraphModel dx="{}" dy="{}" grid="{}" gridSize="{}" guides="1" tooltips="1" connect="1" arrows="1" fold="1" page="1" pageScale="{}" pageWidth="{}" pageHeight="{}" math="0" shadow="{}">"#,
            c.viewport.0,
            c.viewport.1,
            flag(c.grid),
            c.grid_size,
            c.page_scale,
            c.page_size.0,
            c.page_size.1,
            flag(c.shadow)
        ));
        doc.push_str(nl);

        doc.push_str(&self.indent_str(3));
        doc.push_str("<root>");
        doc.push_str(nl);

        for cell in &self.cells {
            doc.push_str(cell);
            doc.push_str(nl);
        }

        doc.push_str(&self.indent_str(3));
        doc.push_str("</root>");
        doc.push_str(nl);
        doc.push_str(&self.indent_str(2));
        doc.push_str("</mxGraphModel>");
        doc.push_str(nl);
        doc.push_str(&self.indent_str(1));
        doc.push_str("</diagram>");
        doc.push_str(nl);
        doc.push_str("</mxfile>");

        doc
    }
}

/// Render a LayoutResult to a draw.io document (with default stylesheet)
pub fn render_drawio(diagram: &Diagram, result: &LayoutResult, config: &DocumentConfig) -> String {
    render_drawio_with_stylesheet(diagram, result, config, &Stylesheet::default())
}

/// Render a LayoutResult to a draw.io document with a custom stylesheet
///
/// No validation happens here: connectors naming unknown nodes are emitted
/// as-is and left for the editor to report.
pub fn render_drawio_with_stylesheet(
    diagram: &Diagram,
    result: &LayoutResult,
    config: &DocumentConfig,
    stylesheet: &Stylesheet,
) -> String {
    let mut builder = DrawioBuilder::new(config.clone());

    builder.add_vertex(
        "title",
        &result.title.text,
        &stylesheet.title,
        &result.title.bounds,
    );

    for node in &result.nodes {
        render_node(node, stylesheet, &mut builder);
    }

    for connector in &result.connectors {
        render_connector(connector, stylesheet, &mut builder);
    }

    debug!(
        diagram = diagram.name.as_str(),
        nodes = result.nodes.len(),
        connectors = result.connectors.len();
        "Document rendered"
    );
    builder.build(&diagram.diagram_id(), &diagram.display_name())
}

fn render_node(node: &NodeLayout, stylesheet: &Stylesheet, builder: &mut DrawioBuilder) {
    trace!(id = node.id.as_str(), role = node.role.as_str(); "Rendering node");
    builder.add_vertex(
        node.id.as_str(),
        &node.label,
        stylesheet.node_style(node.role),
        &node.bounds,
    );
}

fn render_connector(
    connector: &ConnectorLayout,
    stylesheet: &Stylesheet,
    builder: &mut DrawioBuilder,
) {
    builder.add_edge(
        &connector.cell_id(),
        &connector.label,
        &stylesheet.connector_style(connector.dashed, connector.curved),
        connector.source.as_str(),
        connector.target.as_str(),
    );
}

/// Escape special XML characters for use inside a double-quoted attribute
///
/// Line breaks become character references so multi-line labels survive
/// attribute-value normalization.
fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\n' => out.push_str("&#xa;"),
            '\r' => out.push_str("&#xd;"),
            '\t' => out.push_str("&#x9;"),
            _ => out.push(ch),
        }
    }
    out
}
