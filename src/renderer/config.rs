//! Configuration for draw.io document output

use serde::Deserialize;

/// Header metadata and canvas attributes of the emitted document
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// `mxfile` host attribute
    pub host: String,

    /// `mxfile` agent attribute
    pub agent: String,

    /// `mxfile` version attribute
    pub version: String,

    /// `mxfile` type attribute
    pub file_type: String,

    /// Editor viewport offset (dx, dy)
    pub viewport: (u32, u32),

    /// Whether the editor shows its grid
    pub grid: bool,

    /// Grid spacing in pixels
    pub grid_size: u32,

    /// Page size (width, height)
    pub page_size: (u32, u32),

    /// Page scale factor
    pub page_scale: f64,

    /// Whether shapes cast shadows
    pub shadow: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            host: "Electron".to_string(),
            agent: "Antigravity".to_string(),
            version: "24.0.0".to_string(),
            file_type: "device".to_string(),
            viewport: (1422, 800),
            grid: true,
            grid_size: 10,
            page_size: (2000, 1500),
            page_scale: 1.0,
            shadow: false,
            pretty_print: true,
        }
    }
}

impl DocumentConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the host and agent recorded in the file header
    pub fn with_generator(mut self, host: impl Into<String>, agent: impl Into<String>) -> Self {
        self.host = host.into();
        self.agent = agent.into();
        self
    }

    /// Set the page size
    pub fn with_page_size(mut self, width: u32, height: u32) -> Self {
        self.page_size = (width, height);
        self
    }

    /// Set the grid spacing
    pub fn with_grid_size(mut self, size: u32) -> Self {
        self.grid_size = size;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }
}
