//! Render configuration files
//!
//! A configuration file is TOML with optional `[layout]`, `[document]` and
//! `[styles]` tables plus a top-level `strict` switch:
//!
//! ```toml
//! strict = true
//!
//! [layout]
//! process_columns = 4
//!
//! [document]
//! page_size = [2400, 1600]
//!
//! [styles]
//! process = "ellipse;whiteSpace=wrap;html=1;"
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use std::path::Path;

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::layout::LayoutConfig;
use crate::renderer::DocumentConfig;
use crate::stylesheet::Stylesheet;
use crate::RenderConfig;

/// Errors that can occur when loading a render configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse configuration TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    strict: bool,
    layout: LayoutConfig,
    document: DocumentConfig,
    styles: Stylesheet,
}

impl From<ConfigFile> for RenderConfig {
    fn from(file: ConfigFile) -> Self {
        RenderConfig::new()
            .with_layout(file.layout)
            .with_document(file.document)
            .with_stylesheet(file.styles)
            .with_strict(file.strict)
    }
}

/// Parse a render configuration from TOML
pub fn parse_config(content: &str) -> Result<RenderConfig, ConfigError> {
    let file: ConfigFile = toml::from_str(content)?;
    Ok(file.into())
}

/// Load a render configuration, falling back to defaults when no path is given
pub fn load_config(path: Option<&Path>) -> Result<RenderConfig, ConfigError> {
    match path {
        Some(path) => {
            debug!(path:? = path; "Loading configuration");
            let content = std::fs::read_to_string(path)?;
            parse_config(&content)
        }
        None => Ok(RenderConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = parse_config("").unwrap();
        assert_eq!(config.layout, LayoutConfig::default());
        assert_eq!(config.document, DocumentConfig::default());
        assert_eq!(config.stylesheet, Stylesheet::default());
        assert!(!config.strict);
    }

    #[test]
    fn test_sections_override_defaults() {
        let toml_str = r#"
strict = true

[layout]
process_columns = 4
store_offset_y = -90.0

[document]
page_size = [2400, 1600]
pretty_print = false

[styles]
dashed = "dashed=1;dashPattern=8 8;"
"#;
        let config = parse_config(toml_str).unwrap();
        assert!(config.strict);
        assert_eq!(config.layout.process_columns, 4);
        assert_eq!(config.layout.store_offset_y, -90.0);
        assert_eq!(config.layout.left_x, 150.0);
        assert_eq!(config.document.page_size, (2400, 1600));
        assert!(!config.document.pretty_print);
        assert_eq!(config.stylesheet.dashed, "dashed=1;dashPattern=8 8;");
    }

    #[test]
    fn test_unknown_section_rejected() {
        assert!(parse_config("[colors]\nred = \"#f00\"").is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_config(Some(Path::new("/nonexistent/dfd.toml")));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_no_path_gives_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.layout.process_columns, 3);
    }
}
