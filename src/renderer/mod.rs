//! draw.io renderer for generating documents from layout results
//!
//! This module takes a LayoutResult and produces the `mxfile` text a
//! draw.io compatible editor opens directly.

pub mod config;
pub mod drawio;

pub use config::DocumentConfig;
pub use drawio::{render_drawio, render_drawio_with_stylesheet};
