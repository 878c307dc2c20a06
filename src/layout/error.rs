//! Error types for the layout engine

use thiserror::Error;

/// Errors that can occur during layout computation or strict validation
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Layout constants that make placement undefined
    #[error("invalid layout configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Two nodes declared with the same identifier
    #[error("duplicate node identifier '{name}'")]
    DuplicateId { name: String },

    /// Flow endpoint that names no declared node
    #[error(
        "undefined identifier '{name}' in flow {source_id} -> {target_id}{}",
        did_you_mean(.suggestions)
    )]
    UndefinedIdentifier {
        name: String,
        source_id: String,
        target_id: String,
        suggestions: Vec<String>,
    },

    /// Two flows between the same pair of nodes
    #[error("duplicate flow {source_id} -> {target_id} (labels '{first}' and '{second}')")]
    DuplicateFlow {
        source_id: String,
        target_id: String,
        first: String,
        second: String,
    },
}

impl LayoutError {
    /// Create an invalid configuration error
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create an undefined identifier error with suggestions
    pub fn undefined(
        name: impl Into<String>,
        source_id: impl Into<String>,
        target_id: impl Into<String>,
        suggestions: Vec<String>,
    ) -> Self {
        Self::UndefinedIdentifier {
            name: name.into(),
            source_id: source_id.into(),
            target_id: target_id.into(),
            suggestions,
        }
    }

    /// Get suggestions if available
    pub fn suggestions(&self) -> Option<&[String]> {
        match self {
            Self::UndefinedIdentifier { suggestions, .. } => Some(suggestions),
            _ => None,
        }
    }
}

fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}
