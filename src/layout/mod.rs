//! Layout engine for computing node positions
//!
//! This module takes a diagram description and computes the fixed-grid
//! layout, producing a LayoutResult with positioned nodes and the connector
//! list.

pub mod config;
pub mod connectors;
pub mod engine;
pub mod error;
pub mod types;

pub use config::LayoutConfig;
pub use connectors::{attach_connectors, collect_connectors, store_access_connectors};
pub use engine::compute;
pub use error::LayoutError;
pub use types::*;

use std::collections::{HashMap, HashSet};

use crate::model::Diagram;

/// Strict validation: reject duplicate node ids, dangling flow endpoints and
/// duplicate flows.
///
/// The default pipeline never calls this; malformed diagrams render as-is.
pub fn validate_references(diagram: &Diagram) -> Result<(), LayoutError> {
    let defined = collect_defined_identifiers(diagram)?;

    let mut seen: HashMap<(&str, &str), &str> = HashMap::new();
    for flow in &diagram.flows {
        for endpoint in [&flow.source, &flow.target] {
            if !defined.contains(endpoint.as_str()) {
                return Err(LayoutError::undefined(
                    endpoint.as_str(),
                    flow.source.as_str(),
                    flow.target.as_str(),
                    find_similar(&defined, endpoint.as_str(), 2),
                ));
            }
        }

        let pair = (flow.source.as_str(), flow.target.as_str());
        if let Some(first) = seen.insert(pair, flow.label.as_str()) {
            return Err(LayoutError::DuplicateFlow {
                source_id: pair.0.to_string(),
                target_id: pair.1.to_string(),
                first: first.to_string(),
                second: flow.label.clone(),
            });
        }
    }
    Ok(())
}

fn collect_defined_identifiers(diagram: &Diagram) -> Result<HashSet<&str>, LayoutError> {
    let mut ids = HashSet::new();
    for id in diagram.node_ids() {
        if !ids.insert(id.as_str()) {
            return Err(LayoutError::DuplicateId {
                name: id.to_string(),
            });
        }
    }
    Ok(ids)
}

/// Compute Levenshtein edit distance between two strings
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Find similar identifiers within a maximum edit distance
fn find_similar(defined: &HashSet<&str>, target: &str, max_distance: usize) -> Vec<String> {
    let mut candidates: Vec<(&str, usize)> = defined
        .iter()
        .filter_map(|&name| {
            let dist = levenshtein_distance(name, target);
            (dist <= max_distance && dist > 0).then_some((name, dist))
        })
        .collect();

    candidates.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(b.0)));
    candidates
        .into_iter()
        .map(|(name, _)| name.to_string())
        .take(3)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Entity, Flow, Process, Side, Store};

    fn sample() -> Diagram {
        Diagram::new("sample")
            .with_entity(Entity::new("admin", "Admin", Side::Left))
            .with_process(Process::new("p21", "2.1").with_store(Store::new("ds2a", "D2")))
            .with_process(Process::new("p22", "2.2"))
            .with_flow(Flow::new("admin", "p21", "input"))
            .with_flow(Flow::new("p21", "ds2a", "write").dashed())
    }

    #[test]
    fn test_levenshtein_same() {
        assert_eq!(levenshtein_distance("p21", "p21"), 0);
    }

    #[test]
    fn test_levenshtein_one_off() {
        assert_eq!(levenshtein_distance("admin", "admn"), 1);
        assert_eq!(levenshtein_distance("p21", "p31"), 1);
    }

    #[test]
    fn test_levenshtein_different() {
        assert_eq!(levenshtein_distance("cat", "dog"), 3);
    }

    #[test]
    fn test_valid_diagram_passes() {
        assert!(validate_references(&sample()).is_ok());
    }

    #[test]
    fn test_dangling_endpoint_with_suggestions() {
        let diagram = sample().with_flow(Flow::new("p23", "admin", "x"));
        let err = validate_references(&diagram).unwrap_err();

        match err {
            LayoutError::UndefinedIdentifier {
                name, suggestions, ..
            } => {
                assert_eq!(name, "p23");
                assert_eq!(suggestions, vec!["p21".to_string(), "p22".to_string()]);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_duplicate_node_id() {
        let diagram = sample().with_process(Process::new("admin", "clash"));
        assert!(matches!(
            validate_references(&diagram),
            Err(LayoutError::DuplicateId { name }) if name == "admin"
        ));
    }

    #[test]
    fn test_duplicate_flow() {
        let diagram = sample().with_flow(Flow::new("admin", "p21", "again"));
        assert!(matches!(
            validate_references(&diagram),
            Err(LayoutError::DuplicateFlow { first, second, .. }) if first == "input" && second == "again"
        ));
    }
}
