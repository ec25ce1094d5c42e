//! Reading navigation graphs from JSON routing documents.
//!
//! A document is a JSON object with a `routing` member holding the raw
//! arrays:
//!
//! ```json
//! { "routing": { "vertices": [[0, 0, 0], [1, 0, 0]], "edges": [[0, 1]] } }
//! ```
//!
//! Shape and bounds checks are left to [`NavGraph::from_arrays`], so a
//! malformed vertex or an out-of-range edge surfaces as the same
//! [`GraphError`](crate::error::GraphError) either way.

use serde::Deserialize;
use tracing::debug;

use crate::error::{ParseError, Result};
use crate::graph::NavGraph;

#[derive(Debug, Deserialize)]
struct RoutingSection {
    vertices: Vec<Vec<f64>>,
    edges: Vec<Vec<i64>>,
}

/// Parses a routing document and builds its graph.
///
/// # Errors
///
/// Returns [`ParseError::ParseFailure`] if the bytes are not a JSON object or
/// the section's arrays have the wrong types,
/// [`ParseError::MissingRoutingSection`] if there is no `routing` object, and
/// any construction error from [`NavGraph::from_arrays`].
pub fn parse_routing(data: &[u8]) -> Result<NavGraph> {
    let doc: serde_json::Value =
        serde_json::from_slice(data).map_err(|e| ParseError::ParseFailure(e.to_string()))?;

    let Some(root) = doc.as_object() else {
        return Err(ParseError::ParseFailure("document root is not an object".into()).into());
    };
    let section = match root.get("routing") {
        Some(section) if section.is_object() => section,
        _ => return Err(ParseError::MissingRoutingSection.into()),
    };

    let routing = RoutingSection::deserialize(section)
        .map_err(|e| ParseError::ParseFailure(e.to_string()))?;
    debug!(
        vertices = routing.vertices.len(),
        edges = routing.edges.len(),
        "parsed routing section"
    );

    Ok(NavGraph::from_arrays(&routing.vertices, &routing.edges)?)
}

/// Parses a routing document held in a string. See [`parse_routing`].
///
/// # Errors
///
/// Same as [`parse_routing`].
pub fn parse_routing_str(data: &str) -> Result<NavGraph> {
    parse_routing(data.as_bytes())
}
