use thiserror::Error;

use crate::graph::VertexId;

/// Top-level error type for the navgraph router.
#[derive(Debug, Error)]
pub enum NavError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors raised while building or inspecting a navigation graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("graph needs at least two vertices")]
    EmptyVertices,

    #[error("graph needs at least one edge")]
    EmptyEdges,

    #[error("vertex {index} must have exactly three finite coordinates")]
    MalformedVertex { index: usize },

    #[error("edge {index} must have exactly two vertex indices")]
    MalformedEdge { index: usize },

    #[error("edge {edge} references vertex {vertex}, which is out of range")]
    EdgeIndexOutOfRange { edge: usize, vertex: i64 },

    #[error("edge {edge} connects a vertex to itself")]
    SelfLoop { edge: usize },

    #[error("vertex not found: {0}")]
    VertexNotFound(VertexId),

    #[error("edge not found: {0}")]
    EdgeNotFound(usize),
}

/// Errors raised by path queries against a valid graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("no path between vertex {start} and vertex {end}")]
    NoPathFound { start: VertexId, end: VertexId },

    #[error("no route connects the query points")]
    NoRouteFound,

    #[error("destination list is empty")]
    EmptyDestinations,
}

/// Errors raised while reading a routing document.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("document has no `routing` section")]
    MissingRoutingSection,

    #[error("failed to parse routing document: {0}")]
    ParseFailure(String),
}

/// Convenience type alias for results using [`NavError`].
pub type Result<T> = std::result::Result<T, NavError>;
