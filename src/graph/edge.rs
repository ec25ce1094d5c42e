use super::vertex::VertexId;

/// Identifier for an edge: its index in the graph's edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

/// Data associated with an undirected graph edge.
///
/// The weight is the Euclidean distance between the two endpoints and is
/// fixed when the graph is built.
#[derive(Debug, Clone)]
pub struct EdgeData {
    /// First endpoint, as listed in the input.
    pub start: VertexId,
    /// Second endpoint, as listed in the input.
    pub end: VertexId,
    /// Travel cost between the endpoints.
    pub weight: f64,
}
