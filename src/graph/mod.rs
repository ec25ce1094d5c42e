pub mod edge;
pub mod vertex;

pub use edge::{EdgeData, EdgeId};
pub use vertex::{VertexData, VertexId};

use tracing::debug;

use crate::error::GraphError;
use crate::math::{distance, Point3};

/// Static navigation graph: waypoints joined by undirected, distance-weighted
/// edges.
///
/// Vertices and edges are addressed by their index in the input lists. The
/// graph is built once and never mutated, so it can be shared freely between
/// threads for concurrent queries.
#[derive(Debug, Clone)]
pub struct NavGraph {
    vertices: Vec<VertexData>,
    edges: Vec<EdgeData>,
    adjacency: Vec<Vec<(VertexId, f64)>>,
}

impl NavGraph {
    /// Builds a graph from typed vertex positions and edge index pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than two vertices, no edges, a
    /// non-finite coordinate, an out-of-range edge index, or an edge whose
    /// endpoints are the same vertex.
    pub fn new(vertices: Vec<Point3>, edges: Vec<[usize; 2]>) -> Result<Self, GraphError> {
        check_counts(vertices.len(), edges.len())?;
        for (index, p) in vertices.iter().enumerate() {
            if !p.coords.iter().all(|c| c.is_finite()) {
                return Err(GraphError::MalformedVertex { index });
            }
        }
        for (index, &[a, b]) in edges.iter().enumerate() {
            check_edge(index, a, b, vertices.len())?;
        }
        Ok(Self::build(vertices, &edges))
    }

    /// Builds a graph from untyped coordinate and index arrays, as produced by
    /// a document parser.
    ///
    /// Checks run in order: vertex count, edge count, vertex shapes, then edge
    /// shapes and bounds. The first failure is reported.
    ///
    /// # Errors
    ///
    /// Returns an error for any violated graph invariant, see [`GraphError`].
    pub fn from_arrays<V, E>(vertices: &[V], edges: &[E]) -> Result<Self, GraphError>
    where
        V: AsRef<[f64]>,
        E: AsRef<[i64]>,
    {
        check_counts(vertices.len(), edges.len())?;

        let mut points = Vec::with_capacity(vertices.len());
        for (index, coords) in vertices.iter().enumerate() {
            match *coords.as_ref() {
                [x, y, z] if x.is_finite() && y.is_finite() && z.is_finite() => {
                    points.push(Point3::new(x, y, z));
                }
                _ => return Err(GraphError::MalformedVertex { index }),
            }
        }

        let mut pairs = Vec::with_capacity(edges.len());
        for (index, pair) in edges.iter().enumerate() {
            let [a, b] = *pair.as_ref() else {
                return Err(GraphError::MalformedEdge { index });
            };
            let a = to_index(index, a, points.len())?;
            let b = to_index(index, b, points.len())?;
            check_edge(index, a, b, points.len())?;
            pairs.push([a, b]);
        }

        Ok(Self::build(points, &pairs))
    }

    /// Assembles the graph from already validated input.
    fn build(points: Vec<Point3>, pairs: &[[usize; 2]]) -> Self {
        let mut adjacency = vec![Vec::new(); points.len()];
        let edges: Vec<EdgeData> = pairs
            .iter()
            .map(|&[a, b]| {
                let weight = distance(&points[a], &points[b]);
                adjacency[a].push((VertexId(b), weight));
                adjacency[b].push((VertexId(a), weight));
                EdgeData {
                    start: VertexId(a),
                    end: VertexId(b),
                    weight,
                }
            })
            .collect();

        debug!(
            vertices = points.len(),
            edges = edges.len(),
            "built navigation graph"
        );

        Self {
            vertices: points.into_iter().map(VertexData::new).collect(),
            edges,
            adjacency,
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns all vertices, indexed by [`VertexId`].
    #[must_use]
    pub fn vertices(&self) -> &[VertexData] {
        &self.vertices
    }

    /// Returns all edges, indexed by [`EdgeId`].
    #[must_use]
    pub fn edges(&self) -> &[EdgeData] {
        &self.edges
    }

    /// Iterates over every vertex id in index order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId)
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is out of range for this graph.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, GraphError> {
        self.vertices
            .get(id.0)
            .ok_or(GraphError::VertexNotFound(id))
    }

    /// Returns the position of a vertex.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is out of range for this graph.
    pub fn position(&self, id: VertexId) -> Result<Point3, GraphError> {
        self.vertex(id).map(|v| v.point)
    }

    /// Returns a reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is out of range for this graph.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData, GraphError> {
        self.edges.get(id.0).ok_or(GraphError::EdgeNotFound(id.0))
    }

    /// Returns the `(neighbor, weight)` pairs reachable from `id` by one edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is out of range for this graph.
    pub fn neighbors(&self, id: VertexId) -> Result<&[(VertexId, f64)], GraphError> {
        self.adjacency
            .get(id.0)
            .map(Vec::as_slice)
            .ok_or(GraphError::VertexNotFound(id))
    }

    /// Position lookup for ids the graph itself issued.
    pub(crate) fn point(&self, id: VertexId) -> &Point3 {
        &self.vertices[id.0].point
    }
}

fn check_counts(vertices: usize, edges: usize) -> Result<(), GraphError> {
    if vertices < 2 {
        return Err(GraphError::EmptyVertices);
    }
    if edges == 0 {
        return Err(GraphError::EmptyEdges);
    }
    Ok(())
}

fn check_edge(edge: usize, a: usize, b: usize, vertex_count: usize) -> Result<(), GraphError> {
    for v in [a, b] {
        if v >= vertex_count {
            return Err(GraphError::EdgeIndexOutOfRange {
                edge,
                vertex: i64::try_from(v).unwrap_or(i64::MAX),
            });
        }
    }
    if a == b {
        return Err(GraphError::SelfLoop { edge });
    }
    Ok(())
}

fn to_index(edge: usize, raw: i64, vertex_count: usize) -> Result<usize, GraphError> {
    usize::try_from(raw)
        .ok()
        .filter(|&v| v < vertex_count)
        .ok_or(GraphError::EdgeIndexOutOfRange { edge, vertex: raw })
}
