use crate::graph::{NavGraph, VertexId};
use crate::math::{closest_point_on_segment, distance_squared, Point3};

/// The graph feature a query point snapped onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// The query point coincides exactly with this vertex.
    Vertex(VertexId),
    /// The snapped point lies on the segment between these two vertices.
    Edge(VertexId, VertexId),
}

impl Anchor {
    /// Iterates over the one or two bounding vertices of the feature.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        let pair = match *self {
            Self::Vertex(v) => [Some(v), None],
            Self::Edge(a, b) => [Some(a), Some(b)],
        };
        pair.into_iter().flatten()
    }

    /// Returns whether `vertex` bounds this feature.
    #[must_use]
    pub fn contains(&self, vertex: VertexId) -> bool {
        match *self {
            Self::Vertex(v) => v == vertex,
            Self::Edge(a, b) => a == vertex || b == vertex,
        }
    }
}

/// Result of a nearest-feature query.
#[derive(Debug, Clone, Copy)]
pub struct LocateResult {
    /// The closest point on the graph.
    pub point: Point3,
    /// The vertex or edge the point lies on.
    pub anchor: Anchor,
    /// The distance from the query point to the snapped point.
    pub distance: f64,
}

/// Snaps an arbitrary point onto the closest point of any graph edge.
pub struct Locate {
    point: Point3,
}

impl Locate {
    /// Creates a new `Locate` query.
    #[must_use]
    pub fn new(point: Point3) -> Self {
        Self { point }
    }

    /// Executes the query with an exhaustive scan over all edges.
    ///
    /// A query point exactly equal to an edge endpoint (bit-for-bit, in edge
    /// order) is returned immediately with that single vertex as anchor, even
    /// if a projection onto a later edge would be numerically closer.
    /// Otherwise the strictly closest projection wins; on ties the earlier edge
    /// is kept.
    #[must_use]
    pub fn execute(&self, graph: &NavGraph) -> LocateResult {
        let p = self.point;
        let edges = graph.edges();

        // Seeded from the first edge's first endpoint.
        let seed = &edges[0];
        let mut best_point = *graph.point(seed.start);
        let mut best_dist_sq = distance_squared(&p, &best_point);
        let mut best_anchor = Anchor::Edge(seed.start, seed.end);

        for edge in edges {
            let a = graph.point(edge.start);
            let b = graph.point(edge.end);

            if p == *a {
                return exact(edge.start, *a);
            }
            if p == *b {
                return exact(edge.end, *b);
            }

            let candidate = closest_point_on_segment(&p, a, b);
            let d = distance_squared(&p, &candidate);
            if d < best_dist_sq {
                best_point = candidate;
                best_dist_sq = d;
                best_anchor = Anchor::Edge(edge.start, edge.end);
            }
        }

        LocateResult {
            point: best_point,
            anchor: best_anchor,
            distance: best_dist_sq.sqrt(),
        }
    }
}

fn exact(vertex: VertexId, point: Point3) -> LocateResult {
    LocateResult {
        point,
        anchor: Anchor::Vertex(vertex),
        distance: 0.0,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::operations::test_graphs::line_graph;

    #[test]
    fn point_on_vertex_snaps_to_that_vertex_alone() {
        let g = line_graph();
        for id in g.vertex_ids() {
            let p = g.position(id).unwrap();
            let r = Locate::new(p).execute(&g);
            assert_eq!(r.point, p);
            assert_eq!(r.anchor, Anchor::Vertex(id));
            assert_eq!(r.anchor.vertices().collect::<Vec<_>>(), vec![id]);
        }
    }

    #[test]
    fn off_graph_point_projects_onto_closest_edge() {
        // [2,3,2] projects to [7/3; 3] on edge (1,2) at distance sqrt(2/3),
        // which beats vertex 1 at distance 1.
        let g = line_graph();
        let r = Locate::new(Point3::new(2.0, 3.0, 2.0)).execute(&g);
        let third = 7.0 / 3.0;
        assert_relative_eq!(r.point, Point3::new(third, third, third), epsilon = 1e-12);
        assert_eq!(r.anchor, Anchor::Edge(VertexId(1), VertexId(2)));
        assert!(r.anchor.contains(VertexId(1)));
        assert_relative_eq!(r.distance, (2.0_f64 / 3.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn exact_match_beats_equally_close_projection() {
        // Vertex 2 is only reached on the second edge; the query sits on it.
        let g = NavGraph::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(4.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
                Point3::new(2.0, 5.0, 0.0),
            ],
            vec![[0, 1], [2, 3]],
        )
        .unwrap();
        let r = Locate::new(Point3::new(2.0, 0.0, 0.0)).execute(&g);
        assert_eq!(r.anchor, Anchor::Vertex(VertexId(2)));
    }

    #[test]
    fn beyond_the_end_clamps_to_endpoint_but_keeps_edge_anchor() {
        let g = line_graph();
        let r = Locate::new(Point3::new(5.0, 5.0, 5.0)).execute(&g);
        assert_eq!(r.point, Point3::new(3.0, 3.0, 3.0));
        assert_eq!(r.anchor, Anchor::Edge(VertexId(1), VertexId(2)));
    }

    #[test]
    fn equidistant_edges_keep_the_first() {
        // Query straight above the shared vertex of two collinear edges at the
        // same distance from both: first edge wins, shared vertex is the point.
        let g = NavGraph::new(
            vec![
                Point3::new(-1.0, 0.0, 0.0),
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
            ],
            vec![[0, 1], [1, 2]],
        )
        .unwrap();
        let r = Locate::new(Point3::new(0.0, 1.0, 0.0)).execute(&g);
        assert_eq!(r.point, Point3::origin());
        assert_eq!(r.anchor, Anchor::Edge(VertexId(0), VertexId(1)));
    }
}
