use crate::graph::{NavGraph, VertexId};
use crate::math::{distance_squared, Point3};

/// Finds the graph vertex closest to a point, ignoring edges.
pub struct NearestVertex {
    point: Point3,
}

impl NearestVertex {
    /// Creates a new `NearestVertex` query.
    #[must_use]
    pub fn new(point: Point3) -> Self {
        Self { point }
    }

    /// Executes the query. On ties the lowest vertex index wins.
    #[must_use]
    pub fn execute(&self, graph: &NavGraph) -> VertexId {
        let mut best = VertexId(0);
        let mut best_dist_sq = f64::INFINITY;
        for (id, vertex) in graph.vertex_ids().zip(graph.vertices()) {
            let d = distance_squared(&self.point, &vertex.point);
            if d < best_dist_sq {
                best = id;
                best_dist_sq = d;
            }
        }
        best
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::test_graphs::line_graph;

    #[test]
    fn picks_middle_vertex_of_diagonal_line() {
        let g = line_graph();
        let v = NearestVertex::new(Point3::new(2.0, 3.0, 2.0)).execute(&g);
        assert_eq!(v, VertexId(1));
        assert_eq!(g.position(v).unwrap(), Point3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn tie_keeps_lowest_index() {
        let g = NavGraph::new(
            vec![Point3::new(-1.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)],
            vec![[0, 1]],
        )
        .unwrap();
        assert_eq!(NearestVertex::new(Point3::origin()).execute(&g), VertexId(0));
    }
}
