use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::trace;

use crate::error::{Result, RouteError};
use crate::graph::{NavGraph, VertexId};
use crate::math::distance;

/// Frontier ordering used by [`ShortestPath`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchStrategy {
    /// Uniform-cost search.
    #[default]
    Dijkstra,
    /// Uniform-cost search guided by the straight-line distance to the target.
    ///
    /// Edge weights are Euclidean distances, so the heuristic never
    /// overestimates and the returned path is still optimal.
    AStar,
}

/// Result of a shortest-path query.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult {
    /// Vertices from start to end, both inclusive.
    pub vertices: Vec<VertexId>,
    /// Sum of the edge weights along the path.
    pub cost: f64,
}

/// Finds the minimum-distance vertex sequence between two vertices.
pub struct ShortestPath {
    start: VertexId,
    end: VertexId,
    strategy: SearchStrategy,
}

/// Frontier entry. `BinaryHeap` is a max-heap, so the ordering is reversed:
/// lowest priority first, then lowest vertex index.
#[derive(Debug, Clone, Copy)]
struct Frontier {
    priority: f64,
    cost: f64,
    vertex: VertexId,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl ShortestPath {
    /// Creates a new `ShortestPath` query using Dijkstra's algorithm.
    #[must_use]
    pub fn new(start: VertexId, end: VertexId) -> Self {
        Self {
            start,
            end,
            strategy: SearchStrategy::default(),
        }
    }

    /// Selects the frontier ordering.
    #[must_use]
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Executes the search.
    ///
    /// Returns `[start]` at zero cost when `start == end`. Ties between equally
    /// short frontiers are resolved towards the lower vertex index, so repeated
    /// calls on the same graph return the same path.
    ///
    /// # Errors
    ///
    /// Returns an error if either vertex is not in the graph, or if no path
    /// connects them.
    pub fn execute(&self, graph: &NavGraph) -> Result<ShortestPathResult> {
        graph.vertex(self.start)?;
        let target = graph.position(self.end)?;

        if self.start == self.end {
            return Ok(ShortestPathResult {
                vertices: vec![self.start],
                cost: 0.0,
            });
        }

        let heuristic = |v: VertexId| match self.strategy {
            SearchStrategy::Dijkstra => 0.0,
            SearchStrategy::AStar => distance(graph.point(v), &target),
        };

        let n = graph.vertex_count();
        let mut best = vec![f64::INFINITY; n];
        let mut came_from: Vec<Option<VertexId>> = vec![None; n];
        let mut visited = vec![false; n];
        let mut open = BinaryHeap::new();

        best[self.start.0] = 0.0;
        open.push(Frontier {
            priority: heuristic(self.start),
            cost: 0.0,
            vertex: self.start,
        });

        while let Some(Frontier { cost, vertex, .. }) = open.pop() {
            if visited[vertex.0] {
                continue;
            }
            visited[vertex.0] = true;

            if vertex == self.end {
                let vertices = reconstruct(&came_from, self.end);
                trace!(
                    start = %self.start,
                    end = %self.end,
                    hops = vertices.len() - 1,
                    cost,
                    "shortest path found"
                );
                return Ok(ShortestPathResult { vertices, cost });
            }

            for &(neighbor, weight) in graph.neighbors(vertex)? {
                if visited[neighbor.0] {
                    continue;
                }
                let next = cost + weight;
                if next < best[neighbor.0] {
                    best[neighbor.0] = next;
                    came_from[neighbor.0] = Some(vertex);
                    open.push(Frontier {
                        priority: next + heuristic(neighbor),
                        cost: next,
                        vertex: neighbor,
                    });
                }
            }
        }

        Err(RouteError::NoPathFound {
            start: self.start,
            end: self.end,
        }
        .into())
    }
}

/// Walks predecessors back from `end` and returns the path in travel order.
fn reconstruct(came_from: &[Option<VertexId>], end: VertexId) -> Vec<VertexId> {
    let mut path = vec![end];
    let mut current = end;
    while let Some(prev) = came_from[current.0] {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
