use tracing::{debug, trace};

use crate::error::{NavError, Result, RouteError};
use crate::graph::{NavGraph, VertexId};
use crate::math::{distance, Point3};
use crate::operations::query::{Locate, LocateResult};
use crate::operations::search::ShortestPath;

use super::RouteParams;

/// Computes the polyline an agent follows between two arbitrary points.
///
/// Both points are snapped onto the graph with [`Locate`]. If they land on a
/// common vertex or edge the route is stitched directly; otherwise every
/// combination of their bounding vertices is searched and the cheapest
/// candidate, counting the legs from the snapped points, is kept.
pub struct Route {
    from: Point3,
    to: Point3,
    params: RouteParams,
}

impl Route {
    /// Creates a new `Route` query with default parameters.
    #[must_use]
    pub fn new(from: Point3, to: Point3) -> Self {
        Self::with_params(from, to, RouteParams::default())
    }

    /// Creates a new `Route` query with explicit parameters.
    #[must_use]
    pub fn with_params(from: Point3, to: Point3, params: RouteParams) -> Self {
        Self { from, to, params }
    }

    /// Executes the query, returning the ordered route points.
    ///
    /// The route starts at the snapped start point, or at an approach point
    /// when the snapped point is more than
    /// [`approach_threshold`](RouteParams::approach_threshold) away from
    /// `from`. The approach point keeps `from`'s x and z and takes the y of
    /// the first route point. No such point is added at the end.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::NoRouteFound`] if no bounding vertex of the start
    /// feature is connected to any bounding vertex of the end feature.
    pub fn execute(&self, graph: &NavGraph) -> Result<Vec<Point3>> {
        let start = Locate::new(self.from).execute(graph);
        let end = Locate::new(self.to).execute(graph);

        let shared: Vec<VertexId> = start
            .anchor
            .vertices()
            .filter(|&v| end.anchor.contains(v))
            .collect();

        let mut path = if shared.is_empty() {
            self.search(graph, &start, &end)?
        } else {
            debug!(shared = shared.len(), "route stays on a single feature");
            let mut path = vec![start.point];
            if let [v] = shared[..] {
                path.push(*graph.point(v));
            }
            path.push(end.point);
            path
        };

        if let Some(&first) = path.first() {
            if first != self.from && distance(&first, &self.from) > self.params.approach_threshold {
                path.insert(0, Point3::new(self.from.x, first.y, self.from.z));
            }
        }

        Ok(path)
    }

    /// Searches every bounding-vertex pair and stitches the cheapest path.
    fn search(
        &self,
        graph: &NavGraph,
        start: &LocateResult,
        end: &LocateResult,
    ) -> Result<Vec<Point3>> {
        let mut best: Option<(f64, Vec<VertexId>)> = None;
        let mut candidates = 0_usize;

        for s in start.anchor.vertices() {
            for e in end.anchor.vertices() {
                let found = match ShortestPath::new(s, e)
                    .with_strategy(self.params.strategy)
                    .execute(graph)
                {
                    Ok(found) => found,
                    Err(NavError::Route(RouteError::NoPathFound { .. })) => continue,
                    Err(err) => return Err(err),
                };
                candidates += 1;

                let (Some(&first), Some(&last)) = (found.vertices.first(), found.vertices.last())
                else {
                    continue;
                };
                let cost = found.cost
                    + distance(&start.point, graph.point(first))
                    + distance(&end.point, graph.point(last));
                trace!(start = %s, end = %e, cost, "route candidate");

                if best.as_ref().is_none_or(|(best_cost, _)| cost < *best_cost) {
                    best = Some((cost, found.vertices));
                }
            }
        }

        let Some((cost, vertices)) = best else {
            debug!("no bounding vertex pair is connected");
            return Err(RouteError::NoRouteFound.into());
        };
        debug!(candidates, cost, hops = vertices.len() - 1, "route searched");

        let mut points: Vec<Point3> = vertices.iter().map(|&v| *graph.point(v)).collect();
        if points.first() != Some(&start.point) {
            points.insert(0, start.point);
        }
        if points.last() != Some(&end.point) {
            points.push(end.point);
        }
        Ok(points)
    }
}
