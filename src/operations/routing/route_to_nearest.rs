use tracing::debug;

use crate::error::{NavError, Result, RouteError};
use crate::graph::NavGraph;
use crate::math::{polyline_length, Point3};

use super::{Route, RouteParams};

/// The shortest of several candidate routes.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestRoute {
    /// Index of the chosen destination in the query's destination list.
    pub destination: usize,
    /// The route points.
    pub points: Vec<Point3>,
    /// Polyline length of `points`.
    pub length: f64,
}

/// Routes from one point to whichever destination is closest along the graph.
pub struct RouteToNearest {
    from: Point3,
    destinations: Vec<Point3>,
    params: RouteParams,
}

impl RouteToNearest {
    /// Creates a new `RouteToNearest` query with default parameters.
    #[must_use]
    pub fn new(from: Point3, destinations: Vec<Point3>) -> Self {
        Self {
            from,
            destinations,
            params: RouteParams::default(),
        }
    }

    /// Overrides the route parameters.
    #[must_use]
    pub fn with_params(mut self, params: RouteParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query.
    ///
    /// Unreachable destinations are skipped. On equal lengths the earlier
    /// destination wins.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::EmptyDestinations`] for an empty destination list
    /// and [`RouteError::NoRouteFound`] if none of them is reachable.
    pub fn execute(&self, graph: &NavGraph) -> Result<NearestRoute> {
        if self.destinations.is_empty() {
            return Err(RouteError::EmptyDestinations.into());
        }

        let mut best: Option<NearestRoute> = None;
        for (destination, &to) in self.destinations.iter().enumerate() {
            let points = match Route::with_params(self.from, to, self.params).execute(graph) {
                Ok(points) => points,
                Err(NavError::Route(RouteError::NoRouteFound)) => continue,
                Err(err) => return Err(err),
            };
            let length = polyline_length(&points);
            if best.as_ref().is_none_or(|b| length < b.length) {
                best = Some(NearestRoute {
                    destination,
                    points,
                    length,
                });
            }
        }

        let best = best.ok_or(RouteError::NoRouteFound)?;
        debug!(
            destination = best.destination,
            length = best.length,
            "nearest destination chosen"
        );
        Ok(best)
    }
}
