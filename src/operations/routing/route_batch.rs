use rayon::prelude::*;

use crate::error::Result;
use crate::graph::NavGraph;
use crate::math::Point3;

use super::{Route, RouteParams};

/// Evaluates many independent routes against one graph in parallel.
pub struct RouteBatch {
    queries: Vec<(Point3, Point3)>,
    params: RouteParams,
}

impl RouteBatch {
    /// Creates a new `RouteBatch` from `(from, to)` pairs with default
    /// parameters.
    #[must_use]
    pub fn new(queries: Vec<(Point3, Point3)>) -> Self {
        Self {
            queries,
            params: RouteParams::default(),
        }
    }

    /// Overrides the route parameters used for every query.
    #[must_use]
    pub fn with_params(mut self, params: RouteParams) -> Self {
        self.params = params;
        self
    }

    /// Executes all queries, returning one result per query in input order.
    #[must_use]
    pub fn execute(&self, graph: &NavGraph) -> Vec<Result<Vec<Point3>>> {
        self.queries
            .par_iter()
            .map(|&(from, to)| Route::with_params(from, to, self.params).execute(graph))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{NavError, RouteError};
    use crate::operations::test_graphs::{grid_graph, two_islands};

    #[test]
    fn batch_matches_sequential_routes_in_order() {
        let g = grid_graph(4, 6);
        let queries: Vec<(Point3, Point3)> = (0..24_u32)
            .map(|i| {
                let a = f64::from(i % 4);
                let b = f64::from(i / 4);
                (Point3::new(a, 0.0, 1.0), Point3::new(3.0 - a, b, 1.0))
            })
            .collect();

        let batch = RouteBatch::new(queries.clone()).execute(&g);
        assert_eq!(batch.len(), queries.len());
        for ((from, to), result) in queries.into_iter().zip(batch) {
            assert_eq!(result.unwrap(), Route::new(from, to).execute(&g).unwrap());
        }
    }

    #[test]
    fn failures_stay_in_their_slot() {
        let g = two_islands();
        let batch = RouteBatch::new(vec![
            (Point3::new(0.1, 0.0, 0.0), Point3::new(0.9, 0.0, 0.0)),
            (Point3::new(0.1, 0.0, 0.0), Point3::new(0.9, 0.0, 10.0)),
        ])
        .execute(&g);

        assert!(batch[0].is_ok());
        assert!(matches!(
            batch[1],
            Err(NavError::Route(RouteError::NoRouteFound))
        ));
    }
}
