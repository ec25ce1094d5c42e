mod route;
mod route_batch;
mod route_to_nearest;

pub use route::Route;
pub use route_batch::RouteBatch;
pub use route_to_nearest::{NearestRoute, RouteToNearest};

use super::search::SearchStrategy;

/// Distance beyond which a route gets an approach point in front of it.
pub const DEFAULT_APPROACH_THRESHOLD: f64 = 0.5;

/// Parameters controlling how routes are stitched and searched.
#[derive(Debug, Clone, Copy)]
pub struct RouteParams {
    /// When the first route point is farther than this from the query start,
    /// an approach point is inserted before it. Same units as the vertex
    /// coordinates.
    pub approach_threshold: f64,
    /// Frontier ordering for the vertex-to-vertex search.
    pub strategy: SearchStrategy,
}

impl Default for RouteParams {
    fn default() -> Self {
        Self {
            approach_threshold: DEFAULT_APPROACH_THRESHOLD,
            strategy: SearchStrategy::Dijkstra,
        }
    }
}
