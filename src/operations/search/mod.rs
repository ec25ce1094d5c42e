mod shortest_path;

pub use shortest_path::{SearchStrategy, ShortestPath, ShortestPathResult};
