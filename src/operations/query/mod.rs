mod locate;
mod nearest_vertex;

pub use locate::{Anchor, Locate, LocateResult};
pub use nearest_vertex::NearestVertex;
