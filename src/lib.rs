pub mod error;
pub mod graph;
pub mod io;
pub mod math;
pub mod operations;

pub use error::{NavError, Result};
pub use graph::{NavGraph, VertexId};
