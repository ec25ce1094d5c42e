pub mod distance_3d;

pub use distance_3d::{
    closest_point_on_segment, distance, distance_squared, dot, polyline_length,
};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;
