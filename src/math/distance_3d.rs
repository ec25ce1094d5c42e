use super::{Point3, Vector3};

/// Returns the Euclidean distance between two points.
#[must_use]
pub fn distance(p: &Point3, q: &Point3) -> f64 {
    distance_squared(p, q).sqrt()
}

/// Returns the squared Euclidean distance between two points.
///
/// Use this where only comparisons are needed to skip the square root.
#[must_use]
pub fn distance_squared(p: &Point3, q: &Point3) -> f64 {
    (p - q).norm_squared()
}

/// Returns the dot product of two vectors.
#[must_use]
pub fn dot(u: &Vector3, v: &Vector3) -> f64 {
    u.dot(v)
}

/// Returns the point on the closed segment `start`→`end` closest to `p`.
///
/// The point is projected onto the infinite line through the segment and the
/// parameter `t` is clamped to `[0, 1]`. A zero-length segment yields `start`.
///
/// The result is blended as `end * t + start * (1 - t)`, so a clamped
/// parameter reproduces the endpoint bit for bit.
#[must_use]
pub fn closest_point_on_segment(p: &Point3, start: &Point3, end: &Point3) -> Point3 {
    let seg = end - start;
    let len_sq = seg.norm_squared();

    let t = if len_sq == 0.0 {
        0.0
    } else {
        (dot(&(p - start), &seg) / len_sq).clamp(0.0, 1.0)
    };

    Point3::from(end.coords * t + start.coords * (1.0 - t))
}

/// Returns the total length of the polyline through `points`.
///
/// Fewer than two points have zero length.
#[must_use]
pub fn polyline_length(points: &[Point3]) -> f64 {
    points.windows(2).map(|w| distance(&w[0], &w[1])).sum()
}
