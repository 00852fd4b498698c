/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Computes the point along the segment `start -> end` at fraction `t`.
///
/// `t = 0` returns `start` and `t = 1` returns `end`, both exactly.
#[must_use]
pub fn segment_point_at(start: &Point3, end: &Point3, t: f64) -> Point3 {
    if t >= 1.0 {
        return *end;
    }
    let dir = end - start;
    start + dir * t
}
