use tracing::trace;

use crate::math::{Point3, TOLERANCE};
use crate::shape::{EdgeContext, Shape};

use super::{Occluder, Occlusion};

/// Hides points lying below the upper surface of the convex hull of the
/// shape's vertices.
///
/// The hull's height above `(x, y)` is the largest `z` of any convex
/// combination of vertices that projects onto `(x, y)`. That maximum is
/// attained by a combination of at most three vertices, so it is found by
/// enumerating vertex singles, pairs and triples. The cost is cubic in the
/// vertex count, which suits the small polyhedra drawn on a terminal.
///
/// Exact for convex shapes; for concave shapes it hides points inside
/// dents that the hull covers.
#[derive(Debug, Clone, Copy)]
pub struct HullOccluder {
    tolerance: f64,
}

impl Default for HullOccluder {
    fn default() -> Self {
        Self { tolerance: 1e-6 }
    }
}

impl HullOccluder {
    /// Creates an occluder with the default depth tolerance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how far below the hull surface a point must lie to be hidden.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance.abs();
        self
    }

    /// Returns the depth tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Height of the hull's upper surface above `(x, y)`, or `None` when
    /// `(x, y)` is outside the hull's projection.
    #[must_use]
    pub fn envelope(vertices: &[Point3], x: f64, y: f64) -> Option<f64> {
        let eps = PLANAR_EPS;
        let mut best: Option<f64> = None;
        let mut offer = |z: f64| {
            if best.is_none_or(|b| z > b) {
                best = Some(z);
            }
        };

        for (i, a) in vertices.iter().enumerate() {
            if (a.x - x).abs() < eps && (a.y - y).abs() < eps {
                offer(a.z);
            }

            for (j, b) in vertices.iter().enumerate().skip(i + 1) {
                if let Some(z) = segment_height(a, b, x, y) {
                    offer(z);
                }

                for c in &vertices[(j + 1)..] {
                    if let Some(z) = triangle_height(a, b, c, x, y) {
                        offer(z);
                    }
                }
            }
        }
        best
    }
}

/// Tolerance for containment tests in the projection plane.
const PLANAR_EPS: f64 = 1e-9;

/// 2D cross product: `(ax * by - ay * bx)`.
#[inline]
fn cross_2d(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    ax * by - ay * bx
}

/// Height of segment `a-b` above `(x, y)` if `(x, y)` lies on its projection.
fn segment_height(a: &Point3, b: &Point3, x: f64, y: f64) -> Option<f64> {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len2 = dx * dx + dy * dy;
    if len2 < TOLERANCE * TOLERANCE {
        return None;
    }
    let (qx, qy) = (x - a.x, y - a.y);
    let t = (qx * dx + qy * dy) / len2;
    if !(-PLANAR_EPS..=1.0 + PLANAR_EPS).contains(&t) {
        return None;
    }
    if cross_2d(dx, dy, qx, qy).abs() / len2.sqrt() > PLANAR_EPS {
        return None;
    }
    Some(a.z + t.clamp(0.0, 1.0) * (b.z - a.z))
}

/// Height of triangle `a-b-c` above `(x, y)` if `(x, y)` lies inside its
/// projection.
fn triangle_height(a: &Point3, b: &Point3, c: &Point3, x: f64, y: f64) -> Option<f64> {
    let (abx, aby) = (b.x - a.x, b.y - a.y);
    let (acx, acy) = (c.x - a.x, c.y - a.y);
    let det = cross_2d(abx, aby, acx, acy);
    if det.abs() < TOLERANCE {
        return None;
    }
    let (qx, qy) = (x - a.x, y - a.y);
    let lb = cross_2d(qx, qy, acx, acy) / det;
    let lc = cross_2d(abx, aby, qx, qy) / det;
    let la = 1.0 - lb - lc;
    if la < -PLANAR_EPS || lb < -PLANAR_EPS || lc < -PLANAR_EPS {
        return None;
    }
    Some(la * a.z + lb * b.z + lc * c.z)
}

impl Occluder for HullOccluder {
    fn occlude(&self, shape: &Shape, point: &Point3, context: EdgeContext) -> Occlusion {
        let vertices = shape.vertices();

        // Nothing can be in front of a point at the top of the shape.
        let top = vertices.iter().map(|v| v.z).fold(f64::NEG_INFINITY, f64::max);
        if point.z >= top - self.tolerance {
            return Occlusion::Visible;
        }

        match Self::envelope(vertices, point.x, point.y) {
            Some(z) if z - point.z > self.tolerance => {
                trace!(?point, ?context, envelope = z, "point behind hull");
                Occlusion::Behind
            }
            _ => Occlusion::Visible,
        }
    }
}
