mod hull;

pub use hull::HullOccluder;

use crate::math::Point3;
use crate::shape::{EdgeContext, Shape};

/// Classification of a single point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occlusion {
    /// Nothing of the shape lies in front of the point.
    Visible,
    /// The point is hidden behind the shape's own geometry.
    Behind,
}

impl Occlusion {
    /// Returns whether the point is hidden.
    #[must_use]
    pub fn is_occluded(self) -> bool {
        matches!(self, Self::Behind)
    }
}

/// Decides whether points of a shape are hidden behind the shape itself.
///
/// The viewer looks down the `-z` axis from `+z`: larger `z` is closer.
pub trait Occluder {
    /// Classifies `point`, which was taken from `shape` as described by
    /// `context`.
    fn occlude(&self, shape: &Shape, point: &Point3, context: EdgeContext) -> Occlusion;
}

impl<F> Occluder for F
where
    F: Fn(&Shape, &Point3, EdgeContext) -> Occlusion,
{
    fn occlude(&self, shape: &Shape, point: &Point3, context: EdgeContext) -> Occlusion {
        self(shape, point, context)
    }
}

/// An occluder that never hides anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverOccluded;

impl Occluder for NeverOccluded {
    fn occlude(&self, _shape: &Shape, _point: &Point3, _context: EdgeContext) -> Occlusion {
        Occlusion::Visible
    }
}
