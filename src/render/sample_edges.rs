use tracing::trace;

use crate::math::{segment_point_at, Point3};
use crate::occlusion::Occluder;
use crate::projection::{map_to_screen, Extent, ScreenPoint};
use crate::shape::{Edge, EdgeContext, OcclusionMode, Shape};

/// Screen cells produced by one pass of [`SampleEdges`].
///
/// Reused across frames: each pass clears the buckets before filling them.
#[derive(Debug, Clone, Default)]
pub struct SampleBuckets {
    /// Cells of visible edge samples.
    pub fronts: Vec<ScreenPoint>,
    /// Cells of occluded edge samples kept for the rear pass.
    pub behinds: Vec<ScreenPoint>,
    /// Number of occluded samples dropped outright.
    pub discarded: usize,
}

impl SampleBuckets {
    /// Empties the buckets and makes room for `capacity` samples in each.
    pub fn reset(&mut self, capacity: usize) {
        self.fronts.clear();
        self.behinds.clear();
        self.discarded = 0;
        self.fronts.reserve(capacity);
        self.behinds.reserve(capacity);
    }

    /// Number of buffered samples across both buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fronts.len() + self.behinds.len()
    }

    /// Returns whether no sample was buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Returns the `density + 1` points sampled along `edge`, from its start
/// vertex to its end vertex, both included exactly.
pub(crate) fn edge_samples(shape: &Shape, edge: Edge) -> impl Iterator<Item = Point3> {
    let (start, end) = shape.edge_endpoints(edge);
    let density = shape.style().e_density.get();
    (0..=density).map(move |k| {
        #[allow(clippy::cast_precision_loss)]
        let t = k as f64 / density as f64;
        segment_point_at(&start, &end, t)
    })
}

/// Samples every edge of a shape and buckets the resulting screen cells
/// into front and behind sets.
pub struct SampleEdges {
    extent: Extent,
}

impl SampleEdges {
    /// Creates a new `SampleEdges` pass mapping onto `extent`.
    #[must_use]
    pub fn new(extent: Extent) -> Self {
        Self { extent }
    }

    /// Executes the pass, overwriting `buckets`.
    ///
    /// Edges are walked in descending index order. Under
    /// [`OcclusionMode::None`] the occluder is never consulted; under
    /// [`OcclusionMode::Convex`] occluded samples are dropped; under
    /// [`OcclusionMode::Behind`] they go to `buckets.behinds`.
    pub fn execute<O>(&self, shape: &Shape, occluder: &O, buckets: &mut SampleBuckets)
    where
        O: Occluder + ?Sized,
    {
        let style = shape.style();
        buckets.reset(shape.num_edges() * style.samples_per_edge());

        for &edge in shape.edges().iter().rev() {
            let context = EdgeContext::Edge(edge);
            for point in edge_samples(shape, edge) {
                let occluded = style.occlusion.tests_points()
                    && occluder.occlude(shape, &point, context).is_occluded();

                match (style.occlusion, occluded) {
                    (OcclusionMode::Convex, true) => buckets.discarded += 1,
                    (_, true) => buckets.behinds.push(map_to_screen(&point, self.extent)),
                    (_, false) => buckets.fronts.push(map_to_screen(&point, self.extent)),
                }
            }
            trace!(
                ?edge,
                fronts = buckets.fronts.len(),
                behinds = buckets.behinds.len(),
                "edge sampled"
            );
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::num::NonZeroUsize;

    use approx::assert_relative_eq;

    use super::*;
    use crate::occlusion::{NeverOccluded, Occlusion};
    use crate::shape::ShapeStyle;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn density(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn behind_below_zero(_: &Shape, point: &Point3, _: EdgeContext) -> Occlusion {
        if point.z < 0.0 {
            Occlusion::Behind
        } else {
            Occlusion::Visible
        }
    }

    /// Two parallel edges, one at z = 1 and one at z = -1.
    fn two_edges(mode: OcclusionMode) -> Shape {
        Shape::new(
            vec![
                p(-0.5, 0.0, 1.0),
                p(0.5, 0.0, 1.0),
                p(-0.5, 0.0, -1.0),
                p(0.5, 0.0, -1.0),
            ],
            vec![Edge::new(0, 1), Edge::new(2, 3)],
            ShapeStyle::default()
                .with_density(density(10))
                .with_occlusion(mode),
        )
        .unwrap()
    }

    #[test]
    fn density_four_samples_integer_steps() {
        let shape = Shape::new(
            vec![p(0.0, 0.0, 0.0), p(4.0, 0.0, 0.0)],
            vec![Edge::new(0, 1)],
            ShapeStyle::default().with_density(density(4)),
        )
        .unwrap();

        let xs: Vec<f64> = edge_samples(&shape, Edge::new(0, 1)).map(|q| q.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn endpoints_are_sampled_exactly() {
        let a = p(0.31, -0.77, 0.12);
        let b = p(-0.45, 0.29, -0.83);
        let shape = Shape::new(
            vec![a, b],
            vec![Edge::new(0, 1)],
            ShapeStyle::default().with_density(density(7)),
        )
        .unwrap();

        let samples: Vec<Point3> = edge_samples(&shape, Edge::new(0, 1)).collect();
        assert_eq!(samples.len(), 8);
        assert_eq!(samples[0], a);
        assert_relative_eq!(samples[7], b);
    }

    #[test]
    fn sampling_follows_edge_direction() {
        let shape = Shape::new(
            vec![p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0)],
            vec![Edge::new(1, 0)],
            ShapeStyle::default().with_density(density(2)),
        )
        .unwrap();

        let xs: Vec<f64> = edge_samples(&shape, Edge::new(1, 0)).map(|q| q.x).collect();
        assert_eq!(xs, vec![2.0, 1.0, 0.0]);
    }

    #[test]
    fn none_mode_keeps_every_sample() {
        let shape = two_edges(OcclusionMode::None);
        let mut buckets = SampleBuckets::default();
        SampleEdges::new(Extent::new(80, 24)).execute(&shape, &behind_below_zero, &mut buckets);

        assert_eq!(buckets.fronts.len(), 2 * 11);
        assert!(buckets.behinds.is_empty());
        assert_eq!(buckets.discarded, 0);
    }

    #[test]
    fn none_mode_never_consults_occluder() {
        let shape = two_edges(OcclusionMode::None);
        let mut buckets = SampleBuckets::default();
        let panicking = |_: &Shape, _: &Point3, _: EdgeContext| -> Occlusion {
            panic!("occluder consulted in None mode")
        };
        SampleEdges::new(Extent::new(80, 24)).execute(&shape, &panicking, &mut buckets);
        assert_eq!(buckets.len(), 22);
    }

    #[test]
    fn convex_mode_discards_occluded_samples() {
        let shape = two_edges(OcclusionMode::Convex);
        let mut buckets = SampleBuckets::default();
        SampleEdges::new(Extent::new(80, 24)).execute(&shape, &behind_below_zero, &mut buckets);

        assert_eq!(buckets.fronts.len(), 11);
        assert!(buckets.behinds.is_empty());
        assert_eq!(buckets.discarded, 11);
    }

    #[test]
    fn behind_mode_buckets_occluded_samples() {
        let shape = two_edges(OcclusionMode::Behind);
        let mut buckets = SampleBuckets::default();
        SampleEdges::new(Extent::new(80, 24)).execute(&shape, &behind_below_zero, &mut buckets);

        assert_eq!(buckets.fronts.len(), 11);
        assert_eq!(buckets.behinds.len(), 11);
        assert_eq!(buckets.discarded, 0);
    }

    #[test]
    fn edges_are_walked_in_descending_order() {
        let shape = Shape::new(
            vec![p(-1.0, 0.0, 0.0), p(-0.5, 0.0, 0.0), p(0.5, 0.0, 0.0), p(1.0, 0.0, 0.0)],
            vec![Edge::new(0, 1), Edge::new(2, 3)],
            ShapeStyle::default()
                .with_density(density(1))
                .with_occlusion(OcclusionMode::None),
        )
        .unwrap();
        let extent = Extent::new(80, 24);
        let mut buckets = SampleBuckets::default();
        SampleEdges::new(extent).execute(&shape, &NeverOccluded, &mut buckets);

        let expected: Vec<ScreenPoint> = [2, 3, 0, 1]
            .into_iter()
            .map(|i| map_to_screen(&shape.vertices()[i], extent))
            .collect();
        assert_eq!(buckets.fronts, expected);
    }

    #[test]
    fn buckets_are_reset_between_passes() {
        let shape = two_edges(OcclusionMode::Behind);
        let pass = SampleEdges::new(Extent::new(80, 24));
        let mut buckets = SampleBuckets::default();
        pass.execute(&shape, &behind_below_zero, &mut buckets);
        pass.execute(&shape, &NeverOccluded, &mut buckets);

        assert_eq!(buckets.fronts.len(), 22);
        assert!(buckets.behinds.is_empty());
    }

    #[test]
    fn reset_reserves_both_buckets() {
        let mut buckets = SampleBuckets::default();
        buckets.fronts.push(ScreenPoint::new(1, 1));
        buckets.behinds.push(ScreenPoint::new(2, 2));
        buckets.discarded = 3;
        buckets.reset(64);

        assert!(buckets.is_empty());
        assert_eq!(buckets.discarded, 0);
        assert!(buckets.fronts.capacity() >= 64);
        assert!(buckets.behinds.capacity() >= 64);
    }

    #[test]
    fn shape_without_edges_yields_nothing() {
        let shape = Shape::new(vec![p(0.0, 0.0, 0.0)], vec![], ShapeStyle::default()).unwrap();
        let mut buckets = SampleBuckets::default();
        SampleEdges::new(Extent::new(10, 10)).execute(&shape, &NeverOccluded, &mut buckets);
        assert!(buckets.is_empty());
    }
}
