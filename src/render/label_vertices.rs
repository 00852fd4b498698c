use crate::occlusion::Occluder;
use crate::projection::{map_to_screen, Extent};
use crate::shape::{EdgeContext, Shape};

use super::{DrawCommand, Glyph};

/// Labels every visible vertex of a shape with its index.
pub struct LabelVertices {
    extent: Extent,
}

impl LabelVertices {
    /// Creates a new `LabelVertices` pass mapping onto `extent`.
    #[must_use]
    pub fn new(extent: Extent) -> Self {
        Self { extent }
    }

    /// Executes the pass, appending one label per visible vertex to `out`
    /// in descending index order, and returns how many vertices were hidden.
    ///
    /// Vertices are only tested when the shape's occlusion mode is not
    /// [`OcclusionMode::None`](crate::shape::OcclusionMode::None); hidden
    /// vertices are skipped in every other mode.
    pub fn execute<O>(&self, shape: &Shape, occluder: &O, out: &mut Vec<DrawCommand>) -> usize
    where
        O: Occluder + ?Sized,
    {
        let tests_points = shape.style().occlusion.tests_points();
        let mut hidden = 0;

        for (index, vertex) in shape.vertices().iter().enumerate().rev() {
            if tests_points && occluder.occlude(shape, vertex, EdgeContext::Vertex).is_occluded() {
                hidden += 1;
                continue;
            }
            out.push(DrawCommand::new(
                map_to_screen(vertex, self.extent),
                Glyph::Label(index),
            ));
        }
        hidden
    }
}
