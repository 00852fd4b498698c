mod label_vertices;
mod sample_edges;

pub use label_vertices::LabelVertices;
pub use sample_edges::{SampleBuckets, SampleEdges};

use tracing::{debug, debug_span};

use crate::occlusion::Occluder;
use crate::projection::{Extent, ScreenPoint};
use crate::shape::{OcclusionMode, Shape};
use crate::surface::Surface;

/// What a [`DrawCommand`] paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// A single edge glyph.
    Symbol(char),
    /// A vertex index, written in decimal starting at the command's cell.
    Label(usize),
}

/// One write to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCommand {
    /// Target cell (first cell for labels).
    pub at: ScreenPoint,
    /// What to write there.
    pub glyph: Glyph,
}

impl DrawCommand {
    /// Creates a new draw command.
    #[must_use]
    pub fn new(at: ScreenPoint, glyph: Glyph) -> Self {
        Self { at, glyph }
    }

    /// Writes the command to `surface`.
    pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S) {
        match self.glyph {
            Glyph::Symbol(c) => surface.put(self.at, c),
            Glyph::Label(index) => surface.put_str(self.at, &index.to_string()),
        }
    }
}

/// Counters describing the last planned frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Visible edge samples drawn with the front symbol.
    pub fronts: usize,
    /// Occluded edge samples drawn with the rear symbol.
    pub behinds: usize,
    /// Occluded edge samples dropped.
    pub discarded: usize,
    /// Vertex labels drawn.
    pub labels: usize,
    /// Vertices hidden by the occlusion test.
    pub hidden_vertices: usize,
}

/// Draws shapes onto a [`Surface`].
///
/// A frame is drawn in three passes, each overwriting the previous one
/// where cells coincide:
///
/// 1. occluded edge samples with the rear symbol (only in
///    [`OcclusionMode::Behind`]),
/// 2. visible edge samples with the front symbol,
/// 3. vertex labels, highest index first.
///
/// Edges and vertices are both walked in descending index order, so lower
/// indices are painted last and win ties.
///
/// Owns the scratch buffers of the edge pass and the draw list, both reused
/// from frame to frame. A renderer draws one frame at a time.
#[derive(Debug, Default)]
pub struct Renderer {
    buckets: SampleBuckets,
    commands: Vec<DrawCommand>,
    stats: RenderStats,
}

impl Renderer {
    /// Creates a renderer with empty buffers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the ordered draw list for `shape` on a grid of size `extent`
    /// without painting it.
    ///
    /// Edges are sampled when the style asks for them and the shape has any;
    /// vertices are labeled when the style asks for them.
    pub fn plan<O>(&mut self, shape: &Shape, occluder: &O, extent: Extent) -> &[DrawCommand]
    where
        O: Occluder + ?Sized,
    {
        let _span = debug_span!(
            "plan",
            vertices = shape.num_vertices(),
            edges = shape.num_edges()
        )
        .entered();

        let style = shape.style();
        self.commands.clear();
        self.stats = RenderStats::default();

        if style.print_edges && shape.num_edges() > 0 {
            SampleEdges::new(extent).execute(shape, occluder, &mut self.buckets);

            if style.occlusion != OcclusionMode::Convex {
                self.commands.extend(
                    self.buckets
                        .behinds
                        .iter()
                        .map(|&at| DrawCommand::new(at, Glyph::Symbol(style.rear_symbol))),
                );
                self.stats.behinds = self.buckets.behinds.len();
            }
            self.commands.extend(
                self.buckets
                    .fronts
                    .iter()
                    .map(|&at| DrawCommand::new(at, Glyph::Symbol(style.front_symbol))),
            );
            self.stats.fronts = self.buckets.fronts.len();
            self.stats.discarded = self.buckets.discarded;
        }

        if style.print_vertices {
            let before = self.commands.len();
            self.stats.hidden_vertices =
                LabelVertices::new(extent).execute(shape, occluder, &mut self.commands);
            self.stats.labels = self.commands.len() - before;
        }

        debug!(
            fronts = self.stats.fronts,
            behinds = self.stats.behinds,
            discarded = self.stats.discarded,
            labels = self.stats.labels,
            hidden_vertices = self.stats.hidden_vertices,
            "frame planned"
        );
        &self.commands
    }

    /// Draws `shape` onto `surface`, reading the surface's extent fresh.
    pub fn render<O, S>(&mut self, shape: &Shape, occluder: &O, surface: &mut S) -> RenderStats
    where
        O: Occluder + ?Sized,
        S: Surface + ?Sized,
    {
        let extent = surface.extent();
        for command in self.plan(shape, occluder, extent) {
            command.paint(surface);
        }
        self.stats
    }

    /// Returns the draw list of the last planned frame.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Returns the counters of the last planned frame.
    #[must_use]
    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    /// Returns the edge buckets of the last frame that sampled edges.
    #[must_use]
    pub fn buckets(&self) -> &SampleBuckets {
        &self.buckets
    }
}
