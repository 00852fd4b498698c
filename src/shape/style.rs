use std::num::NonZeroUsize;

/// How the occlusion test gates the points of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OcclusionMode {
    /// No occlusion test; every point is drawn as a front point.
    None,
    /// Occluded edge samples and vertices are dropped entirely.
    #[default]
    Convex,
    /// Occluded edge samples are drawn with the rear symbol underneath the
    /// front points; occluded vertices are dropped.
    Behind,
}

impl OcclusionMode {
    /// Returns whether points are run through the occlusion test at all.
    #[must_use]
    pub fn tests_points(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Per-shape rendering configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    /// Number of segments each edge is split into (`e_density + 1` points
    /// are sampled per edge, endpoints included).
    pub e_density: NonZeroUsize,
    /// Occlusion policy.
    pub occlusion: OcclusionMode,
    /// Whether edges are drawn.
    pub print_edges: bool,
    /// Whether vertex index labels are drawn.
    pub print_vertices: bool,
    /// Glyph for visible edge points.
    pub front_symbol: char,
    /// Glyph for occluded edge points in [`OcclusionMode::Behind`].
    pub rear_symbol: char,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            e_density: NonZeroUsize::new(20).unwrap_or(NonZeroUsize::MIN),
            occlusion: OcclusionMode::default(),
            print_edges: true,
            print_vertices: false,
            front_symbol: '#',
            rear_symbol: '.',
        }
    }
}

impl ShapeStyle {
    /// Sets the number of segments per edge.
    #[must_use]
    pub fn with_density(mut self, e_density: NonZeroUsize) -> Self {
        self.e_density = e_density;
        self
    }

    /// Sets the occlusion policy.
    #[must_use]
    pub fn with_occlusion(mut self, occlusion: OcclusionMode) -> Self {
        self.occlusion = occlusion;
        self
    }

    /// Toggles edge and vertex drawing.
    #[must_use]
    pub fn with_printing(mut self, print_edges: bool, print_vertices: bool) -> Self {
        self.print_edges = print_edges;
        self.print_vertices = print_vertices;
        self
    }

    /// Sets the front and rear edge glyphs.
    #[must_use]
    pub fn with_symbols(mut self, front_symbol: char, rear_symbol: char) -> Self {
        self.front_symbol = front_symbol;
        self.rear_symbol = rear_symbol;
        self
    }

    /// Number of points sampled along a single edge.
    #[must_use]
    pub fn samples_per_edge(&self) -> usize {
        self.e_density.get() + 1
    }
}
