/// A directed edge between two vertices of a [`Shape`](super::Shape).
///
/// Sampling starts at `start` and walks toward `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Index of the start vertex.
    pub start: usize,
    /// Index of the end vertex.
    pub end: usize,
}

impl Edge {
    /// Creates a new edge from `start` to `end`.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns whether `vertex` is one of this edge's endpoints.
    #[must_use]
    pub fn touches(&self, vertex: usize) -> bool {
        self.start == vertex || self.end == vertex
    }
}

impl From<(usize, usize)> for Edge {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}

/// What a point handed to an [`Occluder`](crate::occlusion::Occluder) was sampled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeContext {
    /// The point lies on this edge; occluders may use its endpoints to
    /// decide self-occlusion at shared vertices.
    Edge(Edge),
    /// The point is a bare vertex with no edge attached.
    Vertex,
}

impl EdgeContext {
    /// Returns the edge, if the point was sampled from one.
    #[must_use]
    pub fn edge(&self) -> Option<Edge> {
        match self {
            Self::Edge(edge) => Some(*edge),
            Self::Vertex => None,
        }
    }
}
