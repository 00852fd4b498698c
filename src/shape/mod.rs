mod edge;
mod style;

pub use edge::{Edge, EdgeContext};
pub use style::{OcclusionMode, ShapeStyle};

use nalgebra::{Rotation3, Unit};

use crate::error::{Result, ShapeError, TransformError};
use crate::math::{Point3, Vector3, TOLERANCE};

/// A wireframe polyhedron: an ordered vertex set, an ordered edge set and
/// the style used to draw them.
///
/// Vertex and edge order is meaningful. Both are drawn in descending index
/// order, so lower indices end up on top where they overlap.
#[derive(Debug, Clone)]
pub struct Shape {
    vertices: Vec<Point3>,
    edges: Vec<Edge>,
    style: ShapeStyle,
}

impl Shape {
    /// Creates a shape, checking that every edge joins two distinct,
    /// existing vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if a vertex coordinate is not finite, an edge
    /// references a missing vertex, or an edge has zero length.
    pub fn new(vertices: Vec<Point3>, edges: Vec<Edge>, style: ShapeStyle) -> Result<Self> {
        if let Some(vertex) = vertices
            .iter()
            .position(|p| !p.coords.iter().all(|c| c.is_finite()))
        {
            return Err(ShapeError::NonFiniteVertex { vertex }.into());
        }

        let num_vertices = vertices.len();
        for (i, edge) in edges.iter().enumerate() {
            for vertex in [edge.start, edge.end] {
                if vertex >= num_vertices {
                    return Err(ShapeError::VertexOutOfRange {
                        edge: i,
                        vertex,
                        num_vertices,
                    }
                    .into());
                }
            }
            if (vertices[edge.end] - vertices[edge.start]).norm() < TOLERANCE {
                return Err(ShapeError::DegenerateEdge { edge: i }.into());
            }
        }

        Ok(Self {
            vertices,
            edges,
            style,
        })
    }

    /// Returns the vertex positions.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Returns the edges.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the rendering style.
    #[must_use]
    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }

    /// Returns the rendering style for modification.
    pub fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }

    /// Number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns the positions of an edge's start and end vertices.
    ///
    /// The edge must belong to this shape.
    #[must_use]
    pub(crate) fn edge_endpoints(&self, edge: Edge) -> (Point3, Point3) {
        (self.vertices[edge.start], self.vertices[edge.end])
    }

    /// Rotates every vertex by `angle` radians around an axis through the
    /// origin.
    ///
    /// # Errors
    ///
    /// Returns an error if the axis is zero-length, or if the angle or an
    /// axis component is not finite. The shape is left untouched on error.
    pub fn rotate(&mut self, axis: Vector3, angle: f64) -> Result<()> {
        if !angle.is_finite() || !axis.iter().all(|c| c.is_finite()) {
            return Err(TransformError::NonFinite.into());
        }
        let axis = Unit::try_new(axis, TOLERANCE).ok_or(TransformError::ZeroAxis)?;
        let rotation = Rotation3::from_axis_angle(&axis, angle);
        for vertex in &mut self.vertices {
            *vertex = rotation * *vertex;
        }
        Ok(())
    }
}
