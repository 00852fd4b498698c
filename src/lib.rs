pub mod error;
pub mod math;
pub mod occlusion;
pub mod projection;
pub mod render;
pub mod shape;
pub mod surface;

pub use error::{Result, WirecastError};
pub use occlusion::{HullOccluder, NeverOccluded, Occluder, Occlusion};
pub use projection::{map_to_screen, Extent, ScreenPoint, SCALE};
pub use render::{DrawCommand, Glyph, RenderStats, Renderer};
pub use shape::{Edge, EdgeContext, OcclusionMode, Shape, ShapeStyle};
pub use surface::{CharGrid, Surface};
