use crate::math::Point3;

/// Fraction of the display height a shape of radius ~1 occupies.
///
/// Character cells are roughly twice as tall as they are wide, so `x` is
/// scaled by the full height and `y` by half of it.
pub const SCALE: f64 = 0.75;

/// Size of a character grid in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Extent {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
}

impl Extent {
    /// Creates a new extent.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

/// A cell on the character grid. May lie outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScreenPoint {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl ScreenPoint {
    /// Creates a new screen point.
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Maps a point's `x`/`y` onto the grid, centering the origin and scaling
/// by the current extent.
///
/// The mapping is orthographic: `z` is dropped.
///
/// Coordinates are truncated toward zero. Any extent, including a zero one,
/// yields a cell; clipping is the surface's job.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn map_to_screen(point: &Point3, extent: Extent) -> ScreenPoint {
    let width = extent.width as f64;
    let height = extent.height as f64;

    let x = point.x * SCALE * height + 0.5 * width;
    let y = -(point.y * SCALE * 0.5 * height) + 0.5 * height;

    ScreenPoint::new(x as i32, y as i32)
}
