mod grid;

pub use grid::CharGrid;

use crate::projection::{Extent, ScreenPoint};

/// A character grid the renderer paints onto.
///
/// Writes are bounds-agnostic: the renderer may hand out cells outside the
/// grid, and implementors are expected to ignore them.
pub trait Surface {
    /// Current size of the grid. Queried on every render.
    fn extent(&self) -> Extent;

    /// Writes `glyph` at `at`, replacing whatever was there.
    fn put(&mut self, at: ScreenPoint, glyph: char);

    /// Writes `text` starting at `at`, one character per column.
    fn put_str(&mut self, at: ScreenPoint, text: &str) {
        let mut cell = at;
        for glyph in text.chars() {
            self.put(cell, glyph);
            cell.x = cell.x.saturating_add(1);
        }
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn extent(&self) -> Extent {
        (**self).extent()
    }

    fn put(&mut self, at: ScreenPoint, glyph: char) {
        (**self).put(at, glyph);
    }

    fn put_str(&mut self, at: ScreenPoint, text: &str) {
        (**self).put_str(at, text);
    }
}
