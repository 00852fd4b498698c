use std::fmt;

use crate::projection::{Extent, ScreenPoint};

use super::Surface;

/// An in-memory character grid that silently clips out-of-range writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharGrid {
    extent: Extent,
    cells: Vec<char>,
}

impl CharGrid {
    /// Glyph of an empty cell.
    pub const BLANK: char = ' ';

    /// Creates a blank grid of `width` columns and `height` rows.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            extent: Extent::new(width, height),
            cells: vec![Self::BLANK; width * height],
        }
    }

    /// Resets every cell to [`CharGrid::BLANK`].
    pub fn clear(&mut self) {
        self.cells.fill(Self::BLANK);
    }

    /// Changes the grid size, blanking its contents.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.extent = Extent::new(width, height);
        self.cells.clear();
        self.cells.resize(width * height, Self::BLANK);
    }

    /// Returns the glyph at `at`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, at: ScreenPoint) -> Option<char> {
        self.index(at).map(|i| self.cells[i])
    }

    /// Returns row `y` as a string, or `None` outside the grid.
    #[must_use]
    pub fn row(&self, y: usize) -> Option<String> {
        if y >= self.extent.height {
            return None;
        }
        let start = y * self.extent.width;
        Some(self.cells[start..start + self.extent.width].iter().collect())
    }

    /// Number of non-blank cells.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Self::BLANK).count()
    }

    /// Number of cells holding `glyph`.
    #[must_use]
    pub fn count(&self, glyph: char) -> usize {
        self.cells.iter().filter(|&&c| c == glyph).count()
    }

    fn index(&self, at: ScreenPoint) -> Option<usize> {
        let x = usize::try_from(at.x).ok()?;
        let y = usize::try_from(at.y).ok()?;
        (x < self.extent.width && y < self.extent.height).then_some(y * self.extent.width + x)
    }
}

impl Surface for CharGrid {
    fn extent(&self) -> Extent {
        self.extent
    }

    fn put(&mut self, at: ScreenPoint, glyph: char) {
        if let Some(i) = self.index(at) {
            self.cells[i] = glyph;
        }
    }
}

impl fmt::Display for CharGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.extent.width.max(1)).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
