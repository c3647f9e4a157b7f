//! Board geometry: walls and the snake's starting cell.

use crate::id::Point;

/// A rectangular board whose outermost ring of cells is wall.
///
/// Rows (`x`) are bounded by `height`, columns (`y`) by `width`. A cell is
/// playable only if `0 < x < height - 1` and `0 < y < width - 1`.
///
/// `Board` accepts any dimensions, including zero. A zero-sized board has
/// no playable cell, so every move hits a wall. The replay decoder rejects
/// such boards before they reach the simulator.
///
/// # Examples
///
/// ```
/// use coil_core::{Board, Point};
///
/// let board = Board::new(80, 24);
/// assert_eq!(board.start_position(), Point::new(12, 20));
/// assert!(board.is_wall(Point::new(0, 5)));
/// assert!(board.is_wall(Point::new(5, 79)));
/// assert!(!board.is_wall(Point::new(22, 78)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    width: u8,
    height: u8,
}

impl Board {
    /// Create a board `width` columns wide and `height` rows tall.
    pub const fn new(width: u8, height: u8) -> Self {
        Self { width, height }
    }

    /// Number of columns.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// True if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The cell the snake's head starts on: `(height / 2, width / 4)`.
    pub fn start_position(&self) -> Point {
        Point::new(i32::from(self.height / 2), i32::from(self.width / 4))
    }

    /// True if `p` lies on or beyond the wall ring.
    pub fn is_wall(&self, p: Point) -> bool {
        let max_x = i32::from(self.height) - 1;
        let max_y = i32::from(self.width) - 1;
        p.x <= 0 || p.x >= max_x || p.y <= 0 || p.y >= max_y
    }

    /// Number of playable (non-wall) cells.
    pub fn interior_cells(&self) -> usize {
        let rows = usize::from(self.height).saturating_sub(2);
        let cols = usize::from(self.width).saturating_sub(2);
        rows * cols
    }
}
