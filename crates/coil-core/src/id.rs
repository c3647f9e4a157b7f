//! Grid coordinates.

use std::fmt;

/// A cell on the game board.
///
/// `x` runs along the board height (rows) and `y` along the board width
/// (columns). Both are signed so that cells one step outside the board
/// can be represented while checking walls.
///
/// # Examples
///
/// ```
/// use coil_core::Point;
///
/// let p = Point::new(12, 20).offset((-1, 0));
/// assert_eq!(p, Point::new(11, 20));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    /// Row coordinate.
    pub x: i32,
    /// Column coordinate.
    pub y: i32,
}

impl Point {
    /// Create a point from its row and column.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return this point shifted by `(dx, dy)`.
    pub const fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<(u8, u8)> for Point {
    fn from((x, y): (u8, u8)) -> Self {
        Self {
            x: i32::from(x),
            y: i32::from(y),
        }
    }
}
