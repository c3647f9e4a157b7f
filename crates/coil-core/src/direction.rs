//! Cardinal movement directions and their wire codes.

use crate::error::CoreError;

/// One of the four cardinal directions a snake can travel.
///
/// The discriminants are the codes stored in replay input events. They
/// are not contiguous from zero: `0` historically meant "no input", and
/// the game's platform layer numbered the arrows from 2.
///
/// # Examples
///
/// ```
/// use coil_core::Direction;
///
/// assert_eq!(Direction::from_wire(3), Some(Direction::Up));
/// assert_eq!(Direction::Up.wire(), 3);
/// assert!(Direction::Left.is_opposite(Direction::Right));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Direction {
    /// Move one row down (`x + 1`).
    Down = 2,
    /// Move one row up (`x - 1`).
    Up = 3,
    /// Move one column left (`y - 1`).
    Left = 4,
    /// Move one column right (`y + 1`).
    Right = 5,
}

impl Direction {
    /// All four directions, in wire-code order.
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Left,
        Direction::Right,
    ];

    /// Decode a wire code. Returns `None` for anything but `2..=5`.
    pub fn from_wire(code: i8) -> Option<Self> {
        match code {
            2 => Some(Direction::Down),
            3 => Some(Direction::Up),
            4 => Some(Direction::Left),
            5 => Some(Direction::Right),
            _ => None,
        }
    }

    /// The wire code for this direction.
    pub fn wire(self) -> i8 {
        self as i8
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True if `other` is the exact reverse of `self`.
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Returns the `(dx, dy)` unit step for this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

impl TryFrom<i8> for Direction {
    type Error = CoreError;

    fn try_from(code: i8) -> Result<Self, Self::Error> {
        Direction::from_wire(code).ok_or(CoreError::UnknownDirection { code })
    }
}

impl From<Direction> for i8 {
    fn from(d: Direction) -> Self {
        d.wire()
    }
}
