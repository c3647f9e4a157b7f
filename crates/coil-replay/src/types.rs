//! Data types for a decoded replay.

use coil_core::{Board, Direction, Point};

use crate::error::ReplayError;

/// A direction change recorded during play.
///
/// `direction` is kept as the raw wire byte so that an unknown code
/// survives a decode/encode round trip; [`ReplayEvent::direction`]
/// interprets it.
///
/// # Examples
///
/// ```
/// use coil_core::Direction;
/// use coil_replay::ReplayEvent;
///
/// let ev = ReplayEvent::new(4, Direction::Up, 120);
/// assert_eq!(ev.direction(), Some(Direction::Up));
///
/// let junk = ReplayEvent { frame: 4, direction: 0, delta_ms: 0 };
/// assert_eq!(junk.direction(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayEvent {
    /// Frame at which the input takes effect.
    pub frame: u32,
    /// Wire code of the requested direction.
    pub direction: i8,
    /// Milliseconds since the previous input. Informational only.
    pub delta_ms: u16,
}

impl ReplayEvent {
    /// Build an event from a typed direction.
    pub fn new(frame: u32, direction: Direction, delta_ms: u16) -> Self {
        Self {
            frame,
            direction: direction.wire(),
            delta_ms,
        }
    }

    /// The requested direction, or `None` for a non-cardinal code.
    pub fn direction(&self) -> Option<Direction> {
        Direction::from_wire(self.direction)
    }
}

/// A food placement, listed in the order the snake consumes them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FoodSpawn {
    /// Frame at which the food appeared.
    pub frame: u32,
    /// Row of the food cell.
    pub x: u8,
    /// Column of the food cell.
    pub y: u8,
}

impl FoodSpawn {
    /// The food cell as a board coordinate.
    pub fn position(&self) -> Point {
        Point::from((self.x, self.y))
    }
}

/// A fully decoded replay. Immutable once produced by the decoder.
///
/// # Examples
///
/// ```
/// use coil_replay::ReplayRecord;
///
/// let record = ReplayRecord::default();
/// assert_eq!((record.board_width, record.board_height), (80, 24));
/// assert_eq!(record.final_size, 3);
/// assert!(record.events.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplayRecord {
    /// Client RNG seed. Carried but not used to derive anything.
    pub seed: u32,
    /// Points awarded per food eaten.
    pub difficulty: u8,
    /// Board columns.
    pub board_width: u8,
    /// Board rows.
    pub board_height: u8,
    /// Score the client claims.
    pub final_score: u32,
    /// Snake length the client claims.
    pub final_size: u16,
    /// Number of frames to simulate.
    pub total_frames: u32,
    /// Wall-clock duration of the session. Informational only.
    pub total_time_ms: u32,
    /// Direction changes, non-decreasing by frame.
    pub events: Vec<ReplayEvent>,
    /// Food placements in consumption order, non-decreasing by frame.
    pub food_spawns: Vec<FoodSpawn>,
}

impl ReplayRecord {
    /// The board described by the header.
    pub fn board(&self) -> Board {
        Board::new(self.board_width, self.board_height)
    }
}

impl Default for ReplayRecord {
    fn default() -> Self {
        Self {
            seed: 0,
            difficulty: 1,
            board_width: 80,
            board_height: 24,
            final_score: 0,
            final_size: 3,
            total_frames: 0,
            total_time_ms: 0,
            events: Vec::new(),
            food_spawns: Vec::new(),
        }
    }
}

/// Result of decoding a buffer: a usable record, or the reason it is not.
///
/// This is the value the validator branches on; an `Err` is an ordinary
/// "invalid replay" outcome, not a fault.
pub type DecodedReplay = Result<ReplayRecord, ReplayError>;
