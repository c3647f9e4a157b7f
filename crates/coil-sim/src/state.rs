//! Snake body, heading, and score for one simulated session.

use std::collections::VecDeque;

use coil_core::{Direction, Point};

/// Mutable simulation state, scoped to a single validation run.
///
/// The body is stored oldest segment first with the head last, so moving
/// is a `push_back` of the new head plus a `pop_front` of the tail. The
/// body always holds at least one cell.
///
/// # Examples
///
/// ```
/// use coil_core::{Direction, Point};
/// use coil_sim::SimState;
///
/// let mut sim = SimState::new(Point::new(12, 20), 3);
/// assert_eq!(sim.head(), Point::new(12, 20));
/// assert_eq!(sim.tail(), Point::new(12, 18));
///
/// assert!(!sim.set_direction(Direction::Left)); // reversal refused
/// assert!(sim.set_direction(Direction::Up));
/// assert_eq!(sim.next_head(), Point::new(11, 20));
///
/// sim.advance(true);
/// assert_eq!(sim.size(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimState {
    body: VecDeque<Point>,
    direction: Direction,
    score: u32,
}

impl SimState {
    /// Build a snake of `initial_length` cells whose head is at `start`.
    ///
    /// The body runs straight back along the column axis from the head,
    /// so the snake initially faces [`Direction::Right`] with its tail at
    /// `start.y - (initial_length - 1)`. A length of zero is treated as 1.
    pub fn new(start: Point, initial_length: u16) -> Self {
        let len = i32::from(initial_length.max(1));
        let body = (0..len)
            .map(|i| Point::new(start.x, start.y - (len - 1 - i)))
            .collect();
        Self {
            body,
            direction: Direction::Right,
            score: 0,
        }
    }

    /// Current heading.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Points accumulated so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of body cells, head included.
    pub fn size(&self) -> usize {
        self.body.len()
    }

    /// The newest body cell.
    pub fn head(&self) -> Point {
        self.body[self.body.len() - 1]
    }

    /// The oldest body cell.
    pub fn tail(&self) -> Point {
        self.body[0]
    }

    /// Body cells from tail to head.
    pub fn body(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    /// Change heading. Refuses an exact reversal and returns `false`,
    /// leaving the heading untouched.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// The cell the head would enter on the next [`advance`](Self::advance).
    pub fn next_head(&self) -> Point {
        self.head().offset(self.direction.offset())
    }

    /// True if `pos` is occupied by the body as it stands now.
    ///
    /// Call before [`advance`](Self::advance): the tail still counts even
    /// though a non-eating move is about to vacate it.
    pub fn collides_with_self(&self, pos: Point) -> bool {
        self.body.contains(&pos)
    }

    /// Move the head one cell. Growth keeps the tail; otherwise it is dropped.
    pub fn advance(&mut self, eats: bool) {
        let head = self.next_head();
        self.body.push_back(head);
        if !eats {
            self.body.pop_front();
        }
    }

    /// Add `points` to the score, saturating at `u32::MAX`.
    pub fn award(&mut self, points: u8) {
        self.score = self.score.saturating_add(u32::from(points));
    }
}
