//! Benchmark profiles for the Coil replay validator.
//!
//! - [`looping_replay`]: an honest session of any length on the default
//!   board, with the snake circling a fixed rectangle and eating now and
//!   then

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use coil_core::Direction;
use coil_replay::{FoodSpawn, ReplayEvent, ReplayRecord};
use coil_sim::SimState;

/// Rows and columns of the loop the snake follows on an 80x24 board.
const TOP: i32 = 2;
const BOTTOM: i32 = 20;
const LEFT: i32 = 5;
const RIGHT: i32 = 70;

/// Foods placed at most. Keeps the snake shorter than the loop.
pub const MAX_FOODS: u32 = 100;

/// Build an honest replay of `total_frames` frames.
///
/// The snake leaves its start cell heading right and then circles the
/// rectangle rows 2..=20, columns 5..=70. Every `food_every` frames
/// (0 disables food) a food is placed directly ahead of it, up to
/// [`MAX_FOODS`]. The claim matches what the validator will compute.
///
/// Keep `food_every` below the loop length of 166 cells, otherwise the
/// snake can cross a food cell before that food is due.
pub fn looping_replay(total_frames: u32, food_every: u32) -> ReplayRecord {
    let mut record = ReplayRecord {
        seed: 0xC011,
        total_frames,
        total_time_ms: total_frames.saturating_mul(100),
        ..ReplayRecord::default()
    };
    let board = record.board();
    let mut sim = SimState::new(board.start_position(), 3);

    for frame in 0..total_frames {
        let head = sim.head();
        let turn = match sim.direction() {
            Direction::Right if head.y == RIGHT => Some(Direction::Down),
            Direction::Down if head.x == BOTTOM => Some(Direction::Left),
            Direction::Left if head.y == LEFT => Some(Direction::Up),
            Direction::Up if head.x == TOP => Some(Direction::Right),
            _ => None,
        };
        if let Some(d) = turn {
            sim.set_direction(d);
            record.events.push(ReplayEvent::new(frame, d, 100));
        }

        let eats = food_every != 0
            && frame % food_every == 0
            && (record.food_spawns.len() as u32) < MAX_FOODS;
        if eats {
            let at = sim.next_head();
            record.food_spawns.push(FoodSpawn {
                frame,
                x: at.x as u8,
                y: at.y as u8,
            });
            sim.award(record.difficulty);
        }
        sim.advance(eats);
    }

    record.final_score = sim.score();
    record.final_size = sim.size() as u16;
    record
}
