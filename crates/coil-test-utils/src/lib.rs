//! Replay builders and fixtures for Coil development.
//!
//! [`ReplayBuilder`] assembles a [`ReplayRecord`] field by field so tests
//! only spell out what they care about. [`fixtures`] holds hand-checked
//! game sessions with known outcomes.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use coil_core::Direction;
use coil_replay::{encode_replay_to_vec, FoodSpawn, ReplayEvent, ReplayRecord};

/// Builder for replay records.
///
/// Starts from [`ReplayRecord::default`]: an 80x24 board at difficulty 1
/// with a claimed length of 3 and no frames.
#[derive(Clone, Debug, Default)]
pub struct ReplayBuilder {
    record: ReplayRecord,
}

impl ReplayBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(mut self, width: u8, height: u8) -> Self {
        self.record.board_width = width;
        self.record.board_height = height;
        self
    }

    pub fn difficulty(mut self, difficulty: u8) -> Self {
        self.record.difficulty = difficulty;
        self
    }

    pub fn seed(mut self, seed: u32) -> Self {
        self.record.seed = seed;
        self
    }

    pub fn total_frames(mut self, frames: u32) -> Self {
        self.record.total_frames = frames;
        self
    }

    pub fn total_time_ms(mut self, ms: u32) -> Self {
        self.record.total_time_ms = ms;
        self
    }

    /// Queue a direction change at `frame`.
    pub fn turn(mut self, frame: u32, direction: Direction) -> Self {
        self.record
            .events
            .push(ReplayEvent::new(frame, direction, 0));
        self
    }

    /// Queue a raw event, including codes outside the direction set.
    pub fn raw_event(mut self, frame: u32, code: i8, delta_ms: u16) -> Self {
        self.record.events.push(ReplayEvent {
            frame,
            direction: code,
            delta_ms,
        });
        self
    }

    /// Append a food placement to the consumption list.
    pub fn food(mut self, frame: u32, x: u8, y: u8) -> Self {
        self.record.food_spawns.push(FoodSpawn { frame, x, y });
        self
    }

    /// Set the claimed final score and length.
    pub fn claim(mut self, score: u32, size: u16) -> Self {
        self.record.final_score = score;
        self.record.final_size = size;
        self
    }

    pub fn build(self) -> ReplayRecord {
        self.record
    }

    /// Encode the record. Panics if it cannot be encoded.
    pub fn encode(self) -> Vec<u8> {
        encode_replay_to_vec(&self.record).expect("test replay must encode")
    }
}
