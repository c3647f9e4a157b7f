//! Deterministic snake simulator.
//!
//! A minimal state machine that reproduces the game's movement, growth,
//! and self-collision rules one frame at a time. It knows nothing about
//! replays: the orchestrator in `coil-replay` decides, each frame, which
//! direction to apply and whether the snake eats.
//!
//! # Frame protocol
//!
//! 1. [`SimState::set_direction`] for each input scheduled this frame
//! 2. [`SimState::next_head`] to get the candidate cell
//! 3. wall check ([`coil_core::Board::is_wall`]) and
//!    [`SimState::collides_with_self`], both before moving
//! 4. [`SimState::advance`] with `eats = true` to grow, `false` to move

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod rng;
pub mod state;

pub use rng::Xorshift32;
pub use state::SimState;
