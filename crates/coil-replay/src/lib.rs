//! Replay decoding and score validation for Coil.
//!
//! Takes the binary replay a client uploads with a score submission,
//! decodes it, re-simulates the game from the recorded inputs, and
//! decides whether the claimed score and length are reproducible.
//!
//! # Architecture
//!
//! - [`decode_replay`] turns bytes into a [`DecodedReplay`], tolerating
//!   truncated tails
//! - [`encode_replay`] writes a [`ReplayRecord`] back out (clients, tests)
//! - [`Validator`] runs the simulation and produces a [`Verdict`]
//! - [`verify_replay`] chains the two for the common case
//!
//! # Format
//!
//! All integers are big-endian.
//!
//! ```text
//! [MAGIC "SNRP"] [VERSION u8] [seed u32] [difficulty u8]
//! [board_width u8] [board_height u8] [final_score u32] [final_size u16]
//! [total_frames u32] [total_time_ms u32] [event_count u16]
//! [Event 1] ... [Event N]      frame u32, direction i8, delta_ms u16
//! [food_count u16]
//! [Food 1] ... [Food M]        frame u32, x u8, y u8
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod types;
pub mod verify;

pub use codec::{decode_replay, encode_replay, encode_replay_to_vec};
pub use error::{ReplayError, ReplayList};
pub use types::{DecodedReplay, FoodSpawn, ReplayEvent, ReplayRecord};
pub use verify::{
    validate_replay, verify_replay, EndCondition, Rejection, SimOutcome, Validator, Verdict,
    VerdictSummary,
};

/// Magic bytes at the start of every replay.
pub const MAGIC: [u8; 4] = *b"SNRP";

/// The only format version this build reads and writes.
pub const FORMAT_VERSION: u8 = 1;
