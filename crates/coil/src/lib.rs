//! Coil: anti-cheat validation of snake game replays.
//!
//! This is the top-level facade crate. It re-exports the sub-crates and
//! adds the pieces a submission host needs: a [`ValidatorConfig`] and a
//! [`SubmissionGate`] that bounds work before any simulation runs.
//!
//! # Quick start
//!
//! ```rust
//! use coil::prelude::*;
//!
//! let record = ReplayRecord {
//!     total_frames: 2,
//!     final_score: 1,
//!     final_size: 4,
//!     food_spawns: vec![FoodSpawn { frame: 0, x: 12, y: 21 }],
//!     ..ReplayRecord::default()
//! };
//! let bytes = encode_replay_to_vec(&record).unwrap();
//!
//! let gate = SubmissionGate::new(ValidatorConfig::default()).unwrap();
//! let verdict = gate.check(&bytes).unwrap();
//! assert!(verdict.is_accepted());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `coil-core` | `Point`, `Direction`, `Board` |
//! | [`sim`] | `coil-sim` | `SimState`, `Xorshift32` |
//! | [`replay`] | `coil-replay` | Codec, `Validator`, `Verdict` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod gate;

pub use config::{ConfigError, ValidatorConfig};
pub use gate::{GateError, SubmissionGate};

/// Board geometry, coordinates, and directions (`coil-core`).
pub use coil_core as types;

/// The deterministic snake simulator (`coil-sim`).
pub use coil_sim as sim;

/// Replay codec and validation (`coil-replay`).
///
/// [`replay::verify_replay`] is the one-call entry point when no limits
/// are needed.
pub use coil_replay as replay;

/// Common imports for typical Coil usage.
///
/// ```rust
/// use coil::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use coil_core::{Board, Direction, Point};

    // Replay data and codec
    pub use coil_replay::{
        decode_replay, encode_replay_to_vec, DecodedReplay, FoodSpawn, ReplayError,
        ReplayEvent, ReplayRecord,
    };

    // Validation
    pub use coil_replay::{verify_replay, Rejection, Validator, Verdict, VerdictSummary};

    // Host layer
    pub use crate::{GateError, SubmissionGate, ValidatorConfig};
}
