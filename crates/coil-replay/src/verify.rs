//! Replay validation: re-run the session and compare against the claim.
//!
//! [`Validator::simulate`] drives a [`SimState`] through every recorded
//! frame using the replay's inputs and food list. [`Validator::validate`]
//! then compares the simulated score and length with the values the
//! client claimed. A wall or self collision ends the run early but is not
//! itself a failure: that is how a legitimate game ends.

use std::fmt;

use coil_core::Point;
use coil_sim::{SimState, Xorshift32};
use serde::Serialize;
use tracing::{debug, trace};

use crate::codec::decode_replay;
use crate::types::{DecodedReplay, ReplayRecord};

/// Why a replay was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The buffer did not decode.
    InvalidFormat {
        /// The decoder's description of the problem.
        detail: String,
    },
    /// Simulated score differs from the claimed score.
    ScoreMismatch {
        /// Score in the replay header.
        claimed: u32,
        /// Score reached by the simulation.
        simulated: u32,
    },
    /// Simulated length differs from the claimed length.
    SizeMismatch {
        /// Length in the replay header.
        claimed: u16,
        /// Length reached by the simulation.
        simulated: usize,
    },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat { .. } => write!(f, "Invalid replay format"),
            Self::ScoreMismatch { claimed, simulated } => {
                write!(f, "Score mismatch: expected {claimed}, got {simulated}")
            }
            Self::SizeMismatch { claimed, simulated } => {
                write!(f, "Size mismatch: expected {claimed}, got {simulated}")
            }
        }
    }
}

/// Outcome of validating one replay.
///
/// # Examples
///
/// ```
/// use coil_replay::{verify_replay, Rejection, Verdict};
///
/// let verdict = verify_replay(b"definitely not a replay");
/// assert!(!verdict.is_accepted());
/// assert_eq!(verdict.reason(), "Invalid replay format");
/// assert!(matches!(verdict, Verdict::Rejected(Rejection::InvalidFormat { .. })));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The claim is reproducible from the recorded inputs.
    Accepted,
    /// The claim is not reproducible, or the replay is unreadable.
    Rejected(Rejection),
}

impl Verdict {
    /// True for [`Verdict::Accepted`].
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    /// Human-readable reason: `"OK"` when accepted.
    pub fn reason(&self) -> String {
        match self {
            Verdict::Accepted => "OK".to_string(),
            Verdict::Rejected(r) => r.to_string(),
        }
    }

    /// The `{ accepted, reason }` pair recorded alongside a submission.
    pub fn summary(&self) -> VerdictSummary {
        VerdictSummary {
            accepted: self.is_accepted(),
            reason: self.reason(),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accepted => write!(f, "accepted"),
            Verdict::Rejected(r) => write!(f, "rejected: {r}"),
        }
    }
}

/// Flat, serializable form of a [`Verdict`] for audit records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VerdictSummary {
    /// Whether the replay was accepted.
    pub accepted: bool,
    /// `"OK"` or the rejection reason.
    pub reason: String,
}

/// How a simulation run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndCondition {
    /// Every frame in `total_frames` was simulated.
    FramesExhausted,
    /// The head would have entered the wall ring.
    Wall {
        /// Frame at which the run stopped.
        frame: u32,
        /// The wall cell.
        at: Point,
    },
    /// The head would have entered its own body.
    SelfCollision {
        /// Frame at which the run stopped.
        frame: u32,
        /// The occupied cell.
        at: Point,
    },
}

/// Final state of a simulation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimOutcome {
    /// Score reached.
    pub score: u32,
    /// Snake length reached.
    pub size: usize,
    /// Frames in which the snake actually moved.
    pub frames_simulated: u32,
    /// Why the run stopped.
    pub end: EndCondition,
}

/// Re-simulates replays under the game's rules.
///
/// Holds the seed-derived [`Xorshift32`] for the record being checked. The
/// generator is never drawn from; food comes from the replay itself.
#[derive(Clone, Debug)]
pub struct Validator {
    initial_length: u16,
    rng: Xorshift32,
}

impl Validator {
    /// Snake length at the start of every game.
    pub const DEFAULT_INITIAL_LENGTH: u16 = 3;

    /// A validator for `record`, with its generator seeded from the header.
    pub fn for_record(record: &ReplayRecord) -> Self {
        Self {
            initial_length: Self::DEFAULT_INITIAL_LENGTH,
            rng: Xorshift32::new(record.seed),
        }
    }

    /// Override the starting length.
    pub fn with_initial_length(mut self, initial_length: u16) -> Self {
        self.initial_length = initial_length;
        self
    }

    /// Replace the seed-derived generator.
    pub fn with_rng(mut self, rng: Xorshift32) -> Self {
        self.rng = rng;
        self
    }

    /// Starting length used by [`simulate`](Self::simulate).
    pub fn initial_length(&self) -> u16 {
        self.initial_length
    }

    /// The carried generator.
    pub fn rng(&self) -> &Xorshift32 {
        &self.rng
    }

    /// Run `record` frame by frame and report where the snake ended up.
    ///
    /// Inputs are applied in stored order at the start of their frame;
    /// codes that are not a cardinal direction are skipped. Food is taken
    /// from `food_spawns` in order, one target at a time.
    pub fn simulate(&self, record: &ReplayRecord) -> SimOutcome {
        let board = record.board();
        let mut sim = SimState::new(board.start_position(), self.initial_length);

        let mut events = record.events.iter().peekable();
        let mut foods = record.food_spawns.iter().map(|f| f.position());
        let mut food = foods.next();

        let mut end = EndCondition::FramesExhausted;
        let mut frames_simulated = 0u32;

        for frame in 0..record.total_frames {
            while let Some(ev) = events.next_if(|ev| ev.frame == frame) {
                match ev.direction() {
                    Some(d) => {
                        if !sim.set_direction(d) {
                            trace!(frame, direction = ?d, "reversal ignored");
                        }
                    }
                    None => trace!(frame, code = ev.direction, "unknown direction code skipped"),
                }
            }

            let next = sim.next_head();
            if board.is_wall(next) {
                end = EndCondition::Wall { frame, at: next };
                break;
            }
            if sim.collides_with_self(next) {
                end = EndCondition::SelfCollision { frame, at: next };
                break;
            }

            if food == Some(next) {
                sim.advance(true);
                sim.award(record.difficulty);
                food = foods.next();
            } else {
                sim.advance(false);
            }
            frames_simulated += 1;
        }

        let outcome = SimOutcome {
            score: sim.score(),
            size: sim.size(),
            frames_simulated,
            end,
        };
        debug!(?outcome, "replay simulated");
        outcome
    }

    /// Simulate `record` and compare the result with its claim.
    ///
    /// Score is checked before length, so a replay wrong on both counts
    /// reports the score mismatch.
    pub fn validate(&self, record: &ReplayRecord) -> Verdict {
        let outcome = self.simulate(record);
        if outcome.score != record.final_score {
            return Verdict::Rejected(Rejection::ScoreMismatch {
                claimed: record.final_score,
                simulated: outcome.score,
            });
        }
        if outcome.size != usize::from(record.final_size) {
            return Verdict::Rejected(Rejection::SizeMismatch {
                claimed: record.final_size,
                simulated: outcome.size,
            });
        }
        Verdict::Accepted
    }
}

/// Validate a decoded replay with the default starting length.
///
/// An `Err` from the decoder becomes [`Rejection::InvalidFormat`].
pub fn validate_replay(replay: &DecodedReplay) -> Verdict {
    match replay {
        Ok(record) => Validator::for_record(record).validate(record),
        Err(e) => {
            debug!(error = %e, "replay failed to decode");
            Verdict::Rejected(Rejection::InvalidFormat {
                detail: e.to_string(),
            })
        }
    }
}

/// Decode `bytes` and validate the result.
pub fn verify_replay(bytes: &[u8]) -> Verdict {
    validate_replay(&decode_replay(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReplayError;
    use crate::types::{FoodSpawn, ReplayEvent};
    use coil_core::Direction;

    /// 80x24 board: the snake starts at (12, 18)..(12, 20) heading right.
    fn straight_run(total_frames: u32) -> ReplayRecord {
        ReplayRecord {
            total_frames,
            final_size: 3,
            ..ReplayRecord::default()
        }
    }

    #[test]
    fn no_frames_means_initial_state() {
        let record = straight_run(0);
        let outcome = Validator::for_record(&record).simulate(&record);
        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.size, 3);
        assert_eq!(outcome.frames_simulated, 0);
        assert_eq!(outcome.end, EndCondition::FramesExhausted);
        assert!(validate_replay(&Ok(record)).is_accepted());
    }

    #[test]
    fn straight_run_hits_right_wall() {
        // Head at column 20 reaches column 78 after 58 moves; the 59th
        // move would enter column 79.
        let record = straight_run(1_000);
        let outcome = Validator::for_record(&record).simulate(&record);
        assert_eq!(outcome.frames_simulated, 58);
        assert_eq!(
            outcome.end,
            EndCondition::Wall {
                frame: 58,
                at: Point::new(12, 79)
            }
        );
        assert_eq!(outcome.size, 3);
    }

    #[test]
    fn eating_grows_and_scores_difficulty() {
        let mut record = straight_run(3);
        record.difficulty = 5;
        record.food_spawns = vec![
            FoodSpawn {
                frame: 0,
                x: 12,
                y: 21,
            },
            FoodSpawn {
                frame: 1,
                x: 12,
                y: 23,
            },
        ];
        let outcome = Validator::for_record(&record).simulate(&record);
        assert_eq!(outcome.score, 10);
        assert_eq!(outcome.size, 5);
    }

    #[test]
    fn only_the_active_food_counts() {
        // The second food lies on the path first but is not yet active.
        let mut record = straight_run(4);
        record.food_spawns = vec![
            FoodSpawn {
                frame: 0,
                x: 12,
                y: 24,
            },
            FoodSpawn {
                frame: 0,
                x: 12,
                y: 22,
            },
        ];
        let outcome = Validator::for_record(&record).simulate(&record);
        assert_eq!(outcome.score, 1);
        assert_eq!(outcome.size, 4);
    }

    #[test]
    fn reversal_and_unknown_codes_are_ignored() {
        let mut record = straight_run(2);
        record.events = vec![
            ReplayEvent::new(0, Direction::Left, 0),
            ReplayEvent {
                frame: 0,
                direction: 9,
                delta_ms: 0,
            },
        ];
        let outcome = Validator::for_record(&record).simulate(&record);
        assert_eq!(outcome.end, EndCondition::FramesExhausted);
        assert_eq!(outcome.frames_simulated, 2);
    }

    #[test]
    fn events_after_the_last_frame_never_apply() {
        let mut record = straight_run(3);
        record.events = vec![ReplayEvent::new(3, Direction::Up, 0)];
        record.food_spawns = vec![FoodSpawn {
            frame: 0,
            x: 11,
            y: 23,
        }];
        let outcome = Validator::for_record(&record).simulate(&record);
        assert_eq!(outcome.score, 0);
    }

    #[test]
    fn score_checked_before_size() {
        let mut record = straight_run(5);
        record.final_score = 7;
        record.final_size = 9;
        let verdict = Validator::for_record(&record).validate(&record);
        assert_eq!(
            verdict,
            Verdict::Rejected(Rejection::ScoreMismatch {
                claimed: 7,
                simulated: 0
            })
        );
        assert_eq!(verdict.reason(), "Score mismatch: expected 7, got 0");
    }

    #[test]
    fn size_mismatch_names_both_values() {
        let mut record = straight_run(5);
        record.final_size = 4;
        let verdict = Validator::for_record(&record).validate(&record);
        assert_eq!(verdict.reason(), "Size mismatch: expected 4, got 3");
    }

    #[test]
    fn decode_error_becomes_invalid_format() {
        let verdict = validate_replay(&Err(ReplayError::InvalidMagic));
        assert_eq!(verdict.reason(), "Invalid replay format");
        match verdict {
            Verdict::Rejected(Rejection::InvalidFormat { detail }) => {
                assert!(detail.contains("magic"), "detail: {detail}");
            }
            other => panic!("expected InvalidFormat, got {other:?}"),
        }
    }

    #[test]
    fn initial_length_is_configurable() {
        let mut record = straight_run(1);
        record.final_size = 5;
        let verdict = Validator::for_record(&record)
            .with_initial_length(5)
            .validate(&record);
        assert!(verdict.is_accepted());
    }

    #[test]
    fn generator_is_seeded_but_untouched() {
        let mut record = straight_run(10);
        record.seed = 42;
        let validator = Validator::for_record(&record);
        let _ = validator.validate(&record);
        assert_eq!(validator.rng(), &Xorshift32::new(42));
    }

    #[test]
    fn injected_generator_does_not_change_the_verdict() {
        let record = straight_run(10);
        let a = Validator::for_record(&record).validate(&record);
        let b = Validator::for_record(&record)
            .with_rng(Xorshift32::new(0xFFFF_FFFF))
            .validate(&record);
        assert_eq!(a, b);
    }

    #[test]
    fn summary_serializes_as_flat_pair() {
        let json = serde_json::to_value(Verdict::Accepted.summary()).unwrap();
        assert_eq!(json, serde_json::json!({ "accepted": true, "reason": "OK" }));
    }

    #[test]
    fn tiny_board_stops_on_first_frame() {
        let mut record = straight_run(10);
        // Start column is 0 and column 1 is already the right wall.
        record.board_width = 2;
        record.board_height = 3;
        let outcome = Validator::for_record(&record).simulate(&record);
        assert_eq!(outcome.frames_simulated, 0);
        assert!(matches!(outcome.end, EndCondition::Wall { frame: 0, .. }));
    }
}
