//! Size and frame bounds in front of the validator.
//!
//! The simulator has no CPU budget of its own: a header claiming billions
//! of frames would be simulated faithfully. [`SubmissionGate`] applies the
//! [`ValidatorConfig`] limits first and only then runs validation.

use std::error::Error;
use std::fmt;

use coil_replay::{decode_replay, validate_replay, Validator, Verdict};
use tracing::{info, warn};

use crate::config::{ConfigError, ValidatorConfig};

/// A submission refused by the gate before simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateError {
    /// The buffer exceeds `max_replay_bytes`.
    ReplayTooLarge {
        /// Buffer length.
        len: usize,
        /// Configured limit.
        max: usize,
    },
    /// The header's `total_frames` exceeds `max_total_frames`.
    TooManyFrames {
        /// Declared frame count.
        frames: u32,
        /// Configured limit.
        max: u32,
    },
}

impl fmt::Display for GateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReplayTooLarge { len, max } => {
                write!(f, "replay of {len} bytes exceeds limit of {max}")
            }
            Self::TooManyFrames { frames, max } => {
                write!(f, "replay declares {frames} frames, limit is {max}")
            }
        }
    }
}

impl Error for GateError {}

/// Checks submissions against configured limits, then validates them.
///
/// # Examples
///
/// ```
/// use coil::{GateError, SubmissionGate, ValidatorConfig};
///
/// let gate = SubmissionGate::new(ValidatorConfig {
///     max_replay_bytes: 64,
///     ..Default::default()
/// })
/// .unwrap();
///
/// let err = gate.check(&[0u8; 65]).unwrap_err();
/// assert_eq!(err, GateError::ReplayTooLarge { len: 65, max: 64 });
///
/// let verdict = gate.check(b"too short").unwrap();
/// assert_eq!(verdict.reason(), "Invalid replay format");
/// ```
#[derive(Clone, Debug)]
pub struct SubmissionGate {
    config: ValidatorConfig,
}

impl SubmissionGate {
    /// Build a gate, rejecting an unusable configuration.
    pub fn new(config: ValidatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Bound-check `bytes`, then decode and validate.
    ///
    /// An undecodable buffer within the size limit is not a gate error:
    /// it yields a rejected [`Verdict`] like any other invalid replay.
    pub fn check(&self, bytes: &[u8]) -> Result<Verdict, GateError> {
        if bytes.len() > self.config.max_replay_bytes {
            warn!(
                len = bytes.len(),
                max = self.config.max_replay_bytes,
                "replay refused: too large"
            );
            return Err(GateError::ReplayTooLarge {
                len: bytes.len(),
                max: self.config.max_replay_bytes,
            });
        }

        let decoded = decode_replay(bytes);
        let verdict = match &decoded {
            Ok(record) => {
                if record.total_frames > self.config.max_total_frames {
                    warn!(
                        frames = record.total_frames,
                        max = self.config.max_total_frames,
                        "replay refused: too many frames"
                    );
                    return Err(GateError::TooManyFrames {
                        frames: record.total_frames,
                        max: self.config.max_total_frames,
                    });
                }
                Validator::for_record(record)
                    .with_initial_length(self.config.initial_length)
                    .validate(record)
            }
            Err(_) => validate_replay(&decoded),
        };

        info!(
            len = bytes.len(),
            accepted = verdict.is_accepted(),
            reason = %verdict.reason(),
            "replay checked"
        );
        Ok(verdict)
    }
}
