//! Validator configuration, validation, and error types.
//!
//! [`ValidatorConfig`] holds the limits a submission host enforces before
//! handing a replay to the simulator. It deserializes with defaults for
//! every missing key, so a host can embed it in its own config file.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`ValidatorConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_replay_bytes` is zero.
    ReplayLimitZero,
    /// `max_total_frames` is zero.
    FrameLimitZero,
    /// `initial_length` is zero.
    InitialLengthZero,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReplayLimitZero => write!(f, "max_replay_bytes must be at least 1"),
            Self::FrameLimitZero => write!(f, "max_total_frames must be at least 1"),
            Self::InitialLengthZero => write!(f, "initial_length must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

// ── ValidatorConfig ────────────────────────────────────────────────

/// Limits and game constants for a [`SubmissionGate`](crate::SubmissionGate).
///
/// # Examples
///
/// ```
/// use coil::ValidatorConfig;
///
/// let config: ValidatorConfig =
///     serde_json::from_str(r#"{ "max_total_frames": 10000 }"#).unwrap();
/// assert_eq!(config.max_total_frames, 10_000);
/// assert_eq!(config.max_replay_bytes, 1 << 20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Largest accepted replay buffer, in bytes. Default: 1 MiB.
    pub max_replay_bytes: usize,
    /// Largest accepted `total_frames`. Default: 2 000 000.
    pub max_total_frames: u32,
    /// Snake length at the start of a game. Default: 3.
    pub initial_length: u16,
}

impl ValidatorConfig {
    /// Default buffer limit. Comfortably above the largest well-formed
    /// replay (65 535 events and 65 535 food entries).
    pub const DEFAULT_MAX_REPLAY_BYTES: usize = 1 << 20;
    /// Default frame limit.
    pub const DEFAULT_MAX_TOTAL_FRAMES: u32 = 2_000_000;

    /// Check that every limit is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_replay_bytes == 0 {
            return Err(ConfigError::ReplayLimitZero);
        }
        if self.max_total_frames == 0 {
            return Err(ConfigError::FrameLimitZero);
        }
        if self.initial_length == 0 {
            return Err(ConfigError::InitialLengthZero);
        }
        Ok(())
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_replay_bytes: Self::DEFAULT_MAX_REPLAY_BYTES,
            max_total_frames: Self::DEFAULT_MAX_TOTAL_FRAMES,
            initial_length: coil_replay::Validator::DEFAULT_INITIAL_LENGTH,
        }
    }
}
