//! Error types for the fallible edges of the crate.
//!
//! Summarization itself never fails on string input; errors only come from
//! loading configuration and from the native-messaging bridge.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable, machine-readable error codes.
///
/// Serialized as snake_case strings so bridge clients can match on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidDamping,
    InvalidIterations,
    InvalidInputLength,
    InputLengthTooLarge,
    InvalidConfigJson,
    Io,
    InvalidMessageJson,
    FrameTooLarge,
    TruncatedFrame,
}

impl ErrorCode {
    /// Returns the string form used in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidDamping => "invalid_damping",
            Self::InvalidIterations => "invalid_iterations",
            Self::InvalidInputLength => "invalid_input_length",
            Self::InputLengthTooLarge => "input_length_too_large",
            Self::InvalidConfigJson => "invalid_config_json",
            Self::Io => "io",
            Self::InvalidMessageJson => "invalid_message_json",
            Self::FrameTooLarge => "frame_too_large",
            Self::TruncatedFrame => "truncated_frame",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejected [`SummarizerConfig`](crate::config::SummarizerConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("damping must be a finite value in [0, 1], got {0}")]
    InvalidDamping(f64),

    #[error("iterations must be at least 1")]
    ZeroIterations,

    #[error("max_input_length must be at least 1")]
    ZeroInputLength,

    #[error("max_input_length {requested} exceeds this host's limit of {limit}")]
    InputLengthAboveLimit { requested: usize, limit: usize },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidDamping(_) => ErrorCode::InvalidDamping,
            Self::ZeroIterations => ErrorCode::InvalidIterations,
            Self::ZeroInputLength => ErrorCode::InvalidInputLength,
            Self::InputLengthAboveLimit { .. } => ErrorCode::InputLengthTooLarge,
            Self::Json(_) => ErrorCode::InvalidConfigJson,
        }
    }

    /// A short suggestion for fixing the problem, if there is one.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::InvalidDamping(_) => Some("0.85 is the usual TextRank damping"),
            Self::ZeroIterations => Some("TextRank uses 30 rounds"),
            Self::ZeroInputLength => Some("the default input limit is 10000 characters"),
            Self::InputLengthAboveLimit { .. } => {
                Some("omit maxInputLength or start the host with a larger --max-input-length")
            }
            Self::Json(_) => None,
        }
    }

    /// The error message followed by its hint, if any
    pub fn detail(&self) -> String {
        match self.hint() {
            Some(hint) => format!("{self} (hint: {hint})"),
            None => self.to_string(),
        }
    }
}

/// Failure reading or writing a native-messaging frame.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("I/O error on message stream: {0}")]
    Io(#[from] std::io::Error),

    #[error("message is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("frame of {len} bytes exceeds the {limit}-byte limit")]
    FrameTooLarge { len: usize, limit: usize },

    #[error("stream ended {missing} bytes short of a {expected}-byte frame")]
    TruncatedFrame { expected: usize, missing: usize },
}

impl BridgeError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Io(_) => ErrorCode::Io,
            Self::Json(_) => ErrorCode::InvalidMessageJson,
            Self::FrameTooLarge { .. } => ErrorCode::FrameTooLarge,
            Self::TruncatedFrame { .. } => ErrorCode::TruncatedFrame,
        }
    }
}
