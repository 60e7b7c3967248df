//! Error types for the fallible API edges.
//!
//! Payload anomalies never surface here: they degrade to "nothing to show" and are reported
//! as [`crate::outputs::Notice`] values instead.

/// Errors returned when parsing response text or validating configuration.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum MotionError {
    /// Response text was not valid JSON for the service envelope.
    #[error("parse error: {reason}")]
    Parse { reason: String },

    /// Configuration values out of range.
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },
}

impl From<serde_json::Error> for MotionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            reason: err.to_string(),
        }
    }
}
