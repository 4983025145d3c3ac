use serde_json::Value;
use thiserror::Error;

use crate::violation::Violation;

/// Errors raised while encoding or decoding violations.
#[derive(Debug, Error)]
pub enum ViolationCodecError {
    /// The violation could not be encoded.
    #[error("failed to encode violation: {0}")]
    Encode(#[source] serde_json::Error),
    /// The input is not a well-formed encoded violation.
    #[error("failed to decode violation: {0}")]
    Decode(#[source] serde_json::Error),
}

impl Violation {
    /// Encodes the violation as compact JSON.
    pub fn to_json(&self) -> Result<String, ViolationCodecError> {
        serde_json::to_string(self).map_err(ViolationCodecError::Encode)
    }

    /// Encodes the violation as a JSON value, for structured log or telemetry sinks.
    pub fn to_json_value(&self) -> Result<Value, ViolationCodecError> {
        serde_json::to_value(self).map_err(ViolationCodecError::Encode)
    }

    /// Decodes a violation previously produced by [`Violation::to_json`].
    pub fn from_json(input: &str) -> Result<Self, ViolationCodecError> {
        serde_json::from_str(input).map_err(ViolationCodecError::Decode)
    }
}
