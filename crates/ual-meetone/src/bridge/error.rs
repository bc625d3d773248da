/*
[INPUT]:  Bridge transport failures and unusable bridge responses
[OUTPUT]: BridgeError values used as envelope causes
[POS]:    Bridge layer - error types for wallet bridge calls
[UPDATE]: When the bridge reports new failure modes
*/

use thiserror::Error;

/// Failure of a single wallet bridge request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// The bridge answered without an error but also without data
    #[error("No result returned")]
    NoResult,

    /// The bridge answered with a non-success status code
    #[error("Bridge rejected the request (code {code})")]
    Rejected { code: i64 },

    /// The request could not be built from the caller's input
    #[error("Invalid bridge payload: {0}")]
    InvalidPayload(String),

    /// The bridge call itself failed
    #[error("Bridge transport error: {0}")]
    Transport(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for BridgeError {
    fn from(err: serde_json::Error) -> Self {
        BridgeError::Serialization(err.to_string())
    }
}
