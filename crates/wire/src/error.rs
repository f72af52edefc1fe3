//! Error types for the wire.

use std::time::Duration;
use thiserror::Error;

/// Failures surfaced by a [`Wire`](crate::Wire).
///
/// API facades return these unchanged; nothing above the wire classifies
/// or recovers from them.
#[derive(Debug, Error)]
pub enum WireError {
    /// The other end of the transport went away.
    #[error("connection closed")]
    ConnectionClosed,

    /// The remote runtime rejected the action.
    #[error("remote error: {0}")]
    Remote(String),

    /// No response arrived within the transport's request timeout.
    #[error("no response after {0:?}")]
    Timeout(Duration),

    /// The response did not have the `{ payload: { data } }` shape, or `data`
    /// could not be read as the expected type.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The outgoing payload could not be encoded.
    #[error("failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}
