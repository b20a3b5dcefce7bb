//! Unified adapter error types.

use thiserror::Error;

/// Top-level adapter error.
///
/// Everything a public operation can fail with. The facade catches these at
/// its boundary, publishes them on the event bus, and hands the host an
/// absent result instead.
#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The dispatcher serialization window elapsed before the request could
    /// be issued. No network I/O was performed.
    #[error("request lock not acquired within {waited_ms} ms")]
    LockTimeout { waited_ms: u64 },
}

/// Network/HTTP-level failure.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned status {status}: {body}")]
    Status { status: u16, body: String },
}

/// The exchange answered, but not with a usable success envelope.
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("exchange reported failure: {message}")]
    Failure { message: String },

    #[error("undecodable response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("success envelope carried no result payload")]
    MissingResult,

    #[error("authenticated call attempted without credentials")]
    MissingCredentials,
}

/// Malformed domain data inside an otherwise valid envelope.
///
/// Carries the exchange field name and the raw offending value so a bad
/// payload can be diagnosed from the error alone.
#[derive(Error, Debug)]
#[error("field `{field}`: {reason}")]
pub struct ParseError {
    pub field: &'static str,
    pub reason: String,
}

impl ParseError {
    pub fn missing(field: &'static str) -> Self {
        Self {
            field,
            reason: "missing required field".to_string(),
        }
    }

    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}
