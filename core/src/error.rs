//! Error types for the fetch wrapper.
//!
//! # Design
//! Only failures of the wrapper itself are errors: a payload that cannot
//! be serialized, or a transport-level failure (connect, DNS, timeout).
//! HTTP error statuses are not mapped here — 4xx/5xx responses resolve
//! as ordinary `HttpResponse` values and callers branch on `status`.

use std::fmt;

/// Errors returned by `compose_request` and `execute`.
#[derive(Debug)]
pub enum FetchError {
    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// The request never produced a response (connection refused, DNS
    /// failure, timeout, or a malformed target URL).
    Transport(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Serialization(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            FetchError::Transport(msg) => {
                write!(f, "transport failed: {msg}")
            }
        }
    }
}

impl std::error::Error for FetchError {}
