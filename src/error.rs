// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `HyperHDR` library.
//!
//! All failures are local to one component's control action: a transport
//! failure or an unknown component never affects sibling toggles or the
//! instance lifecycle.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// An outbound request could not be delivered or was rejected.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// A snapshot or wire key named a component outside the fixed registry.
    #[error("unknown component: {0}")]
    UnknownComponent(String),

    /// JSON parsing of a snapshot payload failed.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised by the underlying client when delivering a request.
///
/// These are produced by [`ComponentClient`](crate::client::ComponentClient)
/// implementations and surfaced to the caller unretried. Retry policy, if
/// any, belongs to the client layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The server rejected the request.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// The client has no live connection to the server.
    #[error("client is not connected")]
    NotConnected,

    /// The client's internal request channel was closed.
    #[error("request channel closed")]
    ChannelClosed,

    /// The request was not acknowledged in time.
    #[error("request timed out after {0} ms")]
    Timeout(u64),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_display() {
        let err = TransportError::Rejected("busy".to_string());
        assert_eq!(err.to_string(), "request rejected: busy");
        assert_eq!(
            TransportError::Timeout(2000).to_string(),
            "request timed out after 2000 ms"
        );
    }

    #[test]
    fn error_from_transport_error() {
        let err: Error = TransportError::NotConnected.into();
        assert!(matches!(err, Error::Transport(TransportError::NotConnected)));
    }

    #[test]
    fn unknown_component_display() {
        let err = Error::UnknownComponent("GRABBER2".to_string());
        assert_eq!(err.to_string(), "unknown component: GRABBER2");
    }
}
