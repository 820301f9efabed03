// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

/// The relationship between the signed-in user and a single peer.
///
/// Exactly one state holds per peer at any time; peers without a stored entry
/// are `None`. The graph is cyclic: a torn-down connection can be
/// re-established.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum_macros::Display,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    /// No relationship. The peer may be invited.
    #[default]
    None,
    /// We sent a request and are waiting for the peer to accept.
    PendingSent,
    /// The peer sent us a request which we can accept or decline.
    PendingIncoming,
    /// Mutual connection. Chat and calls are unlocked for this peer.
    Accepted,
}

/// Error raised when a caller requests a transition that is not legal from
/// the peer's current state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectionError {
    #[error("cannot {attempted} while the connection is in state '{state}'")]
    InvalidTransition {
        attempted: &'static str,
        state: ConnectionState,
    },
}
