// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::connections::models::ConnectionState;
use crate::domain::shared::models::UserId;

/// The only authority permitted to transition a peer's connection state.
///
/// Every transition runs to completion before the next one starts; all
/// side effects go through the notification feed and the client event
/// dispatcher.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ConnectionsDomainService: Send + Sync {
    /// Sends a connection request to `peer_id`. Only legal while the peer is
    /// in `ConnectionState::None`. Emits a `request_sent` notification and
    /// schedules the simulated remote echo.
    async fn send_request(&self, peer_id: &UserId) -> Result<()>;

    /// Accepts a pending request. Legal from `PendingIncoming`, or from
    /// `PendingSent` when invoked through the simulated incoming
    /// notification. Repeat calls on an `Accepted` peer are a no-op.
    async fn accept_connection(&self, peer_id: &UserId) -> Result<()>;

    /// Declines a pending request and resets the peer to `None`.
    async fn decline_connection(&self, peer_id: &UserId) -> Result<()>;

    /// Tears down an accepted connection. Unilateral and silent: no
    /// notification is emitted.
    async fn disconnect(&self, peer_id: &UserId) -> Result<()>;

    async fn status_of(&self, peer_id: &UserId) -> Result<ConnectionState>;
    async fn accepted_peers(&self) -> Result<Vec<UserId>>;

    /// A peer sent us a connection request (remote event).
    async fn handle_incoming_request(&self, peer_id: &UserId) -> Result<()>;

    /// The delayed single-device echo of our own outgoing request fired.
    /// Emits the `incoming_request` notification carrying the peer as
    /// metadata without touching the state map.
    async fn handle_request_echo(&self, peer_id: &UserId) -> Result<()>;

    /// The remote peer accepted our outgoing request.
    async fn handle_remote_accept(&self, peer_id: &UserId) -> Result<()>;

    async fn clear_cache(&self) -> Result<()>;
}
