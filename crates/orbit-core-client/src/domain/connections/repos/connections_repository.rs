// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::connections::models::ConnectionState;
use crate::domain::shared::models::UserId;

/// Authoritative map from peer id to connection state. The map is a total
/// function; peers without an entry read as `ConnectionState::None`.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ConnectionsRepository: Send + Sync {
    async fn get(&self, peer_id: &UserId) -> Result<ConnectionState>;
    async fn get_all(&self) -> Result<Vec<(UserId, ConnectionState)>>;

    /// Sets the state for `peer_id` and returns whether the stored state
    /// changed. Setting `ConnectionState::None` removes the entry.
    async fn set(&self, peer_id: &UserId, state: ConnectionState) -> Result<bool>;

    async fn clear(&self) -> Result<()>;
}
