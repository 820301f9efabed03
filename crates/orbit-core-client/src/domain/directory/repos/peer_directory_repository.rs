// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::directory::models::Peer;
use crate::domain::shared::models::UserId;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait PeerDirectoryRepository: Send + Sync {
    async fn get(&self, peer_id: &UserId) -> Result<Option<Peer>>;
    async fn get_all(&self) -> Result<Vec<Peer>>;

    /// Case-insensitive substring match on name and handle.
    async fn search(&self, query: &str) -> Result<Vec<Peer>>;
}
