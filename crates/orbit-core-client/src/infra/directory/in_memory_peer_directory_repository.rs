// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::directory::models::Peer;
use crate::domain::directory::repos::PeerDirectoryRepository as PeerDirectoryRepositoryTrait;
use crate::domain::shared::models::UserId;

/// Directory entries are immutable for the session, so no locking is
/// needed beyond construction.
pub struct InMemoryPeerDirectoryRepository {
    peers: Vec<Peer>,
}

impl InMemoryPeerDirectoryRepository {
    pub fn new(peers: Vec<Peer>) -> Self {
        Self { peers }
    }
}

#[async_trait]
impl PeerDirectoryRepositoryTrait for InMemoryPeerDirectoryRepository {
    async fn get(&self, peer_id: &UserId) -> Result<Option<Peer>> {
        Ok(self.peers.iter().find(|p| &p.id == peer_id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Peer>> {
        Ok(self.peers.clone())
    }

    async fn search(&self, query: &str) -> Result<Vec<Peer>> {
        if query.trim().is_empty() {
            return Ok(vec![]);
        }
        Ok(self
            .peers
            .iter()
            .filter(|p| p.matches_query(query))
            .cloned()
            .collect())
    }
}
