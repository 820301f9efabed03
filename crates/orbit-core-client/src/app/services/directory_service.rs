// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use futures::future::join_all;

use crate::app::deps::{
    AppDependencies, DynConnectionsDomainService, DynPeerDirectoryRepository,
};
use crate::app::dtos::Contact;
use crate::domain::directory::models::Peer;
use crate::dtos::UserId;

pub struct DirectoryService {
    connections_domain_service: DynConnectionsDomainService,
    peer_directory_repo: DynPeerDirectoryRepository,
}

impl From<&AppDependencies> for DirectoryService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            connections_domain_service: deps.connections_domain_service.clone(),
            peer_directory_repo: deps.peer_directory_repo.clone(),
        }
    }
}

impl DirectoryService {
    pub async fn load_contacts(&self) -> Result<Vec<Contact>> {
        let peers = self.peer_directory_repo.get_all().await?;
        Ok(join_all(peers.into_iter().map(|p| self.enrich_peer(p))).await)
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Contact>> {
        let peers = self.peer_directory_repo.search(query).await?;
        Ok(join_all(peers.into_iter().map(|p| self.enrich_peer(p))).await)
    }

    pub async fn get(&self, peer_id: &UserId) -> Result<Option<Contact>> {
        let Some(peer) = self.peer_directory_repo.get(peer_id).await? else {
            return Ok(None);
        };
        Ok(Some(self.enrich_peer(peer).await))
    }
}

impl DirectoryService {
    /// Attaches the connection state to a directory peer. A failed lookup
    /// degrades to `None` rather than failing the whole listing.
    async fn enrich_peer(&self, peer: Peer) -> Contact {
        let connection_state = self
            .connections_domain_service
            .status_of(&peer.id)
            .await
            .unwrap_or_default();

        Contact {
            id: peer.id,
            name: peer.name,
            handle: peer.handle,
            availability: peer.availability,
            initials: peer.initials,
            expertise: peer.expertise,
            bio: peer.bio,
            connection_state,
        }
    }
}
